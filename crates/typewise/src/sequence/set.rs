//! Sets of naturals.
//!
//! Keys are compared with [`NatEq`], so a set never holds the same natural
//! twice. Iteration follows insertion order.

use std::marker::PhantomData;

use crate::integral::{Bool, BoolOr, False, Nat, NatEq, Select, Zero};
use crate::iterator::Pos;
use crate::metafn::Substitute;
use crate::sequence::list::{Cons, ListAt, ListPushBack, Nil, TypeList};
use crate::sequence::{
    ClearImpl, EmptyImpl, EraseKeyImpl, FrontImpl, HasKeyImpl, InsertKeyImpl, ItemImpl, Sequence,
    SizeImpl,
};

/// A set over the naturals stored in the list `L`.
///
/// Build sets with [`InsertKey`](crate::sequence::InsertKey) starting from
/// `Set<Nil>` so that the no-duplicates rule holds.
pub struct Set<L = Nil>(PhantomData<L>);

#[derive(Debug, Clone, Copy, Default)]
pub struct SetTag;

/// Whether `K` is an element of a list of naturals.
#[doc(hidden)]
pub trait ContainsNat<K> {
    type Output: Bool;
}

impl<K> ContainsNat<K> for Nil {
    type Output = False;
}

impl<H, T, K> ContainsNat<K> for Cons<H, T>
where
    H: NatEq<K>,
    K: Nat,
    T: ContainsNat<K>,
    <H as NatEq<K>>::Output: BoolOr<<T as ContainsNat<K>>::Output>,
{
    type Output = <<H as NatEq<K>>::Output as BoolOr<<T as ContainsNat<K>>::Output>>::Output;
}

/// A list of naturals without `K`.
#[doc(hidden)]
pub trait RemoveNat<K> {
    type Output;
}

impl<K> RemoveNat<K> for Nil {
    type Output = Nil;
}

impl<H, T, K> RemoveNat<K> for Cons<H, T>
where
    H: NatEq<K>,
    K: Nat,
    T: RemoveNat<K>,
    <H as NatEq<K>>::Output: Select<<T as RemoveNat<K>>::Output, Cons<H, <T as RemoveNat<K>>::Output>>,
{
    type Output = <<H as NatEq<K>>::Output as Select<
        <T as RemoveNat<K>>::Output,
        Cons<H, <T as RemoveNat<K>>::Output>,
    >>::Output;
}

impl<L> Sequence for Set<L>
where
    L: TypeList,
    Zero: NatEq<L::Len>,
{
    type Tag = SetTag;
    type Begin = Pos<Self, Zero>;
    type End = Pos<Self, L::Len>;
}

impl<L: TypeList> SizeImpl<Set<L>> for SetTag {
    type Output = L::Len;
}

impl<L> EmptyImpl<Set<L>> for SetTag
where
    L: TypeList,
    L::Len: NatEq<Zero>,
{
    type Output = <L::Len as NatEq<Zero>>::Output;
}

impl<H, T> FrontImpl<Set<Cons<H, T>>> for SetTag {
    type Output = H;
}

impl<L: ListAt<N>, N> ItemImpl<Set<L>, N> for SetTag {
    type Output = L::Output;
}

impl<L: ContainsNat<K>, K> HasKeyImpl<Set<L>, K> for SetTag {
    type Output = L::Output;
}

impl<L, K> InsertKeyImpl<Set<L>, K> for SetTag
where
    L: ContainsNat<K> + ListPushBack<K>,
    <L as ContainsNat<K>>::Output: Select<Set<L>, Set<<L as ListPushBack<K>>::Output>>,
{
    type Output =
        <<L as ContainsNat<K>>::Output as Select<Set<L>, Set<<L as ListPushBack<K>>::Output>>>::Output;
}

impl<L: RemoveNat<K>, K> EraseKeyImpl<Set<L>, K> for SetTag {
    type Output = Set<L::Output>;
}

impl<L> ClearImpl<Set<L>> for SetTag {
    type Output = Set<Nil>;
}

impl<Args, L> Substitute<Args> for Set<L> {
    type Output = Set<L>;
}
