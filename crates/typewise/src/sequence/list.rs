//! Eagerly stored lists: `Cons<Head, Tail>` ending in `Nil`.
//!
//! `list![A, B, C]` spells `Cons<A, Cons<B, Cons<C, Nil>>>`. Lists support
//! every ordered operation; positional `Insert`/`Erase` take a cursor that
//! must point into the very same list.

use std::marker::PhantomData;

use crate::integral::{False, Nat, Succ, True, Zero};
use crate::iterator::Pos;
use crate::metafn::Substitute;
use crate::sequence::{
    AtImpl, BackImpl, ClearImpl, EmptyImpl, EraseImpl, FrontImpl, InsertImpl, ItemImpl,
    PopBackImpl, PopFrontImpl, PushBackImpl, PushFrontImpl, Sequence, SizeImpl,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

pub struct Cons<H, T>(PhantomData<(H, T)>);

#[derive(Debug, Clone, Copy, Default)]
pub struct ListTag;

/// Builds a list type from its elements.
///
/// ```
/// use typewise::prelude::*;
///
/// static_assertions::assert_type_eq_all!(list![u8, u16], Cons<u8, Cons<u16, Nil>>);
/// ```
#[macro_export]
macro_rules! list {
    () => { $crate::sequence::list::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::sequence::list::Cons<$head, $crate::list![$($tail),*]>
    };
}

/// Structural facts about a list; implemented only for `Nil` and `Cons`.
pub trait TypeList {
    type Len: Nat;
}

impl TypeList for Nil {
    type Len = Zero;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    type Len = Succ<T::Len>;
}

impl Sequence for Nil {
    type Tag = ListTag;
    type Begin = Pos<Nil, Zero>;
    type End = Pos<Nil, Zero>;
}

impl<H, T: TypeList> Sequence for Cons<H, T> {
    type Tag = ListTag;
    type Begin = Pos<Self, Zero>;
    type End = Pos<Self, Succ<T::Len>>;
}

#[doc(hidden)]
pub trait ListAt<N> {
    type Output;
}

impl<H, T> ListAt<Zero> for Cons<H, T> {
    type Output = H;
}

impl<H, T: ListAt<N>, N> ListAt<Succ<N>> for Cons<H, T> {
    type Output = T::Output;
}

#[doc(hidden)]
pub trait ListLast {
    type Output;
}

impl<H> ListLast for Cons<H, Nil> {
    type Output = H;
}

impl<H, H2, T> ListLast for Cons<H, Cons<H2, T>>
where
    Cons<H2, T>: ListLast,
{
    type Output = <Cons<H2, T> as ListLast>::Output;
}

#[doc(hidden)]
pub trait ListPushBack<X> {
    type Output;
}

impl<X> ListPushBack<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<H, T: ListPushBack<X>, X> ListPushBack<X> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

#[doc(hidden)]
pub trait ListPopBack {
    type Output;
}

impl<H> ListPopBack for Cons<H, Nil> {
    type Output = Nil;
}

impl<H, H2, T> ListPopBack for Cons<H, Cons<H2, T>>
where
    Cons<H2, T>: ListPopBack,
{
    type Output = Cons<H, <Cons<H2, T> as ListPopBack>::Output>;
}

#[doc(hidden)]
pub trait ListInsertAt<N, X> {
    type Output;
}

impl<L, X> ListInsertAt<Zero, X> for L {
    type Output = Cons<X, L>;
}

impl<H, T: ListInsertAt<N, X>, N, X> ListInsertAt<Succ<N>, X> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

#[doc(hidden)]
pub trait ListEraseAt<N> {
    type Output;
}

impl<H, T> ListEraseAt<Zero> for Cons<H, T> {
    type Output = T;
}

impl<H, T: ListEraseAt<N>, N> ListEraseAt<Succ<N>> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

impl<L: TypeList> SizeImpl<L> for ListTag {
    type Output = L::Len;
}

impl EmptyImpl<Nil> for ListTag {
    type Output = True;
}

impl<H, T> EmptyImpl<Cons<H, T>> for ListTag {
    type Output = False;
}

impl<H, T> FrontImpl<Cons<H, T>> for ListTag {
    type Output = H;
}

impl<L: ListLast> BackImpl<L> for ListTag {
    type Output = L::Output;
}

impl<L: ListAt<N>, N> AtImpl<L, N> for ListTag {
    type Output = L::Output;
}

impl<L: ListAt<N>, N> ItemImpl<L, N> for ListTag {
    type Output = L::Output;
}

impl<L: TypeList, X> PushFrontImpl<L, X> for ListTag {
    type Output = Cons<X, L>;
}

impl<L: ListPushBack<X>, X> PushBackImpl<L, X> for ListTag {
    type Output = L::Output;
}

impl<H, T> PopFrontImpl<Cons<H, T>> for ListTag {
    type Output = T;
}

impl<L: ListPopBack> PopBackImpl<L> for ListTag {
    type Output = L::Output;
}

impl<L: TypeList> ClearImpl<L> for ListTag {
    type Output = Nil;
}

impl<L, N, X> InsertImpl<L, Pos<L, N>, X> for ListTag
where
    L: ListInsertAt<N, X>,
{
    type Output = <L as ListInsertAt<N, X>>::Output;
}

impl<L, N> EraseImpl<L, Pos<L, N>> for ListTag
where
    L: ListEraseAt<N>,
{
    type Output = <L as ListEraseAt<N>>::Output;
}

impl<Args> Substitute<Args> for Nil {
    type Output = Nil;
}

/// Lists substitute element-wise, so `list![_1, _2]` builds a list from the
/// arguments of a lambda expression.
impl<Args, H: Substitute<Args>, T: Substitute<Args>> Substitute<Args> for Cons<H, T> {
    type Output = Cons<H::Output, T::Output>;
}
