//! Maps from naturals to types.

use std::marker::PhantomData;

use crate::integral::{Bool, BoolOr, False, Nat, NatEq, Select, True, Zero};
use crate::iterator::Pos;
use crate::metafn::Substitute;
use crate::sequence::list::{Cons, ListAt, ListPushBack, Nil, TypeList};
use crate::sequence::{
    AtImpl, ClearImpl, EmptyImpl, EraseKeyImpl, FrontImpl, HasKeyImpl, InsertKeyImpl, ItemImpl,
    Sequence, SizeImpl,
};

/// A key/value entry of a [`Map`]; also what map cursors dereference to.
pub struct Pair<K, V>(PhantomData<(K, V)>);

impl<Args, K: Substitute<Args>, V: Substitute<Args>> Substitute<Args> for Pair<K, V> {
    type Output = Pair<K::Output, V::Output>;
}

/// Entries `Pair<K, V>` stored in the list `L`, keyed by naturals.
///
/// `At<M, K>` looks up the value for `K`; asking for a key the map does not
/// hold fails to build. `InsertKey<M, Pair<K, V>>` keeps an existing entry
/// for `K` and otherwise appends.
///
/// ```
/// use typewise::prelude::*;
///
/// type Names = Eval<InsertKey<Eval<InsertKey<Map, Pair<N1, u8>>>, Pair<N4, char>>>;
/// let _: Eval<At<Names, N4>> = 'x';
/// assert!(!<Eval<HasKey<Names, N2>> as Bool>::VALUE);
/// ```
pub struct Map<L = Nil>(PhantomData<L>);

#[derive(Debug, Clone, Copy, Default)]
pub struct MapTag;

#[doc(hidden)]
pub trait ContainsKey<K> {
    type Output: Bool;
}

impl<K> ContainsKey<K> for Nil {
    type Output = False;
}

impl<Key, V, T, K> ContainsKey<K> for Cons<Pair<Key, V>, T>
where
    Key: NatEq<K>,
    K: Nat,
    T: ContainsKey<K>,
    <Key as NatEq<K>>::Output: BoolOr<<T as ContainsKey<K>>::Output>,
{
    type Output = <<Key as NatEq<K>>::Output as BoolOr<<T as ContainsKey<K>>::Output>>::Output;
}

/// Value lookup. `Nil` has no impl, which is what makes a missing key a
/// build failure.
#[doc(hidden)]
pub trait LookupKey<K> {
    type Output;
}

impl<Key, V, T, K> LookupKey<K> for Cons<Pair<Key, V>, T>
where
    Key: NatEq<K>,
    K: Nat,
    <Key as NatEq<K>>::Output: LookupStep<V, T, K>,
{
    type Output = <<Key as NatEq<K>>::Output as LookupStep<V, T, K>>::Output;
}

/// Either stops at the current value or continues with the tail; keeps the
/// search from touching the tail once the key has been found.
#[doc(hidden)]
pub trait LookupStep<V, Tail, K> {
    type Output;
}

impl<V, Tail, K> LookupStep<V, Tail, K> for True {
    type Output = V;
}

impl<V, Tail: LookupKey<K>, K> LookupStep<V, Tail, K> for False {
    type Output = Tail::Output;
}

#[doc(hidden)]
pub trait RemoveKey<K> {
    type Output;
}

impl<K> RemoveKey<K> for Nil {
    type Output = Nil;
}

impl<Key, V, T, K> RemoveKey<K> for Cons<Pair<Key, V>, T>
where
    Key: NatEq<K>,
    K: Nat,
    T: RemoveKey<K>,
    <Key as NatEq<K>>::Output:
        Select<<T as RemoveKey<K>>::Output, Cons<Pair<Key, V>, <T as RemoveKey<K>>::Output>>,
{
    type Output = <<Key as NatEq<K>>::Output as Select<
        <T as RemoveKey<K>>::Output,
        Cons<Pair<Key, V>, <T as RemoveKey<K>>::Output>,
    >>::Output;
}

impl<L> Sequence for Map<L>
where
    L: TypeList,
    Zero: NatEq<L::Len>,
{
    type Tag = MapTag;
    type Begin = Pos<Self, Zero>;
    type End = Pos<Self, L::Len>;
}

impl<L: TypeList> SizeImpl<Map<L>> for MapTag {
    type Output = L::Len;
}

impl<L> EmptyImpl<Map<L>> for MapTag
where
    L: TypeList,
    L::Len: NatEq<Zero>,
{
    type Output = <L::Len as NatEq<Zero>>::Output;
}

impl<H, T> FrontImpl<Map<Cons<H, T>>> for MapTag {
    type Output = H;
}

impl<L: ListAt<N>, N> ItemImpl<Map<L>, N> for MapTag {
    type Output = L::Output;
}

impl<L: LookupKey<K>, K> AtImpl<Map<L>, K> for MapTag {
    type Output = L::Output;
}

impl<L: ContainsKey<K>, K> HasKeyImpl<Map<L>, K> for MapTag {
    type Output = L::Output;
}

impl<L, K, V> InsertKeyImpl<Map<L>, Pair<K, V>> for MapTag
where
    L: ContainsKey<K> + ListPushBack<Pair<K, V>>,
    <L as ContainsKey<K>>::Output: Select<Map<L>, Map<<L as ListPushBack<Pair<K, V>>>::Output>>,
{
    type Output = <<L as ContainsKey<K>>::Output as Select<
        Map<L>,
        Map<<L as ListPushBack<Pair<K, V>>>::Output>,
    >>::Output;
}

impl<L: RemoveKey<K>, K> EraseKeyImpl<Map<L>, K> for MapTag {
    type Output = Map<L::Output>;
}

impl<L> ClearImpl<Map<L>> for MapTag {
    type Output = Map<Nil>;
}

impl<Args, L> Substitute<Args> for Map<L> {
    type Output = Map<L>;
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_type_eq_all;

    use super::*;
    use crate::integral::{N0, N1, N2, N3};
    use crate::iterator::Deref;
    use crate::list;
    use crate::metafn::Eval;
    use crate::sequence::{At, Begin, Clear, EraseKey, Front, HasKey, InsertKey, Size};

    type NoEntries = Map;
    type Ab = Eval<InsertKey<Eval<InsertKey<NoEntries, Pair<N0, u8>>>, Pair<N2, u16>>>;

    assert_type_eq_all!(Ab, Map<list![Pair<N0, u8>, Pair<N2, u16>]>);
    assert_type_eq_all!(Eval<At<Ab, N2>>, u16);
    assert_type_eq_all!(Eval<At<Ab, N0>>, u8);
    assert_type_eq_all!(Eval<InsertKey<Ab, Pair<N2, char>>>, Ab);
    assert_type_eq_all!(Eval<HasKey<Ab, N3>>, False);
    assert_type_eq_all!(Eval<EraseKey<Ab, N0>>, Map<list![Pair<N2, u16>]>);
    assert_type_eq_all!(Eval<Front<Ab>>, Pair<N0, u8>);
    assert_type_eq_all!(Eval<Deref<Eval<Begin<Ab>>>>, Pair<N0, u8>);
    assert_type_eq_all!(Eval<Clear<Ab>>, NoEntries);

    #[test]
    fn size_tracks_inserted_keys() {
        assert_eq!(<Eval<Size<Ab>> as Nat>::VALUE, 2);
        assert!(!<Eval<HasKey<Ab, N1>> as Bool>::VALUE);
    }
}
