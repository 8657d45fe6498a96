//! Type-level iterators ("cursors").
//!
//! A cursor names a position in a sequence. Its capabilities are split across
//! traits so that an unsupported move is an unsatisfied bound rather than a
//! silently wrong answer:
//!
//! - [`CursorItem`]: the element at the position; absent at the end.
//! - [`CursorNext`]: the following position; absent at the end.
//! - [`CursorPrior`]: the preceding position; absent at the beginning and for
//!   cursors that cannot move backwards.
//! - [`SameCursor`]: whether two cursors are the very same position, which is
//!   how loops decide to stop.
//!
//! Natural numbers are bidirectional cursors over themselves, so
//! `Eval<Next<N3>>` is `N4`.

use std::marker::PhantomData;

use crate::integral::{Bool, False, Nat, NatAdd, NatEq, NatLess, NatSub, Succ, True, Zero};
use crate::metafn::{Metafunction, Substitute};
use crate::sequence::{ItemImpl, Sequence, SizeImpl};

#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePassTag;

#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardTag;

#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalTag;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccessTag;

/// Traversal category of a cursor.
pub trait IteratorCategory {
    /// The category an adapting cursor gets when it wraps a cursor of this
    /// category: everything except random access is preserved.
    type Stepwise: IteratorCategory;
}

impl IteratorCategory for SinglePassTag {
    type Stepwise = SinglePassTag;
}

impl IteratorCategory for ForwardTag {
    type Stepwise = ForwardTag;
}

impl IteratorCategory for BidirectionalTag {
    type Stepwise = BidirectionalTag;
}

impl IteratorCategory for RandomAccessTag {
    type Stepwise = BidirectionalTag;
}

/// Categories that allow moving backwards.
pub trait BidirectionalCategory: IteratorCategory {}

impl BidirectionalCategory for BidirectionalTag {}
impl BidirectionalCategory for RandomAccessTag {}

pub trait Cursor {
    type Category: IteratorCategory;
}

pub trait CursorItem: Cursor {
    type Item;
}

pub trait CursorNext: Cursor {
    type Next: Cursor;
}

pub trait CursorPrior: Cursor {
    type Prior: Cursor;
}

/// Identity of positions. `Output` is [`True`] only for the same position of
/// the same sequence.
pub trait SameCursor<Other>: Cursor {
    type Output: Bool;
}

/// Cursors that know their sequence and offset, which makes distance and
/// advance arithmetic.
pub trait Positioned: Cursor {
    type Sequence;
    type Index: Nat;
}

/// Random-access cursor at offset `N` of the sequence `S`.
///
/// Dereferencing goes through the tag's [`ItemImpl`]; moving forward is only
/// defined while `N` is below the sequence size, and moving back only while
/// `N` is above zero.
pub struct Pos<S, N>(PhantomData<(S, N)>);

impl<S, N: Nat> Cursor for Pos<S, N> {
    type Category = RandomAccessTag;
}

impl<S, N: Nat> Positioned for Pos<S, N> {
    type Sequence = S;
    type Index = N;
}

impl<S, N> CursorItem for Pos<S, N>
where
    S: Sequence,
    S::Tag: ItemImpl<S, N>,
    N: Nat,
{
    type Item = <S::Tag as ItemImpl<S, N>>::Output;
}

impl<S, N> CursorNext for Pos<S, N>
where
    S: Sequence,
    S::Tag: SizeImpl<S>,
    N: NatLess<<S::Tag as SizeImpl<S>>::Output, Output = True>,
{
    type Next = Pos<S, Succ<N>>;
}

impl<S, N: Nat> CursorPrior for Pos<S, Succ<N>> {
    type Prior = Pos<S, N>;
}

impl<S, N, M> SameCursor<Pos<S, M>> for Pos<S, N>
where
    N: NatEq<M>,
    M: Nat,
{
    type Output = <N as NatEq<M>>::Output;
}

impl<Args, S, N> Substitute<Args> for Pos<S, N> {
    type Output = Pos<S, N>;
}

impl Cursor for Zero {
    type Category = BidirectionalTag;
}

impl<N: Nat> Cursor for Succ<N> {
    type Category = BidirectionalTag;
}

impl CursorNext for Zero {
    type Next = Succ<Zero>;
}

impl<N: Nat> CursorNext for Succ<N> {
    type Next = Succ<Succ<N>>;
}

impl<N: Nat + Cursor> CursorPrior for Succ<N> {
    type Prior = N;
}

impl<M: Nat> SameCursor<M> for Zero
where
    Zero: NatEq<M>,
{
    type Output = <Zero as NatEq<M>>::Output;
}

impl<N: Nat, M: Nat> SameCursor<M> for Succ<N>
where
    Succ<N>: NatEq<M>,
{
    type Output = <Succ<N> as NatEq<M>>::Output;
}

/// The element a cursor points at.
pub struct Deref<I>(PhantomData<I>);

impl<I: CursorItem> Metafunction for Deref<I> {
    type Output = I::Item;
}

pub struct Next<I>(PhantomData<I>);

impl<I: CursorNext> Metafunction for Next<I> {
    type Output = I::Next;
}

/// The preceding cursor; requires a bidirectional-or-better category.
pub struct Prior<I>(PhantomData<I>);

impl<I> Metafunction for Prior<I>
where
    I: CursorPrior,
    I::Category: BidirectionalCategory,
{
    type Output = I::Prior;
}

/// Number of steps from `First` to `Last`, as a [`Nat`].
pub struct Distance<First, Last>(PhantomData<(First, Last)>);

impl<First, Last> Metafunction for Distance<First, Last>
where
    First: Cursor,
    First::Category: DistanceImpl<First, Last>,
{
    type Output = <First::Category as DistanceImpl<First, Last>>::Output;
}

/// `I` moved forward `N` steps.
pub struct Advance<I, N>(PhantomData<(I, N)>);

impl<I, N> Metafunction for Advance<I, N>
where
    I: Cursor,
    I::Category: AdvanceImpl<I, N>,
{
    type Output = <I::Category as AdvanceImpl<I, N>>::Output;
}

crate::lambda_support!(Deref<I>, Next<I>, Prior<I>, Distance<F, L>, Advance<I, N>);

/// Distance dispatched on the category of the first cursor.
pub trait DistanceImpl<First, Last> {
    type Output: Nat;
}

impl<First, Last> DistanceImpl<First, Last> for RandomAccessTag
where
    First: Positioned,
    Last: Positioned<Sequence = First::Sequence>,
    Last::Index: NatSub<First::Index>,
{
    type Output = <Last::Index as NatSub<First::Index>>::Output;
}

macro_rules! stepwise_distance {
    ($($tag:ty),+) => {
        $(
            impl<First, Last> DistanceImpl<First, Last> for $tag
            where
                First: StepDistance<Last>,
            {
                type Output = <First as StepDistance<Last>>::Output;
            }
        )+
    };
}

stepwise_distance!(SinglePassTag, ForwardTag, BidirectionalTag);

/// Advance dispatched on the category of the cursor.
pub trait AdvanceImpl<I, N> {
    type Output;
}

impl<I, N> AdvanceImpl<I, N> for RandomAccessTag
where
    N: Nat,
    I: Positioned,
    I::Index: NatAdd<N>,
    I::Sequence: Sequence,
    <I::Sequence as Sequence>::Tag: SizeImpl<I::Sequence>,
    <I::Index as NatAdd<N>>::Output:
        NatLess<Succ<<<I::Sequence as Sequence>::Tag as SizeImpl<I::Sequence>>::Output>, Output = True>,
{
    type Output = Pos<I::Sequence, <I::Index as NatAdd<N>>::Output>;
}

macro_rules! stepwise_advance {
    ($($tag:ty),+) => {
        $(
            impl<I, N> AdvanceImpl<I, N> for $tag
            where
                I: AdvanceBy<N>,
            {
                type Output = <I as AdvanceBy<N>>::Output;
            }
        )+
    };
}

stepwise_advance!(SinglePassTag, ForwardTag, BidirectionalTag);

/// Counts `next` steps until the cursor is the same as `Last`.
#[doc(hidden)]
pub trait StepDistance<Last> {
    type Output: Nat;
}

impl<I, Last> StepDistance<Last> for I
where
    I: SameCursor<Last>,
    <I as SameCursor<Last>>::Output: StepCount<I, Last>,
{
    type Output = <<I as SameCursor<Last>>::Output as StepCount<I, Last>>::Output;
}

#[doc(hidden)]
pub trait StepCount<I, Last> {
    type Output: Nat;
}

impl<I, Last> StepCount<I, Last> for True {
    type Output = Zero;
}

impl<I, Last> StepCount<I, Last> for False
where
    I: CursorNext,
    I::Next: StepDistance<Last>,
{
    type Output = Succ<<I::Next as StepDistance<Last>>::Output>;
}

/// `next` applied `N` times.
#[doc(hidden)]
pub trait AdvanceBy<N> {
    type Output;
}

impl<I> AdvanceBy<Zero> for I {
    type Output = I;
}

impl<I, N> AdvanceBy<Succ<N>> for I
where
    I: CursorNext,
    I::Next: AdvanceBy<N>,
{
    type Output = <I::Next as AdvanceBy<N>>::Output;
}
