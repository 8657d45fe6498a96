//! The fold family.
//!
//! Every fold walks cursors from `Begin<S>` and stops when the current cursor
//! is the same cursor as `End<S>`. Operations are metafunction classes invoked
//! with `(State, X)`, where `X` is the cursor for the iterator folds and the
//! element for the others.

use std::marker::PhantomData;

use crate::integral::{False, True};
use crate::iterator::{CursorItem, CursorNext, SameCursor};
use crate::metafn::{Apply, ApplyOut, Eval, Metafunction};
use crate::sequence::Sequence;

/// Left-to-right walk from the cursor `Self` to `Last`.
#[doc(hidden)]
pub trait IterFoldImpl<Last, State, Op> {
    type Output;
}

impl<I, Last, State, Op> IterFoldImpl<Last, State, Op> for I
where
    I: SameCursor<Last>,
    <I as SameCursor<Last>>::Output: IterFoldStep<I, Last, State, Op>,
{
    type Output = <<I as SameCursor<Last>>::Output as IterFoldStep<I, Last, State, Op>>::Output;
}

/// Dispatches on whether the walk has reached `Last`.
#[doc(hidden)]
pub trait IterFoldStep<I, Last, State, Op> {
    type Output;
}

impl<I, Last, State, Op> IterFoldStep<I, Last, State, Op> for True {
    type Output = State;
}

impl<I, Last, State, Op> IterFoldStep<I, Last, State, Op> for False
where
    I: CursorNext,
    Op: Apply<(State, I)>,
    I::Next: IterFoldImpl<Last, ApplyOut<Op, (State, I)>, Op>,
{
    type Output = <I::Next as IterFoldImpl<Last, ApplyOut<Op, (State, I)>, Op>>::Output;
}

/// Right-to-left walk: the tail is folded first, then `Op(inner, Self)`.
#[doc(hidden)]
pub trait ReverseIterFoldImpl<Last, State, Op> {
    type Output;
}

impl<I, Last, State, Op> ReverseIterFoldImpl<Last, State, Op> for I
where
    I: SameCursor<Last>,
    <I as SameCursor<Last>>::Output: ReverseStep<I, Last, State, Op>,
{
    type Output = <<I as SameCursor<Last>>::Output as ReverseStep<I, Last, State, Op>>::Output;
}

#[doc(hidden)]
pub trait ReverseStep<I, Last, State, Op> {
    type Output;
}

impl<I, Last, State, Op> ReverseStep<I, Last, State, Op> for True {
    type Output = State;
}

impl<I, Last, State, Op> ReverseStep<I, Last, State, Op> for False
where
    I: CursorNext,
    I::Next: ReverseIterFoldImpl<Last, State, Op>,
    Op: Apply<(<I::Next as ReverseIterFoldImpl<Last, State, Op>>::Output, I)>,
{
    type Output = ApplyOut<Op, (<I::Next as ReverseIterFoldImpl<Last, State, Op>>::Output, I)>;
}

/// Turns an element operation into a cursor operation by dereferencing.
pub struct OnItem<Op>(PhantomData<Op>);

impl<State, I, Op> Apply<(State, I)> for OnItem<Op>
where
    I: CursorItem,
    Op: Apply<(State, I::Item)>,
{
    type Output = ApplyOut<Op, (State, I::Item)>;
}

/// `Op(State, cursor)` for every cursor of `S`, left to right.
pub struct IterFold<S, State, Op>(PhantomData<(S, State, Op)>);

impl<S, State, Op> Metafunction for IterFold<S, State, Op>
where
    S: Sequence,
    S::Begin: IterFoldImpl<S::End, State, Op>,
{
    type Output = <S::Begin as IterFoldImpl<S::End, State, Op>>::Output;
}

/// `Op(State, cursor)` for every cursor of `S`, right to left.
pub struct ReverseIterFold<S, State, Op>(PhantomData<(S, State, Op)>);

impl<S, State, Op> Metafunction for ReverseIterFold<S, State, Op>
where
    S: Sequence,
    S::Begin: ReverseIterFoldImpl<S::End, State, Op>,
{
    type Output = <S::Begin as ReverseIterFoldImpl<S::End, State, Op>>::Output;
}

/// `Op(State, element)` for every element of `S`, left to right.
///
/// ```
/// use typewise::prelude::*;
///
/// type Total = Eval<Fold<HalfOpenRange<N1, N4>, N0, Plus<_1, _2>>>;
/// assert_eq!(<Total as Nat>::VALUE, 6);
/// ```
pub struct Fold<S, State, Op>(PhantomData<(S, State, Op)>);

impl<S, State, Op> Metafunction for Fold<S, State, Op>
where
    IterFold<S, State, OnItem<Op>>: Metafunction,
{
    type Output = Eval<IterFold<S, State, OnItem<Op>>>;
}

/// Another name for [`Fold`].
pub type Accumulate<S, State, Op> = Fold<S, State, Op>;

/// `Op(State, element)` for every element of `S`, right to left.
pub struct ReverseFold<S, State, Op>(PhantomData<(S, State, Op)>);

impl<S, State, Op> Metafunction for ReverseFold<S, State, Op>
where
    ReverseIterFold<S, State, OnItem<Op>>: Metafunction,
{
    type Output = Eval<ReverseIterFold<S, State, OnItem<Op>>>;
}
