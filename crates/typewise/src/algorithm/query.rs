//! Searching and counting.

use std::marker::PhantomData;

use crate::algorithm::fold::Fold;
use crate::integral::{False, True, Zero};
use crate::iterator::{CursorItem, CursorNext, Next, SameCursor};
use crate::metafn::{_1, _2, Apply, ApplyOut, Bind, Eval, If, Metafunction};
use crate::sequence::Sequence;

/// The first cursor from `Self` up to `Last` whose element satisfies `Pred`,
/// or `Last` itself.
#[doc(hidden)]
pub trait SkipUnmatched<Last, Pred> {
    type Output;
}

impl<I, Last, Pred> SkipUnmatched<Last, Pred> for I
where
    I: SameCursor<Last>,
    <I as SameCursor<Last>>::Output: SkipStep<I, Last, Pred>,
{
    type Output = <<I as SameCursor<Last>>::Output as SkipStep<I, Last, Pred>>::Output;
}

/// Stops at `Last`, otherwise tests the element.
#[doc(hidden)]
pub trait SkipStep<I, Last, Pred> {
    type Output;
}

impl<I, Last, Pred> SkipStep<I, Last, Pred> for True {
    type Output = I;
}

impl<I, Last, Pred> SkipStep<I, Last, Pred> for False
where
    I: CursorItem,
    Pred: Apply<(I::Item,)>,
    ApplyOut<Pred, (I::Item,)>: MatchStep<I, Last, Pred>,
{
    type Output = <ApplyOut<Pred, (I::Item,)> as MatchStep<I, Last, Pred>>::Output;
}

/// Stops on a match, otherwise moves on.
#[doc(hidden)]
pub trait MatchStep<I, Last, Pred> {
    type Output;
}

impl<I, Last, Pred> MatchStep<I, Last, Pred> for True {
    type Output = I;
}

impl<I, Last, Pred> MatchStep<I, Last, Pred> for False
where
    I: CursorNext,
    I::Next: SkipUnmatched<Last, Pred>,
{
    type Output = <I::Next as SkipUnmatched<Last, Pred>>::Output;
}

/// Cursor to the first element of `S` satisfying `Pred`; `End<S>` when there
/// is none.
pub struct FindIf<S, Pred>(PhantomData<(S, Pred)>);

impl<S, Pred> Metafunction for FindIf<S, Pred>
where
    S: Sequence,
    S::Begin: SkipUnmatched<S::End, Pred>,
{
    type Output = <S::Begin as SkipUnmatched<S::End, Pred>>::Output;
}

/// Number of elements of `S` satisfying `Pred`, as a natural.
pub struct CountIf<S, Pred>(PhantomData<(S, Pred)>);

impl<S, Pred> Metafunction for CountIf<S, Pred>
where
    Fold<S, Zero, If<Bind<Pred, (_2,)>, Next<_1>, _1>>: Metafunction,
{
    type Output = Eval<Fold<S, Zero, If<Bind<Pred, (_2,)>, Next<_1>, _1>>>;
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_type_eq_all;

    use super::*;
    use crate::integral::{EqualTo, IsEven, N0, N1, N2, N3, N5, N8};
    use crate::iterator::{Deref, Pos};
    use crate::list;
    use crate::sequence::{End, HalfOpenRange};

    type Odds = list![N1, N3, N5];

    assert_type_eq_all!(Eval<Deref<Eval<FindIf<HalfOpenRange<N1, N8>, IsEven<_1>>>>>, N2);
    assert_type_eq_all!(Eval<FindIf<Odds, EqualTo<_1, N3>>>, Pos<Odds, N1>);
    assert_type_eq_all!(Eval<FindIf<Odds, IsEven<_1>>>, Eval<End<Odds>>);
    assert_type_eq_all!(Eval<CountIf<HalfOpenRange<N0, N5>, IsEven<_1>>>, N3);
    assert_type_eq_all!(Eval<CountIf<Odds, IsEven<_1>>>, N0);
}
