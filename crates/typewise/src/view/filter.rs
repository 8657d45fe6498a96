use std::marker::PhantomData;

use crate::algorithm::query::SkipUnmatched;
use crate::iterator::{Cursor, CursorItem, CursorNext, ForwardTag, SameCursor};
use crate::metafn::Substitute;
use crate::sequence::Sequence;
use crate::view::ViewTag;

/// The elements of `S` for which `Pred` yields [`True`](crate::integral::True).
pub struct FilterView<S, Pred>(PhantomData<(S, Pred)>);

impl<S, Pred> Sequence for FilterView<S, Pred>
where
    S: Sequence,
    S::Begin: SkipUnmatched<S::End, Pred>,
    <S::Begin as SkipUnmatched<S::End, Pred>>::Output: SameCursor<S::End>,
{
    type Tag = ViewTag;
    type Begin = FilterIter<<S::Begin as SkipUnmatched<S::End, Pred>>::Output, S::End, Pred>;
    type End = FilterIter<S::End, S::End, Pred>;
}

/// A cursor of the underlying sequence that always rests on a matching
/// element or on `Last`.
pub struct FilterIter<I, Last, Pred>(PhantomData<(I, Last, Pred)>);

impl<I, Last, Pred> Cursor for FilterIter<I, Last, Pred> {
    type Category = ForwardTag;
}

impl<I: CursorItem, Last, Pred> CursorItem for FilterIter<I, Last, Pred> {
    type Item = I::Item;
}

impl<I, Last, Pred> CursorNext for FilterIter<I, Last, Pred>
where
    I: CursorNext,
    I::Next: SkipUnmatched<Last, Pred>,
{
    type Next = FilterIter<<I::Next as SkipUnmatched<Last, Pred>>::Output, Last, Pred>;
}

impl<I, J, Last, Pred> SameCursor<FilterIter<J, Last, Pred>> for FilterIter<I, Last, Pred>
where
    I: SameCursor<J>,
{
    type Output = <I as SameCursor<J>>::Output;
}

impl<Args, S, Pred> Substitute<Args> for FilterView<S, Pred> {
    type Output = FilterView<S, Pred>;
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_type_eq_all;

    use super::*;
    use crate::integral::{IsEven, N0, N1, N2, N3, N4, N6, N7, True};
    use crate::metafn::{_1, Eval};
    use crate::sequence::{At, Empty, Front, HalfOpenRange, Size};

    type Evens = FilterView<HalfOpenRange<N1, N7>, IsEven<_1>>;

    assert_type_eq_all!(Eval<Size<Evens>>, N3);
    assert_type_eq_all!(Eval<Front<Evens>>, N2);
    assert_type_eq_all!(Eval<At<Evens, N2>>, N6);
    assert_type_eq_all!(Eval<At<Evens, N1>>, N4);
    assert_type_eq_all!(Eval<Empty<FilterView<HalfOpenRange<N1, N1>, IsEven<_1>>>>, True);
    assert_type_eq_all!(Eval<Size<FilterView<HalfOpenRange<N3, N4>, IsEven<_1>>>>, N0);
}
