use std::marker::PhantomData;

use crate::iterator::{Cursor, CursorItem, CursorNext, CursorPrior, IteratorCategory, SameCursor};
use crate::metafn::{Apply, ApplyOut, Substitute};
use crate::sequence::Sequence;
use crate::view::ViewTag;

/// `S` with the metafunction class `Op` applied to every element on access.
pub struct TransformView<S, Op>(PhantomData<(S, Op)>);

impl<S: Sequence, Op> Sequence for TransformView<S, Op> {
    type Tag = ViewTag;
    type Begin = TransformIter<S::Begin, Op>;
    type End = TransformIter<S::End, Op>;
}

/// Wraps a cursor of the underlying sequence. Moves exactly like it, but
/// offers at most bidirectional traversal.
pub struct TransformIter<Base, Op>(PhantomData<(Base, Op)>);

impl<Base: Cursor, Op> Cursor for TransformIter<Base, Op> {
    type Category = <Base::Category as IteratorCategory>::Stepwise;
}

impl<Base, Op> CursorItem for TransformIter<Base, Op>
where
    Base: CursorItem,
    Op: Apply<(Base::Item,)>,
{
    type Item = ApplyOut<Op, (Base::Item,)>;
}

impl<Base: CursorNext, Op> CursorNext for TransformIter<Base, Op> {
    type Next = TransformIter<Base::Next, Op>;
}

impl<Base: CursorPrior, Op> CursorPrior for TransformIter<Base, Op> {
    type Prior = TransformIter<Base::Prior, Op>;
}

impl<Base, Other, Op> SameCursor<TransformIter<Other, Op>> for TransformIter<Base, Op>
where
    Base: SameCursor<Other>,
{
    type Output = <Base as SameCursor<Other>>::Output;
}

impl<Args, S, Op> Substitute<Args> for TransformView<S, Op> {
    type Output = TransformView<S, Op>;
}
