use std::marker::PhantomData;

use crate::algorithm::Transform;
use crate::integral::{Bool, BoolAnd, True};
use crate::iterator::{Cursor, CursorItem, CursorNext, Deref, Next, SameCursor, SinglePassTag};
use crate::metafn::{_1, Eval, Metafunction, Substitute};
use crate::sequence::list::{Cons, Nil};
use crate::sequence::{Begin, End, Sequence};
use crate::view::ViewTag;

/// Walks a list of sequences in lockstep.
///
/// Element `i` of `ZipView<list![A, B]>` is `list![A[i], B[i]]`. The view ends
/// when every component has reached its end, so the components should have
/// the same length; stepping a component past its end fails to build.
pub struct ZipView<Seqs>(PhantomData<Seqs>);

impl<Seqs> Sequence for ZipView<Seqs>
where
    Transform<Seqs, Begin<_1>>: Metafunction,
    Transform<Seqs, End<_1>>: Metafunction,
    Eval<Transform<Seqs, Begin<_1>>>: AllSame<Eval<Transform<Seqs, End<_1>>>>,
{
    type Tag = ViewTag;
    type Begin = ZipIter<Eval<Transform<Seqs, Begin<_1>>>>;
    type End = ZipIter<Eval<Transform<Seqs, End<_1>>>>;
}

/// A list of component cursors moved together. Single pass only.
pub struct ZipIter<Iters>(PhantomData<Iters>);

impl<Iters> Cursor for ZipIter<Iters> {
    type Category = SinglePassTag;
}

impl<Iters> CursorItem for ZipIter<Iters>
where
    Transform<Iters, Deref<_1>>: Metafunction,
{
    type Item = Eval<Transform<Iters, Deref<_1>>>;
}

impl<Iters> CursorNext for ZipIter<Iters>
where
    Transform<Iters, Next<_1>>: Metafunction,
{
    type Next = ZipIter<Eval<Transform<Iters, Next<_1>>>>;
}

impl<Iters, Other> SameCursor<ZipIter<Other>> for ZipIter<Iters>
where
    Iters: AllSame<Other>,
{
    type Output = <Iters as AllSame<Other>>::Output;
}

/// Pairwise [`SameCursor`] over two lists of cursors.
pub trait AllSame<Other> {
    type Output: Bool;
}

impl AllSame<Nil> for Nil {
    type Output = True;
}

impl<H, T, H2, T2> AllSame<Cons<H2, T2>> for Cons<H, T>
where
    H: SameCursor<H2>,
    T: AllSame<T2>,
    <H as SameCursor<H2>>::Output: BoolAnd<<T as AllSame<T2>>::Output>,
{
    type Output = <<H as SameCursor<H2>>::Output as BoolAnd<<T as AllSame<T2>>::Output>>::Output;
}

impl<Args, Seqs> Substitute<Args> for ZipView<Seqs> {
    type Output = ZipView<Seqs>;
}
