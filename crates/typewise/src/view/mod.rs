//! Lazily computed sequences.
//!
//! A view stores the sequences it is built from and nothing else. Its cursors
//! compute elements on dereference, and every sequence-level operation on a
//! view is derived from those cursors through [`ViewTag`].

use crate::integral::Nat;
use crate::iterator::{
    AdvanceBy, BidirectionalCategory, Cursor, CursorItem, CursorPrior, Distance, SameCursor,
};
use crate::metafn::{Eval, Metafunction};
use crate::sequence::{AtImpl, BackImpl, EmptyImpl, FrontImpl, Sequence, SizeImpl};

pub mod filter;
pub mod transform;
pub mod zip;

pub use filter::{FilterIter, FilterView};
pub use transform::{TransformIter, TransformView};
pub use zip::{AllSame, ZipIter, ZipView};

#[derive(Debug, Clone, Copy, Default)]
pub struct ViewTag;

impl<S> SizeImpl<S> for ViewTag
where
    S: Sequence,
    Distance<S::Begin, S::End>: Metafunction,
    Eval<Distance<S::Begin, S::End>>: Nat,
{
    type Output = Eval<Distance<S::Begin, S::End>>;
}

impl<S> EmptyImpl<S> for ViewTag
where
    S: Sequence,
    S::Begin: SameCursor<S::End>,
{
    type Output = <S::Begin as SameCursor<S::End>>::Output;
}

impl<S> FrontImpl<S> for ViewTag
where
    S: Sequence,
    S::Begin: CursorItem,
{
    type Output = <S::Begin as CursorItem>::Item;
}

impl<S> BackImpl<S> for ViewTag
where
    S: Sequence,
    S::End: CursorPrior,
    <S::End as Cursor>::Category: BidirectionalCategory,
    <S::End as CursorPrior>::Prior: CursorItem,
{
    type Output = <<S::End as CursorPrior>::Prior as CursorItem>::Item;
}

impl<S, N> AtImpl<S, N> for ViewTag
where
    S: Sequence,
    S::Begin: AdvanceBy<N>,
    <S::Begin as AdvanceBy<N>>::Output: CursorItem,
{
    type Output = <<S::Begin as AdvanceBy<N>>::Output as CursorItem>::Item;
}
