//! Half-open ranges of naturals, computed from their bounds.

use std::marker::PhantomData;

use crate::integral::{Nat, NatAdd, NatEq, NatLess, NatSub, Succ, True, Zero};
use crate::iterator::Pos;
use crate::metafn::Substitute;
use crate::sequence::{AtImpl, BackImpl, EmptyImpl, FrontImpl, ItemImpl, Sequence, SizeImpl};

/// The naturals `Start`, `Start + 1`, .., up to but excluding `Finish`.
///
/// Nothing is stored: size, elements and cursors are arithmetic on the two
/// bounds. A range whose `Finish` is below its `Start` is not a [`Sequence`].
/// Ranges are immutable; pushing, popping or inserting is not supported.
///
/// ```
/// use typewise::prelude::*;
///
/// type Digits = HalfOpenRange<N0, N5>;
/// assert_eq!(<Eval<Size<Digits>> as Nat>::VALUE, 5);
/// assert_eq!(<Eval<Deref<Eval<Prior<Eval<End<Digits>>>>>> as Nat>::VALUE, 4);
/// ```
pub struct HalfOpenRange<Start, Finish>(PhantomData<(Start, Finish)>);

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeTag;

impl<Start, Finish> Sequence for HalfOpenRange<Start, Finish>
where
    Start: Nat,
    Finish: NatSub<Start>,
    Zero: NatEq<<Finish as NatSub<Start>>::Output>,
{
    type Tag = RangeTag;
    type Begin = Pos<Self, Zero>;
    type End = Pos<Self, <Finish as NatSub<Start>>::Output>;
}

impl<Start, Finish> SizeImpl<HalfOpenRange<Start, Finish>> for RangeTag
where
    Start: Nat,
    Finish: NatSub<Start>,
{
    type Output = <Finish as NatSub<Start>>::Output;
}

impl<Start, Finish> EmptyImpl<HalfOpenRange<Start, Finish>> for RangeTag
where
    Start: NatEq<Finish>,
    Finish: Nat,
{
    type Output = <Start as NatEq<Finish>>::Output;
}

impl<Start, Finish, N> ItemImpl<HalfOpenRange<Start, Finish>, N> for RangeTag
where
    Start: NatAdd<N>,
    Finish: NatSub<Start>,
    N: NatLess<<Finish as NatSub<Start>>::Output, Output = True>,
{
    type Output = <Start as NatAdd<N>>::Output;
}

impl<Start, Finish, N> AtImpl<HalfOpenRange<Start, Finish>, N> for RangeTag
where
    RangeTag: ItemImpl<HalfOpenRange<Start, Finish>, N>,
{
    type Output = <RangeTag as ItemImpl<HalfOpenRange<Start, Finish>, N>>::Output;
}

impl<Start, Finish> FrontImpl<HalfOpenRange<Start, Finish>> for RangeTag
where
    Start: NatLess<Finish, Output = True>,
    Finish: Nat,
{
    type Output = Start;
}

/// The predecessor of `Finish`; only non-empty ranges have one.
impl<Start, Last> BackImpl<HalfOpenRange<Start, Succ<Last>>> for RangeTag
where
    Start: NatLess<Succ<Last>, Output = True>,
    Last: Nat,
{
    type Output = Last;
}

impl<Args, Start, Finish> Substitute<Args> for HalfOpenRange<Start, Finish> {
    type Output = HalfOpenRange<Start, Finish>;
}
