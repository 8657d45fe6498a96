//! Type-level booleans and natural numbers.
//!
//! These are the compile-time constants the rest of the crate computes with:
//! sizes, offsets, range bounds, and predicate results. Each carries its value
//! as an associated constant so tests and callers can read it back.

use std::marker::PhantomData;

use crate::metafn::{Metafunction, Substitute};

pub trait Bool {
    const VALUE: bool;
    type Not: Bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
}

/// Chooses between two types on a type-level boolean.
pub trait Select<A, B>: Bool {
    type Output;
}

impl<A, B> Select<A, B> for True {
    type Output = A;
}

impl<A, B> Select<A, B> for False {
    type Output = B;
}

pub trait BoolAnd<Rhs: Bool>: Bool {
    type Output: Bool;
}

impl<Rhs: Bool> BoolAnd<Rhs> for True {
    type Output = Rhs;
}

impl<Rhs: Bool> BoolAnd<Rhs> for False {
    type Output = False;
}

pub trait BoolOr<Rhs: Bool>: Bool {
    type Output: Bool;
}

impl<Rhs: Bool> BoolOr<Rhs> for True {
    type Output = True;
}

impl<Rhs: Bool> BoolOr<Rhs> for False {
    type Output = Rhs;
}

/// A natural number in unary form: `Zero`, `Succ<Zero>`, ...
pub trait Nat {
    const VALUE: usize;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Zero;

pub struct Succ<N>(PhantomData<N>);

impl Nat for Zero {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: usize = N::VALUE + 1;
}

pub type N0 = Zero;
pub type N1 = Succ<N0>;
pub type N2 = Succ<N1>;
pub type N3 = Succ<N2>;
pub type N4 = Succ<N3>;
pub type N5 = Succ<N4>;
pub type N6 = Succ<N5>;
pub type N7 = Succ<N6>;
pub type N8 = Succ<N7>;
pub type N9 = Succ<N8>;
pub type N10 = Succ<N9>;
pub type N11 = Succ<N10>;
pub type N12 = Succ<N11>;
pub type N13 = Succ<N12>;
pub type N14 = Succ<N13>;
pub type N15 = Succ<N14>;
pub type N16 = Succ<N15>;

pub trait NatAdd<Rhs: Nat>: Nat {
    type Output: Nat;
}

impl<Rhs: Nat> NatAdd<Rhs> for Zero {
    type Output = Rhs;
}

impl<N: NatAdd<Rhs>, Rhs: Nat> NatAdd<Rhs> for Succ<N> {
    type Output = Succ<<N as NatAdd<Rhs>>::Output>;
}

/// Subtraction; there is no impl when `Rhs` exceeds `Self`.
pub trait NatSub<Rhs: Nat>: Nat {
    type Output: Nat;
}

impl<N: Nat> NatSub<Zero> for N {
    type Output = N;
}

impl<N: NatSub<M>, M: Nat> NatSub<Succ<M>> for Succ<N> {
    type Output = <N as NatSub<M>>::Output;
}

pub trait NatEq<Rhs: Nat>: Nat {
    type Output: Bool;
}

impl NatEq<Zero> for Zero {
    type Output = True;
}

impl<M: Nat> NatEq<Succ<M>> for Zero {
    type Output = False;
}

impl<N: Nat> NatEq<Zero> for Succ<N> {
    type Output = False;
}

impl<N: NatEq<M>, M: Nat> NatEq<Succ<M>> for Succ<N> {
    type Output = <N as NatEq<M>>::Output;
}

pub trait NatLess<Rhs: Nat>: Nat {
    type Output: Bool;
}

impl NatLess<Zero> for Zero {
    type Output = False;
}

impl<M: Nat> NatLess<Succ<M>> for Zero {
    type Output = True;
}

impl<N: Nat> NatLess<Zero> for Succ<N> {
    type Output = False;
}

impl<N: NatLess<M>, M: Nat> NatLess<Succ<M>> for Succ<N> {
    type Output = <N as NatLess<M>>::Output;
}

pub trait NatEven: Nat {
    type Output: Bool;
}

impl NatEven for Zero {
    type Output = True;
}

impl<N: NatEven> NatEven for Succ<N> {
    type Output = <<N as NatEven>::Output as Bool>::Not;
}

pub struct Not<B>(PhantomData<B>);

impl<B: Bool> Metafunction for Not<B> {
    type Output = B::Not;
}

pub struct And<A, B>(PhantomData<(A, B)>);

impl<A: BoolAnd<B>, B: Bool> Metafunction for And<A, B> {
    type Output = <A as BoolAnd<B>>::Output;
}

pub struct Or<A, B>(PhantomData<(A, B)>);

impl<A: BoolOr<B>, B: Bool> Metafunction for Or<A, B> {
    type Output = <A as BoolOr<B>>::Output;
}

pub struct Plus<A, B>(PhantomData<(A, B)>);

impl<A: NatAdd<B>, B: Nat> Metafunction for Plus<A, B> {
    type Output = <A as NatAdd<B>>::Output;
}

pub struct Minus<A, B>(PhantomData<(A, B)>);

impl<A: NatSub<B>, B: Nat> Metafunction for Minus<A, B> {
    type Output = <A as NatSub<B>>::Output;
}

pub struct EqualTo<A, B>(PhantomData<(A, B)>);

impl<A: NatEq<B>, B: Nat> Metafunction for EqualTo<A, B> {
    type Output = <A as NatEq<B>>::Output;
}

pub struct Less<A, B>(PhantomData<(A, B)>);

impl<A: NatLess<B>, B: Nat> Metafunction for Less<A, B> {
    type Output = <A as NatLess<B>>::Output;
}

pub struct IsEven<N>(PhantomData<N>);

impl<N: NatEven> Metafunction for IsEven<N> {
    type Output = <N as NatEven>::Output;
}

crate::lambda_support!(
    Not<B>,
    And<A, B>,
    Or<A, B>,
    Plus<A, B>,
    Minus<A, B>,
    EqualTo<A, B>,
    Less<A, B>,
    IsEven<N>,
);

impl<Args> Substitute<Args> for True {
    type Output = True;
}

impl<Args> Substitute<Args> for False {
    type Output = False;
}

impl<Args> Substitute<Args> for Zero {
    type Output = Zero;
}

impl<Args, N> Substitute<Args> for Succ<N> {
    type Output = Succ<N>;
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_type_eq_all;

    use super::*;
    use crate::metafn::{_1, _2, ApplyOut, Eval};

    assert_type_eq_all!(Eval<Plus<N2, N3>>, N5);
    assert_type_eq_all!(Eval<Minus<N7, N3>>, N4);
    assert_type_eq_all!(Eval<EqualTo<N4, N4>>, True);
    assert_type_eq_all!(Eval<Less<N4, N2>>, False);
    assert_type_eq_all!(Eval<IsEven<N6>>, True);
    assert_type_eq_all!(Eval<And<True, Eval<Not<False>>>>, Eval<Or<False, True>>);
    assert_type_eq_all!(ApplyOut<And<_1, Not<_2>>, (True, False)>, True);
    assert_type_eq_all!(ApplyOut<Plus<_1, N1>, (N9,)>, N10);
    assert_type_eq_all!(ApplyOut<Less<_2, _1>, (N1, N0)>, True);

    #[test]
    fn values_match_their_unary_form() {
        assert_eq!(N0::VALUE, 0);
        assert_eq!(N16::VALUE, 16);
        assert_eq!(<Eval<Plus<N8, N8>> as Nat>::VALUE, 16);
        assert!(<Eval<IsEven<N10>> as Bool>::VALUE);
        assert!(!<<True as Bool>::Not as Bool>::VALUE);
    }
}
