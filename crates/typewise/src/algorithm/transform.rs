//! Algorithms that build a new list from a sequence.
//!
//! All of them are right folds that push onto the front of an empty list, so
//! the output keeps the input order (except for [`Reverse`]).

use std::marker::PhantomData;

use crate::algorithm::fold::{Fold, ReverseFold};
use crate::metafn::{_1, _2, Bind, Eval, If, Metafunction};
use crate::sequence::{Nil, PushFront};

/// A list holding `Op(x)` for every element `x` of `S`, in order.
///
/// ```
/// use typewise::prelude::*;
///
/// static_assertions::assert_type_eq_all!(
///     Eval<Transform<list![i32, char], AddPointer<_1>>>,
///     list![*const i32, *const char],
/// );
/// ```
pub struct Transform<S, Op>(PhantomData<(S, Op)>);

impl<S, Op> Metafunction for Transform<S, Op>
where
    ReverseFold<S, Nil, PushFront<_1, Bind<Op, (_2,)>>>: Metafunction,
{
    type Output = Eval<ReverseFold<S, Nil, PushFront<_1, Bind<Op, (_2,)>>>>;
}

/// The elements of any sequence, copied into a list.
pub struct Collect<S>(PhantomData<S>);

impl<S> Metafunction for Collect<S>
where
    ReverseFold<S, Nil, PushFront<_1, _2>>: Metafunction,
{
    type Output = Eval<ReverseFold<S, Nil, PushFront<_1, _2>>>;
}

/// The elements of `S` for which `Pred` yields `True`, in order.
pub struct CopyIf<S, Pred>(PhantomData<(S, Pred)>);

impl<S, Pred> Metafunction for CopyIf<S, Pred>
where
    ReverseFold<S, Nil, If<Bind<Pred, (_2,)>, PushFront<_1, _2>, _1>>: Metafunction,
{
    type Output = Eval<ReverseFold<S, Nil, If<Bind<Pred, (_2,)>, PushFront<_1, _2>, _1>>>;
}

/// The elements of `S` for which `Pred` yields `False`, in order.
pub struct RemoveIf<S, Pred>(PhantomData<(S, Pred)>);

impl<S, Pred> Metafunction for RemoveIf<S, Pred>
where
    ReverseFold<S, Nil, If<Bind<Pred, (_2,)>, _1, PushFront<_1, _2>>>: Metafunction,
{
    type Output = Eval<ReverseFold<S, Nil, If<Bind<Pred, (_2,)>, _1, PushFront<_1, _2>>>>;
}

/// The elements of `S` as a list, last first.
pub struct Reverse<S>(PhantomData<S>);

impl<S> Metafunction for Reverse<S>
where
    Fold<S, Nil, PushFront<_1, _2>>: Metafunction,
{
    type Output = Eval<Fold<S, Nil, PushFront<_1, _2>>>;
}

crate::lambda_support!(Collect<S>, Reverse<S>);
