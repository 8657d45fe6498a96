//! The calling convention every type-level computation in this crate follows.
//!
//! A *metafunction* is a type whose [`Metafunction::Output`] is its result:
//! `Eval<AddPointer<i32>>` is `*const i32`. A *metafunction class* is a type
//! that can be applied to an argument tuple through [`Apply`]; it is what
//! higher-order algorithms such as [`Fold`](crate::algorithm::Fold) accept.
//!
//! Any metafunction node that mentions the placeholders [`_1`] .. [`_4`] is
//! also a metafunction class (a *lambda expression*): applying it to
//! `(A, B)` first replaces `_1` with `A` and `_2` with `B` through
//! [`Substitute`], then evaluates the node.
//!
//! ```
//! use typewise::prelude::*;
//!
//! type Op = AddPointer<_1>;
//! let _: ApplyOut<Op, (u8,)> = core::ptr::null::<u8>();
//! ```

use std::marker::PhantomData;

/// A type-level function whose result is [`Metafunction::Output`].
pub trait Metafunction {
    type Output;
}

/// The result of evaluating a metafunction.
pub type Eval<F> = <F as Metafunction>::Output;

/// A metafunction class: something that can be invoked with an argument tuple.
///
/// `Args` is always a tuple, `(A,)` for unary operations and `(State, Item)`
/// for the binary operations of the fold family.
pub trait Apply<Args> {
    type Output;
}

/// The result of applying a metafunction class to an argument tuple.
pub type ApplyOut<F, Args> = <F as Apply<Args>>::Output;

/// Placeholder substitution.
///
/// Placeholders resolve to the matching element of `Args`, metafunction nodes
/// substitute their parameters and evaluate, and literal types resolve to
/// themselves. Types from outside this crate can be wrapped in [`Quote`] to be
/// used as literals inside a lambda expression.
pub trait Substitute<Args> {
    type Output;
}

/// Makes metafunction nodes usable as lambda expressions.
///
/// For each listed node this implements [`Substitute`] (substitute every
/// parameter, then evaluate) and [`Apply`] (substitute the node itself).
/// The node must already implement [`Metafunction`].
///
/// ```
/// use std::marker::PhantomData;
/// use typewise::prelude::*;
///
/// pub struct Wrap<T>(PhantomData<T>);
///
/// impl<T> Metafunction for Wrap<T> {
///     type Output = Option<T>;
/// }
///
/// typewise::lambda_support!(Wrap<T>);
///
/// let _: PhantomData<Eval<Transform<list![u8, u16], Wrap<_1>>>> =
///     PhantomData::<list![Option<u8>, Option<u16>]>;
/// ```
#[macro_export]
macro_rules! lambda_support {
    ($($node:ident < $($param:ident),+ >),+ $(,)?) => {
        $(
            impl<__Args, $($param),+> $crate::metafn::Substitute<__Args> for $node<$($param),+>
            where
                $($param: $crate::metafn::Substitute<__Args>,)+
                $node<$(<$param as $crate::metafn::Substitute<__Args>>::Output),+>:
                    $crate::metafn::Metafunction,
            {
                type Output = <$node<$(<$param as $crate::metafn::Substitute<__Args>>::Output),+>
                    as $crate::metafn::Metafunction>::Output;
            }

            impl<__Args, $($param),+> $crate::metafn::Apply<__Args> for $node<$($param),+>
            where
                Self: $crate::metafn::Substitute<__Args>,
            {
                type Output = <Self as $crate::metafn::Substitute<__Args>>::Output;
            }
        )+
    };
}

macro_rules! placeholders {
    ($($placeholder:ident => $position:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Placeholder for argument ", stringify!($position), " of a lambda expression.")]
            #[allow(non_camel_case_types)]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $placeholder;

            impl<Args> Apply<Args> for $placeholder
            where
                $placeholder: Substitute<Args>,
            {
                type Output = <$placeholder as Substitute<Args>>::Output;
            }
        )+
    };
}

placeholders!(_1 => 1, _2 => 2, _3 => 3, _4 => 4);

macro_rules! select_argument {
    ($placeholder:ident: $(($($arg:ident),+) => $picked:ident),+ $(,)?) => {
        $(
            impl<$($arg),+> Substitute<($($arg,)+)> for $placeholder {
                type Output = $picked;
            }
        )+
    };
}

select_argument!(_1: (A) => A, (A, B) => A, (A, B, C) => A, (A, B, C, D) => A);
select_argument!(_2: (A, B) => B, (A, B, C) => B, (A, B, C, D) => B);
select_argument!(_3: (A, B, C) => C, (A, B, C, D) => C);
select_argument!(_4: (A, B, C, D) => D);

/// A literal inside a lambda expression; never substituted into.
pub struct Quote<T>(PhantomData<T>);

impl<Args, T> Substitute<Args> for Quote<T> {
    type Output = T;
}

/// `Quote<T>` applied to anything is `T`.
impl<Args, T> Apply<Args> for Quote<T> {
    type Output = T;
}

impl<T> Metafunction for Quote<T> {
    type Output = T;
}

macro_rules! literal_substitution {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<Args> Substitute<Args> for $ty {
                type Output = $ty;
            }
        )+
    };
}

literal_substitution!(
    (),
    bool,
    char,
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    &'static str,
    String,
);

impl<Args, T: Substitute<Args>> Substitute<Args> for *const T {
    type Output = *const T::Output;
}

impl<Args, T: Substitute<Args>> Substitute<Args> for *mut T {
    type Output = *mut T::Output;
}

/// Partial application of a metafunction class.
///
/// `Params` is a tuple of fixed arguments and placeholders; when the binding is
/// applied every parameter is substituted and `F` is applied to the result.
/// `Bind<F, (_2, _1)>` is `F` with its arguments swapped.
pub struct Bind<F, Params>(PhantomData<(F, Params)>);

macro_rules! bind_arity {
    ($($param:ident),+) => {
        impl<Args, F, $($param),+> Apply<Args> for Bind<F, ($($param,)+)>
        where
            $($param: Substitute<Args>,)+
            F: Apply<($(<$param as Substitute<Args>>::Output,)+)>,
        {
            type Output = <F as Apply<($(<$param as Substitute<Args>>::Output,)+)>>::Output;
        }
    };
}

bind_arity!(P1);
bind_arity!(P1, P2);
bind_arity!(P1, P2, P3);
bind_arity!(P1, P2, P3, P4);

impl<Args, F, Params> Substitute<Args> for Bind<F, Params>
where
    Bind<F, Params>: Apply<Args>,
{
    type Output = <Bind<F, Params> as Apply<Args>>::Output;
}

pub struct Identity<T>(PhantomData<T>);

impl<T> Metafunction for Identity<T> {
    type Output = T;
}

/// Adds a pointer to `T`: `*const T`.
pub struct AddPointer<T>(PhantomData<T>);

impl<T> Metafunction for AddPointer<T> {
    type Output = *const T;
}

/// `A` when `C` is [`True`](crate::integral::True), `B` otherwise.
///
/// Both branches are substituted when used in a lambda expression, so both
/// must be well formed.
pub struct If<C, A, B>(PhantomData<(C, A, B)>);

impl<C, A, B> Metafunction for If<C, A, B>
where
    C: crate::integral::Select<A, B>,
{
    type Output = <C as crate::integral::Select<A, B>>::Output;
}

crate::lambda_support!(Identity<T>, AddPointer<T>, If<C, A, B>);
