//! Compile-time metaprogramming with types.
//!
//! `typewise` treats types as values and trait resolution as evaluation. It
//! provides:
//!
//! - a metafunction protocol with placeholder lambdas ([`metafn`]);
//! - type-level booleans and naturals ([`integral`]);
//! - cursors over type sequences with traversal categories ([`iterator`]);
//! - stored sequences: lists, sets and maps, and ranges ([`sequence`]);
//! - lazy zip, transform and filter views ([`view`]);
//! - the fold family and the algorithms built on it ([`algorithm`]);
//! - member tables, compile-time member detectors and runtime lookups
//!   ([`reflect`]).
//!
//! Everything except [`reflect`] and [`inspect`] exists only at compile time:
//! an ill-formed computation is a build error, never a runtime failure.
//!
//! # Example
//!
//! ```
//! use typewise::prelude::*;
//!
//! type Widened = Eval<Transform<list![i32, char, f64], AddPointer<_1>>>;
//! static_assertions::assert_type_eq_all!(Widened, list![*const i32, *const char, *const f64]);
//!
//! type Evens = Eval<CopyIf<HalfOpenRange<N0, N7>, IsEven<_1>>>;
//! assert_eq!(typewise::inspect::nat_values::<Evens>(), vec![0, 2, 4, 6]);
//! ```
//!
//! # Features
//!
//! - `derive` (default): re-exports `#[derive(Reflect)]`.
//! - `templates` (default): detection of generic associated types together
//!   with their parameter shapes.
//!
//! Deep computations may exceed the compiler's default recursion limit; raise
//! it with `#![recursion_limit = "256"]` in the crate doing the computing.

#![recursion_limit = "256"]

// Lets `::typewise` paths emitted by the derive resolve inside this crate too.
extern crate self as typewise;

pub mod algorithm;
pub mod error;
pub mod inspect;
pub mod integral;
pub mod iterator;
pub mod metafn;
pub mod reflect;
pub mod sequence;
pub mod view;

pub use error::ReflectError;
pub use reflect::{Detector, Member, MemberKind, ParamKind, Reflect};
#[cfg(feature = "derive")]
pub use typewise_derive::Reflect;

pub mod prelude {
    pub use crate::algorithm::{
        Accumulate, Collect, CopyIf, CountIf, FindIf, Fold, IterFold, RemoveIf, Reverse,
        ReverseFold, ReverseIterFold, Transform,
    };
    pub use crate::integral::{
        And, Bool, EqualTo, False, IsEven, Less, Minus, N0, N1, N2, N3, N4, N5, N6, N7, N8, N9,
        N10, N11, N12, N13, N14, N15, N16, Nat, Not, Or, Plus, Succ, True, Zero,
    };
    pub use crate::iterator::{
        Advance, BidirectionalTag, Cursor, CursorItem, CursorNext, CursorPrior, Deref, Distance,
        ForwardTag, Next, Pos, Prior, RandomAccessTag, SameCursor, SinglePassTag,
    };
    pub use crate::metafn::{
        _1, _2, _3, _4, AddPointer, Apply, ApplyOut, Bind, Eval, Identity, If, Metafunction,
        Quote, Substitute,
    };
    pub use crate::reflect::{Detector, Member, MemberKind, ParamKind, Reflect};
    pub use crate::sequence::{
        At, Back, Begin, Clear, Cons, Empty, End, Erase, EraseKey, Front, HalfOpenRange, HasKey,
        Insert, InsertKey, Map, Nil, Pair, PopBack, PopFront, PushBack, PushFront, Sequence, Set,
        Size,
    };
    pub use crate::view::{FilterView, TransformView, ZipView};
    pub use crate::{
        has_const, has_field, has_member, has_method, has_type, lambda_support, list, probe,
    };

    #[cfg(feature = "templates")]
    pub use crate::has_template;
    #[cfg(feature = "derive")]
    pub use typewise_derive::Reflect;
}
