//! The sequence protocol and its tag-dispatched operations.
//!
//! Every sequence names a `Tag`. Each operation has a front-end metafunction
//! node (`Size<S>`, `PushFront<S, T>`, ...) and a dispatch trait implemented
//! on tags (`SizeImpl<S>`, `PushFrontImpl<S, T>`, ...). Evaluating the node
//! looks up the implementation registered for `S::Tag`; a tag without one is
//! a build failure, which is how, for example, pushing onto a range is
//! rejected.

use std::marker::PhantomData;

use crate::integral::{Bool, Nat};
use crate::iterator::{Cursor, SameCursor};
use crate::metafn::Metafunction;

pub mod list;
pub mod map;
pub mod range;
pub mod set;

pub use list::{Cons, ListTag, Nil, TypeList};
pub use map::{Map, MapTag, Pair};
pub use range::{HalfOpenRange, RangeTag};
pub use set::{Set, SetTag};

/// A type-level sequence: a tag selecting its operations and the cursors
/// delimiting it.
///
/// `Begin` and `End` belong to one cursor family: `Begin` must be comparable
/// with `End` through [`SameCursor`], since every walk over the sequence stops
/// when that comparison yields `True`. A sequence whose end is a separate
/// sentinel type implements `SameCursor<Sentinel>` for its cursors, answering
/// `False` for every position before the end.
pub trait Sequence {
    type Tag;
    type Begin: Cursor + SameCursor<Self::End>;
    type End: Cursor;
}

pub trait SizeImpl<S> {
    type Output: Nat;
}

pub trait EmptyImpl<S> {
    type Output: Bool;
}

pub trait FrontImpl<S> {
    type Output;
}

pub trait BackImpl<S> {
    type Output;
}

/// Element lookup exposed through [`At`]; by offset for ordered sequences and
/// by key for maps.
pub trait AtImpl<S, N> {
    type Output;
}

/// Element at offset `N`; what positional cursors dereference to.
pub trait ItemImpl<S, N> {
    type Output;
}

pub trait PushFrontImpl<S, T> {
    type Output;
}

pub trait PushBackImpl<S, T> {
    type Output;
}

pub trait PopFrontImpl<S> {
    type Output;
}

pub trait PopBackImpl<S> {
    type Output;
}

pub trait ClearImpl<S> {
    type Output;
}

pub trait InsertImpl<S, Pos, T> {
    type Output;
}

pub trait EraseImpl<S, Pos> {
    type Output;
}

pub trait HasKeyImpl<S, K> {
    type Output: Bool;
}

pub trait InsertKeyImpl<S, K> {
    type Output;
}

pub trait EraseKeyImpl<S, K> {
    type Output;
}

pub struct Begin<S>(PhantomData<S>);

impl<S: Sequence> Metafunction for Begin<S> {
    type Output = S::Begin;
}

pub struct End<S>(PhantomData<S>);

impl<S: Sequence> Metafunction for End<S> {
    type Output = S::End;
}

macro_rules! dispatch {
    ($(
        $(#[$meta:meta])*
        $node:ident<$seq:ident $(, $arg:ident)*> => $imp:ident;
    )+) => {
        $(
            $(#[$meta])*
            pub struct $node<$seq $(, $arg)*>(PhantomData<($seq, $($arg,)*)>);

            impl<$seq $(, $arg)*> Metafunction for $node<$seq $(, $arg)*>
            where
                $seq: Sequence,
                $seq::Tag: $imp<$seq $(, $arg)*>,
            {
                type Output = <$seq::Tag as $imp<$seq $(, $arg)*>>::Output;
            }
        )+

        crate::lambda_support!($($node<$seq $(, $arg)*>),+);
    };
}

dispatch! {
    /// Number of elements, as a [`Nat`].
    Size<S> => SizeImpl;
    /// [`True`](crate::integral::True) when the sequence has no elements.
    Empty<S> => EmptyImpl;
    Front<S> => FrontImpl;
    Back<S> => BackImpl;
    At<S, N> => AtImpl;
    PushFront<S, T> => PushFrontImpl;
    PushBack<S, T> => PushBackImpl;
    PopFront<S> => PopFrontImpl;
    PopBack<S> => PopBackImpl;
    /// An empty sequence of the same kind.
    Clear<S> => ClearImpl;
    /// `T` inserted before the cursor `P`, which must point into `S`.
    Insert<S, P, T> => InsertImpl;
    /// `S` without the element at the cursor `P`.
    Erase<S, P> => EraseImpl;
    HasKey<S, K> => HasKeyImpl;
    InsertKey<S, K> => InsertKeyImpl;
    EraseKey<S, K> => EraseKeyImpl;
}

crate::lambda_support!(Begin<S>, End<S>);
