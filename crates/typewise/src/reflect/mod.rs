//! Member tables and member detection.
//!
//! A type that implements [`Reflect`] (usually through `#[derive(Reflect)]`)
//! carries a static table of its members: fields, enum variants, and the
//! methods, associated constants, associated types and generic associated
//! types ("templates") it declares. Detectors generated by
//! [`has_member!`](crate::has_member), [`has_field!`](crate::has_field),
//! [`has_method!`](crate::has_method), [`has_const!`](crate::has_const),
//! [`has_type!`](crate::has_type) and `has_template!` evaluate a [`Query`]
//! against that table in a constant context, so a detector's answer is
//! available at compile time.
//!
//! ```
//! use typewise::prelude::*;
//!
//! #[derive(Reflect)]
//! #[reflect(methods(len, push))]
//! struct Stack {
//!     items: Vec<u8>,
//! }
//!
//! impl Stack {
//!     fn len(&self) -> usize {
//!         self.items.len()
//!     }
//!
//!     fn push(&mut self, item: u8) {
//!         self.items.push(item);
//!     }
//! }
//!
//! has_method!(HasLen, len);
//! has_field!(HasItems, items);
//! has_field!(HasTop, top);
//!
//! const _: () = assert!(HasLen::<Stack>::VALUE);
//! assert!(HasItems::<Stack>::VALUE);
//! assert!(!HasTop::<Stack>::VALUE);
//! ```
//!
//! A generated detector requires its argument to implement [`Reflect`]; use
//! [`probe!`](crate::probe) to ask about types that may have no member
//! table at all.

use std::fmt;
use std::marker::PhantomData;

pub mod lookup;

pub use lookup::{describe, member, member_of_kind, members};
#[cfg(feature = "templates")]
pub use lookup::template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Variant,
    Method,
    Const,
    Type,
    /// A generic associated type, matched together with its parameter shape.
    #[cfg(feature = "templates")]
    Template,
}

impl MemberKind {
    pub const fn same(self, other: MemberKind) -> bool {
        self as u8 == other as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Variant => "variant",
            MemberKind::Method => "method",
            MemberKind::Const => "associated const",
            MemberKind::Type => "associated type",
            #[cfg(feature = "templates")]
            MemberKind::Template => "template",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of one generic parameter of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Lifetime,
    Type,
    Const,
}

impl ParamKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamKind::Lifetime => "lifetime",
            ParamKind::Type => "type",
            ParamKind::Const => "const",
        }
    }

    /// `type, const` style rendering of a parameter list.
    pub fn render_list(params: &[ParamKind]) -> String {
        params.iter().map(|param| param.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a member table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member {
    pub name: &'static str,
    pub kind: MemberKind,
    /// Generic parameters; empty for everything except templates.
    pub params: &'static [ParamKind],
}

impl Member {
    pub const fn new(name: &'static str, kind: MemberKind) -> Self {
        Self {
            name,
            kind,
            params: &[],
        }
    }

    pub const fn field(name: &'static str) -> Self {
        Self::new(name, MemberKind::Field)
    }

    pub const fn variant(name: &'static str) -> Self {
        Self::new(name, MemberKind::Variant)
    }

    pub const fn method(name: &'static str) -> Self {
        Self::new(name, MemberKind::Method)
    }

    pub const fn constant(name: &'static str) -> Self {
        Self::new(name, MemberKind::Const)
    }

    pub const fn associated_type(name: &'static str) -> Self {
        Self::new(name, MemberKind::Type)
    }

    #[cfg(feature = "templates")]
    pub const fn template(name: &'static str, params: &'static [ParamKind]) -> Self {
        Self {
            name,
            kind: MemberKind::Template,
            params,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}", self.kind, self.name)?;
        if !self.params.is_empty() {
            write!(f, "<{}>", ParamKind::render_list(self.params))?;
        }
        f.write_str("`")
    }
}

/// A type with a static member table.
pub trait Reflect {
    const NAME: &'static str;
    const MEMBERS: &'static [Member];
}

pub const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

pub const fn params_eq(a: &[ParamKind], b: &[ParamKind]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] as u8 != b[i] as u8 {
            return false;
        }
        i += 1;
    }
    true
}

/// What a detector looks for: a name, optionally narrowed to one kind of
/// member and, for templates, one parameter shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub name: &'static str,
    pub kind: Option<MemberKind>,
    pub params: Option<&'static [ParamKind]>,
}

impl Query {
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            kind: None,
            params: None,
        }
    }

    pub const fn of_kind(self, kind: MemberKind) -> Self {
        Self {
            kind: Some(kind),
            ..self
        }
    }

    pub const fn with_params(self, params: &'static [ParamKind]) -> Self {
        Self {
            params: Some(params),
            ..self
        }
    }

    pub const fn matches(&self, member: &Member) -> bool {
        if !str_eq(self.name, member.name) {
            return false;
        }
        if let Some(kind) = self.kind {
            if !kind.same(member.kind) {
                return false;
            }
        }
        match self.params {
            Some(params) => params_eq(params, member.params),
            None => true,
        }
    }

    pub const fn any(&self, members: &[Member]) -> bool {
        let mut i = 0;
        while i < members.len() {
            if self.matches(&members[i]) {
                return true;
            }
            i += 1;
        }
        false
    }
}

/// A compile-time yes/no answer about `T`, produced by the `has_*!` macros.
pub trait Detector {
    const VALUE: bool;
}

#[doc(hidden)]
#[macro_export]
macro_rules! __detector {
    ($(#[$meta:meta])* $vis:vis $detector:ident => $query:expr) => {
        $(#[$meta])*
        $vis struct $detector<T: ?Sized>(::core::marker::PhantomData<T>);

        impl<T: ?Sized + $crate::reflect::Reflect> $crate::reflect::Detector for $detector<T> {
            const VALUE: bool = {
                const QUERY: $crate::reflect::Query = $query;
                QUERY.any(T::MEMBERS)
            };
        }

        impl<T: ?Sized + $crate::reflect::Reflect> $detector<T> {
            pub const VALUE: bool = <Self as $crate::reflect::Detector>::VALUE;
        }
    };
}

/// Defines a detector for a member of any kind with the given name.
#[macro_export]
macro_rules! has_member {
    ($(#[$meta:meta])* $vis:vis $detector:ident, $name:ident) => {
        $crate::__detector!(
            $(#[$meta])* $vis $detector => $crate::reflect::Query::named(stringify!($name))
        );
    };
}

/// Defines a detector for a field or tuple-struct position (`0`, `1`, ..).
#[macro_export]
macro_rules! has_field {
    ($(#[$meta:meta])* $vis:vis $detector:ident, $name:tt) => {
        $crate::__detector!(
            $(#[$meta])* $vis $detector => $crate::reflect::Query::named(stringify!($name))
                .of_kind($crate::reflect::MemberKind::Field)
        );
    };
}

#[macro_export]
macro_rules! has_method {
    ($(#[$meta:meta])* $vis:vis $detector:ident, $name:ident) => {
        $crate::__detector!(
            $(#[$meta])* $vis $detector => $crate::reflect::Query::named(stringify!($name))
                .of_kind($crate::reflect::MemberKind::Method)
        );
    };
}

#[macro_export]
macro_rules! has_const {
    ($(#[$meta:meta])* $vis:vis $detector:ident, $name:ident) => {
        $crate::__detector!(
            $(#[$meta])* $vis $detector => $crate::reflect::Query::named(stringify!($name))
                .of_kind($crate::reflect::MemberKind::Const)
        );
    };
}

/// Defines a detector for an associated (nested) type.
#[macro_export]
macro_rules! has_type {
    ($(#[$meta:meta])* $vis:vis $detector:ident, $name:ident) => {
        $crate::__detector!(
            $(#[$meta])* $vis $detector => $crate::reflect::Query::named(stringify!($name))
                .of_kind($crate::reflect::MemberKind::Type)
        );
    };
}

/// Defines a detector for a generic associated type.
///
/// `has_template!(HasIter, Iter)` matches any parameter list;
/// `has_template!(HasIter, Iter<lifetime, type>)` matches only that shape.
/// Parameter kinds are written `type`, `const` and `lifetime`.
#[cfg(feature = "templates")]
#[macro_export]
macro_rules! has_template {
    ($(#[$meta:meta])* $vis:vis $detector:ident, $name:ident < $($param:tt),* >) => {
        $crate::__detector!(
            $(#[$meta])* $vis $detector => $crate::reflect::Query::named(stringify!($name))
                .of_kind($crate::reflect::MemberKind::Template)
                .with_params(&[$($crate::__param_kind!($param)),*])
        );
    };
    ($(#[$meta:meta])* $vis:vis $detector:ident, $name:ident) => {
        $crate::__detector!(
            $(#[$meta])* $vis $detector => $crate::reflect::Query::named(stringify!($name))
                .of_kind($crate::reflect::MemberKind::Template)
        );
    };
}

#[cfg(feature = "templates")]
#[doc(hidden)]
#[macro_export]
macro_rules! __param_kind {
    (type) => {
        $crate::reflect::ParamKind::Type
    };
    (const) => {
        $crate::reflect::ParamKind::Const
    };
    (lifetime) => {
        $crate::reflect::ParamKind::Lifetime
    };
}

/// Asks a detector about a type that might not implement [`Reflect`].
///
/// Built by [`probe!`](crate::probe); resolution prefers [`DetectViaTable`]
/// and falls back to [`DetectViaOpaque`] through auto-referencing.
pub struct Probe<D>(PhantomData<D>);

impl<D> Probe<D> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D> Default for Probe<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[doc(hidden)]
pub trait DetectViaTable {
    fn detect(&self) -> bool;
}

impl<D: Detector> DetectViaTable for Probe<D> {
    fn detect(&self) -> bool {
        D::VALUE
    }
}

#[doc(hidden)]
pub trait DetectViaOpaque {
    fn detect(&self) -> bool;
}

impl<D> DetectViaOpaque for &Probe<D> {
    fn detect(&self) -> bool {
        false
    }
}

/// Runs a detector on any concrete type, including unsized types and types
/// without a member table, which answer `false`.
///
/// ```
/// use typewise::prelude::*;
///
/// has_member!(HasLen, len);
///
/// assert!(!probe!(HasLen<dyn std::any::Any>));
/// assert!(!probe!(HasLen<str>));
/// ```
#[macro_export]
macro_rules! probe {
    ($detector:ty) => {{
        #[allow(unused_imports)]
        use $crate::reflect::{DetectViaOpaque as _, DetectViaTable as _};
        (&$crate::reflect::Probe::<$detector>::new()).detect()
    }};
}
