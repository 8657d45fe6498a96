//! Turning type-level sequences into runtime values.
//!
//! Useful in tests and diagnostics: any sequence is first collected into a
//! list, then read back element by element.
//!
//! ```
//! use typewise::prelude::*;
//! use typewise::inspect;
//!
//! assert_eq!(inspect::nat_values::<HalfOpenRange<N2, N5>>(), vec![2, 3, 4]);
//! assert_eq!(inspect::render::<list![u8, bool]>(), "[u8, bool]");
//! ```

use std::any::type_name;

use tracing::trace;

use crate::algorithm::Collect;
use crate::integral::Nat;
use crate::metafn::{Eval, Metafunction};
use crate::sequence::{Cons, Nil};

/// Lists whose elements can be named.
pub trait TypeNames {
    fn push_names(out: &mut Vec<&'static str>);
}

impl TypeNames for Nil {
    fn push_names(_: &mut Vec<&'static str>) {}
}

impl<H, T: TypeNames> TypeNames for Cons<H, T> {
    fn push_names(out: &mut Vec<&'static str>) {
        out.push(type_name::<H>());
        T::push_names(out);
    }
}

/// Lists of naturals.
pub trait NatValues {
    fn push_values(out: &mut Vec<usize>);
}

impl NatValues for Nil {
    fn push_values(_: &mut Vec<usize>) {}
}

impl<H: Nat, T: NatValues> NatValues for Cons<H, T> {
    fn push_values(out: &mut Vec<usize>) {
        out.push(H::VALUE);
        T::push_values(out);
    }
}

/// Fully qualified names of the elements of `S`, in order.
pub fn type_names<S>() -> Vec<&'static str>
where
    Collect<S>: Metafunction,
    Eval<Collect<S>>: TypeNames,
{
    let mut names = Vec::new();
    <Eval<Collect<S>>>::push_names(&mut names);
    names
}

/// Values of a sequence of naturals, in order.
pub fn nat_values<S>() -> Vec<usize>
where
    Collect<S>: Metafunction,
    Eval<Collect<S>>: NatValues,
{
    let mut values = Vec::new();
    <Eval<Collect<S>>>::push_values(&mut values);
    trace!(target: "typewise::inspect", sequence = type_name::<S>(), ?values, "reified naturals");
    values
}

/// `[A, B, ..]` with each element's name stripped of its module path.
pub fn render<S>() -> String
where
    Collect<S>: Metafunction,
    Eval<Collect<S>>: TypeNames,
{
    let names: Vec<String> = type_names::<S>().into_iter().map(short_name).collect();
    let rendered = format!("[{}]", names.join(", "));
    trace!(target: "typewise::inspect", sequence = type_name::<S>(), %rendered, "rendered sequence");
    rendered
}

/// Drops module paths from a type name, keeping generic structure:
/// `alloc::vec::Vec<core::option::Option<u8>>` becomes `Vec<Option<u8>>`.
fn short_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
            continue;
        }
        out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
        segment.clear();
        out.push(ch);
    }
    out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
    out
}
