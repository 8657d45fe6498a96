//! Derive macro for `typewise` member tables.
//!
//! `#[derive(Reflect)]` implements `typewise::reflect::Reflect`, listing the
//! type's fields (or enum variants) together with the associated items named
//! in `#[reflect(..)]`. The `has_*!` detectors in `typewise` query that table.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod attrs;
mod reflect;
mod runtime_path;

/// Generates a `typewise::reflect::Reflect` impl.
///
/// # Container Attributes
///
/// - `#[reflect(name = "...")]` - Reported type name (defaults to the identifier)
/// - `#[reflect(methods(a, b))]` - Methods to list
/// - `#[reflect(consts(A))]` - Associated constants to list
/// - `#[reflect(types(Storage::Item))]` - Associated types to list, with their trait
/// - `#[reflect(template = "Storage::Drain<'a> where Self: 'a")]` - A generic
///   associated type and its parameter shape; repeatable. Needs the `templates`
///   feature. Parameter names must not reuse the type's own.
///
/// Every declared item is checked: the expansion names each one on `Self`,
/// so a missing method, constant, or associated type fails to compile.
/// Methods must be nameable without type arguments.
///
/// # Field and Variant Attributes
///
/// - `#[reflect(skip)]` - Leave the entry out of the table
/// - `#[reflect(rename = "...")]` - Reported name
///
/// # Example
///
/// ```ignore
/// #[derive(Reflect)]
/// #[reflect(methods(len, push), types(Iterator::Item))]
/// pub struct Stack {
///     items: Vec<u8>,
///     #[reflect(skip)]
///     scratch: Vec<u8>,
/// }
///
/// impl Stack {
///     pub fn len(&self) -> usize { self.items.len() }
///     pub fn push(&mut self, item: u8) { self.items.push(item) }
/// }
///
/// impl Iterator for Stack {
///     type Item = u8;
///     fn next(&mut self) -> Option<u8> { self.items.pop() }
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match reflect::derive(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
