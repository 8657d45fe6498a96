use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::Span;

pub(crate) fn resolve_typewise_path() -> syn::Result<syn::Path> {
    match crate_name("typewise") {
        // Inside the typewise package itself (doctests, integration tests) the
        // library is reachable through its `extern crate self` alias.
        Ok(FoundCrate::Itself) => Ok(syn::parse_quote!(::typewise)),
        Ok(FoundCrate::Name(name)) => {
            let ident = syn::Ident::new(&name.replace('-', "_"), Span::call_site());
            Ok(syn::parse_quote!(::#ident))
        }
        Err(_) => Err(syn::Error::new(
            Span::call_site(),
            "could not resolve `typewise`; add it as a dependency (renamed dependencies are supported)",
        )),
    }
}
