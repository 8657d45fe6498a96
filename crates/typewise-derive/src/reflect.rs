//! Expansion of `#[derive(Reflect)]`.

use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::DeriveInput;

use crate::attrs::{Entry, EntryKind, ParamShape, ReflectAttrs};
use crate::runtime_path::resolve_typewise_path;

pub(crate) fn derive(input: DeriveInput) -> syn::Result<TokenStream> {
    let attrs = ReflectAttrs::from_derive_input(&input)
        .map_err(|e| syn::Error::new_spanned(&input, e.to_string()))?;

    let validation_errors = attrs.validate(cfg!(feature = "templates"));
    if !validation_errors.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            validation_errors.join("; "),
        ));
    }

    let krate = resolve_typewise_path()?;
    let reflect_impl = generate_impl(&attrs, &krate);
    let checks = generate_checks(&attrs);
    Ok(quote! {
        #reflect_impl
        #checks
    })
}

/// Items named in `methods`, `consts`, `types` and `template` must exist on
/// the type. Each one is named inside a hidden function so a misspelled or
/// missing item is a compile error at the derive site.
fn generate_checks(attrs: &ReflectAttrs) -> TokenStream {
    let ident = &attrs.ident;
    let (impl_generics, ty_generics, where_clause) = attrs.generics.split_for_impl();
    let phantom = quote!(::core::marker::PhantomData);

    let methods = attrs.methods.iter().map(|method| quote!(let _ = Self::#method;));
    let consts = attrs.consts.iter().map(|constant| quote!(let _ = Self::#constant;));
    let types = attrs.types.iter().filter_map(|path| {
        let segments: Vec<&syn::Ident> = path.segments.iter().map(|s| &s.ident).collect();
        let (name, owner) = segments.split_last()?;
        Some(quote!(let _: #phantom<<Self as #(#owner)::*>::#name> = #phantom;))
    });
    let declared: Vec<TokenStream> = methods.chain(consts).chain(types).collect();

    let templates: Vec<TokenStream> = attrs
        .templates
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let check = format_ident!("__typewise_template_{}", index);
            let owner = &template.owner;
            let name = &template.ident;
            let (t_impl_generics, _, t_where_clause) = template.generics.split_for_impl();
            let arguments = template.arguments();
            let applied = if arguments.is_empty() {
                quote!(#name)
            } else {
                quote!(#name<#(#arguments),*>)
            };
            quote! {
                #[allow(dead_code)]
                fn #check #t_impl_generics () #t_where_clause {
                    let _: #phantom<<Self as #(#owner)::*>::#applied> = #phantom;
                }
            }
        })
        .collect();

    if declared.is_empty() && templates.is_empty() {
        return TokenStream::new();
    }

    quote! {
        const _: () = {
            impl #impl_generics #ident #ty_generics #where_clause {
                #[allow(dead_code)]
                fn __typewise_declared_items() {
                    #(#declared)*
                }
                #(#templates)*
            }
        };
    }
}

fn generate_impl(attrs: &ReflectAttrs, krate: &syn::Path) -> TokenStream {
    let ident = &attrs.ident;
    let (impl_generics, ty_generics, where_clause) = attrs.generics.split_for_impl();
    let type_name = attrs.type_name();
    let members: Vec<TokenStream> = attrs
        .entries()
        .iter()
        .map(|entry| generate_member(entry, krate))
        .collect();

    quote! {
        impl #impl_generics #krate::reflect::Reflect for #ident #ty_generics #where_clause {
            const NAME: &'static str = #type_name;
            const MEMBERS: &'static [#krate::reflect::Member] = &[
                #(#members),*
            ];
        }
    }
}

fn generate_member(entry: &Entry, krate: &syn::Path) -> TokenStream {
    let name = &entry.name;
    let member = quote!(#krate::reflect::Member);
    match entry.kind {
        EntryKind::Field => quote!(#member::field(#name)),
        EntryKind::Variant => quote!(#member::variant(#name)),
        EntryKind::Method => quote!(#member::method(#name)),
        EntryKind::Const => quote!(#member::constant(#name)),
        EntryKind::Type => quote!(#member::associated_type(#name)),
        EntryKind::Template => {
            let params = entry.params.iter().map(|shape| {
                let variant = match shape {
                    ParamShape::Lifetime => quote!(Lifetime),
                    ParamShape::Type => quote!(Type),
                    ParamShape::Const => quote!(Const),
                };
                quote!(#krate::reflect::ParamKind::#variant)
            });
            quote!(#member::template(#name, &[#(#params),*]))
        }
    }
}
