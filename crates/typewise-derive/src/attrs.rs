//! Attribute parsing for `#[derive(Reflect)]` using darling.
//!
//! Container attributes declare the associated items a member table should
//! list; field and variant attributes adjust or hide individual entries.

use std::collections::HashSet;

use darling::util::PathList;
use darling::{FromDeriveInput, FromField, FromMeta, FromVariant};
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{GenericParam, Generics, Ident, Token};

/// A generic associated type signature such as `Lending::Iter<'a, T>`, written
/// as a string: `#[reflect(template = "Lending::Iter<'a, T> where Self: 'a")]`.
///
/// `owner` is the trait path in front of the name; the where clause, if any,
/// is kept in `generics`.
#[derive(Debug, Clone)]
pub struct TemplateSig {
    pub owner: Vec<Ident>,
    pub ident: Ident,
    pub generics: Generics,
}

impl Parse for TemplateSig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut owner = Vec::new();
        let mut ident: Ident = input.parse()?;
        while input.peek(Token![::]) {
            input.parse::<Token![::]>()?;
            owner.push(std::mem::replace(&mut ident, input.parse()?));
        }
        let mut generics: Generics = input.parse()?;
        generics.where_clause = input.parse()?;
        Ok(Self {
            owner,
            ident,
            generics,
        })
    }
}

impl FromMeta for TemplateSig {
    fn from_string(value: &str) -> darling::Result<Self> {
        syn::parse_str(value).map_err(|err| {
            darling::Error::custom(format!("invalid template signature `{value}`: {err}"))
        })
    }
}

/// The kind of each generic parameter, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape {
    Lifetime,
    Type,
    Const,
}

impl TemplateSig {
    pub fn shape(&self) -> Vec<ParamShape> {
        self.generics
            .params
            .iter()
            .map(|param| match param {
                GenericParam::Lifetime(_) => ParamShape::Lifetime,
                GenericParam::Type(_) => ParamShape::Type,
                GenericParam::Const(_) => ParamShape::Const,
            })
            .collect()
    }

    /// The parameters as arguments: `<'a, T, N>` for `<'a, T: Clone, const N: usize>`.
    pub fn arguments(&self) -> Vec<TokenStream> {
        self.generics
            .params
            .iter()
            .map(|param| match param {
                GenericParam::Lifetime(param) => {
                    let lifetime = &param.lifetime;
                    quote!(#lifetime)
                }
                GenericParam::Type(param) => {
                    let ident = &param.ident;
                    quote!(#ident)
                }
                GenericParam::Const(param) => {
                    let ident = &param.ident;
                    quote!(#ident)
                }
            })
            .collect()
    }
}

/// Container-level attributes for `#[derive(Reflect)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(reflect), supports(struct_any, enum_any))]
pub struct ReflectAttrs {
    pub ident: Ident,
    pub generics: Generics,
    pub data: darling::ast::Data<ReflectVariant, ReflectField>,

    /// Overrides the reported type name.
    #[darling(default)]
    pub name: Option<String>,

    #[darling(default)]
    pub methods: PathList,

    #[darling(default)]
    pub consts: PathList,

    /// Associated types, written with their trait: `types(Iterator::Item)`.
    #[darling(default)]
    pub types: PathList,

    #[darling(default, multiple, rename = "template")]
    pub templates: Vec<TemplateSig>,
}

#[derive(Debug, Clone, FromField)]
#[darling(attributes(reflect))]
pub struct ReflectField {
    pub ident: Option<Ident>,

    #[darling(default)]
    pub skip: bool,

    #[darling(default)]
    pub rename: Option<String>,
}

#[derive(Debug, Clone, FromVariant)]
#[darling(attributes(reflect))]
pub struct ReflectVariant {
    pub ident: Ident,

    #[darling(default)]
    pub skip: bool,

    #[darling(default)]
    pub rename: Option<String>,
}

/// Which table column an entry lands in; used for duplicate checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Field,
    Variant,
    Method,
    Const,
    Type,
    Template,
}

impl EntryKind {
    fn label(self) -> &'static str {
        match self {
            EntryKind::Field => "field",
            EntryKind::Variant => "variant",
            EntryKind::Method => "method",
            EntryKind::Const => "const",
            EntryKind::Type => "type",
            EntryKind::Template => "template",
        }
    }
}

/// One resolved entry of the member table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub params: Vec<ParamShape>,
}

impl Entry {
    fn plain(name: String, kind: EntryKind) -> Self {
        Self {
            name,
            kind,
            params: Vec::new(),
        }
    }
}

impl ReflectAttrs {
    pub fn type_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.ident.to_string())
    }

    /// Every member table entry in declaration order: data members first,
    /// then methods, consts, types and templates.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::new();

        match &self.data {
            darling::ast::Data::Struct(fields) => {
                for (index, field) in fields.iter().enumerate() {
                    if field.skip {
                        continue;
                    }
                    entries.push(Entry::plain(field.name(index), EntryKind::Field));
                }
            }
            darling::ast::Data::Enum(variants) => {
                for variant in variants.iter().filter(|variant| !variant.skip) {
                    entries.push(Entry::plain(variant.name(), EntryKind::Variant));
                }
            }
        }

        let declared = [
            (&self.methods, EntryKind::Method),
            (&self.consts, EntryKind::Const),
            (&self.types, EntryKind::Type),
        ];
        for (paths, kind) in declared {
            for path in paths.iter() {
                entries.push(Entry::plain(member_name(path), kind));
            }
        }

        for template in &self.templates {
            entries.push(Entry {
                name: template.ident.to_string(),
                kind: EntryKind::Template,
                params: template.shape(),
            });
        }

        entries
    }

    /// Returns a list of validation errors, or an empty vec if valid.
    pub fn validate(&self, templates_enabled: bool) -> Vec<String> {
        let mut errors = Vec::new();

        if !templates_enabled && !self.templates.is_empty() {
            errors.push(
                "`template` requires the `templates` feature of typewise".to_string(),
            );
        }

        for paths in [&self.methods, &self.consts] {
            for path in paths.iter() {
                if path.get_ident().is_none() {
                    errors.push(format!(
                        "expected a plain name, found path `{}`",
                        path_name(path)
                    ));
                }
            }
        }

        for path in self.types.iter() {
            if path.segments.len() < 2 {
                errors.push(format!(
                    "associated type `{}` must be written with its trait, as `Trait::{}`",
                    path_name(path),
                    path_name(path)
                ));
            }
        }

        for template in &self.templates {
            if template.owner.is_empty() {
                errors.push(format!(
                    "template `{}` must be written with its trait, as `Trait::{}<..>`",
                    template.ident, template.ident
                ));
            }
        }

        let mut seen = HashSet::new();
        for entry in self.entries() {
            if !seen.insert((entry.kind, entry.name.clone())) {
                errors.push(format!(
                    "duplicate {} `{}` on `{}`",
                    entry.kind.label(),
                    entry.name,
                    self.ident
                ));
            }
        }

        errors
    }
}

impl ReflectField {
    /// Reported name: the rename, the identifier, or the tuple position.
    pub fn name(&self, index: usize) -> String {
        match (&self.rename, &self.ident) {
            (Some(rename), _) => rename.clone(),
            (None, Some(ident)) => ident.to_string(),
            (None, None) => index.to_string(),
        }
    }
}

impl ReflectVariant {
    pub fn name(&self) -> String {
        self.rename.clone().unwrap_or_else(|| self.ident.to_string())
    }
}

/// The name a declared item is listed under: the last path segment.
fn member_name(path: &syn::Path) -> String {
    path.segments
        .last()
        .map(|segment| segment.ident.to_string())
        .unwrap_or_default()
}

fn path_name(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(input: syn::DeriveInput) -> ReflectAttrs {
        ReflectAttrs::from_derive_input(&input).unwrap()
    }

    #[test]
    fn named_fields_and_declared_items() {
        let attrs = parse(parse_quote! {
            #[reflect(methods(len, push), consts(CAPACITY), types(Iterator::Item))]
            pub struct Stack {
                items: Vec<u8>,
                #[reflect(rename = "top")]
                head: usize,
                #[reflect(skip)]
                scratch: u8,
            }
        });

        let names: Vec<_> = attrs.entries().into_iter().map(|e| (e.kind, e.name)).collect();
        assert_eq!(
            names,
            vec![
                (EntryKind::Field, "items".to_string()),
                (EntryKind::Field, "top".to_string()),
                (EntryKind::Method, "len".to_string()),
                (EntryKind::Method, "push".to_string()),
                (EntryKind::Const, "CAPACITY".to_string()),
                (EntryKind::Type, "Item".to_string()),
            ]
        );
        assert!(attrs.validate(true).is_empty());
    }

    #[test]
    fn tuple_fields_use_positions() {
        let attrs = parse(parse_quote! {
            struct Meters(f64, #[reflect(skip)] u8, u16);
        });

        let names: Vec<_> = attrs.entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["0", "2"]);
    }

    #[test]
    fn enum_variants_and_name_override() {
        let attrs = parse(parse_quote! {
            #[reflect(name = "Light")]
            enum Signal {
                Red,
                #[reflect(rename = "Amber")]
                Yellow,
                Green { seconds: u8 },
            }
        });

        assert_eq!(attrs.type_name(), "Light");
        let names: Vec<_> = attrs.entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Red", "Amber", "Green"]);
    }

    #[test]
    fn template_signatures_record_parameter_shapes() {
        let attrs = parse(parse_quote! {
            #[reflect(
                template = "Lending::Iter<'a, T> where Self: 'a",
                template = "Arena::Buffer<const N: usize>"
            )]
            struct Arena;
        });

        assert_eq!(attrs.templates.len(), 2);
        assert_eq!(attrs.templates[0].owner, vec!["Lending"]);
        assert_eq!(attrs.templates[0].ident.to_string(), "Iter");
        assert!(attrs.templates[0].generics.where_clause.is_some());
        assert_eq!(attrs.templates[0].shape(), vec![ParamShape::Lifetime, ParamShape::Type]);
        assert_eq!(attrs.templates[1].shape(), vec![ParamShape::Const]);
        assert!(attrs.validate(true).is_empty());

        let errors = attrs.validate(false);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("requires the `templates` feature"));
    }

    #[test]
    fn associated_items_must_name_their_trait() {
        let attrs = parse(parse_quote! {
            #[reflect(types(Item), template = "Drain<'a>")]
            struct Queue;
        });

        let errors = attrs.validate(true);
        assert_eq!(
            errors,
            vec![
                "associated type `Item` must be written with its trait, as `Trait::Item`",
                "template `Drain` must be written with its trait, as `Trait::Drain<..>`",
            ]
        );
    }

    #[test]
    fn malformed_template_is_rejected() {
        let input: syn::DeriveInput = parse_quote! {
            #[reflect(template = "Lending::Iter<'a,")]
            struct Arena;
        };

        let err = ReflectAttrs::from_derive_input(&input).unwrap_err();
        assert!(err.to_string().contains("invalid template signature"));
    }

    #[test]
    fn duplicates_are_reported() {
        let attrs = parse(parse_quote! {
            #[reflect(methods(len, len))]
            struct Stack {
                len: usize,
            }
        });

        let errors = attrs.validate(true);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duplicate method `len` on `Stack`"));
    }
}
