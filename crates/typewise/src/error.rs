use crate::reflect::MemberKind;
#[cfg(feature = "templates")]
use crate::reflect::ParamKind;

/// Failure of a runtime member lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectError {
    #[error("`{ty}` has no member named `{name}`")]
    MissingMember { ty: &'static str, name: String },

    #[error("`{ty}::{name}` is a {found}, not a {expected}")]
    KindMismatch {
        ty: &'static str,
        name: String,
        expected: MemberKind,
        found: MemberKind,
    },

    /// The template exists but takes different generic parameters.
    #[cfg(feature = "templates")]
    #[error(
        "template `{ty}::{name}` takes <{}>, not <{}>",
        ParamKind::render_list(.found),
        ParamKind::render_list(.expected)
    )]
    SignatureMismatch {
        ty: &'static str,
        name: String,
        expected: Vec<ParamKind>,
        found: Vec<ParamKind>,
    },
}

pub type Result<T, E = ReflectError> = std::result::Result<T, E>;
