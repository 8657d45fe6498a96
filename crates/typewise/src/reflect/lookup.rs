//! Runtime queries over member tables.
//!
//! The `has_*!` detectors answer yes or no at compile time; these functions
//! return the matching [`Member`] or explain why there is none.

use tracing::{debug, trace};

use crate::error::{ReflectError, Result};
#[cfg(feature = "templates")]
use crate::reflect::ParamKind;
use crate::reflect::{Member, MemberKind, Reflect, str_eq};

pub fn members<T: ?Sized + Reflect>() -> &'static [Member] {
    T::MEMBERS
}

/// The first member of `T` named `name`, whatever its kind.
pub fn member<T: ?Sized + Reflect>(name: &str) -> Result<&'static Member> {
    let found = T::MEMBERS.iter().find(|member| str_eq(member.name, name));
    match found {
        Some(member) => {
            trace!(target: "typewise::reflect", ty = T::NAME, %member, "member found");
            Ok(member)
        }
        None => {
            debug!(target: "typewise::reflect", ty = T::NAME, name, "no such member");
            Err(ReflectError::MissingMember {
                ty: T::NAME,
                name: name.to_owned(),
            })
        }
    }
}

/// The member of `T` named `name` with the given kind.
///
/// When members of several kinds share the name, the one of the requested
/// kind wins; if none has that kind the error reports the first one found.
pub fn member_of_kind<T: ?Sized + Reflect>(
    name: &str,
    kind: MemberKind,
) -> Result<&'static Member> {
    let mut named = T::MEMBERS
        .iter()
        .filter(|member| str_eq(member.name, name))
        .peekable();
    let first = *named.peek().ok_or_else(|| ReflectError::MissingMember {
        ty: T::NAME,
        name: name.to_owned(),
    })?;

    match named.find(|member| member.kind == kind) {
        Some(member) => {
            trace!(target: "typewise::reflect", ty = T::NAME, %member, "member found");
            Ok(member)
        }
        None => {
            debug!(
                target: "typewise::reflect",
                ty = T::NAME,
                name,
                expected = %kind,
                found = %first.kind,
                "member has a different kind"
            );
            Err(ReflectError::KindMismatch {
                ty: T::NAME,
                name: name.to_owned(),
                expected: kind,
                found: first.kind,
            })
        }
    }
}

/// The template of `T` named `name` taking exactly `params`.
#[cfg(feature = "templates")]
pub fn template<T: ?Sized + Reflect>(
    name: &str,
    params: &[ParamKind],
) -> Result<&'static Member> {
    let candidate = member_of_kind::<T>(name, MemberKind::Template)?;
    if candidate.params == params {
        return Ok(candidate);
    }

    debug!(
        target: "typewise::reflect",
        ty = T::NAME,
        name,
        expected = %ParamKind::render_list(params),
        found = %ParamKind::render_list(candidate.params),
        "template signature mismatch"
    );
    Err(ReflectError::SignatureMismatch {
        ty: T::NAME,
        name: name.to_owned(),
        expected: params.to_vec(),
        found: candidate.params.to_vec(),
    })
}

/// A multi-line summary of `T`'s member table.
pub fn describe<T: ?Sized + Reflect>() -> String {
    let mut out = String::from(T::NAME);
    if T::MEMBERS.is_empty() {
        out.push_str(" (no members)");
    }
    for member in T::MEMBERS {
        out.push_str("\n  ");
        out.push_str(&member.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Port;

    impl Reflect for Port {
        const NAME: &'static str = "Port";
        const MEMBERS: &'static [Member] = &[
            Member::field("number"),
            Member::method("open"),
            Member::constant("DEFAULT"),
        ];
    }

    #[test]
    fn lookup_by_name_and_kind() {
        assert_eq!(member::<Port>("open").map(|m| m.kind), Ok(MemberKind::Method));
        assert_eq!(
            member_of_kind::<Port>("number", MemberKind::Method),
            Err(ReflectError::KindMismatch {
                ty: "Port",
                name: "number".into(),
                expected: MemberKind::Method,
                found: MemberKind::Field,
            })
        );
        assert!(matches!(member::<Port>("close"), Err(ReflectError::MissingMember { .. })));
    }

    #[test]
    fn describe_lists_every_member() {
        assert_eq!(
            describe::<Port>(),
            "Port\n  field `number`\n  method `open`\n  associated const `DEFAULT`"
        );
    }
}
