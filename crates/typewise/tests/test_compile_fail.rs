use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const DEFAULT_FEATURES: &str = "";
const WITHOUT_TEMPLATES: &str = ", default-features = false, features = [\"derive\"]";

fn check_case(name: &str, features: &str, source: &str) -> Output {
    let temp = tempfile::tempdir().expect("tempdir should be creatable");
    let case_dir = temp.path().join(name);
    fs::create_dir_all(case_dir.join("src")).expect("case src dir should be creatable");

    let manifest_path = Path::new(env!("CARGO_MANIFEST_DIR"));
    let cargo_toml = format!(
        "[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"2024\"\n\n[workspace]\n\n[dependencies]\ntypewise = {{ path = \"{}\"{features} }}\n",
        manifest_path.display()
    );

    fs::write(case_dir.join("Cargo.toml"), cargo_toml).expect("cargo manifest should be writable");
    fs::write(case_dir.join("src/main.rs"), source).expect("source file should be writable");

    Command::new("cargo")
        .arg("check")
        .arg("--quiet")
        .current_dir(&case_dir)
        .output()
        .expect("cargo check should run")
}

/// Checks a case that must fail in its own code, returning stderr with
/// `typewise::module::` prefixes removed from type paths.
fn run_compile_fail_case(name: &str, features: &str, source: &str) -> String {
    let output = check_case(name, features, source);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "expected compile failure, but case compiled successfully:\n{source}"
    );
    assert!(
        !stderr.contains("could not compile `typewise"),
        "the library itself failed to build:\n{stderr}"
    );

    strip_crate_paths(&stderr)
}

fn strip_crate_paths(stderr: &str) -> String {
    let mut out = String::with_capacity(stderr.len());
    let mut rest = stderr;
    while let Some(start) = rest.find("typewise::") {
        out.push_str(&rest[..start]);
        rest = &rest[start + "typewise::".len()..];
        while let Some(end) = rest.find("::") {
            let segment = &rest[..end];
            if segment.is_empty()
                || !segment.chars().all(|c| c.is_ascii_lowercase() || c == '_')
            {
                break;
            }
            rest = &rest[end + 2..];
        }
    }
    out.push_str(rest);
    out
}

/// Whether rustc reported `ty` as not implementing `bound`, either as the
/// unsatisfied bound itself or as a step in the requirement chain.
fn reports_unmet_bound(stderr: &str, ty: &str, bound: &str) -> bool {
    stderr.contains(&format!("`{ty}: {bound}"))
        || stderr.contains(&format!("`{ty}` to implement `{bound}"))
}

#[test]
fn well_formed_programs_build() {
    let output = check_case(
        "control_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

type Second = Eval<Next<Eval<Begin<list![u8, u16]>>>>;

#[derive(Reflect)]
#[reflect(methods(len), consts(LIMIT), types(Iterator::Item))]
struct Countdown {
    left: u8,
}

impl Countdown {
    const LIMIT: u8 = 9;

    fn len(&self) -> usize {
        usize::from(self.left)
    }
}

impl Iterator for Countdown {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.left = self.left.checked_sub(1)?;
        Some(self.left)
    }
}

has_method!(HasLen, len);

fn main() {
    let _ = std::any::type_name::<Eval<Deref<Second>>>();
    assert!(HasLen::<Countdown>::VALUE);
    assert_eq!(Countdown::LIMIT, 9);
    assert_eq!(Countdown { left: 2 }.len(), 2);
}
"#,
    );

    assert!(
        output.status.success(),
        "control case should build:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn stepping_past_the_end_does_not_build() {
    let stderr = run_compile_fail_case(
        "past_end_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

type Beyond = Eval<Next<Eval<End<list![u8]>>>>;

fn main() {
    let _ = std::any::type_name::<Beyond>();
}
"#,
    );

    assert!(
        reports_unmet_bound(&stderr, "Pos<Cons<u8, Nil>, Succ<Zero>>", "CursorNext")
            || stderr.contains("`<Succ<Zero> as NatLess<Succ<Zero>>>::Output == True`"),
        "expected missing successor failure, got:\n{stderr}"
    );
}

#[test]
fn zipping_unequal_lengths_does_not_build() {
    let stderr = run_compile_fail_case(
        "zip_unequal_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

type Ragged = ZipView<list![list![u8, u16], list![u8]]>;
type Count = Eval<Size<Ragged>>;

fn main() {
    let _ = std::any::type_name::<Count>();
}
"#,
    );

    assert!(
        reports_unmet_bound(&stderr, "Pos<Cons<u8, Nil>, Succ<Zero>>", "CursorNext")
            || stderr.contains("`<Succ<Zero> as NatLess<Succ<Zero>>>::Output == True`"),
        "expected the shorter component to run out, got:\n{stderr}"
    );
}

#[test]
fn zip_cursors_cannot_step_backwards() {
    let stderr = run_compile_fail_case(
        "zip_prior_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

type Zipped = ZipView<list![list![u8, u16], HalfOpenRange<N0, N2>]>;
type Back = Eval<Prior<Eval<End<Zipped>>>>;

fn main() {
    let _ = std::any::type_name::<Back>();
}
"#,
    );

    assert!(
        stderr.contains("`ZipIter<Cons<Pos<") && stderr.contains(": CursorPrior`"),
        "expected zip cursor prior failure, got:\n{stderr}"
    );
}

#[test]
fn missing_map_keys_do_not_build() {
    let stderr = run_compile_fail_case(
        "map_missing_key_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

type Table = Map<list![Pair<N0, u8>, Pair<N1, u16>]>;
type Missing = Eval<At<Table, N3>>;

fn main() {
    let _ = std::any::type_name::<Missing>();
}
"#,
    );

    assert!(
        reports_unmet_bound(&stderr, "Nil", "LookupKey<Succ<Succ<Succ<Zero>>>>"),
        "expected the key search to run off the end, got:\n{stderr}"
    );
}

#[test]
fn binary_fold_rejects_a_third_placeholder() {
    let stderr = run_compile_fail_case(
        "third_placeholder_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

type Folded = Eval<Fold<list![u8, u16], Nil, PushFront<_1, _3>>>;

fn main() {
    let _ = std::any::type_name::<Folded>();
}
"#,
    );

    assert!(
        reports_unmet_bound(&stderr, "_3", "Substitute<(Nil, "),
        "expected placeholder arity failure, got:\n{stderr}"
    );
}

#[test]
fn ranges_are_not_extensible() {
    let stderr = run_compile_fail_case(
        "range_push_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

type Grown = Eval<PushBack<HalfOpenRange<N0, N3>, N3>>;

fn main() {
    let _ = std::any::type_name::<Grown>();
}
"#,
    );

    assert!(
        reports_unmet_bound(&stderr, "RangeTag", "PushBackImpl<HalfOpenRange<"),
        "expected unsupported push failure, got:\n{stderr}"
    );
}

#[test]
fn inverted_ranges_have_no_size() {
    let stderr = run_compile_fail_case(
        "inverted_range_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

type Count = Eval<Size<HalfOpenRange<N5, N2>>>;

fn main() {
    let _ = std::any::type_name::<Count>();
}
"#,
    );

    assert!(
        stderr.contains(": NatSub<Succ<"),
        "expected inverted range failure, got:\n{stderr}"
    );
}

#[test]
fn begin_and_end_must_be_comparable() {
    let stderr = run_compile_fail_case(
        "mixed_cursor_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

struct Mixed;

impl Sequence for Mixed {
    type Tag = ();
    type Begin = Pos<Mixed, N0>;
    type End = N0;
}

fn main() {}
"#,
    );

    assert!(
        reports_unmet_bound(&stderr, "Pos<Mixed, Zero>", "SameCursor<Zero>"),
        "expected mismatched cursor families to be rejected, got:\n{stderr}"
    );
}

#[test]
fn detectors_require_a_member_table() {
    let stderr = run_compile_fail_case(
        "detector_without_table_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

struct Opaque;

has_member!(HasLen, len);

fn main() {
    let _ = HasLen::<Opaque>::VALUE;
}
"#,
    );

    assert!(
        reports_unmet_bound(&stderr, "Opaque", "Reflect"),
        "expected missing Reflect failure, got:\n{stderr}"
    );
}

#[test]
fn declared_items_must_exist() {
    let stderr = run_compile_fail_case(
        "false_declaration_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

trait Shape {
    type Edge;
}

#[derive(Reflect)]
#[reflect(methods(fly), consts(MAX), types(Shape::Edge))]
struct Rock {
    weight: u32,
}

has_method!(HasFly, fly);

fn main() {
    let _ = HasFly::<Rock>::VALUE;
}
"#,
    );

    assert!(
        stderr.contains("named `fly` found"),
        "expected the missing method to be reported, got:\n{stderr}"
    );
    assert!(
        stderr.contains("named `MAX` found"),
        "expected the missing constant to be reported, got:\n{stderr}"
    );
    assert!(
        reports_unmet_bound(&stderr, "Rock", "Shape"),
        "expected the missing trait impl to be reported, got:\n{stderr}"
    );
}

#[test]
fn duplicate_declarations_are_rejected() {
    let stderr = run_compile_fail_case(
        "duplicate_declaration_case",
        DEFAULT_FEATURES,
        r#"
use typewise::prelude::*;

#[derive(Reflect)]
#[reflect(methods(len, len))]
struct Twice;

impl Twice {
    fn len(&self) -> usize {
        0
    }
}

fn main() {}
"#,
    );

    assert!(
        stderr.contains("duplicate method `len` on `Twice`"),
        "expected duplicate declaration error, got:\n{stderr}"
    );
}

#[test]
fn templates_need_their_feature() {
    let stderr = run_compile_fail_case(
        "template_feature_case",
        WITHOUT_TEMPLATES,
        r#"
use typewise::prelude::*;

trait Lending {
    type Iter<'a>
    where
        Self: 'a;
}

#[derive(Reflect)]
#[reflect(template = "Lending::Iter<'a> where Self: 'a")]
struct Pages;

impl Lending for Pages {
    type Iter<'a> = std::slice::Iter<'a, u8>;
}

fn main() {}
"#,
    );

    assert!(
        stderr.contains("`template` requires the `templates` feature of typewise"),
        "expected missing feature error, got:\n{stderr}"
    );
}
