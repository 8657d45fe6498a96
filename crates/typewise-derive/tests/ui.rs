#[test]
#[cfg_attr(
    miri,
    ignore = "trybuild launches subprocesses and is unsupported under miri"
)]
fn ui_expansions_build() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
