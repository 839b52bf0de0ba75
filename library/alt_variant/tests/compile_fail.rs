//! Build-time checks: naming a type outside the alternative set, or passing
//! handlers that do not match it, must not compile.

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
    t.compile_fail("tests/ui/fail/*.rs");
}
