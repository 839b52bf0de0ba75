//! Error: every handler must return the same type.

use alt_variant::Variant;

fn main() {
    let v = Variant::<(i32, String)>::from_value(1_i32);
    let _ = v.visit((|n: &i32| *n, |s: &String| s.len()));
}
