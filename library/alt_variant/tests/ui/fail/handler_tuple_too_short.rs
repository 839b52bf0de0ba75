//! Error: the handler tuple must have one closure per alternative.

use alt_variant::Variant;

fn main() {
    let v = Variant::<(i32, String)>::from_value(1_i32);
    let _ = v.visit((|n: &i32| *n,));
}
