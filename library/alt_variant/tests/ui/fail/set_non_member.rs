//! Error: `f64` is not an alternative of the set.

use alt_variant::Variant;

fn main() {
    let mut v = Variant::<(i32, String)>::from_value(1_i32);
    v.set(2.5_f64);
}
