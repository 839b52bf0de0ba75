//! Error: `f64` is not an alternative of the set.

use alt_variant::Variant;

fn main() {
    let _ = Variant::<(i32, String)>::from_value(1.5_f64);
}
