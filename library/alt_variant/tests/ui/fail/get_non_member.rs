//! Error: `u8` is not an alternative of the set.

use alt_variant::Variant;

fn main() {
    let v = Variant::<(i32, String)>::from_value(1_i32);
    let _ = v.get::<u8, _>();
}
