//! Error: a visitor cannot register a handler for a non-member type.

use alt_variant::Visitor;

fn main() {
    let _ = Visitor::<(i32, String), ()>::builder().on::<f64, _>(|_| ());
}
