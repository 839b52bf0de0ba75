//! Every operation that names an alternative accepts the declared types.

use alt_variant::{At, Variant, Visitor};

fn main() {
    let mut v = Variant::<(i32, String, i32)>::from_value(1_i32);
    let _ = v.is::<String, _>();
    let _ = v.get::<i32, At<0>>();
    v.set(String::from("text"));
    v.set::<i32, At<2>>(3);
    let _ = v.visit((|n: &i32| *n, |s: &String| s.len() as i32, |n: &i32| *n));
    let _ = Visitor::<(i32, String, i32), ()>::builder()
        .on::<i32, At<0>>(|_| ())
        .on(|_: &String| ())
        .build();
}
