//! Formatting keypaths from raw keys.
//!
//! Run with: cargo run --example simple

use keypath_fmt::{keypath, to_keypath, Keypath};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Raw keys, e.g. collected while walking a JSON document
    let keys = ["some", "object", "0", "key"];
    println!("{}", to_keypath(keys));

    // Pre-quoted keys are unwrapped before they are classified
    println!("{}", to_keypath(["some", "object", "'key-with-dash'"]));

    // Build a path incrementally
    let mut path = Keypath::new();
    path.push("users");
    path.push_index(3);
    path.push_key("display-name")?;
    println!("{}", path);

    // Or with the macro
    let path = keypath!["matrix", 2, 0];
    println!("{}", path);

    Ok(())
}
