//! Customizing quote handling.
//!
//! Run with: cargo run --example custom_options

use keypath_fmt::{is_reserved, to_keypath_with_options, KeypathOptions, Quote};

fn main() {
    let keys = ["headers", "\"content-type\"", "class"];

    let double = KeypathOptions::new();
    println!("Double quotes: {}", to_keypath_with_options(keys, &double));

    let single = KeypathOptions::new().with_quote(Quote::Single);
    println!("Single quotes: {}", to_keypath_with_options(keys, &single));

    let raw = KeypathOptions::new().with_unwrap_quotes(false);
    println!("Keys kept raw: {}", to_keypath_with_options(keys, &raw));

    // Reserved words still render with dot notation; flag them separately
    for key in keys.iter().filter(|key| is_reserved(key)) {
        println!("warning: `{}` is a reserved identifier", key);
    }
}
