use keypath_fmt::to_keypath;

#[test]
fn test_integer_like_keys_use_brackets() {
    assert_eq!(to_keypath(["some", "object", "0", "key"]), "some.object[0].key");
    assert_eq!(to_keypath(["a", "0", ".c"]), "a[0][\".c\"]");
}

#[test]
fn test_leading_zero_is_not_an_index() {
    assert_eq!(
        to_keypath(["some", "object", "01", "key"]),
        "some.object[\"01\"].key"
    );
}

#[test]
fn test_double_quoted_integer_key() {
    assert_eq!(to_keypath(["some", "object", "\"0\"", "key"]), "some.object[0].key");
}

#[test]
fn test_single_quoted_integer_key() {
    assert_eq!(to_keypath(["some", "object", "'0'", "key"]), "some.object[0].key");
}

#[test]
fn test_non_identifier_keys_use_quoted_brackets() {
    let expected = "some.object[\"key-with-dash\"]";
    assert_eq!(to_keypath(["some", "object", "key-with-dash"]), expected);
    assert_eq!(to_keypath(["some", "object", "\"key-with-dash\""]), expected);
    assert_eq!(to_keypath(["some", "object", "'key-with-dash'"]), expected);
}

#[test]
fn test_identifier_keys_use_dots() {
    let expected = "some.object.key";
    assert_eq!(to_keypath(["some", "object", "key"]), expected);
    assert_eq!(to_keypath(["some", "object", "\"key\""]), expected);
    assert_eq!(to_keypath(["some", "object", "'key'"]), expected);
}

#[test]
fn test_empty_path() {
    let path: [&str; 0] = [];
    assert_eq!(to_keypath(path), "");
}

#[test]
fn test_single_key_has_no_connector() {
    assert_eq!(to_keypath(["key"]), "key");
    assert_eq!(to_keypath(["0"]), "0");
    assert_eq!(to_keypath(["key-with-dash"]), "key-with-dash");
}

#[test]
fn test_reserved_words_use_dots() {
    assert_eq!(to_keypath(["obj", "class", "default"]), "obj.class.default");
    assert_eq!(to_keypath(["n", "NaN", "undefined"]), "n.NaN.undefined");
}

#[test]
fn test_unusual_keys() {
    assert_eq!(to_keypath(["a", ""]), "a[\"\"]");
    assert_eq!(to_keypath(["a", "\"\""]), "a[\"\"\"\"]");
    assert_eq!(to_keypath(["a", "''"]), "a[\"''\"]");
    assert_eq!(to_keypath(["a", "\"mixed'"]), "a[\"\"mixed'\"]");
    assert_eq!(to_keypath(["a", "it's"]), "a[\"it's\"]");
    assert_eq!(
        to_keypath(["a", "98765432109876543210987654321"]),
        "a[98765432109876543210987654321]"
    );
    assert_eq!(to_keypath(["a", "-1", "1.5"]), "a[\"-1\"][\"1.5\"]");
}

#[test]
fn test_only_outer_quotes_are_stripped() {
    assert_eq!(to_keypath(["a", "''b''"]), "a[\"'b'\"]");
    assert_eq!(to_keypath(["a", "\"'0'\""]), "a[\"'0'\"]");
}
