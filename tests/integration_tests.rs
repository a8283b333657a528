use keypath_fmt::{
    is_identifier, is_integer_like, is_reserved, to_key, to_keypath, to_keypath_with_options,
    to_writer_with_options, Error, Keypath, KeypathOptions, Quote, RESERVED_IDENTIFIERS,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ValidationIssue {
    path: Keypath,
    message: String,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
enum Field {
    DisplayName,
    #[serde(rename = "e-mail")]
    Email,
}

#[test]
fn test_keypath_serializes_as_sequence() {
    let issue = ValidationIssue {
        path: ["users", "0", "e-mail"].into_iter().collect(),
        message: "invalid address".to_string(),
    };

    let json = serde_json::to_string(&issue).unwrap();
    assert_eq!(
        json,
        r#"{"path":["users","0","e-mail"],"message":"invalid address"}"#
    );

    let back: ValidationIssue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, issue);
    assert_eq!(back.path.to_string(), "users[0][\"e-mail\"]");
}

#[test]
fn test_keypath_rejects_non_sequence_json() {
    let result: Result<Keypath, _> = serde_json::from_str(r#""users.0""#);
    assert!(result.is_err());
}

#[test]
fn test_push_key_from_enums_and_indices() {
    let mut path = Keypath::new();
    path.push_key("profile").unwrap();
    path.push_key(&Field::DisplayName).unwrap();
    println!("Path: {}", path);
    assert_eq!(path.to_string(), "profile.displayName");

    path.pop();
    path.push_key(&Field::Email).unwrap();
    path.push_key(&2_u16).unwrap();
    assert_eq!(path.to_string(), "profile[\"e-mail\"][2]");
}

#[test]
fn test_unsupported_key_error() {
    let err = to_key(&[1, 2, 3]).unwrap_err();
    assert_eq!(err, Error::UnsupportedKey("tuple".to_string()));
    assert!(err.to_string().contains("tuple"));
}

#[test]
fn test_options_change_quote_and_unwrapping() {
    let keys = ["config", "'log-level'", "\"0\""];

    assert_eq!(to_keypath(keys), "config[\"log-level\"][0]");

    let single = KeypathOptions::new().with_quote(Quote::Single);
    assert_eq!(to_keypath_with_options(keys, &single), "config['log-level'][0]");

    let raw = KeypathOptions::new().with_unwrap_quotes(false);
    assert_eq!(
        to_keypath_with_options(keys, &raw),
        "config[\"'log-level'\"][\"\"0\"\"]"
    );
}

#[test]
fn test_writer_with_options() {
    let mut buffer = Vec::new();
    let options = KeypathOptions::new().with_quote(Quote::Single);
    to_writer_with_options(&mut buffer, ["a", "b c"], &options).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "a['b c']");
}

#[test]
fn test_reserved_table_is_not_consulted() {
    for name in RESERVED_IDENTIFIERS {
        assert!(is_reserved(name));
        assert_eq!(to_keypath(["obj", *name]), format!("obj.{name}"));
    }
    assert!(!is_reserved("constructor"));
}

#[test]
fn test_classifiers_are_exported() {
    assert!(is_integer_like("10"));
    assert!(!is_integer_like("010"));
    assert!(is_identifier("$0"));
    assert!(!is_identifier("0$"));
}

#[test]
fn test_formatting_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let index = i.to_string();
                to_keypath(["items", index.as_str(), "name"])
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("items[{i}].name"));
    }
}
