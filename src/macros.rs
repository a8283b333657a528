/// Builds a [`Keypath`](crate::Keypath) from a list of `Display` values.
///
/// ```rust
/// use keypath_fmt::keypath;
///
/// let index = 2;
/// let path = keypath!["matrix", index, 0, "cell-value"];
/// assert_eq!(path.to_string(), "matrix[2][0][\"cell-value\"]");
///
/// assert!(keypath![].is_empty());
/// ```
#[macro_export]
macro_rules! keypath {
    // Handle empty path
    () => {
        $crate::Keypath::new()
    };

    // Handle non-empty path
    ($($key:expr),+ $(,)?) => {
        $crate::Keypath::from(::std::vec![$(::std::string::ToString::to_string(&$key)),+])
    };
}
