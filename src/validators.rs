
// Latin letters and digits only, so the value can be spliced into a URL
// path segment as-is. char::is_alphanumeric would admit Unicode letters.
pub fn is_str_alphanumeric(value: &str) -> bool {
    value.chars().all(|char| char.is_ascii_alphanumeric())
}
