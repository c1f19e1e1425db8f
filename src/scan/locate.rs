//! Field locator: finds where a named key's string value begins.

/// Locates the start of a JSON string value for `field` within `json`.
///
/// Finds the first literal occurrence of `"<field>"`, then the first colon
/// at or after it, then the first double quote after that colon. Returns
/// the suffix of `json` starting immediately after that quote, i.e. the
/// first character of the presumed string value.
///
/// This is a textual scan, not a structural parse: it will match field
/// names appearing inside nested values or other keys, and it assumes the
/// value is a string. Returns `None` if the quoted field name is absent,
/// no colon follows it, or no opening quote follows the colon.
///
/// # Examples
///
/// ```
/// use ollama_ask::scan::locate_string_value;
///
/// let json = r#"{"content": "hello"}"#;
/// assert_eq!(locate_string_value(json, "content"), Some("hello\"}"));
/// assert_eq!(locate_string_value(json, "missing"), None);
/// ```
#[must_use]
pub fn locate_string_value<'a>(json: &'a str, field: &str) -> Option<&'a str> {
    let pattern = format!("\"{field}\"");
    let key_start = json.find(&pattern)?;

    // The colon search starts at the key itself; the quoted key cannot
    // contain a colon, so the first hit is the separator (or a colon
    // somewhere later in the text, exactly like the original scan).
    let after_key = &json[key_start..];
    let colon = after_key.find(':')?;

    let after_colon = &after_key[colon..];
    let quote = after_colon.find('"')?;

    Some(&after_colon[quote + 1..])
}
