//! Raw string value extraction: everything up to the first unescaped quote.

/// Returns the raw (still-escaped) string value starting at `start`.
///
/// `start` must point at the first character after an opening quote. The
/// extracted span runs up to, but not including, the first double quote
/// preceded by an even number (including zero) of consecutive backslashes.
/// An odd number of backslashes means the quote is escaped and belongs to
/// the value. Backslashes are only counted within the extracted region, so
/// `\\"` ends the value (escaped backslash, real terminator) while `\"`
/// does not.
///
/// If no unescaped quote exists, the whole remainder of the input is the
/// value (an unterminated value is not an error here; it surfaces as
/// garbage output, matching the original behavior).
///
/// # Examples
///
/// ```
/// use ollama_ask::scan::raw_string_value;
///
/// assert_eq!(raw_string_value("hello\" rest"), "hello");
/// assert_eq!(raw_string_value(r#"he said \"hi\"" rest"#), r#"he said \"hi\""#);
/// ```
#[must_use]
pub fn raw_string_value(start: &str) -> &str {
    let bytes = start.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' {
            let mut backslashes = 0;
            let mut j = i;
            while j > 0 && bytes[j - 1] == b'\\' {
                backslashes += 1;
                j -= 1;
            }
            if backslashes % 2 == 0 {
                break;
            }
        }
        i += 1;
    }
    // `i` sits on an ASCII quote or at end of input, so this is always a
    // character boundary.
    &start[..i]
}
