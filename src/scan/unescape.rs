//! Escape decoder: expands JSON escape sequences into literal characters.

/// Decodes JSON escape sequences in `input` into their literal characters.
///
/// Supported escapes: `\n`, `\t`, `\r`, `\b`, `\f`, `\\`, `\"`. A `\u`
/// followed by exactly four hex digits decodes to the corresponding
/// character when the code point is below 128; code points at or above 128
/// become a `?` placeholder. If fewer than four valid hex digits follow
/// `\u`, a literal `u` is emitted and the backslash is dropped. Any other
/// unrecognized escape emits the following character literally, dropping
/// the backslash. A trailing lone backslash is copied through unchanged.
///
/// Total over its input; decoding never lengthens the string.
///
/// # Examples
///
/// ```
/// use ollama_ask::scan::unescape;
///
/// assert_eq!(unescape("line one\\nline two"), "line one\nline two");
/// assert_eq!(unescape("\\u0041\\u00e9"), "A?");
/// ```
#[must_use]
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // Trailing lone backslash at end of input.
            None => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('u') => {
                // Consume the four hex digits only if all four are valid;
                // otherwise emit 'u' and resume right after it.
                let mut lookahead = chars.clone();
                let mut code: u32 = 0;
                let mut valid = true;
                for _ in 0..4 {
                    match lookahead.next().and_then(|h| h.to_digit(16)) {
                        Some(d) => code = code * 16 + d,
                        None => {
                            valid = false;
                            break;
                        }
                    }
                }
                if valid {
                    if code < 128 {
                        // code < 128 always maps to a valid ASCII char.
                        out.push(char::from_u32(code).unwrap_or('?'));
                    } else {
                        out.push('?');
                    }
                    chars = lookahead;
                } else {
                    out.push('u');
                }
            }
            // Unknown escape: drop the backslash, keep the character.
            Some(other) => out.push(other),
        }
    }

    out
}
