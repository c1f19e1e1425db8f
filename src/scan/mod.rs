//! Textual scanning of the chat response.
//!
//! This is deliberately NOT a JSON parser. The locator finds a quoted key
//! followed by a colon and an opening quote; the value extractor stops at
//! the first unescaped quote; the decoder expands the fixed JSON escape
//! alphabet. The known limitations (false-positive key matches inside
//! nested values, string-valued fields only) are part of the observable
//! contract and are kept on purpose.

pub mod locate;
pub mod unescape;
pub mod value;

pub use locate::locate_string_value;
pub use unescape::unescape;
pub use value::raw_string_value;
