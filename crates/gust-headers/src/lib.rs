//! gust-headers: Structured HTTP header value parsing
//!
//! Turns the text after a header's colon into header elements, parameters
//! and name/value pairs. Parsing is lenient and incremental: a single
//! [`ParserCursor`] is threaded through composable parser calls over a
//! borrowed buffer, and malformed input never fails.
//!
//! ## Features
//! - `http` (default) - Parse and build `http::HeaderValue`s
//!
//! ## Example
//! ```
//! use gust_headers::{parse_elements, ParserCursor};
//!
//! let value = "text/html; q=0.9, application/json";
//! let mut cursor = ParserCursor::for_value(value);
//! let elements = parse_elements(value, &mut cursor);
//!
//! assert_eq!(elements.len(), 2);
//! assert_eq!(elements[0].name(), "text/html");
//! assert_eq!(elements[0].parameter("q").and_then(|p| p.value()), Some("0.9"));
//! assert!(cursor.at_end());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod cursor;
pub mod element;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod tokenizer;
pub mod typed;

#[cfg(feature = "http")]
pub mod header_map;

// Re-exports
pub use cursor::ParserCursor;
pub use element::{HeaderElement, NameValuePair, Parameters};
pub use error::{Error, Result};
pub use formatter::{BasicFormatter, HeaderValueFormatter};
pub use parser::{
    parse_elements, parse_elements_str, parse_header_element, parse_header_element_str,
    parse_name_value_pair, parse_name_value_pair_str, parse_parameters, parse_parameters_str,
    BasicParser, HeaderValueParser,
};

#[cfg(feature = "http")]
pub use header_map::{header_elements, parse_header_value, to_header_value};
