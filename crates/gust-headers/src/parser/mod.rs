//! Header value parser
//!
//! Lenient parsing of structured header values into elements, parameters and
//! name/value pairs. Malformed but bounded input always produces a result:
//! unterminated quotes run to the end of the range, stray delimiters yield
//! empty names, and empty comma-separated fields are skipped.
//!
//! Every entry point takes the buffer and a shared [`ParserCursor`], and
//! leaves the cursor on the first unconsumed delimiter (or at the upper
//! bound) so calls compose without re-scanning.
//!
//! ## Panics
//! All entry points panic if the cursor does not fit the buffer.

mod elements;
mod pair;
mod params;

pub use elements::{parse_elements, parse_header_element};
pub use pair::parse_name_value_pair;
pub use params::parse_parameters;

use crate::{HeaderElement, NameValuePair, Parameters, ParserCursor};

/// Header value parser seam
///
/// Implementations hold no per-call state; all position state lives in the
/// cursor passed to each call.
pub trait HeaderValueParser: Send + Sync {
    /// Parse all comma-separated elements
    fn parse_elements(&self, buffer: &str, cursor: &mut ParserCursor) -> Vec<HeaderElement>;

    /// Parse a single element with its parameters
    fn parse_header_element(&self, buffer: &str, cursor: &mut ParserCursor) -> HeaderElement;

    /// Parse a `;`-separated parameter list
    fn parse_parameters(&self, buffer: &str, cursor: &mut ParserCursor) -> Parameters;

    /// Parse one `name [= value]` pair
    fn parse_name_value_pair(&self, buffer: &str, cursor: &mut ParserCursor) -> NameValuePair;
}

/// Stateless default parser
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicParser;

impl BasicParser {
    pub const fn new() -> Self {
        Self
    }
}

impl HeaderValueParser for BasicParser {
    fn parse_elements(&self, buffer: &str, cursor: &mut ParserCursor) -> Vec<HeaderElement> {
        parse_elements(buffer, cursor)
    }

    fn parse_header_element(&self, buffer: &str, cursor: &mut ParserCursor) -> HeaderElement {
        parse_header_element(buffer, cursor)
    }

    fn parse_parameters(&self, buffer: &str, cursor: &mut ParserCursor) -> Parameters {
        parse_parameters(buffer, cursor)
    }

    fn parse_name_value_pair(&self, buffer: &str, cursor: &mut ParserCursor) -> NameValuePair {
        parse_name_value_pair(buffer, cursor)
    }
}

/// Parse a whole string as a list of elements
pub fn parse_elements_str(value: &str) -> Vec<HeaderElement> {
    parse_elements(value, &mut ParserCursor::for_value(value))
}

/// Parse the first element of a string
pub fn parse_header_element_str(value: &str) -> HeaderElement {
    parse_header_element(value, &mut ParserCursor::for_value(value))
}

/// Parse a string as a parameter list
pub fn parse_parameters_str(value: &str) -> Parameters {
    parse_parameters(value, &mut ParserCursor::for_value(value))
}

/// Parse the first pair of a string
pub fn parse_name_value_pair_str(value: &str) -> NameValuePair {
    parse_name_value_pair(value, &mut ParserCursor::for_value(value))
}
