//! Header value formatting
//!
//! The inverse of the parser: renders elements, parameters and pairs back to
//! header value text, quoting values where the parser would otherwise split
//! them.

use crate::{HeaderElement, NameValuePair};

/// Characters that force a value into a quoted string
pub const SEPARATORS: &str = " ;,:@()<>\\\"/[]?={}\t";

/// Characters escaped with `\` inside a quoted string
pub const UNSAFE_CHARS: &str = "\"\\";

/// Header value formatter seam
pub trait HeaderValueFormatter {
    /// Append elements separated by `", "`
    fn format_elements(&self, dst: &mut String, elements: &[HeaderElement]);

    /// Append one element followed by its parameters
    fn format_header_element(&self, dst: &mut String, element: &HeaderElement);

    /// Append parameters separated by `"; "`
    fn format_parameters(&self, dst: &mut String, parameters: &[NameValuePair]);

    /// Append one `name[=value]` pair
    fn format_name_value_pair(&self, dst: &mut String, pair: &NameValuePair);
}

/// Default formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFormatter {
    quote_all: bool,
}

impl BasicFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quote every value, not just those containing separators
    pub fn quote_all(mut self, quote_all: bool) -> Self {
        self.quote_all = quote_all;
        self
    }

    /// Format elements into a new string
    pub fn elements_to_string(&self, elements: &[HeaderElement]) -> String {
        let mut dst = String::new();
        self.format_elements(&mut dst, elements);
        dst
    }

    /// Format parameters into a new string
    pub fn parameters_to_string(&self, parameters: &[NameValuePair]) -> String {
        let mut dst = String::new();
        self.format_parameters(&mut dst, parameters);
        dst
    }

    fn format_value(&self, dst: &mut String, value: &str) {
        write_value(dst, value, self.quote_all, |ch| SEPARATORS.contains(ch));
    }
}

impl HeaderValueFormatter for BasicFormatter {
    fn format_elements(&self, dst: &mut String, elements: &[HeaderElement]) {
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                dst.push_str(", ");
            }
            self.format_header_element(dst, element);
        }
    }

    fn format_header_element(&self, dst: &mut String, element: &HeaderElement) {
        dst.push_str(element.name());
        if let Some(value) = element.value() {
            dst.push('=');
            self.format_value(dst, value);
        }
        for param in element.parameters() {
            dst.push_str("; ");
            self.format_name_value_pair(dst, param);
        }
    }

    fn format_parameters(&self, dst: &mut String, parameters: &[NameValuePair]) {
        for (i, param) in parameters.iter().enumerate() {
            if i > 0 {
                dst.push_str("; ");
            }
            self.format_name_value_pair(dst, param);
        }
    }

    fn format_name_value_pair(&self, dst: &mut String, pair: &NameValuePair) {
        dst.push_str(pair.name());
        if let Some(value) = pair.value() {
            dst.push('=');
            self.format_value(dst, value);
        }
    }
}

/// Append `value`, quoting it when `quote` is set or any char is a separator
pub(crate) fn write_value(
    dst: &mut String,
    value: &str,
    quote: bool,
    is_separator: impl Fn(char) -> bool,
) {
    let quote = quote || value.chars().any(is_separator);
    if !quote {
        dst.push_str(value);
        return;
    }
    dst.reserve(value.len() + 2);
    dst.push('"');
    for ch in value.chars() {
        if UNSAFE_CHARS.contains(ch) {
            dst.push('\\');
        }
        dst.push(ch);
    }
    dst.push('"');
}
