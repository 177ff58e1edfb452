//! Parsed header value types

use crate::formatter::{BasicFormatter, HeaderValueFormatter};
use smallvec::SmallVec;
use std::fmt;

/// Parameter storage (stack-allocated for small parameter counts)
pub type Parameters = SmallVec<[NameValuePair; 4]>;

/// A `name [= value]` unit
///
/// `value` is `None` when no `=` was present; `name=` gives `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameValuePair {
    name: String,
    value: Option<String>,
}

impl NameValuePair {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Pair without a value
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Pair with a value
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Some(value.into()))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        (self.name, self.value)
    }

    /// `true` for the `("", None)` pair left by a stray delimiter
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.value.is_none()
    }
}

impl fmt::Display for NameValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// One comma-separated unit of a header value: `name [= value] (; param)*`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderElement {
    name: String,
    value: Option<String>,
    parameters: Parameters,
}

impl HeaderElement {
    pub fn new(
        name: impl Into<String>,
        value: Option<String>,
        parameters: impl IntoIterator<Item = NameValuePair>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            parameters: parameters.into_iter().collect(),
        }
    }

    pub(crate) fn from_parts(head: NameValuePair, parameters: Parameters) -> Self {
        let (name, value) = head.into_parts();
        Self {
            name,
            value,
            parameters,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Parameters in parse order, duplicates included
    #[inline]
    pub fn parameters(&self) -> &[NameValuePair] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameter_at(&self, index: usize) -> Option<&NameValuePair> {
        self.parameters.get(index)
    }

    /// First parameter with the given name (ASCII case-insensitive)
    pub fn parameter(&self, name: &str) -> Option<&NameValuePair> {
        self.parameters
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for HeaderElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        BasicFormatter::new().format_header_element(&mut out, self);
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_accessors() {
        let pair = NameValuePair::with_value("charset", "utf-8");
        assert_eq!(pair.name(), "charset");
        assert_eq!(pair.value(), Some("utf-8"));
        assert_eq!(pair.to_string(), "charset=utf-8");

        let bare = NameValuePair::bare("secure");
        assert_eq!(bare.value(), None);
        assert_eq!(bare.to_string(), "secure");
        assert!(!bare.is_empty());
        assert!(NameValuePair::bare("").is_empty());
        assert!(!NameValuePair::with_value("", "").is_empty());
    }

    #[test]
    fn test_element_parameter_lookup() {
        let element = HeaderElement::new(
            "text/html",
            None,
            vec![
                NameValuePair::with_value("Level", "1"),
                NameValuePair::with_value("level", "2"),
                NameValuePair::bare("flag"),
            ],
        );

        assert_eq!(element.parameter_count(), 3);
        assert_eq!(element.parameter("LEVEL").and_then(|p| p.value()), Some("1"));
        assert_eq!(element.parameter_at(2), Some(&NameValuePair::bare("flag")));
        assert_eq!(element.parameter_at(3), None);
        assert!(element.parameter("missing").is_none());
    }

    #[test]
    fn test_element_display() {
        let element = HeaderElement::new(
            "form-data",
            None,
            vec![NameValuePair::with_value("name", "my file")],
        );
        assert_eq!(element.to_string(), "form-data; name=\"my file\"");
    }
}
