//! Integration with the `http` crate
//!
//! Each field line of a `HeaderMap` is parsed as its own cursor range, so
//! repeated headers (`Accept: a` + `Accept: b`) read like one comma-joined
//! value.

use crate::formatter::{BasicFormatter, HeaderValueFormatter};
use crate::{parse_elements, HeaderElement, ParserCursor, Result};
use bytes::Bytes;
use ::http::header::{AsHeaderName, HeaderMap, HeaderValue};

/// Parse the elements of a single header value
pub fn parse_header_value(value: &HeaderValue) -> Result<Vec<HeaderElement>> {
    let text = value.to_str()?;
    Ok(parse_elements(text, &mut ParserCursor::for_value(text)))
}

/// Parse the elements of every field line named `name`, in order
pub fn header_elements<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Result<Vec<HeaderElement>> {
    let mut elements = Vec::new();
    for value in headers.get_all(name) {
        elements.extend(parse_header_value(value)?);
    }
    Ok(elements)
}

/// Format elements into a header value
pub fn to_header_value(elements: &[HeaderElement]) -> Result<HeaderValue> {
    let mut dst = String::new();
    BasicFormatter::new().format_elements(&mut dst, elements);
    Ok(HeaderValue::from_maybe_shared(Bytes::from(dst))?)
}
