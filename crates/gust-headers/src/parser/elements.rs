//! `,`-separated header element parsing

use super::pair::parse_name_value_pair;
use super::params::parse_parameters;
use crate::tokenizer::{self, ELEM_DELIMITER};
use crate::{HeaderElement, ParserCursor};

/// Parse one element: a head pair followed by its parameters
///
/// Leaves the cursor on the terminating `,` or at the upper bound.
pub fn parse_header_element(buffer: &str, cursor: &mut ParserCursor) -> HeaderElement {
    let head = parse_name_value_pair(buffer, cursor);
    let parameters = parse_parameters(buffer, cursor);
    HeaderElement::from_parts(head, parameters)
}

/// Parse every element up to the upper bound
///
/// Empty fields between commas are skipped, as are elements whose head is
/// the empty pair.
pub fn parse_elements(buffer: &str, cursor: &mut ParserCursor) -> Vec<HeaderElement> {
    cursor.assert_fits(buffer);

    let mut elements = Vec::new();
    loop {
        skip_separators(buffer, cursor);
        if cursor.at_end() {
            break;
        }
        let start = cursor.pos();
        let element = parse_header_element(buffer, cursor);
        if element.name().is_empty() && element.value().is_none() {
            tracing::debug!(
                start = start,
                parameters = element.parameter_count(),
                "dropping header element without a name"
            );
        } else {
            elements.push(element);
        }
    }
    elements
}

/// Skip any run of `,` and whitespace
fn skip_separators(buffer: &str, cursor: &mut ParserCursor) {
    while let Some(b) = tokenizer::current(buffer, cursor) {
        if b == ELEM_DELIMITER || tokenizer::is_whitespace(b) {
            cursor.update_pos(cursor.pos() + 1);
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameValuePair;

    fn parse(s: &str) -> Vec<HeaderElement> {
        let mut cursor = ParserCursor::for_value(s);
        let elements = parse_elements(s, &mut cursor);
        assert!(cursor.at_end());
        elements
    }

    #[test]
    fn test_parse_header_elements() {
        let elements = parse(
            "name1 = value1; name2; name3=\"value3\" , name4=value4; \
             name5=value5, name6= ; name7 = value7; name8 = \" value8\"",
        );
        assert_eq!(elements.len(), 3);

        assert_eq!(elements[0].name(), "name1");
        assert_eq!(elements[0].value(), Some("value1"));
        assert_eq!(
            elements[0].parameters(),
            &[
                NameValuePair::bare("name2"),
                NameValuePair::with_value("name3", "value3"),
            ]
        );

        assert_eq!(elements[1].name(), "name4");
        assert_eq!(elements[1].value(), Some("value4"));
        assert_eq!(
            elements[1].parameters(),
            &[NameValuePair::with_value("name5", "value5")]
        );

        assert_eq!(elements[2].name(), "name6");
        assert_eq!(elements[2].value(), Some(""));
        assert_eq!(
            elements[2].parameters(),
            &[
                NameValuePair::with_value("name7", "value7"),
                NameValuePair::with_value("name8", " value8"),
            ]
        );
    }

    #[test]
    fn test_two_elements() {
        let elements =
            parse("name1 = value1; name2; name3=\"value3\" , name4=value4; name5=value5");
        assert_eq!(
            elements,
            vec![
                HeaderElement::new(
                    "name1",
                    Some("value1".to_string()),
                    vec![
                        NameValuePair::bare("name2"),
                        NameValuePair::with_value("name3", "value3"),
                    ],
                ),
                HeaderElement::new(
                    "name4",
                    Some("value4".to_string()),
                    vec![NameValuePair::with_value("name5", "value5")],
                ),
            ]
        );
    }

    #[test]
    fn test_escaped_elements() {
        let elements =
            parse("test1 =  \"\\\"stuff\\\"\", test2= \"\\\\\", test3 = \"stuff, stuff\"");
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].value(), Some("\"stuff\""));
        assert_eq!(elements[1].value(), Some("\\"));
        assert_eq!(elements[2].value(), Some("stuff, stuff"));
    }

    #[test]
    fn test_trailing_comma() {
        let elements = parse("name1 = value1,");
        assert_eq!(
            elements,
            vec![HeaderElement::new("name1", Some("value1".to_string()), vec![])]
        );

        assert_eq!(parse("name1 = value1, ").len(), 1);
    }

    #[test]
    fn test_empty_fields_skipped() {
        assert!(parse(",, ,, ,").is_empty());
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
        assert_eq!(parse(",a,,b,").len(), 2);
    }

    #[test]
    fn test_nameless_element_dropped() {
        let elements = parse("; a=b, c");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name(), "c");

        let elements = parse("=x");
        assert_eq!(elements[0].name(), "");
        assert_eq!(elements[0].value(), Some("x"));
    }

    #[test]
    fn test_parse_header_element_stops_on_comma() {
        let s = "a=1; b=2, c";
        let mut cursor = ParserCursor::for_value(s);
        let element = parse_header_element(s, &mut cursor);
        assert_eq!(element.name(), "a");
        assert_eq!(element.parameter_count(), 1);
        assert_eq!(cursor.pos(), 8);
        assert_eq!(&s[cursor.pos()..], ", c");

        // Resume on the same cursor
        cursor.update_pos(cursor.pos() + 1);
        let element = parse_header_element(s, &mut cursor);
        assert_eq!(element.name(), "c");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let s = "a=1; b, c=\"x, y\"; d=";
        let first = parse(s);
        let second = parse(s);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cursor_never_regresses() {
        let s = "a=\"unterminated, b=2";
        let mut cursor = ParserCursor::for_value(s);
        let before = cursor.pos();
        let elements = parse_elements(s, &mut cursor);
        assert!(cursor.pos() >= before);
        assert_eq!(cursor.pos(), cursor.upper_bound());
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].value(), Some("unterminated, b=2"));
    }

    #[test]
    fn test_sub_range_leaves_rest_untouched() {
        let s = "Accept: text/html, */*;q=0.1\r\n";
        let mut cursor = ParserCursor::within(s, 8, s.len() - 2).unwrap();
        let elements = parse_elements(s, &mut cursor);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].name(), "*/*");
        assert_eq!(elements[1].parameter("q").and_then(|p| p.value()), Some("0.1"));
    }
}
