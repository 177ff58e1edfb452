//! Low-level token scanning over a `(buffer, cursor)` pair
//!
//! All scanning is single pass. Delimiters and whitespace are ASCII, so every
//! position the scanner stops on is a char boundary as long as the cursor
//! bounds are.

use crate::ParserCursor;

pub const DQUOTE: u8 = b'"';
pub const ESCAPE: u8 = b'\\';
pub const EQUAL: u8 = b'=';
pub const PARAM_DELIMITER: u8 = b';';
pub const ELEM_DELIMITER: u8 = b',';

/// Delimiters that end a token in name position
pub const NAME_DELIMITERS: &[u8] = &[EQUAL, PARAM_DELIMITER, ELEM_DELIMITER];

/// Delimiters that end a token in value position
pub const VALUE_DELIMITERS: &[u8] = &[PARAM_DELIMITER, ELEM_DELIMITER];

/// Space or horizontal tab
#[inline(always)]
pub fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Byte under the cursor, `None` at end
#[inline]
pub(crate) fn current(buffer: &str, cursor: &ParserCursor) -> Option<u8> {
    if cursor.at_end() {
        None
    } else {
        Some(buffer.as_bytes()[cursor.pos()])
    }
}

/// Advance past spaces and tabs
pub fn skip_whitespace(buffer: &str, cursor: &mut ParserCursor) {
    let bytes = buffer.as_bytes();
    let mut pos = cursor.pos();
    while pos < cursor.upper_bound() && is_whitespace(bytes[pos]) {
        pos += 1;
    }
    cursor.update_pos(pos);
}

/// Scan a token in name position
///
/// Stops on any of `delimiters` or at the upper bound. Leading and trailing
/// whitespace is dropped; inner whitespace runs collapse to one space.
pub fn scan_token(buffer: &str, cursor: &mut ParserCursor, delimiters: &[u8]) -> String {
    let mut dst = String::new();
    let mut whitespace = false;
    while let Some(b) = current(buffer, cursor) {
        if delimiters.contains(&b) {
            break;
        } else if is_whitespace(b) {
            skip_whitespace(buffer, cursor);
            whitespace = true;
        } else {
            if whitespace && !dst.is_empty() {
                dst.push(' ');
            }
            copy_content(buffer, cursor, delimiters, false, &mut dst);
            whitespace = false;
        }
    }
    dst
}

/// Scan a token in value position
///
/// Same as [`scan_token`] except that a `"` switches into quoted-string mode,
/// so delimiters inside quotes do not end the value.
pub fn scan_value(buffer: &str, cursor: &mut ParserCursor, delimiters: &[u8]) -> String {
    let mut dst = String::new();
    let mut whitespace = false;
    while let Some(b) = current(buffer, cursor) {
        if delimiters.contains(&b) {
            break;
        } else if is_whitespace(b) {
            skip_whitespace(buffer, cursor);
            whitespace = true;
        } else {
            if whitespace && !dst.is_empty() {
                dst.push(' ');
            }
            if b == DQUOTE {
                copy_quoted_content(buffer, cursor, &mut dst);
            } else {
                copy_content(buffer, cursor, delimiters, true, &mut dst);
            }
            whitespace = false;
        }
    }
    dst
}

/// Extract the content of a quoted string starting at the cursor
///
/// Returns an empty string without moving if the cursor is not on `"`.
pub fn scan_quoted_content(buffer: &str, cursor: &mut ParserCursor) -> String {
    let mut dst = String::new();
    copy_quoted_content(buffer, cursor, &mut dst);
    dst
}

/// Copy a run of plain characters up to whitespace or a delimiter
fn copy_content(
    buffer: &str,
    cursor: &mut ParserCursor,
    delimiters: &[u8],
    stop_at_quote: bool,
    dst: &mut String,
) {
    let bytes = buffer.as_bytes();
    let start = cursor.pos();
    let mut pos = start;
    while pos < cursor.upper_bound() {
        let b = bytes[pos];
        if delimiters.contains(&b) || is_whitespace(b) || (stop_at_quote && b == DQUOTE) {
            break;
        }
        pos += 1;
    }
    dst.push_str(&buffer[start..pos]);
    cursor.update_pos(pos);
}

/// Unescape a quoted string into `dst`, consuming the closing quote if present
fn copy_quoted_content(buffer: &str, cursor: &mut ParserCursor, dst: &mut String) {
    let start = cursor.pos();
    if current(buffer, cursor) != Some(DQUOTE) {
        return;
    }
    let body = start + 1;
    let mut end = cursor.upper_bound();
    let mut escaped = false;
    let mut closed = false;
    for (offset, ch) in buffer[body..cursor.upper_bound()].char_indices() {
        if escaped {
            dst.push(ch);
            escaped = false;
        } else if ch == DQUOTE as char {
            end = body + offset + 1;
            closed = true;
            break;
        } else if ch == ESCAPE as char {
            escaped = true;
        } else {
            dst.push(ch);
        }
    }
    if !closed {
        tracing::trace!(start = start, "unterminated quoted string, consuming to end of range");
    }
    cursor.update_pos(end);
}
