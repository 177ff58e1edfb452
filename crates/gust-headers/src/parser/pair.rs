//! `token [= value]` parsing

use crate::tokenizer::{self, EQUAL, NAME_DELIMITERS, VALUE_DELIMITERS};
use crate::{NameValuePair, ParserCursor};

/// Parse one name/value pair
///
/// Leaves the cursor on the `;` or `,` that ended the pair, or at the upper
/// bound. A consumed `=` always yields a value, possibly empty.
pub fn parse_name_value_pair(buffer: &str, cursor: &mut ParserCursor) -> NameValuePair {
    cursor.assert_fits(buffer);

    tokenizer::skip_whitespace(buffer, cursor);
    let name = tokenizer::scan_token(buffer, cursor, NAME_DELIMITERS);
    if tokenizer::current(buffer, cursor) != Some(EQUAL) {
        return NameValuePair::bare(name);
    }
    cursor.update_pos(cursor.pos() + 1);

    tokenizer::skip_whitespace(buffer, cursor);
    let value = tokenizer::scan_value(buffer, cursor, VALUE_DELIMITERS);
    NameValuePair::with_value(name, value)
}
