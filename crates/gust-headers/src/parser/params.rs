//! `;`-separated parameter list parsing

use super::pair::parse_name_value_pair;
use crate::tokenizer::{self, ELEM_DELIMITER, PARAM_DELIMITER};
use crate::{Parameters, ParserCursor};

/// Parse a parameter list up to the next `,` or the upper bound
///
/// A pair at the cursor is taken as the first parameter even without a
/// leading `;`. The terminating `,` is not consumed.
pub fn parse_parameters(buffer: &str, cursor: &mut ParserCursor) -> Parameters {
    cursor.assert_fits(buffer);

    let mut params = Parameters::new();
    tokenizer::skip_whitespace(buffer, cursor);
    while let Some(b) = tokenizer::current(buffer, cursor) {
        match b {
            ELEM_DELIMITER => break,
            PARAM_DELIMITER => {
                cursor.update_pos(cursor.pos() + 1);
                tokenizer::skip_whitespace(buffer, cursor);
                // Trailing `;` adds nothing
                if matches!(tokenizer::current(buffer, cursor), None | Some(ELEM_DELIMITER)) {
                    break;
                }
            }
            _ => {}
        }
        params.push(parse_name_value_pair(buffer, cursor));
    }
    params
}
