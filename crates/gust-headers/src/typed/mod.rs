//! Typed views over common structured headers
//!
//! Built on the lenient value parser; none of these reject malformed input.

pub mod accept;
pub mod cookie;

pub use accept::{Accept, QualityItem};
pub use cookie::{Cookie, CookieJar, SameSite};
