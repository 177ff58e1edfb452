//! Cookie header handling
//!
//! Parse `Cookie` request headers and serialize `Set-Cookie` values.

use crate::formatter::write_value;
use crate::tokenizer::{self, ELEM_DELIMITER};
use crate::{parse_parameters, ParserCursor};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Cookie SameSite attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// HTTP Cookie
#[derive(Debug, Clone, PartialEq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub max_age: Option<i64>, // Seconds
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: None,
            domain: None,
            max_age: None,
            secure: false,
            http_only: false,
            same_site: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    pub fn http_only(mut self) -> Self {
        self.http_only = true;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    /// Serialize to Set-Cookie header value
    ///
    /// Values that would not survive [`CookieJar::parse`] are quoted.
    pub fn to_header_value(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + self.value.len() + 16);
        out.push_str(&self.name);
        out.push('=');
        write_value(&mut out, &self.value, false, is_cookie_separator);

        if let Some(ref path) = self.path {
            out.push_str("; Path=");
            out.push_str(path);
        }
        if let Some(ref domain) = self.domain {
            out.push_str("; Domain=");
            out.push_str(domain);
        }
        if let Some(max_age) = self.max_age {
            out.push_str(&format!("; Max-Age={}", max_age));
        }
        if self.secure {
            out.push_str("; Secure");
        }
        if self.http_only {
            out.push_str("; HttpOnly");
        }
        if let Some(same_site) = self.same_site {
            out.push_str("; SameSite=");
            out.push_str(same_site.as_str());
        }
        out
    }

    /// Create a deletion cookie (max-age=0)
    pub fn delete(name: impl Into<String>) -> Self {
        Self::new(name, "").max_age(0)
    }
}

fn is_cookie_separator(ch: char) -> bool {
    matches!(ch, ';' | ',' | '"' | '\\' | ' ' | '\t')
}

/// Cookie jar for managing multiple cookies
#[derive(Debug, Default)]
pub struct CookieJar {
    cookies: HashMap<String, Cookie>,
    pending: SmallVec<[Cookie; 4]>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse cookies from a Cookie header
    ///
    /// Pairs are `;`-separated; a `,` between pairs is tolerated. Quoted
    /// values are unescaped. Later duplicates win.
    pub fn parse(header: &str) -> Self {
        let mut jar = Self::new();
        let mut cursor = ParserCursor::for_value(header);

        while !cursor.at_end() {
            for pair in parse_parameters(header, &mut cursor) {
                match pair.into_parts() {
                    (name, Some(value)) if !name.is_empty() => {
                        jar.cookies.insert(name.clone(), Cookie::new(name, value));
                    }
                    (name, _) => {
                        tracing::trace!(name = %name, "ignoring cookie pair without name or value");
                    }
                }
            }
            if tokenizer::current(header, &cursor) == Some(ELEM_DELIMITER) {
                cursor.update_pos(cursor.pos() + 1);
            }
        }

        jar
    }

    /// Get a cookie by name
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.get(name)
    }

    /// Get cookie value by name
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|c| c.value.as_str())
    }

    /// Add a cookie to be set
    pub fn set(&mut self, cookie: Cookie) {
        self.pending.push(cookie);
    }

    /// Remove a cookie
    pub fn remove(&mut self, name: &str) {
        self.pending.push(Cookie::delete(name));
    }

    /// Get all pending Set-Cookie headers
    pub fn pending_headers(&self) -> impl Iterator<Item = String> + '_ {
        self.pending.iter().map(|c| c.to_header_value())
    }

    /// Check if jar has a cookie
    pub fn contains(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    /// Get all cookie names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cookies.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_serialize() {
        let cookie = Cookie::new("session", "abc123")
            .path("/")
            .secure()
            .http_only()
            .same_site(SameSite::Strict);

        assert_eq!(
            cookie.to_header_value(),
            "session=abc123; Path=/; Secure; HttpOnly; SameSite=Strict"
        );
    }

    #[test]
    fn test_cookie_serialize_quotes_unsafe_value() {
        let cookie = Cookie::new("pref", "a; b");
        assert_eq!(cookie.to_header_value(), "pref=\"a; b\"");

        let jar = CookieJar::parse(&cookie.to_header_value());
        assert_eq!(jar.get_value("pref"), Some("a; b"));
    }

    #[test]
    fn test_cookie_jar_parse() {
        let jar = CookieJar::parse("session=abc123; theme=dark; lang=en");

        assert_eq!(jar.len(), 3);
        assert_eq!(jar.get_value("session"), Some("abc123"));
        assert_eq!(jar.get_value("theme"), Some("dark"));
        assert_eq!(jar.get_value("lang"), Some("en"));
        assert_eq!(jar.get_value("missing"), None);
    }

    #[test]
    fn test_cookie_jar_parse_lenient() {
        let jar = CookieJar::parse(" ; a=1;; flag; b=\"x \\\"y\\\"\", c=3 ; a=2;");

        assert_eq!(jar.get_value("a"), Some("2"));
        assert_eq!(jar.get_value("b"), Some("x \"y\""));
        assert_eq!(jar.get_value("c"), Some("3"));
        assert!(!jar.contains("flag"));
        assert_eq!(jar.len(), 3);
    }

    #[test]
    fn test_cookie_jar_parse_empty() {
        assert!(CookieJar::parse("").is_empty());
        assert!(CookieJar::parse(" ,; ").is_empty());
    }

    #[test]
    fn test_cookie_jar_pending() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new("id", "1").max_age(60));
        jar.remove("old");

        let headers: Vec<String> = jar.pending_headers().collect();
        assert_eq!(headers, vec!["id=1; Max-Age=60", "old=; Max-Age=0"]);
    }

    #[test]
    fn test_cookie_delete() {
        let cookie = Cookie::delete("session");
        assert_eq!(cookie.max_age, Some(0));
    }
}
