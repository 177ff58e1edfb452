//! Content negotiation
//!
//! Quality-ranked values from `Accept`, `Accept-Encoding`,
//! `Accept-Language` and similar headers.

use crate::{parse_elements_str, HeaderElement, NameValuePair, Parameters};

/// A negotiated value with its `q` weight
#[derive(Debug, Clone, PartialEq)]
pub struct QualityItem {
    value: String,
    quality: f32,
    params: Parameters,
}

impl QualityItem {
    /// Build from a parsed element; `q` is lifted out of the parameters
    pub fn from_element(element: HeaderElement) -> Self {
        let mut quality = 1.0;
        let mut params = Parameters::new();
        let value = element.name().to_string();

        for param in element.parameters() {
            if param.name().eq_ignore_ascii_case("q") {
                quality = parse_quality(param.value());
            } else {
                params.push(param.clone());
            }
        }

        Self { value, quality, params }
    }

    /// Media range, coding or language tag
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Parameters other than `q`
    pub fn params(&self) -> &[NameValuePair] {
        &self.params
    }

    /// Match specificity: `None` if no match, higher is more specific
    fn specificity(&self, candidate: &str) -> Option<u8> {
        if self.value == "*" || self.value == "*/*" {
            return Some(0);
        }
        if self.value.eq_ignore_ascii_case(candidate) {
            return Some(2);
        }
        if let Some(prefix) = self.value.strip_suffix("/*") {
            let (kind, _) = candidate.split_once('/')?;
            if kind.eq_ignore_ascii_case(prefix) {
                return Some(1);
            }
        }
        None
    }
}

/// Parse a `q` value; missing or unparsable weights count as 1
fn parse_quality(value: Option<&str>) -> f32 {
    let Some(raw) = value else {
        return 1.0;
    };
    match raw.trim().parse::<f32>() {
        Ok(q) if q.is_finite() => q.clamp(0.0, 1.0),
        _ => {
            tracing::debug!(q = raw, "unparsable quality value, using 1");
            1.0
        }
    }
}

/// Parsed negotiation header, ordered by descending quality
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accept {
    items: Vec<QualityItem>,
}

impl Accept {
    /// Parse a header value
    pub fn parse(header: &str) -> Self {
        Self::from_elements(parse_elements_str(header))
    }

    pub fn from_elements(elements: impl IntoIterator<Item = HeaderElement>) -> Self {
        let mut items: Vec<QualityItem> = elements.into_iter().map(QualityItem::from_element).collect();
        // Stable: equal weights keep header order
        items.sort_by(|a, b| b.quality.total_cmp(&a.quality));
        Self { items }
    }

    pub fn items(&self) -> &[QualityItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quality of `candidate` under the most specific matching item, 0 if none
    pub fn quality(&self, candidate: &str) -> f32 {
        let mut best: Option<(u8, f32)> = None;
        for item in &self.items {
            if let Some(rank) = item.specificity(candidate) {
                if best.map_or(true, |(s, _)| rank > s) {
                    best = Some((rank, item.quality));
                }
            }
        }
        best.map_or(0.0, |(_, q)| q)
    }

    /// `true` if `candidate` has a non-zero quality
    pub fn accepts(&self, candidate: &str) -> bool {
        self.quality(candidate) > 0.0
    }

    /// Highest-quality candidate among `offers`, first offer wins ties
    pub fn negotiate<'a>(&self, offers: &[&'a str]) -> Option<&'a str> {
        let mut best: Option<(&'a str, f32)> = None;
        for &offer in offers {
            let q = self.quality(offer);
            if q > 0.0 && best.map_or(true, |(_, b)| q > b) {
                best = Some((offer, q));
            }
        }
        best.map(|(offer, _)| offer)
    }
}
