//! Accept-header content negotiation.
//!
//! Resolves a request's `Accept` header to one of the closed set of
//! representations the listing can produce. `None` means nothing the client
//! accepts is on offer and the caller should answer 406.

use axum::http::HeaderMap;
use axum::http::header::ACCEPT;

/// A representation the listing endpoint can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    Html,
    Json,
}

impl ResponseFormat {
    /// Supported formats in server preference order. Ties in client quality
    /// resolve to the earlier entry.
    pub const SUPPORTED: [ResponseFormat; 2] = [ResponseFormat::Html, ResponseFormat::Json];

    /// MIME type of this format.
    pub fn mime(self) -> &'static str {
        match self {
            ResponseFormat::Html => "text/html",
            ResponseFormat::Json => "application/json",
        }
    }

    /// Short label used in logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            ResponseFormat::Html => "html",
            ResponseFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}

/// Negotiates a format from request headers.
///
/// Multiple `Accept` headers are treated as one comma-separated list. A
/// missing or blank header accepts anything.
pub fn negotiate(headers: &HeaderMap) -> Option<ResponseFormat> {
    let accept = headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join(",");
    negotiate_accept(&accept)
}

/// Negotiates a format from a raw `Accept` header value.
pub fn negotiate_accept(accept: &str) -> Option<ResponseFormat> {
    let ranges: Vec<MediaRange<'_>> = accept.split(',').filter_map(MediaRange::parse).collect();
    if ranges.is_empty() {
        return Some(ResponseFormat::SUPPORTED[0]);
    }

    let mut best: Option<(ResponseFormat, f32)> = None;
    for format in ResponseFormat::SUPPORTED {
        let q = quality_for(format, &ranges);
        if q <= 0.0 {
            continue;
        }
        if best.is_none_or(|(_, best_q)| q > best_q) {
            best = Some((format, q));
        }
    }
    best.map(|(format, _)| format)
}

/// Quality the client assigns to `format`: the q-value of the most specific
/// matching range, or 0 when no range matches.
fn quality_for(format: ResponseFormat, ranges: &[MediaRange<'_>]) -> f32 {
    let (kind, subtype) = format
        .mime()
        .split_once('/')
        .unwrap_or((format.mime(), ""));

    ranges
        .iter()
        .filter_map(|range| range.specificity(kind, subtype).map(|s| (s, range.q)))
        .max_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)))
        .map_or(0.0, |(_, q)| q)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct MediaRange<'a> {
    kind: &'a str,
    subtype: &'a str,
    q: f32,
}

impl<'a> MediaRange<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.split(';');
        let (kind, subtype) = parts.next()?.trim().split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut q = 1.0;
        for param in parts {
            if let Some((name, value)) = param.split_once('=')
                && name.trim().eq_ignore_ascii_case("q")
            {
                q = value
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|q| q.is_finite())
                    .map_or(0.0, |q| q.clamp(0.0, 1.0));
            }
        }

        Some(Self { kind, subtype, q })
    }

    /// How specifically this range matches `kind/subtype`: 2 for an exact
    /// match, 1 for `kind/*`, 0 for `*/*`, `None` for no match.
    fn specificity(&self, kind: &str, subtype: &str) -> Option<u8> {
        match (self.kind, self.subtype) {
            ("*", "*") => Some(0),
            (k, "*") if k.eq_ignore_ascii_case(kind) => Some(1),
            (k, s) if k.eq_ignore_ascii_case(kind) && s.eq_ignore_ascii_case(subtype) => Some(2),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn exact_types_resolve() {
        assert_eq!(negotiate_accept("text/html"), Some(ResponseFormat::Html));
        assert_eq!(
            negotiate_accept("application/json"),
            Some(ResponseFormat::Json)
        );
    }

    #[test]
    fn missing_or_blank_header_prefers_html() {
        assert_eq!(negotiate(&HeaderMap::new()), Some(ResponseFormat::Html));
        assert_eq!(negotiate_accept("   "), Some(ResponseFormat::Html));
    }

    #[test]
    fn wildcard_prefers_html() {
        assert_eq!(negotiate_accept("*/*"), Some(ResponseFormat::Html));
        assert_eq!(negotiate_accept("application/*"), Some(ResponseFormat::Json));
        assert_eq!(negotiate_accept("text/*"), Some(ResponseFormat::Html));
    }

    #[test]
    fn unsupported_types_yield_none() {
        assert_eq!(negotiate_accept("text/plain"), None);
        assert_eq!(negotiate_accept("image/png, application/xml"), None);
    }

    #[test]
    fn quality_values_are_honoured() {
        assert_eq!(
            negotiate_accept("text/html;q=0.5, application/json"),
            Some(ResponseFormat::Json)
        );
        assert_eq!(
            negotiate_accept("application/json;q=0.2, text/html;q=0.9"),
            Some(ResponseFormat::Html)
        );
    }

    #[test]
    fn zero_quality_excludes_a_format() {
        assert_eq!(
            negotiate_accept("text/html;q=0, application/json"),
            Some(ResponseFormat::Json)
        );
        assert_eq!(negotiate_accept("text/html;q=0"), None);
    }

    #[test]
    fn specific_range_overrides_wildcard() {
        assert_eq!(
            negotiate_accept("*/*;q=0.8, text/html;q=0.1"),
            Some(ResponseFormat::Json)
        );
    }

    #[test]
    fn malformed_quality_counts_as_zero() {
        assert_eq!(
            negotiate_accept("text/html;q=abc, application/json;q=0.3"),
            Some(ResponseFormat::Json)
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            negotiate_accept("Application/JSON"),
            Some(ResponseFormat::Json)
        );
    }

    #[test]
    fn typical_browser_header_gets_html() {
        let accept = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
        assert_eq!(negotiate_accept(accept), Some(ResponseFormat::Html));
    }

    #[test]
    fn multiple_accept_headers_are_combined() {
        let mut headers = HeaderMap::new();
        headers.append(ACCEPT, HeaderValue::from_static("text/plain"));
        headers.append(ACCEPT, HeaderValue::from_static("application/json"));
        assert_eq!(negotiate(&headers), Some(ResponseFormat::Json));
    }

    #[test]
    fn garbage_entries_are_skipped() {
        assert_eq!(
            negotiate_accept("nonsense, , application/json"),
            Some(ResponseFormat::Json)
        );
    }
}
