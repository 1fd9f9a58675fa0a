//! Content negotiation between JSON envelopes and HTML documents.
//!
//! The decision is a deliberately simplified reading of the `Accept` header:
//! only `text/html` and `application/json` are compared, by quality value.

/// Markup media type.
pub const MEDIA_HTML: &str = "text/html";
/// Structured-data media type.
pub const MEDIA_JSON: &str = "application/json";

/// Response representation chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Json,
    Html,
}

impl Representation {
    /// Negotiate from the raw `Accept` header.
    pub fn negotiate(accept: Option<&str>) -> Self {
        if prefers_markup(accept) {
            Representation::Html
        } else {
            Representation::Json
        }
    }

    /// Explicit override (`?formato=html|json`) wins over the header.
    pub fn negotiate_with_override(accept: Option<&str>, forced: Option<&str>) -> Self {
        match forced {
            Some("html") => Representation::Html,
            Some("json") => Representation::Json,
            _ => Self::negotiate(accept),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Representation::Json => "JSON",
            Representation::Html => "HTML",
        }
    }
}

/// Returns true when the client prefers HTML over JSON.
///
/// Absent header or no mention of `text/html` means JSON. Otherwise HTML wins
/// whenever its q-value is at least the JSON one (ties favor HTML). A JSON
/// media type listed without q counts as 1.0, an unlisted one as 0.0.
/// Malformed q-values are read as 1.0.
pub fn prefers_markup(accept: Option<&str>) -> bool {
    let Some(accept) = accept else {
        return false;
    };
    let accept = accept.to_ascii_lowercase();

    let Some(html_q) = media_quality(&accept, MEDIA_HTML) else {
        return false;
    };
    let json_q = media_quality(&accept, MEDIA_JSON).unwrap_or(0.0);

    html_q >= json_q
}

/// Quality of `media` inside a lowercased header, `None` if not mentioned.
fn media_quality(accept: &str, media: &str) -> Option<f32> {
    let (_, after) = accept.split_once(media)?;
    let params = after.split(',').next().unwrap_or_default();

    let q = match params.split_once("q=") {
        Some((_, raw)) => {
            let raw = raw.split([';', ',']).next().unwrap_or_default();
            raw.trim().parse::<f32>().unwrap_or(1.0)
        }
        None => 1.0,
    };
    Some(q)
}
