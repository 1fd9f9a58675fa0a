//! Content negotiation vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]


use httpexplorer_core::negotiation::{prefers_markup, Representation};
use vector_loader::load_accept_vectors;

#[test]
fn accept_header_vectors() {
    let vectors = load_accept_vectors("accept_headers.json");
    assert!(!vectors.is_empty());

    for v in &vectors {
        assert_eq!(
            prefers_markup(v.accept.as_deref()),
            v.expect_markup,
            "vector failed: {} (accept={:?})",
            v.description,
            v.accept
        );
    }
}

#[test]
fn representation_follows_negotiation() {
    assert_eq!(Representation::negotiate(Some("text/html")), Representation::Html);
    assert_eq!(Representation::negotiate(None), Representation::Json);
}

#[test]
fn format_override_beats_header() {
    assert_eq!(
        Representation::negotiate_with_override(Some("text/html"), Some("json")),
        Representation::Json
    );
    assert_eq!(
        Representation::negotiate_with_override(None, Some("html")),
        Representation::Html
    );
    assert_eq!(
        Representation::negotiate_with_override(Some("text/html"), Some("xml")),
        Representation::Html
    );
}
