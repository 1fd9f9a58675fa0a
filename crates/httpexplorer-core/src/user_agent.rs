//! Naive `User-Agent` inspection for the introspection endpoint.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAgentReport {
    pub user_agent_completo: String,
    pub contiene_mobile: bool,
    pub browser_rilevato: Option<&'static str>,
    pub sistema_operativo: Option<&'static str>,
}

/// Substring heuristics, checked in order; first match wins.
pub fn analyze(ua: &str) -> UserAgentReport {
    let contiene_mobile = ["Mobile", "Android", "iPhone"].iter().any(|m| ua.contains(m));

    let browser_rilevato = if ua.contains("Chrome") {
        Some("Chrome")
    } else if ua.contains("Firefox") {
        Some("Firefox")
    } else if ua.contains("Safari") {
        Some("Safari")
    } else if ua.contains("Edge") {
        Some("Edge")
    } else {
        None
    };

    let sistema_operativo = [
        ("Windows", "Windows"),
        ("Mac OS", "macOS"),
        ("Linux", "Linux"),
        ("Android", "Android"),
        ("iOS", "iOS"),
    ]
    .iter()
    .find(|(needle, _)| ua.contains(needle))
    .map(|(_, os)| *os);

    UserAgentReport {
        user_agent_completo: ua.to_string(),
        contiene_mobile,
        browser_rilevato,
        sistema_operativo,
    }
}
