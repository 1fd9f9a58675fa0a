//! Reason phrases for the status-code test endpoint.

use serde::Serialize;

use crate::error::{ExplorerError, Result};

/// Phrase for `code`, falling back to a generic one for unmapped codes.
pub fn reason_phrase(code: u16) -> String {
    let known = match code {
        200 => "OK - Richiesta riuscita",
        201 => "Created - Risorsa creata",
        204 => "No Content - Operazione riuscita senza contenuto",
        400 => "Bad Request - Richiesta malformata",
        401 => "Unauthorized - Autenticazione richiesta",
        403 => "Forbidden - Accesso negato",
        404 => "Not Found - Risorsa non trovata",
        409 => "Conflict - Conflitto con lo stato corrente",
        422 => "Unprocessable Entity - Dati non validi",
        500 => "Internal Server Error - Errore del server",
        502 => "Bad Gateway - Gateway non valido",
        503 => "Service Unavailable - Servizio non disponibile",
        _ => return format!("Status code {code}"),
    };
    known.to_string()
}

/// Successful outcome of a simulated status code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedStatus {
    pub status_code_richiesto: u16,
    #[serde(skip)]
    pub message: String,
}

/// Codes >= 400 come back as an error carrying that code; lower codes are
/// answered literally with that status.
pub fn simulate(code: u16) -> Result<SimulatedStatus> {
    let message = reason_phrase(code);
    if code >= 400 {
        return Err(ExplorerError::Status { code, message });
    }
    Ok(SimulatedStatus { status_code_richiesto: code, message })
}
