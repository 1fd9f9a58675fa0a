use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::Record;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 120, message = "deve essere tra 0 e 120"))]
    pub eta: Option<i32>,
}

impl Record for User {
    fn id(&self) -> Option<u64> {
        self.id
    }
    fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
    fn not_found(id: u64) -> String {
        format!("Utente con ID {id} non trovato")
    }
}
