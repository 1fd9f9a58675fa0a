//! Products: record, partial update, listing query.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Patch, Schema};
use crate::error::{ExplorerError, FieldIssue, Result};
use crate::repository::Record;

const NOME_MAX: usize = 100;
const DESCRIZIONE_MAX: usize = 500;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Assigned by the repository; ignored on input.
    #[serde(default)]
    pub id: Option<u64>,
    #[validate(length(min = 1, max = 100, message = "deve contenere tra 1 e 100 caratteri"))]
    pub nome: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "non può superare 500 caratteri"))]
    pub descrizione: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "deve essere maggiore di 0"))]
    pub prezzo: f64,
    pub categoria: String,
    #[serde(default = "default_disponibile")]
    pub disponibile: bool,
    #[serde(default = "default_tags")]
    pub tags: Option<Vec<String>>,
}

fn default_disponibile() -> bool {
    true
}

fn default_tags() -> Option<Vec<String>> {
    Some(Vec::new())
}

impl Record for Product {
    fn id(&self) -> Option<u64> {
        self.id
    }
    fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
    fn not_found(id: u64) -> String {
        format!("Prodotto con ID {id} non trovato")
    }
}

/// Partial update: only keys present in the payload are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub nome: Patch<String>,
    #[serde(default)]
    pub descrizione: Patch<String>,
    #[serde(default)]
    pub prezzo: Patch<f64>,
    #[serde(default)]
    pub categoria: Patch<String>,
    #[serde(default)]
    pub disponibile: Patch<bool>,
    #[serde(default)]
    pub tags: Patch<Vec<String>>,
}

impl ProductPatch {
    /// Names of the fields carried by the payload, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("nome", self.nome.is_present()),
            ("descrizione", self.descrizione.is_present()),
            ("prezzo", self.prezzo.is_present()),
            ("categoria", self.categoria.is_present()),
            ("disponibile", self.disponibile.is_present()),
            ("tags", self.tags.is_present()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    pub fn apply_to(self, product: &mut Product) {
        self.nome.apply_required(&mut product.nome);
        self.descrizione.apply_nullable(&mut product.descrizione);
        self.prezzo.apply_required(&mut product.prezzo);
        self.categoria.apply_required(&mut product.categoria);
        self.disponibile.apply_required(&mut product.disponibile);
        self.tags.apply_nullable(&mut product.tags);
    }
}

impl Schema for ProductPatch {
    fn check(&self) -> Result<()> {
        let mut issues = Vec::new();

        for (field, is_null) in [
            ("nome", self.nome == Patch::Null),
            ("prezzo", self.prezzo == Patch::Null),
            ("categoria", self.categoria == Patch::Null),
            ("disponibile", self.disponibile == Patch::Null),
        ] {
            if is_null {
                issues.push(FieldIssue::new(field, "non può essere null"));
            }
        }

        if let Some(nome) = self.nome.as_value() {
            let len = nome.chars().count();
            if len == 0 || len > NOME_MAX {
                issues.push(FieldIssue::new("nome", "deve contenere tra 1 e 100 caratteri"));
            }
        }
        if let Some(descrizione) = self.descrizione.as_value() {
            if descrizione.chars().count() > DESCRIZIONE_MAX {
                issues.push(FieldIssue::new("descrizione", "non può superare 500 caratteri"));
            }
        }
        if let Some(prezzo) = self.prezzo.as_value() {
            if prezzo.is_nan() || *prezzo <= 0.0 {
                issues.push(FieldIssue::new("prezzo", "deve essere maggiore di 0"));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ExplorerError::Validation(issues))
        }
    }
}

/// Listing query: filters then pagination.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductQuery {
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub disponibile: Option<bool>,
    #[validate(range(min = 0.0, message = "deve essere >= 0"))]
    pub prezzo_min: Option<f64>,
    #[validate(range(min = 0.0, message = "deve essere >= 0"))]
    pub prezzo_max: Option<f64>,
    #[serde(default = "default_limite")]
    #[validate(range(min = 1, max = 100, message = "deve essere tra 1 e 100"))]
    pub limite: u32,
    #[serde(default = "default_pagina")]
    #[validate(range(min = 1, message = "deve essere >= 1"))]
    pub pagina: u32,
}

fn default_limite() -> u32 {
    10
}

fn default_pagina() -> u32 {
    1
}

/// Query-string booleans the way browsers and shells spell them:
/// `true/1/yes/on` and `false/0/no/off`, in any case.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Str(&raw),
            &"un booleano (true/false, 1/0, yes/no, on/off)",
        )),
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            categoria: None,
            disponibile: None,
            prezzo_min: None,
            prezzo_max: None,
            limite: default_limite(),
            pagina: default_pagina(),
        }
    }
}

/// Pagination block of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub pagina_corrente: u32,
    pub limite_per_pagina: u32,
    pub totale_risultati: usize,
    pub totale_pagine: usize,
}

/// Filters echoed back to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedFilters {
    pub categoria: Option<String>,
    pub disponibile: Option<bool>,
    pub prezzo_min: Option<f64>,
    pub prezzo_max: Option<f64>,
}

/// One page of filtered products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    pub prodotti: Vec<Product>,
    pub paginazione: Pagination,
    pub filtri_applicati: AppliedFilters,
}

impl ProductQuery {
    /// All filters, applied in sequence. An empty `categoria` does not filter.
    pub fn matches(&self, p: &Product) -> bool {
        if let Some(cat) = self.categoria.as_deref().filter(|c| !c.is_empty()) {
            if p.categoria.to_lowercase() != cat.to_lowercase() {
                return false;
            }
        }
        if let Some(disp) = self.disponibile {
            if p.disponibile != disp {
                return false;
            }
        }
        if let Some(min) = self.prezzo_min {
            if p.prezzo < min {
                return false;
            }
        }
        if let Some(max) = self.prezzo_max {
            if p.prezzo > max {
                return false;
            }
        }
        true
    }

    /// Filter the full list (insertion order) and cut the requested page.
    pub fn run(&self, products: Vec<Product>) -> ProductPage {
        let filtered: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        let total = filtered.len();

        let limite = self.limite.max(1) as usize;
        let offset = (self.pagina.max(1) as usize - 1).saturating_mul(limite);
        let prodotti: Vec<Product> = filtered.into_iter().skip(offset).take(limite).collect();

        ProductPage {
            prodotti,
            paginazione: Pagination {
                pagina_corrente: self.pagina,
                limite_per_pagina: self.limite,
                totale_risultati: total,
                totale_pagine: total.div_ceil(limite),
            },
            filtri_applicati: AppliedFilters {
                categoria: self.categoria.clone(),
                disponibile: self.disponibile,
                prezzo_min: self.prezzo_min,
                prezzo_max: self.prezzo_max,
            },
        }
    }
}
