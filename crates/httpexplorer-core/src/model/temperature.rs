//! Temperature readings sent by (simulated) IoT sensors.
//!
//! Listing filters and sorts a snapshot of the repository, while the attached
//! statistics always describe the whole repository, not the filtered page.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::round2;
use crate::error::{ExplorerError, Result};
use crate::repository::Record;

/// A stored reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    #[serde(default)]
    pub id: Option<u64>,
    pub valore: f64,
    pub sensore: String,
    /// ISO-8601, assigned by the server on ingestion.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default = "default_unita")]
    pub unita: String,
    #[serde(default)]
    pub posizione: Option<String>,
}

impl Record for TemperatureReading {
    fn id(&self) -> Option<u64> {
        self.id
    }
    fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
    fn not_found(id: u64) -> String {
        format!("Lettura temperatura con ID {id} non trovata")
    }
}

fn default_unita() -> String {
    "celsius".to_string()
}

/// Payload of `POST /temperature`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewReading {
    pub valore: f64,
    #[validate(length(min = 1, message = "non può essere vuoto"))]
    pub sensore: String,
    #[serde(default = "default_unita")]
    pub unita: String,
    #[serde(default)]
    pub posizione: Option<String>,
}

impl NewReading {
    pub fn into_reading(self, timestamp: String) -> TemperatureReading {
        TemperatureReading {
            id: None,
            valore: self.valore,
            sensore: self.sensore,
            timestamp: Some(timestamp),
            unita: self.unita,
            posizione: self.posizione,
        }
    }
}

/// Listing query for readings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
pub struct TemperatureQuery {
    pub sensore: Option<String>,
    pub posizione: Option<String>,
    #[serde(default = "default_limite")]
    #[validate(range(min = 1, max = 100, message = "deve essere tra 1 e 100"))]
    pub limite: u32,
}

fn default_limite() -> u32 {
    10
}

impl Default for TemperatureQuery {
    fn default() -> Self {
        Self { sensore: None, posizione: None, limite: default_limite() }
    }
}

/// Aggregates over the entire repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryStats {
    pub totale_letture: usize,
    pub sensori_attivi: usize,
    /// `None` when the repository is empty.
    pub temperatura_media: Option<f64>,
}

impl RepositoryStats {
    pub fn compute(all: &[TemperatureReading]) -> Self {
        let sensors: HashSet<&str> = all.iter().map(|t| t.sensore.as_str()).collect();
        Self {
            totale_letture: all.len(),
            sensori_attivi: sensors.len(),
            temperatura_media: mean(all),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureListing {
    pub temperature: Vec<TemperatureReading>,
    pub statistiche: RepositoryStats,
    pub filtri_applicati: TemperatureQuery,
}

impl TemperatureQuery {
    pub fn matches(&self, t: &TemperatureReading) -> bool {
        if let Some(sensore) = self.sensore.as_deref().filter(|s| !s.is_empty()) {
            if t.sensore.to_lowercase() != sensore.to_lowercase() {
                return false;
            }
        }
        if let Some(pos) = self.posizione.as_deref().filter(|p| !p.is_empty()) {
            let Some(loc) = t.posizione.as_deref() else {
                return false;
            };
            if !loc.to_lowercase().contains(&pos.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// Filter, newest first, truncate. Statistics use the unfiltered `all`.
    pub fn run(&self, all: Vec<TemperatureReading>) -> TemperatureListing {
        let statistiche = RepositoryStats::compute(&all);

        let mut temperature: Vec<TemperatureReading> =
            all.into_iter().filter(|t| self.matches(t)).collect();
        sort_newest_first(&mut temperature);
        temperature.truncate(self.limite.max(1) as usize);

        TemperatureListing { temperature, statistiche, filtri_applicati: self.clone() }
    }
}

/// Descending by timestamp; a missing timestamp sorts as "" (last).
pub fn sort_newest_first(readings: &mut [TemperatureReading]) {
    readings.sort_by(|a, b| {
        let ka = a.timestamp.as_deref().unwrap_or("");
        let kb = b.timestamp.as_deref().unwrap_or("");
        kb.cmp(ka)
    });
}

fn mean(readings: &[TemperatureReading]) -> Option<f64> {
    if readings.is_empty() {
        return None;
    }
    let sum: f64 = readings.iter().map(|t| t.valore).sum();
    Some(round2(sum / readings.len() as f64))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorStats {
    pub numero_letture: usize,
    pub temperatura_minima: f64,
    pub temperatura_massima: f64,
    pub temperatura_media: f64,
    pub ultima_lettura: Option<String>,
}

/// All readings of one sensor with their statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorSummary {
    pub sensore: String,
    pub letture: Vec<TemperatureReading>,
    pub statistiche: SensorStats,
}

impl SensorSummary {
    /// Fails with NotFound when the sensor (case-insensitive) has no readings.
    pub fn for_sensor(all: Vec<TemperatureReading>, sensore: &str) -> Result<Self> {
        let wanted = sensore.to_lowercase();
        let mut letture: Vec<TemperatureReading> = all
            .into_iter()
            .filter(|t| t.sensore.to_lowercase() == wanted)
            .collect();

        if letture.is_empty() {
            return Err(ExplorerError::NotFound(format!(
                "Nessuna lettura trovata per il sensore {sensore}"
            )));
        }
        sort_newest_first(&mut letture);

        let min = letture.iter().map(|t| t.valore).fold(f64::INFINITY, f64::min);
        let max = letture.iter().map(|t| t.valore).fold(f64::NEG_INFINITY, f64::max);
        let statistiche = SensorStats {
            numero_letture: letture.len(),
            temperatura_minima: min,
            temperatura_massima: max,
            temperatura_media: mean(&letture).unwrap_or_default(),
            ultima_lettura: letture.first().and_then(|t| t.timestamp.clone()),
        };

        Ok(Self { sensore: sensore.to_string(), letture, statistiche })
    }
}
