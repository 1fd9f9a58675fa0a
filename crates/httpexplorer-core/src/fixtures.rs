//! Seed data loaded at startup.

use crate::model::{Product, TemperatureReading, User};

fn product(
    id: u64,
    nome: &str,
    descrizione: &str,
    prezzo: f64,
    categoria: &str,
    disponibile: bool,
    tags: &[&str],
) -> Product {
    Product {
        id: Some(id),
        nome: nome.to_string(),
        descrizione: Some(descrizione.to_string()),
        prezzo,
        categoria: categoria.to_string(),
        disponibile,
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Smartphone Pro", "Ultimo modello con 5G", 899.99, "elettronica", true, &["mobile", "5g"]),
        product(2, "Laptop Gaming", "Potente laptop per gaming", 1299.99, "computer", true, &["gaming", "performance"]),
        product(3, "Cuffie Wireless", "Audio di alta qualità", 199.99, "audio", false, &["wireless", "audio"]),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User { id: Some(1), nome: "Mario Rossi".into(), email: "mario@email.com".into(), eta: Some(30) },
        User { id: Some(2), nome: "Giulia Bianchi".into(), email: "giulia@email.com".into(), eta: Some(25) },
    ]
}

fn reading(id: u64, valore: f64, sensore: &str, timestamp: &str, posizione: &str) -> TemperatureReading {
    TemperatureReading {
        id: Some(id),
        valore,
        sensore: sensore.to_string(),
        timestamp: Some(timestamp.to_string()),
        unita: "celsius".to_string(),
        posizione: Some(posizione.to_string()),
    }
}

pub fn temperatures() -> Vec<TemperatureReading> {
    vec![
        reading(1, 21.5, "sensore_aula_1", "2024-01-15T08:00:00.000000Z", "Aula 1 - Piano Terra"),
        reading(2, 22.3, "sensore_aula_1", "2024-01-15T10:00:00.000000Z", "Aula 1 - Piano Terra"),
        reading(3, 19.8, "sensore_lab", "2024-01-15T09:30:00.000000Z", "Laboratorio Telecomunicazioni"),
        reading(4, 4.2, "sensore_esterno", "2024-01-15T07:45:00.000000Z", "Cortile esterno"),
    ]
}
