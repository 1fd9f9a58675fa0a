//! Shared application state.
//!
//! One `Arc` holds the repositories, compiled pages, counters and metrics for
//! the life of the process; handlers reach them through `State<AppState>`.

use std::sync::Arc;

use axum::http::HeaderValue;

use httpexplorer_core::error::{ExplorerError, Result};
use httpexplorer_core::fixtures;
use httpexplorer_core::model::{Product, TemperatureReading, User};
use httpexplorer_core::Repository;

use crate::config::ServerConfig;
use crate::obs::{RequestCounters, ServerMetrics};
use crate::render::Pages;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    served_by: HeaderValue,
    products: Repository<Product>,
    users: Repository<User>,
    temperatures: Repository<TemperatureReading>,
    pages: Pages,
    counters: RequestCounters,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build application state, seeding fixtures when configured.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        cfg.validate()?;
        let served_by = HeaderValue::from_str(&cfg.server.server_name)
            .map_err(|e| ExplorerError::Config(format!("server.server_name: {e}")))?;

        let pages = Pages::new()?;

        let (products, users, temperatures) = if cfg.fixtures.seed {
            (
                Repository::with_records(fixtures::products()),
                Repository::with_records(fixtures::users()),
                Repository::with_records(fixtures::temperatures()),
            )
        } else {
            (Repository::new(), Repository::new(), Repository::new())
        };
        tracing::debug!(
            products = products.len(),
            users = users.len(),
            temperatures = temperatures.len(),
            "repositories ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                served_by,
                products,
                users,
                temperatures,
                pages,
                counters: RequestCounters::new(),
                metrics: ServerMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn served_by(&self) -> &HeaderValue {
        &self.inner.served_by
    }

    pub fn products(&self) -> &Repository<Product> {
        &self.inner.products
    }

    pub fn users(&self) -> &Repository<User> {
        &self.inner.users
    }

    pub fn temperatures(&self) -> &Repository<TemperatureReading> {
        &self.inner.temperatures
    }

    pub fn pages(&self) -> &Pages {
        &self.inner.pages
    }

    pub fn counters(&self) -> &RequestCounters {
        &self.inner.counters
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    /// Gauges appended to the `/metrics` output.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("httpexplorer_visits_total", self.counters().total()),
            ("httpexplorer_products", self.products().len() as u64),
            ("httpexplorer_users", self.users().len() as u64),
            ("httpexplorer_temperature_readings", self.temperatures().len() as u64),
        ]
    }
}
