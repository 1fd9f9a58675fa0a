//! Validating extractors.
//!
//! Wrap axum's `Json`, `Query` and `Path` so that both deserialization
//! failures and schema violations come back as a 422 envelope with
//! field-level detail instead of axum's plain-text rejections.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use httpexplorer_core::model::Schema;
use httpexplorer_core::ExplorerError;

use crate::error::{ApiError, AtEndpoint};

/// JSON body, deserialized then checked.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

/// Query string, deserialized then checked.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

/// Path parameters, deserialized then checked.
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Schema + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let endpoint = req.uri().path().to_string();
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rej| ApiError::new(ExplorerError::invalid("body", rej.body_text()), &endpoint))?;
        value.check().at(&endpoint)?;
        Ok(Self(value))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Schema + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let endpoint = parts.uri.path().to_string();
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rej| ApiError::new(ExplorerError::invalid("query", rej.body_text()), &endpoint))?;
        value.check().at(&endpoint)?;
        Ok(Self(value))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Schema + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let endpoint = parts.uri.path().to_string();
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rej| ApiError::new(ExplorerError::invalid("path", rej.body_text()), &endpoint))?;
        value.check().at(&endpoint)?;
        Ok(Self(value))
    }
}
