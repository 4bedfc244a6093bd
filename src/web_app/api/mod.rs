// web_app/api/mod.rs - Access to the remote ProductsAPI
//
// Pages and state types talk to the API through the ProductApi trait.
// HttpProductApi is the real implementation; tests substitute a
// recording fake.

pub mod client;

pub use client::HttpProductApi;

use thiserror::Error;

use crate::web_app::model::{NewProduct, Product};

/// Failure of a single API request
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
            }
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Operations offered by the ProductsAPI
///
/// Futures are not required to be `Send`; in the browser they run on the
/// single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// `GET /ProductsAPI`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /ProductsAPI/{id}`
    async fn get_product(&self, id: i32) -> Result<Product, ApiError>;

    /// `POST /ProductsAPI`; the response body is ignored
    async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError>;

    /// `PUT /ProductsAPI/{id}` with the full product
    async fn update_product(&self, product: &Product) -> Result<(), ApiError>;

    /// `DELETE /ProductsAPI/{id}`
    async fn delete_product(&self, id: i32) -> Result<(), ApiError>;
}
