// web_app/api/client.rs - reqwest implementation of ProductApi
//
// reqwest compiles to a fetch-based client on wasm32, so the same code
// serves the hydrated browser app and native tests.

use reqwest::{Client, Response};

use super::{ApiError, ProductApi};
use crate::config::ApiConfig;
use crate::web_app::model::{NewProduct, Product};

#[derive(Clone, Debug)]
pub struct HttpProductApi {
    client: Client,
    config: ApiConfig,
}

impl HttpProductApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl Default for HttpProductApi {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

/// Turn any non-2xx response into `ApiError::Status`
fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.config.products_url();
        tracing::debug!("GET {}", url);

        let response = ensure_success(self.client.get(&url).send().await?)?;
        let products: Vec<Product> = response.json().await?;

        tracing::info!("Fetched {} products", products.len());
        Ok(products)
    }

    async fn get_product(&self, id: i32) -> Result<Product, ApiError> {
        let url = self.config.product_url(id);
        tracing::debug!("GET {}", url);

        let response = ensure_success(self.client.get(&url).send().await?)?;
        Ok(response.json().await?)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        let url = self.config.products_url();
        tracing::debug!("POST {} name='{}'", url, product.name);

        ensure_success(self.client.post(&url).json(product).send().await?)?;
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<(), ApiError> {
        let url = self.config.product_url(product.id);
        tracing::debug!("PUT {}", url);

        ensure_success(self.client.put(&url).json(product).send().await?)?;
        Ok(())
    }

    async fn delete_product(&self, id: i32) -> Result<(), ApiError> {
        let url = self.config.product_url(id);
        tracing::debug!("DELETE {}", url);

        ensure_success(self.client.delete(&url).send().await?)?;
        Ok(())
    }
}
