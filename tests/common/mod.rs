// common/mod.rs - Shared test utilities
//
// This module provides:
// 1. RecordingApi: an in-memory ProductApi that records every call
// 2. Product fixtures with predictable ids and prices

#![allow(dead_code)]

use std::sync::Mutex;

use product_catalog::web_app::api::{ApiError, ProductApi};
use product_catalog::web_app::model::{Category, NewProduct, Product};
use rust_decimal::Decimal;

/// One request as the remote API would have seen it
#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    List,
    Get(i32),
    Create(NewProduct),
    Update(Product),
    Delete(i32),
}

/// Fake ProductsAPI backed by a vector of products
///
/// Every call is recorded. When `fail_with` holds a status, every call
/// fails with that status instead of touching the data.
#[derive(Default)]
pub struct RecordingApi {
    products: Mutex<Vec<Product>>,
    calls: Mutex<Vec<ApiCall>>,
    fail_with: Mutex<Option<u16>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let api = Self::new();
        *api.products.lock().unwrap() = products;
        api
    }

    /// Make every following call fail with `status`
    pub fn failing(status: u16) -> Self {
        let api = Self::new();
        api.fail_with(Some(status));
        api
    }

    pub fn fail_with(&self, status: Option<u16>) {
        *self.fail_with.lock().unwrap() = status;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match *self.fail_with.lock().unwrap() {
            Some(status) => Err(ApiError::Status { status }),
            None => Ok(()),
        }
    }
}

impl ProductApi for RecordingApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record(ApiCall::List)?;
        Ok(self.products())
    }

    async fn get_product(&self, id: i32) -> Result<Product, ApiError> {
        self.record(ApiCall::Get(id))?;
        self.products()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(ApiError::Status { status: 404 })
    }

    async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        self.record(ApiCall::Create(product.clone()))?;
        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        products.push(product.clone().with_id(id));
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<(), ApiError> {
        self.record(ApiCall::Update(product.clone()))?;
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(())
            }
            None => Err(ApiError::Status { status: 404 }),
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(id))?;
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            Err(ApiError::Status { status: 404 })
        } else {
            Ok(())
        }
    }
}

pub fn category(value: i64) -> Category {
    Category::new(value).unwrap()
}

/// Product with a price given in cents
pub fn product(id: i32, name: &str, category_value: i64, cents: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category(category_value),
        price: Decimal::new(cents, 2),
    }
}

/// `count` products with ids 1..=count and distinct, shuffled prices
pub fn catalog(count: usize) -> Vec<Product> {
    (1..=count as i32)
        .map(|id| {
            // The id in the low digits keeps prices distinct below 1000 products
            let cents = i64::from((id * 37) % 1009 + 1) * 1000 + i64::from(id);
            product(id, &format!("Product {}", id), i64::from(id % 3 + 1), cents)
        })
        .collect()
}
