// web_app/state/form.rs - Editable product draft with validation
//
// Shared by the create and view/edit pages. Each edit re-validates the
// edited field for inline feedback; `validate` checks every field at
// once before anything is submitted.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::web_app::model::{Category, NewProduct, Product};

/// Inline validation failure for one field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Price cannot be empty")]
    InvalidPrice,
}

/// Name must be non-empty once trimmed; returns the trimmed name
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Price must parse as a decimal strictly greater than zero
pub fn validate_price(raw: &str) -> Result<Decimal, ValidationError> {
    match Decimal::from_str(raw.trim()) {
        Ok(price) if price > Decimal::ZERO => Ok(price),
        _ => Err(ValidationError::InvalidPrice),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    /// Set once a product was loaded for editing
    pub id: Option<i32>,
    pub name: String,
    pub category: Category,
    /// Raw text of the price input
    pub price: String,
    pub name_error: Option<ValidationError>,
    pub price_error: Option<ValidationError>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: Category::default(),
            price: "0".to_string(),
            name_error: None,
            price_error: None,
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            category: product.category,
            price: product.price.to_string(),
            name_error: None,
            price_error: None,
        }
    }

    pub fn set_name(&mut self, value: String) {
        self.name_error = validate_name(&value).err();
        self.name = value;
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn set_price(&mut self, value: String) {
        self.price_error = validate_price(&value).err();
        self.price = value;
    }

    pub fn has_errors(&self) -> bool {
        self.name_error.is_some() || self.price_error.is_some()
    }

    /// Validate every field, recording inline errors for all of them
    pub fn validate(&mut self) -> Option<NewProduct> {
        let name = validate_name(&self.name);
        let price = validate_price(&self.price);

        self.name_error = name.as_ref().err().copied();
        self.price_error = price.as_ref().err().copied();

        match (name, price) {
            (Ok(name), Ok(price)) => Some(NewProduct {
                name,
                category: self.category,
                price,
            }),
            _ => None,
        }
    }
}
