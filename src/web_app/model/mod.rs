// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the ProductsAPI wire format. Field names are
// PascalCase on the wire and prices travel as plain JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing model values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("category {0} is outside 1..=3")]
    CategoryOutOfRange(i64),
}

/// Product category, one of 1, 2 or 3
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Category(u8);

impl Category {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn new(value: i64) -> Result<Self, ModelError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Category(value as u8))
        } else {
            Err(ModelError::CategoryOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every valid category, in ascending order
    pub fn all() -> impl Iterator<Item = Category> {
        (Self::MIN..=Self::MAX).map(Category)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category(Self::MIN)
    }
}

impl TryFrom<i64> for Category {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Category::new(value)
    }
}

impl From<Category> for i64 {
    fn from(category: Category) -> Self {
        i64::from(category.0)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product as stored by the remote API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Create payload; the server assigns the id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl NewProduct {
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
        }
    }
}

/// Sort order for the product list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Id,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Id, SortOrder::PriceAsc, SortOrder::PriceDesc];

    /// Value used by the `<select>` element
    pub fn as_value(self) -> &'static str {
        match self {
            SortOrder::Id => "id",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
        }
    }

    /// Unknown values fall back to id order
    pub fn from_value(value: &str) -> Self {
        match value {
            "price_asc" => SortOrder::PriceAsc,
            "price_desc" => SortOrder::PriceDesc,
            _ => SortOrder::Id,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Id => write!(f, "Sort by ID"),
            SortOrder::PriceAsc => write!(f, "Price: Low to High"),
            SortOrder::PriceDesc => write!(f, "Price: High to Low"),
        }
    }
}

/// Format a price the way the catalog displays it
pub fn format_price(price: Decimal) -> String {
    format!("R {:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_bounds() {
        assert!(Category::new(0).is_err());
        assert_eq!(Category::new(1).unwrap().value(), 1);
        assert_eq!(Category::new(3).unwrap().value(), 3);
        assert_eq!(Category::new(4), Err(ModelError::CategoryOutOfRange(4)));
        assert_eq!(Category::default().value(), 1);
    }

    #[test]
    fn test_category_all() {
        let values: Vec<u8> = Category::all().map(Category::value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_product_wire_format() {
        let product: Product = serde_json::from_value(json!({
            "Id": 7,
            "Name": "Widget",
            "Category": 2,
            "Price": 19.99
        }))
        .unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.category.value(), 2);
        assert_eq!(product.price, Decimal::new(1999, 2));
    }

    #[test]
    fn test_product_rejects_unknown_category() {
        let result: Result<Product, _> = serde_json::from_value(json!({
            "Id": 1,
            "Name": "Widget",
            "Category": 9,
            "Price": 1.0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_product_payload_has_no_id() {
        let payload = NewProduct {
            name: "Widget".to_string(),
            category: Category::new(2).unwrap(),
            price: Decimal::new(1999, 2),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({ "Name": "Widget", "Category": 2, "Price": 19.99 }));
    }

    #[test]
    fn test_with_id() {
        let product = NewProduct {
            name: "Lamp".to_string(),
            category: Category::default(),
            price: Decimal::new(5, 0),
        }
        .with_id(12);

        assert_eq!(product.id, 12);
        assert_eq!(product.name, "Lamp");
    }

    #[test]
    fn test_sort_order_value_mapping() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_value(order.as_value()), order);
        }
        assert_eq!(SortOrder::from_value("bogus"), SortOrder::Id);
        assert_eq!(SortOrder::default(), SortOrder::Id);
    }

    #[test]
    fn test_sort_order_display() {
        assert_eq!(SortOrder::Id.to_string(), "Sort by ID");
        assert_eq!(SortOrder::PriceAsc.to_string(), "Price: Low to High");
        assert_eq!(SortOrder::PriceDesc.to_string(), "Price: High to Low");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(1999, 2)), "R 19.99");
        assert_eq!(format_price(Decimal::new(5, 0)), "R 5.00");
        assert_eq!(format_price(Decimal::new(12344, 3)), "R 12.34");
    }
}
