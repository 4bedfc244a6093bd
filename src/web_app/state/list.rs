// web_app/state/list.rs - Product list: fetch, sort, paginate
//
// The fetched sequence is kept untouched; sorting works on a copy so
// switching back to id order always reproduces it.

use super::LoadState;
use crate::web_app::api::{ApiError, ProductApi};
use crate::web_app::model::{Product, SortOrder};

/// Rows shown per page
pub const PAGE_SIZE: usize = 50;

/// Message shown in place of the table when the fetch fails
pub const LOAD_ERROR: &str = "Failed to load products";

/// Stable sort of a copy of `products`
pub fn sort_products(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match order {
        SortOrder::Id => sorted.sort_by_key(|p| p.id),
        SortOrder::PriceAsc => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    sorted
}

/// Number of pages needed for `total` rows
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Clamp a 1-based page number into `[1, max(1, page_count)]`
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size).max(1))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductList {
    pub products: LoadState<Vec<Product>>,
    pub sort: SortOrder,
    /// 1-based; only changed through the clamping setters
    page: usize,
}

impl Default for ProductList {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductList {
    pub fn new() -> Self {
        Self {
            products: LoadState::Idle,
            sort: SortOrder::default(),
            page: 1,
        }
    }

    pub fn begin_load(&mut self) {
        self.products = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Product>, ApiError>) {
        match result {
            Ok(products) => {
                tracing::info!("Loaded {} products", products.len());
                self.products = LoadState::Loaded(products);
            }
            Err(e) => {
                tracing::error!("Error loading products: {}", e);
                self.products = LoadState::Failed(LOAD_ERROR.to_string());
            }
        }
        self.clamp();
    }

    /// Fetch the collection once; failures are not retried
    pub async fn load<A: ProductApi>(&mut self, api: &A) {
        self.begin_load();
        let result = api.list_products().await;
        self.finish_load(result);
    }

    /// Fetched products in the order the server returned them
    pub fn fetched(&self) -> &[Product] {
        match &self.products {
            LoadState::Loaded(products) => products,
            _ => &[],
        }
    }

    pub fn total(&self) -> usize {
        self.fetched().len()
    }

    pub fn sorted(&self) -> Vec<Product> {
        sort_products(self.fetched(), self.sort)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total(), PAGE_SIZE)
    }

    /// Current 1-based page
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn current_page_items(&self) -> Vec<Product> {
        let start = self.page.saturating_sub(1) * PAGE_SIZE;
        self.sorted().into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort = order;
        self.clamp();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.page_count()
    }

    fn clamp(&mut self) {
        self.page = clamp_page(self.page, self.total(), PAGE_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::Category;
    use rust_decimal::Decimal;

    fn product(id: i32, cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category: Category::default(),
            price: Decimal::new(cents, 2),
        }
    }

    fn loaded(count: usize) -> ProductList {
        let mut list = ProductList::new();
        let products = (1..=count as i32).map(|id| product(id, 100 * i64::from(id))).collect();
        list.finish_load(Ok(products));
        list
    }

    #[test]
    fn test_new_list() {
        let list = ProductList::new();
        assert_eq!(list.products, LoadState::Idle);
        assert_eq!(list.sort, SortOrder::Id);
        assert_eq!(list.page(), 1);
        assert_eq!(list.page_count(), 0);
        assert!(list.current_page_items().is_empty());
    }

    #[test]
    fn test_default_list_starts_on_first_page() {
        let list = ProductList::default();
        assert_eq!(list.page(), 1);
        assert!(list.current_page_items().is_empty());
        assert!(!list.can_go_prev());
    }

    #[test]
    fn test_page_count_math() {
        assert_eq!(page_count(0, 50), 0);
        assert_eq!(page_count(1, 50), 1);
        assert_eq!(page_count(50, 50), 1);
        assert_eq!(page_count(51, 50), 2);
        assert_eq!(page_count(120, 50), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 120, 50), 1);
        assert_eq!(clamp_page(2, 120, 50), 2);
        assert_eq!(clamp_page(9, 120, 50), 3);
        assert_eq!(clamp_page(4, 0, 50), 1);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let products = vec![product(3, 500), product(1, 500), product(2, 100)];
        let asc = sort_products(&products, SortOrder::PriceAsc);
        let ids: Vec<i32> = asc.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_does_not_touch_fetched_order() {
        let mut list = ProductList::new();
        list.finish_load(Ok(vec![product(2, 300), product(1, 100)]));
        list.set_sort(SortOrder::PriceDesc);

        let fetched: Vec<i32> = list.fetched().iter().map(|p| p.id).collect();
        assert_eq!(fetched, vec![2, 1]);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut list = loaded(120);
        assert!(!list.can_go_prev());
        assert!(list.can_go_next());

        list.prev_page();
        assert_eq!(list.page(), 1);

        list.next_page();
        list.next_page();
        list.next_page();
        assert_eq!(list.page(), 3);
        assert!(!list.can_go_next());
        assert_eq!(list.current_page_items().len(), 20);
    }

    #[test]
    fn test_failed_load() {
        let mut list = ProductList::new();
        list.begin_load();
        assert!(list.products.is_loading());

        list.finish_load(Err(ApiError::Status { status: 500 }));
        assert_eq!(list.products.error(), Some(LOAD_ERROR));
        assert_eq!(list.page(), 1);
        assert_eq!(list.total(), 0);
    }

    #[test]
    fn test_reload_with_fewer_rows_clamps_page() {
        let mut list = loaded(120);
        list.set_page(3);

        list.finish_load(Ok(vec![product(1, 100)]));
        assert_eq!(list.page(), 1);
    }
}
