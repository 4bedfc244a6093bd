// tests/list_state_tests.rs - Product list: loading, sorting, pagination
//
// Drives ProductList against the RecordingApi fake.

mod common;

use common::{catalog, product, ApiCall, RecordingApi};
use product_catalog::web_app::model::SortOrder;
use product_catalog::web_app::state::list::{page_count, LOAD_ERROR};
use product_catalog::web_app::state::{LoadState, ProductList, PAGE_SIZE};

fn ids(products: &[product_catalog::web_app::model::Product]) -> Vec<i32> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn test_activation_issues_one_get() {
    let api = RecordingApi::with_products(catalog(3));
    let mut list = ProductList::new();

    list.load(&api).await;

    assert_eq!(api.calls(), vec![ApiCall::List]);
    assert_eq!(list.total(), 3);
    assert!(matches!(list.products, LoadState::Loaded(_)));
}

#[tokio::test]
async fn test_failed_fetch_is_terminal_error() {
    let api = RecordingApi::failing(503);
    let mut list = ProductList::new();

    list.load(&api).await;

    assert_eq!(api.calls(), vec![ApiCall::List], "no automatic retry");
    assert_eq!(list.products.error(), Some(LOAD_ERROR));
    assert!(list.current_page_items().is_empty());
}

#[tokio::test]
async fn test_empty_collection() {
    let api = RecordingApi::new();
    let mut list = ProductList::new();

    list.load(&api).await;

    assert_eq!(list.products, LoadState::Loaded(vec![]));
    assert_eq!(list.page(), 1);
    assert_eq!(list.page_count(), 0);
}

#[test]
fn test_price_orders_are_reverses_without_ties() {
    let mut list = ProductList::new();
    list.finish_load(Ok(catalog(137)));

    list.set_sort(SortOrder::PriceAsc);
    let asc = list.sorted();
    list.set_sort(SortOrder::PriceDesc);
    let mut desc = list.sorted();

    desc.reverse();
    assert_eq!(ids(&asc), ids(&desc));
    assert!(asc.windows(2).all(|w| w[0].price < w[1].price));
}

#[test]
fn test_id_order_is_recoverable() {
    let fetched = vec![
        product(4, "D", 1, 900),
        product(2, "B", 2, 100),
        product(9, "I", 3, 500),
        product(1, "A", 1, 300),
    ];
    let mut list = ProductList::new();
    list.finish_load(Ok(fetched.clone()));

    list.set_sort(SortOrder::PriceDesc);
    assert_eq!(ids(&list.sorted()), vec![4, 9, 1, 2]);

    list.set_sort(SortOrder::Id);
    assert_eq!(ids(&list.sorted()), vec![1, 2, 4, 9]);

    // The fetched sequence itself is never reordered
    assert_eq!(list.fetched(), fetched.as_slice());
}

#[test]
fn test_page_count_and_last_page_size() {
    for n in [1_usize, 49, 50, 51, 99, 100, 101, 250] {
        let mut list = ProductList::new();
        list.finish_load(Ok(catalog(n)));

        let pages = n.div_ceil(PAGE_SIZE);
        assert_eq!(list.page_count(), pages, "page count for {} products", n);
        assert_eq!(page_count(n, PAGE_SIZE), pages);

        list.set_page(pages);
        let expected_last = if n % PAGE_SIZE == 0 { PAGE_SIZE } else { n % PAGE_SIZE };
        assert_eq!(list.current_page_items().len(), expected_last, "last page for {} products", n);
    }
}

#[test]
fn test_pages_partition_sorted_sequence() {
    let mut list = ProductList::new();
    list.finish_load(Ok(catalog(120)));
    list.set_sort(SortOrder::PriceAsc);

    let mut seen = Vec::new();
    for page in 1..=list.page_count() {
        list.set_page(page);
        seen.extend(list.current_page_items());
    }

    assert_eq!(ids(&seen), ids(&list.sorted()));
}

#[test]
fn test_page_is_clamped() {
    let mut list = ProductList::new();
    list.finish_load(Ok(catalog(120)));

    list.set_page(0);
    assert_eq!(list.page(), 1);

    list.set_page(42);
    assert_eq!(list.page(), 3);

    list.next_page();
    assert_eq!(list.page(), 3);

    list.set_page(1);
    list.prev_page();
    assert_eq!(list.page(), 1);
}

#[test]
fn test_sort_change_keeps_page_in_range() {
    let mut list = ProductList::new();
    list.finish_load(Ok(catalog(75)));
    list.set_page(2);

    list.set_sort(SortOrder::PriceDesc);
    assert_eq!(list.page(), 2);
    assert_eq!(list.current_page_items().len(), 25);
}

#[test]
fn test_default_list_has_no_rows_before_load() {
    let list = ProductList::default();

    assert_eq!(list.page(), 1);
    assert!(list.current_page_items().is_empty());
    assert!(!list.can_go_next());
}
