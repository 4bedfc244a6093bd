// web_app/state/edit.rs - View, edit and delete one product
//
// Delete is two-step: `request_delete` only opens the prompt, and the
// DELETE goes out from `begin_delete` once the user confirms.

use super::{LoadState, Notice, ProductForm};
use crate::web_app::api::{ApiError, ProductApi};
use crate::web_app::model::{Category, Product};
use crate::web_app::routes::AppRoute;

pub const INVALID_ID: &str = "Invalid product id";
pub const NOTHING_LOADED: &str = "No product is loaded";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductEditor {
    pub form: ProductForm,
    /// Fetch of the product named in `?id=`
    pub load_state: LoadState<()>,
    /// An update or delete is outstanding
    pub in_flight: bool,
    pub delete_prompt_open: bool,
    pub notice: Option<Notice>,
}

impl ProductEditor {
    /// Build the editor from the `id` query parameter
    ///
    /// Returns the id to fetch; absent or malformed ids fetch nothing.
    pub fn activate(query_id: Option<&str>) -> (Self, Option<i32>) {
        let mut editor = Self::default();

        let Some(raw) = query_id else {
            return (editor, None);
        };

        match raw.trim().parse::<i32>() {
            Ok(id) => {
                editor.load_state = LoadState::Loading;
                (editor, Some(id))
            }
            Err(_) => {
                tracing::warn!("Ignoring malformed product id '{}'", raw);
                editor.load_state = LoadState::Failed(INVALID_ID.to_string());
                (editor, None)
            }
        }
    }

    pub fn finish_load(&mut self, result: Result<Product, ApiError>) {
        match result {
            Ok(product) => {
                tracing::info!("Loaded product {}", product.id);
                self.form = ProductForm::from_product(&product);
                self.load_state = LoadState::Loaded(());
            }
            Err(e) => {
                tracing::error!("Error loading product: {}", e);
                let message = format!("Failed to load product: {}", e);
                self.load_state = LoadState::Failed(message.clone());
                self.notice = Some(Notice::Failed(message));
            }
        }
    }

    /// Activate and, if an id was given, fetch it once
    pub async fn load<A: ProductApi>(api: &A, query_id: Option<&str>) -> Self {
        let (mut editor, id) = Self::activate(query_id);
        if let Some(id) = id {
            let result = api.get_product(id).await;
            editor.finish_load(result);
        }
        editor
    }

    pub fn edit_name(&mut self, value: String) {
        self.form.set_name(value);
    }

    pub fn edit_category(&mut self, category: Category) {
        self.form.set_category(category);
    }

    pub fn edit_price(&mut self, value: String) {
        self.form.set_price(value);
    }

    /// Validate and produce the full snapshot to PUT
    pub fn begin_save(&mut self) -> Option<Product> {
        if self.in_flight {
            tracing::debug!("Request already in flight, ignoring save");
            return None;
        }

        let Some(id) = self.form.id else {
            self.notice = Some(Notice::Failed(NOTHING_LOADED.to_string()));
            return None;
        };

        let product = self.form.validate()?.with_id(id);
        self.in_flight = true;
        Some(product)
    }

    pub fn finish_save(&mut self, result: Result<(), ApiError>) {
        self.in_flight = false;
        match result {
            Ok(()) => {
                tracing::info!("Saved product {:?}", self.form.id);
                self.notice = Some(Notice::Saved);
            }
            Err(e) => {
                tracing::error!("Error updating product: {}", e);
                self.notice = Some(Notice::Failed(format!("Failed to update product: {}", e)));
            }
        }
    }

    pub async fn save<A: ProductApi>(&mut self, api: &A) -> bool {
        let Some(product) = self.begin_save() else {
            return false;
        };

        let result = api.update_product(&product).await;
        let ok = result.is_ok();
        self.finish_save(result);
        ok
    }

    /// Open the confirmation prompt; sends nothing
    pub fn request_delete(&mut self) {
        self.delete_prompt_open = true;
    }

    pub fn cancel_delete(&mut self) {
        self.delete_prompt_open = false;
    }

    /// Close the prompt and return the id to DELETE
    pub fn begin_delete(&mut self) -> Option<i32> {
        self.delete_prompt_open = false;

        if self.in_flight {
            tracing::debug!("Request already in flight, ignoring delete");
            return None;
        }

        match self.form.id {
            Some(id) => {
                self.in_flight = true;
                Some(id)
            }
            None => {
                self.notice = Some(Notice::Failed(NOTHING_LOADED.to_string()));
                None
            }
        }
    }

    /// On success the user is sent back to the list
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Option<AppRoute> {
        self.in_flight = false;
        match result {
            Ok(()) => {
                tracing::info!("Product deleted: {:?}", self.form.id);
                Some(AppRoute::List)
            }
            Err(e) => {
                tracing::error!("Error deleting product: {}", e);
                self.notice = Some(Notice::Failed(format!("Failed to delete product: {}", e)));
                None
            }
        }
    }

    pub async fn confirm_delete<A: ProductApi>(&mut self, api: &A) -> Option<AppRoute> {
        let id = self.begin_delete()?;
        let result = api.delete_product(id).await;
        self.finish_delete(result)
    }

    /// Close the modal; a saved product returns the user to the list
    pub fn dismiss_notice(&mut self) -> Option<AppRoute> {
        match self.notice.take() {
            Some(Notice::Saved) => Some(AppRoute::List),
            _ => None,
        }
    }
}
