// web_app/state/create.rs - New product form

use super::{Notice, ProductForm};
use crate::web_app::api::{ApiError, ProductApi};
use crate::web_app::model::{Category, NewProduct};
use crate::web_app::routes::AppRoute;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductCreate {
    pub form: ProductForm,
    /// A POST is outstanding
    pub in_flight: bool,
    pub notice: Option<Notice>,
}

impl ProductCreate {
    pub fn new() -> Self {
        Self::default()
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

    /// Validate all fields and claim the in-flight slot
    ///
    /// `None` means nothing should be sent: a field is invalid or a
    /// previous submit has not settled yet.
    pub fn begin_submit(&mut self) -> Option<NewProduct> {
        if self.in_flight {
            tracing::debug!("Create already in flight, ignoring submit");
            return None;
        }

        let payload = self.form.validate()?;
        self.in_flight = true;
        Some(payload)
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.in_flight = false;
        match result {
            Ok(()) => {
                tracing::info!("Product '{}' created", self.form.name.trim());
                self.notice = Some(Notice::Created);
            }
            Err(e) => {
                tracing::error!("Error creating product: {}", e);
                self.notice = Some(Notice::Failed(format!("Failed to create product: {}", e)));
            }
        }
    }

    /// Validate, POST and record the outcome; returns whether it succeeded
    pub async fn submit<A: ProductApi>(&mut self, api: &A) -> bool {
        let Some(payload) = self.begin_submit() else {
            return false;
        };

        let result = api.create_product(&payload).await;
        let ok = result.is_ok();
        self.finish_submit(result);
        ok
    }

    /// Close the modal; after a successful create the user goes back to the list
    pub fn dismiss_notice(&mut self) -> Option<AppRoute> {
        match self.notice.take() {
            Some(Notice::Created) => Some(AppRoute::List),
            _ => None,
        }
    }
}
