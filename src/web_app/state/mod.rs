// web_app/state/mod.rs - Headless page state
//
// Each page keeps its private state in one of these types and holds it
// in a signal. Requests are split into `begin_*` (decide whether to send
// and what), the API call itself, and `finish_*` (apply the result), so
// the page can await without borrowing the state. The async helpers on
// each type chain the three steps for callers that own the state
// outright.

pub mod create;
pub mod edit;
pub mod form;
pub mod lifetime;
pub mod list;

pub use create::ProductCreate;
pub use edit::ProductEditor;
pub use form::{ProductForm, ValidationError};
pub use lifetime::{LiveToken, ViewLifetime};
pub use list::{ProductList, PAGE_SIZE};

/// Progress of a page's initial fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    /// Nothing was requested
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Modal message shown after a request settles
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Created,
    Saved,
    /// A create, update, delete or load request failed
    Failed(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Created => "Product Created",
            Notice::Saved => "Changes Saved",
            Notice::Failed(_) => "Something Went Wrong",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Created => "Your product has successfully been created.".to_string(),
            Notice::Saved => "Your changes have been successfully saved.".to_string(),
            Notice::Failed(reason) => reason.clone(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}
