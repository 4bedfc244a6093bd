// web_app/routes.rs - Client-side navigation targets
//
// Pages never build paths by hand; they ask for an AppRoute and
// navigate to its path.

pub const LIST_PATH: &str = "/";
pub const CREATE_PATH: &str = "/pages/create-product";
pub const VIEW_PATH: &str = "/pages/view-product";

/// A place the user can be sent to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    List,
    Create,
    View(i32),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::List => LIST_PATH.to_string(),
            AppRoute::Create => CREATE_PATH.to_string(),
            AppRoute::View(id) => format!("{}?id={}", VIEW_PATH, id),
        }
    }
}
