// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - controls.rs: List controls (SortDropdown, Pagination)
// - product.rs: Product display and form components

pub mod common;
pub mod controls;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use controls::*;
pub use product::*;
