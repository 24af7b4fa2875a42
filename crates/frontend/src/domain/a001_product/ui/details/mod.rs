//! Product Details UI Module
//!
//! MVVM:
//! - view_model.rs: form flow, repository commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
