//! Add/edit app user form (view + view model)

mod view;
mod view_model;

pub use view::AppUserDetails;
pub use view_model::AppUserDetailsViewModel;
