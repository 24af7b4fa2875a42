//! Add-merchant form (view + view model)

mod view;
mod view_model;

pub use view::MerchantDetails;
pub use view_model::MerchantDetailsViewModel;
