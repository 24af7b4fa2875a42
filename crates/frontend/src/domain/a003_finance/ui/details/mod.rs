//! Manual disbursement form (view + view model)

mod view;
mod view_model;

pub use view::DisbursementDetails;
pub use view_model::DisbursementDetailsViewModel;
