pub mod click_outside;
pub mod components;
pub mod dialogs;
pub mod fault_boundary;
pub mod form_flow;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod modal_frame;
pub mod number_format;
pub mod toast;
