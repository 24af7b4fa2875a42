pub mod config;
pub mod data;
pub mod date_utils;
pub mod pagination;
pub mod search;
pub mod toast;
pub mod validation;
pub mod workflow;
