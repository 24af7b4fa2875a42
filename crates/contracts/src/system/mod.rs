//! Help center: FAQ and the support contact form

pub mod support;
