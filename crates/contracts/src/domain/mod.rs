pub mod a001_product;
pub mod a002_umkm;
pub mod a003_finance;
pub mod a004_sales;
pub mod a005_shipping;
pub mod a006_order;
pub mod a007_app_user;
pub mod common;
