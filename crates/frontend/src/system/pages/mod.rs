pub mod help_center;
