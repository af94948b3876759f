pub mod catalog;
pub mod dashboard;
pub mod filter;
pub mod render;
