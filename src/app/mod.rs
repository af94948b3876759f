pub mod common;
pub mod interactive;
