pub mod catalog;
pub mod configuration;
pub mod release;
