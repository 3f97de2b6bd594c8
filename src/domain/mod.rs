pub mod catalog;
pub mod trigger;
