pub mod bikes;
pub mod catalog;
