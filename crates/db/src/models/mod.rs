pub mod bike;
