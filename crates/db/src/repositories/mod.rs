pub mod bike_repo;

pub use bike_repo::BikeRepo;
