pub mod analysis;
pub mod health;
pub mod instruments;
pub mod reports;
