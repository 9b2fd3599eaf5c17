pub mod agencies;
pub mod candidates;
pub mod dashboard;
pub mod employers;
pub mod export;
pub mod health;
pub mod register;
