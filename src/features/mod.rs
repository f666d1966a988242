pub mod health;
pub mod reports;
pub mod static_files;
