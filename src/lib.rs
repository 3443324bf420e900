pub mod assembler;
pub mod config;
pub mod error;
pub mod model;
pub mod reports;
pub mod scorer;
pub mod source;
