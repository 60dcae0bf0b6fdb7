pub mod config;
pub mod error;
pub mod kernel;
pub mod records;
pub mod types;

pub use config::*;
pub use error::*;
pub use records::*;
pub use types::*;
