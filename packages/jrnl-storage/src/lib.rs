pub mod db;
pub mod journals;
pub mod models;
pub mod plan;
pub mod schema;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
