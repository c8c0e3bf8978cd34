pub mod contacts;
pub mod error;

pub use error::AppError;
