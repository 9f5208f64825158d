pub mod error;
pub mod postgres;
pub mod query;
pub mod traits;
pub mod writer;
