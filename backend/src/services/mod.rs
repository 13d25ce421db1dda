pub mod llm;
pub mod query_service;
pub mod reference_table;
pub mod summary;

pub use query_service::{QueryService, RESPONSE_ERROR};
