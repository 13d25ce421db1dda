pub mod project;
pub mod query;

pub use project::{GDC_PROJECT_URL, ProjectEntry, ProjectResponse};
pub use query::{Language, QueryRequest, QueryResult};
