pub mod project;
pub mod query;
pub mod web;
