//! Internship listings: search and filtering, catalog lists, description
//! enhancement, and the CRUD handlers that expose them.

pub mod catalog;
pub mod enhance;
pub mod filter;
pub mod handlers;
pub mod prompts;
