//! PDF.co API module
//!
//! Contains wire types and the client for interacting with the PDF.co REST API.

pub mod client;
pub mod types;
