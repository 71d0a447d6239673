pub mod catalog;
pub mod error;
pub mod integrity;
pub mod load;
pub mod mcp_api;
pub mod model;

pub use catalog::ApiCatalog;
