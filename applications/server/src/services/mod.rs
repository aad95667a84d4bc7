/// Service layer modules
pub mod catalog;

pub use catalog::CatalogService;
