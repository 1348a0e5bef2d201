pub mod builtin;
pub mod store;

pub use builtin::builtin_puzzles;
pub use store::{Catalog, CatalogEntry, CatalogError, catalog_path};
