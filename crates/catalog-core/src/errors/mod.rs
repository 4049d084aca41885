mod catalog_error;
mod storage_error;

pub use catalog_error::{CatalogError, CatalogResult};
pub use storage_error::StorageError;
