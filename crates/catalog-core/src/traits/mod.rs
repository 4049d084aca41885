mod catalog_storage;

pub use catalog_storage::ICatalogStorage;
