mod criteria;
mod page;
mod product;
mod reference;

pub use criteria::{CatalogCriteria, EntityRef, PageWindow};
pub use page::{total_pages, CatalogPage, PageMeta};
pub use product::{BrandSummary, ModelSummary, NewProduct, Product};
pub use reference::{Brand, Model, NewBrand, NewModel, NewSpace, Space};
