//! Query modules. Every function takes a borrowed `&Connection` (or a
//! transaction derefed to one); connection ownership stays with the pool.

pub mod aggregation;
pub mod filter;
pub mod product_crud;
pub mod product_query;
pub mod reference_ops;
