//! Service layer providing the item CRUD operations on top of models.
//! - Separates business rules from data access (`ItemRepository`).
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
pub mod runtime;
pub mod item;
#[cfg(test)]
pub mod test_support;
