//! Service layer for the cake catalog.
//! - `validate` turns raw JSON payloads into accepted drafts or field errors.
//! - `query` translates request filters into store queries.
//! - `cakes` / `bakeries` / `links` are the store operations themselves.

pub mod bakeries;
pub mod cakes;
pub mod errors;
pub mod links;
pub mod pagination;
pub mod query;
#[cfg(test)]
pub mod test_support;
pub mod validate;
