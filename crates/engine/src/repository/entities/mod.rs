//! sea-orm entities, one per table.
//!
//! Column names follow the storage convention (`source` for the income
//! category, snake_case everywhere); the repositories translate them into
//! domain types.

pub mod categories;
pub mod expense;
pub mod income;
