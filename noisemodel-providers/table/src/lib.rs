//! Labeled tables for the noise model.
//!
//! [`LabeledTable`] pairs row labels with named, typed, nullable columns and
//! converts to and from Arrow record batches. Tables do not support integer
//! casting.

mod arrow;
mod column;
mod errors;
mod table;

pub use column::{Column, ColumnData, ColumnType};
pub use errors::TableError;
pub use table::LabeledTable;

#[cfg(test)]
mod tests;
