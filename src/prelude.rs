//! Prelude module for gregorian_date crate.
//!
//! Re-exports the derive_more macros used by the date types.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
