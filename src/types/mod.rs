//! Data model shared across the toolkit.

mod amount;
mod asset;
mod receipt;
mod tag;

pub use amount::*;
pub use asset::*;
pub use receipt::*;
pub use tag::*;
