//! Head-sequence transforms.
//!
//! Each transform consumes the alter-asset-tags payload and returns a
//! replacement of the same shape.
//!
//! # Modules
//!
//! - `stylesheet`: Converts blocking `<link rel="stylesheet">` tags into
//!   preload-then-swap form with fallback/polyfill synthesis

mod stylesheet;

pub use stylesheet::{ONLOAD_SWAP, StylesheetAsync};
