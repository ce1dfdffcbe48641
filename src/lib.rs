//! A small Rust client for the LANDFIRE Product Service (LFPS).
//!
//! This crate implements a `landfire`-style flow:
//! search the product catalog for layers, submit a clip-and-deliver job,
//! poll for completion, then download the resulting zip archive.
//!
//! ## Quick start
//! - Use [`ProductSearch`] to resolve product names/codes/themes/versions/
//!   regions into downloadable layer identifiers.
//! - Call [`Landfire::request_data`] with the layers and a `.zip` target.
//!
//! ```no_run
//! use anyhow::Result;
//! use landfire::{Landfire, ProductSearch, ProductTheme, ProductVersion};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let layers = ProductSearch::new()
//!         .with_themes([ProductTheme::Fuel])
//!         .with_versions([ProductVersion::Lf2020])
//!         .layers();
//!
//!     let client = Landfire::new("-107.70894965 46.56799094 -106.02718124 47.34869094")?;
//!     client.request_data(&layers, Path::new("landfire_fuel.zip"))?;
//!     Ok(())
//! }
//! ```
//!
//! The catalog itself is compiled-in constant data; searching it performs no
//! I/O and never mutates shared state, so any number of queries may run
//! concurrently.

#![forbid(unsafe_code)]

mod client;
mod config;
mod enums;
mod error;
pub mod geospatial;
mod job;
mod products;
mod search;
mod util;

pub use client::Landfire;
pub use enums::{ProductRegion, ProductTheme, ProductVersion};
pub use products::{
    PRODUCTS, Product, ProductAvailability, product_codes, product_names, region_names,
    theme_names, version_mapping, version_names,
};
pub use search::ProductSearch;
