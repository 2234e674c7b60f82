pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod raster;
pub mod traits;
pub mod utils;

pub use builder::{BuildReport, ColormapBuilder};
pub use config::{ColormapTable, Config};
pub use error::ColormapError;
