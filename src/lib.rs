pub mod error;
pub mod geometry;
pub mod host;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{GeosugarError, Result};
