mod face;
mod plane;

pub use face::{Face, Solid};
pub use plane::Plane;
