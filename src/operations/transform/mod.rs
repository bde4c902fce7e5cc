mod decompose;
mod flatten;

pub use decompose::{lines, try_make_line};
pub use flatten::{flatten, offset_vertical};
