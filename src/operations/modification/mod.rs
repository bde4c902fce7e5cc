mod sort_contiguous;

pub use sort_contiguous::SortContiguous;
