//! Search results: single Paths and the tagged segments of a route.

mod generic_path;
pub use generic_path::Path;

mod path_segment;
pub use path_segment::PathSegment;

/// The Type used for accumulated and estimated costs
pub type Cost = usize;
