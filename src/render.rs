pub(crate) mod paint;
pub mod surface;
