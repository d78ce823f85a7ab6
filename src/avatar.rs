pub(crate) mod features;
pub mod params;
pub mod pipeline;
pub(crate) mod style;
