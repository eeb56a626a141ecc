pub mod interpolator;
pub mod resolver;
