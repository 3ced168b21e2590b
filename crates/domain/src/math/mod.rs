pub mod scaling;

pub use scaling::{scale_decimal_down, scale_down, ten_pow};
