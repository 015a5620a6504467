//! Pure shift arithmetic: net worked time and the regular/overtime split.

pub mod breakdown;
pub mod duration;

pub use breakdown::{HoursSplit, PricedShift, hours_breakdown, price, price_shift, split_hours};
pub use duration::net_duration;
