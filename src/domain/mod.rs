// Domain layer: core models and ports. No network or filesystem access here.

pub mod model;
pub mod ports;
