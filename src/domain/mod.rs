// Domain layer: value types and the ports external engines plug into.

pub mod model;
pub mod ports;
