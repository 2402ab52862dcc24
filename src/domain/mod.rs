// Domain layer: value types and the model port. No I/O here.

pub mod model;
pub mod ports;
