// Domain layer: core models and ports (interfaces). No browser or IO dependencies.

pub mod model;
pub mod ports;
