// Domain layer: core models and ports (interfaces). Adapters live under src/config and src/core.

pub mod model;
pub mod ports;
