// Domain layer: antenna models, the registry and the ports implemented by adapters.

pub mod model;
pub mod ports;
pub mod registry;
