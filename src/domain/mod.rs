// Domain layer: AutoML resources, resource paths and the service port.

pub mod model;
pub mod paths;
pub mod ports;
