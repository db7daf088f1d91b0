// Domain layer: models and the observation source port. No HTTP here.

pub mod model;
pub mod ports;
