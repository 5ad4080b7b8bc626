// Domain layer: form state, relay payload and the ports the flow talks through.

pub mod model;
pub mod ports;
