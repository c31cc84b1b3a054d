// Domain layer: participants, messages and the ports the session talks through.

pub mod messages;
pub mod model;
pub mod ports;
