// Domain layer: request/response models and ports (interfaces). No transport code here.

pub mod chat;
pub mod model;
pub mod ports;
