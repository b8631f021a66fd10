pub mod ports;
pub mod subnet;
