mod dmx_uart;
mod proximity;

pub(crate) use dmx_uart::UartDmxDriver;
pub(crate) use proximity::{init_proximity_sensor, read_distance};
