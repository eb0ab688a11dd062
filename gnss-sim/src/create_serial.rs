use anyhow::Result;
use log::info;
use tokio_serial::{SerialPortBuilderExt, SerialStream};

pub const DEFAULT_BAUD_RATE: u32 = 115200;

pub fn create_serial(serial_port_name: String, baud_rate: u32) -> Result<SerialStream> {
    info!("Opening {} at {} baud", serial_port_name, baud_rate);
    let serial: SerialStream = tokio_serial::new(serial_port_name, baud_rate).open_native_async()?;
    Ok(serial)
}
