use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::UART1;
use esp_hal::uart::{Config, ConfigError, StopBits, TxError, Uart};
use log::warn;

use myrtio_dmx::transport::{BREAK_MICROS, DMX_BAUD, MAB_MICROS};
use myrtio_dmx::{DmxTransport, DmxUniverse};

/// Baud rate at which a single 0x00 byte (start bit + 8 data bits) holds the
/// line low for [`BREAK_MICROS`]
const BREAK_BAUD: u32 = 9 * 1_000_000 / BREAK_MICROS;

#[derive(Debug)]
#[allow(dead_code)]
pub(crate) enum DmxSendError {
    Config(ConfigError),
    Tx(TxError),
}

/// ESP-specific DMX512 driver using a UART peripheral
///
/// Channel writes land in an in-memory universe; [`UartDmxDriver::transmit`]
/// clocks the whole frame out, preceded by a break.
pub(crate) struct UartDmxDriver<'a> {
    uart: Uart<'a, Blocking>,
    universe: DmxUniverse,
    frame_config: Config,
    break_config: Config,
    delay: Delay,
}

impl<'a> UartDmxDriver<'a> {
    /// Create a new UART DMX driver
    ///
    /// # Arguments
    /// * `uart` - UART peripheral
    /// * `tx` - GPIO pin connected to the RS-485 transceiver input
    pub(crate) fn new<O>(uart: UART1<'a>, tx: O) -> Result<Self, ConfigError>
    where
        O: PeripheralOutput<'a>,
    {
        let uart = Uart::new(uart, uart_config(DMX_BAUD))?.with_tx(tx);

        Ok(Self {
            uart,
            universe: DmxUniverse::new(),
            frame_config: uart_config(DMX_BAUD),
            break_config: uart_config(BREAK_BAUD),
            delay: Delay::new(),
        })
    }

    /// Send the current frame, does nothing while disabled
    pub(crate) fn transmit(&mut self) -> Result<(), DmxSendError> {
        if !self.universe.is_enabled() {
            return Ok(());
        }
        self.send_frame()
    }

    fn send_frame(&mut self) -> Result<(), DmxSendError> {
        // Break + mark after break
        self.uart
            .apply_config(&self.break_config)
            .map_err(DmxSendError::Config)?;
        self.write_all(&[0])?;
        self.delay.delay_micros(MAB_MICROS);

        self.uart
            .apply_config(&self.frame_config)
            .map_err(DmxSendError::Config)?;
        let frame = *self.universe.frame();
        self.write_all(&frame)
    }

    /// Write every byte and wait until the last one left the FIFO
    fn write_all(&mut self, mut data: &[u8]) -> Result<(), DmxSendError> {
        while !data.is_empty() {
            let written = self.uart.write(data).map_err(DmxSendError::Tx)?;
            data = &data[written..];
        }
        self.uart.flush().map_err(DmxSendError::Tx)
    }
}

impl DmxTransport for UartDmxDriver<'_> {
    fn enable(&mut self) {
        self.universe.enable();
    }

    fn disable(&mut self) {
        // Push the last (cleared) frame so fixtures go dark
        if self.universe.is_enabled() {
            if let Err(e) = self.send_frame() {
                warn!("dmx: failed to send final frame: {:?}", e);
            }
        }
        self.universe.disable();
    }

    fn set_channel_range(&mut self, start: u16, count: u16, value: u8) {
        self.universe.set_channel_range(start, count, value);
    }

    fn set_channel_value(&mut self, channel: u16, value: u8) {
        self.universe.set_channel_value(channel, value);
    }
}

/// 8 data bits, no parity, 2 stop bits
fn uart_config(baudrate: u32) -> Config {
    Config::default()
        .with_baudrate(baudrate)
        .with_stop_bits(StopBits::_2)
}
