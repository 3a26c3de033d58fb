#![no_std]
#![no_main]

#[macro_use]
mod config;
mod drivers;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::main;
use log::{error, info, warn};

use myrtio_dmx::DmxPixelMapper;
use myrtio_dmx::animation::update_frame;

use crate::drivers::{UartDmxDriver, init_proximity_sensor, read_distance};

esp_bootloader_esp_idf::esp_app_desc!();

#[main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Pixel buffer lives on the heap
    esp_alloc::heap_allocator!(size: 32 * 1024);

    let delay = Delay::new();

    // Proximity
    let ((trigger1, echo1), (trigger2, echo2)) = proximity_gpio!(peripherals);
    let mut sensor1 = init_proximity_sensor(trigger1, echo1);
    let mut sensor2 = init_proximity_sensor(trigger2, echo2);

    // DMX
    let driver = match UartDmxDriver::new(peripherals.UART1, dmx_tx_gpio!(peripherals)) {
        Ok(driver) => driver,
        Err(e) => {
            error!("dmx: failed to configure UART: {:?}", e);
            halt(delay);
        }
    };
    let mut mapper = DmxPixelMapper::new(driver);
    if let Err(e) = mapper.initialize(&config::DMX) {
        error!("dmx: {}", e);
        halt(delay);
    }
    info!("dmx: strip ready on GPIO{}", config::DMX.pin);

    let mut state = config::HUES;
    loop {
        let distances = [read_distance(&mut sensor1), read_distance(&mut sensor2)];
        update_frame(&mut state, distances, &mut mapper);

        if let Err(e) = mapper.transport_mut().transmit() {
            warn!("dmx: failed to send frame: {:?}", e);
        }
    }
}

/// Initialization failures are terminal
fn halt(delay: Delay) -> ! {
    loop {
        delay.delay_millis(1000);
    }
}
