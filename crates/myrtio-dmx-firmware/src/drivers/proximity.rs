use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, InputPin, Level, Output, OutputConfig, OutputPin, Pull};
use log::warn;

use myrtio_dmx::ProximitySensor;

pub(crate) type EspProximitySensor = ProximitySensor<Output<'static>, Input<'static>, Delay>;

/// Set up an ultrasonic sensor on a trigger and an echo GPIO
pub(crate) fn init_proximity_sensor(
    trigger: impl OutputPin + 'static,
    echo: impl InputPin + 'static,
) -> EspProximitySensor {
    let trigger = Output::new(trigger, Level::Low, OutputConfig::default());
    let echo = Input::new(echo, InputConfig::default().with_pull(Pull::None));

    ProximitySensor::new(trigger, echo, Delay::new())
}

/// Distance in centimeters, 0 if the sensor failed
pub(crate) fn read_distance(sensor: &mut EspProximitySensor) -> u16 {
    match sensor.measure_cm() {
        Ok(distance) => distance,
        Err(e) => {
            warn!("proximity: {}", e);
            0
        }
    }
}
