use myrtio_dmx::{ColorOrder, DmxParameters, ProximityHueState};

pub(crate) struct SensorConfig {
    /// Readings at or beyond this distance mean nobody is in front of the sensor
    pub(crate) threshold_cm: u16,
}

/// DMX shield master serial pin, must match the GPIO in `dmx_tx_gpio!`
pub(crate) const DMX_TX_PIN: u8 = 17;

#[cfg(feature = "stage")]
pub(crate) const DMX: DmxParameters = DmxParameters {
    pin: DMX_TX_PIN,
    num_leds: 12,
    color_order: ColorOrder::Rgbw,
    channels_per_light: 8,
    channel_offset: 0,
    max_channels: 512,
};
#[cfg(not(feature = "stage"))]
pub(crate) const DMX: DmxParameters = DmxParameters {
    pin: DMX_TX_PIN,
    num_leds: 6,
    color_order: ColorOrder::Rgb,
    channels_per_light: 10,
    channel_offset: 10,
    max_channels: 512,
};

pub(crate) const SENSOR: SensorConfig = SensorConfig { threshold_cm: 50 };

pub(crate) const HUES: ProximityHueState = ProximityHueState {
    threshold_cm: SENSOR.threshold_cm,
    ..ProximityHueState::new()
};

/// GPIO number must match [`DMX_TX_PIN`]
#[macro_export]
macro_rules! dmx_tx_gpio {
    ($p:expr) => {
        $p.GPIO17
    };
}

/// Trigger and echo pins of both proximity sensors
#[macro_export]
macro_rules! proximity_gpio {
    ($p:expr) => {
        (($p.GPIO26, $p.GPIO34), ($p.GPIO27, $p.GPIO35))
    };
}
