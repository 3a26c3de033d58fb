//! Integration tests for the DMX pixel mapper.

use std::cell::RefCell;
use std::rc::Rc;

use myrtio_dmx::color::Rgb;
use myrtio_dmx::{
    ColorOrder, DmxError, DmxParameters, DmxPixelMapper, DmxTransport, DmxUniverse, Pixel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Enable,
    Disable,
    Range { start: u16, count: u16, value: u8 },
    Value { channel: u16, value: u8 },
}

/// Transport that records every call, shared so it survives the mapper
#[derive(Clone, Default)]
struct RecordingTransport {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingTransport {
    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn take(&self) -> Vec<Call> {
        self.calls.borrow_mut().drain(..).collect()
    }
}

impl DmxTransport for RecordingTransport {
    fn enable(&mut self) {
        self.calls.borrow_mut().push(Call::Enable);
    }

    fn disable(&mut self) {
        self.calls.borrow_mut().push(Call::Disable);
    }

    fn set_channel_range(&mut self, start: u16, count: u16, value: u8) {
        self.calls
            .borrow_mut()
            .push(Call::Range { start, count, value });
    }

    fn set_channel_value(&mut self, channel: u16, value: u8) {
        self.calls.borrow_mut().push(Call::Value { channel, value });
    }
}

fn params(num_leds: u16, color_order: ColorOrder, stride: u16, offset: u16) -> DmxParameters {
    DmxParameters {
        num_leds,
        color_order,
        channels_per_light: stride,
        channel_offset: offset,
        ..DmxParameters::default()
    }
}

fn initialized(params: &DmxParameters) -> (DmxPixelMapper<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::default();
    let mut mapper = DmxPixelMapper::new(transport.clone());
    mapper.initialize(params).unwrap();
    transport.take();
    (mapper, transport)
}

fn value(channel: u16, value: u8) -> Call {
    Call::Value { channel, value }
}

#[test_log::test]
fn renders_rgb_fixture_with_offset() {
    let (mut mapper, transport) = initialized(&params(1, ColorOrder::Rgb, 10, 10));

    mapper.set_rgb(0, 255, 0, 128, 7);
    mapper.render();

    assert_eq!(
        transport.calls(),
        [value(11, 255), value(12, 0), value(13, 128), value(14, 7)]
    );
}

#[test]
fn renders_white_first_reversed_fixture() {
    let (mut mapper, transport) = initialized(&params(2, ColorOrder::Wbgr, 10, 0));

    mapper.set_rgb(1, 10, 20, 30, 40);
    mapper.render();

    let calls = transport.calls();
    assert_eq!(calls.len(), 8);
    assert_eq!(
        calls[4..],
        [value(14, 10), value(13, 20), value(12, 30), value(11, 40)]
    );
}

#[test]
fn writes_land_on_fixture_blocks_only() {
    let params = params(5, ColorOrder::Gbrw, 7, 3);
    let (mut mapper, transport) = initialized(&params);
    let table = params.color_order.channel_table();

    for index in 0..5u8 {
        mapper.set_rgb(usize::from(index), index, index + 10, index + 20, index + 30);
    }
    mapper.render();

    let calls = transport.calls();
    assert_eq!(calls.len(), 5 * 4);
    for (index, chunk) in calls.chunks(4).enumerate() {
        let base = 3 + 7 * index as u16;
        let i = index as u8;
        assert_eq!(
            chunk,
            [
                value(base + u16::from(table.red()), i),
                value(base + u16::from(table.green()), i + 10),
                value(base + u16::from(table.blue()), i + 20),
                value(base + u16::from(table.white()), i + 30),
            ]
        );
    }
}

#[test]
fn render_is_idempotent() {
    let (mut mapper, transport) = initialized(&params(3, ColorOrder::Grb, 4, 0));
    mapper.set_all(1, 2, 3, 4);
    mapper.set_hsv(1, 96, 200, 180, 0);

    mapper.render();
    let first = transport.take();
    mapper.render();
    let second = transport.take();

    assert_eq!(first, second);
}

#[test]
fn initialize_enables_and_clears() {
    let transport = RecordingTransport::default();
    let mut mapper = DmxPixelMapper::new(transport.clone());

    mapper.initialize(&params(6, ColorOrder::Rgb, 10, 10)).unwrap();

    assert!(mapper.is_initialized());
    assert_eq!(mapper.num_pixels(), 6);
    assert_eq!(
        transport.calls(),
        [
            Call::Enable,
            Call::Range {
                start: 11,
                count: 502,
                value: 0
            }
        ]
    );
}

#[test_log::test]
fn drop_clears_and_disables() {
    let (mapper, transport) = initialized(&params(2, ColorOrder::Rgb, 4, 0));

    drop(mapper);

    assert_eq!(
        transport.calls(),
        [
            Call::Range {
                start: 1,
                count: 512,
                value: 0
            },
            Call::Disable
        ]
    );
}

#[test]
fn uninitialized_drop_is_silent() {
    let transport = RecordingTransport::default();
    drop(DmxPixelMapper::new(transport.clone()));

    assert!(transport.calls().is_empty());
}

#[test]
fn zero_leds_is_rejected() {
    let transport = RecordingTransport::default();
    let mut mapper = DmxPixelMapper::new(transport.clone());

    let result = mapper.initialize(&params(0, ColorOrder::Rgb, 4, 0));

    assert_eq!(result, Err(DmxError::BadInput));
    assert!(!mapper.is_initialized());

    mapper.set_rgb(0, 1, 2, 3, 4);
    mapper.render();
    assert_eq!(mapper.pixel(0), Pixel::default());
    assert!(transport.calls().is_empty());
}

#[test]
fn short_stride_is_rejected() {
    let mut mapper = DmxPixelMapper::new(RecordingTransport::default());

    let result = mapper.initialize(&params(4, ColorOrder::Rgbw, 3, 0));

    assert_eq!(result, Err(DmxError::BadInput));
    assert_eq!(mapper.num_pixels(), 0);
}

#[test]
fn bad_reinitialize_keeps_current_session() {
    let first = params(2, ColorOrder::Rgb, 4, 0);
    let (mut mapper, transport) = initialized(&first);
    mapper.set_rgb(1, 5, 6, 7, 8);

    assert_eq!(
        mapper.initialize(&params(0, ColorOrder::Rgb, 4, 0)),
        Err(DmxError::BadInput)
    );

    assert_eq!(mapper.parameters(), Some(&first));
    assert_eq!(mapper.pixel(1), Pixel::from_rgbw(5, 6, 7, 8));
    assert!(transport.calls().is_empty());
}

#[test]
fn reinitialize_tears_down_and_resets_pixels() {
    let (mut mapper, transport) = initialized(&params(2, ColorOrder::Rgb, 4, 0));
    mapper.set_all(9, 9, 9, 9);

    mapper
        .initialize(&params(3, ColorOrder::Wrgb, 8, 20))
        .unwrap();

    assert_eq!(
        transport.calls(),
        [
            Call::Range {
                start: 1,
                count: 512,
                value: 0
            },
            Call::Disable,
            Call::Enable,
            Call::Range {
                start: 21,
                count: 492,
                value: 0
            },
        ]
    );
    assert_eq!(mapper.num_pixels(), 3);
    assert_eq!(mapper.pixel(0), Pixel::default());
    assert_eq!(
        mapper.channel_table(),
        Some(ColorOrder::Wrgb.channel_table())
    );
}

#[test]
fn out_of_range_pixels_are_ignored() {
    let (mut mapper, _transport) = initialized(&params(2, ColorOrder::Rgb, 4, 0));

    mapper.set_color(2, Rgb::new(1, 2, 3), 4);
    mapper.set_hsv(7, 0, 255, 255, 0);

    assert_eq!(mapper.pixel(2), Pixel::default());
    assert_eq!(mapper.color(7), Rgb::default());
    assert_eq!(mapper.white(2), 0);
}

#[test]
fn hsv_red_matches_rgb_red() {
    let (mut mapper, _transport) = initialized(&params(2, ColorOrder::Rgb, 4, 0));

    mapper.set_hsv(0, 0, 255, 255, 0);
    mapper.set_rgb(1, 255, 0, 0, 0);

    assert_eq!(mapper.pixel(0), mapper.pixel(1));
}

#[test]
fn channels_beyond_max_are_not_clamped() {
    let mut params = params(2, ColorOrder::Rgb, 10, 0);
    params.max_channels = 12;
    let (mut mapper, transport) = initialized(&params);

    mapper.set_all(1, 1, 1, 1);
    mapper.render();

    let channels: Vec<u16> = transport
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Value { channel, .. } => Some(channel),
            _ => None,
        })
        .collect();
    assert_eq!(channels, [1, 2, 3, 4, 11, 12, 13, 14]);
}

#[test]
fn renders_into_universe() {
    let mut mapper = DmxPixelMapper::new(DmxUniverse::new());
    assert!(!mapper.transport().is_enabled());

    mapper
        .initialize(&params(6, ColorOrder::Rgb, 10, 10))
        .unwrap();
    for index in 0..6 {
        mapper.set_rgb(index, 255, 0, 128, 7);
    }
    mapper.render();

    let universe = mapper.transport();
    assert!(universe.is_enabled());
    assert_eq!(universe.channel(11), 255);
    assert_eq!(universe.channel(13), 128);
    assert_eq!(universe.channel(14), 7);
    assert_eq!(universe.channel(61), 255);
    assert_eq!(universe.channel(64), 7);
    assert_eq!(universe.channel(15), 0);
    assert_eq!(universe.frame()[0], 0);

    mapper.shutdown();
    let universe = mapper.transport();
    assert!(!universe.is_enabled());
    assert!(universe.channels().iter().all(|value| *value == 0));
}

#[test]
fn parameters_keep_bus_pin() {
    let mut params = params(1, ColorOrder::Rgb, 4, 0);
    params.pin = 17;
    let (mapper, _transport) = initialized(&params);

    assert_eq!(mapper.parameters().map(|params| params.pin), Some(17));
}
