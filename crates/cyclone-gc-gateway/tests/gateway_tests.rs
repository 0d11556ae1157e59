//! Gateway tests using a mock register bus that records every access.
//!
//! Covers the reject-before-hardware rule, the exact four-step write
//! sequence, FIFO-order preservation, and the full-flag backpressure
//! behavior in both unbounded and bounded modes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Duration;

use cyclone_gc_core::command::{Instruction, OverflowPolicy};
use cyclone_gc_core::error::ProtocolError;
use cyclone_gc_gateway::{Gateway, GatewayError, Handshake, HandshakeConfig};
use gc_registers::map;

/// One recorded bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Write(usize, u32),
    Read(usize),
}

/// Mock register bus. Records every access; reads of the full flag pop
/// from a configurable queue (empty queue reads 0 = ready).
#[derive(Clone, Default)]
struct MockBus {
    accesses: Rc<RefCell<Vec<Access>>>,
    full_reads: Rc<RefCell<VecDeque<u32>>>,
}

impl MockBus {
    fn new() -> Self {
        Self::default()
    }

    /// Queue the next values the full-flag register will return.
    fn push_full_reads(&self, values: &[u32]) {
        self.full_reads.borrow_mut().extend(values.iter().copied());
    }

    fn accesses(&self) -> Vec<Access> {
        self.accesses.borrow().clone()
    }

    fn writes(&self) -> Vec<(usize, u32)> {
        self.accesses()
            .into_iter()
            .filter_map(|a| match a {
                Access::Write(offset, value) => Some((offset, value)),
                Access::Read(_) => None,
            })
            .collect()
    }
}

#[derive(Debug)]
struct MockBusError;

impl cyclone_gc_hal::RegisterBus for MockBus {
    type Error = MockBusError;

    fn write_reg(&mut self, offset: usize, value: u32) -> Result<(), Self::Error> {
        self.accesses.borrow_mut().push(Access::Write(offset, value));
        Ok(())
    }

    fn read_reg(&mut self, offset: usize) -> Result<u32, Self::Error> {
        self.accesses.borrow_mut().push(Access::Read(offset));
        if offset == map::FIFO_FULL {
            return Ok(self.full_reads.borrow_mut().pop_front().unwrap_or(0));
        }
        Ok(0)
    }
}

fn fast_config() -> HandshakeConfig {
    HandshakeConfig {
        backoff: Duration::ZERO,
        max_attempts: None,
    }
}

fn make_gateway() -> (Gateway<MockBus>, MockBus) {
    let bus = MockBus::new();
    let gateway = Gateway::new(bus.clone(), fast_config());
    (gateway, bus)
}

fn encode(instruction: &Instruction) -> Vec<u8> {
    instruction
        .encode(OverflowPolicy::Mask)
        .expect("encode")
        .to_vec()
}

#[test]
fn submit_performs_four_step_sequence() {
    let (mut gateway, bus) = make_gateway();

    let bytes = encode(&Instruction::BackgroundColor { r: 7, g: 5, b: 0 });
    gateway.handle(&bytes).expect("handle");

    let expected_data = 7 | (5 << 3);
    assert_eq!(
        bus.accesses(),
        vec![
            Access::Read(map::FIFO_FULL),
            Access::Write(map::START, 0),
            Access::Write(map::OPCODE, 0),
            Access::Write(map::DATA, expected_data),
            Access::Write(map::START, 1),
            Access::Write(map::START, 0),
        ]
    );
}

#[test]
fn invalid_lengths_never_touch_hardware() {
    let (mut gateway, bus) = make_gateway();

    for len in [0usize, 1, 2, 3, 8] {
        let bytes = vec![0u8; len];
        let err = gateway.handle(&bytes).unwrap_err();
        assert!(
            matches!(
                err,
                GatewayError::Protocol(ProtocolError::InvalidLength { len: l }) if l == len
            ),
            "length {len}"
        );
    }
    assert!(bus.accesses().is_empty(), "no register access on reject");
}

#[test]
fn unknown_tags_never_touch_hardware() {
    let (mut gateway, bus) = make_gateway();

    for tag in [5u8, 255] {
        let bytes = [tag, 0, 0, 0];
        let err = gateway.handle(&bytes).unwrap_err();
        assert!(
            matches!(
                err,
                GatewayError::Protocol(ProtocolError::UnknownOpcode { tag: t }) if t == tag
            ),
            "tag {tag}"
        );
    }
    assert!(bus.accesses().is_empty(), "no register access on reject");
}

#[test]
fn submissions_preserve_call_order() {
    let (mut gateway, bus) = make_gateway();

    let instructions = [
        Instruction::BackgroundColor { r: 1, g: 2, b: 3 },
        Instruction::BackgroundBlock {
            address: 810,
            r: 7,
            g: 5,
            b: 0,
        },
        Instruction::SpritePixel {
            address: 10124,
            r: 7,
            g: 0,
            b: 0,
        },
        Instruction::SpritePlacement {
            reg: 1,
            offset: 6,
            x: 0,
            y: 50,
            enable: true,
        },
    ];
    for instruction in &instructions {
        gateway.handle(&encode(instruction)).expect("handle");
    }

    // Extract the (opcode, data) pair of each submission from the
    // recorded write stream.
    let writes = bus.writes();
    assert_eq!(writes.len(), 5 * instructions.len());
    let delivered: Vec<(u32, u32)> = writes
        .chunks(5)
        .map(|chunk| {
            assert_eq!(chunk[0], (map::START, 0));
            assert_eq!(chunk[0].0, map::START);
            assert_eq!(chunk[1].0, map::OPCODE);
            assert_eq!(chunk[2].0, map::DATA);
            assert_eq!(chunk[3], (map::START, 1));
            assert_eq!(chunk[4], (map::START, 0));
            (chunk[1].1, chunk[2].1)
        })
        .collect();

    let expected: Vec<(u32, u32)> = instructions.iter().map(|i| i.words()).collect();
    assert_eq!(delivered, expected);
}

#[test]
fn full_flag_defers_all_writes() {
    let (mut gateway, bus) = make_gateway();
    bus.push_full_reads(&[1, 1, 1, 0]);

    let bytes = encode(&Instruction::BackgroundColor { r: 0, g: 0, b: 0 });
    gateway.handle(&bytes).expect("handle");

    let accesses = bus.accesses();
    // Three full reads, one clear read, then the write sequence; no
    // write may appear before the clear read.
    assert_eq!(accesses[0..4], [Access::Read(map::FIFO_FULL); 4]);
    assert!(matches!(accesses[4], Access::Write(o, 0) if o == map::START));
}

#[test]
fn bounded_wait_fails_with_queue_timeout() {
    let bus = MockBus::new();
    bus.push_full_reads(&[1; 16]);
    let config = HandshakeConfig {
        backoff: Duration::ZERO,
        max_attempts: NonZeroU32::new(3),
    };
    let mut handshake = Handshake::new(bus.clone(), config);

    let err = handshake.submit(0x123, 0x456).unwrap_err();
    assert!(matches!(err, GatewayError::QueueTimeout { attempts: 3 }));

    // Only full-flag reads happened, never a write.
    assert_eq!(bus.accesses(), vec![Access::Read(map::FIFO_FULL); 3]);
}

#[test]
fn unbounded_wait_eventually_submits() {
    let bus = MockBus::new();
    bus.push_full_reads(&[1; 50]);
    let mut handshake = Handshake::new(bus.clone(), fast_config());

    handshake.submit(0xA0, 0xB0).expect("submit");
    let writes = bus.writes();
    assert_eq!(writes[1], (map::OPCODE, 0xA0));
    assert_eq!(writes[2], (map::DATA, 0xB0));
}

#[test]
fn polygon_dispatch_reconstructs_exact_words() {
    let (mut gateway, bus) = make_gateway();

    let instruction = Instruction::Polygon {
        slot: 3,
        ref_x: 320,
        ref_y: 240,
        size: 9,
        r: 7,
        g: 0,
        b: 7,
        shape: cyclone_gc_core::command::PolygonShape::Triangle,
    };
    gateway.handle(&encode(&instruction)).expect("handle");

    let writes = bus.writes();
    let rgb = 7u32 | (7 << 6);
    assert_eq!(writes[1], (map::OPCODE, (3 << 4) | 0b11));
    assert_eq!(
        writes[2],
        (map::DATA, 320 | (240 << 9) | (9 << 18) | (rgb << 22) | (1 << 31))
    );
}
