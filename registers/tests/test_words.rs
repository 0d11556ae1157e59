//! Layout tests for the instruction word types: every field round-trips
//! over its full declared width, and neighbouring fields stay untouched.

use gc_registers::{InstrClass, OpcodeWord, PolygonData, RgbData, SpriteData};

#[test]
fn test_opcode_word_layout() {
    for class in [
        InstrClass::Wbr,
        InstrClass::Wsm,
        InstrClass::Wbm,
        InstrClass::Dp,
    ] {
        let word = OpcodeWord::new(class, 0x3FFF);
        assert_eq!(word.class(), class);
        assert_eq!(word.addr(), 0x3FFF);
        assert_eq!(word.to_raw(), (0x3FFF << 4) | class.bits());
    }
}

#[test]
fn test_opcode_addr_full_range() {
    for addr in 0..=OpcodeWord::ADDR_MASK {
        let word = OpcodeWord::new(InstrClass::Wsm, addr);
        assert_eq!(word.addr(), addr);
        assert_eq!(word.class(), InstrClass::Wsm);
    }
}

#[test]
fn test_rgb_data_full_range() {
    for r in 0..8u8 {
        for g in 0..8u8 {
            for b in 0..8u8 {
                let word = RgbData::new(r, g, b);
                assert_eq!(word.r(), r);
                assert_eq!(word.g(), g);
                assert_eq!(word.b(), b);
                assert_eq!(word.to_raw(), r as u32 | ((g as u32) << 3) | ((b as u32) << 6));
            }
        }
    }
}

#[test]
fn test_sprite_data_field_isolation() {
    let mut word = SpriteData::default();
    word.set_x(0x3FF);
    assert_eq!(word.to_raw(), 0x3FF << 19);
    word.set_x(0);
    word.set_y(0x3FF);
    assert_eq!(word.to_raw(), 0x3FF << 9);
    word.set_y(0);
    word.set_offset(0x1FF);
    assert_eq!(word.to_raw(), 0x1FF);
    word.set_offset(0);
    word.set_enable(true);
    assert_eq!(word.to_raw(), 1 << 29);
}

#[test]
fn test_sprite_data_extremes() {
    let word = SpriteData::new(0x1FF, 0x3FF, 0x3FF, true);
    assert_eq!(word.offset(), 0x1FF);
    assert_eq!(word.x(), 0x3FF);
    assert_eq!(word.y(), 0x3FF);
    assert!(word.enable());
}

#[test]
fn test_polygon_data_field_isolation() {
    let mut word = PolygonData::default();
    word.set_ref_x(0x1FF);
    assert_eq!(word.to_raw(), 0x1FF);
    word.set_ref_x(0);
    word.set_ref_y(0x1FF);
    assert_eq!(word.to_raw(), 0x1FF << 9);
    word.set_ref_y(0);
    word.set_size(0xF);
    assert_eq!(word.to_raw(), 0xF << 18);
    word.set_size(0);
    word.set_shape(true);
    assert_eq!(word.to_raw(), 1 << 31);
}

#[test]
fn test_polygon_rgb_group() {
    let word = PolygonData::new(0, 0, 0, 7, 7, 7, false);
    assert_eq!(word.to_raw(), 0x1FF << 22);
}

#[test]
fn test_setters_truncate_to_width() {
    let mut sprite = SpriteData::default();
    sprite.set_offset(0xFFFF);
    assert_eq!(sprite.offset(), 0x1FF);

    let mut poly = PolygonData::default();
    poly.set_ref_y(0xFFFF);
    assert_eq!(poly.ref_y(), 0x1FF);
    poly.set_size(0xFF);
    assert_eq!(poly.size(), 0xF);

    let mut opcode = OpcodeWord::default();
    opcode.set_addr(0xFFFF_FFFF);
    assert_eq!(opcode.addr(), 0x3FFF);
    assert_eq!(opcode.class(), InstrClass::Wbr);
}
