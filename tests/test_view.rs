use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use laspoint::las::{LasWavepacket, PointFormat, PointRecord, PointRecordView};
use laspoint::LasPointError;

struct LegacyFields {
    x: i32,
    y: i32,
    z: i32,
    intensity: u16,
    bit_fields: u8,
    classification: u8,
    scan_angle_rank: i8,
    user_data: u8,
    point_source_id: u16,
}

fn write_legacy_core<W: Write>(dst: &mut W, f: &LegacyFields) {
    dst.write_i32::<LittleEndian>(f.x).unwrap();
    dst.write_i32::<LittleEndian>(f.y).unwrap();
    dst.write_i32::<LittleEndian>(f.z).unwrap();
    dst.write_u16::<LittleEndian>(f.intensity).unwrap();
    dst.write_u8(f.bit_fields).unwrap();
    dst.write_u8(f.classification).unwrap();
    dst.write_i8(f.scan_angle_rank).unwrap();
    dst.write_u8(f.user_data).unwrap();
    dst.write_u16::<LittleEndian>(f.point_source_id).unwrap();
}

fn write_wavepacket<W: Write>(dst: &mut W) {
    dst.write_u8(3).unwrap();
    dst.write_u64::<LittleEndian>(1024).unwrap();
    dst.write_u32::<LittleEndian>(256).unwrap();
    dst.write_f32::<LittleEndian>(0.5).unwrap();
    dst.write_f32::<LittleEndian>(0.1).unwrap();
    dst.write_f32::<LittleEndian>(0.2).unwrap();
    dst.write_f32::<LittleEndian>(0.3).unwrap();
}

fn extreme_fields() -> LegacyFields {
    LegacyFields {
        x: i32::MIN,
        y: i32::MAX,
        z: -1,
        intensity: u16::MAX,
        bit_fields: 0b1011_0101,
        classification: 0b1010_1001,
        scan_angle_rank: -90,
        user_data: 255,
        point_source_id: 0xFFFE,
    }
}

fn point_format_5() -> PointRecord {
    let mut data = Vec::<u8>::new();
    write_legacy_core(&mut data, &extreme_fields());
    data.write_f64::<LittleEndian>(123_456.789).unwrap();
    data.write_u16::<LittleEndian>(0xFFFF).unwrap();
    data.write_u16::<LittleEndian>(0x8000).unwrap();
    data.write_u16::<LittleEndian>(1).unwrap();
    write_wavepacket(&mut data);

    PointRecord::unpack_from(PointFormat::new(5).unwrap(), &data).unwrap()
}

fn point_format_10() -> PointRecord {
    let mut data = Vec::<u8>::new();
    data.write_i32::<LittleEndian>(-7).unwrap();
    data.write_i32::<LittleEndian>(8).unwrap();
    data.write_i32::<LittleEndian>(9).unwrap();
    data.write_u16::<LittleEndian>(40_000).unwrap();
    // 3 returns, this is the second one
    data.write_u8(0b0011_0010).unwrap();
    // edge, scanner channel 3, withheld, synthetic
    data.write_u8(0b1011_0101).unwrap();
    data.write_u8(64).unwrap();
    data.write_u8(17).unwrap();
    data.write_i16::<LittleEndian>(2500).unwrap();
    data.write_u16::<LittleEndian>(60_000).unwrap();
    data.write_f64::<LittleEndian>(-1.5).unwrap();
    data.write_u16::<LittleEndian>(10).unwrap();
    data.write_u16::<LittleEndian>(20).unwrap();
    data.write_u16::<LittleEndian>(30).unwrap();
    data.write_u16::<LittleEndian>(65_000).unwrap();
    write_wavepacket(&mut data);

    PointRecord::unpack_from(PointFormat::new(10).unwrap(), &data).unwrap()
}

#[test]
fn test_scalar_fields_are_bit_identical() {
    let record = point_format_5();
    let view = PointRecordView::wrap(&record);

    assert_eq!(view.x(), i32::MIN);
    assert_eq!(view.y(), i32::MAX);
    assert_eq!(view.z(), -1);
    assert_eq!(view.intensity(), u16::MAX);
    assert_eq!(view.classification(), 0b0_1001);
    assert_eq!(view.scan_angle_rank(), -90);
    assert_eq!(view.user_data(), 255);
    assert_eq!(view.point_source_id(), 0xFFFE);
    assert_eq!(view.gps_time().to_bits(), 123_456.789f64.to_bits());
    assert_eq!(view.red(), 0xFFFF);
    assert_eq!(view.green(), 0x8000);
    assert_eq!(view.blue(), 1);
    assert_eq!(view.nir(), 0);
}

#[test]
fn test_bit_packed_fields() {
    let record = point_format_5();
    let view = record.view();

    // 0b1_0_110_101
    assert_eq!(view.return_number(), 5);
    assert_eq!(view.number_of_returns(), 6);
    assert_eq!(view.scan_direction_flag(), 0);
    assert_eq!(view.edge_of_flight_line(), 1);
}

#[test]
fn test_bit_packed_fields_ranges() {
    for byte in 0..=255u8 {
        let mut data = vec![0u8; 20];
        data[14] = byte;
        let record = PointRecord::unpack_from(PointFormat::new(0).unwrap(), &data).unwrap();
        let view = record.view();
        assert!(view.return_number() <= 7);
        assert!(view.number_of_returns() <= 7);
        assert!(view.scan_direction_flag() <= 1);
        assert!(view.edge_of_flight_line() <= 1);
    }
}

#[test]
fn test_classification_flags_are_independent() {
    // synthetic=1, key-point=0, withheld=1
    let record = point_format_5();
    let view = record.view();
    assert!(view.is_synthetic());
    assert!(!view.is_key_point());
    assert!(view.is_withheld());

    let mut data = vec![0u8; 20];
    data[15] = 0b0100_0000;
    let record = PointRecord::unpack_from(PointFormat::new(0).unwrap(), &data).unwrap();
    let view = record.view();
    assert!(!view.is_synthetic());
    assert!(view.is_key_point());
    assert!(!view.is_withheld());
}

#[test]
fn test_no_wave_packet() {
    for id in &[0u8, 1, 2, 3, 6, 7, 8] {
        let record = PointRecord::new(PointFormat::new(*id).unwrap());
        let view = record.view();
        assert!(!view.has_wave_packet());
        match view.try_wave_packet() {
            Err(LasPointError::MissingWavePacket) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}

macro_rules! missing_wave_packet_test {
    ($name:ident, $accessor:ident) => {
        #[test]
        #[should_panic(expected = "The point does not have a wave packet")]
        fn $name() {
            let record = PointRecord::new(PointFormat::new(3).unwrap());
            record.view().$accessor();
        }
    };
}

missing_wave_packet_test!(test_missing_descriptor_index, wave_packet_descriptor_index);
missing_wave_packet_test!(test_missing_byte_offset, byte_offset_to_waveform_data);
missing_wave_packet_test!(test_missing_packet_size, waveform_packet_size_in_bytes);
missing_wave_packet_test!(test_missing_location, return_point_waveform_location);
missing_wave_packet_test!(test_missing_xt, xt);
missing_wave_packet_test!(test_missing_yt, yt);
missing_wave_packet_test!(test_missing_zt, zt);

#[test]
fn test_wave_packet_fields() {
    for record in &[point_format_5(), point_format_10()] {
        let view = record.view();
        assert!(view.has_wave_packet());
        assert_eq!(view.wave_packet_descriptor_index(), 3);
        assert_eq!(view.byte_offset_to_waveform_data(), 1024);
        assert_eq!(view.waveform_packet_size_in_bytes(), 256);
        assert_eq!(view.return_point_waveform_location(), 0.5);
        assert_eq!(view.xt(), 0.1);
        assert_eq!(view.yt(), 0.2);
        assert_eq!(view.zt(), 0.3);
    }
}

#[test]
fn test_wave_packet_set_on_record() {
    let mut record = PointRecord::new(PointFormat::new(9).unwrap());
    assert!(record.set_wavepacket(LasWavepacket {
        descriptor_index: 255,
        offset: u64::MAX,
        size: u32::MAX,
        return_point: -0.0,
        dx: 1.0,
        dy: 2.0,
        dz: 3.0,
    }));
    let view = record.view();
    assert_eq!(view.wave_packet_descriptor_index(), 255);
    assert_eq!(view.byte_offset_to_waveform_data(), u64::MAX);
    assert_eq!(view.waveform_packet_size_in_bytes(), u32::MAX);
    assert_eq!(view.zt(), 3.0);
}

#[test]
fn test_extended_format() {
    let record = point_format_10();
    let view = record.view();

    assert!(view.is_extended());
    assert_eq!((view.x(), view.y(), view.z()), (-7, 8, 9));
    assert_eq!(view.intensity(), 40_000);
    assert_eq!(view.return_number(), 2);
    assert_eq!(view.number_of_returns(), 3);
    assert_eq!(view.scan_direction_flag(), 0);
    assert_eq!(view.edge_of_flight_line(), 1);
    assert_eq!(view.scanner_channel(), 3);
    assert!(view.is_synthetic());
    assert!(!view.is_key_point());
    assert!(view.is_withheld());
    assert!(!view.is_overlap());
    assert_eq!(view.classification(), 64);
    assert_eq!(view.user_data(), 17);
    assert_eq!(view.scan_angle_rank(), 15);
    assert_eq!(view.point_source_id(), 60_000);
    assert_eq!(view.gps_time(), -1.5);
    assert_eq!((view.red(), view.green(), view.blue()), (10, 20, 30));
    assert_eq!(view.nir(), 65_000);
}

#[test]
fn test_accessors_are_idempotent() {
    let record = point_format_10();
    let view = record.view();
    let copy = view;
    for _ in 0..3 {
        assert_eq!(view.x(), copy.x());
        assert_eq!(view.return_number(), copy.return_number());
        assert_eq!(view.is_key_point(), copy.is_key_point());
        assert_eq!(view.gps_time().to_bits(), copy.gps_time().to_bits());
        assert_eq!(view.xt().to_bits(), copy.xt().to_bits());
    }
}

#[test]
fn test_views_can_be_shared_between_threads() {
    let record = point_format_5();
    let view = record.view();
    let x = std::thread::scope(|s| s.spawn(|| view.x()).join().unwrap());
    assert_eq!(x, i32::MIN);
}
