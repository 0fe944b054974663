use std::io::Cursor;

use laspoint::las::{decode_buffer, PointFormat, PointRecord, PointRecordReader, RGB};
use laspoint::LasPointError;

/// Points of the given format with distinct x, gps time and colors.
pub fn make_points_data(format: PointFormat, num_extra_bytes: usize, n: usize) -> Vec<u8> {
    let mut data = Vec::<u8>::new();
    for i in 0..n {
        let mut point = PointRecord::new(format);
        if let Some(p) = point.legacy_mut() {
            p.x = i as i32;
            p.set_bit_fields((i % 8) as u8, 7, i % 2 == 0, false);
        }
        if let Some(p) = point.extended_mut() {
            p.x = i as i32;
            p.set_return_number((i % 16) as u8);
            p.set_number_of_returns(15);
        }
        point.set_gps_time(i as f64 * 0.5);
        point.set_rgb(RGB::new(i as u16, 2 * i as u16, 3 * i as u16));
        point.set_extra_bytes(vec![i as u8; num_extra_bytes]);
        point.write_to(&mut data).unwrap();
    }
    data
}

#[test]
fn test_read_all_formats() {
    for id in 0..=PointFormat::MAX_ID {
        let format = PointFormat::new(id).unwrap();
        let point_size = format.record_len() + 4;
        let data = make_points_data(format, 4, 50);
        assert_eq!(data.len(), 50 * point_size);

        let reader = PointRecordReader::new(Cursor::new(data), format, point_size).unwrap();
        let points = reader.collect::<laspoint::Result<Vec<_>>>().unwrap();
        assert_eq!(points.len(), 50);
        for (i, point) in points.iter().enumerate() {
            let view = point.view();
            assert_eq!(view.format(), format);
            assert_eq!(view.x(), i as i32);
            assert!(view.return_number() <= 7);
            assert_eq!(view.extra_bytes(), &[i as u8; 4]);
            if format.has_gps_time() {
                assert_eq!(view.gps_time(), i as f64 * 0.5);
            } else {
                assert_eq!(view.gps_time(), 0.0);
            }
            if format.has_rgb() {
                assert_eq!(view.green(), 2 * i as u16);
            }
            assert_eq!(view.has_wave_packet(), format.has_wavepacket());
        }
    }
}

#[test]
fn test_reader_and_decode_buffer_agree() {
    let format = PointFormat::new(7).unwrap();
    let data = make_points_data(format, 0, 100);
    let from_buffer = decode_buffer(format, format.record_len(), &data).unwrap();
    let from_reader = PointRecordReader::new(Cursor::new(&data), format, format.record_len())
        .unwrap()
        .collect::<laspoint::Result<Vec<_>>>()
        .unwrap();
    assert_eq!(from_buffer, from_reader);
}

#[test]
fn test_reader_rejects_small_point_size() {
    let format = PointFormat::new(8).unwrap();
    match PointRecordReader::new(Cursor::new(vec![]), format, 30) {
        Err(LasPointError::PointSizeTooSmall {
            point_size: 30,
            record_len: 38,
        }) => {}
        Err(e) => panic!("unexpected error {}", e),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn test_empty_source() {
    let format = PointFormat::new(0).unwrap();
    let mut reader = PointRecordReader::new(Cursor::new(vec![]), format, 20).unwrap();
    assert!(reader.read_next().is_none());
    assert_eq!(reader.num_read(), 0);
    assert!(decode_buffer(format, 20, &[]).unwrap().is_empty());
}
