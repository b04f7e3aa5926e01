pub(crate) use super::*;
use crate::error::ErrorKind;
use std::io::Write;
use tempfile::NamedTempFile;

/// One CIFAR-100 record: labels 5/23, red = i, green = i + 1, blue = i + 2
/// (bytes wrap at 256).
fn scenario_record() -> Vec<u8> {
    let mut record = vec![5u8, 23];
    for offset in 0..3u32 {
        record.extend((0..1024u32).map(|i| ((i + offset) % 256) as u8));
    }
    record
}

fn tiny_layout() -> RecordLayout {
    RecordLayout::new(3, 2, 2)
}

/// Two 2x2 records with distinct bytes per plane.
fn tiny_bytes() -> Vec<u8> {
    vec![
        1, 2, // labels
        10, 11, 12, 13, // red
        20, 21, 22, 23, // green
        30, 31, 32, 33, // blue
        3, 4, //
        40, 41, 42, 43, //
        50, 51, 52, 53, //
        60, 61, 62, 63,
    ]
}

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().expect("temp");
    tmp.write_all(bytes).expect("write");
    tmp.flush().expect("flush");
    tmp
}

#[test]
fn test_scenario_record() {
    let tmp = write_temp(&scenario_record());
    let decoder = RecordDecoder::open(tmp.path()).expect("valid file");

    assert_eq!(decoder.record_count(), 1);
    assert_eq!(decoder.file_size(), 3074);
    assert_eq!(decoder.labels(0).expect("record 0"), (5, 23));

    let red = decoder.channel(0, Channel::Red).expect("red");
    let green = decoder.channel(0, Channel::Green).expect("green");
    let blue = decoder.channel(0, Channel::Blue).expect("blue");
    assert_eq!(red.shape(), (1024, 1));
    assert_eq!(red.as_slice()[0], 0);
    assert_eq!(green.as_slice()[0], 1);
    assert_eq!(blue.as_slice()[0], 2);

    let bgr = decoder.interleaved(0).expect("interleaved");
    assert_eq!(bgr.shape(), (3072, 1));
    assert_eq!(&bgr.as_slice()[..3], &[2, 1, 0]);
    assert_eq!(&bgr.as_slice()[3..6], &[3, 2, 1]);
}

#[test]
fn test_planar_keeps_disk_order() {
    let decoder = RecordDecoder::from_bytes(tiny_bytes(), tiny_layout()).expect("valid");
    let planar = decoder.planar(1).expect("record 1");
    assert_eq!(planar.shape(), (12, 1));
    assert_eq!(
        planar.as_slice(),
        &[40, 41, 42, 43, 50, 51, 52, 53, 60, 61, 62, 63]
    );
}

#[test]
fn test_interleaved_reverses_planes() {
    let decoder = RecordDecoder::from_bytes(tiny_bytes(), tiny_layout()).expect("valid");
    let bgr = decoder.interleaved(0).expect("record 0");
    assert_eq!(
        bgr.as_slice(),
        &[30, 20, 10, 31, 21, 11, 32, 22, 12, 33, 23, 13]
    );
}

#[test]
fn test_channels_concatenate_to_planar() {
    let decoder = RecordDecoder::from_bytes(tiny_bytes(), tiny_layout()).expect("valid");
    for index in 0..decoder.record_count() {
        let mut joined = Vec::new();
        for channel in Channel::ALL {
            joined.extend_from_slice(decoder.channel(index, channel).expect("plane").as_slice());
        }
        assert_eq!(joined, decoder.planar(index).expect("planar").into_vec());
    }
}

#[test]
fn test_labels_per_record() {
    let decoder = RecordDecoder::from_bytes(tiny_bytes(), tiny_layout()).expect("valid");
    assert_eq!(decoder.labels(0).expect("record 0"), (1, 2));
    assert_eq!(decoder.labels(1).expect("record 1"), (3, 4));
}

#[test]
fn test_metadata() {
    let decoder = RecordDecoder::from_bytes(tiny_bytes(), tiny_layout()).expect("valid");
    assert_eq!(decoder.record_count(), 2);
    assert_eq!(decoder.file_size(), 28);
    let shape = decoder.image_shape();
    assert_eq!((shape.channels, shape.width, shape.height), (3, 2, 2));
    assert_eq!(decoder.layout(), tiny_layout());
}

#[test]
fn test_index_out_of_bounds() {
    let decoder = RecordDecoder::from_bytes(tiny_bytes(), tiny_layout()).expect("valid");
    assert_eq!(decoder.labels(2).expect_err("no record 2").kind(), ErrorKind::Index);
    assert_eq!(decoder.planar(2).expect_err("no record 2").kind(), ErrorKind::Index);
    assert_eq!(decoder.interleaved(9).expect_err("no record 9").kind(), ErrorKind::Index);
    assert_eq!(
        decoder.channel(2, Channel::Green).expect_err("no record 2").kind(),
        ErrorKind::Index
    );
}

#[test]
fn test_size_not_multiple_of_record() {
    let mut bytes = scenario_record();
    bytes.push(0);
    let tmp = write_temp(&bytes);
    let err = RecordDecoder::open(tmp.path()).expect_err("3075 bytes");
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("3074"));

    let err = RecordDecoder::from_bytes(vec![0u8; 27], tiny_layout()).expect_err("27 bytes");
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_empty_file_has_no_records() {
    let tmp = write_temp(&[]);
    let decoder = RecordDecoder::open(tmp.path()).expect("empty file is a valid multiple");
    assert_eq!(decoder.record_count(), 0);
    assert!(decoder.labels(0).is_err());
}

#[test]
fn test_missing_file() {
    let err = RecordDecoder::open("/nonexistent/test.bin").expect_err("missing");
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_empty_layout_rejected() {
    let err = RecordDecoder::from_bytes(vec![0u8; 4], RecordLayout::new(0, 2, 2))
        .expect_err("zero channels");
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_single_plane_layout() {
    let layout = RecordLayout::new(1, 2, 1);
    let decoder = RecordDecoder::from_bytes(vec![7, 8, 100, 101], layout).expect("valid");
    assert_eq!(decoder.interleaved(0).expect("record 0").as_slice(), &[100, 101]);
    assert_eq!(decoder.channel(0, Channel::Red).expect("red").as_slice(), &[100, 101]);
    let err = decoder.channel(0, Channel::Blue).expect_err("only one plane");
    assert_eq!(err.kind(), ErrorKind::Index);
}

#[test]
fn test_results_do_not_alias_buffer() {
    let decoder = RecordDecoder::from_bytes(tiny_bytes(), tiny_layout()).expect("valid");
    let mut first = decoder.planar(0).expect("record 0");
    first.set(0, 0, 255).expect("in bounds");
    assert_eq!(decoder.planar(0).expect("record 0").as_slice()[0], 10);
}

#[cfg(target_os = "linux")]
#[test]
fn test_short_read_returns_no_decoder() {
    // sysfs reports a page-sized length but returns only the attribute text.
    let path = std::path::Path::new("/sys/kernel/mm/transparent_hugepage/enabled");
    if !path.exists() {
        return;
    }
    let err = RecordDecoder::open_with_layout(path, RecordLayout::new(1, 2, 1))
        .expect_err("fewer bytes than reported");
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, VisionError::ShortRead { .. }));
}
