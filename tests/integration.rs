//! Integration tests for the vision crate.
//!
//! These tests write a small CIFAR-100 release to disk and exercise the
//! decoder, label catalogs, matrix arithmetic and classifier together.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vision::prelude::*;

const RECORD_SIZE: usize = 3074;

/// Record `n`: coarse `n % 20`, fine `(7 * n) % 100`, plane `c` byte `i` is
/// `(i + c + n) % 256`.
fn record(n: usize) -> Vec<u8> {
    let mut bytes = vec![(n % 20) as u8, ((7 * n) % 100) as u8];
    for plane in 0..3 {
        bytes.extend((0..1024).map(|i| ((i + plane + n) % 256) as u8));
    }
    bytes
}

fn write_release(dir: &Path, train: usize, test: usize) {
    let coarse: Vec<String> = (0..20).map(|i| format!("superclass_{i}")).collect();
    let fine: Vec<String> = (0..100).map(|i| format!("class_{i}")).collect();
    fs::write(dir.join("coarse_label_names.txt"), coarse.join("\n") + "\n\n").expect("coarse");
    fs::write(dir.join("fine_label_names.txt"), fine.join("\n")).expect("fine");

    let train_bytes: Vec<u8> = (0..train).flat_map(record).collect();
    let test_bytes: Vec<u8> = (0..test).flat_map(record).collect();
    fs::write(dir.join("train.bin"), train_bytes).expect("train");
    fs::write(dir.join("test.bin"), test_bytes).expect("test");
}

#[test]
fn test_release_workflow() {
    let dir = TempDir::new().expect("tempdir");
    write_release(dir.path(), 5, 3);

    let cifar = Cifar::open(dir.path(), CifarConfig::default()).expect("open test split");
    assert_eq!(cifar.image_count(), 3);
    assert_eq!(cifar.image_dim(), 3072);
    assert_eq!(cifar.label_count(), 20);
    assert_eq!(cifar.fine_labels().len(), 100);
    assert_eq!(cifar.decoder().file_size(), 3 * RECORD_SIZE);

    assert_eq!(cifar.label_names(2).expect("record 2"), ("superclass_2", "class_14"));

    let scores: Matrix<f32> = cifar.classify(1).expect("record 1");
    assert_eq!(scores, Matrix::zeros(20, 1));
}

#[test]
fn test_train_split_with_fine_labels() {
    let dir = TempDir::new().expect("tempdir");
    write_release(dir.path(), 5, 3);

    let config = CifarConfig::default()
        .with_split(Split::Train)
        .with_label_kind(LabelKind::Fine);
    let cifar = Cifar::open(dir.path(), config).expect("open train split");
    assert_eq!(cifar.image_count(), 5);
    assert_eq!(cifar.label_count(), 100);
    assert_eq!(cifar.classify::<f64>(4).expect("record 4").shape(), (100, 1));
    assert!(cifar.classify::<f64>(5).is_err());
}

#[test]
fn test_decoder_views_agree() {
    let dir = TempDir::new().expect("tempdir");
    write_release(dir.path(), 0, 2);
    let decoder = RecordDecoder::open(dir.path().join("test.bin")).expect("open");

    let planar = decoder.planar(1).expect("planar");
    let bgr = decoder.interleaved(1).expect("interleaved");
    let planar = planar.as_slice();
    let bgr = bgr.as_slice();

    for pixel in 0..1024 {
        assert_eq!(bgr[3 * pixel], planar[2048 + pixel], "blue at {pixel}");
        assert_eq!(bgr[3 * pixel + 1], planar[1024 + pixel], "green at {pixel}");
        assert_eq!(bgr[3 * pixel + 2], planar[pixel], "red at {pixel}");
    }
    assert_eq!(decoder.channel(1, Channel::Green).expect("green").as_slice()[0], 2);
}

#[test]
fn test_manual_weights_score_an_image() {
    let dir = TempDir::new().expect("tempdir");
    write_release(dir.path(), 0, 1);
    let cifar = Cifar::open(dir.path(), CifarConfig::default()).expect("open");

    // Label 0 sums the red plane, label 1 reads the first blue byte.
    let mut weights = Matrix::<f64>::zeros(2, 3072);
    for i in 0..1024 {
        weights.set(0, i, 1.0).expect("in bounds");
    }
    weights.set(1, 2048, 1.0).expect("in bounds");

    let mut model = make_classifier::<f64>(2, 3072, ClassifierKind::Linear);
    model.set_weights(weights).expect("2x3072");
    model
        .set_bias(Matrix::column_vector(vec![0.0, 0.5]))
        .expect("2x1");

    let input: Matrix<f64> = cifar.decoder().planar(0).expect("record 0").cast();
    let scores = model.score(&input).expect("3072 features");
    // Red bytes are i % 256 for i in 0..1024: four runs of 0..=255.
    assert_eq!(scores, Matrix::column_vector(vec![4.0 * 32640.0, 2.5]));
}

#[test]
fn test_decoded_bytes_combine_with_floats() {
    let dir = TempDir::new().expect("tempdir");
    write_release(dir.path(), 0, 1);
    let decoder = RecordDecoder::open(dir.path().join("test.bin")).expect("open");

    let red = decoder.channel(0, Channel::Red).expect("red");
    let offset = Matrix::<f32>::filled(1024, 1, 0.5);

    let shifted = offset.add(&red).expect("same shape");
    assert_eq!(shifted.get(3, 0).expect("row 3"), 3.5);

    // Left operand decides the result type: bytes stay bytes.
    let truncated = red.add(&offset).expect("same shape");
    assert_eq!(truncated.get(3, 0).expect("row 3"), 3u8);
}

#[test]
fn test_corrupt_release_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    write_release(dir.path(), 0, 1);
    let mut bytes = record(0);
    bytes.truncate(RECORD_SIZE - 1);
    fs::write(dir.path().join("test.bin"), bytes).expect("truncate");

    let err = Cifar::open(dir.path(), CifarConfig::default()).expect_err("3073 bytes");
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_missing_release() {
    let err = Cifar::open("/nonexistent/cifar-100-binary", CifarConfig::default())
        .expect_err("missing directory");
    assert_eq!(err.kind(), ErrorKind::Io);
}
