use assert_cmd::prelude::*;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_stripes(path: &Path, width: u32, height: u32) {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        let v = if (x / 3 + y) % 2 == 0 { 30 } else { 220 };
        Rgba([v, v, 255 - v, 255])
    });
    image.save(path).unwrap();
}

#[test]
fn carves_a_png() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_stripes(&input, 24, 10);

    Command::cargo_bin("laplaceseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--lines", "7"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgba();
    assert_eq!(carved.dimensions(), (17, 10));
}

#[test]
fn dumps_the_energy_map() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let energy = dir.path().join("energy.png");
    write_stripes(&input, 12, 6);

    Command::cargo_bin("laplaceseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["-n", "2", "--energy-model", "magnitude", "--dump-energy"])
        .arg(&energy)
        .assert()
        .success();

    let map = image::open(&energy).unwrap().to_luma();
    assert_eq!(map.dimensions(), (12, 6));
    assert_eq!(image::open(&output).unwrap().to_rgba().dimensions(), (10, 6));
}

#[test]
fn refuses_to_carve_the_whole_width() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_stripes(&input, 5, 5);

    Command::cargo_bin("laplaceseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--lines", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot remove 5 seams"));
    assert!(!output.exists());
}

#[test]
fn zero_deadline_writes_the_input_unchanged() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_stripes(&input, 9, 4);

    Command::cargo_bin("laplaceseam")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--lines", "4", "--deadline", "0"])
        .assert()
        .success();

    let before = image::open(&input).unwrap().to_rgba();
    let after = image::open(&output).unwrap().to_rgba();
    assert_eq!(before.into_raw(), after.into_raw());
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("laplaceseam")
        .unwrap()
        .arg(dir.path().join("nope.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("laplaceseam:"));
}

#[test]
fn negative_deadline_is_refused() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_stripes(&input, 6, 3);

    for bad in &["-1", "NaN", "inf"] {
        Command::cargo_bin("laplaceseam")
            .unwrap()
            .arg(&input)
            .arg(&output)
            .args(&["--lines", "1"])
            .arg(format!("--deadline={}", bad))
            .assert()
            .failure()
            .stderr(predicate::str::contains("--deadline"));
        assert!(!output.exists());
    }
}
