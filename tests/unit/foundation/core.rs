use super::*;

#[test]
fn hex_parses_rgb_and_rgba() {
    assert_eq!(
        Rgba8::from_hex("#fdbcb4").unwrap(),
        Rgba8::rgb(0xfd, 0xbc, 0xb4)
    );
    assert_eq!(
        Rgba8::from_hex("4A90E2").unwrap(),
        Rgba8::rgb(0x4a, 0x90, 0xe2)
    );
    assert_eq!(
        Rgba8::from_hex("#11223344").unwrap(),
        Rgba8::rgba(0x11, 0x22, 0x33, 0x44)
    );
}

#[test]
fn hex_rejects_malformed_input() {
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("zzzzzz").is_err());
    assert!(Rgba8::from_hex("").is_err());
    assert!(Rgba8::from_hex("#fdbcb4ff00").is_err());
}

#[test]
fn hex_formatting_omits_opaque_alpha() {
    assert_eq!(Rgba8::rgb(0x8b, 0x45, 0x13).to_hex(), "#8b4513");
    assert_eq!(Rgba8::rgba(0x8b, 0x45, 0x13, 0x80).to_hex(), "#8b451380");
}

#[test]
fn with_alpha_preserves_channels() {
    let c = Rgba8::rgb(1, 2, 3).with_alpha(9);
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 9));
}

#[test]
fn png_export_writes_a_file() {
    let frame = FrameRgba {
        width: 2,
        height: 2,
        data: vec![255; 16],
    };
    let path = std::env::temp_dir().join("vizard_core_png_test.png");
    frame.write_png(&path).unwrap();
    let len = std::fs::metadata(&path).unwrap().len();
    let _ = std::fs::remove_file(&path);
    assert!(len > 0);
}

#[test]
fn png_export_surfaces_io_failure() {
    let frame = FrameRgba {
        width: 1,
        height: 1,
        data: vec![0; 4],
    };
    assert!(frame.write_png("/nonexistent-dir/frame.png").is_err());
}
