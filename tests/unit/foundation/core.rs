use super::*;

#[test]
fn next_wrapping_cycles_at_len() {
    assert_eq!(FrameIndex(0).next_wrapping(60), FrameIndex(1));
    assert_eq!(FrameIndex(59).next_wrapping(60), FrameIndex(0));
    assert_eq!(FrameIndex(3).next_wrapping(0), FrameIndex(0));
}

#[test]
fn canvas_validate_rejects_empty_and_oversized() {
    assert!(Canvas { width: 640, height: 480 }.validate().is_ok());
    assert!(Canvas { width: 0, height: 480 }.validate().is_err());
    assert!(
        Canvas {
            width: 70_000,
            height: 1
        }
        .validate()
        .is_err()
    );
}

#[test]
fn canvas_center_and_byte_len() {
    let c = Canvas {
        width: 640,
        height: 480,
    };
    assert_eq!(c.center(), Point::new(320.0, 240.0));
    assert_eq!(c.byte_len(), 640 * 480 * 4);
}

#[test]
fn hex_parses_background_color() {
    let c = Rgba8::from_hex("#fef3c7").unwrap();
    assert_eq!(c, Rgba8::opaque(0xfe, 0xf3, 0xc7));
    let c = Rgba8::from_hex("FF000080").unwrap();
    assert_eq!(c.a, 0x80);
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn premul_of_opaque_is_identity() {
    let c = Rgba8::opaque(10, 20, 30);
    assert_eq!(c.to_premul_array(), [10, 20, 30, 255]);
    let half = Rgba8 {
        r: 255,
        g: 0,
        b: 0,
        a: 128,
    };
    assert_eq!(half.to_premul_array(), [128, 0, 0, 128]);
}
