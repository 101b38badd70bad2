use super::*;

#[test]
fn new_checks_buffer_length() {
    assert!(FrameRGBA::new(2, 2, vec![0; 16]).is_ok());
    let err = FrameRGBA::new(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, CatvidError::Render(_)));
}

#[test]
fn filled_and_pixel_lookup() {
    let f = FrameRGBA::filled(3, 2, [1, 2, 3, 255]);
    assert_eq!(f.data.len(), 3 * 2 * 4);
    assert_eq!(f.pixel(2, 1), Some([1, 2, 3, 255]));
    assert_eq!(f.pixel(3, 0), None);
    assert_eq!(f.pixel(0, 2), None);
}

#[test]
fn pixel_on_short_buffer_is_none() {
    let f = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![9; 12],
    };
    assert_eq!(f.pixel(0, 1), Some([9, 9, 9, 9]));
    assert_eq!(f.pixel(1, 1), None);
}
