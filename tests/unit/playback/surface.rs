use super::*;

#[test]
fn new_surface_is_idle_and_blank() {
    let s = PixelSurface::new(Canvas {
        width: 4,
        height: 2,
    });
    assert!(!s.is_playing());
    assert_eq!(s.draw_count(), 0);
    assert_eq!(s.last_drawn(), None);
    assert!(s.pixels().data.iter().all(|&b| b == 0));
}

#[test]
fn draw_replaces_pixels_and_records_index() {
    let mut s = PixelSurface::new(Canvas {
        width: 2,
        height: 2,
    });
    s.draw_frame(FrameIndex(7), &FrameRGBA::filled(2, 2, [9, 9, 9, 255]));
    assert_eq!(s.pixels().pixel(1, 1), Some([9, 9, 9, 255]));
    assert_eq!(s.draw_count(), 1);
    assert_eq!(s.last_drawn(), Some(FrameIndex(7)));
}

#[test]
fn oversized_and_undersized_frames_are_clipped() {
    let mut s = PixelSurface::new(Canvas {
        width: 3,
        height: 3,
    });
    s.draw_frame(FrameIndex(0), &FrameRGBA::filled(5, 5, [1, 1, 1, 255]));
    assert_eq!(s.pixels().pixel(2, 2), Some([1, 1, 1, 255]));

    s.draw_frame(FrameIndex(1), &FrameRGBA::filled(1, 1, [2, 2, 2, 255]));
    assert_eq!(s.pixels().pixel(0, 0), Some([2, 2, 2, 255]));
    assert_eq!(s.pixels().pixel(1, 0), Some([1, 1, 1, 255]));
}

#[test]
fn playing_flag_toggles() {
    let mut s = PixelSurface::new(Canvas {
        width: 1,
        height: 1,
    });
    s.set_playing(true);
    assert!(s.is_playing());
    s.set_playing(false);
    assert!(!s.is_playing());
}
