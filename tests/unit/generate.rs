use super::*;
use crate::foundation::core::Canvas;
use crate::render::cpu::CpuBackend;

fn small_cfg(frame_count: u64) -> AnimatorConfig {
    AnimatorConfig {
        canvas: Canvas {
            width: 32,
            height: 24,
        },
        frame_count,
        ..AnimatorConfig::default()
    }
}

struct FailAt {
    inner: CpuBackend,
    fail_on: u64,
    calls: u64,
}

impl RenderBackend for FailAt {
    fn render_scene(&mut self, scene: &FrameScene) -> CatvidResult<FrameRGBA> {
        self.calls += 1;
        if scene.index.0 == self.fail_on {
            return Err(CatvidError::render("simulated draw failure"));
        }
        self.inner.render_scene(scene)
    }
}

#[test]
fn generates_frames_in_index_order() {
    let cfg = small_cfg(6);
    let mut backend = CpuBackend::new();
    let frames = generate_frames(&cfg, &mut backend, 1).unwrap();
    assert_eq!(frames.len(), 6);
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.index, FrameIndex(i as u64));
        let rgba = f.decode().unwrap();
        assert_eq!((rgba.width, rgba.height), (32, 24));
    }
}

#[test]
fn failure_collapses_to_generation_failed() {
    let cfg = small_cfg(5);
    let mut backend = FailAt {
        inner: CpuBackend::new(),
        fail_on: 2,
        calls: 0,
    };
    let err = generate_frames(&cfg, &mut backend, 1).unwrap_err();
    assert!(matches!(err, CatvidError::GenerationFailed));
    assert_eq!(backend.calls, 3, "generation stops at the first failure");
}

#[test]
fn invalid_config_fails_generation() {
    let cfg = small_cfg(0);
    let mut backend = CpuBackend::new();
    assert!(matches!(
        generate_frames(&cfg, &mut backend, 1),
        Err(CatvidError::GenerationFailed)
    ));
}

#[test]
fn single_frame_matches_the_full_run() {
    let cfg = small_cfg(4);
    let mut backend = CpuBackend::new();
    let frames = generate_frames(&cfg, &mut backend, 42).unwrap();
    let single = render_single_frame(&cfg, &mut backend, FrameIndex(3), 42).unwrap();
    assert_eq!(frames[3].decode().unwrap(), single);
}

#[test]
fn single_frame_out_of_range_is_validation() {
    let cfg = small_cfg(4);
    let mut backend = CpuBackend::new();
    let err = render_single_frame(&cfg, &mut backend, FrameIndex(4), 0).unwrap_err();
    assert!(matches!(err, CatvidError::Validation(_)));
}
