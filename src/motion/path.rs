use crate::foundation::core::{FrameIndex, Point};

/// Sinusoidal bounce: horizontal sway, rectified vertical hop and a rocking rotation.
///
/// For frame `i`:
///
/// - `x = center_x + amp_x * sin(i / period_x)`
/// - `y = base_y + amp_y * |sin(i / period_y)|`
/// - `rotation = rot_amp * sin(i / rot_period)` (radians)
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BouncePath {
    /// Horizontal center of the sway.
    pub center_x: f64,
    /// Horizontal amplitude.
    pub amp_x: f64,
    /// Frames per radian of horizontal phase.
    pub period_x: f64,
    /// Top of the bounce.
    pub base_y: f64,
    /// Bounce height.
    pub amp_y: f64,
    /// Frames per radian of vertical phase.
    pub period_y: f64,
    /// Peak rotation in radians.
    pub rot_amp: f64,
    /// Frames per radian of rotation phase.
    pub rot_period: f64,
}

impl Default for BouncePath {
    fn default() -> Self {
        Self {
            center_x: 320.0,
            amp_x: 200.0,
            period_x: 10.0,
            base_y: 100.0,
            amp_y: 150.0,
            period_y: 8.0,
            rot_amp: 0.3,
            rot_period: 5.0,
        }
    }
}

/// Where the cat sits on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Glyph center in surface pixels.
    pub center: Point,
    /// Clockwise rotation in radians.
    pub rotation: f64,
}

impl BouncePath {
    /// Sample the pose for `frame`. Depends only on the index.
    pub fn pose_at(&self, frame: FrameIndex) -> Pose {
        let i = frame.0 as f64;
        let x = self.center_x + self.amp_x * (i / self.period_x).sin();
        let y = self.base_y + self.amp_y * (i / self.period_y).sin().abs();
        let rotation = self.rot_amp * (i / self.rot_period).sin();
        Pose {
            center: Point::new(x, y),
            rotation,
        }
    }

    /// Inclusive `(min, max)` horizontal extent of the sway.
    pub fn x_bounds(&self) -> (f64, f64) {
        let a = self.amp_x.abs();
        (self.center_x - a, self.center_x + a)
    }

    /// Inclusive `(min, max)` vertical extent of the bounce.
    pub fn y_bounds(&self) -> (f64, f64) {
        let lo = self.base_y.min(self.base_y + self.amp_y);
        let hi = self.base_y.max(self.base_y + self.amp_y);
        (lo, hi)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/path.rs"]
mod tests;
