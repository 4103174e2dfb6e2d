use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::{PI, TAU};

use crate::config::RigConfig;
use crate::traits::CameraController;

pub const CAMERA_FOV: f32 = 0.785398;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// One full camera pose. `azimuth` is in turns, `elevation` in half-turns;
/// both are converted to radians only when the view transform is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub azimuth: f32,
    pub elevation: f32,
    pub zoom: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl CameraState {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            azimuth: config.azimuth,
            elevation: config.elevation,
            zoom: config.zoom,
            offset_x: config.offset_x,
            offset_y: config.offset_y,
        }
    }

    /// Largest absolute per-field difference to another state.
    pub fn distance(&self, other: &CameraState) -> f32 {
        (self.azimuth - other.azimuth)
            .abs()
            .max((self.elevation - other.elevation).abs())
            .max((self.zoom - other.zoom).abs())
            .max((self.offset_x - other.offset_x).abs())
            .max((self.offset_y - other.offset_y).abs())
    }
}

/// Answer from a drag handler: which translation axes the gesture recognizer
/// must zero before the next event. Set when a drag runs into a clamp, so the
/// finger reacts immediately on reversal instead of unwinding a dead zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragRebase {
    pub reset_x: bool,
    pub reset_y: bool,
}

impl DragRebase {
    pub const NONE: DragRebase = DragRebase {
        reset_x: false,
        reset_y: false,
    };
    pub const BOTH: DragRebase = DragRebase {
        reset_x: true,
        reset_y: true,
    };
}

/// Selfie-stick camera rig.
///
/// Gestures write the `target` state through clamped mappings; `tick()` moves
/// the `rendered` state a fixed fraction of the remaining distance toward it
/// every frame. `committed` is the baseline a cumulative drag translation is
/// added to; it advances when a gesture ends, a finger count changes, or a
/// clamp forces a rebase.
pub struct CameraRig {
    config: RigConfig,
    initial: CameraState,
    committed: CameraState,
    target: CameraState,
    rendered: CameraState,
}

impl CameraRig {
    pub fn new(config: RigConfig) -> Self {
        let state = CameraState::from_config(&config);
        Self {
            config,
            initial: state,
            committed: state,
            target: state,
            rendered: state,
        }
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn target(&self) -> &CameraState {
        &self.target
    }

    pub fn rendered(&self) -> &CameraState {
        &self.rendered
    }

    /// One-finger drag: cumulative translation `(tx, ty)` in pixels since the
    /// gesture started, normalized by the view size and added to the committed
    /// angles. Any other touch count ends the drag and commits the angles.
    pub fn apply_orbit(
        &mut self,
        tx: f32,
        ty: f32,
        view_w: f32,
        view_h: f32,
        touches: u32,
    ) -> DragRebase {
        if touches != 1 {
            self.committed.azimuth = self.target.azimuth;
            self.committed.elevation = self.target.elevation;
            return DragRebase::BOTH;
        }

        self.target.azimuth = tx / view_w + self.committed.azimuth;

        let mut rebase = DragRebase::NONE;
        let elevation = ty / view_h + self.committed.elevation;
        self.target.elevation = elevation.clamp(self.config.elevation_min, self.config.elevation_max);
        if elevation != self.target.elevation {
            self.committed.elevation = self.target.elevation;
            rebase.reset_y = true;
        }
        rebase
    }

    /// Two-finger pinch: `velocity` is the recognizer's scale velocity.
    /// Non-finite velocities show up when pinch and pan fire in the same
    /// event burst; they are treated as zero.
    pub fn apply_pinch(&mut self, velocity: f32, touches: u32) {
        if touches != 2 {
            return;
        }
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self.target.zoom = (self.target.zoom - velocity / self.config.pinch_divisor)
            .clamp(self.config.zoom_min, self.config.zoom_max);
    }

    /// Two-finger drag: cumulative translation since the gesture started,
    /// scaled by the pan divisor. Axes clamp and rebase independently.
    pub fn apply_pan(&mut self, tx: f32, ty: f32, touches: u32) -> DragRebase {
        if touches != 2 {
            self.committed.offset_x = self.target.offset_x;
            self.committed.offset_y = self.target.offset_y;
            return DragRebase::BOTH;
        }

        let mut rebase = DragRebase::NONE;

        let x = -tx / self.config.pan_divisor + self.committed.offset_x;
        self.target.offset_x = x.clamp(self.config.offset_x_min, self.config.offset_x_max);
        if x != self.target.offset_x {
            self.committed.offset_x = self.target.offset_x;
            rebase.reset_x = true;
        }

        let y = ty / self.config.pan_divisor + self.committed.offset_y;
        self.target.offset_y = y.clamp(self.config.offset_y_min, self.config.offset_y_max);
        if y != self.target.offset_y {
            self.committed.offset_y = self.target.offset_y;
            rebase.reset_y = true;
        }
        rebase
    }

    /// Double-tap: return to the construction-time pose.
    pub fn reset(&mut self) {
        self.target = self.initial;
        self.committed = self.initial;
    }

    /// Tap-to-focus: center on a world point, move in to the focus zoom and
    /// straighten the orbit angles.
    pub fn snap_to(&mut self, world_x: f32, world_y: f32) {
        self.target.offset_x = world_x.clamp(self.config.offset_x_min, self.config.offset_x_max);
        self.target.offset_y = world_y.clamp(self.config.offset_y_min, self.config.offset_y_max);
        self.target.zoom = self.config.focus_zoom;
        self.target.azimuth = 0.0;
        self.target.elevation = 0.0;
        self.committed = self.target;
    }

    /// Per-frame smoothing step: exponential approach toward the target.
    pub fn tick(&mut self) {
        let s = self.config.smoothing;
        self.rendered.azimuth += (self.target.azimuth - self.rendered.azimuth) * s;
        self.rendered.elevation += (self.target.elevation - self.rendered.elevation) * s;
        self.rendered.zoom += (self.target.zoom - self.rendered.zoom) * s;
        self.rendered.offset_x += (self.target.offset_x - self.rendered.offset_x) * s;
        self.rendered.offset_y += (self.target.offset_y - self.rendered.offset_y) * s;
    }

    fn orbit_rotation(state: &CameraState) -> Quat {
        let yaw = -TAU * state.azimuth;
        let pitch = -PI * state.elevation;
        Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
    }

    /// World transform of the camera: orbit rotation applied to the camera
    /// held at the stick offset.
    fn camera_transform(state: &CameraState) -> Mat4 {
        Mat4::from_quat(Self::orbit_rotation(state))
            * Mat4::from_translation(Vec3::new(state.offset_x, state.offset_y, state.zoom))
    }

    pub fn view_matrix(&self) -> Mat4 {
        Self::camera_transform(&self.rendered).inverse()
    }

    pub fn eye_position(&self) -> Vec3 {
        Self::camera_transform(&self.rendered).transform_point3(Vec3::ZERO)
    }

    pub fn projection(aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOV, aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        Self::projection(aspect) * self.view_matrix()
    }
}

impl CameraController for CameraRig {
    fn tick(&mut self) {
        CameraRig::tick(self)
    }

    fn view_projection(&self, aspect: f32) -> Mat4 {
        CameraRig::view_projection(self, aspect)
    }

    fn eye(&self) -> Vec3 {
        self.eye_position()
    }
}
