use glam::{Mat4, Vec3};

/// Camera movement and control abstraction
pub trait CameraController {
    /// Advance the smoothed pose by one frame
    fn tick(&mut self);

    /// Combined view-projection matrix for the given aspect ratio
    fn view_projection(&self, aspect: f32) -> Mat4;

    /// Camera position in world space
    fn eye(&self) -> Vec3;
}
