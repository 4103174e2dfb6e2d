use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::renderer::MeshRenderer;
use crate::scene::SceneGraph;
use crate::traits::CameraController;

/// Wrapper around winit Window with an imperative draw API
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Draw a frame with the given camera, scene and overlay text
    pub fn draw(
        &self,
        renderer: &mut MeshRenderer,
        camera: &dyn CameraController,
        scene: &SceneGraph,
        overlay: Option<&str>,
        fps: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        renderer.render(camera, scene, overlay, fps, &self.inner)
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }
}
