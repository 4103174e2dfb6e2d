pub mod camera;
pub mod scene;

pub use camera::CameraController;
pub use scene::SceneView;
