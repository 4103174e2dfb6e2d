pub mod cli;
pub mod config;
pub mod frame;
pub mod gestures;
pub mod interaction;
pub mod loaders;
pub mod math;
pub mod picking;
pub mod renderer;
pub mod rig;
pub mod scene;
pub mod traits;
pub mod types;
pub mod window;

pub use config::{RigConfig, ViewerConfig};
pub use gestures::{GestureEvent, GestureRecognizer};
pub use interaction::{resolve_interaction_target, Highlighter};
pub use picking::{pick, pick_screen, Hit};
pub use rig::{CameraRig, CameraState, DragRebase};
pub use scene::{create_figure_scene, SceneGraph};
