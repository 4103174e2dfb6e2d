pub mod gltf;

pub use gltf::load_scene;
