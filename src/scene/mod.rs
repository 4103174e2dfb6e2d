mod figure;
mod graph;

pub use figure::create_figure_scene;
pub use graph::{
    Appearance, Mesh, NodeId, SceneGraph, SceneNode, Transform, HIGHLIGHT_GREEN,
    MAX_ANCESTOR_DEPTH,
};
