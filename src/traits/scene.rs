use crate::math::Ray;
use crate::picking::Hit;
use crate::scene::NodeId;

/// The minimal scene capabilities the interaction layer depends on:
/// parent/name queries, appearance mutation, ray-casting. Keeps the
/// tap-to-highlight logic testable without a renderer behind it.
pub trait SceneView {
    fn name_of(&self, node: NodeId) -> Option<&str>;

    fn parent_of(&self, node: NodeId) -> Option<NodeId>;

    fn set_highlighted(&mut self, node: NodeId, on: bool);

    /// Nearest intersected mesh node, if any
    fn cast_ray(&self, ray: &Ray) -> Option<Hit>;
}
