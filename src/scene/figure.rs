use glam::Vec3;

use super::{Appearance, Mesh, SceneGraph};

const SKIN: [f32; 3] = [0.87, 0.72, 0.60];
const SCLERA: [f32; 3] = [0.95, 0.95, 0.98];

/// Built-in anatomical figure assembled from primitives. Stands in for a
/// model asset when none is given or the file fails to load, so every tap
/// target ("body", "eye") still exists.
pub fn create_figure_scene() -> SceneGraph {
    let mut graph = SceneGraph::new();
    let figure = graph.add_node(graph.root(), Some("figure"));
    let body = graph.add_node(figure, Some("body"));

    graph.add_mesh(
        body,
        Some("torso"),
        Mesh::cuboid(Vec3::new(0.0, 0.9, 0.0), Vec3::new(0.85, 1.1, 0.45)),
        Appearance::new(SKIN),
    );
    graph.add_mesh(
        body,
        Some("pelvis"),
        Mesh::cuboid(Vec3::new(0.0, -0.55, 0.0), Vec3::new(0.8, 0.35, 0.45)),
        Appearance::new(SKIN),
    );
    graph.add_mesh(
        body,
        Some("left_arm"),
        Mesh::cuboid(Vec3::new(-1.25, 0.6, 0.0), Vec3::new(0.3, 1.3, 0.3)),
        Appearance::new(SKIN),
    );
    graph.add_mesh(
        body,
        Some("right_arm"),
        Mesh::cuboid(Vec3::new(1.25, 0.6, 0.0), Vec3::new(0.3, 1.3, 0.3)),
        Appearance::new(SKIN),
    );
    graph.add_mesh(
        body,
        Some("left_leg"),
        Mesh::cuboid(Vec3::new(-0.45, -2.3, 0.0), Vec3::new(0.35, 1.4, 0.35)),
        Appearance::new(SKIN),
    );
    graph.add_mesh(
        body,
        Some("right_leg"),
        Mesh::cuboid(Vec3::new(0.45, -2.3, 0.0), Vec3::new(0.35, 1.4, 0.35)),
        Appearance::new(SKIN),
    );
    graph.add_mesh(
        body,
        Some("neck"),
        Mesh::cuboid(Vec3::new(0.0, 2.2, 0.0), Vec3::new(0.25, 0.25, 0.25)),
        Appearance::new(SKIN),
    );

    let head = graph.add_node(body, Some("head"));
    graph.add_mesh(
        head,
        Some("skull"),
        Mesh::cuboid(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.55, 0.6, 0.55)),
        Appearance::new(SKIN),
    );
    // Eyes are named targets of their own, not part of the body resolution
    graph.add_mesh(
        head,
        Some("eye"),
        Mesh::cuboid(Vec3::new(-0.25, 3.15, 0.56), Vec3::new(0.09, 0.09, 0.05)),
        Appearance::new(SCLERA),
    );
    graph.add_mesh(
        head,
        Some("eye"),
        Mesh::cuboid(Vec3::new(0.25, 3.15, 0.56), Vec3::new(0.09, 0.09, 0.05)),
        Appearance::new(SCLERA),
    );

    graph
}
