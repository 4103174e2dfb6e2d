use glam::{Mat4, Vec3};

use crate::math::{intersect_aabb, intersect_triangle, Ray};
use crate::scene::{NodeId, SceneGraph};
use crate::traits::SceneView;

/// Ray-cast result: the mesh node hit, the hit distance and the world point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub t: f32,
    pub point: Vec3,
}

/// Nearest mesh intersection in the scene. Each node's world bounding box
/// gates the exact per-triangle test.
pub fn pick(scene: &SceneGraph, ray: &Ray) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;

    for id in scene.mesh_nodes() {
        let world = scene.world_transform(id);
        let Some(mesh) = scene.node(id).mesh.as_ref() else {
            continue;
        };

        let bounds = mesh.bounds().transformed(&world);
        let t_box = intersect_aabb(ray.origin, ray.dir, bounds.min, bounds.max);
        if t_box < 0.0 {
            continue;
        }
        if let Some(best) = &nearest {
            // The box entry distance is a lower bound for any triangle hit
            if t_box > best.t {
                continue;
            }
        }

        for (i0, i1, i2) in mesh.triangles() {
            let v0 = world.transform_point3(mesh.positions[i0]);
            let v1 = world.transform_point3(mesh.positions[i1]);
            let v2 = world.transform_point3(mesh.positions[i2]);
            if let Some(t) = intersect_triangle(ray.origin, ray.dir, v0, v1, v2) {
                if nearest.as_ref().map_or(true, |best| t < best.t) {
                    nearest = Some(Hit {
                        node: id,
                        t,
                        point: ray.at(t),
                    });
                }
            }
        }
    }

    nearest
}

/// Ray-cast from a window position.
pub fn pick_screen(
    scene: &SceneGraph,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    view_proj: &Mat4,
) -> Option<Hit> {
    pick(scene, &Ray::from_screen(x, y, width, height, view_proj))
}

impl SceneView for SceneGraph {
    fn name_of(&self, node: NodeId) -> Option<&str> {
        SceneGraph::name_of(self, node)
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        SceneGraph::parent_of(self, node)
    }

    fn set_highlighted(&mut self, node: NodeId, on: bool) {
        self.set_highlighted_subtree(node, on);
    }

    fn cast_ray(&self, ray: &Ray) -> Option<Hit> {
        pick(self, ray)
    }
}
