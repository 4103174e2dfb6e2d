use glam::{Mat4, Quat, Vec3};

use crate::math::AABB;

/// Ancestor walks stop here. Scene graphs are acyclic by construction, but
/// the bound keeps a malformed graph from hanging the input thread.
pub const MAX_ANCESTOR_DEPTH: usize = 64;

/// Index into the scene arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Local node transform, composed parent-to-child into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Triangle mesh in node-local space with a cached bounding box.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    bounds: AABB,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let bounds = AABB::from_points(&positions);
        Self {
            positions,
            normals,
            indices,
            bounds,
        }
    }

    pub fn bounds(&self) -> AABB {
        self.bounds
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Index triples, skipping a trailing partial chunk.
    pub fn triangles(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            (tri[0] as usize, tri[1] as usize, tri[2] as usize)
        })
    }

    /// Axis-aligned box mesh with per-face normals.
    pub fn cuboid(center: Vec3, half: Vec3) -> Mesh {
        let faces: [(Vec3, [Vec3; 4]); 6] = [
            (
                Vec3::Z,
                [
                    Vec3::new(-half.x, -half.y, half.z),
                    Vec3::new(half.x, -half.y, half.z),
                    Vec3::new(half.x, half.y, half.z),
                    Vec3::new(-half.x, half.y, half.z),
                ],
            ),
            (
                Vec3::NEG_Z,
                [
                    Vec3::new(half.x, -half.y, -half.z),
                    Vec3::new(-half.x, -half.y, -half.z),
                    Vec3::new(-half.x, half.y, -half.z),
                    Vec3::new(half.x, half.y, -half.z),
                ],
            ),
            (
                Vec3::X,
                [
                    Vec3::new(half.x, -half.y, half.z),
                    Vec3::new(half.x, -half.y, -half.z),
                    Vec3::new(half.x, half.y, -half.z),
                    Vec3::new(half.x, half.y, half.z),
                ],
            ),
            (
                Vec3::NEG_X,
                [
                    Vec3::new(-half.x, -half.y, -half.z),
                    Vec3::new(-half.x, -half.y, half.z),
                    Vec3::new(-half.x, half.y, half.z),
                    Vec3::new(-half.x, half.y, -half.z),
                ],
            ),
            (
                Vec3::Y,
                [
                    Vec3::new(-half.x, half.y, half.z),
                    Vec3::new(half.x, half.y, half.z),
                    Vec3::new(half.x, half.y, -half.z),
                    Vec3::new(-half.x, half.y, -half.z),
                ],
            ),
            (
                Vec3::NEG_Y,
                [
                    Vec3::new(-half.x, -half.y, -half.z),
                    Vec3::new(half.x, -half.y, -half.z),
                    Vec3::new(half.x, -half.y, half.z),
                    Vec3::new(-half.x, -half.y, half.z),
                ],
            ),
        ];

        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners) in faces {
            let base = positions.len() as u32;
            positions.extend(corners.iter().map(|&c| center + c));
            normals.extend(std::iter::repeat(normal).take(4));
            indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        Mesh::new(positions, normals, indices)
    }
}

/// Node appearance: the base color, and the color shown while highlighted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub base_color: [f32; 3],
    pub highlight_color: [f32; 3],
    pub highlighted: bool,
}

pub const HIGHLIGHT_GREEN: [f32; 3] = [0.16, 0.72, 0.31];

impl Default for Appearance {
    fn default() -> Self {
        Self::new([0.7, 0.7, 0.7])
    }
}

impl Appearance {
    pub fn new(base_color: [f32; 3]) -> Self {
        Self {
            base_color,
            highlight_color: HIGHLIGHT_GREEN,
            highlighted: false,
        }
    }

    /// Currently effective color.
    pub fn color(&self) -> [f32; 3] {
        if self.highlighted {
            self.highlight_color
        } else {
            self.base_color
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
    pub appearance: Appearance,
}

/// Arena-allocated node tree. Nodes are never removed; the whole graph is
/// rebuilt when a different model is loaded.
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    root: NodeId,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        let root = SceneNode {
            name: Some("root".to_string()),
            parent: None,
            children: Vec::new(),
            transform: Transform::default(),
            mesh: None,
            appearance: Appearance::default(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_node(&mut self, parent: NodeId, name: Option<&str>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.map(str::to_string),
            parent: Some(parent),
            children: Vec::new(),
            transform: Transform::default(),
            mesh: None,
            appearance: Appearance::default(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn add_mesh(
        &mut self,
        parent: NodeId,
        name: Option<&str>,
        mesh: Mesh,
        appearance: Appearance,
    ) -> NodeId {
        let id = self.add_node(parent, name);
        let node = &mut self.nodes[id.0];
        node.mesh = Some(mesh);
        node.appearance = appearance;
        id
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].name.as_deref()
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn set_transform(&mut self, id: NodeId, transform: Transform) {
        self.nodes[id.0].transform = transform;
    }

    /// Composed transform from the root down to `id`.
    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        let mut chain = Vec::new();
        let mut current = Some(id);
        for _ in 0..MAX_ANCESTOR_DEPTH {
            let Some(node_id) = current else { break };
            chain.push(node_id);
            current = self.nodes[node_id.0].parent;
        }
        chain
            .iter()
            .rev()
            .fold(Mat4::IDENTITY, |acc, node_id| {
                acc * self.nodes[node_id.0].transform.to_matrix()
            })
    }

    /// Flip the highlight flag on a node and everything below it. Group
    /// nodes like "body" carry no mesh of their own; the appearance change
    /// has to reach the meshes that draw them.
    pub fn set_highlighted_subtree(&mut self, id: NodeId, on: bool) {
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            self.nodes[node_id.0].appearance.highlighted = on;
            stack.extend(self.nodes[node_id.0].children.iter().copied());
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn mesh_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.mesh.is_some())
            .map(|(i, _)| NodeId(i))
    }
}
