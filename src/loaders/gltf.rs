use anyhow::{bail, Context, Result};
use glam::{Quat, Vec3};
use std::path::Path;

use crate::config::ViewerConfig;
use crate::scene::{Appearance, Mesh, NodeId, SceneGraph, Transform};

/// Loads a glTF model into a scene graph, preserving node names and
/// hierarchy so tap targets resolve the same way they do in the authoring
/// tool. The model subtree is placed at the configured offset and scale.
///
/// A missing or unparseable file is an explicit error; the caller decides
/// whether to fall back to the built-in figure.
pub fn load_scene(path: impl AsRef<Path>, config: &ViewerConfig) -> Result<SceneGraph> {
    let path = path.as_ref();
    let (document, buffers, _images) =
        gltf::import(path).context(format!("Failed to load model: {:?}", path))?;

    let mut graph = SceneGraph::new();
    let root = graph.root();
    let model = graph.add_node(root, Some("model"));
    graph.set_transform(
        model,
        Transform::new(
            Vec3::from_array(config.model_offset),
            Quat::IDENTITY,
            Vec3::splat(config.model_scale),
        ),
    );

    for scene in document.scenes() {
        for node in scene.nodes() {
            import_node(&mut graph, model, &node, &buffers);
        }
    }

    if graph.mesh_nodes().next().is_none() {
        bail!("Model contains no geometry: {:?}", path);
    }

    log::info!("Loaded model {:?}: {} nodes", path, graph.len());
    Ok(graph)
}

fn import_node(
    graph: &mut SceneGraph,
    parent: NodeId,
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
) {
    let id = graph.add_node(parent, node.name());

    let (translation, rotation, scale) = node.transform().decomposed();
    graph.set_transform(
        id,
        Transform::new(
            Vec3::from_array(translation),
            Quat::from_array(rotation),
            Vec3::from_array(scale),
        ),
    );

    if let Some(mesh) = node.mesh() {
        if let Some((mesh_data, appearance)) = import_mesh(&mesh, buffers) {
            let node_ref = graph.node_mut(id);
            node_ref.mesh = Some(mesh_data);
            node_ref.appearance = appearance;
        }
    }

    for child in node.children() {
        import_node(graph, id, &child, buffers);
    }
}

/// Merges a glTF mesh's primitives into one triangle mesh. The appearance
/// comes from the first primitive's base color.
fn import_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
) -> Option<(Mesh, Appearance)> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut color: Option<[f32; 3]> = None;

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
        let Some(position_reader) = reader.read_positions() else {
            continue;
        };

        let base = positions.len() as u32;
        let prim_positions: Vec<Vec3> = position_reader.map(Vec3::from_array).collect();
        if prim_positions.is_empty() {
            continue;
        }

        let prim_indices: Vec<u32> = match reader.read_indices() {
            Some(read) => read.into_u32().collect(),
            None => (0..prim_positions.len() as u32).collect(),
        };

        let prim_normals: Vec<Vec3> = match reader.read_normals() {
            Some(read) => read.map(Vec3::from_array).collect(),
            None => smooth_normals(&prim_positions, &prim_indices),
        };

        if color.is_none() {
            let base_color = primitive
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();
            color = Some([base_color[0], base_color[1], base_color[2]]);
        }

        positions.extend(prim_positions);
        normals.extend(prim_normals);
        indices.extend(prim_indices.iter().map(|i| i + base));
    }

    if positions.is_empty() {
        return None;
    }

    let appearance = Appearance::new(color.unwrap_or([0.7, 0.7, 0.7]));
    Some((Mesh::new(positions, normals, indices), appearance))
}

/// Area-weighted vertex normals for primitives that ship without them.
fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[i1] - positions[i0]).cross(positions[i2] - positions[i0]);
        normals[i0] += face;
        normals[i1] += face;
        normals[i2] += face;
    }
    normals
        .into_iter()
        .map(|n| if n.length_squared() > 0.0 { n.normalize() } else { Vec3::Y })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_normals_flat_quad() {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        let normals = smooth_normals(&positions, &indices);
        for n in normals {
            assert!((n - Vec3::Z).length() < 1e-5, "flat quad normals point +Z, got {:?}", n);
        }
    }

    #[test]
    fn test_smooth_normals_unreferenced_vertex() {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(9.0, 9.0, 9.0),
        ];
        let normals = smooth_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], Vec3::Y, "unreferenced vertex gets a fallback normal");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_scene("no-such-model.gltf", &ViewerConfig::default());
        assert!(err.is_err());
    }
}
