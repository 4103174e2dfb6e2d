use anatomy_viewer::interaction::{resolve_interaction_target, Highlighter};
use anatomy_viewer::math::Ray;
use anatomy_viewer::picking::Hit;
use anatomy_viewer::scene::{create_figure_scene, NodeId, SceneGraph};
use anatomy_viewer::traits::SceneView;

const LABELS: [&str; 2] = ["body", "eye"];

fn find_named(graph: &SceneGraph, name: &str) -> NodeId {
    graph
        .ids()
        .find(|&id| graph.name_of(id) == Some(name))
        .unwrap_or_else(|| panic!("figure scene should contain a node named {:?}", name))
}

#[cfg(test)]
mod resolution_tests {
    use super::*;

    #[test]
    fn test_any_body_descendant_resolves_to_body() {
        let graph = create_figure_scene();
        let body = find_named(&graph, "body");

        for part in ["torso", "left_leg", "skull"] {
            let node = find_named(&graph, part);
            assert_eq!(
                resolve_interaction_target(&graph, node, &LABELS),
                Some(body),
                "{} should resolve up to the body group",
                part
            );
        }
    }

    #[test]
    fn test_labeled_node_resolves_to_itself() {
        let graph = create_figure_scene();
        let body = find_named(&graph, "body");
        assert_eq!(resolve_interaction_target(&graph, body, &LABELS), Some(body));

        let eye = find_named(&graph, "eye");
        assert_eq!(resolve_interaction_target(&graph, eye, &LABELS), Some(eye));
    }

    #[test]
    fn test_chain_without_match_returns_none() {
        let graph = create_figure_scene();
        let torso = find_named(&graph, "torso");
        assert_eq!(resolve_interaction_target(&graph, torso, &["spleen"]), None);
    }

    #[test]
    fn test_nodes_above_the_label_do_not_match() {
        let graph = create_figure_scene();
        // "figure" sits above "body"; walking up from it only reaches the root
        let figure = find_named(&graph, "figure");
        assert_eq!(resolve_interaction_target(&graph, figure, &LABELS), None);
    }

    /// Degenerate scene whose parent chain loops back on itself.
    struct CyclicScene;

    impl SceneView for CyclicScene {
        fn name_of(&self, _node: NodeId) -> Option<&str> {
            Some("unlabeled")
        }

        fn parent_of(&self, node: NodeId) -> Option<NodeId> {
            Some(node)
        }

        fn set_highlighted(&mut self, _node: NodeId, _on: bool) {}

        fn cast_ray(&self, _ray: &Ray) -> Option<Hit> {
            None
        }
    }

    #[test]
    fn test_cyclic_parent_chain_terminates() {
        let graph = create_figure_scene();
        let some_id = graph.root();
        assert_eq!(
            resolve_interaction_target(&CyclicScene, some_id, &LABELS),
            None,
            "the depth bound must stop a looping parent chain"
        );
    }
}

#[cfg(test)]
mod highlight_tests {
    use super::*;

    #[test]
    fn test_toggle_highlights_subtree_and_sets_overlay() {
        let mut graph = create_figure_scene();
        let body = find_named(&graph, "body");
        let torso = find_named(&graph, "torso");
        let mut highlighter = Highlighter::new();

        highlighter.toggle(&mut graph, body, Some("You are healthy"));

        assert_eq!(highlighter.active(), Some(body));
        assert_eq!(highlighter.overlay_text(), Some("You are healthy"));
        assert!(
            graph.node(torso).appearance.highlighted,
            "group highlight reaches the meshes that draw it"
        );
        assert_ne!(
            graph.node(torso).appearance.color(),
            graph.node(torso).appearance.base_color
        );
    }

    #[test]
    fn test_double_toggle_restores_default_appearance() {
        let mut graph = create_figure_scene();
        let body = find_named(&graph, "body");
        let torso = find_named(&graph, "torso");
        let mut highlighter = Highlighter::new();

        highlighter.toggle(&mut graph, body, Some("You are healthy"));
        highlighter.toggle(&mut graph, body, Some("You are healthy"));

        assert_eq!(highlighter.active(), None);
        assert_eq!(highlighter.overlay_text(), None);
        assert!(!graph.node(torso).appearance.highlighted);
        assert_eq!(
            graph.node(torso).appearance.color(),
            graph.node(torso).appearance.base_color
        );
    }

    #[test]
    fn test_selecting_another_node_moves_the_highlight() {
        let mut graph = create_figure_scene();
        let body = find_named(&graph, "body");
        let eye = find_named(&graph, "eye");
        let torso = find_named(&graph, "torso");
        let mut highlighter = Highlighter::new();

        highlighter.toggle(&mut graph, body, Some("You are healthy"));
        highlighter.toggle(&mut graph, eye, Some("Eye"));

        assert_eq!(highlighter.active(), Some(eye));
        assert_eq!(highlighter.overlay_text(), Some("Eye"));
        assert!(graph.node(eye).appearance.highlighted);
        assert!(
            !graph.node(torso).appearance.highlighted,
            "previous selection is restored before the new one applies"
        );
    }

    #[test]
    fn test_clear_removes_highlight_and_overlay() {
        let mut graph = create_figure_scene();
        let eye = find_named(&graph, "eye");
        let mut highlighter = Highlighter::new();

        highlighter.toggle(&mut graph, eye, Some("Eye"));
        highlighter.clear(&mut graph);

        assert_eq!(highlighter.active(), None);
        assert_eq!(highlighter.overlay_text(), None);
        assert!(!graph.node(eye).appearance.highlighted);
    }

    #[test]
    fn test_toggle_without_blurb_has_no_overlay() {
        let mut graph = create_figure_scene();
        let eye = find_named(&graph, "eye");
        let mut highlighter = Highlighter::new();

        highlighter.toggle(&mut graph, eye, None);

        assert_eq!(highlighter.active(), Some(eye));
        assert_eq!(highlighter.overlay_text(), None);
    }
}
