use crate::scene::{NodeId, MAX_ANCESTOR_DEPTH};
use crate::traits::SceneView;

/// First ancestor-or-self whose name is in the interactive label set.
/// Walks at most MAX_ANCESTOR_DEPTH links; a chain without a match is a
/// normal `None`, not an error.
pub fn resolve_interaction_target<S: SceneView>(
    scene: &S,
    node: NodeId,
    labels: &[&str],
) -> Option<NodeId> {
    let mut current = Some(node);
    for _ in 0..MAX_ANCESTOR_DEPTH {
        let id = current?;
        if let Some(name) = scene.name_of(id) {
            if labels.contains(&name) {
                return Some(id);
            }
        }
        current = scene.parent_of(id);
    }
    None
}

/// Single-selection highlight with an attached overlay line. At most one
/// node is highlighted at a time.
#[derive(Debug, Default)]
pub struct Highlighter {
    active: Option<NodeId>,
    overlay: Option<String>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    pub fn overlay_text(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    /// Toggle semantics: selecting the active node deselects it and clears
    /// the overlay; selecting another node moves the highlight there.
    pub fn toggle<S: SceneView>(&mut self, scene: &mut S, node: NodeId, blurb: Option<&str>) {
        if self.active == Some(node) {
            self.clear(scene);
            return;
        }
        if let Some(previous) = self.active.take() {
            scene.set_highlighted(previous, false);
        }
        scene.set_highlighted(node, true);
        self.active = Some(node);
        self.overlay = blurb.map(str::to_string);
    }

    /// Restore the default appearance and drop the overlay.
    pub fn clear<S: SceneView>(&mut self, scene: &mut S) {
        if let Some(previous) = self.active.take() {
            scene.set_highlighted(previous, false);
        }
        self.overlay = None;
    }
}
