//! In-memory presentation surface
//!
//! Stands in for a real host document in tests and simulations. Nodes carry
//! text plus a color override, and the visible set is swapped explicitly to
//! mimic slide navigation.

use super::TextSurface;

#[derive(Debug, Clone)]
struct MemoryNode {
    text: String,
    color: Option<String>,
}

/// A scripted [`TextSurface`] backed by plain vectors.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<MemoryNode>,
    visible: Vec<usize>,
    writes: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id. The node starts hidden.
    pub fn add_node(&mut self, text: &str) -> usize {
        self.nodes.push(MemoryNode {
            text: text.to_string(),
            color: None,
        });
        self.nodes.len() - 1
    }

    /// Replace the visible set, the way a slide change would.
    pub fn show(&mut self, ids: &[usize]) {
        self.visible = ids.to_vec();
    }

    /// Current text of a node
    pub fn text(&self, id: usize) -> &str {
        &self.nodes[id].text
    }

    /// Current color override of a node
    pub fn color(&self, id: usize) -> Option<&str> {
        self.nodes[id].color.as_deref()
    }

    /// Number of text writes performed so far. Lets tests assert that
    /// sub-second ticks do not touch the document.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl TextSurface for MemorySurface {
    type Id = usize;

    fn visible_nodes(&self) -> Vec<usize> {
        self.visible.clone()
    }

    fn content(&self, id: &usize) -> Option<String> {
        self.nodes.get(*id).map(|node| node.text.clone())
    }

    fn set_content(&mut self, id: &usize, text: &str) {
        if let Some(node) = self.nodes.get_mut(*id) {
            node.text = text.to_string();
            self.writes += 1;
        }
    }

    fn set_color(&mut self, id: &usize, color: Option<&str>) {
        if let Some(node) = self.nodes.get_mut(*id) {
            node.color = color.map(String::from);
        }
    }
}
