//! In-memory page
//!
//! A `TargetProvider` that keeps its targets as `Node`s keyed by id.
//! Used by the CLI to produce page snapshots and by the tests.

use super::catalogue::CATALOGUE;
use super::node::Node;
use super::target::{TargetProvider, UiTarget};
use serde::Serialize;
use std::collections::BTreeMap;

/// Page whose targets live in memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MemoryPage {
    targets: BTreeMap<String, Node>,
}

impl MemoryPage {
    /// Empty page with no targets
    pub fn new() -> Self {
        Self::default()
    }

    /// Page carrying every catalogued target, each empty and visible
    pub fn catalogue() -> Self {
        let mut page = Self::new();
        for (id, tag) in CATALOGUE {
            page.insert(*id, Node::new(*tag));
        }
        page
    }

    /// Page carrying only the listed targets (tags taken from the catalogue)
    pub fn with_targets(ids: &[&str]) -> Self {
        let mut page = Self::new();
        for id in ids {
            let tag = super::catalogue::tag_for(id).unwrap_or("div");
            page.insert(*id, Node::new(tag));
        }
        page
    }

    /// Add or replace a target
    pub fn insert(&mut self, id: impl Into<String>, node: Node) {
        self.targets.insert(id.into(), node);
    }

    /// Remove a target, returning it
    pub fn remove(&mut self, id: &str) -> Option<Node> {
        self.targets.remove(id)
    }

    /// Target by id
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.targets.get(id)
    }

    /// Text of a target (empty when absent)
    pub fn text_of(&self, id: &str) -> String {
        self.get(id).map(Node::text_content).unwrap_or_default()
    }

    /// Whether a target exists and is hidden
    pub fn is_hidden(&self, id: &str) -> bool {
        self.get(id).map(|n| n.hidden).unwrap_or(false)
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the page carries no targets
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate targets in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.targets.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// One line of HTML per target, in catalogue order then any extras
    pub fn to_html(&self) -> String {
        let mut lines = Vec::with_capacity(self.targets.len());
        for (id, _) in CATALOGUE {
            if let Some(node) = self.targets.get(*id) {
                lines.push(node.to_html_with_id(id));
            }
        }
        for (id, node) in &self.targets {
            if super::catalogue::tag_for(id).is_none() {
                lines.push(node.to_html_with_id(id));
            }
        }
        lines.join("\n")
    }
}

impl TargetProvider for MemoryPage {
    fn target(&mut self, id: &str) -> Option<Box<dyn UiTarget + '_>> {
        self.targets
            .get_mut(id)
            .map(|node| Box::new(node) as Box<dyn UiTarget + '_>)
    }
}
