//! Career tree layout — positions every node so sibling subtrees never overlap.
//!
//! # Algorithm
//! Two passes over the tree:
//! 1. **Footprint pass** (bottom-up): a leaf needs `min_width`; an internal node
//!    needs the sum of its children's footprints plus `sibling_spacing` between
//!    each adjacent pair, floored at `min_width`. Computed once per node and kept
//!    in a `Footprint` tree that mirrors the input.
//! 2. **Placement pass** (top-down, pre-order): children are laid left to right
//!    across their combined span, centred under the parent. `y = depth * row_height`.
//!
//! Node ids (`n0`, `n1`, …) come from a counter owned by `LayoutBuilder`, so two
//! runs over the same tree produce identical output.

use serde::Serialize;

use crate::layout::style::{EdgeKind, LevelTier};
use crate::models::CareerNode;

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Footprint of a leaf, and the floor for every subtree.
    pub min_width: f64,
    /// Horizontal gap between adjacent sibling footprints.
    pub sibling_spacing: f64,
    /// Vertical distance between depths. Large enough for multi-line labels.
    pub row_height: f64,
    /// Centre x of the root.
    pub root_x: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width: 200.0,
            sibling_spacing: 100.0,
            row_height: 300.0,
            root_x: 0.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Content shown inside a node box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLabel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,
    pub position: Position,
    pub label: NodeLabel,
    pub depth: u32,
    pub tier: LevelTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// Nodes in pre-order, edges in the order their child was visited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

// ────────────────────────────────────────────────────────────────────────────
// Footprint pass
// ────────────────────────────────────────────────────────────────────────────

/// Horizontal space a subtree needs, mirrored over the tree's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub children: Vec<Footprint>,
}

impl Footprint {
    pub fn measure(node: &CareerNode, config: &LayoutConfig) -> Self {
        let children: Vec<Footprint> = node
            .children
            .iter()
            .map(|child| Footprint::measure(child, config))
            .collect();

        let width = if children.is_empty() {
            config.min_width
        } else {
            children_span(&children, config).max(config.min_width)
        };

        Footprint { width, children }
    }
}

/// Combined width of a sibling row, gaps included. Not floored.
fn children_span(children: &[Footprint], config: &LayoutConfig) -> f64 {
    if children.is_empty() {
        return 0.0;
    }
    let widths: f64 = children.iter().map(|c| c.width).sum();
    widths + (children.len() - 1) as f64 * config.sibling_spacing
}

// ────────────────────────────────────────────────────────────────────────────
// Placement pass
// ────────────────────────────────────────────────────────────────────────────

struct LayoutBuilder<'a> {
    config: &'a LayoutConfig,
    next_id: usize,
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
}

impl<'a> LayoutBuilder<'a> {
    fn new(config: &'a LayoutConfig, capacity: usize) -> Self {
        Self {
            config,
            next_id: 0,
            nodes: Vec::with_capacity(capacity),
            edges: Vec::with_capacity(capacity.saturating_sub(1)),
        }
    }

    fn allocate_id(&mut self) -> String {
        let id = format!("n{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn place(
        &mut self,
        node: &CareerNode,
        footprint: &Footprint,
        parent_id: Option<&str>,
        depth: u32,
        center_x: f64,
    ) {
        let id = self.allocate_id();

        self.nodes.push(LayoutNode {
            id: id.clone(),
            position: Position {
                x: center_x,
                y: depth as f64 * self.config.row_height,
            },
            label: NodeLabel {
                title: node.title.clone(),
                description: node.description.clone(),
            },
            depth,
            tier: LevelTier::for_depth(depth),
        });

        if let Some(parent_id) = parent_id {
            self.edges.push(LayoutEdge {
                id: format!("e-{parent_id}-{id}"),
                source: parent_id.to_string(),
                target: id.clone(),
                animated: true,
                kind: EdgeKind::Smoothstep,
            });
        }

        let span = children_span(&footprint.children, self.config);
        let mut cursor = center_x - span / 2.0;

        for (child, child_footprint) in node.children.iter().zip(&footprint.children) {
            let child_x = cursor + child_footprint.width / 2.0;
            self.place(child, child_footprint, Some(&id), depth + 1, child_x);
            cursor += child_footprint.width + self.config.sibling_spacing;
        }
    }

    fn finish(self) -> TreeLayout {
        TreeLayout {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

/// Lays out `tree` with its root centred at `config.root_x`, `y = 0`.
pub fn layout_tree(tree: &CareerNode, config: &LayoutConfig) -> TreeLayout {
    let footprint = Footprint::measure(tree, config);
    let mut builder = LayoutBuilder::new(config, tree.node_count());
    builder.place(tree, &footprint, None, 0, config.root_x);
    builder.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn node(title: &str, children: Vec<CareerNode>) -> CareerNode {
        CareerNode {
            title: title.to_string(),
            description: None,
            children,
        }
    }

    fn leaf(title: &str) -> CareerNode {
        CareerNode::leaf(title)
    }

    /// Root → [A, B → [B1, B2]]
    fn small_tree() -> CareerNode {
        node("Root", vec![leaf("A"), node("B", vec![leaf("B1"), leaf("B2")])])
    }

    /// One child with a deep, wide subtree next to a lone leaf.
    fn unbalanced_tree() -> CareerNode {
        node(
            "Root",
            vec![
                leaf("Solo"),
                node(
                    "Heavy",
                    vec![
                        node("H1", vec![leaf("H1a"), leaf("H1b"), leaf("H1c")]),
                        node("H2", vec![node("H2a", vec![leaf("H2a-i"), leaf("H2a-ii")])]),
                        leaf("H3"),
                    ],
                ),
                leaf("Tail"),
            ],
        )
    }

    fn preorder_widths(footprint: &Footprint, out: &mut Vec<f64>) {
        out.push(footprint.width);
        for child in &footprint.children {
            preorder_widths(child, out);
        }
    }

    #[test]
    fn test_root_only_tree() {
        let layout = layout_tree(&leaf("Founder"), &LayoutConfig::default());
        assert_eq!(layout.nodes.len(), 1);
        assert!(layout.edges.is_empty());
        assert_eq!(layout.nodes[0].id, "n0");
        assert_eq!(layout.nodes[0].position, Position { x: 0.0, y: 0.0 });
        assert_eq!(layout.nodes[0].tier, LevelTier::Root);
    }

    #[test]
    fn test_leaf_footprint_ignores_label_length() {
        let config = LayoutConfig::default();
        let short = Footprint::measure(&leaf("PM"), &config);
        let long = Footprint::measure(
            &leaf("Principal Machine Learning Infrastructure Engineer, Distributed Training"),
            &config,
        );
        assert_eq!(short.width, config.min_width);
        assert_eq!(long.width, config.min_width);
    }

    #[test]
    fn test_internal_footprint_sums_children_and_gaps() {
        let config = LayoutConfig::default();
        let three = node("R", vec![leaf("a"), leaf("b"), leaf("c")]);
        assert_eq!(Footprint::measure(&three, &config).width, 800.0);

        let one = node("R", vec![leaf("a")]);
        assert_eq!(Footprint::measure(&one, &config).width, 200.0);
    }

    #[test]
    fn test_footprint_uses_configured_constants() {
        let config = LayoutConfig {
            min_width: 50.0,
            sibling_spacing: 10.0,
            row_height: 100.0,
            root_x: 0.0,
        };
        let tree = node("R", vec![leaf("a"), node("b", vec![leaf("b1"), leaf("b2")])]);
        let footprint = Footprint::measure(&tree, &config);
        assert_eq!(footprint.children[0].width, 50.0);
        assert_eq!(footprint.children[1].width, 110.0);
        assert_eq!(footprint.width, 170.0);
    }

    #[test]
    fn test_small_tree_exact_positions() {
        let layout = layout_tree(&small_tree(), &LayoutConfig::default());

        let summary: Vec<(&str, &str, f64, f64)> = layout
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n.label.title.as_str(), n.position.x, n.position.y))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("n0", "Root", 0.0, 0.0),
                ("n1", "A", -300.0, 300.0),
                ("n2", "B", 150.0, 300.0),
                ("n3", "B1", 0.0, 600.0),
                ("n4", "B2", 300.0, 600.0),
            ]
        );

        let edges: Vec<(&str, &str, &str)> = layout
            .edges
            .iter()
            .map(|e| (e.id.as_str(), e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("e-n0-n1", "n0", "n1"),
                ("e-n0-n2", "n0", "n2"),
                ("e-n2-n3", "n2", "n3"),
                ("e-n2-n4", "n2", "n4"),
            ]
        );
        assert!(layout.edges.iter().all(|e| e.animated));
    }

    #[test]
    fn test_root_x_shifts_every_node() {
        let base = layout_tree(&small_tree(), &LayoutConfig::default());
        let shifted = layout_tree(
            &small_tree(),
            &LayoutConfig {
                root_x: 1000.0,
                ..LayoutConfig::default()
            },
        );
        for (a, b) in base.nodes.iter().zip(&shifted.nodes) {
            assert_eq!(b.position.x - a.position.x, 1000.0);
            assert_eq!(b.position.y, a.position.y);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let config = LayoutConfig::default();
        let tree = unbalanced_tree();
        assert_eq!(layout_tree(&tree, &config), layout_tree(&tree, &config));
    }

    #[test]
    fn test_one_node_per_tree_node_and_n_minus_one_edges() {
        let tree = unbalanced_tree();
        let layout = layout_tree(&tree, &LayoutConfig::default());
        assert_eq!(layout.nodes.len(), tree.node_count());
        assert_eq!(layout.edges.len(), tree.node_count() - 1);

        let mut ids: Vec<&str> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), layout.nodes.len());
    }

    #[test]
    fn test_y_follows_depth() {
        let config = LayoutConfig::default();
        let layout = layout_tree(&unbalanced_tree(), &config);
        for n in &layout.nodes {
            assert_eq!(n.position.y, n.depth as f64 * config.row_height);
            assert_eq!(n.tier, LevelTier::for_depth(n.depth));
        }
        assert_eq!(layout.nodes.iter().map(|n| n.depth).max(), Some(4));
    }

    #[test]
    fn test_sibling_subtrees_never_overlap() {
        let config = LayoutConfig::default();
        let tree = unbalanced_tree();
        let layout = layout_tree(&tree, &config);

        let mut widths = Vec::new();
        preorder_widths(&Footprint::measure(&tree, &config), &mut widths);
        assert_eq!(widths.len(), layout.nodes.len());

        let index_of = |id: &str| layout.nodes.iter().position(|n| n.id == id).unwrap();

        for parent in &layout.nodes {
            let ranges: Vec<(f64, f64)> = layout
                .edges
                .iter()
                .filter(|e| e.source == parent.id)
                .map(|e| {
                    let i = index_of(&e.target);
                    let x = layout.nodes[i].position.x;
                    (x - widths[i] / 2.0, x + widths[i] / 2.0)
                })
                .collect();

            for pair in ranges.windows(2) {
                let (_, left_end) = pair[0];
                let (right_start, _) = pair[1];
                assert!(
                    left_end <= right_start,
                    "children of {} overlap: {:?}",
                    parent.id,
                    ranges
                );
            }
        }
    }

    #[test]
    fn test_children_centred_under_parent() {
        let layout = layout_tree(&unbalanced_tree(), &LayoutConfig::default());
        let root_children: Vec<f64> = layout
            .nodes
            .iter()
            .filter(|n| n.depth == 1)
            .map(|n| n.position.x)
            .collect();
        let first = root_children.first().copied().unwrap();
        let last = root_children.last().copied().unwrap();
        // Solo and Tail are both leaves, so the row is symmetric about the root.
        assert_eq!(first, -last);
    }

    #[test]
    fn test_description_carried_into_label() {
        let tree = CareerNode {
            title: "Analyst".to_string(),
            description: Some("Entry role".to_string()),
            children: vec![],
        };
        let layout = layout_tree(&tree, &LayoutConfig::default());
        assert_eq!(
            layout.nodes[0].label.description.as_deref(),
            Some("Entry role")
        );
    }
}
