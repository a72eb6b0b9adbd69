//! Rendering hints attached to layout output. The diagram widget maps these to
//! colours and edge shapes; nothing here affects geometry.

use serde::Serialize;

/// Visual tier of a node, by depth. Each tier gets its own colour gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTier {
    Root,
    Branch,
    SubBranch,
    Deep,
}

impl LevelTier {
    pub fn for_depth(depth: u32) -> Self {
        match depth {
            0 => LevelTier::Root,
            1 => LevelTier::Branch,
            2 => LevelTier::SubBranch,
            _ => LevelTier::Deep,
        }
    }
}

/// Edge routing style understood by the diagram widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Smoothstep,
}
