use serde::Serialize;

use crate::tree::{node::Node, stats::GameStats};

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    pub schema_version: u32,
    pub node_count: usize,
    pub depth: usize,
    pub games_played: u64,
    pub games_won: u64,
    pub root: NodeSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeSnapshot {
    Answer {
        text: String,
    },
    Question {
        text: String,
        yes: Box<NodeSnapshot>,
        no: Box<NodeSnapshot>,
    },
}

impl From<&Node> for NodeSnapshot {
    fn from(node: &Node) -> Self {
        match node {
            Node::Answer { text } => NodeSnapshot::Answer { text: text.clone() },
            Node::Question { text, yes, no } => NodeSnapshot::Question {
                text: text.clone(),
                yes: Box::new(NodeSnapshot::from(yes.as_ref())),
                no: Box::new(NodeSnapshot::from(no.as_ref())),
            },
        }
    }
}

impl TreeSnapshot {
    pub(crate) fn capture(root: &Node, stats: GameStats) -> Self {
        TreeSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            node_count: root.node_count(),
            depth: root.depth(),
            games_played: stats.games_played(),
            games_won: stats.games_won(),
            root: NodeSnapshot::from(root),
        }
    }

    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
