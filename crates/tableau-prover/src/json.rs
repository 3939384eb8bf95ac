//! JSON serialization types for tableaux and search results

use crate::search::{ProofResult, SearchStats, SearchStatus};
use crate::tableau::{NodeId, Tableau};
use serde::{Deserialize, Serialize};

/// JSON representation of a tableau node and its subtree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeJson {
    pub literal: String,
    pub closed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<NodeJson>,
}

impl NodeJson {
    fn from_node(tableau: &Tableau, id: NodeId) -> Self {
        let node = tableau.node(id);
        NodeJson {
            literal: node.literal.to_string(),
            closed: tableau.is_branch_closed(id),
            children: node
                .children
                .iter()
                .map(|&child| NodeJson::from_node(tableau, child))
                .collect(),
        }
    }
}

/// JSON representation of a tableau
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableauJson {
    pub inferences: usize,
    pub fully_closed: bool,
    pub root: NodeJson,
}

impl From<&Tableau> for TableauJson {
    fn from(tableau: &Tableau) -> Self {
        TableauJson {
            inferences: tableau.inference_count(),
            fully_closed: tableau.is_fully_closed(),
            root: NodeJson::from_node(tableau, NodeId::ROOT),
        }
    }
}

/// JSON representation of a search result
#[derive(Debug, Clone, Serialize)]
pub struct ProofResultJson {
    pub found: bool,
    pub status: SearchStatus,
    pub inferences_used: usize,
    pub final_bound: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<TableauJson>,
    pub stats: SearchStats,
}

impl From<&ProofResult> for ProofResultJson {
    fn from(result: &ProofResult) -> Self {
        ProofResultJson {
            found: result.found(),
            status: result.status,
            inferences_used: result.inferences_used,
            final_bound: result.final_bound,
            proof: result.proof_tree.as_ref().map(TableauJson::from),
            stats: result.stats.clone(),
        }
    }
}

impl Tableau {
    /// Convert to JSON representation
    pub fn to_json(&self) -> TableauJson {
        self.into()
    }
}

impl ProofResult {
    /// Convert to JSON representation
    pub fn to_json(&self) -> ProofResultJson {
        self.into()
    }
}
