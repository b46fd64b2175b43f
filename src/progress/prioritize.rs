//! Missing-document diff and priority tiers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::DocumentId;

const BUILTIN_TIER1: [&str; 13] = [
    "javascript",
    "nodejs",
    "html",
    "bootstrap",
    "material-ui",
    "ant-design",
    "c-sharp",
    "php",
    "ruby",
    "laravel",
    "flask",
    "mysql",
    "sqlite",
];

const BUILTIN_TIER2: [&str; 10] = [
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    "aws",
    "azure",
    "gcp",
    "github-actions",
    "gitlab-ci",
];

/// Exact-name lists that pull missing documents to the front of the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityLists {
    pub tier1: Vec<String>,
    pub tier2: Vec<String>,
}

impl Default for PriorityLists {
    fn default() -> Self {
        Self {
            tier1: BUILTIN_TIER1.iter().map(|s| s.to_string()).collect(),
            tier2: BUILTIN_TIER2.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Missing documents split by priority. The three tiers are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBuckets {
    pub priority1: Vec<DocumentId>,
    pub priority2: Vec<DocumentId>,
    pub others: Vec<DocumentId>,
}

impl PriorityBuckets {
    pub fn len(&self) -> usize {
        self.priority1.len() + self.priority2.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PriorityLists {
    /// Bucket `missing` by exact membership. An id named in both lists lands in tier 1.
    pub fn bucket(&self, missing: &[DocumentId]) -> PriorityBuckets {
        let tier1: HashSet<&str> = self.tier1.iter().map(String::as_str).collect();
        let tier2: HashSet<&str> = self.tier2.iter().map(String::as_str).collect();

        let mut buckets = PriorityBuckets::default();
        for id in missing {
            if tier1.contains(id.as_str()) {
                buckets.priority1.push(id.clone());
            } else if tier2.contains(id.as_str()) {
                buckets.priority2.push(id.clone());
            } else {
                buckets.others.push(id.clone());
            }
        }
        buckets
    }
}

/// Ids of `source` absent from `translated`, in source order.
pub fn missing_ids(source: &[DocumentId], translated: &HashSet<&str>) -> Vec<DocumentId> {
    source
        .iter()
        .filter(|id| !translated.contains(id.as_str()))
        .cloned()
        .collect()
}

/// Ids of `translated` absent from `source`, in translated order.
pub fn orphaned_ids(translated: &[DocumentId], source: &HashSet<&str>) -> Vec<DocumentId> {
    missing_ids(translated, source)
}
