use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A pending change to one column's persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMutation {
    pub order: usize,
}

/// Batch of order mutations keyed by column name.
///
/// Serializes as `{"<name>": {"order": <int>}}`, which is the shape the
/// persistence layer accepts.
pub type SchemaMutations = BTreeMap<String, OrderMutation>;
