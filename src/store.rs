// 🗄️ Result Store - Identifier → points, in memory
// The only shared mutable state; all access goes through put/get

use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

// ============================================================================
// IDENTIFIER
// ============================================================================

/// ReceiptId - Opaque, random 128-bit identifier (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    fn generate() -> Self {
        ReceiptId(Uuid::new_v4())
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(ReceiptId)
    }
}

// ============================================================================
// RESULT STORE
// ============================================================================

/// ResultStore - Insert-only map from identifier to points
///
/// Entries go from absent to present once and are never updated or removed.
#[derive(Debug, Default)]
pub struct ResultStore {
    scores: RwLock<HashMap<ReceiptId, u64>>,
}

impl ResultStore {
    pub fn new() -> Self {
        ResultStore {
            scores: RwLock::new(HashMap::new()),
        }
    }

    /// Store points under a freshly generated identifier
    ///
    /// Generation and insertion happen under the same write lock, so two
    /// concurrent calls can never hand out the same identifier.
    pub fn put(&self, points: u64) -> ReceiptId {
        let mut scores = self.scores.write();

        loop {
            let id = ReceiptId::generate();
            if let Entry::Vacant(slot) = scores.entry(id) {
                slot.insert(points);
                debug!(%id, points, "Stored receipt points");
                return id;
            }
        }
    }

    /// Points for an identifier, or None if it was never stored
    pub fn get(&self, id: &ReceiptId) -> Option<u64> {
        self.scores.read().get(id).copied()
    }

    /// Number of stored results
    pub fn len(&self) -> usize {
        self.scores.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.read().is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
