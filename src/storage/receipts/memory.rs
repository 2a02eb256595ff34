use super::ReceiptStore;
use crate::domain::receipt::{Receipt, ReceiptId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type IdGenerator = dyn Fn() -> ReceiptId + Send + Sync;

/// Process-local store guarded by a single `RwLock`.
///
/// Identifier generation runs while the write lock is held, so the collision check and
/// the insert cannot interleave with another submission.
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Arc<Receipt>>>,
    generate_id: Box<IdGenerator>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::with_id_generator(ReceiptId::random)
    }

    /// Uses `generate_id` instead of random identifiers.
    pub fn with_id_generator<F>(generate_id: F) -> Self
    where
        F: Fn() -> ReceiptId + Send + Sync + 'static,
    {
        Self {
            receipts: RwLock::new(HashMap::new()),
            generate_id: Box::new(generate_id),
        }
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, receipt: Receipt) -> ReceiptId {
        let mut receipts = self.receipts.write().await;

        let mut id = (self.generate_id)();
        while receipts.contains_key(&id) {
            tracing::debug!(%id, "receipt id collision, regenerating");
            id = (self.generate_id)();
        }

        receipts.insert(id, Arc::new(receipt));
        id
    }

    async fn get(&self, id: &ReceiptId) -> Option<Arc<Receipt>> {
        self.receipts.read().await.get(id).cloned()
    }

    async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }
}
