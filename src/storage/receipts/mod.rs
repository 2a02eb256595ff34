//! Receipt Store: maps generated identifiers to accepted receipts.

use crate::domain::receipt::{Receipt, ReceiptId};
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory;

pub use memory::InMemoryReceiptStore;

/// Contract the service needs from storage.
///
/// Receipts are never updated or deleted, so an identifier returned by `put` stays
/// valid for the lifetime of the store.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Retains `receipt` under a fresh identifier, unique among stored receipts.
    async fn put(&self, receipt: Receipt) -> ReceiptId;

    /// Looks up a receipt. `None` means no receipt was stored under `id`.
    async fn get(&self, id: &ReceiptId) -> Option<Arc<Receipt>>;

    /// Number of stored receipts.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
