pub mod receipts;

pub use receipts::{InMemoryReceiptStore, ReceiptStore};
