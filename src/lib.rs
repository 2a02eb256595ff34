pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{ReceiptError, ReceiptService};
pub use domain::points::{compute_points, score, PointsBreakdown};
pub use domain::receipt::{Item, Receipt, ReceiptId};
pub use domain::validate::validate_receipt;
pub use storage::{InMemoryReceiptStore, ReceiptStore};
