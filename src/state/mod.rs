//! Layer State Module
//!
//! The layer state value plus the three helpers that move it between
//! layers: applying, fetching and examining.

pub mod applier;
pub mod examiner;
pub mod fetcher;
pub mod layer_state;

pub use applier::LayerStateApplier;
pub use examiner::{LayerStateExaminer, Mismatch};
pub use fetcher::LayerStateFetcher;
pub use layer_state::{LayerState, Mapping, FRAME_KEY, VISIBLE_KEY};
