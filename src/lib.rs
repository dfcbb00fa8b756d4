//! Layer States - capture, apply and verify the visual state of UI layers
//!
//! A [`LayerState`] is an immutable snapshot of a layer's frame and
//! visibility. Three stateless helpers move it between layers:
//! - [`LayerStateFetcher`] reads a live layer into a state
//! - [`LayerStateApplier`] writes a state onto a layer
//! - [`LayerStateExaminer`] checks whether a layer matches a state
//!
//! States convert to and from a string-keyed [`Mapping`] so the surrounding
//! application can store or transport them however it likes.

pub mod error;
pub mod geometry;
pub mod layer;
pub mod state;

pub use error::{Result, StatesError};
pub use geometry::Rect;
pub use layer::{Layer, MemoryLayer};
pub use state::{
    LayerState, LayerStateApplier, LayerStateExaminer, LayerStateFetcher, Mapping, Mismatch,
};
