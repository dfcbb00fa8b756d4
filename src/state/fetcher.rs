//! Captures a layer's current state.

use log::trace;

use crate::layer::Layer;
use crate::state::layer_state::LayerState;

/// Reads layer states from layers
pub struct LayerStateFetcher;

impl LayerStateFetcher {
    /// Snapshot `layer`'s frame and visibility.
    ///
    /// The two reads are separate calls; a layer mutated between them
    /// yields a state mixing both moments.
    pub fn fetch_state<L: Layer + ?Sized>(layer: &L) -> LayerState {
        let state = LayerState::new(layer.frame(), layer.is_visible());
        trace!(
            "[FETCH] frame={:?} visible={}",
            state.frame(),
            state.is_visible()
        );
        state
    }
}
