//! Pushes a captured state onto a layer.

use log::debug;

use crate::layer::Layer;
use crate::state::layer_state::LayerState;

/// Applies layer states to layers
pub struct LayerStateApplier;

impl LayerStateApplier {
    /// Write the state's frame, then its visibility, onto `layer`.
    ///
    /// The frame must settle before visibility changes take effect, so the
    /// order of the two writes is fixed. Whether the layer honors the new
    /// frame is not checked; use
    /// [`LayerStateExaminer`](crate::state::LayerStateExaminer) for that.
    pub fn apply<L: Layer + ?Sized>(state: &LayerState, layer: &mut L) {
        debug!(
            "[APPLY] frame={:?} visible={}",
            state.frame(),
            state.is_visible()
        );
        layer.set_frame(state.frame());
        layer.set_visible(state.is_visible());
    }
}
