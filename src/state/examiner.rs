//! Verifies that a layer matches a state.

use log::trace;

use crate::geometry::Rect;
use crate::layer::Layer;
use crate::state::layer_state::LayerState;

/// A field where the layer differs from the expected state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mismatch {
    Frame { expected: Rect, actual: Rect },
    Visibility { expected: bool, actual: bool },
}

/// Compares layers against layer states
pub struct LayerStateExaminer;

impl LayerStateExaminer {
    /// True iff the layer's frame equals the state's frame exactly and the
    /// visibility flags match. No tolerance is applied.
    pub fn conforms<L: Layer + ?Sized>(layer: &L, state: &LayerState) -> bool {
        let conforms =
            layer.frame() == state.frame() && layer.is_visible() == state.is_visible();
        if !conforms {
            trace!(
                "[EXAMINE] layer frame={:?} visible={} does not match frame={:?} visible={}",
                layer.frame(),
                layer.is_visible(),
                state.frame(),
                state.is_visible()
            );
        }
        conforms
    }

    /// Every field where `layer` differs from `state`, frame first.
    ///
    /// Empty exactly when [`LayerStateExaminer::conforms`] returns true.
    pub fn mismatches<L: Layer + ?Sized>(layer: &L, state: &LayerState) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();

        let actual = layer.frame();
        if actual != state.frame() {
            mismatches.push(Mismatch::Frame {
                expected: state.frame(),
                actual,
            });
        }

        let actual = layer.is_visible();
        if actual != state.is_visible() {
            mismatches.push(Mismatch::Visibility {
                expected: state.is_visible(),
                actual,
            });
        }

        mismatches
    }
}
