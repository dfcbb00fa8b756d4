//! Layer State Value
//!
//! Immutable snapshot of a layer's frame and visibility, convertible to and
//! from a string-keyed mapping:
//!
//! ```json
//! { "frame": { "x": 0, "y": 0, "width": 100, "height": 50 }, "visible": true }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StatesError};
use crate::geometry::Rect;

/// String-keyed mapping used as the serialized form of a [`LayerState`].
pub type Mapping = serde_json::Map<String, Value>;

/// Mapping key holding the frame rectangle.
pub const FRAME_KEY: &str = "frame";
/// Mapping key holding the visibility flag.
pub const VISIBLE_KEY: &str = "visible";

pub const X_KEY: &str = "x";
pub const Y_KEY: &str = "y";
pub const WIDTH_KEY: &str = "width";
pub const HEIGHT_KEY: &str = "height";

/// Frame and visibility of a single layer.
///
/// Fields are fixed at construction; use [`LayerState::with_frame`] or
/// [`LayerState::with_visibility`] to derive a different state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerState {
    frame: Rect,
    visible: bool,
}

impl LayerState {
    /// Create a state from explicit values. Degenerate frames are allowed.
    pub fn new(frame: Rect, visible: bool) -> Self {
        Self { frame, visible }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn with_frame(&self, frame: Rect) -> Self {
        Self { frame, ..*self }
    }

    pub fn with_visibility(&self, visible: bool) -> Self {
        Self { visible, ..*self }
    }

    /// Export as a two-entry mapping.
    ///
    /// Non-finite frame components have no JSON number form and are written
    /// as `null`, which [`LayerState::from_mapping`] rejects.
    pub fn to_mapping(&self) -> Mapping {
        let mut rect = Mapping::new();
        rect.insert(X_KEY.to_string(), Value::from(self.frame.x));
        rect.insert(Y_KEY.to_string(), Value::from(self.frame.y));
        rect.insert(WIDTH_KEY.to_string(), Value::from(self.frame.width));
        rect.insert(HEIGHT_KEY.to_string(), Value::from(self.frame.height));

        let mut mapping = Mapping::new();
        mapping.insert(FRAME_KEY.to_string(), Value::Object(rect));
        mapping.insert(VISIBLE_KEY.to_string(), Value::Bool(self.visible));
        mapping
    }

    /// Rebuild a state from a mapping produced by [`LayerState::to_mapping`].
    ///
    /// # Errors
    /// Returns [`StatesError::Deserialization`] if:
    /// - `frame` or `visible` is absent
    /// - `frame` is not an object, or one of its components is absent or not a number
    /// - `visible` is not a boolean
    ///
    /// Unrecognized keys are ignored.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        let rect = match mapping.get(FRAME_KEY) {
            Some(Value::Object(rect)) => rect,
            Some(_) => return Err(StatesError::wrong_type(FRAME_KEY, "an object")),
            None => return Err(StatesError::missing(FRAME_KEY)),
        };

        let frame = Rect::new(
            frame_component(rect, X_KEY)?,
            frame_component(rect, Y_KEY)?,
            frame_component(rect, WIDTH_KEY)?,
            frame_component(rect, HEIGHT_KEY)?,
        );

        let visible = mapping
            .get(VISIBLE_KEY)
            .ok_or_else(|| StatesError::missing(VISIBLE_KEY))?
            .as_bool()
            .ok_or_else(|| StatesError::wrong_type(VISIBLE_KEY, "a boolean"))?;

        Ok(Self { frame, visible })
    }
}

fn frame_component(rect: &Mapping, key: &str) -> Result<f64> {
    let path = format!("{}.{}", FRAME_KEY, key);
    match rect.get(key) {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| StatesError::wrong_type(path, "a number")),
        None => Err(StatesError::missing(path)),
    }
}

impl Default for LayerState {
    fn default() -> Self {
        Self::new(Rect::ZERO, true)
    }
}

impl From<LayerState> for Mapping {
    fn from(state: LayerState) -> Self {
        state.to_mapping()
    }
}

impl TryFrom<&Mapping> for LayerState {
    type Error = StatesError;

    fn try_from(mapping: &Mapping) -> Result<Self> {
        LayerState::from_mapping(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn as_mapping(value: Value) -> Mapping {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_to_mapping_shape() {
        let state = LayerState::new(Rect::new(0.0, 0.0, 100.0, 50.0), true);
        let expected = json!({
            "frame": { "x": 0.0, "y": 0.0, "width": 100.0, "height": 50.0 },
            "visible": true
        });

        assert_eq!(Value::Object(state.to_mapping()), expected);
        assert_eq!(state.to_mapping().len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let states = [
            LayerState::new(Rect::new(0.0, 0.0, 100.0, 50.0), true),
            LayerState::new(Rect::new(-12.5, 3.25, 0.0, 0.0), false),
            LayerState::new(Rect::new(0.1 + 0.2, 1e-300, 1e300, 7.0), true),
            LayerState::default(),
        ];

        for state in states {
            let restored = LayerState::from_mapping(&state.to_mapping()).unwrap();
            assert_eq!(restored, state);
        }
    }

    #[test]
    fn test_round_trip_through_json_text() {
        let state = LayerState::new(Rect::new(10.5, -4.0, 320.0, 240.0), false);
        let text = serde_json::to_string(&state.to_mapping()).unwrap();
        let mapping: Mapping = serde_json::from_str(&text).unwrap();

        assert_eq!(LayerState::try_from(&mapping).unwrap(), state);
    }

    #[test]
    fn test_serde_derive_matches_mapping() {
        let state = LayerState::new(Rect::new(1.0, 2.0, 3.0, 4.0), true);
        let derived = serde_json::to_value(state).unwrap();

        assert_eq!(derived, Value::Object(Mapping::from(state)));
    }

    #[test]
    fn test_integer_components_accepted() {
        let mapping = as_mapping(json!({
            "frame": { "x": 0, "y": 0, "width": 100, "height": 50 },
            "visible": false
        }));

        let state = LayerState::from_mapping(&mapping).unwrap();
        assert_eq!(state.frame(), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_extra_keys_ignored() {
        let mapping = as_mapping(json!({
            "frame": { "x": 1, "y": 2, "width": 3, "height": 4, "z": 9 },
            "visible": true,
            "opacity": 0.5
        }));

        assert!(LayerState::from_mapping(&mapping).is_ok());
    }

    #[test_case(json!({ "visible": true }), "frame" ; "missing frame")]
    #[test_case(json!({ "frame": { "x": 0, "y": 0, "width": 1, "height": 1 } }), "visible" ; "missing visible")]
    #[test_case(json!({ "frame": [0, 0, 1, 1], "visible": true }), "frame" ; "frame not an object")]
    #[test_case(json!({ "frame": { "x": 0, "y": 0, "width": 1 }, "visible": true }), "frame.height" ; "missing component")]
    #[test_case(json!({ "frame": { "x": "0", "y": 0, "width": 1, "height": 1 }, "visible": true }), "frame.x" ; "non numeric component")]
    #[test_case(json!({ "frame": { "x": 0, "y": null, "width": 1, "height": 1 }, "visible": true }), "frame.y" ; "null component")]
    #[test_case(json!({ "frame": { "x": 0, "y": 0, "width": 1, "height": 1 }, "visible": 1 }), "visible" ; "visible not a boolean")]
    fn test_from_mapping_rejects(value: Value, key: &str) {
        let err = LayerState::from_mapping(&as_mapping(value)).unwrap_err();

        assert!(matches!(err, StatesError::Deserialization { .. }));
        assert_eq!(err.key(), key);
    }

    #[test]
    fn test_non_finite_frame_does_not_round_trip() {
        let state = LayerState::new(Rect::new(f64::NAN, 0.0, 1.0, 1.0), true);
        let err = LayerState::from_mapping(&state.to_mapping()).unwrap_err();
        assert_eq!(err.key(), "frame.x");
    }

    #[test]
    fn test_with_methods_leave_original_untouched() {
        let original = LayerState::new(Rect::new(0.0, 0.0, 10.0, 10.0), false);
        let moved = original.with_frame(Rect::new(5.0, 5.0, 10.0, 10.0));
        let shown = original.with_visibility(true);

        assert_eq!(original.frame(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!original.is_visible());
        assert_eq!(moved.frame().x, 5.0);
        assert!(!moved.is_visible());
        assert!(shown.is_visible());
        assert_eq!(shown.frame(), original.frame());
    }
}
