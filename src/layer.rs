//! Layer capability
//!
//! Anything with a writable frame and a writable visibility flag can have its
//! state captured, applied and examined.

use crate::geometry::Rect;

/// A positionable, hideable UI layer.
///
/// Implementations are expected to be touched from a single UI thread; the
/// trait makes no atomicity guarantees across calls.
pub trait Layer {
    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

impl<L: Layer + ?Sized> Layer for &mut L {
    fn frame(&self) -> Rect {
        (**self).frame()
    }

    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame)
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible)
    }
}

impl<L: Layer + ?Sized> Layer for Box<L> {
    fn frame(&self) -> Rect {
        (**self).frame()
    }

    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame)
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible)
    }
}

/// Detached in-memory layer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryLayer {
    pub frame: Rect,
    pub visible: bool,
}

impl MemoryLayer {
    pub fn new(frame: Rect, visible: bool) -> Self {
        Self { frame, visible }
    }
}

impl Layer for MemoryLayer {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
