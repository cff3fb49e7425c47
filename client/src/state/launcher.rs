//! Floating cart launcher position and click-vs-drag classification.
//!
//! DESIGN
//! ======
//! The launcher component forwards raw pointer coordinates here and renders
//! whatever position comes back. Keeping the gesture as an explicit state
//! machine lets the click/drag threshold and viewport clamping be tested
//! without a DOM.
//!
//! INVARIANTS
//! ==========
//! - `position` always lies within `[0, viewport - element]` on both axes,
//!   collapsing to 0 when the element is larger than the viewport.
//! - A click opens the cart only when the preceding press never moved more
//!   than [`DRAG_THRESHOLD_PX`] on either axis.

#[cfg(test)]
#[path = "launcher_test.rs"]
mod launcher_test;

/// Pointer travel (per axis) above which a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Inset from the bottom-right viewport corner for the resting position.
pub const EDGE_MARGIN_PX: f64 = 20.0;

/// Default launcher footprint used before the element has been measured.
pub const DEFAULT_LAUNCHER_SIZE: Size = Size { width: 56.0, height: 56.0 };

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Current pointer gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer position at press time.
        start: Point,
        /// Pointer minus launcher position at press time.
        offset: Point,
        /// Set once travel exceeds the threshold.
        is_drag: bool,
    },
}

/// Launcher geometry plus gesture state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LauncherState {
    position: Point,
    viewport: Size,
    element: Size,
    gesture: Gesture,
    /// Whether the next `click` should be honored.
    was_click: bool,
}

impl Default for LauncherState {
    fn default() -> Self {
        Self::new(Size::default(), DEFAULT_LAUNCHER_SIZE)
    }
}

impl LauncherState {
    /// Launcher resting at the bottom-right corner of `viewport`.
    #[must_use]
    pub fn new(viewport: Size, element: Size) -> Self {
        Self {
            position: initial_position(viewport, element),
            viewport,
            element,
            gesture: Gesture::Idle,
            was_click: true,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Viewport changed: snap back to the bottom-right corner.
    pub fn resize(&mut self, viewport: Size, element: Size) {
        self.viewport = viewport;
        self.element = element;
        self.position = initial_position(viewport, element);
    }

    /// Press on the launcher. Optimistically treated as a click.
    pub fn pointer_down(&mut self, pointer: Point) {
        let offset = Point { x: pointer.x - self.position.x, y: pointer.y - self.position.y };
        self.gesture = Gesture::Dragging { start: pointer, offset, is_drag: false };
        self.was_click = true;
    }

    /// Pointer moved. Returns the new position while a press is active.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Point> {
        let Gesture::Dragging { start, offset, is_drag } = &mut self.gesture else {
            return None;
        };
        let dx = (pointer.x - start.x).abs();
        let dy = (pointer.y - start.y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            *is_drag = true;
            self.was_click = false;
        }
        let target = Point { x: pointer.x - offset.x, y: pointer.y - offset.y };
        self.position = clamp_to_viewport(target, self.viewport, self.element);
        Some(self.position)
    }

    /// Release or cancel. Leaves the click flag for the following `click`.
    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Click delivered after release. Returns `true` when the cart should
    /// open, and re-arms the flag either way.
    pub fn click(&mut self) -> bool {
        let open = self.was_click;
        self.was_click = true;
        open
    }
}

/// Bottom-right resting position, inset by [`EDGE_MARGIN_PX`].
#[must_use]
pub fn initial_position(viewport: Size, element: Size) -> Point {
    let target = Point {
        x: viewport.width - element.width - EDGE_MARGIN_PX,
        y: viewport.height - element.height - EDGE_MARGIN_PX,
    };
    clamp_to_viewport(target, viewport, element)
}

/// Clamp `point` so an `element`-sized box stays inside `viewport`.
#[must_use]
pub fn clamp_to_viewport(point: Point, viewport: Size, element: Size) -> Point {
    let max_x = (viewport.width - element.width).max(0.0);
    let max_y = (viewport.height - element.height).max(0.0);
    Point { x: point.x.clamp(0.0, max_x), y: point.y.clamp(0.0, max_y) }
}
