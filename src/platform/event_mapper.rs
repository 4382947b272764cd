//=========================================================================
// Platform Event Mapper
//
// Converts Winit input events to session-level `TouchPoint`s.
// Provides a clean separation between OS-specific input and the
// session's internal event representation.
//
// Responsibilities:
// - Treat a left-button press at the tracked cursor position as a tap
// - Treat a touchscreen contact in its `Started` phase as a tap
// - Ignore releases, other buttons, and later touch phases
//
//=========================================================================

use winit::event::{ElementState, MouseButton as WinitMouseButton, TouchPhase};

use crate::core::input::TouchPoint;

//=== TapTracker ==========================================================
//
// Winit reports mouse presses without a position, so the tracker keeps
// the last cursor position and stamps it onto each press. Touchscreen
// events carry their own location and bypass the tracking.
//
pub(super) struct TapTracker {
    cursor: (f32, f32),
}

impl TapTracker {
    pub fn new() -> Self {
        Self { cursor: (0.0, 0.0) }
    }

    //--- Cursor Tracking --------------------------------------------------

    /// Records the latest cursor position from `CursorMoved`.
    pub fn update_cursor(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
    }

    //--- Event Conversion -------------------------------------------------

    /// Maps a mouse button transition to a tap at the tracked cursor.
    ///
    /// Only a left-button press counts; releases and other buttons
    /// return `None`.
    pub fn mouse_tap(&self, button: WinitMouseButton, state: ElementState) -> Option<TouchPoint> {
        match (button, state) {
            (WinitMouseButton::Left, ElementState::Pressed) => {
                Some(TouchPoint::new(self.cursor.0, self.cursor.1))
            }
            _ => None,
        }
    }

    /// Maps a touchscreen phase transition to a tap.
    ///
    /// Only the `Started` phase counts; movement, release, and
    /// cancellation are not touch-begin events.
    pub fn touch_began(phase: TouchPhase, x: f64, y: f64) -> Option<TouchPoint> {
        match phase {
            TouchPhase::Started => Some(TouchPoint::new(x as f32, y as f32)),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
