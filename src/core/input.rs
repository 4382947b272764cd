//=========================================================================
// Input Types
//
// Defines the internal representation of touch input.
//
// This module abstracts away platform-specific input (mouse clicks,
// touchscreen events) into a unified, session-friendly format: a tap
// is a tap, whether it came from a finger or a mouse button.
//
//=========================================================================

//=== TouchPoint ==========================================================

/// A single touch-begin event, in scene coordinates.
///
/// The session hit-tests touch points against the stage to decide
/// whether a tap hit a UI element or is a jump request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point as a coordinate pair, for hit-testing.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trip() {
        let touch = TouchPoint::new(12.5, -4.0);
        assert_eq!(touch.position(), (12.5, -4.0));
    }
}
