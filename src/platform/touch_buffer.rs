//=========================================================================
// Tap Buffer
//=========================================================================
//
// Accumulates touch-begin events between frame boundaries.
//
// The platform thread receives taps at whatever rate the OS delivers
// them; the logic thread wants them batched per frame. The buffer
// collects everything since the last flush and hands it over as one
// batch, preserving arrival order.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::TouchPoint;

//=== TapBuffer ===========================================================

/// Per-frame accumulator for touch-begin events.
pub(super) struct TapBuffer {
    taps: Vec<TouchPoint>,
}

impl TapBuffer {
    pub fn new() -> Self {
        Self { taps: Vec::new() }
    }

    /// Records one tap.
    pub fn push(&mut self, tap: TouchPoint) {
        self.taps.push(tap);
    }

    /// Takes the buffered batch, or `None` if nothing arrived since
    /// the last drain. Empty batches are never produced, so the caller
    /// can skip sending entirely.
    pub fn drain(&mut self) -> Option<Vec<TouchPoint>> {
        if self.taps.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.taps))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.taps.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_drains_to_none() {
        let mut buffer = TapBuffer::new();
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let mut buffer = TapBuffer::new();
        buffer.push(TouchPoint::new(1.0, 1.0));
        buffer.push(TouchPoint::new(2.0, 2.0));
        buffer.push(TouchPoint::new(3.0, 3.0));

        let batch = buffer.drain().expect("batch expected");
        assert_eq!(
            batch,
            vec![
                TouchPoint::new(1.0, 1.0),
                TouchPoint::new(2.0, 2.0),
                TouchPoint::new(3.0, 3.0),
            ]
        );
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut buffer = TapBuffer::new();
        buffer.push(TouchPoint::new(1.0, 1.0));

        assert_eq!(buffer.len(), 1);
        assert!(buffer.drain().is_some());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.drain().is_none(), "second drain has nothing");
    }
}
