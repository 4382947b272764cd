//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core message types.
//
// Defines the contract for communication between the platform and
// logic threads. These are the only messages that cross the thread
// boundary.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::TouchPoint;

//=== PlatformEvent =======================================================

/// Events sent from platform to core via the channel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// Batched touch-begin events for a frame.
    ///
    /// Sent on every frame boundary that had at least one tap; empty
    /// batches are not sent.
    Touches(Vec<TouchPoint>),

    /// Window close requested. The logic thread terminates cleanly
    /// upon receiving this.
    WindowClosed,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touches_event_is_cloneable() {
        let event = PlatformEvent::Touches(vec![TouchPoint::new(1.0, 2.0)]);
        assert_eq!(event.clone(), event);
    }

    #[test]
    fn window_closed_is_debug() {
        let debug_str = format!("{:?}", PlatformEvent::WindowClosed);
        assert!(debug_str.contains("WindowClosed"));
    }
}
