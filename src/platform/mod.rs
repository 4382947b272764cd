//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the logic thread via channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  SessionDriver   │
//  │   ↓                      │    │  ↓               │
//  │  TapTracker              │    │  GameSession     │
//  │   ├─ Tracks cursor       │    │                  │
//  │   └─ Maps taps/touches   │    └──────────────────┘
//  │   ↓                      │             ↑
//  │  TapBuffer               │             │
//  │   ↓ (flush)              │             │
//  │  RedrawRequested         │             │
//  │   ↓                      │             │
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered taps sent atomically
//    → Core processes at fixed TPS (independent of refresh rate)
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: Batches all taps atomically,
//   ensuring deterministic order even with high event rates
// - **Graceful channel disconnect**: If the logic thread dies, the
//   platform logs a warning but continues running to allow window
//   closure
// - **Main thread requirement**: Winit mandates main thread on
//   macOS/iOS, so this runs on the thread that called `Runtime::run()`
//
// Responsibilities:
// - Create and manage the OS window
// - Poll Winit events at refresh rate
// - Convert clicks and touchscreen contacts into `TouchPoint`s
// - Buffer taps until the frame boundary
// - Send batched taps to the logic thread
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod touch_buffer;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::PlatformEvent;
use event_mapper::TapTracker;
use touch_buffer::TapBuffer;

//=== Constants ===========================================================

// Matches the default session frame.
const WINDOW_TITLE: &str = "Verdant Dash";
const WINDOW_WIDTH: u32 = 750;
const WINDOW_HEIGHT: u32 = 1334;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created,
/// the game cannot run.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and tap aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and sends
/// batched taps to the logic thread over the channel.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender)` - initializes subsystems
/// 2. **Execution**: `platform.run()` - starts event loop (never returns)
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
/// Communication with other threads occurs exclusively via the sender.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Buffers taps until the frame boundary.
    buffer: TapBuffer,

    /// Channel to send events to the logic thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to `TouchPoint`s.
    taps: TapTracker,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given event sender.
    ///
    /// Does not create the window yet - that happens lazily in
    /// `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: TapBuffer::new(),
            event_sender,
            taps: TapTracker::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop (never returns normally).
    ///
    /// This method blocks, running the Winit event loop until `exit()`
    /// is called from a close request.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if event loop creation fails before
    /// starting, or if the loop itself errors out.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit
    /// requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered taps to the logic thread.
    ///
    /// Called on every `RedrawRequested` event. Empty buffers are not
    /// sent.
    ///
    /// # Error Handling
    ///
    /// If the channel is disconnected (logic thread panicked or exited
    /// early), logs a warning and drops the batch. The platform keeps
    /// running so the user can close the window normally; in a normal
    /// shutdown `WindowClosed` is sent first and the logic thread exits
    /// before the channel disconnects.
    fn flush_tap_buffer(&mut self) {
        if let Some(batch) = self.buffer.drain() {
            let count = batch.len();

            trace!(target: "platform::input", "Flushing {} taps", count);

            if self
                .event_sender
                .send(PlatformEvent::Touches(batch))
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} taps",
                    count
                );
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet. On mobile, this may
    /// be called multiple times (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                // Notify the logic thread of the fatal error
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.taps
                    .update_cursor(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(tap) = self.taps.mouse_tap(*button, *state) {
                    trace!(target: "platform::input", "Tap at {:?}", tap);
                    self.buffer.push(tap);
                }
            }

            WindowEvent::Touch(touch) => {
                if let Some(tap) =
                    TapTracker::touch_began(touch.phase, touch.location.x, touch.location.y)
                {
                    trace!(target: "platform::input", "Touch began at {:?}", tap);
                    self.buffer.push(tap);
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered taps
                self.flush_tap_buffer();

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, keyboard input, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::TouchPoint;
    use crossbeam_channel::unbounded;

    #[test]
    fn platform_creation() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx);
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx);

        platform.flush_tap_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_taps() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx);

        platform.buffer.push(TouchPoint::new(10.0, 20.0));
        platform.buffer.push(TouchPoint::new(30.0, 40.0));

        platform.flush_tap_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Touches(batch)) => {
                assert_eq!(batch.len(), 2);
                assert_eq!(batch[0], TouchPoint::new(10.0, 20.0));
                assert_eq!(batch[1], TouchPoint::new(30.0, 40.0));
            }
            other => panic!("Expected Touches event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx);

        platform.buffer.push(TouchPoint::new(1.0, 1.0));

        // Drop receiver to disconnect
        drop(rx);

        // Should not panic, just log a warning
        platform.flush_tap_buffer();
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx);

        platform.buffer.push(TouchPoint::new(5.0, 5.0));

        platform.flush_tap_buffer();
        platform.flush_tap_buffer(); // Second flush should be no-op

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
