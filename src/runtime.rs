//=========================================================================
// Verdant Dash Runtime
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     RuntimeBuilder  ──build()──>  Runtime  ──run()──>  [Running]
//         │                           │
//         ├─ with_tps()               └─ spawns logic thread
//         ├─ with_channel_capacity()     runs platform
//         └─ with_config()              blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::actions::ActionScheduler;
use crate::core::physics::PhysicsWorld;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::session::{GameSession, SessionConfig};
use crate::core::stage::Stage;
use crate::core::SessionDriver;
use crate::platform::Platform;

//=== RuntimeBuilder ======================================================

/// Builder for configuring and constructing a [`Runtime`].
///
/// Provides a fluent API for setting runtime parameters before
/// construction.
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Session config**: [`SessionConfig::default`]
///
/// # Examples
///
/// ```ignore
/// RuntimeBuilder::new()
///     .with_tps(120.0)              // High refresh rate
///     .with_channel_capacity(256)   // Extra buffering
///     .with_config(SessionConfig::default().with_seed(7))
///     .build(stage, physics, TickScheduler::new())
///     .run();
/// ```
pub struct RuntimeBuilder {
    tps: f64,
    channel_capacity: usize,
    config: SessionConfig,
}

impl RuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: SessionConfig::default(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// The logic thread will attempt to maintain this update rate
    /// using a fixed timestep loop. Higher values provide more
    /// responsive input, but increase CPU usage.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Larger values provide more buffering during frame spikes but
    /// increase memory usage.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the session configuration (frame, health, spawn tunables).
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the runtime around the embedder's collaborators.
    ///
    /// Consumes the builder and produces a configured [`Runtime`]
    /// ready for execution. The collaborators move to the logic
    /// thread, so they must be `Send` (guaranteed by the traits).
    pub fn build<S, P, A>(self, stage: S, physics: P, scheduler: A) -> Runtime
    where
        S: Stage + 'static,
        P: PhysicsWorld + 'static,
        A: ActionScheduler + 'static,
    {
        info!(
            "Building runtime (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        let session = GameSession::new(self.config);
        let driver = SessionDriver::new(
            session,
            Box::new(stage),
            Box::new(physics),
            Box::new(scheduler),
        );

        Runtime {
            driver,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Runtime =============================================================

/// Verdant Dash runtime.
///
/// Coordinates the platform layer and the logic thread. Create via
/// [`RuntimeBuilder`] with `RuntimeBuilder::new().build(...)`.
///
/// # Architecture
///
/// ```text
/// Runtime (Main Thread)
///   ├─► SessionDriver (Logic Thread @ TPS)
///   │     └─► GameSession + Stage/Physics/Scheduler
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Tap Collection
///
/// Communication: Channel (PlatformEvent)
/// ```
pub struct Runtime {
    driver: SessionDriver,
    tps: f64,
    channel_capacity: usize,
}

impl Runtime {
    /// Starts the runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the channel for platform → core communication
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → channel disconnects →
    ///    logic thread terminates
    ///
    /// # Thread Panic Handling
    ///
    /// If the logic thread panics, the error is logged and the runtime
    /// attempts graceful shutdown.
    pub fn run(self) {
        info!("Starting runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the logic thread ------------------------------------
        let core_handle = self.driver.spawn_core_thread(rx, self.tps);
        info!("Logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {:?}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for the logic thread to terminate -----------
        match core_handle.join() {
            Ok(()) => {
                info!("Logic thread terminated cleanly");
            }
            Err(e) => {
                error!("Logic thread panicked: {:?}", e);
            }
        }

        info!("Runtime shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
