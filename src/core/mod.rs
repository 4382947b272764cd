//=========================================================================
// Core Session Driver
//
// Central coordinator for the game running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the session and the engine collaborators
// - Receive and process platform events via the channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Dispatch contacts, action events, and touches into the session
//
// Notes:
// The driver runs independently from the platform layer. It owns the
// session and collaborators directly and ticks them at a fixed rate in
// a background thread. Communication with the platform occurs only
// through message passing, ensuring isolation and thread safety.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::info;

//=== Internal Modules ====================================================

use crate::core::actions::{ActionEvent, ActionScheduler};
use crate::core::context::EngineContext;
use crate::core::input::TouchPoint;
use crate::core::physics::PhysicsWorld;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::session::GameSession;
use crate::core::stage::Stage;

pub mod actions;
pub mod category;
pub mod context;
pub mod entity;
pub mod geometry;
pub mod health;
pub mod input;
pub mod physics;
pub(crate) mod platform_bridge;
pub mod session;
pub mod spawner;
pub mod stage;

//=== TickControl =========================================================
//
// Defines control flow for the core update loop.
// Each tick can signal either to continue or terminate the loop.
//
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== SessionDriver =======================================================
//
// Owns the game session plus the embedder's collaborators and feeds
// the session its callbacks in a fixed order each tick:
//
//   1. physics step        → contact-begin events
//   2. scheduler advance   → timer / animation / movement events
//   3. touches             → on_touches_began
//   4. contacts            → on_contact_begin
//   5. action events       → on_timer / texture swap / on_movement_finished
//   6. frame update        → on_update
//
pub(crate) struct SessionDriver {
    session: GameSession,
    stage: Box<dyn Stage>,
    physics: Box<dyn PhysicsWorld>,
    scheduler: Box<dyn ActionScheduler>,
}

impl SessionDriver {
    //--- Construction -----------------------------------------------------

    pub fn new(
        session: GameSession,
        stage: Box<dyn Stage>,
        physics: Box<dyn PhysicsWorld>,
        scheduler: Box<dyn ActionScheduler>,
    ) -> Self {
        Self {
            session,
            stage,
            physics,
            scheduler,
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread responsible for ticking the session at a
    // fixed update frequency (TPS - ticks per second).
    //
    // Each tick:
    //  1. Collects touch batches from the platform
    //  2. Steps the world and dispatches events into the session
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits cleanly when a shutdown signal is received
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let dt = 1.0 / tps;

        thread::spawn(move || {
            let mut driver = self;
            let mut touches: Vec<TouchPoint> = Vec::new();
            let mut clock = 0.0f64;

            driver.start();

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if let TickControl::Exit =
                    Self::collect_platform_events(&receiver, &mut touches, frame_duration)
                {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Advance the session ---------------------------
                clock += dt;
                driver.tick(clock, &touches, dt as f32);
                touches.clear();

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- collect_platform_events() ---------------------------------------
    //
    // Aggregates all touch batches received from the platform during
    // this frame. Returns a TickControl indicating whether to continue
    // or exit.
    //
    fn collect_platform_events(
        receiver: &Receiver<PlatformEvent>,
        touches: &mut Vec<TouchPoint>,
        frame_duration: Duration,
    ) -> TickControl {
        // Wait for at most one frame for the first event
        match receiver.recv_timeout(frame_duration) {
            Ok(PlatformEvent::Touches(batch)) => touches.extend(batch),
            Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
            Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
            Err(RecvTimeoutError::Timeout) => {}
        }

        // Drain additional events queued during this frame
        while let Ok(event) = receiver.try_recv() {
            match event {
                PlatformEvent::Touches(batch) => touches.extend(batch),
                PlatformEvent::WindowClosed => return TickControl::Exit,
            }
        }

        TickControl::Continue
    }

    //--- Session Dispatch -------------------------------------------------

    /// Presents the scene. Runs once before the first tick.
    pub(crate) fn start(&mut self) {
        let mut ctx = EngineContext::new(
            self.stage.as_mut(),
            self.physics.as_mut(),
            self.scheduler.as_mut(),
        );
        self.session.on_presented(&mut ctx);
    }

    /// Runs one fixed-timestep tick.
    pub(crate) fn tick(&mut self, now: f64, touches: &[TouchPoint], dt: f32) {
        let contacts = self.physics.step(dt);
        let fired = self.scheduler.advance(dt);

        let mut ctx = EngineContext::new(
            self.stage.as_mut(),
            self.physics.as_mut(),
            self.scheduler.as_mut(),
        );

        if !touches.is_empty() {
            self.session.on_touches_began(touches, &mut ctx);
        }

        for contact in contacts {
            self.session.on_contact_begin(contact, &mut ctx);
        }

        for event in fired {
            match event {
                ActionEvent::Timer(tag) => self.session.on_timer(tag, &mut ctx),
                // The scheduler owns timing only; the driver applies
                // frame flips to the stage.
                ActionEvent::AnimationFrame { target, texture } => {
                    ctx.stage.set_texture(target, texture)
                }
                ActionEvent::MovementFinished(target) => {
                    self.session.on_movement_finished(target, &mut ctx)
                }
            }
        }

        self.session.on_update(now, &mut ctx);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::TickScheduler;
    use crate::core::physics::{BodyDef, ContactPair};
    use crate::core::session::{SessionConfig, SessionState};
    use crate::core::stage::{LabelSpec, SpriteSpec, TextureId};
    use crate::core::entity::EntityId;
    use crossbeam_channel::bounded;

    //--- Minimal no-op collaborators --------------------------------------

    struct NullStage;

    impl Stage for NullStage {
        fn add_sprite(&mut self, _spec: SpriteSpec) {}
        fn add_label(&mut self, _spec: LabelSpec) {}
        fn set_texture(&mut self, _entity: EntityId, _texture: TextureId) {}
        fn set_position_x(&mut self, _entity: EntityId, _x: f32) {}
        fn set_rotation(&mut self, _entity: EntityId, _radians: f32) {}
        fn remove_entity(&mut self, _entity: EntityId) {}
        fn remove_all(&mut self) {}
        fn entity_at_point(&self, _point: (f32, f32)) -> Option<EntityId> {
            None
        }
    }

    struct NullPhysics;

    impl PhysicsWorld for NullPhysics {
        fn attach_body(&mut self, _def: BodyDef) {}
        fn remove_body(&mut self, _entity: EntityId) {}
        fn remove_all_bodies(&mut self) {}
        fn apply_impulse(&mut self, _entity: EntityId, _impulse: (f32, f32)) {}
        fn set_paused(&mut self, _paused: bool) {}
        fn step(&mut self, _dt_seconds: f32) -> Vec<ContactPair> {
            Vec::new()
        }
    }

    fn driver() -> SessionDriver {
        SessionDriver::new(
            GameSession::new(SessionConfig::default().with_seed(11)),
            Box::new(NullStage),
            Box::new(NullPhysics),
            Box::new(TickScheduler::new()),
        )
    }

    //--- Dispatch ---------------------------------------------------------

    #[test]
    fn start_presents_the_scene() {
        let mut driver = driver();
        driver.start();
        assert_eq!(driver.session.state(), SessionState::Running);
        assert_eq!(driver.session.health(), 5);
    }

    #[test]
    fn touches_reach_the_session() {
        let mut driver = driver();
        driver.start();
        assert!(driver.session.can_jump());

        driver.tick(0.0, &[TouchPoint::new(10.0, 10.0)], 1.0 / 60.0);

        assert!(!driver.session.can_jump(), "tap consumed the jump");
    }

    #[test]
    fn scheduler_timer_spawns_through_the_driver() {
        let mut driver = driver();
        driver.start();

        driver.tick(1.0, &[], 1.0);
        assert_eq!(driver.session.snake_count(), 0);

        driver.tick(2.0, &[], 1.0);
        assert_eq!(driver.session.snake_count(), 1, "spawn timer fired at t=2");
    }

    #[test]
    fn snake_despawns_after_travel_through_the_driver() {
        let mut driver = driver();
        driver.start();

        driver.tick(2.0, &[], 2.0);
        assert_eq!(driver.session.snake_count(), 1);

        // Travel limit is 3s after the spawn tick.
        driver.tick(5.5, &[], 3.5);
        assert_eq!(driver.session.snake_count(), 1, "second snake replaced the first");
    }

    //--- Thread Lifecycle -------------------------------------------------

    #[test]
    fn core_thread_exits_on_window_closed() {
        let (tx, rx) = bounded(8);
        let handle = driver().spawn_core_thread(rx, 240.0);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        handle.join().expect("core thread should exit cleanly");
    }

    #[test]
    fn core_thread_exits_on_disconnect() {
        let (tx, rx) = bounded::<PlatformEvent>(8);
        let handle = driver().spawn_core_thread(rx, 240.0);

        drop(tx);

        handle.join().expect("core thread should exit cleanly");
    }
}
