//=========================================================================
// Action Scheduler Collaborator
//=========================================================================
//
// Engine-scheduled, time-based operations: repeating session timers,
// per-entity frame animations, and fixed-duration translations.
//
// The scheduler owns *timing* only. It never moves or draws anything;
// it reports what came due this tick as `ActionEvent`s, and the driver
// applies them (texture swaps on the stage) or forwards them to the
// session (timer fires, finished translations). Visual interpolation
// of a translation remains an engine concern.
//
// `TickScheduler` is the bundled reference implementation: fully
// deterministic, driven by the logic thread's fixed timestep. An
// embedder with its own action system can implement the trait instead.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::entity::EntityId;
use crate::core::stage::TextureId;

//=== TimerTag ============================================================

/// Identifies a session-scoped repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTag {
    /// The obstacle spawn interval.
    SpawnSnake,
}

//=== ActionEvent =========================================================

/// Something the scheduler brought due during `advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionEvent {
    /// A session-scoped repeating timer fired.
    Timer(TimerTag),

    /// A looping animation moved to its next frame.
    AnimationFrame {
        target: EntityId,
        texture: TextureId,
    },

    /// A scheduled translation covered its full duration.
    MovementFinished(EntityId),
}

//=== ActionScheduler Trait ===============================================

/// Time-based operations the embedding engine implements.
///
/// Cancellation is wholesale, mirroring a host engine's "remove all
/// actions" primitive: session scope for the spawn timer, entity scope
/// for animations and translations.
pub trait ActionScheduler: Send {
    /// Starts a session-scoped timer firing every `period_seconds`.
    fn schedule_repeating(&mut self, tag: TimerTag, period_seconds: f32);

    /// Starts (or replaces) a repeating frame animation on an entity.
    fn run_animation(&mut self, target: EntityId, frames: Vec<TextureId>, seconds_per_frame: f32);

    /// Starts a translation of `delta` spread over `duration_seconds`,
    /// reported as [`ActionEvent::MovementFinished`] when done.
    fn run_move_by(&mut self, target: EntityId, delta: (f32, f32), duration_seconds: f32);

    /// Cancels every action attached to one entity.
    fn cancel_entity_actions(&mut self, target: EntityId);

    /// Cancels session-scoped timers, leaving entity actions alone.
    fn cancel_session_actions(&mut self);

    /// Cancels everything, session and entity scope alike.
    fn cancel_all(&mut self);

    /// Pauses or resumes the scheduler. A paused scheduler advances
    /// nothing and fires nothing.
    fn set_paused(&mut self, paused: bool);

    /// Advances time by `dt_seconds` and returns everything that came
    /// due, in scheduling order.
    fn advance(&mut self, dt_seconds: f32) -> Vec<ActionEvent>;
}

//=== TickScheduler =======================================================

struct RepeatingTimer {
    tag: TimerTag,
    period: f32,
    elapsed: f32,
}

struct Animation {
    target: EntityId,
    frames: Vec<TextureId>,
    seconds_per_frame: f32,
    elapsed: f32,
    cursor: usize,
}

struct Translation {
    target: EntityId,
    duration: f32,
    elapsed: f32,
}

/// Deterministic reference [`ActionScheduler`].
///
/// Time advances only through `advance`, so behavior is identical for
/// identical tick sequences. A tick spanning several timer periods
/// fires the timer several times; animations cycle their frames
/// forever until canceled.
pub struct TickScheduler {
    timers: Vec<RepeatingTimer>,
    animations: Vec<Animation>,
    translations: Vec<Translation>,
    paused: bool,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            animations: Vec::new(),
            translations: Vec::new(),
            paused: false,
        }
    }

    #[cfg(test)]
    fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionScheduler for TickScheduler {
    fn schedule_repeating(&mut self, tag: TimerTag, period_seconds: f32) {
        assert!(
            period_seconds > 0.0,
            "Timer period must be positive, got {}",
            period_seconds
        );

        self.timers.push(RepeatingTimer {
            tag,
            period: period_seconds,
            elapsed: 0.0,
        });
    }

    fn run_animation(&mut self, target: EntityId, frames: Vec<TextureId>, seconds_per_frame: f32) {
        assert!(
            seconds_per_frame > 0.0,
            "Animation frame time must be positive, got {}",
            seconds_per_frame
        );
        assert!(!frames.is_empty(), "Animation needs at least one frame");

        // One animation per entity; restarting replaces the old loop.
        self.animations.retain(|a| a.target != target);
        self.animations.push(Animation {
            target,
            frames,
            seconds_per_frame,
            elapsed: 0.0,
            cursor: 0,
        });
    }

    fn run_move_by(&mut self, target: EntityId, _delta: (f32, f32), duration_seconds: f32) {
        assert!(
            duration_seconds > 0.0,
            "Translation duration must be positive, got {}",
            duration_seconds
        );

        // Timing bookkeeping only; the engine owns the actual motion.
        self.translations.push(Translation {
            target,
            duration: duration_seconds,
            elapsed: 0.0,
        });
    }

    fn cancel_entity_actions(&mut self, target: EntityId) {
        self.animations.retain(|a| a.target != target);
        self.translations.retain(|t| t.target != target);
    }

    fn cancel_session_actions(&mut self) {
        self.timers.clear();
    }

    fn cancel_all(&mut self) {
        self.timers.clear();
        self.animations.clear();
        self.translations.clear();
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn advance(&mut self, dt_seconds: f32) -> Vec<ActionEvent> {
        if self.paused || dt_seconds <= 0.0 {
            return Vec::new();
        }

        let mut events = Vec::new();

        for timer in &mut self.timers {
            timer.elapsed += dt_seconds;
            while timer.elapsed >= timer.period {
                timer.elapsed -= timer.period;
                events.push(ActionEvent::Timer(timer.tag));
            }
        }

        for animation in &mut self.animations {
            animation.elapsed += dt_seconds;
            while animation.elapsed >= animation.seconds_per_frame {
                animation.elapsed -= animation.seconds_per_frame;
                animation.cursor = (animation.cursor + 1) % animation.frames.len();
                events.push(ActionEvent::AnimationFrame {
                    target: animation.target,
                    texture: animation.frames[animation.cursor],
                });
            }
        }

        for translation in &mut self.translations {
            translation.elapsed += dt_seconds;
            if translation.elapsed >= translation.duration {
                events.push(ActionEvent::MovementFinished(translation.target));
            }
        }
        self.translations.retain(|t| t.elapsed < t.duration);

        events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
