//=========================================================================
// Session Configuration
//=========================================================================
//
// Every gameplay tunable in one place, with the defaults the game
// ships with. Setters assert their invariants up front so a bad value
// fails at configuration time, not mid-session.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::Frame;

//=== SessionConfig =======================================================

/// Tunable parameters for a [`GameSession`](super::GameSession).
///
/// # Default Values
///
/// - **Frame**: 750 × 1334, origin bottom-left
/// - **Health**: 5 hearts
/// - **Spawn**: every 2 s at a uniform X in [300, 400]
/// - **Snake travel**: (−1000, 0) over 3 s
/// - **Jump impulse**: (0, 180)
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Visible scene rectangle everything is laid out against.
    pub frame: Frame,

    /// Heart count and starting health.
    pub max_health: i32,

    /// Heart row anchor: inset from the frame's left edge and from its
    /// top edge.
    pub heart_inset: (f32, f32),

    /// Center-to-center spacing between adjacent hearts.
    pub heart_spacing: f32,

    pub heart_size: (f32, f32),

    /// The floor collider is this much narrower than the frame.
    pub floor_width_inset: f32,

    pub player_size: (f32, f32),

    /// The player collider is this much shorter than the sprite, for a
    /// tighter collision fit.
    pub player_collider_shrink: f32,

    pub player_restitution: f32,

    /// Seconds each run-cycle frame stays on screen.
    pub run_seconds_per_frame: f32,

    pub jump_impulse: (f32, f32),

    /// Seconds between obstacle spawns.
    pub spawn_period: f32,

    /// Closed integer range the spawn X is drawn from.
    pub spawn_x_lowest: i32,
    pub spawn_x_highest: i32,

    pub snake_size: (f32, f32),

    /// Total translation an obstacle covers before self-destroying.
    pub snake_travel: (f32, f32),

    pub snake_travel_seconds: f32,

    /// Explicit RNG seed for deterministic runs; `None` seeds from OS
    /// entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame: Frame::default(),
            max_health: 5,
            heart_inset: (120.0, 140.0),
            heart_spacing: 50.0,
            heart_size: (40.0, 35.0),
            floor_width_inset: 10.0,
            player_size: (70.0, 88.0),
            player_collider_shrink: 6.0,
            player_restitution: 0.2,
            run_seconds_per_frame: 0.2,
            jump_impulse: (0.0, 180.0),
            spawn_period: 2.0,
            spawn_x_lowest: 300,
            spawn_x_highest: 400,
            snake_size: (45.0, 58.0),
            snake_travel: (-1000.0, 0.0),
            snake_travel_seconds: 3.0,
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Fluent Setters ---------------------------------------------------

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    /// # Panics
    ///
    /// Panics if `max_health` is not strictly positive.
    pub fn with_max_health(mut self, max_health: i32) -> Self {
        assert!(
            max_health > 0,
            "Max health must be positive, got {}",
            max_health
        );
        self.max_health = max_health;
        self
    }

    /// # Panics
    ///
    /// Panics if `seconds` is not strictly positive.
    pub fn with_spawn_period(mut self, seconds: f32) -> Self {
        assert!(
            seconds > 0.0,
            "Spawn period must be positive, got {}",
            seconds
        );
        self.spawn_period = seconds;
        self
    }

    /// Pins the RNG seed for a deterministic run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    //--- Derived Layout ---------------------------------------------------

    /// Center of the heart at row position `index`, counted from the
    /// left anchor with fixed spacing.
    pub fn heart_position(&self, index: usize) -> (f32, f32) {
        (
            self.frame.min_x + self.heart_inset.0 + self.heart_spacing * index as f32,
            self.frame.max_y - self.heart_inset.1,
        )
    }

    /// Player collider rectangle: the sprite footprint with the height
    /// shrunk for a tighter fit.
    pub fn player_collider_size(&self) -> (f32, f32) {
        (
            self.player_size.0,
            self.player_size.1 - self.player_collider_shrink,
        )
    }

    /// Floor collider rectangle.
    pub fn floor_size(&self) -> (f32, f32) {
        (
            self.frame.width() - self.floor_width_inset,
            self.frame.height(),
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
