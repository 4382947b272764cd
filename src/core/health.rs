//=========================================================================
// Health
//=========================================================================
//
// Player health counter and its heart-row presentation rule.
//
// Health only ever moves down, one point per qualifying hit, and jumps
// back to full on restart. The game-over threshold is checked (health
// below 1), not clamped: the counter itself may sit at 0 while the
// session performs the transition.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::stage::{textures, TextureId};

//=== Health ==============================================================

/// Player health counter in `[0, max]`.
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Creates a counter starting at full.
    ///
    /// # Panics
    ///
    /// Panics if `max` is not strictly positive.
    pub fn new(max: i32) -> Self {
        assert!(max > 0, "Max health must be positive, got {}", max);
        Self { current: max, max }
    }

    //--- Mutation ---------------------------------------------------------

    /// Removes exactly one point.
    pub fn damage(&mut self) {
        self.current -= 1;
        debug!("Health now {}/{}", self.current, self.max);
    }

    /// Restores the counter to full.
    pub fn reset(&mut self) {
        self.current = self.max;
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// The game-over condition: health dropped below 1.
    pub fn is_depleted(&self) -> bool {
        self.current < 1
    }
}

//=== Heart Row Rule ======================================================

/// Texture for the heart at row position `index` given current health.
///
/// Indicator `i` shows a full heart iff `i < health`; the rule is
/// idempotent, so it can be reapplied every frame without drift.
pub fn heart_texture(index: usize, health: i32) -> TextureId {
    if (index as i32) < health {
        textures::HEART_FULL
    } else {
        textures::HEART_EMPTY
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
