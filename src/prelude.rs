//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use verdant_dash::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime facade
pub use crate::runtime::{Runtime, RuntimeBuilder};

// Session core
pub use crate::core::session::{GameSession, SessionConfig, SessionState};

// Collaborator traits and their data types
pub use crate::core::actions::{ActionEvent, ActionScheduler, TickScheduler, TimerTag};
pub use crate::core::physics::{BodyDef, ContactPair, PhysicsWorld};
pub use crate::core::stage::{LabelSpec, SpriteSpec, Stage, TextureId};

// Entities and collision categories
pub use crate::core::category::{Category, CategoryMask};
pub use crate::core::entity::{EntityId, EntityKind, EntityRegistry};

// Context and input
pub use crate::core::context::EngineContext;
pub use crate::core::geometry::Frame;
pub use crate::core::input::TouchPoint;
