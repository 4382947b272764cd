//=========================================================================
// Engine Context
//=========================================================================
//
// Bundle of collaborator borrows handed to every session handler.
//
// The session itself owns no engine resources; each callback receives
// the stage, physics world, and action scheduler for exactly the
// duration of the call. Tests substitute fakes for all three.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::actions::ActionScheduler;
use crate::core::physics::PhysicsWorld;
use crate::core::stage::Stage;

//=== EngineContext =======================================================

/// Mutable access to the engine collaborators for one callback.
pub struct EngineContext<'a> {
    pub stage: &'a mut dyn Stage,
    pub physics: &'a mut dyn PhysicsWorld,
    pub actions: &'a mut dyn ActionScheduler,
}

impl<'a> EngineContext<'a> {
    pub fn new(
        stage: &'a mut dyn Stage,
        physics: &'a mut dyn PhysicsWorld,
        actions: &'a mut dyn ActionScheduler,
    ) -> Self {
        Self {
            stage,
            physics,
            actions,
        }
    }
}
