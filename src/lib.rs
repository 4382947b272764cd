//=========================================================================
// Verdant Dash Library Root
//
// This crate defines the public API surface of Verdant Dash, a
// single-screen endless runner whose gameplay core is engine-agnostic.
//
// Responsibilities:
// - Expose the gameplay core (`core`): session state machine, entity
//   registry, and the collaborator traits an embedding engine provides
//   (`Stage`, `PhysicsWorld`, `ActionScheduler`)
// - Keep internal modules (like `platform`) hidden from end users
// - Provide the high-level `Runtime` facade that wires the platform
//   layer, the logic thread, and the embedder's collaborators together
//
// Typical usage:
// ```no_run
// use verdant_dash::prelude::*;
// # struct MyStage;
// # impl Stage for MyStage {
// #     fn add_sprite(&mut self, _: SpriteSpec) {}
// #     fn add_label(&mut self, _: LabelSpec) {}
// #     fn set_texture(&mut self, _: EntityId, _: TextureId) {}
// #     fn set_position_x(&mut self, _: EntityId, _: f32) {}
// #     fn set_rotation(&mut self, _: EntityId, _: f32) {}
// #     fn remove_entity(&mut self, _: EntityId) {}
// #     fn remove_all(&mut self) {}
// #     fn entity_at_point(&self, _: (f32, f32)) -> Option<EntityId> { None }
// # }
// # struct MyPhysics;
// # impl PhysicsWorld for MyPhysics {
// #     fn attach_body(&mut self, _: BodyDef) {}
// #     fn remove_body(&mut self, _: EntityId) {}
// #     fn remove_all_bodies(&mut self) {}
// #     fn apply_impulse(&mut self, _: EntityId, _: (f32, f32)) {}
// #     fn set_paused(&mut self, _: bool) {}
// #     fn step(&mut self, _: f32) -> Vec<ContactPair> { Vec::new() }
// # }
//
// fn main() {
//     RuntimeBuilder::new()
//         .with_tps(60.0)
//         .build(MyStage, MyPhysics, TickScheduler::new())
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the gameplay logic and the engine-facing trait seams.
// It is exposed publicly so the session can be embedded and tested
// without the bundled runtime, but most applications will use the
// top-level `Runtime` facade plus the `prelude`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// tap collection) and is kept private, as it is not part of the
// public API surface.
//
// `runtime` defines the main entry point and initialization logic.
//
mod platform;
mod runtime;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the `Runtime` facade as the main entry point so users can
// simply `use verdant_dash::RuntimeBuilder;` without knowing the
// internal module structure.
//
pub use runtime::{Runtime, RuntimeBuilder};
