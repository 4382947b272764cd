//=========================================================================
// Game Session
//=========================================================================
//
// The runner's gameplay state machine.
//
// Architecture:
//   GameSession
//     ├─ registry: EntityRegistry     (stable ids for scene entities)
//     ├─ health / hearts              (counter + indicator row)
//     ├─ spawner: SnakeSpawner        (uniform spawn positions)
//     └─ state: Running | GameOver
//
// Flow:
//   driver callback → handler method → commands on EngineContext
//
// The session holds no engine resources. Every handler receives the
// collaborators for the duration of the call, issues commands (place
// sprite, attach body, run animation), and updates its own counters.
// That keeps the whole state machine unit-testable against fakes.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::actions::TimerTag;
use crate::core::category::{Category, CategoryMask};
use crate::core::context::EngineContext;
use crate::core::entity::{EntityId, EntityKind, EntityRegistry};
use crate::core::health::{heart_texture, Health};
use crate::core::input::TouchPoint;
use crate::core::physics::{BodyDef, ContactPair};
use crate::core::spawner::SnakeSpawner;
use crate::core::stage::{textures, LabelSpec, SpriteSpec};

//=== Module Declarations =================================================

mod config;

//=== Public API ==========================================================

pub use config::SessionConfig;

//=== UI Constants ========================================================

const GAME_OVER_TEXT: &str = "Game Over";
const RESTART_TEXT: &str = "Restart";
const GAME_OVER_FONT_SIZE: f32 = 45.0;
const RESTART_FONT_SIZE: f32 = 30.0;
const GAME_OVER_Y_OFFSET: f32 = -200.0;
const RESTART_Y_OFFSET: f32 = -260.0;
const PLAYER_Z: i32 = 1;
const UI_Z: i32 = 10;

//=== SessionState ========================================================

/// The session's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Normal play: spawning, physics, and input all live.
    Running,

    /// Simulation paused, game-over UI shown. Terminal until restart.
    GameOver,
}

//=== GameSession =========================================================

/// Owns player, health, and obstacle state, and reacts to engine
/// callbacks delivered by the driver.
///
/// # Lifecycle
///
/// 1. `on_presented` builds the scene and enters [`SessionState::Running`]
/// 2. Per frame: `on_update` (after contacts/touches/action events)
/// 3. Health below 1 transitions to [`SessionState::GameOver`]
/// 4. A tap on the restart label rebuilds the scene from scratch
pub struct GameSession {
    config: SessionConfig,
    registry: EntityRegistry,
    spawner: SnakeSpawner,
    state: SessionState,
    health: Health,
    can_jump: bool,

    player: Option<EntityId>,
    hearts: Vec<EntityId>,
}

impl GameSession {
    //--- Construction -----------------------------------------------------

    /// Creates a session from its configuration. The scene is not
    /// built until [`GameSession::on_presented`] runs.
    pub fn new(config: SessionConfig) -> Self {
        let spawner = match config.rng_seed {
            Some(seed) => SnakeSpawner::seeded(config.spawn_x_lowest, config.spawn_x_highest, seed),
            None => SnakeSpawner::new(config.spawn_x_lowest, config.spawn_x_highest),
        };
        let health = Health::new(config.max_health);

        Self {
            config,
            registry: EntityRegistry::new(),
            spawner,
            state: SessionState::Running,
            health,
            can_jump: true,
            player: None,
            hearts: Vec::new(),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn health(&self) -> i32 {
        self.health.current()
    }

    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    /// Number of live obstacles.
    pub fn snake_count(&self) -> usize {
        self.registry.count_of(EntityKind::Snake)
    }

    //--- Lifecycle Hooks --------------------------------------------------

    /// Called once when the scene becomes visible.
    pub fn on_presented(&mut self, ctx: &mut EngineContext<'_>) {
        info!("Session presented");
        self.setup_scene(ctx);
    }

    /// Called once per rendered frame, after events were dispatched.
    ///
    /// Pins the player upright at the horizontal center, refreshes the
    /// heart row, and performs the game-over transition when health
    /// has dropped below 1. The transition fires at most once: it is
    /// gated on [`SessionState::Running`].
    pub fn on_update(&mut self, _now: f64, ctx: &mut EngineContext<'_>) {
        let Some(player) = self.player else {
            return;
        };

        // The player never tumbles or drifts; the world moves instead.
        ctx.stage.set_rotation(player, 0.0);
        ctx.stage.set_position_x(player, self.config.frame.mid_x());

        self.refresh_hearts(ctx);

        if self.state == SessionState::Running && self.health.is_depleted() {
            self.game_over(ctx);
        }
    }

    //--- Input ------------------------------------------------------------

    /// Called for each batch of touch-begin events.
    ///
    /// A tap resolving to the restart label while in game over
    /// restarts the session. Any other tap is a jump request, honored
    /// only while `can_jump` is set; there is no queuing or buffering.
    pub fn on_touches_began(&mut self, touches: &[TouchPoint], ctx: &mut EngineContext<'_>) {
        for touch in touches {
            let hit = ctx
                .stage
                .entity_at_point(touch.position())
                .and_then(|id| self.registry.kind(id));

            if hit == Some(EntityKind::RestartLabel) && self.state == SessionState::GameOver {
                self.restart(ctx);
                continue;
            }

            if self.can_jump {
                self.jump(ctx);
            }
        }
    }

    fn jump(&mut self, ctx: &mut EngineContext<'_>) {
        let Some(player) = self.player else {
            return;
        };

        ctx.physics.apply_impulse(player, self.config.jump_impulse);
        ctx.actions.cancel_entity_actions(player);
        ctx.stage.set_texture(player, textures::JUMP);
        self.can_jump = false;
        debug!("Player jumped");
    }

    //--- Contacts ---------------------------------------------------------

    /// Called for each contact-begin report from the physics world.
    ///
    /// Floor+player (either slot order) is the sole landing-detection
    /// mechanism. Player+snake (either order) costs one health point.
    /// Reports with unresolved or stale entity references are ignored.
    pub fn on_contact_begin(&mut self, contact: ContactPair, ctx: &mut EngineContext<'_>) {
        let (Some(a), Some(b)) = (contact.a, contact.b) else {
            trace!("Ignoring contact with missing body reference");
            return;
        };
        let (Some(kind_a), Some(kind_b)) = (self.registry.kind(a), self.registry.kind(b)) else {
            trace!("Ignoring contact with stale entity id");
            return;
        };

        if Self::is_pair(kind_a, kind_b, EntityKind::Floor, EntityKind::Player) {
            self.land(ctx);
        } else if Self::is_pair(kind_a, kind_b, EntityKind::Player, EntityKind::Snake) {
            self.health.damage();
            self.refresh_hearts(ctx);
        }
    }

    fn is_pair(a: EntityKind, b: EntityKind, x: EntityKind, y: EntityKind) -> bool {
        (a == x && b == y) || (a == y && b == x)
    }

    fn land(&mut self, ctx: &mut EngineContext<'_>) {
        let Some(player) = self.player else {
            return;
        };

        ctx.actions.run_animation(
            player,
            textures::RUN_FRAMES.to_vec(),
            self.config.run_seconds_per_frame,
        );
        self.can_jump = true;
        debug!("Player landed");
    }

    //--- Timers & Actions -------------------------------------------------

    /// Called when a session-scoped timer fires.
    pub fn on_timer(&mut self, tag: TimerTag, ctx: &mut EngineContext<'_>) {
        match tag {
            TimerTag::SpawnSnake => {
                // The timer is canceled at game over; this guard also
                // covers embedder schedulers that fire late.
                if self.state != SessionState::Running {
                    return;
                }
                self.spawn_snake(ctx);
            }
        }
    }

    /// Called when a scheduled translation covered its full distance.
    ///
    /// An obstacle at its travel limit self-destroys; anything else is
    /// ignored.
    pub fn on_movement_finished(&mut self, entity: EntityId, ctx: &mut EngineContext<'_>) {
        if self.registry.kind(entity) != Some(EntityKind::Snake) {
            return;
        }

        ctx.stage.remove_entity(entity);
        ctx.physics.remove_body(entity);
        self.registry.remove(entity);
        trace!("Snake {} reached its travel limit", entity);
    }

    //--- Scene Construction -----------------------------------------------

    fn setup_scene(&mut self, ctx: &mut EngineContext<'_>) {
        let frame = self.config.frame;

        // Static floor collider spanning the bottom edge.
        let floor = self.registry.allocate(EntityKind::Floor);
        ctx.stage.add_sprite(SpriteSpec {
            entity: floor,
            texture: None,
            size: self.config.floor_size(),
            position: (frame.mid_x(), frame.min_y),
            z: 0,
        });
        ctx.physics.attach_body(BodyDef {
            entity: floor,
            size: self.config.floor_size(),
            position: (frame.mid_x(), frame.min_y),
            dynamic: false,
            affected_by_gravity: false,
            restitution: 0.0,
            category: Category::Floor,
            contact_test: CategoryMask::NONE,
        });

        // Heart row, left to right from the anchor.
        self.hearts.clear();
        for index in 0..self.config.max_health as usize {
            let heart = self.registry.allocate(EntityKind::Heart(index as u8));
            ctx.stage.add_sprite(SpriteSpec {
                entity: heart,
                texture: Some(textures::HEART_FULL),
                size: self.config.heart_size,
                position: self.config.heart_position(index),
                z: 0,
            });
            self.hearts.push(heart);
        }

        // The player, with a collider slightly shorter than the sprite.
        let player = self.registry.allocate(EntityKind::Player);
        ctx.stage.add_sprite(SpriteSpec {
            entity: player,
            texture: Some(textures::RUN_FRAMES[0]),
            size: self.config.player_size,
            position: (frame.mid_x(), frame.mid_y()),
            z: PLAYER_Z,
        });
        ctx.physics.attach_body(BodyDef {
            entity: player,
            size: self.config.player_collider_size(),
            position: (frame.mid_x(), frame.mid_y()),
            dynamic: true,
            affected_by_gravity: true,
            restitution: self.config.player_restitution,
            category: Category::Player,
            contact_test: CategoryMask::of(Category::Floor).with(Category::Snake),
        });
        ctx.actions.run_animation(
            player,
            textures::RUN_FRAMES.to_vec(),
            self.config.run_seconds_per_frame,
        );
        self.player = Some(player);

        // Obstacle spawning.
        ctx.actions
            .schedule_repeating(TimerTag::SpawnSnake, self.config.spawn_period);

        self.state = SessionState::Running;
        debug!(
            "Scene ready: {} entities, spawn every {}s",
            self.registry.len(),
            self.config.spawn_period
        );
    }

    fn spawn_snake(&mut self, ctx: &mut EngineContext<'_>) {
        let x = self.spawner.next_x();
        let y = self.config.frame.mid_y();

        let snake = self.registry.allocate(EntityKind::Snake);
        ctx.stage.add_sprite(SpriteSpec {
            entity: snake,
            texture: Some(textures::SNAKE),
            size: self.config.snake_size,
            position: (x, y),
            z: 0,
        });
        ctx.physics.attach_body(BodyDef {
            entity: snake,
            size: self.config.snake_size,
            position: (x, y),
            dynamic: true,
            affected_by_gravity: true,
            restitution: 0.0,
            category: Category::Snake,
            contact_test: CategoryMask::NONE,
        });
        ctx.actions.run_move_by(
            snake,
            self.config.snake_travel,
            self.config.snake_travel_seconds,
        );

        debug!("Snake {} spawned at x={}", snake, x);
    }

    //--- Transitions ------------------------------------------------------

    fn game_over(&mut self, ctx: &mut EngineContext<'_>) {
        info!("Game over");

        ctx.actions.cancel_session_actions();
        ctx.actions.set_paused(true);
        ctx.physics.set_paused(true);

        let frame = self.config.frame;

        let message = self.registry.allocate(EntityKind::GameOverLabel);
        ctx.stage.add_label(LabelSpec {
            entity: message,
            text: GAME_OVER_TEXT.to_string(),
            font_size: GAME_OVER_FONT_SIZE,
            position: (frame.mid_x(), frame.mid_y() + GAME_OVER_Y_OFFSET),
            z: UI_Z,
        });

        let restart = self.registry.allocate(EntityKind::RestartLabel);
        ctx.stage.add_label(LabelSpec {
            entity: restart,
            text: RESTART_TEXT.to_string(),
            font_size: RESTART_FONT_SIZE,
            position: (frame.mid_x(), frame.mid_y() + RESTART_Y_OFFSET),
            z: UI_Z,
        });

        self.state = SessionState::GameOver;
    }

    fn restart(&mut self, ctx: &mut EngineContext<'_>) {
        info!("Session restarted");

        self.health.reset();

        ctx.stage.remove_all();
        ctx.physics.remove_all_bodies();
        ctx.actions.cancel_all();
        self.registry.clear();
        self.player = None;
        self.hearts.clear();

        self.setup_scene(ctx);

        ctx.physics.set_paused(false);
        ctx.actions.set_paused(false);
        self.can_jump = true;
    }

    //--- Presentation -----------------------------------------------------

    /// Reapplies the heart-row rule. Idempotent; runs every frame and
    /// immediately after each health change.
    fn refresh_hearts(&mut self, ctx: &mut EngineContext<'_>) {
        for (index, &heart) in self.hearts.iter().enumerate() {
            ctx.stage
                .set_texture(heart, heart_texture(index, self.health.current()));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
