pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Integration uses the raw frame delta with no clamping or sub-stepping,
/// matching the update loop this models. Scoring only runs in the scored
/// variant (`config.scoring`).
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    serve: &ServeState,
    events: &mut Events,
    queue: &mut InputQueue,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, queue);

    // 2. Move ball
    move_ball(world, time);

    // 3. Resolve collisions (walls, then paddles)
    check_collisions(world, map, config, events);

    // 4. Move paddles based on intents, then AI tracking
    move_paddles(world, time, map, config);
    drive_ai_paddles(world, time, map, config);

    // 5. Horizontal exits (scored variant only)
    if config.scoring {
        check_scoring(world, map, config, score, serve, events);
    }

    time.now += time.dt;
}

/// Helper to create a keyboard-driven paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new()))
}

/// Helper to create an AI-driven paddle entity
pub fn create_ai_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), AiControlled))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
