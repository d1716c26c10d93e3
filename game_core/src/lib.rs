pub mod components;
pub mod config;
pub mod fsm;
pub mod hud;
pub mod map;
pub mod match_loop;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use map::*;
pub use match_loop::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one deterministic rally tick
pub fn step(world: &mut World, map: &GameMap, input: &InputState, events: &mut Events) {
    // 1. Ingest input (apply to paddle intents)
    ingest_input(world, input);

    // 2. Move paddles (human by intent, AI toward the ball)
    move_paddles(world, map);

    // 3. Move ball and resolve walls, exits and paddles
    update_ball(world, map, events);
}

/// Helper to create a paddle entity, vertically centred on its side
pub fn create_paddle(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let paddle = Paddle::new(
        map.paddle_spawn(side, config),
        config.paddle_speed(side),
        side,
        controller,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, vel),))
}
