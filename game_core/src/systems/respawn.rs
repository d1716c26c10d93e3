use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::{Config, GameMap};

/// Serve a new rally: recentre the ball with a fresh random direction and
/// bring both paddles back to mid-height
pub fn serve(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(map, config.ball_speed, rng);
        log::debug!("Serving ball with velocity {:?}", ball.vel);
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.rect.set_center_y(map.height / 2.0);
    }
}
