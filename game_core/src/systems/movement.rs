use crate::{Ball, GameMap, Paddle, PaddleIntent};
use hecs::World;

/// Move every paddle one tick: humans by intent, AI toward the ball centre
pub fn move_paddles(world: &mut World, map: &GameMap) {
    let ball_center = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.rect.center());

    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.update(map.height, *intent, ball_center);
    }
}
