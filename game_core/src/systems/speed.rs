use crate::{Ball, Events};
use hecs::World;

/// Compound the ball's velocity by `factor`
pub fn escalate_ball_speed(world: &mut World, factor: f32, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.increase_speed(factor);
        log::debug!("Ball speed increased to {:?}", ball.vel);
    }
    events.speed_increased = true;
}
