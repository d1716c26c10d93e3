use crate::{Ball, Events, GameMap, Paddle, Side};
use hecs::World;

/// Advance the ball one tick against the walls and both paddles.
///
/// Records contacts and any goal in `events`; the score itself is left to the caller.
pub fn update_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    // Copy the paddles out first so the ball can be borrowed mutably
    let mut near = None;
    let mut far = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Near => near = Some(*paddle),
            Side::Far => far = Some(*paddle),
        }
    }

    let (Some(near), Some(far)) = (near, far) else {
        return; // Both paddles are needed to resolve a tick
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let step = ball.update(map.height, map.width, &near, &far);

        if step.hit_wall {
            events.ball_hit_wall = true;
            log::debug!("Ball hit wall at {:?}", ball.rect.pos);
        }
        if let Some(side) = step.hit_paddle {
            events.ball_hit_paddle = Some(side);
            log::debug!("Ball hit {:?} paddle", side);
        }
        if step.goal.is_some() {
            events.goal = step.goal;
        }
    }
}
