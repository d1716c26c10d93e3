use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Copy the held buttons onto every human-controlled paddle
pub fn ingest_input(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.controller == Controller::Human {
            *intent = input.intent();
        }
    }
}
