use crate::{GameMap, GameRng, Rect};
use glam::Vec2;
use rand::Rng;

/// Which end of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human-controlled paddle on the right
    Near,
    /// AI paddle on the left
    Far,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Near => Side::Far,
            Side::Far => Side::Near,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Near => "Player",
            Side::Far => "Opponent",
        }
    }
}

/// Who steers a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Held buttons for a human paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub rect: Rect,
    pub speed: f32, // pixels per tick
    pub side: Side,
    pub controller: Controller,
}

impl Paddle {
    pub fn new(rect: Rect, speed: f32, side: Side, controller: Controller) -> Self {
        Self {
            rect,
            speed,
            side,
            controller,
        }
    }

    /// Advance one tick, then clamp inside `[0, playfield_height]`.
    ///
    /// An AI paddle steps one `speed` toward `ball_center` and holds still
    /// only when the centres line up exactly, so it jitters by one step
    /// around alignment. A human paddle applies each held button
    /// independently; holding both cancels out.
    pub fn update(&mut self, playfield_height: f32, intent: PaddleIntent, ball_center: Option<Vec2>) {
        match self.controller {
            Controller::Ai => {
                if let Some(ball) = ball_center {
                    let center_y = self.rect.center().y;
                    if center_y < ball.y {
                        self.rect.pos.y += self.speed;
                    } else if center_y > ball.y {
                        self.rect.pos.y -= self.speed;
                    }
                }
            }
            Controller::Human => {
                if intent.up {
                    self.rect.pos.y -= self.speed;
                }
                if intent.down {
                    self.rect.pos.y += self.speed;
                }
            }
        }

        if self.rect.top() <= 0.0 {
            self.rect.set_top(0.0);
        }
        if self.rect.bottom() >= playfield_height {
            self.rect.set_bottom(playfield_height);
        }
    }
}

/// A point awarded when the ball leaves the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub scorer: Side,
    pub points: u32,
}

/// What happened to the ball during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallStep {
    pub goal: Option<Goal>,
    pub hit_wall: bool,
    pub hit_paddle: Option<Side>,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2, // (speed_x, speed_y) in pixels per tick
}

impl Ball {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    /// Advance one tick and resolve walls, exits and paddles, in that order.
    ///
    /// Leaving through a side wall credits the paddle at the other end and
    /// skips the paddle checks for this tick.
    pub fn update(
        &mut self,
        playfield_height: f32,
        playfield_width: f32,
        near: &Paddle,
        far: &Paddle,
    ) -> BallStep {
        let mut step = BallStep::default();
        self.rect.pos += self.vel;

        // Reflect only; the ball may sit past the wall for a frame
        if self.rect.top() <= 0.0 || self.rect.bottom() >= playfield_height {
            self.vel.y = -self.vel.y;
            step.hit_wall = true;
        }

        if self.rect.left() <= 0.0 {
            self.vel.x = -self.vel.x;
            step.goal = Some(Goal {
                scorer: far.side.opponent(),
                points: 1,
            });
            return step;
        }
        if self.rect.right() >= playfield_width {
            self.vel.x = -self.vel.x;
            step.goal = Some(Goal {
                scorer: near.side.opponent(),
                points: 1,
            });
            return step;
        }

        if self.rect.intersects(&near.rect) {
            self.vel.x = -self.vel.x;
            if self.rect.right() > near.rect.left() {
                self.rect.set_right(near.rect.left());
            }
            step.hit_paddle = Some(near.side);
        }
        if self.rect.intersects(&far.rect) {
            self.vel.x = -self.vel.x;
            if self.rect.left() < far.rect.right() {
                self.rect.set_left(far.rect.right());
            }
            step.hit_paddle = Some(far.side);
        }

        step
    }

    /// Compound both velocity components by `factor`; no upper bound
    pub fn increase_speed(&mut self, factor: f32) {
        self.vel *= factor;
    }

    /// Recentre with `base_speed` on each axis and an independent random sign per axis
    pub fn reset(&mut self, map: &GameMap, base_speed: f32, rng: &mut GameRng) {
        self.rect.set_center(map.center());
        let sign_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sign_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(base_speed * sign_x, base_speed * sign_y);
    }
}
