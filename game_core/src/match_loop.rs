//! Match loop: owns the world and drives it tick by tick

use crate::systems::{award_goal, escalate_ball_speed, serve};
use crate::*;
use hecs::{Entity, World};

/// A single-player match: a human paddle against the AI, first serve included
pub struct Match {
    world: World,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    time: Time,
    fsm: MatchFsm,
    countdown: CountdownTimer,
    escalation: EscalationTimer,
    accumulator: f32, // Wall-clock time not yet consumed by ticks
    ball: Entity,
    near: Entity,
    far: Entity,
}

impl Match {
    pub fn new(config: Config, seed: u64) -> Self {
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let rng = GameRng::new(seed);

        let near = create_paddle(&mut world, &map, &config, Side::Near, Controller::Human);
        let far = create_paddle(&mut world, &map, &config, Side::Far, Controller::Ai);
        let ball = create_ball(&mut world, map.ball_spawn(config.ball_size), glam::Vec2::ZERO);

        let countdown = CountdownTimer::new(config.countdown_digit_ticks());
        let escalation = EscalationTimer::new(config.escalation_interval_ticks());

        let mut game = Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            time: Time::default(),
            fsm: MatchFsm::new(),
            countdown,
            escalation,
            accumulator: 0.0,
            ball,
            near,
            far,
        };
        game.serve();
        log::info!("Match created ({}x{})", game.map.width, game.map.height);
        game
    }

    /// Feed wall-clock time; runs as many fixed ticks as it covers and
    /// returns how many ran
    pub fn advance(&mut self, elapsed: f32, input: &InputState) -> u32 {
        self.accumulator += elapsed.clamp(0.0, Params::MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= Params::FIXED_DT && !self.fsm.is_quit() {
            self.accumulator -= Params::FIXED_DT;
            self.tick(input);
            ticks += 1;
        }
        ticks
    }

    /// Run exactly one fixed tick
    pub fn tick(&mut self, input: &InputState) {
        if self.fsm.is_quit() {
            return;
        }
        if input.quit {
            self.quit();
            return;
        }

        self.events.clear();

        match self.fsm.phase() {
            MatchPhase::Countdown => {
                self.countdown.update();
                if self.countdown.is_done() {
                    self.fsm.transition(MatchAction::CountdownDone);
                }
            }
            MatchPhase::Rallying => {
                step(&mut self.world, &self.map, input, &mut self.events);
                if let Some(goal) = self.events.goal {
                    award_goal(&mut self.score, goal);
                    self.serve();
                    self.fsm.transition(MatchAction::Goal);
                }
            }
            MatchPhase::Quit => return,
        }

        // Runs in every phase, independent of goals
        if self.escalation.update() {
            escalate_ball_speed(
                &mut self.world,
                self.config.ball_speed_increase,
                &mut self.events,
            );
        }

        self.time.now += self.time.dt;
    }

    /// External close request; terminal
    pub fn quit(&mut self) {
        if self.fsm.transition(MatchAction::Quit).success {
            log::info!(
                "Match quit after {:.1}s at Opponent {} - Player {}",
                self.time.now,
                self.score.far,
                self.score.near
            );
        }
    }

    fn serve(&mut self) {
        serve(&mut self.world, &self.map, &self.config, &mut self.rng);
        self.countdown.start(self.config.countdown_from);
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    pub fn is_over(&self) -> bool {
        self.fsm.is_quit()
    }

    /// Digit to display while counting down
    pub fn countdown_digit(&self) -> Option<u32> {
        match self.fsm.phase() {
            MatchPhase::Countdown => self.countdown.digit(),
            _ => None,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = self.paddle_entity(side);
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }

    pub fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Near => self.near,
            Side::Far => self.far,
        }
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown_ticks(config: &Config) -> u32 {
        config.countdown_from * config.countdown_digit_ticks()
    }

    fn skip_countdown(game: &mut Match) {
        let input = InputState::new();
        for _ in 0..countdown_ticks(game.config()) {
            game.tick(&input);
        }
        assert_eq!(game.phase(), MatchPhase::Rallying);
    }

    #[test]
    fn test_new_match_starts_with_countdown() {
        let game = Match::new(Config::new(), 1);
        assert_eq!(game.phase(), MatchPhase::Countdown);
        assert_eq!(game.countdown_digit(), Some(3));
        assert_eq!(game.score(), Score::new());

        let ball = game.ball().unwrap();
        assert_eq!(ball.rect.center(), game.map().center());
        assert_eq!(ball.vel.x.abs(), 7.0);
        assert_eq!(ball.vel.y.abs(), 7.0);
    }

    #[test]
    fn test_countdown_freezes_motion() {
        let mut game = Match::new(Config::new(), 2);
        let before = game.ball().unwrap().rect.pos;
        let paddle_before = game.paddle(Side::Near).unwrap().rect.pos;
        let input = InputState {
            up: true,
            down: false,
            quit: false,
        };

        for _ in 0..countdown_ticks(game.config()) - 1 {
            game.tick(&input);
        }

        assert_eq!(game.phase(), MatchPhase::Countdown);
        assert_eq!(game.countdown_digit(), Some(1));
        assert_eq!(game.ball().unwrap().rect.pos, before);
        assert_eq!(game.paddle(Side::Near).unwrap().rect.pos, paddle_before);
    }

    #[test]
    fn test_countdown_lasts_three_seconds() {
        let mut game = Match::new(Config::new(), 3);
        skip_countdown(&mut game);
        assert_eq!(game.countdown_digit(), None);
        assert!((game.time().now - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_rally_moves_ball() {
        let mut game = Match::new(Config::new(), 4);
        skip_countdown(&mut game);
        let before = game.ball().unwrap();

        game.tick(&InputState::new());

        let after = game.ball().unwrap();
        assert_eq!(after.rect.pos, before.rect.pos + before.vel);
    }

    #[test]
    fn test_goal_scores_and_restarts_countdown() {
        let mut game = Match::new(Config::new(), 5);
        skip_countdown(&mut game);
        let ball = game.ball_entity();
        {
            let mut ball = game.world_mut().get::<&mut Ball>(ball).unwrap();
            ball.rect.set_left(3.0);
            ball.vel = glam::Vec2::new(-5.0, 0.0);
        }

        game.tick(&InputState::new());

        assert_eq!(game.score().near, 1);
        assert_eq!(game.score().far, 0);
        assert_eq!(game.phase(), MatchPhase::Countdown);
        assert_eq!(game.countdown_digit(), Some(3));
        assert_eq!(game.ball().unwrap().rect.center(), game.map().center());
        for side in [Side::Near, Side::Far] {
            assert_eq!(game.paddle(side).unwrap().rect.center().y, 240.0);
        }
    }

    #[test]
    fn test_quit_input_ends_match() {
        let mut game = Match::new(Config::new(), 6);
        let quit = InputState {
            up: false,
            down: false,
            quit: true,
        };

        game.tick(&quit);

        assert!(game.is_over());
        assert_eq!(game.countdown_digit(), None);
        assert_eq!(game.advance(1.0, &InputState::new()), 0, "No ticks after quit");
    }

    #[test]
    fn test_advance_runs_whole_ticks() {
        let mut game = Match::new(Config::new(), 7);
        let ticks = game.advance(Params::FIXED_DT * 3.5, &InputState::new());
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_advance_clamps_long_frames() {
        let mut game = Match::new(Config::new(), 8);
        let ticks = game.advance(30.0, &InputState::new());
        assert!(ticks <= 15, "Long pause must not cause a burst, ran {}", ticks);
        assert!(ticks >= 14);
    }
}
