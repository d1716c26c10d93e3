use float_cmp::approx_eq;
use game_core::*;
use glam::Vec2;

fn idle() -> InputState {
    InputState::new()
}

/// Deterministic button pattern that exercises up, down, both and none
fn scripted_input(tick: u32) -> InputState {
    match (tick / 37) % 4 {
        0 => InputState {
            up: true,
            down: false,
            quit: false,
        },
        1 => InputState {
            up: false,
            down: true,
            quit: false,
        },
        2 => InputState {
            up: true,
            down: true,
            quit: false,
        },
        _ => idle(),
    }
}

#[test]
fn test_paddles_stay_in_playfield_for_whole_match() {
    let mut game = Match::new(Config::new(), 42);
    let height = game.map().height;

    for tick in 0..10_000 {
        game.tick(&scripted_input(tick));
        for side in [Side::Near, Side::Far] {
            let paddle = game.paddle(side).unwrap();
            assert!(paddle.rect.top() >= 0.0, "{:?} above playfield", side);
            assert!(paddle.rect.bottom() <= height, "{:?} below playfield", side);
        }
    }
}

#[test]
fn test_each_goal_adds_exactly_one_point() {
    let mut game = Match::new(Config::new(), 7);
    let mut goals = 0;

    for tick in 0..20_000 {
        let before = game.score();
        game.tick(&scripted_input(tick));
        let after = game.score();

        assert!(after.near >= before.near && after.far >= before.far);
        let delta = after.total() - before.total();
        assert!(delta <= 1, "At most one goal per tick");
        if delta == 1 {
            goals += 1;
            assert_eq!(game.phase(), MatchPhase::Countdown);
            assert_eq!(game.events().goal.map(|g| g.points), Some(1));
        }
    }

    assert!(goals > 0, "An unattended match should produce goals");
    assert_eq!(game.score().total(), goals);
}

#[test]
fn test_served_ball_never_stalls() {
    let mut game = Match::new(Config::new(), 3);

    for tick in 0..20_000 {
        game.tick(&scripted_input(tick));
        if game.phase() == MatchPhase::Countdown {
            let ball = game.ball().unwrap();
            assert!(ball.vel.x != 0.0 && ball.vel.y != 0.0);
            assert_eq!(ball.rect.center(), game.map().center());
        }
    }
}

#[test]
fn test_speed_escalates_on_interval_in_any_phase() {
    let config = Config {
        speed_escalation_secs: 3,
        ..Config::new()
    };
    let mut game = Match::new(config, 11);
    let base = game.ball().unwrap().vel;

    // The countdown spans exactly one escalation interval
    for _ in 0..180 {
        game.tick(&idle());
    }

    assert_eq!(game.phase(), MatchPhase::Rallying);
    assert!(game.events().speed_increased);
    let vel = game.ball().unwrap().vel;
    assert!(approx_eq!(f32, vel.x, base.x * 1.1, epsilon = 1e-4));
    assert!(approx_eq!(f32, vel.y, base.y * 1.1, epsilon = 1e-4));
}

#[test]
fn test_exit_left_scores_for_player() {
    let config = Config::new();
    let map = GameMap::from_config(&config);
    let near = Paddle::new(
        map.paddle_spawn(Side::Near, &config),
        config.near_paddle_speed,
        Side::Near,
        Controller::Human,
    );
    let far = Paddle::new(
        map.paddle_spawn(Side::Far, &config),
        config.far_paddle_speed,
        Side::Far,
        Controller::Ai,
    );
    let mut ball = Ball::new(
        Rect::new(
            Vec2::new(0.0, map.height / 2.0),
            Vec2::splat(config.ball_size),
        ),
        Vec2::new(-5.0, 0.0),
    );

    let step = ball.update(map.height, map.width, &near, &far);

    assert_eq!(
        step.goal,
        Some(Goal {
            scorer: Side::Near,
            points: 1
        })
    );
    assert_eq!(ball.vel.x, 5.0);
}

#[test]
fn test_score_text_tracks_match() {
    let mut game = Match::new(Config::new(), 19);
    assert_eq!(hud::score_text(&game.score()), "Opponent: 0 - Player: 0");

    for _ in 0..100_000 {
        if game.score().total() > 0 {
            break;
        }
        game.tick(&idle());
    }

    let score = game.score();
    assert!(score.total() > 0);
    let expected = format!("Opponent: {} - Player: {}", score.far, score.near);
    assert_eq!(hud::score_text(&score), expected);
}

#[test]
fn test_quit_mid_rally() {
    let mut game = Match::new(Config::new(), 23);
    for _ in 0..200 {
        game.tick(&idle());
    }
    assert_eq!(game.phase(), MatchPhase::Rallying);
    let frozen = game.ball().unwrap().rect.pos;

    game.quit();
    game.tick(&idle());

    assert_eq!(game.phase(), MatchPhase::Quit);
    assert_eq!(game.ball().unwrap().rect.pos, frozen);
}
