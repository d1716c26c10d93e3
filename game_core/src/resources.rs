use crate::{Goal, PaddleIntent, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub far: u32,  // Opponent (left)
    pub near: u32, // Player (right)
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, goal: Goal) {
        match goal.scorer {
            Side::Near => self.near += goal.points,
            Side::Far => self.far += goal.points,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Near => self.near,
            Side::Far => self.far,
        }
    }

    pub fn total(&self) -> u32 {
        self.near + self.far
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub goal: Option<Goal>,
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
    pub speed_increased: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.goal = None;
        self.ball_hit_paddle = None;
        self.ball_hit_wall = false;
        self.speed_increased = false;
    }
}

/// Input sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self) -> PaddleIntent {
        PaddleIntent {
            up: self.up,
            down: self.down,
        }
    }
}

/// Pre-rally countdown, counted in ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct CountdownTimer {
    remaining: u32,   // Ticks left (0 = finished)
    digit_ticks: u32, // Ticks each digit is shown
}

impl CountdownTimer {
    pub fn new(digit_ticks: u32) -> Self {
        Self {
            remaining: 0,
            digit_ticks,
        }
    }

    pub fn start(&mut self, from: u32) {
        self.remaining = from * self.digit_ticks;
    }

    pub fn update(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Digit on screen: 3, 2, 1, then `None` once finished
    pub fn digit(&self) -> Option<u32> {
        if self.remaining == 0 || self.digit_ticks == 0 {
            None
        } else {
            Some(self.remaining.div_ceil(self.digit_ticks))
        }
    }
}

/// Fires once every `interval` ticks, whatever the match is doing
#[derive(Debug, Clone, Copy)]
pub struct EscalationTimer {
    elapsed: u32,
    interval: u32,
}

impl EscalationTimer {
    pub fn new(interval: u32) -> Self {
        Self {
            elapsed: 0,
            interval,
        }
    }

    /// Count one tick; true when the interval has elapsed (and the count restarts)
    pub fn update(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_defaults_to_fixed_tick() {
        let time = Time::default();
        assert_eq!(time.dt, crate::Params::FIXED_DT);
        assert_eq!(time.now, 0.0);
    }

    #[test]
    fn test_score_get_reads_each_side() {
        let mut score = Score::new();
        score.award(Goal {
            scorer: Side::Far,
            points: 1,
        });
        assert_eq!(score.get(Side::Far), 1);
        assert_eq!(score.get(Side::Near), 0);
    }

    #[test]
    fn test_score_award_near() {
        let mut score = Score::new();
        score.award(Goal {
            scorer: Side::Near,
            points: 1,
        });
        assert_eq!(score.near, 1);
        assert_eq!(score.far, 0);
        assert_eq!(score.get(Side::Near), 1);
    }

    #[test]
    fn test_score_award_far_accumulates() {
        let mut score = Score::new();
        for _ in 0..3 {
            score.award(Goal {
                scorer: Side::Far,
                points: 1,
            });
        }
        assert_eq!(score.far, 3);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.goal = Some(Goal {
            scorer: Side::Far,
            points: 1,
        });
        events.ball_hit_paddle = Some(Side::Near);
        events.ball_hit_wall = true;
        events.speed_increased = true;

        events.clear();

        assert!(events.goal.is_none());
        assert!(events.ball_hit_paddle.is_none());
        assert!(!events.ball_hit_wall);
        assert!(!events.speed_increased);
    }

    #[test]
    fn test_input_intent() {
        let input = InputState {
            up: true,
            down: false,
            quit: false,
        };
        assert_eq!(input.intent(), PaddleIntent { up: true, down: false });
    }

    #[test]
    fn test_countdown_digits() {
        let mut countdown = CountdownTimer::new(60);
        assert!(countdown.is_done());
        assert_eq!(countdown.digit(), None);

        countdown.start(3);
        assert_eq!(countdown.digit(), Some(3));

        for _ in 0..59 {
            countdown.update();
        }
        assert_eq!(countdown.digit(), Some(3), "Each digit lasts a full second");
        countdown.update();
        assert_eq!(countdown.digit(), Some(2));

        for _ in 0..60 {
            countdown.update();
        }
        assert_eq!(countdown.digit(), Some(1));

        for _ in 0..60 {
            countdown.update();
        }
        assert!(countdown.is_done());
        assert_eq!(countdown.digit(), None);
    }

    #[test]
    fn test_escalation_timer_fires_every_interval() {
        let mut timer = EscalationTimer::new(600);
        let fired: Vec<u32> = (1..=1800).filter(|_| timer.update()).collect();
        assert_eq!(fired.len(), 3);
    }
}
