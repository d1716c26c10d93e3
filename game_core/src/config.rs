use crate::params::Params;
use crate::Side;

/// An sRGB colour as 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);

    /// Linear-light RGBA, for writing into an sRGB render target
    pub fn to_linear(self) -> [f32; 4] {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.0), channel(self.1), channel(self.2), 1.0]
    }

    /// CSS colour string, e.g. `rgb(255, 0, 0)`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub near_paddle_speed: f32,
    pub far_paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_speed_increase: f32,
    pub speed_escalation_secs: u32,
    pub countdown_from: u32,
    pub countdown_digit_secs: u32,
    pub near_color: Rgb,
    pub far_color: Rgb,
    pub ball_color: Rgb,
    pub background_color: Rgb,
    pub foreground_color: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            near_paddle_speed: Params::NEAR_PADDLE_SPEED,
            far_paddle_speed: Params::FAR_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            speed_escalation_secs: Params::SPEED_ESCALATION_SECS,
            countdown_from: Params::COUNTDOWN_FROM,
            countdown_digit_secs: Params::COUNTDOWN_DIGIT_SECS,
            near_color: Rgb::RED,
            far_color: Rgb::GREEN,
            ball_color: Rgb::BLUE,
            background_color: Rgb::WHITE,
            foreground_color: Rgb::BLACK,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge X for a paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Far => self.paddle_inset,
            Side::Near => self.screen_width - self.paddle_inset - self.paddle_width,
        }
    }

    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Near => self.near_paddle_speed,
            Side::Far => self.far_paddle_speed,
        }
    }

    pub fn paddle_color(&self, side: Side) -> Rgb {
        match side {
            Side::Near => self.near_color,
            Side::Far => self.far_color,
        }
    }

    /// Ticks between two ball speed escalations
    pub fn escalation_interval_ticks(&self) -> u32 {
        self.speed_escalation_secs * Params::TICK_RATE
    }

    /// Ticks each countdown digit stays on screen
    pub fn countdown_digit_ticks(&self) -> u32 {
        self.countdown_digit_secs * Params::TICK_RATE
    }
}
