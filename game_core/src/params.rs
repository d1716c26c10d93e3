/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 140.0;
    pub const PADDLE_INSET: f32 = 10.0; // gap between paddle and side wall
    pub const NEAR_PADDLE_SPEED: f32 = 7.0; // pixels per tick
    pub const FAR_PADDLE_SPEED: f32 = 7.0;

    // Ball
    pub const BALL_SIZE: f32 = 30.0;
    pub const BALL_SPEED: f32 = 7.0; // per axis, pixels per tick
    pub const BALL_SPEED_INCREASE: f32 = 1.1;
    pub const SPEED_ESCALATION_SECS: u32 = 10;

    // Countdown before each rally
    pub const COUNTDOWN_FROM: u32 = 3;
    pub const COUNTDOWN_DIGIT_SECS: u32 = 1;

    // HUD
    pub const LOGO_WIDTH: f32 = 50.0;
    pub const LOGO_MARGIN: f32 = 10.0;
    pub const SCORE_LINE_Y: f32 = 10.0;
    pub const SCORE_FONT_SIZE: u32 = 36;
    pub const COUNTDOWN_FONT_SIZE: u32 = 72;
    pub const DIVIDER_WIDTH: f32 = 1.0;

    // Timing
    pub const TICK_RATE: u32 = 60;
    pub const FIXED_DT: f32 = 1.0 / Self::TICK_RATE as f32;
    pub const MAX_FRAME_DT: f32 = 0.25; // Clamp to prevent catch-up bursts
}
