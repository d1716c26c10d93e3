//! Heads-up display layout: score line and logo placement

use crate::{GameMap, Params, Rect, Score, Side};
use glam::Vec2;

/// Score readout, opponent (far) first
pub fn score_text(score: &Score) -> String {
    format!(
        "{}: {} - {}: {}",
        Side::Far.label(),
        score.far,
        Side::Near.label(),
        score.near
    )
}

/// Centre point of the score line
pub fn score_anchor(map: &GameMap) -> Vec2 {
    Vec2::new(map.width / 2.0, Params::SCORE_LINE_Y)
}

/// Where the logo goes: scaled to a fixed width keeping its aspect ratio,
/// bottom-right corner inset by the margin. `None` for an empty image.
pub fn logo_rect(map: &GameMap, natural_width: u32, natural_height: u32) -> Option<Rect> {
    if natural_width == 0 {
        return None;
    }
    let width = Params::LOGO_WIDTH;
    let height = (natural_height as f32 * width / natural_width as f32).floor();

    let mut rect = Rect::new(Vec2::ZERO, Vec2::new(width, height));
    rect.set_right(map.width - Params::LOGO_MARGIN);
    rect.set_bottom(map.height - Params::LOGO_MARGIN);
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Goal;

    #[test]
    fn test_score_text_format() {
        let mut score = Score::new();
        assert_eq!(score_text(&score), "Opponent: 0 - Player: 0");

        score.award(Goal {
            scorer: Side::Near,
            points: 1,
        });
        score.award(Goal {
            scorer: Side::Far,
            points: 1,
        });
        score.award(Goal {
            scorer: Side::Far,
            points: 1,
        });
        assert_eq!(score_text(&score), "Opponent: 2 - Player: 1");
    }

    #[test]
    fn test_score_anchor() {
        let map = GameMap::new(640.0, 480.0);
        assert_eq!(score_anchor(&map), Vec2::new(320.0, 10.0));
    }

    #[test]
    fn test_logo_scaled_and_anchored() {
        let map = GameMap::new(640.0, 480.0);
        let rect = logo_rect(&map, 200, 100).unwrap();
        assert_eq!(rect.size, Vec2::new(50.0, 25.0));
        assert_eq!(rect.right(), 630.0);
        assert_eq!(rect.bottom(), 470.0);
    }

    #[test]
    fn test_logo_height_truncates() {
        let map = GameMap::new(640.0, 480.0);
        let rect = logo_rect(&map, 300, 100).unwrap();
        assert_eq!(rect.size.y, 16.0, "50 * 100 / 300 = 16.67 truncates to 16");
    }

    #[test]
    fn test_empty_logo_has_no_rect() {
        let map = GameMap::new(640.0, 480.0);
        assert!(logo_rect(&map, 0, 10).is_none());
    }
}
