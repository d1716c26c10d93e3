use crate::{Goal, Score};

/// Credit a goal to its scorer
pub fn award_goal(score: &mut Score, goal: Goal) {
    score.award(goal);
    log::info!(
        "{} scores ({}): Opponent {} - Player {}",
        goal.scorer.label(),
        score.get(goal.scorer),
        score.far,
        score.near
    );
}
