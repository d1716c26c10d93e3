//! Match State Machine
//!
//! Countdown → Rallying → (goal) → Countdown → …, with Quit reachable from anywhere.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Countdown,
    Rallying,
    Quit,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    CountdownDone,
    Goal,
    Quit,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_phase: MatchPhase,
    pub to_phase: MatchPhase,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    phase: MatchPhase,
}

impl MatchFsm {
    /// Every match opens with a countdown
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Countdown,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_phase = self.phase;

        if let Some(next_phase) = self.get_next_phase(action) {
            self.phase = next_phase;
            log::info!("Match: {:?} --{:?}--> {:?}", from_phase, action, next_phase);
            TransitionResult {
                success: true,
                from_phase,
                to_phase: next_phase,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_phase,
                to_phase: from_phase,
                action,
            }
        }
    }

    fn get_next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        match (self.phase, action) {
            (MatchPhase::Countdown, MatchAction::CountdownDone) => Some(MatchPhase::Rallying),
            (MatchPhase::Countdown, MatchAction::Quit) => Some(MatchPhase::Quit),

            (MatchPhase::Rallying, MatchAction::Goal) => Some(MatchPhase::Countdown),
            (MatchPhase::Rallying, MatchAction::Quit) => Some(MatchPhase::Quit),

            // Quit is terminal
            _ => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        self.phase == MatchPhase::Quit
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
