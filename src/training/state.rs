use super::outcome::Outcome;

/// Where a training run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// playing the game with this 0-based index
    Running(usize),
    Completed,
}

/// Counters for one training run. Created fresh per run and
/// handed back to the caller; nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    phase: Phase,
    total: usize,
    played: usize,
    score: i64,
}

impl RunState {
    pub fn new(total: usize) -> Self {
        Self {
            phase: Phase::Idle,
            total,
            played: 0,
            score: 0,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn played(&self) -> usize {
        self.played
    }
    /// sum of black-perspective results
    pub fn score(&self) -> i64 {
        self.score
    }
    /// percentage of configured games finished
    pub fn progress(&self) -> f32 {
        match self.total {
            0 => 100.0,
            n => self.played as f32 / n as f32 * 100.0,
        }
    }
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }
    /// the next game to play, advancing the phase; None once all are played
    pub fn next(&mut self) -> Option<usize> {
        match self.played < self.total {
            true => {
                self.phase = Phase::Running(self.played);
                Some(self.played)
            }
            false => {
                self.phase = Phase::Completed;
                None
            }
        }
    }
    pub fn finish(&mut self, outcome: Outcome) {
        self.played += 1;
        self.score += outcome.score();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn lifecycle() {
        let mut state = RunState::new(2);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.next(), Some(0));
        assert_eq!(state.phase(), Phase::Running(0));
        state.finish(Outcome::Win(Stone::White));
        assert_eq!(state.progress(), 50.0);
        assert_eq!(state.next(), Some(1));
        state.finish(Outcome::Draw);
        assert_eq!(state.next(), None);
        assert!(state.is_completed());
        assert_eq!(state.played(), 2);
        assert_eq!(state.score(), -1);
        assert_eq!(state.progress(), 100.0);
    }
}
