use super::state::RunState;
use serde::Deserialize;
use serde::Serialize;

/// What a caller learns when a training run returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// 0 to 100
    pub progress: f32,
    pub games_played: usize,
    pub total_score: i64,
}

impl From<&RunState> for Report {
    fn from(state: &RunState) -> Self {
        Self {
            progress: state.progress(),
            games_played: state.played(),
            total_score: state.score(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}",
            format!("progress {:.0}%", self.progress),
            format!("games {}", self.games_played),
            format!("score {}", self.total_score),
        )
    }
}
