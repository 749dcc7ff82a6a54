use serde::{Deserialize, Serialize};

use crate::game::{Outcome, PlayerId};
use crate::simulation::playout::GameResult;

/// Totals over a batch of self-play games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    /// Draws that were reached by a lockup rather than right after a play
    pub blocked: usize,
    pub unfinished: usize,
    pub avg_turns: f64,
    pub avg_plays: f64,
    pub avg_draws: f64,
}

impl SimulationStats {
    pub fn rate(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }
}

/// Aggregate results from multiple games
pub fn aggregate_results(results: &[GameResult]) -> SimulationStats {
    let mut stats = SimulationStats {
        games: results.len(),
        ..Default::default()
    };

    if results.is_empty() {
        return stats;
    }

    let mut total_turns = 0u64;
    let mut total_plays = 0u64;
    let mut total_draws = 0u64;

    for result in results {
        match result.outcome {
            Some(Outcome::Win(PlayerId::One)) => stats.player_one_wins += 1,
            Some(Outcome::Win(PlayerId::Two)) => stats.player_two_wins += 1,
            Some(Outcome::Draw) => stats.draws += 1,
            None => stats.unfinished += 1,
        }
        if result.blocked {
            stats.blocked += 1;
        }
        total_turns += result.turns as u64;
        total_plays += result.plays as u64;
        total_draws += result.draws as u64;
    }

    let n = results.len() as f64;
    stats.avg_turns = total_turns as f64 / n;
    stats.avg_plays = total_plays as f64 / n;
    stats.avg_draws = total_draws as f64 / n;

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: Option<Outcome>, turns: u32, blocked: bool) -> GameResult {
        GameResult {
            seed: 0,
            outcome,
            turns,
            plays: turns,
            draws: 2,
            blocked,
        }
    }

    #[test]
    fn test_empty_batch() {
        let stats = aggregate_results(&[]);
        assert_eq!(stats.games, 0);
        assert_eq!(stats.rate(0), 0.0);
    }

    #[test]
    fn test_counts_outcomes() {
        let results = vec![
            result(Some(Outcome::Win(PlayerId::One)), 10, false),
            result(Some(Outcome::Win(PlayerId::One)), 12, false),
            result(Some(Outcome::Win(PlayerId::Two)), 14, false),
            result(Some(Outcome::Draw), 20, true),
        ];
        let stats = aggregate_results(&results);

        assert_eq!(stats.games, 4);
        assert_eq!(stats.player_one_wins, 2);
        assert_eq!(stats.player_two_wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.unfinished, 0);
        assert!((stats.avg_turns - 14.0).abs() < 1e-9);
        assert!((stats.avg_draws - 2.0).abs() < 1e-9);
        assert!((stats.rate(stats.player_one_wins) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_unfinished_games() {
        let stats = aggregate_results(&[result(None, 200, false)]);
        assert_eq!(stats.unfinished, 1);
    }
}
