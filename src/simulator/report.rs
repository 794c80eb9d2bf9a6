//! Aggregated simulation results.

use serde::Serialize;

/// Outcome of a single simulated session.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub won: bool,
    pub lost: bool,
    pub timed_out: bool,
    pub commands: u64,
    pub turns: u32,
    pub pages_collected: usize,
    pub hostiles_destroyed: u32,
}

/// Aggregated results from a simulation batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub wins: u32,
    pub losses: u32,
    pub timeouts: u32,
    pub win_rate: f64,
    pub avg_commands: f64,
    pub avg_turns: f64,
    pub avg_pages_collected: f64,
    pub avg_hostiles_destroyed: f64,
    /// Average movement turns among winning runs only.
    pub avg_turns_to_win: f64,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = (num_runs as f64).max(1.0);

        let wins = runs.iter().filter(|r| r.won).count() as u32;
        let losses = runs.iter().filter(|r| r.lost).count() as u32;
        let timeouts = runs.iter().filter(|r| r.timed_out).count() as u32;

        let avg_commands = runs.iter().map(|r| r.commands as f64).sum::<f64>() / denom;
        let avg_turns = runs.iter().map(|r| r.turns as f64).sum::<f64>() / denom;
        let avg_pages_collected =
            runs.iter().map(|r| r.pages_collected as f64).sum::<f64>() / denom;
        let avg_hostiles_destroyed =
            runs.iter().map(|r| r.hostiles_destroyed as f64).sum::<f64>() / denom;
        let avg_turns_to_win = runs
            .iter()
            .filter(|r| r.won)
            .map(|r| r.turns as f64)
            .sum::<f64>()
            / (wins as f64).max(1.0);

        Self {
            num_runs,
            wins,
            losses,
            timeouts,
            win_rate: wins as f64 / denom,
            avg_commands,
            avg_turns,
            avg_pages_collected,
            avg_hostiles_destroyed,
            avg_turns_to_win,
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str("=== RESULTS ===\n");
        text.push_str(&format!("Runs:               {}\n", self.num_runs));
        text.push_str(&format!(
            "Won:                {} ({:.1}%)\n",
            self.wins,
            self.win_rate * 100.0
        ));
        text.push_str(&format!("Lost:               {}\n", self.losses));
        text.push_str(&format!("Timed out:          {}\n", self.timeouts));
        text.push_str(&format!("Avg commands:       {:.1}\n", self.avg_commands));
        text.push_str(&format!("Avg turns:          {:.1}\n", self.avg_turns));
        text.push_str(&format!(
            "Avg pages found:    {:.2}/11\n",
            self.avg_pages_collected
        ));
        text.push_str(&format!(
            "Avg bots destroyed: {:.2}\n",
            self.avg_hostiles_destroyed
        ));
        if self.wins > 0 {
            text.push_str(&format!(
                "Avg turns to win:   {:.1}\n",
                self.avg_turns_to_win
            ));
        }
        text
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(won: bool, lost: bool, turns: u32, pages: usize) -> RunStats {
        RunStats {
            won,
            lost,
            timed_out: !won && !lost,
            commands: turns as u64 * 2,
            turns,
            pages_collected: pages,
            hostiles_destroyed: 3,
        }
    }

    #[test]
    fn test_report_aggregates() {
        let report = SimReport::from_runs(vec![
            run(true, false, 30, 11),
            run(false, true, 50, 4),
            run(false, false, 80, 7),
            run(true, false, 40, 11),
        ]);

        assert_eq!(report.num_runs, 4);
        assert_eq!(report.wins, 2);
        assert_eq!(report.losses, 1);
        assert_eq!(report.timeouts, 1);
        assert!((report.win_rate - 0.5).abs() < 1e-9);
        assert!((report.avg_turns - 50.0).abs() < 1e-9);
        assert!((report.avg_turns_to_win - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.win_rate, 0.0);
        assert_eq!(report.avg_turns, 0.0);
    }

    #[test]
    fn test_json_round_trips_structurally() {
        let report = SimReport::from_runs(vec![run(true, false, 25, 11)]);
        let json = report.to_json();
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["num_runs"], 1);
        assert_eq!(value["wins"], 1);
        assert_eq!(value["runs"][0]["pages_collected"], 11);
    }
}
