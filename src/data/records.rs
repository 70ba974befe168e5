//! Dataset Records Module
//! Flat record types for the eight dashboard datasets.
//!
//! The JSON files are produced by a separate export step and are loosely
//! typed: a numeric column may arrive as a number, a string, `null`, or not
//! at all. Every field is therefore a [`Loose`] value and all numeric reads
//! go through [`Loose::as_f64`], which never yields NaN.

use serde::{Deserialize, Serialize};

/// A loosely typed JSON scalar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    /// `null` or an absent field.
    #[default]
    Missing,
    Number(f64),
    Text(String),
    /// Booleans, arrays and objects. Kept so a single odd cell never fails a record.
    Other(serde_json::Value),
}

impl Loose {
    /// Parse as a float, `None` when nothing numeric can be read.
    pub fn parse_f64(&self) -> Option<f64> {
        match self {
            Loose::Number(n) if n.is_finite() => Some(*n),
            Loose::Text(s) => parse_leading_float(s),
            _ => None,
        }
    }

    /// Parse as a float, defaulting to 0.
    pub fn as_f64(&self) -> f64 {
        self.parse_f64().unwrap_or(0.0)
    }

    /// Display text, or `None` for empty values (null, "", 0, false).
    pub fn label(&self) -> Option<String> {
        match self {
            Loose::Missing => None,
            Loose::Number(n) if *n == 0.0 || n.is_nan() => None,
            Loose::Number(n) => Some(n.to_string()),
            Loose::Text(s) if s.is_empty() => None,
            Loose::Text(s) => Some(s.clone()),
            Loose::Other(serde_json::Value::Bool(b)) => b.then(|| "true".to_string()),
            Loose::Other(serde_json::Value::Null) => None,
            Loose::Other(v) => Some(v.to_string()),
        }
    }

    /// Display text with a fallback for empty values.
    pub fn label_or(&self, fallback: &str) -> String {
        self.label().unwrap_or_else(|| fallback.to_string())
    }

    /// Exact string comparison, no coercion.
    pub fn is_text(&self, expected: &str) -> bool {
        matches!(self, Loose::Text(s) if s == expected)
    }
}

impl From<f64> for Loose {
    fn from(value: f64) -> Self {
        Loose::Number(value)
    }
}

impl From<i32> for Loose {
    fn from(value: i32) -> Self {
        Loose::Number(value as f64)
    }
}

impl From<&str> for Loose {
    fn from(value: &str) -> Self {
        Loose::Text(value.to_string())
    }
}

impl From<String> for Loose {
    fn from(value: String) -> Self {
        Loose::Text(value)
    }
}

impl<T: Into<Loose>> From<Option<T>> for Loose {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Read the longest leading decimal literal of `text`.
///
/// Accepts optional leading whitespace and sign, digits with an optional
/// fraction, and an optional exponent. Trailing garbage is ignored, so
/// `"12.5 runs"` reads as 12.5.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        mantissa_digits += frac - end - 1;
        if mantissa_digits > 0 {
            end = frac;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_digits = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits {
            end = exp;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// One row per player per season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatsmanSeasonRecord {
    pub player_name: Loose,
    pub total_runs: Loose,
    pub season_year: Loose,
}

impl BatsmanSeasonRecord {
    pub fn new(
        player_name: impl Into<Loose>,
        total_runs: impl Into<Loose>,
        season_year: impl Into<Loose>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            total_runs: total_runs.into(),
            season_year: season_year.into(),
        }
    }
}

/// Powerplay bowling economy. `avg_runs_per_ball` is the economy figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BowlerRecord {
    pub player_name: Loose,
    pub avg_runs_per_ball: Loose,
    pub total_wickets: Loose,
}

impl BowlerRecord {
    pub fn new(
        player_name: impl Into<Loose>,
        avg_runs_per_ball: impl Into<Loose>,
        total_wickets: impl Into<Loose>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            avg_runs_per_ball: avg_runs_per_ball.into(),
            total_wickets: total_wickets.into(),
        }
    }
}

/// One row per match: who won the toss and whether they won the match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TossOutcomeRecord {
    pub toss_winner: Loose,
    pub match_outcome: Loose,
}

impl TossOutcomeRecord {
    pub fn new(toss_winner: impl Into<Loose>, match_outcome: impl Into<Loose>) -> Self {
        Self {
            toss_winner: toss_winner.into(),
            match_outcome: match_outcome.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinRunsRecord {
    pub player_name: Loose,
    pub avg_runs_in_wins: Loose,
    pub innings_played: Loose,
}

impl WinRunsRecord {
    pub fn new(
        player_name: impl Into<Loose>,
        avg_runs_in_wins: impl Into<Loose>,
        innings_played: impl Into<Loose>,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            avg_runs_in_wins: avg_runs_in_wins.into(),
            innings_played: innings_played.into(),
        }
    }
}

/// Raw match row. Only counted, so the columns are kept untyped.
pub type MatchRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueScoreRecord {
    pub venue_name: Loose,
    pub average_score: Loose,
    pub highest_score: Loose,
}

impl VenueScoreRecord {
    pub fn new(
        venue_name: impl Into<Loose>,
        average_score: impl Into<Loose>,
        highest_score: impl Into<Loose>,
    ) -> Self {
        Self {
            venue_name: venue_name.into(),
            average_score: average_score.into(),
            highest_score: highest_score.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismissalRecord {
    pub out_type: Loose,
    pub frequency: Loose,
}

impl DismissalRecord {
    pub fn new(out_type: impl Into<Loose>, frequency: impl Into<Loose>) -> Self {
        Self {
            out_type: out_type.into(),
            frequency: frequency.into(),
        }
    }
}

/// Matches won by a team after winning the toss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamTossRecord {
    pub team1: Loose,
    pub wins_after_toss: Loose,
    pub matches_played: Loose,
}

impl TeamTossRecord {
    pub fn new(
        team1: impl Into<Loose>,
        wins_after_toss: impl Into<Loose>,
        matches_played: impl Into<Loose>,
    ) -> Self {
        Self {
            team1: team1.into(),
            wins_after_toss: wins_after_toss.into(),
            matches_played: matches_played.into(),
        }
    }
}
