use crate::constants::{EAST_TABLE_ID, WEST_TABLE_ID};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two standings groupings on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    East,
    West,
}

impl Conference {
    /// Discovery order: East first, West second.
    pub const ALL: [Conference; 2] = [Conference::East, Conference::West];

    pub fn table_id(self) -> &'static str {
        match self {
            Conference::East => EAST_TABLE_ID,
            Conference::West => WEST_TABLE_ID,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Conference::East => "Eastern Conference",
            Conference::West => "Western Conference",
        }
    }
}

/// A team's standings line, kept as the text rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: String,
    pub wins: String,
    pub losses: String,
}

impl StandingsRow {
    pub fn new(team: impl Into<String>, wins: impl Into<String>, losses: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            wins: wins.into(),
            losses: losses.into(),
        }
    }
}

impl fmt::Display for StandingsRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team: {} Wins: {} Losses: {}", self.team, self.wins, self.losses)
    }
}

/// Rows of one conference table, in document order.
pub type ConferenceTable = Vec<StandingsRow>;

/// Named view over the (East, West) pair for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub east: ConferenceTable,
    pub west: ConferenceTable,
}

impl Standings {
    pub fn table(&self, conference: Conference) -> &ConferenceTable {
        match conference {
            Conference::East => &self.east,
            Conference::West => &self.west,
        }
    }
}

impl From<(ConferenceTable, ConferenceTable)> for Standings {
    fn from((east, west): (ConferenceTable, ConferenceTable)) -> Self {
        Self { east, west }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_display_matches_line_format() {
        let row = StandingsRow::new("Celtics", "60", "22");
        assert_eq!(row.to_string(), "Team: Celtics Wins: 60 Losses: 22");
    }

    #[test]
    fn test_conference_order_and_ids() {
        assert_eq!(Conference::ALL, [Conference::East, Conference::West]);
        assert_eq!(Conference::East.table_id(), "confs_standings_E");
        assert_eq!(Conference::West.table_id(), "confs_standings_W");
    }

    #[test]
    fn test_standings_from_pair_keeps_east_first() {
        let east = vec![StandingsRow::new("Celtics", "60", "22")];
        let west = vec![StandingsRow::new("Nuggets", "55", "27")];
        let standings = Standings::from((east.clone(), west.clone()));
        assert_eq!(standings.table(Conference::East), &east);
        assert_eq!(standings.table(Conference::West), &west);
    }
}
