use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const DEFAULT_BOX_STATUS: &str = "Boxed";
pub const PARTY_STATUS: &str = "Team";

/// Labels every record found in one storage box. `key` is the 1-based box number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxMapping {
    pub key: u32,
    pub status: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectedGame {
    RS,
    Emerald,
    FRLG,
    DP,
    Platinum,
    HGSS,
}

impl SelectedGame {
    pub fn is_gba(&self) -> bool {
        matches!(
            self,
            SelectedGame::RS | SelectedGame::Emerald | SelectedGame::FRLG
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            SelectedGame::RS => "RS",
            SelectedGame::Emerald => "Emerald",
            SelectedGame::FRLG => "FRLG",
            SelectedGame::DP => "DP",
            SelectedGame::Platinum => "Platinum",
            SelectedGame::HGSS => "HGSS",
        }
    }
}

impl fmt::Display for SelectedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown game '{0}', expected one of RS, Emerald, FRLG, DP, Platinum, HGSS")]
pub struct UnknownGame(String);

impl FromStr for SelectedGame {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let game = match s.to_ascii_lowercase().as_str() {
            "rs" => SelectedGame::RS,
            "emerald" => SelectedGame::Emerald,
            "frlg" => SelectedGame::FRLG,
            "dp" => SelectedGame::DP,
            "platinum" => SelectedGame::Platinum,
            "hgss" => SelectedGame::HGSS,
            _ => return Err(UnknownGame(s.to_owned())),
        };
        Ok(game)
    }
}

/// Caller-supplied knobs for one parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    pub box_mappings: Vec<BoxMapping>,
    pub selected_game: Option<SelectedGame>,
}

impl ParserOptions {
    pub fn with_game(game: SelectedGame) -> Self {
        ParserOptions {
            selected_game: Some(game),
            ..Default::default()
        }
    }

    /// Status label for records in the 0-based `box_index`.
    pub fn status_for_box(&self, box_index: usize) -> &str {
        self.box_mappings
            .iter()
            .find(|mapping| mapping.key as usize == box_index + 1)
            .map(|mapping| mapping.status.as_str())
            .unwrap_or(DEFAULT_BOX_STATUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_labels_parse_case_insensitively() {
        assert_eq!("emerald".parse::<SelectedGame>().unwrap(), SelectedGame::Emerald);
        assert_eq!("HGSS".parse::<SelectedGame>().unwrap(), SelectedGame::HGSS);
        assert_eq!("Platinum".parse::<SelectedGame>().unwrap().to_string(), "Platinum");
        assert!("Crystal".parse::<SelectedGame>().is_err());
        assert!(SelectedGame::FRLG.is_gba());
        assert!(!SelectedGame::DP.is_gba());
    }

    #[test]
    fn box_status_lookup() {
        let options = ParserOptions {
            box_mappings: vec![BoxMapping {
                key: 3,
                status: "Dead".to_owned(),
            }],
            selected_game: None,
        };
        assert_eq!(options.status_for_box(2), "Dead");
        assert_eq!(options.status_for_box(0), DEFAULT_BOX_STATUS);
        assert_eq!(options.status_for_box(3), DEFAULT_BOX_STATUS);
    }

    #[test]
    fn options_from_json() {
        let options: ParserOptions = serde_json::from_str(
            r#"{"boxMappings":[{"key":3,"status":"Dead"}],"selectedGame":"Emerald"}"#,
        )
        .unwrap();
        assert_eq!(options.selected_game, Some(SelectedGame::Emerald));
        assert_eq!(options.status_for_box(2), "Dead");

        let empty: ParserOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ParserOptions::default());
    }
}
