use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use pksav::{gen3::is_gen3_length, BoxMapping, ParseResult, ParserOptions, SelectedGame};

#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    #[arg(short, long)]
    pub sav: PathBuf,
    /// RS, Emerald, FRLG, DP, Platinum or HGSS
    #[arg(short, long)]
    pub game: Option<SelectedGame>,
    /// Label for a box, as BOX=LABEL with 1-based box numbers. Repeatable.
    #[arg(long = "box-status", value_parser = parse_box_mapping)]
    pub box_status: Vec<BoxMapping>,
    /// JSON file holding parser options; flags above take precedence.
    #[arg(long)]
    pub options: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generation {
    Gba,
    Ds,
}

impl Generation {
    /// The hinted game decides; without one, the GBA image sizes pick generation III.
    pub fn detect(save_len: usize, game: Option<SelectedGame>) -> Self {
        match game {
            Some(game) if game.is_gba() => Generation::Gba,
            Some(_) => Generation::Ds,
            None if is_gen3_length(save_len) => Generation::Gba,
            None => Generation::Ds,
        }
    }
}

fn parse_box_mapping(arg: &str) -> Result<BoxMapping, String> {
    let (key, status) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected BOX=LABEL, got {arg:?}"))?;
    let key = key
        .trim()
        .parse()
        .map_err(|err| format!("invalid box number {key:?}: {err}"))?;
    Ok(BoxMapping {
        key,
        status: status.to_owned(),
    })
}

pub struct LoadedSave {
    pub data: Vec<u8>,
    pub options: ParserOptions,
    pub generation: Generation,
}

impl LoadedSave {
    pub fn parse(&self) -> anyhow::Result<ParseResult> {
        match self.generation {
            Generation::Gba => Ok(pksav::parse_gen3_save(&self.data, &self.options)?),
            Generation::Ds => Ok(pksav::parse_gen4_save(&self.data, &self.options)),
        }
    }
}

impl SaveArgs {
    pub fn parser_options(&self) -> anyhow::Result<ParserOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading options from {}", path.display()))?;
                serde_json::from_str(&json).with_context(|| format!("parsing options in {}", path.display()))?
            }
            None => ParserOptions::default(),
        };

        if self.game.is_some() {
            options.selected_game = self.game;
        }
        for mapping in &self.box_status {
            options.box_mappings.retain(|existing| existing.key != mapping.key);
            options.box_mappings.push(mapping.clone());
        }
        Ok(options)
    }

    pub fn load(&self) -> anyhow::Result<LoadedSave> {
        let data = std::fs::read(&self.sav).with_context(|| format!("reading {}", self.sav.display()))?;
        let options = self.parser_options()?;
        let generation = Generation::detect(data.len(), options.selected_game);
        log::debug!("Reading {} ({} bytes) as {generation:?}", self.sav.display(), data.len());
        Ok(LoadedSave {
            data,
            options,
            generation,
        })
    }
}
