use std::collections::HashMap;

use serde::Serialize;

use crate::{
    data::PokemonType,
    options::{ParserOptions, PARTY_STATUS},
    trainer::TrainerProfile,
};

pub const PARTY_CAPACITY: usize = 6;
pub const BOX_CAPACITY: usize = 30;
/// Met level given to boxed Pokemon whose stored met level is 0, which marks a hatched egg.
pub const HATCH_LEVEL: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    Gen3Party,
    Gen3Box,
    Gen4Party,
    Gen4Box,
}

impl SlotKind {
    pub const fn len(self) -> usize {
        match self {
            SlotKind::Gen3Party => 100,
            SlotKind::Gen3Box => 80,
            SlotKind::Gen4Party => 236,
            SlotKind::Gen4Box => 136,
        }
    }

    pub const fn is_party(self) -> bool {
        matches!(self, SlotKind::Gen3Party | SlotKind::Gen4Party)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSpread {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
}

impl StatSpread {
    pub fn from_stored(values: [u8; 6]) -> Self {
        let [hp, attack, defense, speed, sp_attack, sp_defense] = values;
        StatSpread {
            hp,
            attack,
            defense,
            speed,
            sp_attack,
            sp_defense,
        }
    }

    /// Unpacks the six 5-bit IVs from the low 30 bits of an IV word.
    pub fn from_iv_word(word: u32) -> Self {
        let mut values = [0u8; 6];
        values
            .iter_mut()
            .enumerate()
            .for_each(|(idx, iv)| *iv = ((word >> (5 * idx)) & 0b11111) as u8);
        Self::from_stored(values)
    }

    pub fn total(&self) -> u32 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.speed,
            self.sp_attack,
            self.sp_defense,
        ]
        .iter()
        .map(|value| *value as u32)
        .sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestStats {
    pub cool: u8,
    pub beauty: u8,
    pub cute: u8,
    pub smart: u8,
    pub tough: u8,
    pub sheen: u8,
}

impl ContestStats {
    pub fn from_stored(values: [u8; 6]) -> Self {
        let [cool, beauty, cute, smart, tough, sheen] = values;
        ContestStats {
            cool,
            beauty,
            cute,
            smart,
            tough,
            sheen,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub current_hp: u16,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraData {
    pub evs: StatSpread,
    pub ivs: StatSpread,
    pub contest: ContestStats,
    pub ribbons: u32,
    pub friendship: u8,
    pub experience: u32,
    pub language: String,
    pub nature: String,
    pub ot_name: String,
    pub ot_id: String,
    pub is_egg: bool,
    pub pokerus: u8,
    pub origin_game: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureRecord {
    pub id: String,
    pub species: String,
    pub dex_number: u16,
    pub nickname: String,
    pub status: String,
    pub position: u32,
    pub level: u8,
    pub moves: Vec<String>,
    pub shiny: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forme: Option<String>,
    pub item: Option<String>,
    pub ability: String,
    pub types: Vec<PokemonType>,
    pub met_location: String,
    pub met_level: u8,
    pub pokeball: String,
    pub extra_data: ExtraData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub trainer: TrainerProfile,
    pub pokemon: Vec<CreatureRecord>,
}

/// A record straight out of a codec, still missing its id and placement.
#[derive(Clone, Debug)]
pub struct Decoded {
    /// The raw value the record id is derived from (the personality value).
    pub key: u32,
    pub record: CreatureRecord,
}

/// Where a slot lives. Box indices and slots are 0-based, party slots are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Party { slot: usize },
    Boxed { box_index: usize, slot: usize },
}

impl Placement {
    /// Boxed positions multiply slot and box; distinct slots can share a position.
    pub fn position(&self) -> u32 {
        match *self {
            Placement::Party { slot } => slot as u32,
            Placement::Boxed { box_index, slot } => ((slot + 1) * (box_index + 1)) as u32,
        }
    }
}

/// Hands out record ids: the first record with a given key gets the key itself, later ones
/// get `key-1`, `key-2` and so on.
#[derive(Debug, Default)]
pub struct IdTracker {
    seen: HashMap<u32, u32>,
}

impl IdTracker {
    pub fn assign(&mut self, key: u32) -> String {
        let count = self.seen.entry(key).or_insert(0);
        let id = match *count {
            0 => key.to_string(),
            n => format!("{key}-{n}"),
        };
        *count += 1;
        id
    }
}

pub struct RecordContext<'o> {
    options: &'o ParserOptions,
    ids: IdTracker,
    records: Vec<CreatureRecord>,
}

impl<'o> RecordContext<'o> {
    pub fn new(options: &'o ParserOptions) -> Self {
        RecordContext {
            options,
            ids: IdTracker::default(),
            records: Vec::new(),
        }
    }

    pub fn place(&mut self, decoded: Decoded, placement: Placement) {
        let Decoded { key, mut record } = decoded;
        record.id = self.ids.assign(key);
        record.position = placement.position();
        record.status = match placement {
            Placement::Party { .. } => PARTY_STATUS.to_owned(),
            Placement::Boxed { box_index, .. } => self.options.status_for_box(box_index).to_owned(),
        };
        log::trace!(
            "Placed {} ({}) at {placement:?} as {}",
            record.species,
            record.id,
            record.status
        );
        self.records.push(record);
    }

    pub fn finish(self) -> Vec<CreatureRecord> {
        self.records
    }
}
