mod abilities;
mod items;
mod locations;
mod moves;
mod species;
mod types;

use std::{collections::HashMap, sync::LazyLock};

use num_derive::FromPrimitive;

pub use species::SpeciesInfo;
pub use types::PokemonType;

/// Highest national dex number either generation can hold.
pub const MAX_SPECIES: u16 = 493;

const GEN3_HOENN_START: u16 = 277;

static SPECIES_BY_NAME: LazyLock<HashMap<&'static str, u16>> = LazyLock::new(|| {
    species::SPECIES
        .iter()
        .zip(1u16..)
        .map(|(info, dex)| (info.name, dex))
        .collect()
});

fn named(table: &'static [&'static str], index: usize) -> Option<&'static str> {
    table.get(index).copied().filter(|name| !name.is_empty())
}

pub fn species_info(dex: u16) -> Option<&'static SpeciesInfo> {
    species::SPECIES.get((dex as usize).checked_sub(1)?)
}

pub fn species_name(dex: u16) -> String {
    species_info(dex)
        .map(|info| info.name.to_owned())
        .unwrap_or_else(|| format!("Species {dex}"))
}

pub fn dex_number(name: &str) -> Option<u16> {
    SPECIES_BY_NAME.get(name).copied()
}

pub fn types_for(name: &str) -> &'static [PokemonType] {
    dex_number(name)
        .and_then(species_info)
        .map(|info| info.types)
        .unwrap_or(&[])
}

/// Maps a GBA internal species index onto the national dex. Indices 252..=276 are unused
/// placeholders and 277..=411 hold the Hoenn species in a different order.
pub fn gen3_national_dex(internal: u16) -> Option<u16> {
    match internal {
        1..=251 => Some(internal),
        GEN3_HOENN_START..=411 => species::GEN3_HOENN_BLOCK
            .get((internal - GEN3_HOENN_START) as usize)
            .copied(),
        _ => None,
    }
}

pub fn ability_name(id: u8) -> String {
    (id as usize)
        .checked_sub(1)
        .and_then(|index| named(&abilities::ABILITY_NAMES, index))
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Ability #{id}"))
}

/// Resolves the ability a GBA Pokemon has from its single ability bit.
pub fn gen3_ability(dex: u16, second_slot: bool) -> Option<u8> {
    let (first, second) = *abilities::GEN3_SPECIES_ABILITIES.get((dex as usize).checked_sub(1)?)?;
    if second_slot && second != 0 {
        Some(second)
    } else {
        Some(first)
    }
}

pub fn move_name(id: u16) -> String {
    (id as usize)
        .checked_sub(1)
        .and_then(|index| named(&moves::MOVE_NAMES, index))
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Move #{id}"))
}

fn item_name(table: &'static [&'static str], id: u16) -> Option<String> {
    match id {
        0 => None,
        _ => Some(
            named(table, id as usize)
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Item #{id}")),
        ),
    }
}

/// Held item name; `None` when the slot is empty.
pub fn gen3_item_name(id: u16) -> Option<String> {
    item_name(&items::GEN3_ITEMS, id)
}

pub fn gen4_item_name(id: u16) -> Option<String> {
    item_name(&items::GEN4_ITEMS, id)
}

pub fn gen3_location_name(id: u8) -> String {
    named(&locations::GEN3_LOCATIONS, id as usize)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Location #{id}"))
}

pub fn gen4_location_name(id: u16) -> String {
    let found = match id {
        0..=1999 => named(&locations::GEN4_LOCATIONS, id as usize),
        2000..=2999 => named(&locations::GEN4_SPECIAL_LOCATIONS, (id - 2000) as usize),
        _ => named(&locations::GEN4_EVENT_LOCATIONS, (id - 3000) as usize),
    };
    found
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Location #{id}"))
}

// Gen 3 stores 1..=12; the DS games continue the list.
static BALLS: [&str; 25] = [
    "Master Ball",
    "Ultra Ball",
    "Great Ball",
    "Poké Ball",
    "Safari Ball",
    "Net Ball",
    "Dive Ball",
    "Nest Ball",
    "Repeat Ball",
    "Timer Ball",
    "Luxury Ball",
    "Premier Ball",
    "Dusk Ball",
    "Heal Ball",
    "Quick Ball",
    "Cherish Ball",
    "Fast Ball",
    "Level Ball",
    "Lure Ball",
    "Heavy Ball",
    "Love Ball",
    "Friend Ball",
    "Moon Ball",
    "Sport Ball",
    "Park Ball",
];

pub fn ball_name(id: u8) -> String {
    (id as usize)
        .checked_sub(1)
        .and_then(|index| named(&BALLS, index))
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Ball #{id}"))
}

static NATURES: [&str; 25] = [
    "Hardy", "Lonely", "Brave", "Adamant", "Naughty", "Bold", "Docile", "Relaxed", "Impish",
    "Lax", "Timid", "Hasty", "Serious", "Jolly", "Naive", "Modest", "Mild", "Quiet", "Bashful",
    "Rash", "Calm", "Gentle", "Sassy", "Careful", "Quirky",
];

pub fn nature_name(personality: u32) -> &'static str {
    NATURES[(personality % 25) as usize]
}

/// The cartridge a Pokemon was caught in, as stored in its origin bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum GameVersion {
    Sapphire = 1,
    Ruby = 2,
    Emerald = 3,
    FireRed = 4,
    LeafGreen = 5,
    HeartGold = 7,
    SoulSilver = 8,
    Diamond = 10,
    Pearl = 11,
    Platinum = 12,
    ColosseumXd = 15,
}

impl GameVersion {
    pub fn from_byte(value: u8) -> Option<Self> {
        num_traits::FromPrimitive::from_u8(value)
    }
}

impl std::fmt::Display for GameVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            GameVersion::Sapphire => "Sapphire",
            GameVersion::Ruby => "Ruby",
            GameVersion::Emerald => "Emerald",
            GameVersion::FireRed => "FireRed",
            GameVersion::LeafGreen => "LeafGreen",
            GameVersion::HeartGold => "HeartGold",
            GameVersion::SoulSilver => "SoulSilver",
            GameVersion::Diamond => "Diamond",
            GameVersion::Pearl => "Pearl",
            GameVersion::Platinum => "Platinum",
            GameVersion::ColosseumXd => "Colosseum/XD",
        })
    }
}

/// Name for an origin game byte, falling back to the raw number.
pub fn origin_game_name(value: u8) -> String {
    GameVersion::from_byte(value)
        .map(|game| game.to_string())
        .unwrap_or_else(|| format!("Game #{value}"))
}
