use num_traits::FromPrimitive;

use crate::data::PokemonType::{self, *};

const UNOWN: u16 = 201;
const DEOXYS: u16 = 386;
const BURMY: u16 = 412;
const WORMADAM: u16 = 413;
const SHELLOS: u16 = 422;
const GASTRODON: u16 = 423;
const ROTOM: u16 = 479;
const GIRATINA: u16 = 487;
const SHAYMIN: u16 = 492;
const ARCEUS: u16 = 493;

const UNOWN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ!?";
const DEOXYS_FORMES: [&str; 4] = ["Normal", "Attack", "Defense", "Speed"];
const CLOAK_FORMES: [&str; 3] = ["Plant", "Sandy", "Trash"];
const SEA_FORMES: [&str; 2] = ["West", "East"];
const ROTOM_FORMES: [&str; 6] = ["Normal", "Heat", "Wash", "Frost", "Fan", "Mow"];
const GIRATINA_FORMES: [&str; 2] = ["Altered", "Origin"];
const SHAYMIN_FORMES: [&str; 2] = ["Land", "Sky"];

fn pick(names: &[&str], index: u8) -> String {
    names
        .get(index as usize)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Forme {index}"))
}

/// Forme name for species that have more than one; `None` for everyone else.
pub fn forme_name(dex: u16, index: u8) -> Option<String> {
    let name = match dex {
        UNOWN => UNOWN_LETTERS
            .chars()
            .nth(index as usize)
            .map(String::from)
            .unwrap_or_else(|| format!("Forme {index}")),
        DEOXYS => pick(&DEOXYS_FORMES, index),
        BURMY | WORMADAM => pick(&CLOAK_FORMES, index),
        SHELLOS | GASTRODON => pick(&SEA_FORMES, index),
        ROTOM => pick(&ROTOM_FORMES, index),
        GIRATINA => pick(&GIRATINA_FORMES, index),
        SHAYMIN => pick(&SHAYMIN_FORMES, index),
        ARCEUS => PokemonType::from_u8(index)
            .map(|plate| plate.to_string())
            .unwrap_or_else(|| format!("Forme {index}")),
        _ => return None,
    };
    Some(name)
}

/// Typing of formes that differ from their species' base typing.
pub fn forme_types(dex: u16, index: u8) -> Option<Vec<PokemonType>> {
    match (dex, index) {
        (WORMADAM, 0) => Some(vec![Bug, Grass]),
        (WORMADAM, 1) => Some(vec![Bug, Ground]),
        (WORMADAM, 2) => Some(vec![Bug, Steel]),
        (SHAYMIN, 1) => Some(vec![Grass, Flying]),
        (ARCEUS, _) => PokemonType::from_u8(index).map(|plate| vec![plate]),
        _ => None,
    }
}
