use num_derive::FromPrimitive;
use serde::Serialize;

/// Elemental types, declared in the order Arceus plates map onto them. `Unknown` is the
/// unused "???" slot between Steel and Fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    #[serde(rename = "???")]
    Unknown,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PokemonType::Unknown => f.write_str("???"),
            other => write!(f, "{other:?}"),
        }
    }
}
