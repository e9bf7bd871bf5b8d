//! Read-only decoding of Generation III (GBA) and Generation IV (DS) Pokemon save files.
//!
//! The two entry points are [`parse_gen3_save`] and [`parse_gen4_save`]. Both take the raw
//! save image and a set of [`ParserOptions`], and return the trainer profile plus every
//! Pokemon found in the party and the storage boxes.

pub mod bytes;
pub mod checksum;
pub mod data;
pub mod error;
pub mod gen3;
pub mod gen4;
pub mod options;
pub mod record;
pub mod shuffle;
pub mod text;
pub mod trainer;

use num_derive::FromPrimitive;

pub use error::{Result, SaveError};
pub use gen3::parse_gen3_save;
pub use gen4::parse_gen4_save;
pub use options::{BoxMapping, ParserOptions, SelectedGame};
pub use record::{CreatureRecord, ParseResult};
pub use trainer::TrainerProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainerId {
    pub public_id: u16,
    pub secret_id: u16,
}

impl TrainerId {
    pub fn from_u32(raw: u32) -> Self {
        TrainerId {
            public_id: (raw & 0xffff) as u16,
            secret_id: (raw >> 16) as u16,
        }
    }

    /// A Pokemon is shiny when the XOR of both trainer ids and both halves of its
    /// personality value is below 8.
    pub fn is_shiny(&self, personality: u32) -> bool {
        let pid_low = (personality & 0xffff) as u16;
        let pid_high = (personality >> 16) as u16;
        (self.public_id ^ self.secret_id ^ pid_low ^ pid_high) < 8
    }

    /// The five digit public id shown on the trainer card.
    pub fn display_id(&self) -> String {
        format!("{:05}", self.public_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum Language {
    Japanese = 1,
    English = 2,
    French = 3,
    Italian = 4,
    German = 5,
    Spanish = 7,
    Korean = 8,
}

impl Language {
    pub fn from_byte(value: u8) -> Option<Self> {
        num_traits::FromPrimitive::from_u8(value)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Language::Japanese => "Japanese",
            Language::English => "English",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Korean => "Korean",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shiny_threshold() {
        let id = TrainerId::from_u32(0x0000_0000);
        assert!(id.is_shiny(0x0000_0007));
        assert!(!id.is_shiny(0x0000_0008));
        // Halves cancel each other out
        assert!(id.is_shiny(0x1234_1234));
    }

    #[test]
    fn trainer_id_split() {
        let id = TrainerId::from_u32(0xBEEF_0439);
        assert_eq!(id.public_id, 0x0439);
        assert_eq!(id.secret_id, 0xBEEF);
        assert_eq!(id.display_id(), "01081");
    }

    #[test]
    fn language_bytes() {
        assert_eq!(Language::from_byte(2), Some(Language::English));
        assert_eq!(Language::from_byte(6), None);
    }
}
