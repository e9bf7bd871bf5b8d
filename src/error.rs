use thiserror::Error;

/// Which part of a GBA save block a missing section would have held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionRole {
    Trainer,
    Party,
}

impl SectionRole {
    pub fn section_id(&self) -> u16 {
        match *self {
            SectionRole::Trainer => 0,
            SectionRole::Party => 1,
        }
    }
}

impl std::fmt::Display for SectionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            SectionRole::Trainer => f.write_str("trainer info"),
            SectionRole::Party => f.write_str("team and items"),
        }
    }
}

/// Structural problems that make a save file impossible to decode. Problems with single
/// Pokemon records never end up here; those records are skipped.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Invalid file length for a game save. Found: {found}, Expected one of: {expected:?}")]
    InvalidLength { found: usize, expected: Vec<usize> },

    #[error("Neither save block passed validation")]
    NoValidBlock,

    #[error("Selected save block has no {0} section")]
    MissingSection(SectionRole),

    #[error("Truncated save data: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SaveError>;
