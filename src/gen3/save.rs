use serde::Serialize;

use crate::{bytes::ByteWindow, checksum::section_checksum, error::Result, SaveError};

pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_DATA_SIZE: usize = 0xFF4;
pub const SECTIONS_PER_BLOCK: usize = 14;
pub const BLOCK_SIZE: usize = SECTION_SIZE * SECTIONS_PER_BLOCK;
pub const SAVE_A_OFFSET: usize = 0x0000;
pub const SAVE_B_OFFSET: usize = 0xE000;
pub const SECTION_SIGNATURE: u32 = 0x0801_2025;

const SECTION_ID_OFFSET: usize = 0x0FF4;
const SECTION_CHECKSUM_OFFSET: usize = 0x0FF6;
const SECTION_SIGNATURE_OFFSET: usize = 0x0FF8;
const SAVE_INDEX_OFFSET: usize = 0x0FFC;

pub const TRAINER_SECTION: u16 = 0;
pub const PARTY_SECTION: u16 = 1;
const LAST_SAVE_BLOCK_SECTION: u16 = 4;
pub const FIRST_STORAGE_SECTION: u16 = 5;
pub const LAST_STORAGE_SECTION: u16 = 13;

/// How many bytes of a section's data the checksum covers.
pub fn checksum_length(section_id: u16) -> usize {
    match section_id {
        0 => 3884,
        4 => 3848,
        13 => 2000,
        _ => 3968,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RawSection<'a> {
    pub id: u16,
    pub data: &'a [u8],
    pub checksum: u16,
    pub signature: u32,
    pub save_index: u32,
    /// Physical position of the section within its block.
    pub order: u8,
}

impl<'a> RawSection<'a> {
    fn read(section: ByteWindow<'a>, order: u8) -> Result<Self> {
        Ok(RawSection {
            id: section.u16(SECTION_ID_OFFSET)?,
            data: section.bytes(0, SECTION_DATA_SIZE)?,
            checksum: section.u16(SECTION_CHECKSUM_OFFSET)?,
            signature: section.u32(SECTION_SIGNATURE_OFFSET)?,
            save_index: section.u32(SAVE_INDEX_OFFSET)?,
            order,
        })
    }

    pub fn signature_ok(&self) -> bool {
        self.signature == SECTION_SIGNATURE
    }

    pub fn computed_checksum(&self) -> u16 {
        section_checksum(self.data, checksum_length(self.id))
    }

    pub fn checksum_ok(&self) -> bool {
        self.computed_checksum() == self.checksum
    }

    pub fn window(&self) -> ByteWindow<'a> {
        ByteWindow::new(self.data)
    }
}

#[derive(Clone, Debug)]
pub struct Block<'a> {
    pub offset: usize,
    pub sections: Vec<RawSection<'a>>,
}

impl<'a> Block<'a> {
    pub fn read(save_data: &'a [u8], offset: usize) -> Result<Self> {
        let block = ByteWindow::new(save_data).window(offset, BLOCK_SIZE)?;
        let sections = (0..SECTIONS_PER_BLOCK)
            .map(|order| {
                let section = block.window(order * SECTION_SIZE, SECTION_SIZE)?;
                RawSection::read(section, order as u8)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Block { offset, sections })
    }

    pub fn section(&self, id: u16) -> Option<&RawSection<'a>> {
        self.sections.iter().find(|section| section.id == id)
    }

    fn has_every_section_once(&self) -> bool {
        let mut seen = [false; SECTIONS_PER_BLOCK];
        self.sections.iter().all(|section| {
            let id = section.id as usize;
            id < SECTIONS_PER_BLOCK && !std::mem::replace(&mut seen[id], true)
        })
    }

    /// The save index every section shares, if they agree.
    pub fn save_index(&self) -> Option<u32> {
        let first = self.sections.first()?.save_index;
        self.sections
            .iter()
            .all(|section| section.save_index == first)
            .then_some(first)
    }

    pub fn is_valid(&self) -> bool {
        self.has_every_section_once()
            && self.save_index().is_some()
            && self
                .sections
                .iter()
                .all(|section| section.signature_ok() && section.checksum_ok())
    }

    /// Sections 5..=13 concatenated, each truncated to its checksummed length.
    pub fn pc_buffer(&self) -> Vec<u8> {
        self.concat_sections(FIRST_STORAGE_SECTION..=LAST_STORAGE_SECTION)
    }

    /// Sections 1..=4: the party, money, items and event flags.
    pub fn save_block_one(&self) -> Vec<u8> {
        self.concat_sections(PARTY_SECTION..=LAST_SAVE_BLOCK_SECTION)
    }

    fn concat_sections(&self, ids: std::ops::RangeInclusive<u16>) -> Vec<u8> {
        ids.filter_map(|id| {
            let section = self.section(id)?;
            Some(&section.data[..checksum_length(id)])
        })
        .flatten()
        .copied()
        .collect()
    }

    pub fn report(&self) -> BlockReport {
        BlockReport {
            offset: self.offset,
            sections: self
                .sections
                .iter()
                .map(|section| SectionReport {
                    order: section.order,
                    id: section.id,
                    save_index: section.save_index,
                    signature_ok: section.signature_ok(),
                    checksum_stored: section.checksum,
                    checksum_computed: section.computed_checksum(),
                })
                .collect(),
            save_index: self.save_index(),
            valid: self.is_valid(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub order: u8,
    pub id: u16,
    pub save_index: u32,
    pub signature_ok: bool,
    pub checksum_stored: u16,
    pub checksum_computed: u16,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockReport {
    pub offset: usize,
    pub sections: Vec<SectionReport>,
    pub save_index: Option<u32>,
    pub valid: bool,
}

fn read_candidate(save_data: &[u8], offset: usize) -> Option<Block<'_>> {
    match Block::read(save_data, offset) {
        Ok(block) => Some(block),
        Err(err) => {
            log::debug!("Save block at 0x{offset:x} could not be read: {err}");
            None
        }
    }
}

/// Diagnostics for both candidate blocks, valid or not.
pub fn inspect_blocks(save_data: &[u8]) -> Vec<BlockReport> {
    [SAVE_A_OFFSET, SAVE_B_OFFSET]
        .into_iter()
        .filter_map(|offset| read_candidate(save_data, offset))
        .map(|block| block.report())
        .collect()
}

/// Picks the block to trust: the valid one with the higher save index, block A on a tie.
pub fn select_active_block(save_data: &[u8]) -> Result<Block<'_>> {
    let candidates = [SAVE_A_OFFSET, SAVE_B_OFFSET]
        .into_iter()
        .filter_map(|offset| read_candidate(save_data, offset))
        .filter(|block| {
            let valid = block.is_valid();
            log::debug!(
                "Save block at 0x{:x}: save index {:?}, valid: {valid}",
                block.offset,
                block.save_index()
            );
            valid
        });

    let mut chosen: Option<(u32, Block<'_>)> = None;
    for block in candidates {
        let save_index = block.save_index().unwrap_or_default();
        let newer = chosen
            .as_ref()
            .map_or(true, |(best, _)| save_index > *best);
        if newer {
            chosen = Some((save_index, block));
        }
    }

    match chosen {
        Some((save_index, block)) => {
            log::debug!(
                "Using save block at 0x{:x} (save index {save_index})",
                block.offset
            );
            Ok(block)
        }
        None => {
            log::error!("Neither save block is valid");
            Err(SaveError::NoValidBlock)
        }
    }
}
