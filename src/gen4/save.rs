use serde::Serialize;

use crate::{bytes::ByteWindow, checksum::crc16_ccitt, options::SelectedGame};

pub const FOOTER_SIZE: usize = 0x14;
pub const BACKUP_OFFSET: usize = 0x40000;
pub const BOX_COUNT: usize = 18;

const FOOTER_LINK_OFFSET: usize = 0x00;
const FOOTER_SAVE_COUNT_OFFSET: usize = 0x04;
const FOOTER_CRC_OFFSET: usize = 0x12;

/// Byte layout of one save format revision. Offsets of trainer and party data are relative
/// to the general block, box offsets to the storage block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub game: SelectedGame,
    pub general_offset: usize,
    pub general_size: usize,
    pub storage_offset: usize,
    pub storage_size: usize,
    pub trainer_offset: usize,
    pub party_count_offset: usize,
    pub party_offset: usize,
    pub box_data_offset: usize,
    pub box_stride: usize,
}

const BOX_SLOTS_SIZE: usize = 30 * 136;

pub static LAYOUTS: [Layout; 3] = [
    Layout {
        game: SelectedGame::DP,
        general_offset: 0x0,
        general_size: 0xC100,
        storage_offset: 0xC100,
        storage_size: 0x121E0,
        trainer_offset: 0x64,
        party_count_offset: 0x94,
        party_offset: 0x98,
        box_data_offset: 0x4,
        box_stride: BOX_SLOTS_SIZE,
    },
    Layout {
        game: SelectedGame::Platinum,
        general_offset: 0x0,
        general_size: 0xCF2C,
        storage_offset: 0xCF2C,
        storage_size: 0x121E4,
        trainer_offset: 0x68,
        party_count_offset: 0x9C,
        party_offset: 0xA0,
        box_data_offset: 0x4,
        box_stride: BOX_SLOTS_SIZE,
    },
    Layout {
        game: SelectedGame::HGSS,
        general_offset: 0x0,
        general_size: 0xF628,
        storage_offset: 0xF700,
        storage_size: 0x12310,
        trainer_offset: 0x64,
        party_count_offset: 0x94,
        party_offset: 0x98,
        box_data_offset: 0x0,
        box_stride: 0x1000,
    },
];

impl Layout {
    pub fn for_game(game: SelectedGame) -> Option<&'static Layout> {
        LAYOUTS.iter().find(|layout| layout.game == game)
    }

    pub fn span(&self) -> usize {
        (self.general_offset + self.general_size).max(self.storage_offset + self.storage_size)
    }

    pub fn fits(&self, len: usize) -> bool {
        self.span() <= len
    }

    /// Layouts in the order they should be tried, the hinted one first.
    pub fn search_order(hint: Option<SelectedGame>) -> Vec<&'static Layout> {
        let hinted = hint.and_then(Layout::for_game);
        hinted
            .into_iter()
            .chain(LAYOUTS.iter().filter(|layout| Some(*layout) != hinted))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SaveCopy {
    Primary,
    Backup,
}

impl SaveCopy {
    pub fn base(&self) -> usize {
        match self {
            SaveCopy::Primary => 0,
            SaveCopy::Backup => BACKUP_OFFSET,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ValidatedBlock<'a> {
    pub copy: SaveCopy,
    pub buffer: &'a [u8],
    pub save_count: u32,
    pub link_value: u32,
    pub checksum_stored: u16,
    pub checksum_computed: u16,
    pub ok: bool,
}

impl<'a> ValidatedBlock<'a> {
    pub fn read(save_data: &'a [u8], copy: SaveCopy, offset: usize, size: usize) -> Option<Self> {
        let buffer = ByteWindow::new(save_data)
            .bytes(copy.base() + offset, size)
            .ok()?;
        let footer = ByteWindow::new(buffer).window(size.checked_sub(FOOTER_SIZE)?, FOOTER_SIZE).ok()?;
        let checksum_stored = footer.u16(FOOTER_CRC_OFFSET).ok()?;
        let checksum_computed = crc16_ccitt(&buffer[..size - FOOTER_SIZE]);
        Some(ValidatedBlock {
            copy,
            buffer,
            save_count: footer.u32(FOOTER_SAVE_COUNT_OFFSET).ok()?,
            link_value: footer.u32(FOOTER_LINK_OFFSET).ok()?,
            checksum_stored,
            checksum_computed,
            ok: checksum_stored == checksum_computed,
        })
    }

    pub fn window(&self) -> ByteWindow<'a> {
        ByteWindow::new(self.buffer)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    pub layout: &'static Layout,
    pub general: ValidatedBlock<'a>,
    pub storage: ValidatedBlock<'a>,
    /// Set when nothing validated and the layout was guessed from the file length.
    pub best_effort: bool,
}

const COPIES: [SaveCopy; 2] = [SaveCopy::Primary, SaveCopy::Backup];

/// Highest save count among valid blocks; the primary copy wins a tie.
fn newest_valid<'a>(blocks: impl IntoIterator<Item = ValidatedBlock<'a>>) -> Option<ValidatedBlock<'a>> {
    blocks
        .into_iter()
        .filter(|block| block.ok)
        .fold(None, |best: Option<ValidatedBlock<'a>>, block| match best {
            Some(current) if current.save_count >= block.save_count => Some(current),
            _ => Some(block),
        })
}

fn select_for_layout<'a>(save_data: &'a [u8], layout: &'static Layout) -> Option<Selection<'a>> {
    let read_general = |copy| ValidatedBlock::read(save_data, copy, layout.general_offset, layout.general_size);
    let read_storage = |copy| ValidatedBlock::read(save_data, copy, layout.storage_offset, layout.storage_size);

    let general = newest_valid(COPIES.into_iter().filter_map(read_general))?;
    let storages: Vec<_> = COPIES.into_iter().filter_map(read_storage).collect();
    let storage = storages
        .iter()
        .find(|block| block.ok && block.link_value == general.save_count)
        .copied()
        .or_else(|| newest_valid(storages.iter().copied()))
        .or_else(|| storages.first().copied())?;

    log::debug!(
        "{} layout: general block from {:?} copy (save count {}), storage block from {:?} copy (valid: {})",
        layout.game,
        general.copy,
        general.save_count,
        storage.copy,
        storage.ok
    );
    Some(Selection {
        layout,
        general,
        storage,
        best_effort: false,
    })
}

fn best_effort<'a>(save_data: &'a [u8], hint: Option<SelectedGame>) -> Option<Selection<'a>> {
    let len = save_data.len();
    let layout = hint
        .and_then(Layout::for_game)
        .filter(|layout| layout.fits(len))
        .or_else(|| {
            LAYOUTS
                .iter()
                .filter(|layout| layout.fits(len))
                .max_by_key(|layout| layout.span())
        })?;
    log::warn!(
        "No DS layout validated; reading the primary copy as {} by file length",
        layout.game
    );
    Some(Selection {
        layout,
        general: ValidatedBlock::read(save_data, SaveCopy::Primary, layout.general_offset, layout.general_size)?,
        storage: ValidatedBlock::read(save_data, SaveCopy::Primary, layout.storage_offset, layout.storage_size)?,
        best_effort: true,
    })
}

/// Finds the layout and block pair to read. The first layout (hinted one first) with a valid
/// general block wins; without one, falls back to a guess by file length.
pub fn select_blocks(save_data: &[u8], hint: Option<SelectedGame>) -> Option<Selection<'_>> {
    Layout::search_order(hint)
        .into_iter()
        .find_map(|layout| select_for_layout(save_data, layout))
        .or_else(|| best_effort(save_data, hint))
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockProbe {
    pub save_count: u32,
    pub link_value: u32,
    pub checksum_stored: u16,
    pub checksum_computed: u16,
    pub ok: bool,
}

impl From<ValidatedBlock<'_>> for BlockProbe {
    fn from(block: ValidatedBlock<'_>) -> Self {
        BlockProbe {
            save_count: block.save_count,
            link_value: block.link_value,
            checksum_stored: block.checksum_stored,
            checksum_computed: block.checksum_computed,
            ok: block.ok,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProbe {
    pub game: SelectedGame,
    pub copy: SaveCopy,
    pub general: Option<BlockProbe>,
    pub storage: Option<BlockProbe>,
}

/// Footer and CRC details for every layout and copy; blocks past the end of the file are
/// reported as missing.
pub fn probe_layouts(save_data: &[u8]) -> Vec<LayoutProbe> {
    LAYOUTS
        .iter()
        .flat_map(|layout| {
            COPIES.into_iter().map(move |copy| LayoutProbe {
                game: layout.game,
                copy,
                general: ValidatedBlock::read(save_data, copy, layout.general_offset, layout.general_size)
                    .map(BlockProbe::from),
                storage: ValidatedBlock::read(save_data, copy, layout.storage_offset, layout.storage_size)
                    .map(BlockProbe::from),
            })
        })
        .collect()
}
