//! Generation IV (Diamond, Pearl, Platinum, HeartGold, SoulSilver).

mod forme;
pub mod pokemon;
pub mod recovery;
pub mod save;
pub mod trainer;

use crate::{
    options::ParserOptions,
    record::{ParseResult, Placement, RecordContext, SlotKind, BOX_CAPACITY, PARTY_CAPACITY},
};

pub use save::{probe_layouts, select_blocks, Layout, LayoutProbe, SaveCopy, Selection, ValidatedBlock, LAYOUTS};

/// Decodes a DS save. Never fails: when no layout validates, the layout is guessed from the
/// file length, and a file too short for any layout yields an empty result.
pub fn parse_gen4_save(save_data: &[u8], options: &ParserOptions) -> ParseResult {
    let hint = options.selected_game.filter(|game| !game.is_gba());
    let Some(selection) = select_blocks(save_data, hint) else {
        log::warn!("{} bytes is too short for any DS save layout", save_data.len());
        return ParseResult::default();
    };

    let trainer = trainer::read_trainer(selection.general.window(), selection.layout).unwrap_or_else(|err| {
        log::warn!("Could not read the trainer card: {err}");
        Default::default()
    });

    let mut context = RecordContext::new(options);
    read_party(&selection, &mut context);
    read_boxes(&selection, &mut context);

    ParseResult {
        trainer,
        pokemon: context.finish(),
    }
}

fn read_party(selection: &Selection<'_>, context: &mut RecordContext<'_>) {
    let layout = selection.layout;
    let general = selection.general.window();
    let stored_count = general.u8(layout.party_count_offset).unwrap_or(0);
    let party_count = (stored_count as usize).min(PARTY_CAPACITY);
    log::debug!("Party holds {stored_count} Pokemon, reading {party_count}");

    let kind = SlotKind::Gen4Party;
    for slot in 0..party_count {
        let slot_data = general.bytes(layout.party_offset + slot * kind.len(), kind.len());
        if let Some(decoded) = slot_data.ok().and_then(|data| pokemon::from_pk4(data, kind)) {
            context.place(decoded, Placement::Party { slot: slot + 1 });
        }
    }
}

fn read_boxes(selection: &Selection<'_>, context: &mut RecordContext<'_>) {
    let layout = selection.layout;
    let storage = selection.storage.window();
    let kind = SlotKind::Gen4Box;
    for box_index in 0..save::BOX_COUNT {
        let box_start = layout.box_data_offset + box_index * layout.box_stride;
        for slot in 0..BOX_CAPACITY {
            let slot_data = storage.bytes(box_start + slot * kind.len(), kind.len());
            if let Some(decoded) = slot_data.ok().and_then(|data| pokemon::from_pk4(data, kind)) {
                context.place(decoded, Placement::Boxed { box_index, slot });
            }
        }
    }
}
