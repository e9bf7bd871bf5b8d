//! Generation III (Ruby, Sapphire, Emerald, FireRed, LeafGreen).

pub mod pokemon;
pub mod save;
pub mod trainer;

use crate::{
    bytes::ByteWindow,
    error::{Result, SectionRole},
    options::ParserOptions,
    record::{ParseResult, Placement, RecordContext, SlotKind, BOX_CAPACITY, PARTY_CAPACITY},
    SaveError,
};

pub use save::{inspect_blocks, select_active_block, Block, BlockReport, RawSection};
pub use trainer::GameCode;

/// Full flash dump, and the same image without the trailing Hall of Fame/mystery sections.
pub const ACCEPTED_LENGTHS: [usize; 2] = [0x20000, 2 * save::BLOCK_SIZE];
pub const BOX_COUNT: usize = 14;
const PC_FIRST_SLOT_OFFSET: usize = 4;

pub fn is_gen3_length(len: usize) -> bool {
    ACCEPTED_LENGTHS.contains(&len)
}

/// Decodes a GBA save. Fails on a wrong file size, when neither block validates, or when
/// the selected block lacks its trainer or party section.
pub fn parse_gen3_save(save_data: &[u8], options: &ParserOptions) -> Result<ParseResult> {
    if !is_gen3_length(save_data.len()) {
        log::error!(
            "Invalid file length for a game save. Found: {}, Expected one of: {ACCEPTED_LENGTHS:?}",
            save_data.len()
        );
        return Err(SaveError::InvalidLength {
            found: save_data.len(),
            expected: ACCEPTED_LENGTHS.to_vec(),
        });
    }

    let block = select_active_block(save_data)?;
    let trainer_section = required_section(&block, SectionRole::Trainer)?;
    let party_section = required_section(&block, SectionRole::Party)?;

    let game_code = GameCode::resolve(options.selected_game, trainer_section);
    let save_block = block.save_block_one();
    let trainer = trainer::read_trainer(trainer_section, ByteWindow::new(&save_block), game_code)?;

    let mut context = RecordContext::new(options);

    let team_items = party_section.window();
    let team_size = team_items.u32(game_code.team_size_offset())?;
    let party_count = (team_size as usize).min(PARTY_CAPACITY);
    log::debug!("Party holds {team_size} Pokemon, reading {party_count}");
    for slot in 0..party_count {
        let kind = SlotKind::Gen3Party;
        let offset = game_code.team_list_offset() + slot * kind.len();
        if let Some(decoded) = pokemon::from_pk3(team_items.bytes(offset, kind.len())?, kind) {
            context.place(decoded, Placement::Party { slot: slot + 1 });
        }
    }

    let pc_buffer = block.pc_buffer();
    let pc = ByteWindow::new(&pc_buffer);
    for box_index in 0..BOX_COUNT {
        for slot in 0..BOX_CAPACITY {
            let kind = SlotKind::Gen3Box;
            let offset = PC_FIRST_SLOT_OFFSET + (box_index * BOX_CAPACITY + slot) * kind.len();
            if let Some(decoded) = pokemon::from_pk3(pc.bytes(offset, kind.len())?, kind) {
                context.place(decoded, Placement::Boxed { box_index, slot });
            }
        }
    }

    Ok(ParseResult {
        trainer,
        pokemon: context.finish(),
    })
}

fn required_section<'b, 'a>(block: &'b Block<'a>, role: SectionRole) -> Result<&'b RawSection<'a>> {
    block.section(role.section_id()).ok_or_else(|| {
        log::error!("Selected save block has no {role} section");
        SaveError::MissingSection(role)
    })
}
