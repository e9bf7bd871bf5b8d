use byteorder::{ByteOrder, LittleEndian};

use super::{forme, recovery};
use crate::{
    bytes::ByteWindow,
    checksum::record_checksum,
    data::{self, MAX_SPECIES},
    record::{ContestStats, CreatureRecord, Decoded, ExtraData, SlotKind, StatSpread, Stats, HATCH_LEVEL},
    shuffle::{gen4_order_index, offset_for, substructure, Component},
    text::decode_gen4,
    Language, TrainerId,
};

pub const ENCRYPTED_OFFSET: usize = 0x08;
pub const ENCRYPTED_SIZE: usize = 0x80;
pub const BLOCK_SIZE: usize = 32;
const CHECKSUM_OFFSET: usize = 0x06;
const PARTY_STATS_OFFSET: usize = 0x88;
const PARTY_STATS_SIZE: usize = 0x64;

const EV_OFFSET: usize = 0x10;
const MAX_EV: u8 = 252;
const MAX_EV_TOTAL: u32 = 510;

pub type Payload = [u8; ENCRYPTED_SIZE];

/// The games' linear congruential generator. Each step yields the upper half of the new
/// state as the next 16-bit key.
#[derive(Clone, Copy, Debug)]
pub struct Prng {
    state: u32,
}

impl Prng {
    pub fn new(seed: u32) -> Self {
        Prng { state: seed }
    }
}

impl Iterator for Prng {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        self.state = self.state.wrapping_mul(0x41C6_4E6D).wrapping_add(0x6073);
        Some((self.state >> 16) as u16)
    }
}

/// XORs every little-endian word of `input` with the key stream and writes it to `output`.
/// The cipher is symmetric.
pub fn crypt(input: &[u8], seed: u32, output: &mut [u8]) {
    input
        .chunks_exact(2)
        .zip(output.chunks_exact_mut(2))
        .zip(Prng::new(seed))
        .for_each(|((src, dst), key)| LittleEndian::write_u16(dst, LittleEndian::read_u16(src) ^ key));
}

pub fn decrypt_payload(encrypted: &[u8], seed: u32) -> Payload {
    let mut payload = [0u8; ENCRYPTED_SIZE];
    crypt(encrypted, seed, &mut payload);
    payload
}

pub fn is_valid_species(species: u16) -> bool {
    (1..=MAX_SPECIES).contains(&species)
}

pub(super) fn growth_species(payload: &Payload, order: usize) -> u16 {
    LittleEndian::read_u16(&payload[offset_for(Component::Growth, order, BLOCK_SIZE)..])
}

/// Each EV within the game's cap and the total within the overall limit.
pub(super) fn plausible_evs(payload: &Payload, order: usize) -> bool {
    let start = offset_for(Component::Growth, order, BLOCK_SIZE) + EV_OFFSET;
    let mut evs = [0u8; 6];
    evs.copy_from_slice(&payload[start..start + 6]);
    evs.iter().all(|ev| *ev <= MAX_EV) && StatSpread::from_stored(evs).total() <= MAX_EV_TOTAL
}

fn read_party_stats(pk4: ByteWindow<'_>, pid: u32) -> std::io::Result<(u8, Stats)> {
    let mut battle_stats = [0u8; PARTY_STATS_SIZE];
    crypt(pk4.bytes(PARTY_STATS_OFFSET, PARTY_STATS_SIZE)?, pid, &mut battle_stats);
    let stats_window = ByteWindow::new(&battle_stats);
    let stats = Stats {
        current_hp: stats_window.u16(0x06)?,
        max_hp: stats_window.u16(0x08)?,
        attack: stats_window.u16(0x0A)?,
        defense: stats_window.u16(0x0C)?,
        speed: stats_window.u16(0x0E)?,
        sp_attack: stats_window.u16(0x10)?,
        sp_defense: stats_window.u16(0x12)?,
    };
    Ok((stats_window.u8(0x04)?, stats))
}

/// Decrypts with the stored checksum, falling back to a key search when the result does not
/// check out.
fn unlock(encrypted: &[u8], pid: u32, stored_checksum: u16) -> Option<Payload> {
    let order = gen4_order_index(pid);
    let direct = decrypt_payload(encrypted, stored_checksum as u32);
    if record_checksum(&direct) == stored_checksum && is_valid_species(growth_species(&direct, order)) {
        return Some(direct);
    }

    log::warn!("DS record {pid:08x} does not decrypt with stored checksum 0x{stored_checksum:04x}, searching for its key");
    match recovery::recover(encrypted, pid) {
        Some(recovered) => {
            log::warn!(
                "Recovered DS record {pid:08x} as species {} with key 0x{:04x} (self-consistent: {})",
                recovered.species,
                recovered.key,
                recovered.self_consistent
            );
            Some(recovered.payload)
        }
        None => {
            log::warn!("Dropping DS record {pid:08x}: no key yields a plausible record");
            None
        }
    }
}

/// Decodes one slot. Empty slots and records no key can unlock come back as `None`.
pub fn from_pk4(pk4_data: &[u8], kind: SlotKind) -> Option<Decoded> {
    debug_assert!(matches!(kind, SlotKind::Gen4Party | SlotKind::Gen4Box));
    let pk4 = ByteWindow::new(pk4_data.get(..kind.len())?);

    let pid = pk4.u32(0x00).ok()?;
    if pid == 0 {
        return None;
    }
    let stored_checksum = pk4.u16(CHECKSUM_OFFSET).ok()?;
    let payload = unlock(pk4.bytes(ENCRYPTED_OFFSET, ENCRYPTED_SIZE).ok()?, pid, stored_checksum)?;

    let order = gen4_order_index(pid);
    let block = |component| ByteWindow::new(substructure(&payload, component, order, BLOCK_SIZE));
    let growth = block(Component::Growth);
    let attacks = block(Component::Attacks);
    let evs_conditions = block(Component::EvsConditions);
    let misc = block(Component::Miscellaneous);

    let dex_number = growth.u16(0x00).ok()?;
    let held_item = growth.u16(0x02).ok()?;
    let ot = TrainerId::from_u32(growth.u32(0x04).ok()?);
    let experience = growth.u32(0x08).ok()?;
    let friendship = growth.u8(0x0C).ok()?;
    let ability = growth.u8(0x0D).ok()?;
    let language = Language::from_byte(growth.u8(0x0F).ok()?);
    let evs = StatSpread::from_stored(growth.array::<6>(EV_OFFSET).ok()?);
    let contest = ContestStats::from_stored(growth.array::<6>(0x16).ok()?);
    let sinnoh_ribbons = growth.u32(0x1C).ok()?;

    let moves = (0..4)
        .filter_map(|idx| attacks.u16(idx * 2).ok())
        .filter(|move_id| *move_id != 0)
        .map(data::move_name)
        .collect();
    let iv_word = attacks.u32(0x10).ok()?;
    let hoenn_ribbons = attacks.u32(0x14).ok()?;
    let forme_index = attacks.u8(0x18).ok()? >> 3;
    let platinum_met_location = attacks.u16(0x1E).ok()?;

    let nickname = decode_gen4(evs_conditions.bytes(0x00, 0x16).ok()?);
    let origin_game = evs_conditions.u8(0x17).ok()?;
    let extra_ribbons = evs_conditions.u32(0x18).ok()?;

    let ot_name = decode_gen4(misc.bytes(0x00, 0x10).ok()?);
    let dp_met_location = misc.u16(0x18).ok()?;
    let pokerus = misc.u8(0x1A).ok()?;
    let dp_ball = misc.u8(0x1B).ok()?;
    let stored_met_level = misc.u8(0x1C).ok()? & 0x7F;
    let hgss_ball = misc.u8(0x1E).ok()?;

    let is_egg = (iv_word >> 30) & 0b1 != 0;
    let met_location = match platinum_met_location {
        0 => dp_met_location,
        location => location,
    };
    let ball = match hgss_ball {
        0 => dp_ball,
        ball => ball,
    };
    let met_level = if !kind.is_party() && !is_egg && stored_met_level == 0 {
        HATCH_LEVEL
    } else {
        stored_met_level
    };
    let (level, stats) = if kind.is_party() {
        let (level, stats) = read_party_stats(pk4, pid).ok()?;
        (level, Some(stats))
    } else {
        (met_level, None)
    };

    let species = data::species_name(dex_number);
    let types = forme::forme_types(dex_number, forme_index)
        .unwrap_or_else(|| data::types_for(&species).to_vec());
    let record = CreatureRecord {
        types,
        forme: forme::forme_name(dex_number, forme_index),
        species,
        dex_number,
        nickname,
        level,
        moves,
        shiny: ot.is_shiny(pid),
        item: data::gen4_item_name(held_item),
        ability: data::ability_name(ability),
        met_location: data::gen4_location_name(met_location),
        met_level,
        pokeball: data::ball_name(ball),
        extra_data: ExtraData {
            evs,
            ivs: StatSpread::from_iv_word(iv_word),
            contest,
            ribbons: sinnoh_ribbons.count_ones() + hoenn_ribbons.count_ones() + extra_ribbons.count_ones(),
            friendship,
            experience,
            language: language.map(|lang| lang.to_string()).unwrap_or_default(),
            nature: data::nature_name(pid).to_owned(),
            ot_name,
            ot_id: ot.display_id(),
            is_egg,
            pokerus,
            origin_game: data::origin_game_name(origin_game),
            stats,
        },
        ..Default::default()
    };
    log::trace!("Decoded DS record {pid:08x} as {}", record.species);

    Some(Decoded { key: pid, record })
}
