use byteorder::{ByteOrder, LittleEndian};

use crate::{
    bytes::ByteWindow,
    checksum::record_checksum,
    data,
    record::{ContestStats, CreatureRecord, Decoded, ExtraData, SlotKind, StatSpread, Stats, HATCH_LEVEL},
    shuffle::{gen3_order_index, substructure, Component},
    text::decode_gen3,
    Language, TrainerId,
};

const SUBSTRUCTURE_OFFSET: usize = 0x20;
const SUBSTRUCTURE_SIZE: usize = 12;
const ENCRYPTED_SIZE: usize = SUBSTRUCTURE_SIZE * 4;
const CHECKSUM_OFFSET: usize = 0x1C;
const PARTY_STATS_OFFSET: usize = 0x54;

const UNOWN: u16 = 201;
const UNOWN_FORMES: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ!?";

fn decrypt_pk3(pk3_data: &[u8], key: u32) -> Option<[u8; ENCRYPTED_SIZE]> {
    let mut payload = [0u8; ENCRYPTED_SIZE];
    payload.copy_from_slice(pk3_data.get(SUBSTRUCTURE_OFFSET..SUBSTRUCTURE_OFFSET + ENCRYPTED_SIZE)?);

    let mut decryption_key_buf = [0u8; 4];
    LittleEndian::write_u32(&mut decryption_key_buf, key);
    payload
        .chunks_exact_mut(4)
        .for_each(|word| word.iter_mut().zip(decryption_key_buf).for_each(|(byte, key)| *byte ^= key));
    Some(payload)
}

/// Unown letter from the low two bits of each personality byte.
pub fn unown_forme(personality: u32) -> char {
    let value = ((personality >> 24) & 0b11) << 6
        | ((personality >> 16) & 0b11) << 4
        | ((personality >> 8) & 0b11) << 2
        | (personality & 0b11);
    UNOWN_FORMES[value as usize % UNOWN_FORMES.len()] as char
}

/// Contest ribbons are stored as five 3-bit ranks, the rest as single bits 15..=26.
fn count_ribbons(ribbons: u32) -> u32 {
    let contest_ranks: u32 = (0..5).map(|category| (ribbons >> (3 * category)) & 0b111).sum();
    contest_ranks + ((ribbons >> 15) & 0xFFF).count_ones()
}

fn read_party_stats(pk3: ByteWindow<'_>) -> std::io::Result<(u8, Stats)> {
    let level = pk3.u8(PARTY_STATS_OFFSET)?;
    let stats = Stats {
        current_hp: pk3.u16(0x56)?,
        max_hp: pk3.u16(0x58)?,
        attack: pk3.u16(0x5A)?,
        defense: pk3.u16(0x5C)?,
        speed: pk3.u16(0x5E)?,
        sp_attack: pk3.u16(0x60)?,
        sp_defense: pk3.u16(0x62)?,
    };
    Ok((level, stats))
}

/// Decodes one slot. Empty slots, checksum failures and unknown species come back as `None`.
pub fn from_pk3(pk3_data: &[u8], kind: SlotKind) -> Option<Decoded> {
    debug_assert!(matches!(kind, SlotKind::Gen3Party | SlotKind::Gen3Box));
    let pk3 = ByteWindow::new(pk3_data.get(..kind.len())?);

    let personality_value = pk3.u32(0x00).ok()?;
    if personality_value == 0 {
        return None;
    }
    let original_trainer_id = pk3.u32(0x04).ok()?;
    let language = Language::from_byte(pk3.u8(0x12).ok()?);
    let japanese = language == Some(Language::Japanese);
    let nickname = decode_gen3(pk3.bytes(0x08, 10).ok()?, japanese);
    let original_trainer_name = decode_gen3(pk3.bytes(0x14, 7).ok()?, false);
    let stored_checksum = pk3.u16(CHECKSUM_OFFSET).ok()?;

    let payload = decrypt_pk3(pk3_data, personality_value ^ original_trainer_id)?;
    let computed_checksum = record_checksum(&payload);
    if computed_checksum != stored_checksum {
        log::warn!(
            "Dropping GBA record {personality_value:08x}: checksum 0x{computed_checksum:04x} != stored 0x{stored_checksum:04x}"
        );
        return None;
    }

    let order = gen3_order_index(personality_value);
    let block = |component| ByteWindow::new(substructure(&payload, component, order, SUBSTRUCTURE_SIZE));
    let growth = block(Component::Growth);
    let attacks = block(Component::Attacks);
    let evs_conditions = block(Component::EvsConditions);
    let misc = block(Component::Miscellaneous);

    let internal_species = growth.u16(0).ok()?;
    let Some(dex_number) = data::gen3_national_dex(internal_species) else {
        log::warn!("Dropping GBA record {personality_value:08x}: species index {internal_species} is out of range");
        return None;
    };
    let held_item_id = growth.u16(2).ok()?;
    let experience = growth.u32(4).ok()?;
    let friendship = growth.u8(9).ok()?;

    let moves = (0..4)
        .filter_map(|idx| attacks.u16(idx * 2).ok())
        .filter(|move_id| *move_id != 0)
        .map(data::move_name)
        .collect();

    let evs = StatSpread::from_stored(evs_conditions.array::<6>(0).ok()?);
    let contest = ContestStats::from_stored(evs_conditions.array::<6>(6).ok()?);

    let pokerus_status = misc.u8(0).ok()?;
    let met_location = misc.u8(1).ok()?;
    let origin_info = misc.u16(2).ok()?;
    let ivs_egg_ability_blob = misc.u32(4).ok()?;
    let ribbons_obedience_data = misc.u32(8).ok()?;

    let stored_met_level = (origin_info & 0x7F) as u8;
    let origin_game = ((origin_info >> 7) & 0xF) as u8;
    let ball = ((origin_info >> 11) & 0xF) as u8;
    let ivs = StatSpread::from_iv_word(ivs_egg_ability_blob);
    let is_egg = ((ivs_egg_ability_blob >> 30) & 0b1) != 0;
    let ability_slot = ((ivs_egg_ability_blob >> 31) & 0b1) != 0;

    let met_level = if !kind.is_party() && !is_egg && stored_met_level == 0 {
        HATCH_LEVEL
    } else {
        stored_met_level
    };
    let (level, stats) = if kind.is_party() {
        let (level, stats) = read_party_stats(pk3).ok()?;
        (level, Some(stats))
    } else {
        (met_level, None)
    };

    let species = data::species_name(dex_number);
    let ot = TrainerId::from_u32(original_trainer_id);
    let record = CreatureRecord {
        types: data::types_for(&species).to_vec(),
        species,
        dex_number,
        nickname,
        level,
        moves,
        shiny: ot.is_shiny(personality_value),
        forme: (dex_number == UNOWN).then(|| unown_forme(personality_value).to_string()),
        item: data::gen3_item_name(held_item_id),
        ability: data::gen3_ability(dex_number, ability_slot)
            .map(data::ability_name)
            .unwrap_or_default(),
        met_location: data::gen3_location_name(met_location),
        met_level,
        pokeball: data::ball_name(ball),
        extra_data: ExtraData {
            evs,
            ivs,
            contest,
            ribbons: count_ribbons(ribbons_obedience_data),
            friendship,
            experience,
            language: language.map(|lang| lang.to_string()).unwrap_or_default(),
            nature: data::nature_name(personality_value).to_owned(),
            ot_name: original_trainer_name,
            ot_id: ot.display_id(),
            is_egg,
            pokerus: pokerus_status,
            origin_game: data::origin_game_name(origin_game),
            stats,
        },
        ..Default::default()
    };
    log::trace!("Decoded GBA record {personality_value:08x} as {}", record.species);

    Some(Decoded {
        key: personality_value,
        record,
    })
}
