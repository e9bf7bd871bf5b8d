//! Builders for synthetic save images: sections and footers are sealed with real checksums and
//! Pokemon records are shuffled and encrypted the way the games store them.
#![allow(dead_code)]

use byteorder::{ByteOrder, LittleEndian};
use pksav::{
    checksum::{crc16_ccitt, record_checksum, section_checksum},
    gen3::GameCode,
    gen3::save::{checksum_length, BLOCK_SIZE, SECTIONS_PER_BLOCK, SECTION_DATA_SIZE, SECTION_SIGNATURE, SECTION_SIZE},
    gen4::{pokemon::crypt, save::FOOTER_SIZE, Layout, SaveCopy},
    shuffle::{gen3_order_index, gen4_order_index, offset_for, Component},
    SelectedGame,
};

pub const GEN3_SAVE_LEN: usize = 0x20000;
pub const GEN3_BLOCK_A: usize = 0x0000;
pub const GEN3_BLOCK_B: usize = 0xE000;
pub const GEN4_SAVE_LEN: usize = 0x80000;

fn encode_gen3_text(text: &str, len: usize) -> Vec<u8> {
    let mut out: Vec<u8> = text
        .chars()
        .map(|c| match c {
            'A'..='Z' => 0xBB + (c as u8 - b'A'),
            'a'..='z' => 0xD5 + (c as u8 - b'a'),
            '0'..='9' => 0xA1 + (c as u8 - b'0'),
            _ => 0x00,
        })
        .collect();
    out.push(0xFF);
    out.resize(len, 0xFF);
    out.truncate(len);
    out
}

fn encode_gen4_text(text: &str, chars: usize) -> Vec<u8> {
    let mut codes: Vec<u16> = text
        .chars()
        .map(|c| match c {
            'A'..='Z' => 0x012B + (c as u16 - 'A' as u16),
            'a'..='z' => 0x0145 + (c as u16 - 'a' as u16),
            '0'..='9' => 0x0121 + (c as u16 - '0' as u16),
            _ => 0x01DE,
        })
        .collect();
    codes.push(0xFFFF);
    codes.resize(chars, 0xFFFF);
    codes.truncate(chars);
    let mut out = vec![0u8; chars * 2];
    LittleEndian::write_u16_into(&codes, &mut out);
    out
}

/// A GBA Pokemon. `species` is the internal species index.
#[derive(Clone, Debug)]
pub struct Gen3Mon {
    pub personality: u32,
    pub ot_id: u32,
    pub species: u16,
    pub nickname: &'static str,
    pub item: u16,
    pub moves: [u16; 4],
    pub evs: [u8; 6],
    pub met_level: u8,
    pub ball: u8,
    pub level: u8,
    pub egg: bool,
}

impl Gen3Mon {
    pub fn new(personality: u32, species: u16, nickname: &'static str) -> Self {
        Gen3Mon {
            personality,
            ot_id: 0x1234_0438,
            species,
            nickname,
            item: 0,
            moves: [33, 0, 0, 0],
            evs: [0; 6],
            met_level: 5,
            ball: 4,
            level: 5,
            egg: false,
        }
    }

    fn payload(&self) -> [u8; 48] {
        let mut plain = [0u8; 48];
        let order = gen3_order_index(self.personality);
        let growth = offset_for(Component::Growth, order, 12);
        LittleEndian::write_u16(&mut plain[growth..], self.species);
        LittleEndian::write_u16(&mut plain[growth + 2..], self.item);
        LittleEndian::write_u32(&mut plain[growth + 4..], 135);
        plain[growth + 9] = 70;
        let attacks = offset_for(Component::Attacks, order, 12);
        LittleEndian::write_u16_into(&self.moves, &mut plain[attacks..attacks + 8]);
        let evs = offset_for(Component::EvsConditions, order, 12);
        plain[evs..evs + 6].copy_from_slice(&self.evs);
        let misc = offset_for(Component::Miscellaneous, order, 12);
        plain[misc + 1] = 16;
        let origin = self.met_level as u16 | (3 << 7) | ((self.ball as u16) << 11);
        LittleEndian::write_u16(&mut plain[misc + 2..], origin);
        LittleEndian::write_u32(&mut plain[misc + 4..], 0x0000_7FFF | (self.egg as u32) << 30);
        plain
    }

    /// The stored record: 80 bytes for a box, 100 for the party.
    pub fn encode(&self, party: bool) -> Vec<u8> {
        let mut pk3 = vec![0u8; if party { 100 } else { 80 }];
        LittleEndian::write_u32(&mut pk3[0x00..], self.personality);
        LittleEndian::write_u32(&mut pk3[0x04..], self.ot_id);
        pk3[0x08..0x12].copy_from_slice(&encode_gen3_text(self.nickname, 10));
        pk3[0x12] = 2;
        pk3[0x14..0x1B].copy_from_slice(&encode_gen3_text("BRENDAN", 7));

        let plain = self.payload();
        LittleEndian::write_u16(&mut pk3[0x1C..], record_checksum(&plain));
        let mut key = [0u8; 4];
        LittleEndian::write_u32(&mut key, self.personality ^ self.ot_id);
        for (idx, byte) in plain.iter().enumerate() {
            pk3[0x20 + idx] = byte ^ key[idx % 4];
        }

        if party {
            pk3[0x54] = self.level;
            LittleEndian::write_u16_into(&[20, 22, 11, 12, 13, 14, 15], &mut pk3[0x56..0x64]);
        }
        pk3
    }
}

/// The fourteen section payloads of one GBA save block.
#[derive(Clone)]
pub struct Gen3Save {
    sections: Vec<Vec<u8>>,
    game: GameCode,
}

impl Gen3Save {
    fn blank(game: GameCode) -> Self {
        Gen3Save {
            sections: vec![vec![0u8; SECTION_DATA_SIZE]; SECTIONS_PER_BLOCK],
            game,
        }
    }

    /// Ruby/Sapphire offsets; the game-code word stays zero.
    pub fn ruby() -> Self {
        Self::blank(GameCode::RubySapphire)
    }

    /// Emerald offsets, with a non-trivial security key at 0xAC.
    pub fn emerald(security_key: u32) -> Self {
        let mut save = Self::blank(GameCode::Emerald);
        LittleEndian::write_u32(&mut save.sections[0][0xAC..], security_key);
        save
    }

    /// FireRed/LeafGreen offsets: game code 1 at 0xAC and the money key at 0xF20.
    pub fn frlg(security_key: u32) -> Self {
        let mut save = Self::blank(GameCode::FireRedLeafGreen);
        LittleEndian::write_u32(&mut save.sections[0][0xAC..], 1);
        LittleEndian::write_u32(&mut save.sections[0][0xF20..], security_key);
        save
    }

    fn security_key(&self) -> u32 {
        self.game
            .security_key_offset()
            .map_or(0, |offset| LittleEndian::read_u32(&self.sections[0][offset..]))
    }

    /// Byte `offset` of sections 1..=4 taken as one buffer.
    fn save_block_byte(&mut self, offset: usize) -> &mut u8 {
        let len = checksum_length(1);
        &mut self.sections[1 + offset / len][offset % len]
    }

    /// Sets the first `count` badge flags.
    pub fn set_badges(&mut self, count: usize) {
        let (flags_offset, first_badge) = self.game.badge_flags();
        for flag in first_badge..first_badge + count {
            *self.save_block_byte(flags_offset + flag / 8) |= 1 << (flag % 8);
        }
    }

    pub fn section_mut(&mut self, id: usize) -> &mut [u8] {
        &mut self.sections[id]
    }

    pub fn set_trainer(&mut self, name: &str, public_id: u16, secret_id: u16, money: u32) {
        let security_key = self.security_key();
        let money_offset = self.game.money_offset();
        let trainer = &mut self.sections[0];
        trainer[0..7].copy_from_slice(&encode_gen3_text(name, 7));
        trainer[0x08] = 0;
        LittleEndian::write_u16(&mut trainer[0x0A..], public_id);
        LittleEndian::write_u16(&mut trainer[0x0C..], secret_id);
        LittleEndian::write_u16(&mut trainer[0x0E..], 12);
        trainer[0x10] = 5;
        trainer[0x11] = 9;
        LittleEndian::write_u32(&mut self.sections[1][money_offset..], money ^ security_key);
    }

    /// Writes the party list with an explicit stored team size.
    pub fn set_party_with_size(&mut self, party: &[Gen3Mon], team_size: u32) {
        let offset = self.game.team_size_offset();
        let team = &mut self.sections[1];
        LittleEndian::write_u32(&mut team[offset..], team_size);
        for (slot, mon) in party.iter().enumerate() {
            let start = offset + 4 + slot * 100;
            team[start..start + 100].copy_from_slice(&mon.encode(true));
        }
    }

    pub fn set_party(&mut self, party: &[Gen3Mon]) {
        self.set_party_with_size(party, party.len() as u32);
    }

    /// Places a boxed record, splitting it across sections the way the PC buffer does.
    pub fn set_box_slot(&mut self, box_index: usize, slot: usize, mon: &Gen3Mon) {
        self.set_box_bytes(box_index, slot, &mon.encode(false));
    }

    pub fn set_box_bytes(&mut self, box_index: usize, slot: usize, pk3: &[u8]) {
        let start = 4 + (box_index * 30 + slot) * 80;
        for (idx, byte) in pk3.iter().enumerate() {
            let (id, offset) = pc_location(start + idx);
            self.sections[id][offset] = *byte;
        }
    }

    /// Seals the block at `offset`, rotating section order by `rotation`.
    pub fn write_into(&self, image: &mut [u8], offset: usize, save_index: u32, rotation: usize) {
        for order in 0..SECTIONS_PER_BLOCK {
            let id = (order + rotation) % SECTIONS_PER_BLOCK;
            let start = offset + order * SECTION_SIZE;
            let section = &mut image[start..start + SECTION_SIZE];
            section[..SECTION_DATA_SIZE].copy_from_slice(&self.sections[id]);
            let checksum = section_checksum(&self.sections[id], checksum_length(id as u16));
            LittleEndian::write_u16(&mut section[0xFF4..], id as u16);
            LittleEndian::write_u16(&mut section[0xFF6..], checksum);
            LittleEndian::write_u32(&mut section[0xFF8..], SECTION_SIGNATURE);
            LittleEndian::write_u32(&mut section[0xFFC..], save_index);
        }
    }

    /// A full image with only block A written.
    pub fn image(&self, save_index: u32) -> Vec<u8> {
        let mut image = vec![0u8; GEN3_SAVE_LEN];
        self.write_into(&mut image, GEN3_BLOCK_A, save_index, 0);
        image
    }
}

/// Maps an offset in the concatenated PC buffer to (section id, offset in section).
fn pc_location(pc_offset: usize) -> (usize, usize) {
    let mut remaining = pc_offset;
    for id in 5..=13 {
        let len = checksum_length(id as u16);
        if remaining < len {
            return (id, remaining);
        }
        remaining -= len;
    }
    panic!("offset {pc_offset} is past the PC buffer");
}

/// Section id and in-section offset of byte `idx` of a boxed record.
pub fn gen3_box_byte(box_index: usize, slot: usize, idx: usize) -> (usize, usize) {
    pc_location(4 + (box_index * 30 + slot) * 80 + idx)
}

pub fn gen3_block_len() -> usize {
    BLOCK_SIZE
}

/// A DS Pokemon. `species` is the national dex number.
#[derive(Clone, Debug)]
pub struct Gen4Mon {
    pub pid: u32,
    pub species: u16,
    pub ot_id: u32,
    pub nickname: &'static str,
    pub moves: [u16; 4],
    pub forme: u8,
    pub level: u8,
    pub met_level: u8,
    pub evs: [u8; 6],
    pub ball: u8,
    pub egg: bool,
}

impl Gen4Mon {
    pub fn new(pid: u32, species: u16, nickname: &'static str) -> Self {
        Gen4Mon {
            pid,
            species,
            ot_id: 4321 << 16 | 1081,
            nickname,
            moves: [33, 0, 0, 0],
            forme: 0,
            level: 50,
            met_level: 30,
            evs: [4, 0, 0, 252, 252, 0],
            ball: 4,
            egg: false,
        }
    }

    pub fn payload(&self) -> [u8; 0x80] {
        let mut plain = [0u8; 0x80];
        let order = gen4_order_index(self.pid);
        let growth = offset_for(Component::Growth, order, 32);
        LittleEndian::write_u16(&mut plain[growth..], self.species);
        LittleEndian::write_u32(&mut plain[growth + 0x04..], self.ot_id);
        LittleEndian::write_u32(&mut plain[growth + 0x08..], 125_000);
        plain[growth + 0x0C] = 70;
        plain[growth + 0x0D] = 26;
        plain[growth + 0x0F] = 2;
        plain[growth + 0x10..growth + 0x16].copy_from_slice(&self.evs);
        let attacks = offset_for(Component::Attacks, order, 32);
        LittleEndian::write_u16_into(&self.moves, &mut plain[attacks..attacks + 8]);
        LittleEndian::write_u32(&mut plain[attacks + 0x10..], 0x3FFF_FFFF | (self.egg as u32) << 30);
        plain[attacks + 0x18] = self.forme << 3;
        let nickname = offset_for(Component::EvsConditions, order, 32);
        plain[nickname..nickname + 0x16].copy_from_slice(&encode_gen4_text(self.nickname, 11));
        plain[nickname + 0x17] = 10;
        let misc = offset_for(Component::Miscellaneous, order, 32);
        plain[misc..misc + 0x10].copy_from_slice(&encode_gen4_text("ROY", 8));
        LittleEndian::write_u16(&mut plain[misc + 0x18..], 16);
        plain[misc + 0x1B] = self.ball;
        plain[misc + 0x1C] = self.met_level;
        plain
    }

    /// The stored record: 136 bytes for a box, 236 for the party.
    pub fn encode(&self, party: bool) -> Vec<u8> {
        let mut pk4 = vec![0u8; if party { 236 } else { 136 }];
        let plain = self.payload();
        let checksum = record_checksum(&plain);
        LittleEndian::write_u32(&mut pk4[0x00..], self.pid);
        LittleEndian::write_u16(&mut pk4[0x06..], checksum);
        crypt(&plain, checksum as u32, &mut pk4[0x08..0x88]);

        if party {
            let mut battle = [0u8; 0x64];
            battle[0x04] = self.level;
            LittleEndian::write_u16_into(&[150, 160, 120, 110, 130, 140, 100], &mut battle[0x06..0x14]);
            crypt(&battle, self.pid, &mut pk4[0x88..0xEC]);
        }
        pk4
    }
}

pub struct Gen4Trainer {
    pub name: &'static str,
    pub public_id: u16,
    pub secret_id: u16,
    pub money: u32,
    pub badges: u8,
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
}

impl Gen4Trainer {
    pub fn roy() -> Self {
        Gen4Trainer {
            name: "ROY",
            public_id: 1081,
            secret_id: 4321,
            money: 120_881,
            badges: 0xFF,
            hours: 345,
            minutes: 13,
            seconds: 7,
        }
    }
}

/// General and storage blocks of one DS save copy, footers excluded until sealed.
#[derive(Clone)]
pub struct Gen4Save {
    pub layout: &'static Layout,
    general: Vec<u8>,
    storage: Vec<u8>,
}

impl Gen4Save {
    pub fn new(game: SelectedGame) -> Self {
        let layout = Layout::for_game(game).expect("DS layout");
        Gen4Save {
            layout,
            general: vec![0u8; layout.general_size],
            storage: vec![0u8; layout.storage_size],
        }
    }

    pub fn set_trainer(&mut self, trainer: &Gen4Trainer) {
        let base = self.layout.trainer_offset;
        let card = &mut self.general[base..base + 0x26];
        card[0..16].copy_from_slice(&encode_gen4_text(trainer.name, 8));
        LittleEndian::write_u16(&mut card[0x10..], trainer.public_id);
        LittleEndian::write_u16(&mut card[0x12..], trainer.secret_id);
        LittleEndian::write_u32(&mut card[0x14..], trainer.money);
        card[0x18] = 0;
        card[0x1A] = trainer.badges;
        LittleEndian::write_u16(&mut card[0x22..], trainer.hours);
        card[0x24] = trainer.minutes;
        card[0x25] = trainer.seconds;
    }

    pub fn set_party(&mut self, party: &[Gen4Mon]) {
        self.general[self.layout.party_count_offset] = party.len() as u8;
        for (slot, mon) in party.iter().enumerate() {
            let start = self.layout.party_offset + slot * 236;
            self.general[start..start + 236].copy_from_slice(&mon.encode(true));
        }
    }

    pub fn set_box_bytes(&mut self, box_index: usize, slot: usize, pk4: &[u8]) {
        let start = self.layout.box_data_offset + box_index * self.layout.box_stride + slot * 136;
        self.storage[start..start + 136].copy_from_slice(pk4);
    }

    pub fn set_box_slot(&mut self, box_index: usize, slot: usize, mon: &Gen4Mon) {
        self.set_box_bytes(box_index, slot, &mon.encode(false));
    }

    /// Writes both blocks of one copy and seals their footers. The storage block links to
    /// `save_count`.
    pub fn write_into(&self, image: &mut [u8], copy: SaveCopy, save_count: u32) {
        let base = copy.base();
        seal(image, base + self.layout.general_offset, &self.general, 0, save_count);
        seal(image, base + self.layout.storage_offset, &self.storage, save_count, save_count);
    }

    /// A 512 KiB image with only the primary copy written.
    pub fn image(&self, save_count: u32) -> Vec<u8> {
        let mut image = vec![0u8; GEN4_SAVE_LEN];
        self.write_into(&mut image, SaveCopy::Primary, save_count);
        image
    }
}

fn seal(image: &mut [u8], start: usize, block: &[u8], link: u32, save_count: u32) {
    let size = block.len();
    let footer = start + size - FOOTER_SIZE;
    image[start..footer].copy_from_slice(&block[..size - FOOTER_SIZE]);
    image[footer..start + size].fill(0);
    LittleEndian::write_u32(&mut image[footer..], link);
    LittleEndian::write_u32(&mut image[footer + 4..], save_count);
    LittleEndian::write_u32(&mut image[footer + 8..], size as u32);
    let crc = crc16_ccitt(&image[start..footer]);
    LittleEndian::write_u16(&mut image[footer + 0x12..], crc);
}

/// Roy's DP team: Gengar, Lapras, Dragonite, Rayquaza, Bibarel and Darkrai.
pub fn roy_party() -> Vec<Gen4Mon> {
    vec![
        Gen4Mon::new(0x0A11_0001, 94, "GENGAR"),
        Gen4Mon::new(0x0B22_4002, 131, "LAPRAS"),
        Gen4Mon::new(0x0C33_8003, 149, "DRAGONITE"),
        Gen4Mon::new(0x0D44_C004, 384, "RAYQUAZA"),
        Gen4Mon::new(0x0E56_0005, 400, "BIBAREL"),
        Gen4Mon::new(0x0F66_4006, 491, "DARKRAI"),
    ]
}
