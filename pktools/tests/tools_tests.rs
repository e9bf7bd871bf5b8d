use std::{io::Write, path::PathBuf};

use byteorder::{ByteOrder, LittleEndian};
use pksav::{
    checksum::{record_checksum, section_checksum},
    gen3::save::{checksum_length, SECTION_SIGNATURE, SECTION_SIZE},
    shuffle::{gen3_order_index, offset_for, Component},
    SelectedGame,
};
use pktools::{blocks, inspect, list, load::SaveArgs};
use tempfile::NamedTempFile;

const PIKACHU_PID: u32 = 0x0000_1001;

/// A 100-byte party Pikachu nicknamed "PIKA".
fn party_pikachu() -> Vec<u8> {
    let ot_id = 0x1234_0438u32;
    let mut pk3 = vec![0u8; 100];
    LittleEndian::write_u32(&mut pk3[0x00..], PIKACHU_PID);
    LittleEndian::write_u32(&mut pk3[0x04..], ot_id);
    pk3[0x08..0x0D].copy_from_slice(&[0xCA, 0xC3, 0xC5, 0xBB, 0xFF]);
    pk3[0x12] = 2;

    let mut plain = [0u8; 48];
    let growth = offset_for(Component::Growth, gen3_order_index(PIKACHU_PID), 12);
    LittleEndian::write_u16(&mut plain[growth..], 25);
    LittleEndian::write_u16(&mut pk3[0x1C..], record_checksum(&plain));
    let mut key = [0u8; 4];
    LittleEndian::write_u32(&mut key, PIKACHU_PID ^ ot_id);
    for (idx, byte) in plain.iter().enumerate() {
        pk3[0x20 + idx] = byte ^ key[idx % 4];
    }
    pk3[0x54] = 12;
    pk3
}

/// Ruby save with a trainer named "MAY", one Pikachu in the party, and only block A written.
fn ruby_save() -> Vec<u8> {
    let mut image = vec![0u8; 0x20000];
    for id in 0..14u16 {
        let start = id as usize * SECTION_SIZE;
        let section = &mut image[start..start + SECTION_SIZE];
        match id {
            0 => {
                section[0..4].copy_from_slice(&[0xC7, 0xBB, 0xD3, 0xFF]);
                LittleEndian::write_u16(&mut section[0x0A..], 438);
            }
            1 => {
                LittleEndian::write_u32(&mut section[0x234..], 1);
                section[0x238..0x238 + 100].copy_from_slice(&party_pikachu());
                LittleEndian::write_u32(&mut section[0x490..], 2500);
            }
            _ => {}
        }
        let checksum = section_checksum(&section[..0xFF4], checksum_length(id));
        LittleEndian::write_u16(&mut section[0xFF4..], id);
        LittleEndian::write_u16(&mut section[0xFF6..], checksum);
        LittleEndian::write_u32(&mut section[0xFF8..], SECTION_SIGNATURE);
        LittleEndian::write_u32(&mut section[0xFFC..], 1);
    }
    image
}

fn temp_save(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

fn save_args(file: &NamedTempFile) -> SaveArgs {
    SaveArgs {
        sav: PathBuf::from(file.path()),
        game: None,
        box_status: Vec::new(),
        options: None,
    }
}

#[test]
fn inspect_prints_json() {
    let file = temp_save(&ruby_save());
    let output = inspect::render(&inspect::Opts { save: save_args(&file) }).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["trainer"]["name"], "MAY");
    assert_eq!(json["trainer"]["id"], "00438");
    assert_eq!(json["trainer"]["money"], "2500");
    assert_eq!(json["pokemon"][0]["species"], "Pikachu");
    assert_eq!(json["pokemon"][0]["nickname"], "PIKA");
    assert_eq!(json["pokemon"][0]["status"], "Team");
    assert_eq!(json["pokemon"][0]["extraData"]["stats"]["currentHp"], 0);
}

#[test]
fn list_prints_a_table() {
    let file = temp_save(&ruby_save());
    let output = list::render(&list::Opts { save: save_args(&file) }).unwrap();
    assert!(output.starts_with("MAY (00438)"));
    assert!(output.contains("SPECIES"));
    assert!(output.contains("Pikachu"));
    assert!(output.contains("Team"));
}

#[test]
fn blocks_reports_both_gba_blocks() {
    let file = temp_save(&ruby_save());
    let output = blocks::render(&blocks::Opts {
        save: save_args(&file),
        json: true,
    })
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json[0]["valid"], true);
    assert_eq!(json[1]["valid"], false);
}

#[test]
fn blocks_reports_ds_layouts() {
    let file = temp_save(&vec![0u8; 0x80000]);
    let output = blocks::render(&blocks::Opts {
        save: save_args(&file),
        json: false,
    })
    .unwrap();
    assert!(output.contains("HGSS"));
    assert!(output.contains("crc"));
}

#[test]
fn ds_hint_forces_ds_parser() {
    let file = temp_save(&ruby_save());
    let mut args = save_args(&file);
    args.game = Some(SelectedGame::DP);
    let output = inspect::render(&inspect::Opts { save: args }).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(json["pokemon"].as_array().unwrap().is_empty());
}

#[test]
fn wrong_size_gba_hint_is_an_error() {
    let file = temp_save(&[0u8; 0x1000]);
    let mut args = save_args(&file);
    args.game = Some(SelectedGame::Emerald);
    assert!(inspect::render(&inspect::Opts { save: args }).is_err());
}

#[test]
fn options_file_merges_with_flags() {
    let mut options_file = NamedTempFile::new().unwrap();
    write!(
        options_file,
        r#"{{"boxMappings":[{{"key":1,"status":"Dead"}},{{"key":2,"status":"Boxed"}}],"selectedGame":"FRLG"}}"#
    )
    .unwrap();
    let save = temp_save(&ruby_save());
    let mut args = save_args(&save);
    args.options = Some(PathBuf::from(options_file.path()));
    args.game = Some(SelectedGame::RS);
    args.box_status = vec![pksav::BoxMapping {
        key: 2,
        status: "Daycare".to_owned(),
    }];

    let options = args.parser_options().unwrap();
    assert_eq!(options.selected_game, Some(SelectedGame::RS));
    assert_eq!(options.status_for_box(0), "Dead");
    assert_eq!(options.status_for_box(1), "Daycare");
}
