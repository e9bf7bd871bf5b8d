mod common;

use common::{gen3_block_len, Gen3Mon, Gen3Save, GEN3_BLOCK_A, GEN3_BLOCK_B, GEN3_SAVE_LEN};
use pksav::{parse_gen3_save, BoxMapping, ParserOptions, SaveError, SelectedGame};

const BULBASAUR: u16 = 1;
const PIKACHU: u16 = 25;
const MEWTWO: u16 = 150;
const UNOWN: u16 = 201;

fn trainer_save() -> Gen3Save {
    let mut save = Gen3Save::ruby();
    save.set_trainer("May", 438, 4660, 3000);
    save
}

fn species(result: &pksav::ParseResult) -> Vec<&str> {
    result.pokemon.iter().map(|mon| mon.species.as_str()).collect()
}

#[test]
fn reads_trainer_and_party() {
    let mut save = trainer_save();
    save.set_party(&[Gen3Mon::new(0x0000_1001, PIKACHU, "Sparky")]);
    let result = parse_gen3_save(&save.image(1), &ParserOptions::with_game(SelectedGame::RS)).unwrap();

    assert_eq!(result.trainer.name, "May");
    assert_eq!(result.trainer.id, "00438");
    assert_eq!(result.trainer.money, "3000");
    assert_eq!(result.trainer.time, "12:05:09");
    assert_eq!(result.trainer.badges, Some(0));

    let pikachu = &result.pokemon[0];
    assert_eq!(pikachu.id, "4097");
    assert_eq!(pikachu.nickname, "Sparky");
    assert_eq!(pikachu.status, "Team");
    assert_eq!(pikachu.position, 1);
    assert_eq!(pikachu.level, 5);
    assert_eq!(pikachu.ability, "Static");
    assert_eq!(pikachu.moves, vec!["Tackle"]);
    assert_eq!(pikachu.met_location, "Route 101");
    assert_eq!(pikachu.extra_data.ot_name, "BRENDAN");
    assert_eq!(pikachu.extra_data.stats.unwrap().max_hp, 22);
}

#[test]
fn newer_block_wins() {
    let mut older = trainer_save();
    older.set_party(&[Gen3Mon::new(0x0000_2002, BULBASAUR, "Bulby")]);
    let mut newer = trainer_save();
    newer.set_party(&[Gen3Mon::new(0x0000_3003, PIKACHU, "Sparky")]);

    let mut image = vec![0u8; GEN3_SAVE_LEN];
    older.write_into(&mut image, GEN3_BLOCK_A, 5, 0);
    newer.write_into(&mut image, GEN3_BLOCK_B, 7, 4);
    let result = parse_gen3_save(&image, &ParserOptions::default()).unwrap();
    assert_eq!(species(&result), ["Pikachu"]);

    // A broken signature anywhere in block B falls back to block A
    image[GEN3_BLOCK_B + 3 * 0x1000 + 0xFF8] ^= 0x01;
    let result = parse_gen3_save(&image, &ParserOptions::default()).unwrap();
    assert_eq!(species(&result), ["Bulbasaur"]);
}

#[test]
fn section_checksum_failure_invalidates_block() {
    let mut older = trainer_save();
    older.set_party(&[Gen3Mon::new(0x0000_2002, BULBASAUR, "Bulby")]);
    let mut newer = trainer_save();
    newer.set_party(&[Gen3Mon::new(0x0000_3003, PIKACHU, "Sparky")]);

    let mut image = vec![0u8; GEN3_SAVE_LEN];
    older.write_into(&mut image, GEN3_BLOCK_A, 5, 0);
    newer.write_into(&mut image, GEN3_BLOCK_B, 7, 0);
    image[GEN3_BLOCK_B + 0x1000 + 0x300] ^= 0x10;
    let result = parse_gen3_save(&image, &ParserOptions::default()).unwrap();
    assert_eq!(species(&result), ["Bulbasaur"]);
}

#[test]
fn unreadable_saves_fail() {
    assert!(matches!(
        parse_gen3_save(&vec![0u8; 0x1000], &ParserOptions::default()),
        Err(SaveError::InvalidLength { found: 0x1000, .. })
    ));
    assert!(matches!(
        parse_gen3_save(&vec![0u8; GEN3_SAVE_LEN], &ParserOptions::default()),
        Err(SaveError::NoValidBlock)
    ));
}

#[test]
fn trimmed_image_is_accepted() {
    let mut save = trainer_save();
    save.set_party(&[Gen3Mon::new(0x0000_3003, PIKACHU, "Sparky")]);
    let mut image = save.image(1);
    image.truncate(2 * gen3_block_len());
    assert_eq!(species(&parse_gen3_save(&image, &ParserOptions::default()).unwrap()), ["Pikachu"]);
}

#[test]
fn corrupted_record_is_dropped() {
    let mut save = trainer_save();
    save.set_box_slot(0, 0, &Gen3Mon::new(0x0000_4004, BULBASAUR, "Bulby"));
    let mut damaged = Gen3Mon::new(0x0000_5005, PIKACHU, "Sparky").encode(false);
    damaged[0x30] ^= 0x40;
    save.set_box_bytes(0, 1, &damaged);

    let result = parse_gen3_save(&save.image(1), &ParserOptions::default()).unwrap();
    assert_eq!(species(&result), ["Bulbasaur"]);
}

#[test]
fn box_mappings_label_boxes() {
    let mut save = trainer_save();
    save.set_box_slot(0, 0, &Gen3Mon::new(0x0000_6006, BULBASAUR, "Bulby"));
    save.set_box_slot(2, 3, &Gen3Mon::new(0x0000_7007, MEWTWO, "Mewtwo"));
    // Straddles the boundary between two storage sections
    save.set_box_slot(1, 19, &Gen3Mon::new(0x0000_8008, PIKACHU, "Sparky"));
    let options = ParserOptions {
        box_mappings: vec![BoxMapping {
            key: 3,
            status: "Dead".to_owned(),
        }],
        selected_game: Some(SelectedGame::RS),
    };

    let result = parse_gen3_save(&save.image(1), &options).unwrap();
    assert_eq!(species(&result), ["Bulbasaur", "Pikachu", "Mewtwo"]);
    let statuses: Vec<_> = result.pokemon.iter().map(|mon| mon.status.as_str()).collect();
    assert_eq!(statuses, ["Boxed", "Boxed", "Dead"]);
    let positions: Vec<_> = result.pokemon.iter().map(|mon| mon.position).collect();
    assert_eq!(positions, [1, 40, 12]);
}

#[test]
fn boxed_hatchlings_get_hatch_level() {
    let mut save = trainer_save();
    let mut hatched = Gen3Mon::new(0x0000_9009, PIKACHU, "Sparky");
    hatched.met_level = 0;
    save.set_box_slot(0, 0, &hatched);

    let result = parse_gen3_save(&save.image(1), &ParserOptions::default()).unwrap();
    assert_eq!(result.pokemon[0].met_level, 5);
    assert_eq!(result.pokemon[0].level, 5);
    assert!(!result.pokemon[0].extra_data.is_egg);
}

#[test]
fn boxed_eggs_keep_met_level_zero() {
    let mut save = trainer_save();
    let mut egg = Gen3Mon::new(0x0000_9119, PIKACHU, "EGG");
    egg.met_level = 0;
    egg.egg = true;
    save.set_box_slot(0, 0, &egg);

    let result = parse_gen3_save(&save.image(1), &ParserOptions::default()).unwrap();
    assert!(result.pokemon[0].extra_data.is_egg);
    assert_eq!(result.pokemon[0].met_level, 0);
    assert_eq!(result.pokemon[0].level, 0);
}

#[test]
fn shiny_follows_trainer_ids() {
    // OT 0x1234_0438: public id 0x0438 XOR secret id 0x1234 is 0x160C
    let mut save = trainer_save();
    save.set_box_slot(0, 0, &Gen3Mon::new(0x160C_0003, PIKACHU, "Shiny"));
    save.set_box_slot(0, 1, &Gen3Mon::new(0x0000_1001, PIKACHU, "Plain"));

    let result = parse_gen3_save(&save.image(1), &ParserOptions::default()).unwrap();
    assert_eq!(result.pokemon[0].nickname, "Shiny");
    assert!(result.pokemon[0].shiny);
    assert_eq!(result.pokemon[1].nickname, "Plain");
    assert!(!result.pokemon[1].shiny);
}

#[test]
fn duplicate_unown_share_forme_and_get_distinct_ids() {
    let mut save = trainer_save();
    let unown = Gen3Mon::new(0x0102_0304, UNOWN, "Unown");
    save.set_box_slot(0, 0, &unown);
    save.set_box_slot(1, 0, &unown);

    let result = parse_gen3_save(&save.image(1), &ParserOptions::default()).unwrap();
    assert_eq!(result.pokemon.len(), 2);
    assert!(result.pokemon[0].forme.is_some());
    assert_eq!(result.pokemon[0].forme, result.pokemon[1].forme);
    assert_eq!(result.pokemon[0].id, "16909060");
    assert_eq!(result.pokemon[1].id, "16909060-1");
}

#[test]
fn party_count_is_capped() {
    let mut save = trainer_save();
    let party: Vec<_> = (0..6)
        .map(|idx| Gen3Mon::new(0x0001_0000 + idx, BULBASAUR + idx as u16 * 3, "Starter"))
        .collect();
    save.set_party_with_size(&party, 9);

    let result = parse_gen3_save(&save.image(1), &ParserOptions::default()).unwrap();
    assert_eq!(result.pokemon.len(), 6);
    assert!(result.pokemon.iter().all(|mon| mon.status == "Team"));
    assert_eq!(result.pokemon[5].position, 6);
}

#[test]
fn emerald_money_is_unmasked() {
    let mut save = Gen3Save::emerald(0xDEAD_BEEF);
    save.set_trainer("May", 438, 4660, 123_456);
    save.set_badges(8);
    let image = save.image(1);

    let detected = parse_gen3_save(&image, &ParserOptions::default()).unwrap();
    assert_eq!(detected.trainer.money, "123456");
    assert_eq!(detected.trainer.badges, Some(8));
    let hinted = parse_gen3_save(&image, &ParserOptions::with_game(SelectedGame::Emerald)).unwrap();
    assert_eq!(hinted.trainer.money, "123456");
}

#[test]
fn firered_offsets_with_and_without_hint() {
    let mut save = Gen3Save::frlg(0x0BAD_F00D);
    save.set_trainer("Red", 438, 4660, 4321);
    save.set_badges(3);
    save.set_party(&[
        Gen3Mon::new(0x0000_3003, PIKACHU, "Sparky"),
        Gen3Mon::new(0x0000_4004, BULBASAUR, "Bulby"),
    ]);
    let image = save.image(1);

    for options in [ParserOptions::default(), ParserOptions::with_game(SelectedGame::FRLG)] {
        let result = parse_gen3_save(&image, &options).unwrap();
        assert_eq!(result.trainer.name, "Red");
        assert_eq!(result.trainer.money, "4321");
        assert_eq!(result.trainer.badges, Some(3));
        assert_eq!(species(&result), ["Pikachu", "Bulbasaur"]);
        assert!(result.pokemon.iter().all(|mon| mon.status == "Team"));
    }
}

#[test]
fn parsing_is_idempotent() {
    let mut save = trainer_save();
    save.set_party(&[Gen3Mon::new(0x0000_3003, PIKACHU, "Sparky")]);
    save.set_box_slot(4, 7, &Gen3Mon::new(0x0000_4004, MEWTWO, "Mewtwo"));
    let image = save.image(3);
    let options = ParserOptions::default();
    assert_eq!(
        parse_gen3_save(&image, &options).unwrap(),
        parse_gen3_save(&image, &options).unwrap()
    );
}
