use pkgb_core::core_api::{StorageId, template};
use pkgb_core::gen1::{self, SaveData};
use pkgb_core::version::GameVersion;

fn fixture() -> Vec<u8> {
    let mut bytes = vec![0u8; 0x8000];
    bytes[gen1::inventory::BAG + 1] = 0xFF;
    bytes[gen1::storage::PARTY + 1] = 0xFF;
    bytes[gen1::storage::CURRENT_BOX_DATA + 1] = 0xFF;
    bytes
}

fn yellow_fixture() -> Vec<u8> {
    let mut bytes = fixture();
    bytes[0x29C3] = 0x54;
    bytes
}

fn with_party_member(bytes: Vec<u8>, species_id: u16, level: u8) -> SaveData {
    let mut save = SaveData::from_bytes(bytes).expect("fixture should parse");
    let mut member = template(save.version());
    member.species_id = species_id;
    member.level = level;
    save.import_pokemon(StorageId::Party, 0, &member)
        .expect("party import failed");
    save
}

#[test]
fn export_stamps_the_inverted_checksum() {
    let mut save = with_party_member(fixture(), 1, 5);
    save.set_trainer_name("RED");
    save.set_trainer_id(31337);

    let exported = save.export_to_bytes();
    let sum = exported[0x2598..=0x3522]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b));
    assert_eq!(exported[0x3523], !sum);
    assert_eq!(exported[0x3523], gen1::checksum(&exported));
}

#[test]
fn export_only_touches_the_checksum_byte() {
    let save = with_party_member(fixture(), 1, 5);
    let exported = save.export_to_bytes();

    for (offset, (&a, &b)) in save.bytes().iter().zip(exported.iter()).enumerate() {
        if a != b {
            assert_eq!(offset, gen1::CHECKSUM, "unexpected difference at {offset:#06X}");
        }
    }
}

#[test]
fn exported_bytes_reopen_to_the_same_state() {
    let mut save = with_party_member(fixture(), 151, 70);
    save.set_trainer_name("BLUE");

    let exported = save.export_to_bytes();
    let reopened = SaveData::from_bytes(exported.clone()).expect("exported bytes should reopen");
    assert_eq!(reopened.trainer().name, "BLUE");
    assert_eq!(
        reopened
            .pokemon(StorageId::Party, 0)
            .expect("party read failed"),
        save.pokemon(StorageId::Party, 0).expect("party read failed")
    );
    // A second export is byte-identical: the checksum has settled.
    assert_eq!(reopened.export_to_bytes(), exported);
}

#[test]
fn shininess_is_written_into_the_hidden_stats() {
    let mut save = with_party_member(fixture(), 133, 20);

    save.set_pokemon_shiny(StorageId::Party, 0, true)
        .expect("shiny edit failed");
    let stored = save
        .pokemon(StorageId::Party, 0)
        .expect("party read failed");
    assert!(stored.shiny);
    assert_eq!(stored.ivs.defense, 10);
    assert_eq!(stored.ivs.speed, 10);
    assert_eq!(stored.ivs.special, 10);

    save.set_pokemon_shiny(StorageId::Party, 0, false)
        .expect("shiny edit failed");
    let stored = save
        .pokemon(StorageId::Party, 0)
        .expect("party read failed");
    assert!(!stored.shiny);
}

#[test]
fn yellow_pikachu_keeps_the_light_ball_marker() {
    let save = with_party_member(yellow_fixture(), 25, 10);
    assert_eq!(save.version(), GameVersion::Yellow);

    // Byte 0x07 of the stored struct is the catch rate.
    let data = gen1::storage::party_layout().slot(0).data;
    assert_eq!(save.bytes()[data + 0x07], 0xA3);
}

#[test]
fn catch_rate_survives_evolution_but_not_species_swaps() {
    let mut save = with_party_member(yellow_fixture(), 25, 10);
    let data = gen1::storage::party_layout().slot(0).data;
    assert_eq!(save.bytes()[data + 0x07], 0xA3);

    // Evolving within the family preserves the stored byte.
    save.set_pokemon_species(StorageId::Party, 0, 26)
        .expect("evolution edit failed");
    assert_eq!(save.bytes()[data + 0x07], 0xA3);

    // Swapping to an unrelated species resets it.
    save.set_pokemon_species(StorageId::Party, 0, 1)
        .expect("species edit failed");
    assert_eq!(save.bytes()[data + 0x07], 45);
}

#[test]
fn party_statistics_track_level_edits() {
    let mut save = with_party_member(fixture(), 1, 5);
    let before = save
        .pokemon(StorageId::Party, 0)
        .expect("party read failed")
        .statistics;

    save.set_pokemon_level(StorageId::Party, 0, 80)
        .expect("level edit failed");
    let after = save
        .pokemon(StorageId::Party, 0)
        .expect("party read failed")
        .statistics;
    assert!(after.health > before.health);
    assert!(after.attack > before.attack);
}

#[test]
fn deleting_a_box_slot_shifts_the_tail_up() {
    let mut save = SaveData::from_bytes(fixture()).expect("fixture should parse");
    for (slot, species) in [4u16, 7, 25].iter().enumerate() {
        let mut member = template(save.version());
        member.species_id = *species;
        member.level = 9;
        save.import_pokemon(StorageId::Box(5), slot, &member)
            .expect("box import failed");
    }

    save.delete_pokemon(StorageId::Box(5), 1)
        .expect("box delete failed");
    assert_eq!(
        save.storage_size(StorageId::Box(5))
            .expect("box size query failed"),
        2
    );
    let shifted = save
        .pokemon(StorageId::Box(5), 1)
        .expect("box read failed");
    assert_eq!(shifted.species_id, 25);
}

#[test]
fn box_imports_stay_put_after_an_export_cycle() {
    let mut save = SaveData::from_bytes(fixture()).expect("fixture should parse");
    let mut member = template(save.version());
    member.species_id = 150;
    member.level = 70;
    member.nickname = "MEWTWO".to_string();
    save.import_pokemon(StorageId::Box(11), 0, &member)
        .expect("box import failed");

    let reopened =
        SaveData::from_bytes(save.export_to_bytes()).expect("exported bytes should reopen");
    let stored = reopened
        .pokemon(StorageId::Box(11), 0)
        .expect("box read failed");
    assert_eq!(stored.species_id, 150);
    assert_eq!(stored.nickname, "MEWTWO");
}
