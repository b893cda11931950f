use pkgb_core::core_api::{
    CapabilityIssue, CoreErrorCode, Engine, InventoryKind, StorageId, template,
};
use pkgb_core::gender::Gender;
use pkgb_core::version::{GameVersion, Generation};
use pkgb_core::{gen1, gen2};

fn gen1_fixture() -> Vec<u8> {
    let mut bytes = vec![0u8; 0x8000];
    // Empty bag, party, and live box, each with its list terminator.
    bytes[gen1::inventory::BAG + 1] = 0xFF;
    bytes[gen1::storage::PARTY + 1] = 0xFF;
    bytes[gen1::storage::CURRENT_BOX_DATA + 1] = 0xFF;
    bytes
}

fn gen2_fixture(layout: &gen2::Layout) -> Vec<u8> {
    let mut bytes = vec![0u8; 0x8000];
    bytes[layout.items + 1] = 0xFF;
    bytes[layout.key_items + 1] = 0xFF;
    bytes[layout.balls + 1] = 0xFF;
    bytes[layout.pc_items + 1] = 0xFF;
    bytes[layout.party + 1] = 0xFF;
    bytes[layout.current_box_data + 1] = 0xFF;
    bytes
}

#[test]
fn engine_auto_detects_red_blue() {
    let engine = Engine::new();
    let session = engine
        .open_bytes(gen1_fixture(), None)
        .expect("failed to open Red/Blue fixture");

    assert_eq!(session.version(), GameVersion::RedBlue);
    assert_eq!(session.snapshot().version, GameVersion::RedBlue);
    assert_eq!(session.snapshot().party_size, 0);
    assert_eq!(session.box_count(), 12);

    let caps = session.capabilities();
    assert!(caps.can_query);
    assert!(caps.can_apply_edits);
    assert!(caps.issues.is_empty());
}

#[test]
fn engine_detects_yellow_by_starter_byte() {
    let mut bytes = gen1_fixture();
    bytes[0x29C3] = 0x54;

    let engine = Engine::new();
    let session = engine
        .open_bytes(bytes, None)
        .expect("failed to open Yellow fixture");
    assert_eq!(session.version(), GameVersion::Yellow);
}

#[test]
fn engine_tells_crystal_and_gold_silver_apart() {
    let engine = Engine::new();

    let crystal = engine
        .open_bytes(gen2_fixture(&gen2::CRYSTAL), None)
        .expect("failed to open Crystal fixture");
    assert_eq!(crystal.version(), GameVersion::Crystal);
    assert_eq!(crystal.box_count(), 14);

    let gold_silver = engine
        .open_bytes(gen2_fixture(&gen2::GOLD_SILVER), None)
        .expect("failed to open Gold/Silver fixture");
    assert_eq!(gold_silver.version(), GameVersion::GoldSilver);
}

#[test]
fn unrecognised_input_is_unsupported_format() {
    let engine = Engine::new();

    let err = engine
        .open_bytes(vec![0xABu8; 0x8000], None)
        .expect_err("garbage should not parse");
    assert_eq!(err.code, CoreErrorCode::UnsupportedFormat);

    let err = engine
        .open_bytes(vec![0u8; 123], None)
        .expect_err("a short buffer should not parse");
    assert_eq!(err.code, CoreErrorCode::UnsupportedFormat);
}

#[test]
fn generation_hint_overrides_detection() {
    let engine = Engine::new();

    // A Generation I save refused under a Generation II hint.
    let err = engine
        .open_bytes(gen1_fixture(), Some(Generation::II))
        .expect_err("hint should force the other backend");
    assert_eq!(err.code, CoreErrorCode::UnsupportedFormat);

    let session = engine
        .open_bytes(gen1_fixture(), Some(Generation::I))
        .expect("hinted open failed");
    assert_eq!(session.version(), GameVersion::RedBlue);
}

#[test]
fn trailing_emulator_bytes_are_reported_and_preserved() {
    let mut bytes = gen1_fixture();
    bytes.extend_from_slice(&[0xAB; 0x2C]);
    assert_eq!(bytes.len(), 0x802C);

    let engine = Engine::new();
    let session = engine
        .open_bytes(bytes, None)
        .expect("failed to open fixture with trailing bytes");
    assert!(
        session
            .capabilities()
            .issues
            .contains(&CapabilityIssue::TrailingDataPreserved)
    );

    let exported = session.export_to_bytes();
    assert_eq!(exported.len(), 0x802C);
    assert!(exported[0x8000..].iter().all(|&b| b == 0xAB));
}

#[test]
fn trainer_edits_survive_an_export_cycle() {
    let engine = Engine::new();
    let mut session = engine
        .open_bytes(gen1_fixture(), None)
        .expect("failed to open fixture");

    session.set_trainer_name("RED");
    session.set_trainer_id(12345);
    assert_eq!(session.snapshot().trainer.name, "RED");
    assert_eq!(session.snapshot().trainer.visible_id, 12345);

    let err = session
        .set_trainer_gender(Gender::Female)
        .expect_err("Generation I has no trainer gender");
    assert_eq!(err.code, CoreErrorCode::UnsupportedOperation);

    let reopened = engine
        .open_bytes(session.export_to_bytes(), None)
        .expect("exported bytes should reopen");
    assert_eq!(reopened.trainer().name, "RED");
    assert_eq!(reopened.trainer().visible_id, 12345);
}

#[test]
fn crystal_trainer_gender_is_writable() {
    let engine = Engine::new();
    let mut session = engine
        .open_bytes(gen2_fixture(&gen2::CRYSTAL), None)
        .expect("failed to open Crystal fixture");

    session
        .set_trainer_gender(Gender::Female)
        .expect("Crystal trainer gender edit failed");
    assert_eq!(session.trainer().gender, Gender::Female);

    let mut gold_silver = engine
        .open_bytes(gen2_fixture(&gen2::GOLD_SILVER), None)
        .expect("failed to open Gold/Silver fixture");
    let err = gold_silver
        .set_trainer_gender(Gender::Female)
        .expect_err("Gold/Silver has no trainer gender");
    assert_eq!(err.code, CoreErrorCode::UnsupportedOperation);
}

#[test]
fn template_fields_follow_the_generation() {
    let first = template(GameVersion::RedBlue);
    assert!(first.is_empty());
    assert_eq!(first.level, 1);
    assert_eq!(first.friendship, None);

    let second = template(GameVersion::Crystal);
    assert_eq!(second.friendship, Some(0));
    assert_eq!(second.pokerus, None);
}

#[test]
fn party_import_updates_snapshot_and_dex() {
    let engine = Engine::new();
    let mut session = engine
        .open_bytes(gen1_fixture(), None)
        .expect("failed to open fixture");

    let mut member = template(GameVersion::RedBlue);
    member.species_id = 1;
    member.nickname = "BULBA".to_string();
    member.trainer_name = "RED".to_string();
    member.level = 5;
    session
        .import_pokemon(StorageId::Party, 0, &member)
        .expect("party import failed");
    assert_eq!(session.snapshot().party_size, 1);

    let stored = session
        .pokemon(StorageId::Party, 0)
        .expect("reading the imported slot failed");
    assert_eq!(stored.species_id, 1);
    assert_eq!(stored.nickname, "BULBA");
    assert_eq!(stored.level, 5);
    assert!(stored.statistics.health > 0);

    session.set_owned(1, true).expect("owned flag edit failed");
    session.set_seen(1, true).expect("seen flag edit failed");
    assert_eq!(session.snapshot().owned_count, 1);
    assert_eq!(session.snapshot().seen_count, 1);
    assert!(session.is_owned(1).expect("owned query failed"));
}

#[test]
fn moving_between_party_and_box_keeps_the_record() {
    let engine = Engine::new();
    let mut session = engine
        .open_bytes(gen1_fixture(), None)
        .expect("failed to open fixture");

    let mut member = template(GameVersion::RedBlue);
    member.species_id = 25;
    member.nickname = "SPARKY".to_string();
    member.level = 12;
    session
        .import_pokemon(StorageId::Party, 0, &member)
        .expect("party import failed");

    session
        .move_pokemon(StorageId::Party, 0, StorageId::Box(3), 0)
        .expect("move to box failed");
    assert_eq!(session.snapshot().party_size, 0);
    assert_eq!(
        session
            .storage_size(StorageId::Box(3))
            .expect("box size query failed"),
        1
    );

    let boxed = session
        .pokemon(StorageId::Box(3), 0)
        .expect("reading the boxed slot failed");
    assert_eq!(boxed.species_id, 25);
    assert_eq!(boxed.nickname, "SPARKY");
    assert_eq!(boxed.level, 12);
}

#[test]
fn adding_items_stacks_and_caps_at_the_slot_maximum() {
    let engine = Engine::new();
    let mut session = engine
        .open_bytes(gen1_fixture(), None)
        .expect("failed to open fixture");

    // Universal id 5 is the Poké Ball.
    session
        .add_item(InventoryKind::General, 5, 10)
        .expect("first add failed");
    session
        .add_item(InventoryKind::General, 5, 95)
        .expect("second add failed");

    let bag = session
        .inventory(InventoryKind::General)
        .expect("bag snapshot failed");
    assert_eq!(bag.items.len(), 1);
    assert_eq!(bag.items[0].id, 5);
    assert_eq!(bag.items[0].quantity, 99);

    session
        .remove_item(InventoryKind::General, 0)
        .expect("removal failed");
    let bag = session
        .inventory(InventoryKind::General)
        .expect("bag snapshot failed");
    assert!(bag.items.is_empty());
}

#[test]
fn level_and_experience_edits_reconcile_each_other() {
    let engine = Engine::new();
    let mut session = engine
        .open_bytes(gen1_fixture(), None)
        .expect("failed to open fixture");

    let mut member = template(GameVersion::RedBlue);
    member.species_id = 1;
    member.level = 5;
    session
        .import_pokemon(StorageId::Party, 0, &member)
        .expect("party import failed");

    session
        .set_pokemon_level(StorageId::Party, 0, 50)
        .expect("level edit failed");
    let stored = session
        .pokemon(StorageId::Party, 0)
        .expect("reading the slot failed");
    assert_eq!(stored.level, 50);
    let rate = pkgb_core::species::growth_rate(1).expect("growth rate lookup failed");
    assert_eq!(
        stored.experience,
        pkgb_core::stats::experience_for_level(rate, 50)
    );

    session
        .set_pokemon_experience(StorageId::Party, 0, stored.experience + 1)
        .expect("experience edit failed");
    let stored = session
        .pokemon(StorageId::Party, 0)
        .expect("reading the slot failed");
    assert_eq!(stored.level, 50);
}
