use pkgb_core::core_api::{
    CaughtData, CoreErrorCode, InventoryKind, Pokerus, StorageId, TimeOfDay, template,
};
use pkgb_core::gen2::{self, Layout, SaveData};
use pkgb_core::gender::Gender;
use pkgb_core::version::GameVersion;
use pkgb_core::{buffer, items};

fn fixture(layout: &Layout) -> Vec<u8> {
    let mut bytes = vec![0u8; 0x8000];
    bytes[layout.items + 1] = 0xFF;
    bytes[layout.key_items + 1] = 0xFF;
    bytes[layout.balls + 1] = 0xFF;
    bytes[layout.pc_items + 1] = 0xFF;
    bytes[layout.party + 1] = 0xFF;
    bytes[layout.current_box_data + 1] = 0xFF;
    bytes
}

fn with_party_member(layout: &'static Layout, species_id: u16, level: u8) -> SaveData {
    let mut save = SaveData::from_bytes(fixture(layout)).expect("fixture should parse");
    let mut member = template(save.version());
    member.species_id = species_id;
    member.level = level;
    save.import_pokemon(StorageId::Party, 0, &member)
        .expect("party import failed");
    save
}

#[test]
fn export_stamps_both_checksums() {
    for layout in [&gen2::GOLD_SILVER, &gen2::CRYSTAL] {
        let mut save = SaveData::from_bytes(fixture(layout)).expect("fixture should parse");
        save.set_trainer_name("GOLD");
        save.set_trainer_id(54321);

        let exported = save.export_to_bytes();
        let sum = gen2::checksum(&exported, layout.checksum_start, layout.checksum_end);
        assert_eq!(buffer::read_u16_le(&exported, layout.primary_checksum), sum);
        assert_eq!(
            buffer::read_u16_le(&exported, layout.secondary_checksum),
            sum
        );
    }
}

#[test]
fn export_copies_every_mirror_range() {
    let mut save = with_party_member(&gen2::GOLD_SILVER, 155, 5);
    save.set_trainer_name("SILVER");

    let exported = save.export_to_bytes();
    for &(start, end, destination) in gen2::GOLD_SILVER.mirrors {
        let length = end - start + 1;
        assert_eq!(
            exported[start..=end],
            exported[destination..destination + length],
            "mirror of {start:#06X}..={end:#06X} does not match"
        );
    }
}

#[test]
fn crystal_mirror_covers_the_whole_primary_region() {
    let save = with_party_member(&gen2::CRYSTAL, 152, 5);
    let exported = save.export_to_bytes();
    for &(start, end, destination) in gen2::CRYSTAL.mirrors {
        let length = end - start + 1;
        assert_eq!(
            exported[start..=end],
            exported[destination..destination + length]
        );
    }
}

#[test]
fn exported_bytes_reopen_to_the_same_state() {
    let mut save = with_party_member(&gen2::CRYSTAL, 245, 40);
    save.set_trainer_name("KRIS");
    save.set_trainer_gender(Gender::Female)
        .expect("Crystal gender edit failed");

    let exported = save.export_to_bytes();
    let reopened = SaveData::from_bytes(exported.clone()).expect("exported bytes should reopen");
    assert_eq!(reopened.version(), GameVersion::Crystal);
    assert_eq!(reopened.trainer().name, "KRIS");
    assert_eq!(reopened.trainer().gender, Gender::Female);
    assert_eq!(
        reopened
            .pokemon(StorageId::Party, 0)
            .expect("party read failed"),
        save.pokemon(StorageId::Party, 0).expect("party read failed")
    );
    assert_eq!(reopened.export_to_bytes(), exported);
}

#[test]
fn the_live_box_is_banked_on_export() {
    let mut save = SaveData::from_bytes(fixture(&gen2::GOLD_SILVER)).expect("fixture should parse");
    let mut member = template(save.version());
    member.species_id = 216;
    member.level = 13;
    let current = save.current_box();
    save.import_pokemon(StorageId::Box(current), 0, &member)
        .expect("box import failed");

    let exported = save.export_to_bytes();
    let banked = gen2::storage::banked_box_base(current as usize);
    assert_eq!(exported[banked], 1);
    assert_eq!(exported[banked + 1], 216);
}

#[test]
fn pokerus_days_are_capped_by_the_strain() {
    let mut save = with_party_member(&gen2::GOLD_SILVER, 161, 7);

    save.set_pokemon_pokerus(
        StorageId::Party,
        0,
        Some(Pokerus { strain: 4, days: 9 }),
    )
    .expect("Pokérus edit failed");
    let stored = save
        .pokemon(StorageId::Party, 0)
        .expect("party read failed");
    let pokerus = stored.pokerus.expect("Pokérus should be present");
    assert_eq!(pokerus.strain, 4);
    assert_eq!(pokerus.days, 1);

    save.set_pokemon_pokerus(StorageId::Party, 0, None)
        .expect("Pokérus edit failed");
    let stored = save
        .pokemon(StorageId::Party, 0)
        .expect("party read failed");
    assert_eq!(stored.pokerus, None);
}

#[test]
fn held_items_translate_through_universal_ids() {
    let mut save = with_party_member(&gen2::CRYSTAL, 158, 5);

    // Universal id 18 is the Potion.
    save.set_pokemon_held_item(StorageId::Party, 0, Some(18))
        .expect("held item edit failed");
    let stored = save
        .pokemon(StorageId::Party, 0)
        .expect("party read failed");
    assert_eq!(stored.held_item, Some(18));

    // A Generation I exclusive has no local id here.
    let err = save
        .set_pokemon_held_item(StorageId::Party, 0, Some(items::GEN1_ONLY_BASE | 5))
        .expect_err("foreign item should be refused");
    assert_eq!(err.code, CoreErrorCode::UnsupportedOperation);
}

#[test]
fn caught_data_is_crystal_only() {
    let caught = CaughtData {
        time: TimeOfDay::Night,
        level: 15,
        trainer_gender: Gender::Female,
        location: 0x21,
    };

    let mut crystal = with_party_member(&gen2::CRYSTAL, 169, 15);
    crystal
        .set_pokemon_caught(StorageId::Party, 0, &caught)
        .expect("Crystal caught edit failed");
    let stored = crystal
        .pokemon(StorageId::Party, 0)
        .expect("party read failed");
    assert_eq!(stored.caught, Some(caught));

    let mut gold_silver = with_party_member(&gen2::GOLD_SILVER, 169, 15);
    let err = gold_silver
        .set_pokemon_caught(StorageId::Party, 0, &caught)
        .expect_err("Gold/Silver has no caught data");
    assert_eq!(err.code, CoreErrorCode::UnsupportedOperation);
}

#[test]
fn unown_reports_a_form_letter_and_fills_the_letter_dex() {
    let mut save = with_party_member(&gen2::CRYSTAL, 201, 5);

    let stored = save
        .pokemon(StorageId::Party, 0)
        .expect("party read failed");
    let letter = stored.form_letter.expect("Unown should carry a form");
    assert!(letter.is_ascii_uppercase());

    save.set_owned(201, true).expect("owned flag edit failed");
    let unown_dex = gen2::CRYSTAL.unown_dex;
    for index in 0..26 {
        assert_eq!(save.bytes()[unown_dex + index], index as u8 + 1);
    }
    assert_eq!(save.bytes()[unown_dex + 26], 1);
}

#[test]
fn every_pocket_kind_is_reachable() {
    let mut save = SaveData::from_bytes(fixture(&gen2::GOLD_SILVER)).expect("fixture should parse");

    save.add_item(InventoryKind::Balls, 4, 5)
        .expect("ball add failed");
    save.add_item(InventoryKind::Keys, items::GEN2_KEY_ITEM_IDS[0], 1)
        .expect("key add failed");
    save.add_item(InventoryKind::Keys, items::GEN2_KEY_ITEM_IDS[0], 1)
        .expect("duplicate key add failed");
    save.add_item(InventoryKind::TechnicalMachines, items::technical_machine_id(7), 2)
        .expect("machine add failed");
    save.add_item(InventoryKind::HiddenMachines, items::hidden_machine_id(1), 1)
        .expect("hidden machine add failed");

    let balls = save
        .inventory(InventoryKind::Balls)
        .expect("ball snapshot failed");
    assert_eq!(balls.items.len(), 1);
    assert_eq!(balls.items[0].quantity, 5);

    let keys = save
        .inventory(InventoryKind::Keys)
        .expect("key snapshot failed");
    assert_eq!(keys.items.len(), 1);
    assert_eq!(keys.max_quantity, 1);

    let machines = save
        .inventory(InventoryKind::TechnicalMachines)
        .expect("machine snapshot failed");
    assert_eq!(machines.items.len(), 1);
    assert_eq!(machines.items[0].id, items::technical_machine_id(7));

    let err = save
        .remove_item(InventoryKind::HiddenMachines, 0)
        .expect_err("hidden machines cannot be discarded");
    assert_eq!(err.code, CoreErrorCode::UnsupportedOperation);
}
