use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pkgb_core::core_api::{InventoryKind, InventorySnapshot, PokemonSnapshot, StorageId};
use pkgb_core::gender::Gender;
use pkgb_core::version::Generation;
use pkgb_core::{Engine, Session};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PocketArg {
    General,
    Computer,
    Balls,
    Keys,
    Tms,
    Hms,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.sav")]
    path: PathBuf,
    #[arg(
        long,
        value_name = "1|2|gen1|gen2|rby|gsc",
        value_parser = parse_generation_hint
    )]
    game: Option<Generation>,
    #[arg(long, conflicts_with_all = ["game", "gen2"])]
    gen1: bool,
    #[arg(long, conflicts_with = "game")]
    gen2: bool,
    #[arg(long)]
    trainer: bool,
    #[arg(long = "game-version")]
    game_version: bool,
    #[arg(long)]
    party: bool,
    #[arg(long = "box", value_name = "N")]
    box_number: Option<u8>,
    #[arg(long = "current-box")]
    current_box: bool,
    #[arg(long)]
    dex: bool,
    #[arg(long)]
    bag: bool,
    #[arg(long = "pc-items")]
    pc_items: bool,
    #[arg(long)]
    balls: bool,
    #[arg(long)]
    keys: bool,
    #[arg(long)]
    tms: bool,
    #[arg(long)]
    hms: bool,
    #[arg(long)]
    json: bool,
    #[arg(long = "set-trainer-name")]
    set_trainer_name: Option<String>,
    #[arg(long = "set-trainer-id")]
    set_trainer_id: Option<u16>,
    #[arg(long = "set-trainer-gender")]
    set_trainer_gender: Option<GenderArg>,
    /// Party or box position, counted from 1, for the --set-* creature
    /// edits below.
    #[arg(long, value_name = "N")]
    slot: Option<usize>,
    /// Apply the creature edits inside this box instead of the party.
    #[arg(long = "in-box", value_name = "N")]
    in_box: Option<u8>,
    #[arg(long = "set-species")]
    set_species: Option<u16>,
    #[arg(long = "set-level")]
    set_level: Option<u8>,
    #[arg(long = "set-exp")]
    set_exp: Option<u32>,
    #[arg(long = "set-shiny", value_name = "true|false")]
    set_shiny: Option<bool>,
    #[arg(long = "set-nickname")]
    set_nickname: Option<String>,
    /// Universal item id; 0 removes the held item.
    #[arg(long = "set-held-item")]
    set_held_item: Option<u16>,
    #[arg(long = "set-friendship")]
    set_friendship: Option<u8>,
    #[arg(long = "mark-owned", value_name = "SPECIES")]
    mark_owned: Option<u16>,
    #[arg(long = "mark-seen", value_name = "SPECIES")]
    mark_seen: Option<u16>,
    #[arg(long = "add-item", value_name = "ID")]
    add_item: Option<u16>,
    #[arg(long = "item-quantity", default_value_t = 1)]
    item_quantity: u8,
    #[arg(long, value_enum, default_value_t = PocketArg::General)]
    pocket: PocketArg,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldSelection {
    trainer: bool,
    game_version: bool,
    party: bool,
    box_number: Option<u8>,
    current_box: bool,
    dex: bool,
    bag: bool,
    pc_items: bool,
    balls: bool,
    keys: bool,
    tms: bool,
    hms: bool,
}

impl FieldSelection {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            trainer: cli.trainer,
            game_version: cli.game_version,
            party: cli.party,
            box_number: cli.box_number,
            current_box: cli.current_box,
            dex: cli.dex,
            bag: cli.bag,
            pc_items: cli.pc_items,
            balls: cli.balls,
            keys: cli.keys,
            tms: cli.tms,
            hms: cli.hms,
        }
    }

    fn is_field_mode(&self) -> bool {
        self.trainer
            || self.game_version
            || self.party
            || self.box_number.is_some()
            || self.current_box
            || self.dex
            || self.bag
            || self.pc_items
            || self.balls
            || self.keys
            || self.tms
            || self.hms
    }

    fn selected_pairs(&self, session: &Session) -> Vec<(&'static str, String)> {
        let snapshot = session.snapshot();
        let mut out = Vec::new();

        if self.game_version {
            out.push(("game", snapshot.version.to_string()));
        }
        if self.trainer {
            out.push(("trainer_name", snapshot.trainer.name.clone()));
            out.push(("trainer_id", snapshot.trainer.visible_id.to_string()));
            out.push(("trainer_gender", snapshot.trainer.gender.to_string()));
        }
        if self.party {
            push_storage_pairs(&mut out, "party", session, StorageId::Party);
        }
        if let Some(number) = self.box_number {
            push_storage_pairs(&mut out, "box", session, box_storage(session, number));
        }
        if self.current_box {
            out.push(("current_box", (session.current_box() + 1).to_string()));
            out.push(("box_count", session.box_count().to_string()));
        }
        if self.dex {
            out.push(("dex_owned", snapshot.owned_count.to_string()));
            out.push(("dex_seen", snapshot.seen_count.to_string()));
        }
        for (key, kind) in self.selected_pockets() {
            match session.inventory(kind) {
                Ok(inventory) => {
                    for item in &inventory.items {
                        out.push((key, format!("{}x id={}", item.quantity, item.id)));
                    }
                }
                Err(e) => out.push((key, format!("unavailable: {e}"))),
            }
        }

        out
    }

    fn selected_json(&self, session: &Session) -> JsonMap<String, JsonValue> {
        let snapshot = session.snapshot();
        let mut out = JsonMap::new();

        if self.game_version {
            out.insert(
                "game".to_string(),
                JsonValue::String(snapshot.version.to_string()),
            );
        }
        if self.trainer {
            out.insert("trainer".to_string(), to_json_or_exit(&snapshot.trainer));
        }
        if self.party {
            out.insert(
                "party".to_string(),
                storage_to_json(session, StorageId::Party),
            );
        }
        if let Some(number) = self.box_number {
            out.insert(
                "box".to_string(),
                storage_to_json(session, box_storage(session, number)),
            );
        }
        if self.current_box {
            out.insert(
                "current_box".to_string(),
                JsonValue::from(snapshot.current_box + 1),
            );
            out.insert("box_count".to_string(), JsonValue::from(snapshot.box_count));
        }
        if self.dex {
            out.insert(
                "dex_owned".to_string(),
                JsonValue::from(snapshot.owned_count),
            );
            out.insert("dex_seen".to_string(), JsonValue::from(snapshot.seen_count));
        }
        for (key, kind) in self.selected_pockets() {
            out.insert(key.to_string(), inventory_to_json(session, kind));
        }

        out
    }

    fn selected_pockets(&self) -> Vec<(&'static str, InventoryKind)> {
        let mut out = Vec::new();
        if self.bag {
            out.push(("bag", InventoryKind::General));
        }
        if self.pc_items {
            out.push(("pc_items", InventoryKind::Computer));
        }
        if self.balls {
            out.push(("balls", InventoryKind::Balls));
        }
        if self.keys {
            out.push(("keys", InventoryKind::Keys));
        }
        if self.tms {
            out.push(("tms", InventoryKind::TechnicalMachines));
        }
        if self.hms {
            out.push(("hms", InventoryKind::HiddenMachines));
        }
        out
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fields = FieldSelection::from_cli(&cli);

    let creature_edits = cli.set_species.is_some()
        || cli.set_level.is_some()
        || cli.set_exp.is_some()
        || cli.set_shiny.is_some()
        || cli.set_nickname.is_some()
        || cli.set_held_item.is_some()
        || cli.set_friendship.is_some();
    let has_edits = cli.set_trainer_name.is_some()
        || cli.set_trainer_id.is_some()
        || cli.set_trainer_gender.is_some()
        || cli.mark_owned.is_some()
        || cli.mark_seen.is_some()
        || cli.add_item.is_some()
        || creature_edits;

    if creature_edits && cli.slot.is_none() {
        eprintln!("creature --set-* flags require --slot <N>");
        process::exit(2);
    }
    if has_edits && cli.output.is_none() {
        eprintln!("--set-* flags require --output <PATH>");
        process::exit(2);
    }
    if !has_edits && cli.output.is_some() {
        eprintln!("--output requires at least one --set-* flag");
        process::exit(2);
    }

    let game_hint = cli.game.or(if cli.gen1 {
        Some(Generation::I)
    } else if cli.gen2 {
        Some(Generation::II)
    } else {
        None
    });

    let bytes = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });

    let engine = Engine::new();
    let mut session = engine.open_bytes(bytes, game_hint).unwrap_or_else(|e| {
        eprintln!("Error parsing save file: {}", cli.path.display());
        eprintln!("  {}", e);
        process::exit(1);
    });

    if let Some(name) = cli.set_trainer_name.as_deref() {
        session.set_trainer_name(name);
    }
    if let Some(id) = cli.set_trainer_id {
        session.set_trainer_id(id);
    }
    if let Some(gender) = cli.set_trainer_gender {
        session
            .set_trainer_gender(to_core_gender(gender))
            .unwrap_or_else(|e| {
                eprintln!("Error applying trainer gender edit: {e}");
                process::exit(1);
            });
    }

    if let Some(position) = cli.slot {
        if position == 0 {
            eprintln!("--slot counts from 1");
            process::exit(2);
        }
        let storage = match cli.in_box {
            Some(number) => box_storage(&session, number),
            None => StorageId::Party,
        };
        let slot = position - 1;
        apply_creature_edits(&mut session, &cli, storage, slot);
    }

    if let Some(species) = cli.mark_owned {
        session.set_owned(species, true).unwrap_or_else(|e| {
            eprintln!("Error applying owned-flag edit: {e}");
            process::exit(1);
        });
    }
    if let Some(species) = cli.mark_seen {
        session.set_seen(species, true).unwrap_or_else(|e| {
            eprintln!("Error applying seen-flag edit: {e}");
            process::exit(1);
        });
    }
    if let Some(id) = cli.add_item {
        session
            .add_item(to_core_kind(cli.pocket), id, cli.item_quantity)
            .unwrap_or_else(|e| {
                eprintln!("Error adding item: {e}");
                process::exit(1);
            });
    }

    if has_edits {
        let out_path = cli.output.as_ref().expect("checked above");
        fs::write(out_path, session.export_to_bytes()).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
    }

    if cli.json {
        let json = if fields.is_field_mode() {
            JsonValue::Object(fields.selected_json(&session))
        } else {
            JsonValue::Object(default_json(&session))
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_field_mode() {
        for (key, value) in fields.selected_pairs(&session) {
            println!("{key}={value}");
        }
        return;
    }

    if cli.output.is_some() {
        let out_path = cli.output.as_ref().expect("checked above");
        println!("Wrote edited save to {}", out_path.display());
        return;
    }

    print_trainer_card(&session);
}

fn apply_creature_edits(session: &mut Session, cli: &Cli, storage: StorageId, slot: usize) {
    if let Some(species) = cli.set_species {
        session
            .set_pokemon_species(storage, slot, species)
            .unwrap_or_else(|e| {
                eprintln!("Error applying species edit: {e}");
                process::exit(1);
            });
    }
    if let Some(level) = cli.set_level {
        session
            .set_pokemon_level(storage, slot, level)
            .unwrap_or_else(|e| {
                eprintln!("Error applying level edit: {e}");
                process::exit(1);
            });
    }
    if let Some(experience) = cli.set_exp {
        session
            .set_pokemon_experience(storage, slot, experience)
            .unwrap_or_else(|e| {
                eprintln!("Error applying experience edit: {e}");
                process::exit(1);
            });
    }
    if let Some(shiny) = cli.set_shiny {
        session
            .set_pokemon_shiny(storage, slot, shiny)
            .unwrap_or_else(|e| {
                eprintln!("Error applying shininess edit: {e}");
                process::exit(1);
            });
    }
    if let Some(nickname) = cli.set_nickname.as_deref() {
        session
            .set_pokemon_nickname(storage, slot, nickname)
            .unwrap_or_else(|e| {
                eprintln!("Error applying nickname edit: {e}");
                process::exit(1);
            });
    }
    if let Some(id) = cli.set_held_item {
        let item = if id == 0 { None } else { Some(id) };
        session
            .set_pokemon_held_item(storage, slot, item)
            .unwrap_or_else(|e| {
                eprintln!("Error applying held-item edit: {e}");
                process::exit(1);
            });
    }
    if let Some(friendship) = cli.set_friendship {
        session
            .set_pokemon_friendship(storage, slot, friendship)
            .unwrap_or_else(|e| {
                eprintln!("Error applying friendship edit: {e}");
                process::exit(1);
            });
    }
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

fn default_json(session: &Session) -> JsonMap<String, JsonValue> {
    let snapshot = session.snapshot();
    let mut out = JsonMap::new();

    out.insert(
        "game".to_string(),
        JsonValue::String(snapshot.version.to_string()),
    );
    out.insert("trainer".to_string(), to_json_or_exit(&snapshot.trainer));
    out.insert(
        "party".to_string(),
        storage_to_json(session, StorageId::Party),
    );
    out.insert(
        "current_box".to_string(),
        JsonValue::from(snapshot.current_box + 1),
    );
    out.insert("box_count".to_string(), JsonValue::from(snapshot.box_count));
    out.insert(
        "dex_owned".to_string(),
        JsonValue::from(snapshot.owned_count),
    );
    out.insert("dex_seen".to_string(), JsonValue::from(snapshot.seen_count));
    out.insert(
        "bag".to_string(),
        inventory_to_json(session, InventoryKind::General),
    );
    out.insert(
        "pc_items".to_string(),
        inventory_to_json(session, InventoryKind::Computer),
    );

    out
}

fn storage_to_json(session: &Session, storage: StorageId) -> JsonValue {
    let contents = session.storage_contents(storage).unwrap_or_else(|e| {
        eprintln!("Error reading stored creatures: {e}");
        process::exit(1);
    });
    JsonValue::Array(contents.iter().map(to_json_or_exit).collect())
}

fn inventory_to_json(session: &Session, kind: InventoryKind) -> JsonValue {
    match session.inventory(kind) {
        Ok(inventory) => to_json_or_exit::<InventorySnapshot>(&inventory),
        // Generation I has no ball, key, or machine pockets.
        Err(_) => JsonValue::Null,
    }
}

fn to_json_or_exit<T: serde::Serialize>(value: &T) -> JsonValue {
    serde_json::to_value(value).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    })
}

// ---------------------------------------------------------------------------
// Game-style text output
// ---------------------------------------------------------------------------

fn print_trainer_card(session: &Session) {
    let snapshot = session.snapshot();

    println!();
    println!("{:^60}", format!("POKéMON {}", snapshot.version));
    println!("{:^60}", "TRAINER CARD");
    println!();
    println!(
        "  Name: {:<12}IDNo: {:05}     Gender: {}",
        snapshot.trainer.name, snapshot.trainer.visible_id, snapshot.trainer.gender
    );
    println!(
        "  Pokédex  Owned: {:<4}Seen: {}",
        snapshot.owned_count, snapshot.seen_count
    );
    println!();

    let party = session.party().unwrap_or_else(|e| {
        eprintln!("Error reading party: {e}");
        process::exit(1);
    });
    println!("  Party ({}/6):", party.len());
    for (index, member) in party.iter().enumerate() {
        println!("    {}. {}", index + 1, format_pokemon_line(member));
    }
    println!();
    println!(
        "  Box {} of {} active",
        snapshot.current_box + 1,
        snapshot.box_count
    );

    if let Ok(bag) = session.inventory(InventoryKind::General) {
        println!("  Bag: {} of {} slots used", bag.items.len(), bag.capacity);
    }
    println!();
}

fn format_pokemon_line(member: &PokemonSnapshot) -> String {
    let mut line = format!(
        "#{:03} {:<11}Lv {:<4}HP {}",
        member.species_id, member.nickname, member.level, member.statistics.health
    );
    if member.shiny {
        line.push_str("  [shiny]");
    }
    if let Some(letter) = member.form_letter {
        line.push_str(&format!("  [form {letter}]"));
    }
    line
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn parse_generation_hint(value: &str) -> Result<Generation, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "i" | "gen1" | "rb" | "rby" | "yellow" => Ok(Generation::I),
        "2" | "ii" | "gen2" | "gs" | "gsc" | "crystal" => Ok(Generation::II),
        _ => Err(format!(
            "invalid game value '{value}', expected one of: 1, 2, gen1, gen2, rby, gsc"
        )),
    }
}

fn to_core_gender(gender: GenderArg) -> Gender {
    match gender {
        GenderArg::Male => Gender::Male,
        GenderArg::Female => Gender::Female,
    }
}

fn to_core_kind(pocket: PocketArg) -> InventoryKind {
    match pocket {
        PocketArg::General => InventoryKind::General,
        PocketArg::Computer => InventoryKind::Computer,
        PocketArg::Balls => InventoryKind::Balls,
        PocketArg::Keys => InventoryKind::Keys,
        PocketArg::Tms => InventoryKind::TechnicalMachines,
        PocketArg::Hms => InventoryKind::HiddenMachines,
    }
}

/// Box numbers on the command line count from 1, matching the game UI.
fn box_storage(session: &Session, number: u8) -> StorageId {
    if number == 0 || number as usize > session.box_count() {
        eprintln!(
            "box {number} is out of range, this save has {} boxes",
            session.box_count()
        );
        process::exit(2);
    }
    StorageId::Box(number - 1)
}

fn push_storage_pairs(
    out: &mut Vec<(&'static str, String)>,
    key: &'static str,
    session: &Session,
    storage: StorageId,
) {
    let contents = session.storage_contents(storage).unwrap_or_else(|e| {
        eprintln!("Error reading stored creatures: {e}");
        process::exit(1);
    });
    for (index, member) in contents.iter().enumerate() {
        out.push((key, format!("{}: {}", index + 1, format_pokemon_line(member))));
    }
}
