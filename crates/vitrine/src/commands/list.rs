use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use vitrine_core::info::{self, OtherWindowInfo};
use vitrine_core::window::WindowSystem;
use vitrine_windows::NativeSystem;

/// Lists every top-level window the engine would report to a host.
pub fn execute(json: bool) {
    let system = NativeSystem::default();
    let facts = match system.enumerate() {
        Ok(facts) => facts,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let listed: Vec<_> = facts
        .iter()
        .filter(|f| info::should_list(f, None))
        .collect();

    if json {
        let infos: Vec<OtherWindowInfo> = listed
            .iter()
            .map(|f| OtherWindowInfo::from_facts(f))
            .collect();
        match serde_json::to_string_pretty(&infos) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Handle"),
            Cell::new("Title"),
            Cell::new("Class"),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for facts in &listed {
        table.add_row(vec![
            Cell::new(format!("0x{:X}", facts.handle)),
            Cell::new(&facts.title),
            Cell::new(&facts.class),
            Cell::new(facts.rect.width).set_alignment(CellAlignment::Right),
            Cell::new(facts.rect.height).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    println!("\n{} windows found", listed.len());
}
