use std::path::PathBuf;

use immo_gen::export::csv::{default_file_name, write_csv};
use immo_gen::generate::build_dataset_default;
use immo_gen::{profile, report};

/// Fallback territory when none is given on the command line.
const DEFAULT_TERRITORY: &str = "La Réunion";

fn main() {
    let territory = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TERRITORY.to_string());

    let dataset = build_dataset_default(&territory);

    let path = PathBuf::from(default_file_name(&territory));
    if let Err(err) = write_csv(&dataset, &path) {
        eprintln!("failed to write {}: {err}", path.display());
        std::process::exit(1);
    }
    eprintln!("wrote {}", path.display());

    let profile = profile::resolve(&territory);
    for line in report::render_report(&dataset, profile) {
        println!("{line}");
    }
}
