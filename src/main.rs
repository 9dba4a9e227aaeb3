mod config;
mod error;
mod pipeline;
mod render;
mod shapes;

use std::path::PathBuf;

use config::RenderConfig;
use pipeline::ThemeBuilder;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("theme"));

    let config = match args.next() {
        Some(path) => match RenderConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };

    match ThemeBuilder::new(&output_dir, config).generate_parallel() {
        Ok(summary) => {
            println!(
                "Wrote {} cursor images to {} ({} failed)",
                summary.written,
                output_dir.display(),
                summary.failed
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
