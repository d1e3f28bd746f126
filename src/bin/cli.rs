// src/bin/cli.rs
use menu_value::cli;

fn main() {
    // Pretty panic/error reports for terminal use.
    let _ = color_eyre::install();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
