// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{ExportFormat, SortKey, ViewKind};
use crate::runner::{self, Params};
use crate::source::DataSource;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    let mut list = false;
    parse_cli(&mut params, &mut list, env::args().skip(1))?;

    if list {
        for (name, cuisine) in runner::list_restaurants(&params.source)? {
            println!("{},{}", name, cuisine);
        }
        return Ok(());
    }

    let summary = runner::run(&params, None)?;
    if let Some(text) = summary.stdout {
        print!("{text}");
    } else {
        for p in &summary.files_written {
            eprintln!("Wrote {}", p.display());
        }
    }
    Ok(())
}

fn parse_cli(
    params: &mut Params,
    list: &mut bool,
    mut args: impl Iterator<Item = String>,
) -> Result<(), Box<dyn std::error::Error>> {
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--view" => {
                let v = args.next().ok_or("Missing value for --view")?;
                params.view = match v.to_ascii_lowercase().as_str() {
                    "dishes" => ViewKind::BestValue,
                    "restaurants" => ViewKind::Restaurants,
                    other => return Err(format!("Unknown view: {}", other).into()),
                };}
            "--sort" => {
                // unrecognized keys deliberately fall back to perceived value,
                // same as the sort control
                let v = args.next().ok_or("Missing value for --sort")?;
                params.sort = SortKey::parse(&v.to_ascii_lowercase());}
            "--top" => {
                let v: usize = args.next().ok_or("Missing value for --top")?.parse()?;
                if v == 0 { return Err("--top must be at least 1".into()); }
                params.top = Some(v);}
            "--data" => {
                let v = args.next().ok_or("Missing value for --data")?;
                params.source = DataSource::File(PathBuf::from(v));}
            "--fetch" => ensure_http(&mut params.source),
            "--host" => {
                let v = args.next().ok_or("Missing value for --host")?;
                ensure_http(&mut params.source);
                if let DataSource::Http { host, .. } = &mut params.source { *host = v; }}
            "--port" => {
                let v: u16 = args.next().ok_or("Missing value for --port")?.parse()?;
                ensure_http(&mut params.source);
                if let DataSource::Http { port, .. } = &mut params.source { *port = v; }}
            "--list" => *list = true,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "html" => ExportFormat::Html,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--per-restaurant" => params.per_restaurant = true,
            "--no-headers" => params.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// --host/--port imply fetching even without an explicit --fetch.
fn ensure_http(source: &mut DataSource) {
    if !matches!(source, DataSource::Http { .. }) {
        *source = DataSource::http_default();
    }
}
