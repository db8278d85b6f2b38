mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use eightbim::codecs::IdSeed;
use eightbim::{
    scan, table, BlobFile, DecodeOptions, DecodePolicy, Resource, ResourceCodec, ResourceKind,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Dump { file, raw, json } => run_dump(&file, raw, json),
        Commands::Verify { file, strict } => run_verify(&file, strict),
        Commands::Kinds => {
            print_kinds();
            Ok(())
        }
        Commands::SetSeed {
            file,
            value,
            output,
        } => run_set_seed(&file, value, &output),
    }
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open(path: &Path) -> Result<BlobFile> {
    BlobFile::open(path).with_context(|| format!("Failed to open {}", path.display()))
}

#[derive(Serialize)]
struct DumpEntry<'a> {
    id: u16,
    name: &'a str,
    kind: ResourceKind,
    data_len: usize,
    encoded_size: usize,
    value: &'a Resource,
}

fn run_dump(path: &Path, raw: bool, json: bool) -> Result<()> {
    let blob = open(path)?;
    let scanned = scan(blob.as_bytes()).context("Failed to scan resource blocks")?;
    let resources = scanned.records.decode_all(&DecodeOptions::default())?;

    if json {
        let names: Vec<_> = scanned.records.iter().map(|r| r.name()).collect();
        let entries: Vec<_> = scanned
            .records
            .iter()
            .zip(&resources)
            .zip(&names)
            .map(|((record, value), name)| DumpEntry {
                id: record.id(),
                name,
                kind: record.kind(),
                data_len: record.data_len(),
                encoded_size: record.encoded_size(),
                value,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{}: {} records, {} bytes",
        path.display(),
        scanned.records.len(),
        scanned.consumed
    );
    for (record, resource) in scanned.records.iter().zip(&resources) {
        println!("{record}");
        if !resource.is_opaque() {
            println!("    {resource}");
        }
        if raw {
            for chunk in record.payload().chunks(32) {
                println!("    {}", hex::encode(chunk));
            }
        }
    }
    Ok(())
}

fn run_verify(path: &Path, strict: bool) -> Result<()> {
    let blob = open(path)?;
    let input = blob.as_bytes();
    let scanned = scan(input).context("Failed to scan resource blocks")?;

    let policy = if strict {
        DecodePolicy::Abort
    } else {
        DecodePolicy::Preserve
    };
    let options = DecodeOptions::new()
        .with_policy(policy)
        .with_roundtrip_check(true);
    let resources = scanned
        .records
        .decode_all(&options)
        .context("Decoding failed")?;

    let mut rebuilt = scanned.records.clone();
    for (idx, resource) in resources.iter().enumerate() {
        if let Some(record) = rebuilt.get_mut(idx) {
            resource.write_into(record)?;
        }
    }

    let typed = resources.iter().filter(|r| !r.is_opaque()).count();
    if rebuilt.flatten() != input {
        bail!("Re-encoded blob differs from {}", path.display());
    }

    info!(records = resources.len(), typed, "round trip verified");
    println!(
        "OK: {} records ({} decoded, {} opaque), {} bytes",
        resources.len(),
        typed,
        resources.len() - typed,
        input.len()
    );
    Ok(())
}

fn print_kinds() {
    for (range, kind) in table().entries() {
        let marker = if kind.is_interpreted() { "*" } else { " " };
        println!("{:>11} {marker} {kind}", range.to_string());
    }
}

fn run_set_seed(path: &Path, value: u32, output: &Path) -> Result<()> {
    let blob = open(path)?;
    let mut records = scan(blob.as_bytes())
        .context("Failed to scan resource blocks")?
        .records;

    let seed = IdSeed::new(value);
    match records.position(ResourceKind::IdSeedNumber) {
        Some(idx) => {
            if let Some(record) = records.get_mut(idx) {
                seed.write_into(record)?;
            }
        }
        None => records.push(seed.to_record("")?),
    }

    std::fs::write(output, records.flatten())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("{seed} -> {}", output.display());
    Ok(())
}
