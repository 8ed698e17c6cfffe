use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use strip_ledger::{decode, encode, parse_record, print_page, Ledger, Strip, StripConfig};
use strip_types::Entry;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => StripConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StripConfig::default(),
    };
    let format = cli.format;

    match cli.command {
        Command::New(args) => cmd_new(args, &format),
        Command::Show(args) => cmd_show(&args.file, &format),
        Command::Add(args) => cmd_add(args, &format),
        Command::Insert(args) => cmd_insert(args, &format),
        Command::Replace(args) => cmd_replace(args, &format),
        Command::Delete(args) => cmd_delete(args, &format),
        Command::Clear(args) => cmd_clear(&args.file, &format),
        Command::Total(args) => cmd_total(&args.file, &format),
        Command::Print(args) => cmd_print(&args.file, &config, &format),
        Command::Check(args) => cmd_check(&args.file, &format),
    }
}

fn open(path: &Path) -> anyhow::Result<Ledger> {
    let mut ledger = Ledger::headless();
    ledger
        .load_from_file(path)
        .with_context(|| format!("cannot load {}", path.display()))?;
    Ok(ledger)
}

/// Write the strip, refusing to leave behind a file that would not load.
/// Deleting or replacing the first entry can expose a `*` or `/` record.
fn save(ledger: &mut Ledger, path: &Path) -> anyhow::Result<()> {
    decode(&encode(ledger.entries())).with_context(|| {
        format!("refusing to save {}: the edited strip would not load", path.display())
    })?;
    ledger
        .save_to_file(path)
        .with_context(|| format!("cannot save {}", path.display()))
}

/// Parse a typed record. With `first_entry` set, multiply and divide are
/// refused the same way they are when loading a file.
fn record(text: &str, first_entry: bool) -> anyhow::Result<Entry> {
    parse_record(text, first_entry).with_context(|| format!("rejected record {text:?}"))
}

fn cmd_new(args: NewArgs, format: &OutputFormat) -> anyhow::Result<()> {
    if args.file.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", args.file.display());
    }
    let mut ledger = Ledger::headless();
    save(&mut ledger, &args.file)?;
    if matches!(format, OutputFormat::Text) {
        println!("{} Created empty strip {}", "✓".green().bold(), args.file.display().to_string().bold());
    } else {
        render(ledger.strip(), format)?;
    }
    Ok(())
}

fn cmd_show(path: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let ledger = open(path)?;
    render(ledger.strip(), format)
}

fn cmd_add(args: AddArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut ledger = open(&args.file)?;
    for text in &args.records {
        let first = ledger.is_empty();
        ledger.append(record(text, first)?);
    }
    save(&mut ledger, &args.file)?;
    render(ledger.strip(), format)
}

fn cmd_insert(args: PositionArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut ledger = open(&args.file)?;
    let entry = record(&args.record, args.index == 0)?;
    ledger.insert(entry, args.index)?;
    save(&mut ledger, &args.file)?;
    render(ledger.strip(), format)
}

fn cmd_replace(args: PositionArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut ledger = open(&args.file)?;
    let entry = record(&args.record, args.index == 0)?;
    let previous = ledger.replace(entry, args.index)?;
    save(&mut ledger, &args.file)?;
    if matches!(format, OutputFormat::Text) {
        println!("Replaced {} with {}", previous.to_string().yellow(), entry.to_string().yellow());
    }
    render(ledger.strip(), format)
}

fn cmd_delete(args: DeleteArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut ledger = open(&args.file)?;
    let removed = ledger.delete(args.index)?;
    save(&mut ledger, &args.file)?;
    if matches!(format, OutputFormat::Text) {
        println!("Deleted {}", removed.to_string().yellow());
    }
    render(ledger.strip(), format)
}

fn cmd_clear(path: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let mut ledger = open(path)?;
    let discarded = ledger.len();
    ledger.clear();
    save(&mut ledger, path)?;
    if matches!(format, OutputFormat::Text) {
        println!("{} Cleared {} entries", "✓".green(), discarded);
        Ok(())
    } else {
        render(ledger.strip(), format)
    }
}

fn cmd_total(path: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let ledger = open(path)?;
    match format {
        OutputFormat::Text => println!("{}", ledger.total().to_string().bold()),
        OutputFormat::Json => println!("{}", serde_json::json!({ "total": ledger.total() })),
    }
    Ok(())
}

fn cmd_print(path: &Path, config: &StripConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let ledger = open(path)?;
    let page = print_page(ledger.strip(), &config.print);
    match format {
        OutputFormat::Text => print!("{}", page.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
    }
    Ok(())
}

fn cmd_check(path: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let ledger = open(path)?;
    match format {
        OutputFormat::Text => {
            println!("{} {} is a valid strip", "✓".green().bold(), path.display());
            println!("  Entries: {}", ledger.len().to_string().bold());
            println!("  Checkpoints: {}", ledger.strip().checkpoints().count());
            println!("  Total: {}", ledger.total().to_string().bold());
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "valid": true,
                "entries": ledger.len(),
                "total": ledger.total(),
            })
        ),
    }
    Ok(())
}

fn render(strip: &Strip, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(strip)?),
        OutputFormat::Text => {
            if strip.is_empty() {
                println!("{}", "(empty strip)".dimmed());
            }
            for (index, line) in strip.iter().enumerate() {
                let text = line.text();
                match line.snapshot {
                    Some(snapshot) => println!(
                        "{:>4}  {:<16} {}",
                        index.to_string().dimmed(),
                        text.cyan().bold(),
                        snapshot.to_string().bold()
                    ),
                    None => println!(
                        "{:>4}  {:<16} {}",
                        index.to_string().dimmed(),
                        text,
                        line.running.to_string().dimmed()
                    ),
                }
            }
        }
    }
    Ok(())
}
