use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollwork::{ConvertOpts, Evaluator, FileOutcome, Page, ScrollOffset, convert_tree};

#[derive(Parser, Debug)]
#[command(name = "scrollwork", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Batch-convert raster images under a directory to lossy WebP.
    Convert(ConvertArgs),
    /// Evaluate a page document at a scroll offset and print the view as JSON.
    View(ViewArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Target directory, walked recursively.
    #[arg(long)]
    dir: PathBuf,

    /// Lossy WebP quality factor (0-100).
    #[arg(long, default_value_t = 80.0)]
    quality: f32,

    /// Maximum output width in pixels; wider sources are downscaled.
    #[arg(long, default_value_t = 1920)]
    max_width: u32,
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll offset in pixels.
    #[arg(long)]
    offset: f64,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::View(args) => cmd_view(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let opts = ConvertOpts {
        quality: args.quality,
        max_width: args.max_width,
    };
    println!(
        "converting under {} (quality {}, max width {}px)",
        args.dir.display(),
        opts.quality,
        opts.max_width
    );

    let report = convert_tree(&args.dir, &opts);

    for entry in &report.entries {
        let rel = entry
            .path
            .strip_prefix(&args.dir)
            .unwrap_or(entry.path.as_path());
        match &entry.outcome {
            FileOutcome::Converted {
                bytes_before,
                bytes_after,
            } => println!(
                "converted {} -> .webp ({} -> {})",
                rel.display(),
                format_kb(*bytes_before),
                format_kb(*bytes_after)
            ),
            FileOutcome::Skipped => {
                println!("skipped {} (newer .webp exists)", rel.display());
            }
            FileOutcome::Failed { message } => {
                eprintln!("failed {}: {message}", rel.display());
            }
        }
    }

    println!(
        "converted {} file(s), skipped {}, failed {}",
        report.converted, report.skipped, report.failed
    );
    if report.converted > 0 {
        println!(
            "saved {} ({:.1}%)",
            format_kb_signed(report.bytes_saved()),
            report.savings_percent()
        );
    }
    Ok(())
}

fn cmd_view(args: ViewArgs) -> anyhow::Result<()> {
    let page = Page::from_path(&args.in_path)
        .with_context(|| format!("load page '{}'", args.in_path.display()))?;
    let view = Evaluator::eval_view(&page, ScrollOffset(args.offset))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    println!("{json}");
    Ok(())
}

fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn format_kb_signed(bytes: i64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
