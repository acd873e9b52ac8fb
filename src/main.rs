use anyhow::{Context, Result};
use clap::Parser;
use playlist_sorter::model::Playlist;
use playlist_sorter::source::{load_snapshot, write_m3u, FsMetadata};
use playlist_sorter::{OrderingKey, ReorderPlan, SortConfig, SortPipeline};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-sorter")]
#[command(about = "Sort a playlist by name, modification date or size", long_about = None)]
struct Args {
    /// M3U file, directory, or list of paths/URLs
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Ordering: name-asc, name-desc, date-asc, date-desc, size-asc, size-desc
    #[arg(short = 'k', long, default_value = "name-asc")]
    key: String,

    /// Select the first item after sorting
    #[arg(long)]
    reset_position: bool,

    /// Current position in the input playlist
    #[arg(long)]
    current: Option<usize>,

    /// Recurse into directory inputs
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Print the move plan instead of the playlist
    #[arg(long, conflicts_with = "json")]
    moves: bool,

    /// Print the plan and resulting playlist as JSON
    #[arg(long)]
    json: bool,

    /// Write the sorted playlist to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    key: OrderingKey,
    plan: &'a ReorderPlan,
    playlist: &'a Playlist,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let inputs: Vec<String> = args
        .inputs
        .iter()
        .map(|input| shellexpand::tilde(input).into_owned())
        .collect();

    let mut playlist = load_snapshot(&inputs, args.recursive, &FsMetadata)?;
    log::info!("Loaded {} items", playlist.len());

    let config = SortConfig::new(OrderingKey::parse(&args.key))
        .with_reset_position(args.reset_position)
        .with_current(args.current);
    let pipeline = SortPipeline::new(config);
    let plan = pipeline.run(&mut playlist)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            let path = PathBuf::from(shellexpand::tilde(path).as_ref());
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            log::info!("Writing sorted playlist to {:?}", path);
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if args.moves {
        for mv in &plan.moves {
            writeln!(out, "{} -> {}", mv.from, mv.to)?;
        }
        if plan.reset_position {
            writeln!(out, "reset-position")?;
        }
        out.flush()?;
    } else if args.json {
        let report = JsonReport {
            key: pipeline.config().key,
            plan: &plan,
            playlist: &playlist,
        };
        serde_json::to_writer_pretty(&mut out, &report).context("Failed to encode JSON")?;
        writeln!(out)?;
        out.flush()?;
    } else {
        write_m3u(&playlist, out)?;
    }

    Ok(())
}
