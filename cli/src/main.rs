use std::borrow::Cow;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
#[cfg(feature = "builtin_catalog")]
use ytfmt_extractor_youtube::builtin_catalog;
use ytfmt_extractor_youtube::{extract_player_response, get_video_id};
use ytfmt_extractor_api::{MediaFormat, StaticCatalog};
use ytfmt_format_picker::{FormatFilter, FormatPicker, FormatRequest, Quality, RankingPolicy};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Choose a format out of a saved watch page
    Formats(FormatsArgs),
    /// Print the video id found in each input, url or bare id
    Id {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

#[derive(clap::Args)]
struct FormatsArgs {
    /// watch page html, "-" to read it from stdin
    #[arg()]
    page: String,
    /// quality tier (highest, lowestaudio, ...) or itag; repeat to try several itags in order
    #[arg(short, long)]
    quality: Vec<String>,
    #[arg(short, long, value_parser = PossibleValuesParser::new(FormatFilter::NAMES))]
    filter: Option<String>,
    /// JSON catalog to use instead of the builtin one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// JSON ranking policy (codec rank lists)
    #[arg(long)]
    policy: Option<PathBuf>,
    /// list every format, best first, instead of choosing one
    #[arg(short, long)]
    list: bool,
    /// print the chosen format as JSON
    #[arg(long)]
    json: bool,
}

fn quality_from_args(values: &[String]) -> Quality {
    match values {
        [] => Quality::default(),
        [one] => one.parse().unwrap_or_default(),
        many => many.iter().collect(),
    }
}

fn read_page(page: &str) -> Result<String> {
    if page == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("reading page from stdin")?;
        Ok(body)
    } else {
        fs::read_to_string(page).with_context(|| format!("reading page {}", page))
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, StaticCatalog>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            let catalog = StaticCatalog::from_json(&json)
                .with_context(|| format!("parsing catalog {}", path.display()))?;
            debug!(entries = catalog.len(), "loaded catalog");
            Ok(Cow::Owned(catalog))
        }
        #[cfg(feature = "builtin_catalog")]
        None => Ok(Cow::Borrowed(builtin_catalog())),
        #[cfg(not(feature = "builtin_catalog"))]
        None => Ok(Cow::Owned(StaticCatalog::default())),
    }
}

fn load_policy(path: Option<&Path>) -> Result<RankingPolicy> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading policy {}", path.display()))?;
            RankingPolicy::from_json(&json)
                .with_context(|| format!("parsing policy {}", path.display()))
        }
        None => Ok(RankingPolicy::default()),
    }
}

fn printable_url(fmt: &MediaFormat) -> String {
    if fmt.is_hls {
        format!("[HLS] {}", fmt.url)
    } else if fmt.is_dash_mpd {
        format!("[DASH] {}", fmt.url)
    } else {
        format!("[HTTP] {}", fmt.url)
    }
}

fn print_table(formats: &[&MediaFormat]) {
    println!("itag  container  quality      bitrate   abr  codecs");
    for fmt in formats {
        println!(
            "{:<5} {:<10} {:<12} {:>8} {:>4}  {}",
            fmt.itag,
            fmt.container.as_deref().unwrap_or("-"),
            fmt.quality_label.as_deref().unwrap_or("audio only"),
            fmt.bitrate / 1000,
            fmt.audio_bitrate
                .map(|abr| abr.to_string())
                .unwrap_or_else(|| "-".to_string()),
            fmt.codecs,
        );
    }
}

fn run_formats(args: FormatsArgs) -> Result<()> {
    let page = read_page(&args.page)?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let picker = FormatPicker::new(load_policy(args.policy.as_deref())?);

    let response = extract_player_response(&page).context("extracting player response")?;
    if let Some(details) = &response.video_details {
        eprintln!("{} ({})", details.title, details.video_id);
    }
    if let Some(status) = response.playability_status.as_ref().filter(|s| s.status != "OK") {
        eprintln!(
            "playability: {} {}",
            status.status,
            status.reason.as_deref().unwrap_or_default()
        );
    }
    let formats = response.formats(catalog.as_ref());

    if args.list {
        print_table(&picker.sort(&formats));
        return Ok(());
    }

    let request = FormatRequest {
        filter: args.filter.as_deref().map(FormatFilter::named),
        quality: quality_from_args(&args.quality),
        ..Default::default()
    };
    let chosen = picker.choose(&formats, &request)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(chosen)?);
    } else {
        println!("{}: {}", chosen.itag, printable_url(chosen));
    }
    Ok(())
}

fn run_id(inputs: &[String]) -> Result<()> {
    for input in inputs {
        let id = get_video_id(input).with_context(|| format!("resolving {}", input))?;
        println!("{}\t{}", id, id.watch_url());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("YTFMT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Formats(formats) => run_formats(formats),
        Command::Id { inputs } => run_id(&inputs),
    }
}
