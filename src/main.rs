use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use scale_wizard::config::{OutputFormat, Preferences};
use scale_wizard::{
    chord_charts, chord_shape, fretboard_map, generate_scale_data, ChordChart, ChordQuality,
    validate_fret_count, ChordShape, FretboardNote, ScaleData, ScaleType, TheoryError, TUNING,
};

#[derive(Parser)]
#[command(name = "scale-wizard", about = "Scales, diatonic chords and guitar fretboards")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (defaults to the preference file, then text)
    #[arg(long, global = true, value_enum)]
    format: Option<Format>,

    /// YAML preference file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the notes and diatonic chords of a scale
    Scale {
        root: Option<String>,
        scale_type: Option<String>,
    },

    /// Show each diatonic chord with its numeral and guitar shape
    Chords {
        root: Option<String>,
        scale_type: Option<String>,
    },

    /// Show the scale laid out on the fretboard
    Fretboard {
        root: Option<String>,
        scale_type: Option<String>,

        /// Highest fret to show
        #[arg(long)]
        frets: Option<usize>,
    },

    /// Show the guitar shape for a single chord
    Shape { root: String, quality: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scale_wizard=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TheoryError> {
    let prefs = match &cli.config {
        Some(path) => Preferences::load(path)?,
        None => Preferences::default(),
    };
    let format = cli.format.map(OutputFormat::from).unwrap_or(prefs.format);

    match cli.command {
        Command::Scale { root, scale_type } => {
            let (root, scale_type) = selection(&prefs, root, scale_type)?;
            let data = generate_scale_data(&root, scale_type);
            warn_if_empty(&data);
            emit(format, &data, print_scale)
        }
        Command::Chords { root, scale_type } => {
            let (root, scale_type) = selection(&prefs, root, scale_type)?;
            let charts = chord_charts(&root, scale_type);
            if charts.is_empty() {
                tracing::warn!("'{}' is not a note name; nothing to show", root);
            }
            emit(format, &charts[..], print_charts)
        }
        Command::Fretboard {
            root,
            scale_type,
            frets,
        } => {
            let (root, scale_type) = selection(&prefs, root, scale_type)?;
            let grid = fretboard_map(&root, scale_type, fret_span(&prefs, frets)?);
            emit(format, &grid[..], print_fretboard)
        }
        Command::Shape { root, quality } => {
            let quality: ChordQuality = quality.parse()?;
            let shape = chord_shape(&root, quality);
            emit(format, &shape, print_shape)
        }
    }
}

/// Root and scale type from the arguments, falling back to preferences.
fn selection(
    prefs: &Preferences,
    root: Option<String>,
    scale_type: Option<String>,
) -> Result<(String, ScaleType), TheoryError> {
    let root = root.unwrap_or_else(|| prefs.root.to_string());
    let scale_type = match scale_type {
        Some(s) => s.parse()?,
        None => prefs.scale_type,
    };
    Ok((root, scale_type))
}

/// Fret span from `--frets`, held to the same limits as the preference file.
fn fret_span(prefs: &Preferences, frets: Option<usize>) -> Result<usize, TheoryError> {
    match frets {
        Some(n) => validate_fret_count(n),
        None => Ok(prefs.fret_count),
    }
}

fn warn_if_empty(data: &ScaleData) {
    if data.notes.is_empty() {
        tracing::warn!("'{}' is not a note name; nothing to show", data.root);
    }
}

fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    print_text: fn(&T),
) -> Result<(), TheoryError> {
    match format {
        OutputFormat::Text => print_text(value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

fn print_scale(data: &ScaleData) {
    let notes: Vec<&str> = data.notes.iter().map(|n| n.name()).collect();
    println!("{} {}: {}", data.root, data.scale_type, notes.join(" "));
    for chord in &data.chords {
        println!("  {:<6} {}", chord.symbol(), chord.spelled());
    }
}

fn print_charts(charts: &[ChordChart]) {
    for chart in charts {
        println!(
            "{:<5} {:<6} {:<20} {}",
            chart.numeral,
            chart.chord.symbol(),
            shape_diagram(&chart.shape),
            chart.chord.spelled()
        );
    }
}

fn print_shape(shape: &ChordShape) {
    println!("{}", shape_diagram(shape));
}

/// `x-3-2-0-1-0`, with the window start appended when it is above the nut.
fn shape_diagram(shape: &ChordShape) -> String {
    let frets: Vec<String> = shape
        .frets
        .iter()
        .map(|&f| if f < 0 { "x".to_string() } else { f.to_string() })
        .collect();
    if shape.base_fret > 1 {
        format!("{} (fret {})", frets.join("-"), shape.base_fret)
    } else {
        frets.join("-")
    }
}

fn print_fretboard(grid: &[Vec<FretboardNote>]) {
    let width = grid.first().map_or(0, |row| row.len());
    let header: Vec<String> = (0..width).map(|f| format!("{:^4}", f)).collect();
    println!("   {}", header.join("|"));

    for (open, row) in TUNING.iter().zip(grid) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                let label = if cell.is_root {
                    format!("[{}]", cell.note)
                } else if cell.is_in_scale {
                    cell.note.to_string()
                } else {
                    "-".to_string()
                };
                format!("{:^4}", label)
            })
            .collect();
        println!("{:<2} {}", open.name(), cells.join("|"));
    }
}
