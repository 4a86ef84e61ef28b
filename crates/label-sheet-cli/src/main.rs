use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use label_sheet::{
    FontSource, LabelOptions, LabelRequest, MAX_LABELS, PageGeometry, SerialSource,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "labels", about = "Label sheet PDF generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a label sheet PDF and open it
    Generate {
        /// Date printed on every label (e.g. 2024-01-01)
        #[arg(short, long)]
        date: String,

        /// Product type printed on every label
        #[arg(short, long)]
        product_type: String,

        /// Number of labels (defaults to the number of manual serials)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        #[command(flatten)]
        serials: SerialArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output PDF file (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TrueType font file (overrides the config file)
        #[arg(long, conflicts_with = "builtin_font")]
        font: Option<PathBuf>,

        /// Use built-in Helvetica instead of a font file
        #[arg(long)]
        builtin_font: bool,

        /// Write the PDF without opening a viewer
        #[arg(long)]
        no_open: bool,
    },

    /// Print where each label would be placed, without writing anything
    Layout {
        /// Number of labels
        #[arg(short = 'n', long)]
        count: usize,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Write the default settings as JSON
    InitConfig {
        /// Output JSON file
        #[arg(short, long, default_value = "label-sheet.json")]
        output: PathBuf,

        /// Paper size for the page geometry
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SerialArgs {
    /// First serial number of an auto-incrementing run
    #[arg(short, long, allow_hyphen_values = true)]
    start: Option<String>,

    /// Manual serial number; repeat once per label
    #[arg(long = "serial", num_args = 1..)]
    serial: Vec<String>,

    /// CSV file whose first column holds manual serial numbers
    #[arg(long)]
    serials_csv: Option<PathBuf>,
}

#[derive(Args)]
struct SettingsArgs {
    /// JSON settings file (see `init-config`)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SettingsArgs {
    async fn load(&self) -> Result<LabelOptions> {
        let options = match &self.config {
            Some(path) => LabelOptions::load(path).await?,
            None => LabelOptions::default(),
        };
        options.validate()?;
        Ok(options)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A5,
    Letter,
}

impl From<PaperArg> for label_sheet::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
        }
    }
}

async fn serial_source(args: SerialArgs) -> Result<SerialSource> {
    if let Some(start) = args.start {
        return Ok(SerialSource::Auto {
            start: label_sheet::parse_start(&start)?,
        });
    }
    if let Some(path) = args.serials_csv {
        return Ok(SerialSource::Manual {
            entries: label_sheet::load_serials_from_csv(&path).await?,
        });
    }
    Ok(SerialSource::Manual {
        entries: args.serial,
    })
}

fn resolve_count(count: Option<usize>, source: &SerialSource) -> Result<usize> {
    match (count, source) {
        (Some(count), _) => Ok(count),
        (None, SerialSource::Manual { entries }) => Ok(entries.len()),
        (None, SerialSource::Auto { .. }) => bail!("--count is required with --start"),
    }
}

fn check_layout_count(count: usize) -> Result<usize> {
    if count == 0 || count > MAX_LABELS {
        bail!("--count must be between 1 and {MAX_LABELS}");
    }
    Ok(count)
}

fn print_layout(geometry: &PageGeometry, count: usize) {
    println!("Grid: {} columns x {} rows", geometry.columns, geometry.rows);
    println!("Pages: {}", geometry.page_count(count));
    println!("{:>5}  {:>4}  {:>3}  {:>6}  {:>8}  {:>8}", "index", "page", "row", "column", "x", "y");
    for index in 0..count {
        let position = label_sheet::grid_position(geometry, index);
        let origin = label_sheet::cell_origin(geometry, position);
        println!(
            "{:>5}  {:>4}  {:>3}  {:>6}  {:>8.2}  {:>8.2}",
            index,
            position.page + 1,
            position.row,
            position.column,
            origin.x,
            origin.y
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            date,
            product_type,
            count,
            serials,
            settings,
            output,
            font,
            builtin_font,
            no_open,
        } => {
            let mut options = settings.load().await?;
            if let Some(output) = output {
                options.output_path = output;
            }
            if let Some(font) = font {
                options.font = FontSource::File(font);
            }
            if builtin_font {
                options.font = FontSource::Builtin;
            }

            let source = serial_source(serials).await?;
            let count = resolve_count(count, &source)?;
            let serials = label_sheet::generate_serials(count, &source)?;
            let request = LabelRequest::new(date, product_type, serials)?;

            let summary = if no_open {
                label_sheet::generate_pdf(&request, &options).await?
            } else {
                label_sheet::generate_and_open(&request, &options).await?
            };

            println!(
                "Generated {} labels on {} page(s) → {}",
                summary.labels_rendered,
                summary.pages,
                summary.output_path.display()
            );
            if summary.labels_skipped > 0 {
                println!("  Blank serials skipped: {}", summary.labels_skipped);
            }
        }

        Commands::Layout { count, settings } => {
            let count = check_layout_count(count)?;
            let options = settings.load().await?;
            print_layout(&options.geometry, count);
        }

        Commands::InitConfig { output, paper } => {
            let options = LabelOptions {
                geometry: PageGeometry::with_paper(paper.into()),
                ..Default::default()
            };
            if let Err(e) = options.validate() {
                log::warn!("Default label grid does not fit this paper: {e}");
            }
            options.save(&output).await?;
            println!("Wrote settings → {}", output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serial_sources_are_exclusive() {
        let result = Cli::try_parse_from([
            "labels", "generate", "-d", "2024-01-01", "-p", "X", "-n", "3", "--start", "1",
            "--serial", "A",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serial_source_required() {
        let result = Cli::try_parse_from(["labels", "generate", "-d", "2024-01-01", "-p", "X"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_count_defaults_to_manual_serials() {
        let source = SerialSource::Manual {
            entries: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(resolve_count(None, &source).unwrap(), 2);
        assert_eq!(resolve_count(Some(5), &source).unwrap(), 5);
        assert!(resolve_count(None, &SerialSource::Auto { start: 1 }).is_err());
    }

    #[test]
    fn test_layout_count_is_bounded() {
        assert_eq!(check_layout_count(21).unwrap(), 21);
        assert_eq!(check_layout_count(MAX_LABELS).unwrap(), MAX_LABELS);
        assert!(check_layout_count(0).is_err());
        assert!(check_layout_count(MAX_LABELS + 1).is_err());
    }
}
