//! pagetab CLI - paginate JSON tables into HTML and PDF

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::debug;

use pagetab::{
    report, CapacityTable, DocumentRenderer, FontSizeClass, GenerateOptions, JsonFormat,
    Orientation, TableDocument, TableSource, WkhtmltopdfRenderer,
};

#[derive(Parser)]
#[command(name = "pagetab")]
#[command(version)]
#[command(about = "Paginate long tables with repeated headers for PDF renderers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write paginated HTML
    Html {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Paginate and render to PDF through wkhtmltopdf
    Pdf {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Renderer executable
        #[arg(long, env = "PAGETAB_RENDERER", default_value = "wkhtmltopdf")]
        renderer: PathBuf,

        /// Paper size passed to the renderer
        #[arg(long, default_value = "Letter")]
        page_size: String,
    },

    /// Print the pagination report as JSON
    Plan {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List capacity profiles
    Profiles {
        /// Capacity table JSON file (built-in table if not specified)
        #[arg(long, value_name = "FILE")]
        capacity: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct LayoutArgs {
    /// Input table JSON file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Font size class
    #[arg(long, value_enum, default_value = "small")]
    font_size: FontSize,

    /// Page orientation
    #[arg(long, value_enum, default_value = "portrait")]
    orientation: PageOrientation,

    /// Extra style rule (repeatable)
    #[arg(long = "style", value_name = "RULE")]
    styles: Vec<String>,

    /// Reject row fields without columns and columns without fields
    #[arg(long)]
    strict: bool,

    /// Capacity table JSON file
    #[arg(long, value_name = "FILE")]
    capacity: Option<PathBuf>,

    /// Document title (overrides the input's title)
    #[arg(long)]
    title: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FontSize {
    /// 12px text
    Small,
    /// 14px text
    Medium,
    /// 20px text
    Large,
}

impl From<FontSize> for FontSizeClass {
    fn from(size: FontSize) -> Self {
        match size {
            FontSize::Small => FontSizeClass::Small,
            FontSize::Medium => FontSizeClass::Medium,
            FontSize::Large => FontSizeClass::Large,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageOrientation {
    Portrait,
    Landscape,
}

impl From<PageOrientation> for Orientation {
    fn from(orientation: PageOrientation) -> Self {
        match orientation {
            PageOrientation::Portrait => Orientation::Portrait,
            PageOrientation::Landscape => Orientation::Landscape,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Html { layout, output } => cmd_html(&layout, output.as_deref()),
        Commands::Pdf {
            layout,
            output,
            renderer,
            page_size,
        } => cmd_pdf(&layout, &output, renderer, page_size),
        Commands::Plan { layout, compact } => cmd_plan(&layout, compact),
        Commands::Profiles { capacity } => cmd_profiles(capacity.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_capacity(path: Option<&Path>) -> Result<CapacityTable, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(CapacityTable::from_json(&fs::read_to_string(p)?)?),
        None => Ok(CapacityTable::standard()),
    }
}

fn build_document(layout: &LayoutArgs) -> Result<TableDocument, Box<dyn std::error::Error>> {
    let source = TableSource::from_reader(fs::File::open(&layout.input)?)?;
    debug!(
        "loaded {} column(s), {} row(s) from {}",
        source.columns.len(),
        source.rows.len(),
        layout.input.display()
    );

    let mut options = GenerateOptions::new()
        .with_font_size(layout.font_size.into())
        .with_orientation(layout.orientation.into())
        .with_styles(layout.styles.iter().cloned())
        .with_capacity_table(load_capacity(layout.capacity.as_deref())?);
    if let Some(title) = layout.title.as_ref().or(source.title.as_ref()) {
        options = options.with_title(title.clone());
    }
    if layout.strict {
        options = options.strict();
    }

    Ok(pagetab::generate(&source.columns, &source.rows, &options)?)
}

fn cmd_html(layout: &LayoutArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = build_document(layout)?;
    let html = doc.to_html();

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!(
            "{} {} ({} rows, {} pages)",
            "Saved to".green(),
            path.display(),
            doc.row_count(),
            doc.block_count()
        );
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_pdf(
    layout: &LayoutArgs,
    output: &Path,
    renderer: PathBuf,
    page_size: String,
) -> Result<(), Box<dyn std::error::Error>> {
    // Pagination errors surface here, before the renderer runs.
    let doc = build_document(layout)?;

    let renderer = WkhtmltopdfRenderer::new()
        .with_binary(renderer)
        .with_page_size(page_size);
    renderer.render_document(&doc, output)?;

    println!(
        "{} {} ({} rows, {} pages)",
        "Saved to".green(),
        output.display(),
        doc.row_count(),
        doc.block_count()
    );
    Ok(())
}

fn cmd_plan(layout: &LayoutArgs, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = build_document(layout)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", report::to_json(&doc, format)?);
    Ok(())
}

fn cmd_profiles(capacity: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_capacity(capacity)?;

    println!("{}", "Capacity Profiles".cyan().bold());
    println!("{}", "─".repeat(48).dimmed());
    let heading = format!(
        "{:<14} {:<10} {:>6} {:>14}",
        "Font", "Orient", "Rows", "Line weight"
    );
    println!("{}", heading.bold());
    for entry in table.entries() {
        let font = format!("{} ({})", entry.font_size, entry.font_size.css_size());
        println!(
            "{:<14} {:<10} {:>6} {:>14}",
            font,
            entry.orientation.as_str(),
            entry.rows_per_page,
            entry.wrapped_line_weight
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagetab".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Table pagination for fixed-page renderers");
}
