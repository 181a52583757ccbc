//! lessonmark CLI - study content parsing and adaptive layout tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use lessonmark::render::{self, DocumentStats};
use lessonmark::{
    ContentParser, Document, InputFormat, JsonFormat, ParseOptions, RenderOptions, TableLayout,
    Viewport,
};

#[derive(Parser)]
#[command(name = "lessonmark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Parse study content and lay it out for compact or wide screens", long_about = None)]
struct Cli {
    /// Input format (detected from the content by default)
    #[arg(long, value_enum, global = true, default_value = "auto")]
    format: FormatArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out content and print the render tree as JSON
    Render {
        /// Input file (`-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Viewport class
        #[arg(long, value_enum, env = "LESSONMARK_VIEWPORT", ignore_case = true, default_value = "wide")]
        viewport: ViewportArg,

        /// Table layout (follows the viewport by default)
        #[arg(long, value_enum, default_value = "auto")]
        tables: TableArg,

        /// Keep zero-length emphasis runs
        #[arg(long)]
        keep_empty_runs: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the parsed document model as JSON
    #[command(alias = "json")]
    Document {
        /// Input file (`-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert content to normalised Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input file (`-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert content to plain text
    Text {
        /// Input file (`-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document statistics
    Info {
        /// Input file (`-` for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert files to every output format
    Convert {
        /// Input files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Viewport class for the render tree
        #[arg(long, value_enum, env = "LESSONMARK_VIEWPORT", ignore_case = true, default_value = "wide")]
        viewport: ViewportArg,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Detect from the content
    Auto,
    /// Hybrid Markdown
    Markdown,
    /// JSON fact sheet
    Json,
}

impl FormatArg {
    fn input_format(self) -> Option<InputFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Markdown => Some(InputFormat::Markdown),
            FormatArg::Json => Some(InputFormat::FactSheet),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ViewportArg {
    /// Narrow screens: tables as fact cards
    Compact,
    /// Wide screens: tables as grids
    Wide,
}

impl From<ViewportArg> for Viewport {
    fn from(viewport: ViewportArg) -> Self {
        match viewport {
            ViewportArg::Compact => Viewport::Compact,
            ViewportArg::Wide => Viewport::Wide,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableArg {
    /// Follow the viewport
    Auto,
    /// Always fact cards
    Cards,
    /// Always a grid
    Grid,
}

impl From<TableArg> for TableLayout {
    fn from(layout: TableArg) -> Self {
        match layout {
            TableArg::Auto => TableLayout::Auto,
            TableArg::Cards => TableLayout::Cards,
            TableArg::Grid => TableLayout::Grid,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let parser = parser_for(cli.format);

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            viewport,
            tables,
            keep_empty_runs,
            compact,
        }) => {
            let options = RenderOptions::new()
                .with_viewport(viewport.into())
                .with_table_layout(tables.into())
                .with_empty_runs(keep_empty_runs);
            cmd_render(&parser, &input, output.as_deref(), &options, compact)
        }
        Some(Commands::Document {
            input,
            output,
            compact,
        }) => cmd_document(&parser, &input, output.as_deref(), compact),
        Some(Commands::Markdown { input, output }) => {
            cmd_markdown(&parser, &input, output.as_deref())
        }
        Some(Commands::Text { input, output }) => cmd_text(&parser, &input, output.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&parser, &input, json),
        Some(Commands::Convert {
            inputs,
            output,
            viewport,
        }) => cmd_convert(&parser, &inputs, output.as_deref(), viewport.into()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: lessonmark <COMMAND> <FILE>".yellow());
            println!("       lessonmark --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parser_for(format: FormatArg) -> ContentParser {
    let options = match format.input_format() {
        Some(format) => ParseOptions::new().with_format(format),
        None => ParseOptions::new(),
    };
    ContentParser::with_options(options)
}

/// Read a file, or standard input for `-`.
fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        fs::read_to_string(input)
    }
}

fn load(parser: &ContentParser, input: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let content = read_input(input)?;
    log::debug!("Read {} byte(s) from {}", content.len(), input.display());
    Ok(parser.parse(&content)?)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_render(
    parser: &ContentParser,
    input: &Path,
    output: Option<&Path>,
    options: &RenderOptions,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(parser, input)?;
    let tree = render::render(&doc, options);
    let json = render::to_json(&tree, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_document(
    parser: &ContentParser,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(parser, input)?;
    let json = render::to_json(&doc, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_markdown(
    parser: &ContentParser,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(parser, input)?;
    write_output(output, render::to_markdown(&doc).trim_end())
}

fn cmd_text(
    parser: &ContentParser,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(parser, input)?;
    write_output(output, &render::to_text(&doc))
}

fn cmd_info(
    parser: &ContentParser,
    input: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(input)?;
    let detected = lessonmark::detect_format(&content);
    let doc = parser.parse(&content)?;
    let stats = DocumentStats::collect(&doc);

    if json {
        println!("{}", render::to_json(&stats, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    let format = parser.options().format.unwrap_or(detected);
    println!("{}: {}", "Format".bold(), format);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Text blocks".bold(), stats.text_block_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Table rows".bold(), stats.table_row_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    if doc.headings().next().is_some() {
        println!();
        println!("{}", "Outline".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for section in &doc.sections {
            if let (Some(heading), Some(level)) = (&section.heading, section.level) {
                let indent = "  ".repeat(level.saturating_sub(1) as usize);
                println!("{}{} {}", indent, "•".dimmed(), heading);
            }
        }
    }

    Ok(())
}

fn cmd_convert(
    parser: &ContentParser,
    inputs: &[PathBuf],
    output: Option<&Path>,
    viewport: Viewport,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("lessonmark_output"));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading files...");
    let contents = inputs
        .iter()
        .map(|path| read_input(path))
        .collect::<io::Result<Vec<String>>>()?;

    pb.set_message("Parsing...");
    let documents = parser.parse_batch(&contents);
    pb.inc(inputs.len() as u64);

    let render_options = RenderOptions::new().with_viewport(viewport);
    let mut written = Vec::new();
    let mut failures = 0;

    for (path, result) in inputs.iter().zip(documents) {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stdin".to_string());
        pb.set_message(format!("Writing {}...", stem));

        match result {
            Ok(doc) => {
                let tree = render::render(&doc, &render_options);
                fs::write(output_dir.join(format!("{}.md", stem)), render::to_markdown(&doc))?;
                fs::write(output_dir.join(format!("{}.txt", stem)), render::to_text(&doc))?;
                fs::write(
                    output_dir.join(format!("{}.json", stem)),
                    render::to_json(&doc, JsonFormat::Pretty)?,
                )?;
                fs::write(
                    output_dir.join(format!("{}.render.json", stem)),
                    render::to_json(&tree, JsonFormat::Pretty)?,
                )?;
                written.push(stem);
            }
            Err(e) => {
                failures += 1;
                pb.println(format!("{} {}: {}", "Skipped".yellow(), path.display(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{} {}", "Output files in".green().bold(), output_dir.display());
    for (i, stem) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!(
            "  {} {stem}.md, {stem}.txt, {stem}.json, {stem}.render.json",
            branch.dimmed()
        );
    }

    if failures > 0 {
        return Err(format!("{} of {} input(s) failed", failures, inputs.len()).into());
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "lessonmark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Adaptive study content renderer");
    println!();
    println!("License: MIT");
}
