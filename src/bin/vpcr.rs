use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use log::{info, warn};

use vpcr::gel::{GelLane, DEFAULT_LADDER_MAX};
use vpcr::report::{self, ReportOptions};
use vpcr::Template;

/// vpcr CLI
#[derive(Parser)]
#[command(name = "vpcr")]
#[command(version)]
#[command(about = "Virtual PCR: primer binding sites, products and GC content", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
    Fasta,
}

#[derive(Subcommand)]
enum Commands {
    /// Run PCR on a template with one primer pair
    #[command(group(ArgGroup::new("input").required(true).args(["template", "fasta"])))]
    Run {
        /// Template DNA (5'→3'); whitespace and case are ignored
        #[arg(long)]
        template: Option<String>,
        /// Single-record FASTA file holding the template (plain or gzipped)
        #[arg(long)]
        fasta: Option<PathBuf>,
        /// Forward primer (5'→3')
        #[arg(long, short = 'f')]
        forward: String,
        /// Reverse primer (5'→3'); searched as its reverse complement
        #[arg(long, short = 'r')]
        reverse: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Bases shown in the sequence preview column
        #[arg(long, default_value_t = 50)]
        preview: usize,
        /// Also draw a schematic gel lane
        #[arg(long)]
        gel: bool,
        /// Minimum lane span in bp for the gel
        #[arg(long, default_value_t = DEFAULT_LADDER_MAX)]
        ladder_max: usize,
        /// Rows used to draw the gel lane
        #[arg(long, default_value_t = 20)]
        gel_rows: usize,
    },

    /// Print the reverse complement of a sequence
    Revcomp {
        /// Sequence (5'→3')
        seq: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { template, fasta, forward, reverse, format, preview, gel, ladder_max, gel_rows } => {
            let template = load_template(template, fasta)?;
            let opts = ReportOptions { preview_len: preview };
            cmd_run(&template, &forward, &reverse, format, &opts, gel.then_some((ladder_max, gel_rows)))?;
        }

        Commands::Revcomp { seq } => {
            println!("{}", vpcr::sequence::reverse_complement(&seq));
        }
    }

    Ok(())
}

fn load_template(text: Option<String>, fasta: Option<PathBuf>) -> Result<Template> {
    match (text, fasta) {
        (Some(text), _) => Ok(Template::from_text(text)),
        (None, Some(path)) => {
            let t = vpcr::fasta::read_template_file(&path)
                .with_context(|| format!("Could not read FASTA file {}", path.display()))?;
            info!("First 100 bp: {}...", t.head(100));
            Ok(t)
        }
        (None, None) => anyhow::bail!("Provide a template with --template or --fasta."),
    }
}

fn cmd_run(
    template: &Template,
    forward: &str,
    reverse: &str,
    format: OutputFormat,
    opts: &ReportOptions,
    gel: Option<(usize, usize)>,
) -> Result<()> {
    let run = vpcr::run_pcr(&template.sequence, forward, reverse)?;
    info!(
        "template {} bp | forward {} | reverse (rc) {} | products {}",
        run.template.len(),
        run.forward,
        run.reverse_complement,
        run.products.len()
    );

    // An empty product set is still written: `[]` for JSON, a header for CSV.
    if !run.has_products() {
        warn!("No valid PCR products found with given primers.");
    }

    let rows = report::product_rows(&run.products, opts);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => {
            let df = report::to_dataframe(&rows, opts)?;
            // Read by polars' pretty-printer; show every row and full cells.
            std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
            std::env::set_var("POLARS_FMT_MAX_ROWS", "1000000");
            std::env::set_var("POLARS_FMT_STR_LEN", "100000");
            std::env::set_var("POLARS_TABLE_WIDTH", "65535");
            writeln!(out, "{}", df)?;
        }
        OutputFormat::Csv => report::write_csv(&rows, opts, &mut out)?,
        OutputFormat::Json => {
            report::write_json(&rows, &mut out)?;
            writeln!(out)?;
        }
        OutputFormat::Fasta => report::write_fasta(&rows, &mut out)?,
    }

    if let Some((ladder_max, gel_rows)) = gel {
        let lane = GelLane::from_lengths(&run.lengths(), ladder_max);
        match format {
            OutputFormat::Table => write!(out, "{}", lane.render(gel_rows))?,
            _ => eprint!("{}", lane.render(gel_rows)),
        }
    }

    Ok(())
}
