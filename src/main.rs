use clap::{Args, Parser as ClapParser, Subcommand};
use std::io::{self, IsTerminal};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tutorial_navigator::chart::DEFAULT_CHART_WIDTH;
use tutorial_navigator::cli::{self, CliError, OutputFormat, ShowOptions};
use tutorial_navigator::ContentCatalog;

#[derive(ClapParser)]
#[command(name = "tutor")]
#[command(about = "Tutor - A basic to advanced Python tutorial in your terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tutorial sections
    Sections,

    /// Show a tutorial section
    Show(ShowArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Section name: basic, intermediate or advanced
    section: String,

    /// Emit a JSON transcript instead of text
    #[arg(long)]
    json: bool,

    /// Seed for the chart demo data
    #[arg(long, env = "TUTOR_SEED")]
    seed: Option<u64>,

    /// Length of the longest chart bar
    #[arg(long, env = "TUTOR_CHART_WIDTH", default_value_t = DEFAULT_CHART_WIDTH)]
    width: usize,

    /// Include the page title and intro
    #[arg(long)]
    page: bool,

    /// Disable ANSI styling
    #[arg(long)]
    no_style: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sections => {
            print!("{}", cli::sections_overview(&ContentCatalog::standard()));
            Ok(())
        }
        Commands::Show(args) => run_show(args),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_show(args: ShowArgs) -> Result<(), CliError> {
    let options = ShowOptions {
        section: args.section,
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        seed: args.seed,
        chart_width: args.width,
        page: args.page,
        styled: !args.no_style && atty::is(atty::Stream::Stdout),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::execute_show(&options, &mut out)?;
    Ok(())
}

/// Logs go to stderr; stdout carries tutorial output only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tutorial_navigator=warn"));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
