use clap::{Parser, Subcommand};
use shot_table::config::{self, Config};
use shot_table::output::{self, Destination};
use shot_table::scan::{self, Order};
use shot_table::table::{self, EmptyTable};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

/// Options that shape what gets scanned; shared by `table` and `list`.
#[derive(clap::Args, Clone)]
struct ScanArgs {
    /// Column order [default: name]
    #[arg(long, value_enum, global = true)]
    order: Option<Order>,

    /// Prefix for <img src> paths [default: the folder's own name]
    #[arg(long, global = true)]
    folder_name: Option<String>,

    /// Image extensions to include, comma-separated [default: png,jpg,jpeg,gif]
    #[arg(long = "ext", value_delimiter = ',', global = true)]
    extensions: Vec<String>,
}

/// Options for rendering the table.
#[derive(clap::Args, Clone)]
struct TableArgs {
    /// Write the table to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to print when no images are found [default: silent]
    #[arg(long, value_enum)]
    empty: Option<EmptyTable>,
}

impl TableArgs {
    /// Fill unset options from `fallback`; values set here win.
    fn or(self, fallback: TableArgs) -> TableArgs {
        TableArgs {
            output: self.output.or(fallback.output),
            empty: self.empty.or(fallback.empty),
        }
    }
}

#[derive(Parser)]
#[command(name = "shot-table")]
#[command(version)]
#[command(about = "Print a Markdown table of the screenshots in a folder")]
#[command(long_about = "\
Print a Markdown table of the screenshots in a folder

Filenames become captions and the folder name becomes the image path prefix:

  screenshots/
  ├── login_screen.png     → | Login screen |
  ├── dark_mode.jpg        → | Dark mode |
  └── notes.txt            (ignored: not an image)

Output (paste into README.md next to the screenshots/ folder):

  | Dark mode | Login screen |
  |-----------|--------------|
  | <img src=\"screenshots/dark_mode.jpg\" alt=\"Dark mode\"/> | <img src=\"screenshots/login_screen.png\" alt=\"Login screen\"/> |

Settings are read from ./shot-table.toml when present; flags override it.
Run 'shot-table gen-config' to print a documented config file.")]
struct Cli {
    /// Folder to scan [default: screenshots]
    #[arg(short, long, env = "SHOT_TABLE_DIR", global = true)]
    dir: Option<PathBuf>,

    /// Config file [default: ./shot-table.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(flatten)]
    scan: ScanArgs,

    #[command(flatten)]
    table: TableArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the Markdown table (default)
    Table(TableArgs),
    /// Show what a scan finds, as JSON
    List {
        /// Human-readable listing instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Print a stock shot-table.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = match cli.command {
        None => Command::Table(cli.table),
        // Table options given before the subcommand still apply.
        Some(Command::Table(args)) => Command::Table(args.or(cli.table)),
        Some(other) => other,
    };

    match command {
        Command::Table(args) => {
            let config = resolve_config(cli.config, cli.dir, cli.scan)?;
            let empty = args.empty.unwrap_or(config.empty);
            let dest = Destination::from(args.output);
            let rendered = table::generate(&config.directory, &config.scan_options(), empty)?;
            if let Some(text) = rendered {
                output::write_table(&dest, &text)?;
            }
        }
        Command::List { plain } => {
            let config = resolve_config(cli.config, cli.dir, cli.scan)?;
            let set = scan::scan(&config.directory, &config.scan_options())?;
            if plain {
                output::print_list(&set)?;
            } else {
                let json = serde_json::to_string_pretty(&set)?;
                output::write_stdout(&format!("{json}\n"))?;
            }
        }
        Command::GenConfig => {
            output::write_stdout(config::stock_config_toml())?;
        }
    }

    Ok(())
}

/// Layer command-line flags over the loaded config file.
fn resolve_config(
    config_path: Option<PathBuf>,
    dir: Option<PathBuf>,
    scan: ScanArgs,
) -> Result<Config, config::ConfigError> {
    let mut config = config::load_config(config_path.as_deref())?;
    if let Some(dir) = dir {
        config.directory = dir;
    }
    if let Some(order) = scan.order {
        config.order = order;
    }
    if let Some(name) = scan.folder_name {
        config.folder_name = Some(name);
    }
    if !scan.extensions.is_empty() {
        config.extensions = scan.extensions;
    }
    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so stdout carries only the table.
///
/// `RUST_LOG` wins over the verbosity flags when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("shot_table={level}"))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
