use anyhow::Result;
use clap::{Parser, Subcommand};
use extract_edids::commands::{extract_command, inspect_command};
use extract_edids::init_tracing;

/// Extract raw EDID blocks from X server logs and text dumps.
///
/// This CLI is a thin wrapper around `edid-core` (exposed in code as `edid_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "extract-edids",
    version,
    about = "Extract EDIDs from verbose X logs and EDID text dumps",
    long_about = None
)]
struct Cli {
    /// Print debug diagnostics to stderr (RUST_LOG overrides).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode every EDID in a log or text dump and write each to a binary file.
    ///
    /// Files are named `edid.bin` in the current directory (falling back to the
    /// home directory, then /tmp) unless `--output` is given. Existing files are
    /// never overwritten: `.0`, `.1`, ... suffixes are appended instead.
    Extract {
        /// Log file or text dump to read.
        #[arg(long, short)]
        input: String,

        /// Base output filename. `~` is expanded.
        #[arg(long, short)]
        output: Option<String>,

        /// Write a JSON manifest of the extracted EDIDs to this path.
        #[arg(long)]
        manifest: Option<String>,

        /// Print the manifest as JSON on stdout.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// YAML or JSON file with defaults for the options above.
        #[arg(long)]
        config: Option<String>,
    },

    /// List the EDIDs in a log or text dump without writing anything.
    Inspect {
        /// Log file or text dump to read.
        #[arg(long, short)]
        input: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Extract { input, output, manifest, json, config } => {
            extract_command(&input, output, manifest, json, config.as_deref())?
        }
        Command::Inspect { input, json } => inspect_command(&input, json)?,
    }

    Ok(())
}
