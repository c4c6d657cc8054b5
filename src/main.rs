use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use iconmask::{
    DEFAULT_CSS_OUTPUT, DEFAULT_EXPORT_DIR, DEFAULT_INPUT, DEFAULT_TEXT_OUTPUT, Options,
    load_icons, run_css, run_export, run_text, write_rules,
};

#[derive(Parser)]
#[command(name = "iconmask")]
#[command(about = "Turn an SVG icon sheet into CSS masks or standalone icons", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a stylesheet with one mask rule per icon
    Css {
        #[command(flatten)]
        rules: RuleArgs,

        /// Output file (use - for stdout)
        #[arg(short, long, default_value = DEFAULT_CSS_OUTPUT)]
        output: PathBuf,
    },

    /// Write the same rules to a text file
    Text {
        #[command(flatten)]
        rules: RuleArgs,

        /// Output file (use - for stdout)
        #[arg(short, long, default_value = DEFAULT_TEXT_OUTPUT)]
        output: PathBuf,
    },

    /// Write one standalone SVG file per icon
    Export {
        /// Input icon sheet
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_EXPORT_DIR)]
        dir: PathBuf,
    },
}

#[derive(Args)]
struct RuleArgs {
    /// Input icon sheet
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Keep path coordinates as they are instead of truncating to integers
    #[arg(long)]
    no_truncate: bool,
}

impl RuleArgs {
    fn options(&self) -> Options {
        Options {
            truncate_paths: !self.no_truncate,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Css { rules, output } => {
            if output.as_os_str() == "-" {
                write_stdout(&rules)?;
            } else {
                run_css(&rules.input, &output, &rules.options())?;
            }
        }
        Command::Text { rules, output } => {
            if output.as_os_str() == "-" {
                write_stdout(&rules)?;
            } else {
                run_text(&rules.input, &output, &rules.options())?;
            }
        }
        Command::Export { input, dir } => {
            run_export(&input, &dir)?;
        }
    }

    Ok(())
}

fn write_stdout(rules: &RuleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let icons = load_icons(&rules.input)?;
    let mut stdout = io::stdout().lock();
    write_rules(&mut stdout, &icons, &rules.options())?;
    stdout.flush()?;
    Ok(())
}
