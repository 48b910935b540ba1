use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};

use burgerbuild::project;
use burgerbuild::rules;
use burgerbuild::utils::configs::BuildContext;
use burgerbuild::utils::log::{log, LogLevel};
use burgerbuild::{charsets, errors::BuildResult, project::types::IdeType};

#[derive(Parser)]
#[command(name = "burgerbuild", version, about = "Build rules for the Burgerlib source tree")]
struct Cli {
    /// Directory to operate on, defaults to the current directory
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Configuration to build
    #[arg(short, long, default_value = "all")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the prebuild hook for the directory
    Prebuild,
    /// Run the postbuild hook for the directory
    Postbuild,
    /// Run prebuild and postbuild in sequence
    Build,
    /// Clean, then run the full build
    Rebuild,
    /// Delete temporary files and build output
    Clean,
    /// Write the project files for every target
    Generate {
        /// Restrict generation to one IDE
        #[arg(short = 'g', long)]
        ide: Option<String>,
    },
    /// Render the character set HTML tables
    Charsets,
}

fn run(cli: Cli) -> BuildResult<()> {
    let working_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|why| {
            log(LogLevel::Error, &format!("Cannot read the current directory: {}", why));
            exit(1);
        }),
    };
    let ctx = BuildContext::new(working_dir, &cli.config);

    match cli.command {
        Commands::Prebuild => rules::rules_for(&ctx.working_dir)?.prebuild(&ctx),
        Commands::Postbuild => rules::rules_for(&ctx.working_dir)?.postbuild(&ctx),
        Commands::Build => rules::build(&ctx),
        Commands::Rebuild => rules::rebuild(&ctx),
        Commands::Clean => rules::rules_for(&ctx.working_dir)?.clean(&ctx),
        Commands::Generate { ide } => {
            let only_ide = match ide {
                Some(name) => match IdeType::from_name(&name) {
                    Some(ide) => Some(ide),
                    None => {
                        log(LogLevel::Error, &format!("Unknown IDE: {}", name));
                        exit(1);
                    }
                },
                None => None,
            };
            project::generate(&ctx, only_ide)
        }
        Commands::Charsets => charsets::generate(&ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(why) = run(cli) {
        log(LogLevel::Error, &format!("{}", why));
        exit(why.exit_code());
    }
}
