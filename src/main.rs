use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use declgen::emit::{EmitConfig, EnumStyle};

#[derive(Parser)]
#[command(
    name = "declgen",
    version,
    about = "Generate TypeScript declarations from a REST API type catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the declaration file from a catalog
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to the type catalog JSON file
    #[arg(long)]
    catalog: PathBuf,

    /// Path of the declaration file to write
    #[arg(long)]
    out: PathBuf,

    /// How enum definitions are rendered
    #[arg(long, value_enum, default_value = "enum")]
    enum_style: EnumStyleArg,

    /// Name of the namespace wrapping all declarations
    #[arg(long, default_value = "T")]
    namespace: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EnumStyleArg {
    /// Block enum declarations
    Enum,
    /// One-line string-literal union aliases
    LiteralUnion,
}

impl From<EnumStyleArg> for EnumStyle {
    fn from(arg: EnumStyleArg) -> Self {
        match arg {
            EnumStyleArg::Enum => EnumStyle::Declaration,
            EnumStyleArg::LiteralUnion => EnumStyle::LiteralUnion,
        }
    }
}

fn main() -> ExitCode {
    declgen::init_tracing();

    match Cli::parse().command {
        Some(Commands::Generate(args)) => {
            let config = EmitConfig {
                enum_style: args.enum_style.into(),
                namespace: args.namespace,
            };
            match declgen::generate_declarations(&args.catalog, &args.out, &config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            }
        }
        None => {
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
            println!();
            ExitCode::SUCCESS
        }
    }
}
