use calltree_diagram::Grammar;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calltree")]
#[command(about = "Render function call trees as Mermaid or PlantUML diagrams", long_about = None)]
#[command(version)]
pub struct Cli {
    /// More logging (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a call-tree diagram for a project folder
    Analyze {
        /// Project root
        root: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        /// Diagram grammar: mermaid or plantuml
        #[arg(short, long)]
        grammar: Option<Grammar>,

        /// Maximum levels per call tree, entry point included
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the extracted function records as JSON
    Functions {
        /// Project root
        root: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options shared by every command that scans a project
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Language label (javascript, react, typescript, python, rust)
    #[arg(short, long)]
    pub language: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sub-folder of the root to analyze
    #[arg(long)]
    pub code_folder: Option<String>,

    /// Parse JavaScript/TypeScript with tree-sitter instead of patterns
    #[arg(long)]
    pub prefer_structured: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Diagram text only
    Text,
    /// Diagram plus summary
    Json,
}
