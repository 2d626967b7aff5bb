/// CLI argument definitions for the `decomment` command.
use std::path::PathBuf;

use clap::Parser;
use decomment::strip::Strategy;

/// Strip `//` and `/* */` comments from source files, keeping string literals intact.
#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    version,
    about,
    long_about = "\
Strip // line comments and /* */ block comments from source files.

Quoted string literals are preserved exactly, so a URL such as \"http://x\"
inside a string is never mistaken for a comment. Each comment is replaced by
a single space; line endings are kept.

INPUT may be a directory, a single file, or `-` for standard input.
For a directory, every file is written under the same name into OUTPUT.
For a file or stdin, the result goes to OUTPUT or to standard output.

Strategies:
  mask  hide strings behind placeholders, strip comments, restore strings
  scan  single pass with code/string/comment states (handles \\\" escapes)"
)]
pub struct Cli {
    /// Input directory, file, or `-` for stdin
    pub input: PathBuf,

    /// Output directory (or output file when INPUT is a file)
    pub output: Option<PathBuf>,

    /// Stripping strategy (default: mask)
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Descend into subdirectories, mirroring their layout in OUTPUT
    #[arg(short, long)]
    pub recursive: bool,

    /// Only process files with this extension (repeatable, e.g. --ext c --ext h)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Skip files matching this glob (repeatable, e.g. --exclude "*.min.js")
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Configuration file (default: .decomment.toml in the input directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Log every processed file and list per-file results
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the input is standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
