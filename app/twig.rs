//! Command-line interface for twig.
//!
//! Lists the contents of a directory in a tree-like format.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use twig::{TreeConfig, TreeOptionsBuilder, twig};

/// List directory contents in a tree shape.
#[derive(Parser)]
#[command(name = "twig", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// List all files, including hidden ones
    #[arg(short, long)]
    all: bool,

    /// Only list directories
    #[arg(short, long)]
    directories: bool,

    /// Disable output indentation
    #[arg(short = 'i', long)]
    disable_indentation: bool,

    /// Print the full path for each file
    #[arg(short, long)]
    full: bool,

    /// List only files that match the wildcard pattern
    #[arg(short, long, default_value = "*")]
    pattern: String,
}

impl Cli {
    fn into_config(self) -> (PathBuf, Result<TreeConfig, twig::TreeError>) {
        let options = TreeOptionsBuilder::new()
            .include_hidden(self.all)
            .directories_only(self.directories)
            .disable_indentation(self.disable_indentation)
            .full_paths(self.full)
            .pattern(self.pattern)
            .build();
        (self.path, options.compile())
    }
}

fn main() {
    let cli = Cli::parse();
    let (path, config) = cli.into_config();
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    match twig(&path, &config) {
        Ok(tree) => print!("{}", tree),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
