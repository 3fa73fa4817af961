use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};

use regex_chain::{compile, execute};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chain script to run; standard input when omitted
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Pattern delimiter
    #[arg(short = 'd', long, default_value_t = '/')]
    delimiter: char,

    /// Add the UTF-8 modifiers (`muS` instead of `m`)
    #[arg(short = 'u', long)]
    utf8: bool,

    /// Print the bare pattern without delimiters or modifiers
    #[arg(short = 'r', long, conflicts_with = "utf8")]
    raw: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let script = match args.file.as_ref() {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?,
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read stdin")?;
            script
        }
    };

    let code = compile(&script)?;
    let regex = execute(&code)?;

    let pattern = if args.raw {
        regex.to_string()
    } else if args.utf8 {
        regex.to_utf8_regex_with(args.delimiter)?
    } else {
        regex.to_regex_with(args.delimiter)?
    };
    println!("{pattern}");
    Ok(())
}
