use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use log::info;
use pagesim::{read_input, render_table, TableStyle};

const USAGE: &str = "Usage: pagesim [--held] [FILE]";

fn prompt_filename() -> Result<PathBuf> {
    print!("Enter input filename: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read filename")?;
    Ok(PathBuf::from(line.trim()))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut style = TableStyle::Sparse;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--held" => style = TableStyle::Held,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if path.is_none() && !arg.starts_with('-') => path = Some(PathBuf::from(arg)),
            _ => {
                println!("{}", USAGE);
                process::exit(1);
            }
        }
    }

    let path = match path {
        Some(path) => path,
        None => prompt_filename()?,
    };

    let input = read_input(&path)
        .with_context(|| format!("could not load input from {}", path.display()))?;

    println!("Running {}...", input.algorithm);
    let trace = input.run().context("simulation failed")?;
    info!("{}", trace.stats());

    print!("{}", render_table(&input.references, &trace, style));
    Ok(())
}
