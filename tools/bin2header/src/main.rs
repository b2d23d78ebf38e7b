//! Tool for embedding a binary file into a C++ build as a `constexpr` byte array header.

use std::{
    fs::{self, File},
    io::BufWriter,
};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

fn main() -> Result<()> {
    let matches = command_parser().get_matches();
    let (input_path, output_path, array_name) = parse_arguments(&matches);

    let data = fs::read(input_path)
        .with_context(|| format!("failed to read input file \"{input_path}\""))?;

    let output = File::create(output_path)
        .with_context(|| format!("failed to create output file \"{output_path}\""))?;
    bin2header::emit_header(&data, BufWriter::new(output), array_name)?;

    println!("embedded {} bytes from \"{input_path}\" into \"{output_path}\"", data.len());

    Ok(())
}

/// Extracts the input path, output path, and array name from `matches`.
fn parse_arguments(matches: &ArgMatches) -> (&str, &str, &str) {
    let input_path = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_else(|| unreachable!("`input` is a required argument"));

    let output_path = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or_else(|| unreachable!("`output` is a required argument"));

    let array_name = matches
        .get_one::<String>("name")
        .map(String::as_str)
        .unwrap_or_else(|| unreachable!("`name` is a required argument"));

    (input_path, output_path, array_name)
}

/// Returns the command parser for `bin2header`.
fn command_parser() -> Command {
    let input = Arg::new("input")
        .help("Path to the binary file to embed")
        .required(true);

    let output = Arg::new("output")
        .help("Path of the header file to create or overwrite")
        .required(true);

    let name = Arg::new("name")
        .help("Identifier to declare the embedded array as")
        .required(true);

    Command::new("bin2header")
        .about("Embeds a binary file into a C++ header as a `constexpr unsigned char` array")
        .arg(input)
        .arg(output)
        .arg(name)
}
