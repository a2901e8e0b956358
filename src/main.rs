//! linemark CLI - render a Markdown document as HTML or as its block tree

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Reference HTML rendering
    Html,
    /// Debug print of the parsed blocks
    Tree,
}

#[derive(Parser)]
#[command(name = "linemark")]
#[command(about = "Parse Markdown into blocks and print HTML or the block tree")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Treat pipe tables as plain paragraphs
    #[arg(long)]
    no_tables: bool,

    /// Treat box-drawing regions as plain paragraphs
    #[arg(long)]
    no_ascii_art: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = match &cli.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let options = linemark::Options {
        tables: !cli.no_tables,
        ascii_art: !cli.no_ascii_art,
    };
    log::debug!("parsing {} bytes with {:?}", input.len(), options);

    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Html => {
            let html = linemark::to_html_with_options(&input, &options);
            stdout.write_all(html.as_bytes())?;
        }
        Format::Tree => {
            for block in linemark::parse_with_options(&input, &options) {
                writeln!(stdout, "{block:#?}")?;
            }
        }
    }

    Ok(())
}
