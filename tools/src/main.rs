use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use share::{ProjectKind, ProjectRecord};

#[derive(Parser)]
#[command(
    name = "lzurl",
    version,
    about = "lzurl token encoding and inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress text into a URL-safe token.
    Encode {
        /// Input file (stdin when omitted).
        input: Option<PathBuf>,
    },
    /// Recover the text compressed into a token.
    Decode {
        /// Token file (stdin when omitted).
        input: Option<PathBuf>,
    },
    /// Report size and payload statistics for a token.
    Inspect {
        /// Token file (stdin when omitted).
        input: Option<PathBuf>,
    },
    /// Build a shareable project link.
    Share {
        /// Page URL the link should open.
        #[arg(long)]
        page: String,
        /// Project name.
        #[arg(long, default_value = "Shared Project")]
        name: String,
        /// What the project primarily contains.
        #[arg(long, value_enum, default_value_t = KindArg::Full)]
        kind: KindArg,
        /// HTML body file.
        #[arg(long)]
        html: Option<PathBuf>,
        /// CSS file.
        #[arg(long)]
        css: Option<PathBuf>,
        /// JavaScript file.
        #[arg(long)]
        js: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Html,
    Css,
    Js,
    Full,
}

impl From<KindArg> for ProjectKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Html => Self::Html,
            KindArg::Css => Self::Css,
            KindArg::Js => Self::Js,
            KindArg::Full => Self::Full,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode { input } => {
            let text = read_input(input.as_ref())?;
            println!("{}", codec::encode(&text));
        }
        Command::Decode { input } => {
            let token = read_input(input.as_ref())?;
            match codec::decode(token.trim()).context("decode token")? {
                Some(text) => println!("{text}"),
                None => bail!("token is empty; nothing to decode"),
            }
        }
        Command::Inspect { input } => {
            let token = read_input(input.as_ref())?;
            print_inspect_report(token.trim());
        }
        Command::Share {
            page,
            name,
            kind,
            html,
            css,
            js,
        } => {
            let record = ProjectRecord {
                name,
                kind: kind.into(),
                html: read_part(html.as_ref())?,
                css: read_part(css.as_ref())?,
                js: read_part(js.as_ref())?,
            };
            let url = share::share_url(&page, &record).context("build share url")?;
            println!("{url}");
        }
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

fn read_part(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => Ok(String::new()),
    }
}

fn print_inspect_report(token: &str) {
    let symbols = token.chars().count();
    println!(
        "token: {symbols} symbols ({} payload bits)",
        symbols * bitpack::SYMBOL_BITS
    );

    let stray: Vec<char> = token
        .chars()
        .filter(|&ch| ch != ' ' && bitpack::alphabet::index_of(ch).is_none())
        .collect();
    if !stray.is_empty() {
        println!("stray characters outside the alphabet: {stray:?}");
    }

    match codec::decode(token) {
        Ok(Some(text)) => {
            let units = text.encode_utf16().count();
            println!("decoded: {units} UTF-16 units");
            if units > 0 {
                let per_unit = symbols as f64 / units as f64;
                println!("ratio: {per_unit:.2} symbols per unit");
            }
            match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(serde_json::Value::Object(map)) => {
                    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                    println!("payload: JSON object with keys {}", keys.join(", "));
                }
                Ok(_) => println!("payload: JSON, not an object"),
                Err(_) => println!("payload: plain text"),
            }
        }
        Ok(None) => println!("decoded: empty token (no data)"),
        Err(err) => println!("decode failed: {err}"),
    }
}
