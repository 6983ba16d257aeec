use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use graph_search::{
    LadderOptions, NeighborStrategy, TrivialLadder, generate_word_ladder_with, loader,
};
use log::info;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Find the shortest word ladder between two words.
#[derive(Parser, Debug)]
#[command(name = "ladder", version)]
struct Args {
    /// Start word (prompted for when omitted)
    start: Option<String>,

    /// End word (prompted for when omitted)
    end: Option<String>,

    /// Dictionary of whitespace-separated words
    #[arg(long, default_value = "words.txt")]
    dict: PathBuf,

    /// Neighbor enumeration strategy
    #[arg(long, value_enum, default_value_t = Strategy::Variants)]
    strategy: Strategy,

    /// Report no ladder instead of a one-word ladder when start equals end
    #[arg(long)]
    empty_trivial: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    Variants,
    Scan,
}

impl From<Strategy> for NeighborStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Variants => NeighborStrategy::Variants,
            Strategy::Scan => NeighborStrategy::Scan,
        }
    }
}

#[derive(Serialize, Debug)]
struct LadderReport<'a> {
    start: &'a str,
    end: &'a str,
    ladder: &'a [String],
}

/// Reads one word after printing a prompt. `None` on end of input or a blank line.
fn prompt(
    label: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<String>> {
    write!(output, "Enter the {label} word: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let word = line.trim();
    Ok((!word.is_empty()).then(|| word.to_string()))
}

fn word_or_prompt(
    word: Option<String>,
    label: &str,
    input: &mut impl BufRead,
) -> Result<String, Box<dyn std::error::Error>> {
    let word = match word {
        Some(word) => word,
        None => match prompt(label, input, &mut io::stdout())? {
            Some(word) => word,
            None => Args::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    format!("no {label} word given"),
                )
                .exit(),
        },
    };
    Ok(word.to_lowercase())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let dict = loader::load_words(&args.dict)?;
    info!("Dictionary loaded: {} words", dict.len());

    let mut stdin = io::stdin().lock();
    let start = word_or_prompt(args.start, "start", &mut stdin)?;
    let end = word_or_prompt(args.end, "end", &mut stdin)?;

    let options = LadderOptions {
        strategy: args.strategy.into(),
        trivial: if args.empty_trivial {
            TrivialLadder::Empty
        } else {
            TrivialLadder::SingleWord
        },
    };
    let ladder = generate_word_ladder_with(&start, &end, &dict, &options);

    if args.json {
        let report = LadderReport {
            start: &start,
            end: &end,
            ladder: &ladder,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if ladder.is_empty() {
        println!("No ladder found.");
    } else {
        println!("Ladder from {} to {}:", start, end);
        println!("{}", ladder.join(" -> "));
        println!("Length: {} words", ladder.len());
    }

    Ok(())
}
