use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Instant;

use clap::Parser;
use cribdrag::{recover, Ciphertext, CrackError, Recovery, SearchStats};

/// Recover shift-enciphered text over the {space, a-z} alphabet.
///
/// Reads one line of ciphertext from stdin and prints the recovered
/// plaintext to stdout. Nothing is printed to stdout when no plaintext
/// is found.
#[derive(Parser)]
struct Args {
    /// Print a progress line to stderr every N scored candidates
    #[arg(long, value_name = "N")]
    status: Option<u64>,
    /// Print a JSON run summary to stderr when the search ends
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct RunSummary {
    found: bool,
    via: Option<&'static str>,
    strictness: Option<u32>,
    reference_index: Option<usize>,
    ciphertext_len: usize,
    candidates_scored: u64,
    candidates_pruned: u64,
    elapsed_ms: u128,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("cribdrag: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CrackError> {
    let args = Args::parse();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("Enter ciphertext> ");
        io::stdout().flush()?;
    }

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Err(CrackError::EmptyInput);
    }
    let ctxt = Ciphertext::parse(&line)?;

    let start = Instant::now();
    let mut stats = SearchStats::new(args.status.unwrap_or(0));
    let found = recover(&ctxt, &mut stats);
    let elapsed = start.elapsed();

    if let Some(recovery) = &found {
        println!("{}", recovery.text());
    } else {
        eprintln!("cribdrag: no plaintext recovered");
    }

    if args.status.is_some() {
        stats.report();
    }
    if args.json {
        let (via, strictness, reference_index) = match &found {
            Some(Recovery::Reference { index, .. }) => (Some("reference"), None, Some(*index)),
            Some(Recovery::Assembled { strictness, .. }) => (Some("search"), Some(*strictness), None),
            None => (None, None, None),
        };
        let summary = RunSummary {
            found: found.is_some(),
            via,
            strictness,
            reference_index,
            ciphertext_len: ctxt.len(),
            candidates_scored: stats.scored,
            candidates_pruned: stats.pruned,
            elapsed_ms: elapsed.as_millis(),
        };
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
    }

    Ok(())
}
