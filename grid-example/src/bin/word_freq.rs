//! Word frequency counter over a file or stdin, split on whitespace.
//!
//! Usage: word-freq [file]

use anyhow::Context;
use split_framework::{split, Predicate, SplitOptions};
use std::collections::HashMap;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let words = split(
        &Predicate(|c: char| c.is_whitespace()),
        &text,
        |tok| {
            if !tok.is_empty() {
                *counts.entry(tok.text()).or_insert(0) += 1;
            }
        },
        SplitOptions::new().compress_delimiters(true),
    );

    let mut ordered: Vec<(&str, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!("{words} tokens");
    for (word, count) in ordered.iter().take(20) {
        println!("{count:6}  {word}");
    }
    Ok(())
}
