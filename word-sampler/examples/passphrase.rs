#[macro_use]
extern crate log;

use std::env;
use std::process::exit;

use word_sampler::{ConfigBuilder, RngSource, Selection, WordSamplerBuilder};

use env_logger::Env;

// Usage: passphrase <count> [distinct|shuffle] <word>...
fn main() {
    env_logger::init_from_env(Env::new().default_filter_or("info"));

    let args: Vec<String> = env::args().skip(1).collect();
    let (count, rest) = match args.split_first() {
        Some((count, rest)) => (count, rest),
        None => {
            error!("Please give a word count followed by some words.");
            exit(1);
        }
    };

    let count: i64 = match count.parse() {
        Ok(count) => count,
        Err(e) => {
            error!("Could not parse word count {:?}: {}", count, e);
            exit(2);
        }
    };

    let (allow_duplicates, selection, words) = match rest {
        [mode, words @ ..] if mode == "distinct" => (false, Selection::Rejection, words),
        [mode, words @ ..] if mode == "shuffle" => (false, Selection::PartialShuffle, words),
        words => (true, Selection::Rejection, words),
    };

    let sampler = WordSamplerBuilder::new()
        .words(words)
        .random_source(RngSource::new(rand::rng()))
        .config(ConfigBuilder::new().selection(selection).build())
        .build();

    let mut sampler = match sampler {
        Ok(sampler) => sampler,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };

    info!(
        "Drawing {} words from a pool of {} ({})",
        count,
        sampler.len(),
        if allow_duplicates {
            "duplicates allowed".to_string()
        } else {
            format!("{} selection", selection)
        }
    );

    match sampler.draw_many(count, allow_duplicates) {
        Ok(words) => println!("{}", words.join(" ")),
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}
