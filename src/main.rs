use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fuzzrank::{
    candidates_with_all_tags, paginate, rank_request, tag_frequencies, top_tag_matches,
    top_text_matches, Candidate, RankOptions, RankRequest, TextProfile, DEFAULT_PAGE_SIZE,
};

mod cli;
use cli::display;
use cli::{split_tags, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", display::error_prefix(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON on stdout stays clean.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("FUZZRANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Text {
            candidates,
            query,
            limit,
            page,
            min_score,
            title_weight,
            token_threshold,
            name_only,
            config,
            json,
        } => {
            let mut options = load_options(config.as_deref())?;
            let text = &mut options.text;
            if let Some(min_score) = min_score {
                text.min_score = min_score;
            }
            if let Some(title_weight) = title_weight {
                text.title_weight = title_weight;
            }
            if let Some(token_threshold) = token_threshold {
                text.token_threshold = token_threshold;
            }
            if name_only {
                text.profile = TextProfile::NameOnly;
            }
            options.validate().context("Invalid text options")?;

            let page_size = limit.unwrap_or(DEFAULT_PAGE_SIZE);
            options.text.top_n = page_size.saturating_mul(page.saturating_add(1));

            let candidates = read_candidates(&candidates)?;
            let matches = top_text_matches(&query, &candidates, &options.text);
            let page = paginate(matches, page, page_size);

            if json {
                print_json(&page)
            } else {
                display::print_text_page(&page);
                Ok(())
            }
        }

        Commands::Tags {
            candidates,
            tags,
            all,
            limit,
            page,
            config,
            json,
        } => {
            let mut options = load_options(config.as_deref())?;
            let query = split_tags(&tags);
            let candidates = read_candidates(&candidates)?;
            let page_size = limit.unwrap_or(DEFAULT_PAGE_SIZE);

            if all {
                let ids: Vec<String> = candidates_with_all_tags(query.as_slice(), &candidates)
                    .into_iter()
                    .map(|candidate| candidate.id.clone())
                    .collect();
                let page = paginate(ids, page, page_size);
                return if json {
                    print_json(&page)
                } else {
                    display::print_id_page(&page);
                    Ok(())
                };
            }

            options.tags.top_n = page_size.saturating_mul(page.saturating_add(1));
            let matches = top_tag_matches(query.as_slice(), &candidates, &options.tags);
            let page = paginate(matches, page, page_size);

            if json {
                print_json(&page)
            } else {
                display::print_tag_page(&page);
                Ok(())
            }
        }

        Commands::Vocab { candidates, json } => {
            let candidates = read_candidates(&candidates)?;
            let frequencies = tag_frequencies(&candidates);
            if json {
                print_json(&frequencies)
            } else {
                display::print_vocabulary(&frequencies);
                Ok(())
            }
        }

        Commands::Request { file } => {
            let raw = read_input(&file)?;
            let request = RankRequest::from_json_str(&raw)
                .with_context(|| format!("Failed to parse request from {}", file))?;
            let matches = rank_request(&request)?;
            print_json(&matches)
        }
    }
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

fn read_candidates(path: &str) -> Result<Vec<Candidate>> {
    let raw = read_input(path)?;
    let candidates: Vec<Candidate> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse candidates from {}", path))?;
    debug!(path, count = candidates.len(), "Loaded candidates.");
    Ok(candidates)
}

fn load_options(path: Option<&str>) -> Result<RankOptions> {
    match path {
        Some(path) => {
            RankOptions::load(path).with_context(|| format!("Failed to load options from {}", path))
        }
        None => Ok(RankOptions::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
