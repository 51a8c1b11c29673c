// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the fuzzrank CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Theme detection tries
//! `FUZZRANK_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR`, and drops escapes entirely when stdout is not a TTY.

use std::sync::OnceLock;

use fuzzrank::{Page, TagMatch, TextMatch};

/// Width of the id column before truncation.
pub const ID_WIDTH: usize = 36;

/// Width of the title column before truncation.
pub const TITLE_WIDTH: usize = 32;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FUZZRANK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7+ (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(RED);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply an escape sequence if colors are on, otherwise return plain text.
pub fn color(code: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Display width ignoring ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            len += 1;
        }
    }
    len
}

/// Cut to `max_len` chars, marking the cut with an ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let len = visible_len(s);
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

/// Score with three decimals, green/yellow/red by strength.
pub fn score_value(score: f64) -> String {
    let text = format!("{:.3}", score);
    let code = if score >= 0.75 {
        GREEN()
    } else if score >= 0.4 {
        YELLOW()
    } else {
        RED()
    };
    color(&code, &text)
}

pub fn error_prefix() -> String {
    color(&RED(), "error:")
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT TABLES
// ═══════════════════════════════════════════════════════════════════════════

fn page_header<T>(label: &str, page: &Page<T>) {
    if page.is_empty() {
        println!("{}", color(&GRAY(), &format!("No {} found.", label)));
        return;
    }
    println!(
        "{}",
        color(
            BOLD,
            &format!(
                "Found {} {} ({}..{})",
                page.total, label, page.start, page.end
            )
        )
    );
}

pub fn print_text_page(page: &Page<TextMatch>) {
    page_header("matches", page);
    for (offset, m) in page.items.iter().enumerate() {
        let rank = color(&GRAY(), &format!("{:>3}.", page.start + offset + 1));
        let title = truncate(m.title.as_deref().unwrap_or("-"), TITLE_WIDTH);
        println!(
            "{} {}  {}  {}",
            rank,
            score_value(m.score),
            pad_right(&title, TITLE_WIDTH),
            color(&CYAN(), &truncate(&m.id, ID_WIDTH))
        );
    }
}

pub fn print_tag_page(page: &Page<TagMatch>) {
    page_header("matches", page);
    for (offset, m) in page.items.iter().enumerate() {
        let rank = color(&GRAY(), &format!("{:>3}.", page.start + offset + 1));
        println!(
            "{} {}  {}",
            rank,
            score_value(m.score),
            color(&CYAN(), &truncate(&m.id, ID_WIDTH))
        );
    }
}

pub fn print_id_page(page: &Page<String>) {
    page_header("candidates", page);
    for id in &page.items {
        println!("  {}", color(&CYAN(), id));
    }
}

pub fn print_vocabulary(frequencies: &[(String, usize)]) {
    if frequencies.is_empty() {
        println!("{}", color(&GRAY(), "No tags found."));
        return;
    }
    let width = frequencies
        .iter()
        .map(|(tag, _)| tag.chars().count())
        .max()
        .unwrap_or(0);
    for (tag, count) in frequencies {
        println!(
            "  {}  {}",
            pad_right(tag, width),
            color(&GRAY(), &count.to_string())
        );
    }
}
