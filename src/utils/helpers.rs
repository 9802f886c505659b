//! Helper functions and utilities
//!
//! This module contains common text helpers used throughout the application.

/// Maximum length of a single Telegram text message, in UTF-16 code units
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Length of `text` as Telegram counts it
pub fn telegram_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Split text into chunks of at most `max_units` UTF-16 code units.
///
/// Chunks break on line boundaries; a single line longer than the limit is
/// cut at character boundaries.
pub fn split_message(text: &str, max_units: usize) -> Vec<String> {
    let max_units = max_units.max(2);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.lines() {
        let line_len = telegram_len(line);
        let needed = if current.is_empty() { line_len } else { line_len + 1 };

        if current_len + needed <= max_units {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
            current_len += needed;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len <= max_units {
            current.push_str(line);
            current_len = line_len;
            continue;
        }

        let mut piece = String::new();
        let mut piece_len = 0;
        for c in line.chars() {
            if piece_len + c.len_utf16() > max_units {
                chunks.push(std::mem::take(&mut piece));
                piece_len = 0;
            }
            piece.push(c);
            piece_len += c.len_utf16();
        }
        if !piece.is_empty() {
            chunks.push(piece);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
