// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat addressing and message sizing for the Bot API.

use revwatch_core::RevwatchError;
use teloxide::types::{ChatId, Recipient};

/// Longest text the Bot API accepts in one message.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Parses a configured chat id: a (possibly negative) integer or an
/// `@channel` username.
pub fn parse_recipient(raw: &str) -> Result<Recipient, RevwatchError> {
    let raw = raw.trim();
    if raw.starts_with('@') && raw.len() > 1 {
        return Ok(Recipient::ChannelUsername(raw.to_string()));
    }
    raw.parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|e| RevwatchError::Delivery {
            message: format!("invalid chat id `{raw}`: {e}"),
            source: None,
        })
}

/// Cuts `text` down to [`MAX_MESSAGE_LENGTH`] characters.
///
/// Long error reports are the only messages that can hit the limit; losing
/// their tail beats losing the whole report.
pub fn fit_message(text: &str) -> &str {
    match text.char_indices().nth(MAX_MESSAGE_LENGTH) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
