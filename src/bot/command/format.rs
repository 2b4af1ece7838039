//! Reply text for commands, kept free of Discord types so it can be tested.

use chrono::{DateTime, Utc};

use crate::model::{
    blacklist::Blacklist,
    lock::{LockEntry, LockOutcome, UnlockOutcome},
    server_config::ServerConfig,
    trigger::TriggerKeyword,
};

/// Discord rejects message content longer than 2000 characters.
pub const MESSAGE_LIMIT: usize = 2000;
/// Discord rejects embed descriptions longer than 4096 characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

pub fn lock_reply(outcome: &LockOutcome, hours: i32, now: DateTime<Utc>) -> String {
    match outcome {
        LockOutcome::Locked(_) => format!("🔒 Channel locked for {} hours", hours),
        LockOutcome::AlreadyLocked(entry) => format!(
            "🔒 Channel is already locked. Unlocks in {} minutes",
            entry.minutes_remaining(now)
        ),
    }
}

pub fn unlock_reply(outcome: &UnlockOutcome) -> &'static str {
    match outcome {
        UnlockOutcome::Unlocked(_) => "🔓 Channel unlocked",
        UnlockOutcome::NotLocked => "🔓 This channel is not locked.",
    }
}

pub fn timer_reply(entry: Option<&LockEntry>, now: DateTime<Utc>) -> String {
    match entry {
        Some(entry) => format!("⏳ Unlocks in {} minutes", entry.minutes_remaining(now)),
        None => "Channel not locked".to_string(),
    }
}

/// One line per locked channel. Mentions only render outside embed field names.
pub fn locked_lines(entries: &[LockEntry], now: DateTime<Utc>) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            format!(
                "<#{}>\nUnlocks in {} min",
                entry.channel_id,
                entry.minutes_remaining(now)
            )
        })
        .collect()
}

pub fn blacklist_lines(blacklist: &Blacklist) -> Vec<String> {
    let channels = blacklist
        .channels
        .iter()
        .map(|id| format!("Channel: <#{}>", id));
    let categories = blacklist
        .categories
        .iter()
        .map(|id| format!("Category: <#{}>", id));

    channels.chain(categories).collect()
}

pub fn config_fields(config: &ServerConfig) -> Vec<(String, String)> {
    vec![
        ("Lock Hours".to_string(), format!("{} hours", config.lock_hours)),
        (
            "Keywords".to_string(),
            on_off(config.keywords_enabled).to_string(),
        ),
    ]
}

pub fn trigger_lines(triggers: &[TriggerKeyword]) -> Vec<String> {
    triggers
        .iter()
        .map(|trigger| {
            let mark = if trigger.enabled { "✅" } else { "⛔" };
            format!("{} `{}`", mark, trigger.phrase)
        })
        .collect()
}

pub fn server_line(name: &str, id: u64, members: u64) -> String {
    format!("{} | ID: {} | Members: {}", name, id, members)
}

pub fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}

/// Help embed fields for the given prefix.
pub fn help_fields(prefix: &str) -> Vec<(String, String)> {
    let entry = |usage: &str, about: &str| (format!("{}{}", prefix, usage), about.to_string());

    vec![
        entry("lock [hours]", "Lock this channel for the game bot"),
        entry("unlock", "Unlock this channel"),
        entry("locked", "List locked channels in this server"),
        entry("check_timer", "Time left on this channel's lock"),
        entry(
            "blacklist add|remove [#channel]",
            "Exclude a channel from keyword detection",
        ),
        entry(
            "blacklist addcategory|removecategory <name>",
            "Exclude a category from keyword detection",
        ),
        entry("blacklist list", "Show blacklisted channels and categories"),
        entry("setlockhours <1-72>", "Set how long keyword locks last"),
        entry("keywords on|off", "Toggle keyword detection"),
        entry("config", "Show this server's settings"),
        entry("owner", "Who runs this bot"),
    ]
}

/// Joins `lines` with `separator` into chunks of at most `limit` characters.
///
/// Lines are never split across chunks; a single line longer than `limit` is
/// truncated.
pub fn chunk_lines(lines: &[String], separator: &str, limit: usize) -> Vec<String> {
    let separator_len = separator.chars().count();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in lines {
        let line: String = line.chars().take(limit).collect();
        let line_len = line.chars().count();

        if !current.is_empty() && current_len + separator_len + line_len > limit {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push_str(separator);
            current_len += separator_len;
        }
        current.push_str(&line);
        current_len += line_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Footer for page `page` of `total`; a single page has none.
pub fn page_footer(page: usize, total: usize) -> Option<String> {
    (total > 1).then(|| format!("Page {}/{}", page, total))
}
