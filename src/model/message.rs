//! Inbound message as seen by the event router.

use serenity::all::Message;

/// The parts of a guild message the router needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub guild_id: u64,
    pub channel_id: u64,
    /// Category of the channel, when known from cache.
    pub category_id: Option<u64>,
    pub author_id: u64,
    pub author_is_bot: bool,
    /// Whether the author is this bot's own account.
    pub from_self: bool,
    pub content: String,
}

impl IncomingMessage {
    /// Converts a Serenity message. Returns `None` for direct messages.
    pub fn from_message(message: &Message, category_id: Option<u64>, self_id: u64) -> Option<Self> {
        let guild_id = message.guild_id?;

        Some(Self {
            guild_id: guild_id.get(),
            channel_id: message.channel_id.get(),
            category_id,
            author_id: message.author.id.get(),
            author_is_bot: message.author.bot,
            from_self: message.author.id.get() == self_id,
            content: message.content.clone(),
        })
    }
}

/// What the router did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Own message, human author, or nothing to evaluate.
    Ignored,
    /// The game bot announced a shiny catch; a celebration was sent.
    Celebrated,
    /// Channel or category is blacklisted.
    Blacklisted,
    /// Keyword detection is turned off for the guild.
    KeywordsDisabled,
    /// No enabled trigger phrase occurs in the content.
    NoMatch,
    /// The channel was locked by this message.
    Locked,
    /// The channel was already locked; nothing changed.
    AlreadyLocked,
}
