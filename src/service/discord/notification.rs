//! Embed and component rendering for lock notifications.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateMessage, Timestamp,
};

use crate::model::{
    lock::{LockActor, LockReason},
    notification::{Notification, LOCKED_TITLE, UNLOCKED_TITLE},
};

/// Component id of the unlock button. The target channel is the one the button
/// was pressed in.
pub const UNLOCK_BUTTON_ID: &str = "lockbot:unlock";

pub const COLOR_LOCKED: u32 = 0xe74c3c;
pub const COLOR_UNLOCKED: u32 = 0x2ecc71;
pub const COLOR_CELEBRATION: u32 = 0xf1c40f;
pub const COLOR_INFO: u32 = 0x3498db;

const CELEBRATION_TITLE: &str = "✨ Shiny Caught!";

pub const HUNT_ALERT: &str = "A shiny or rare hunt has appeared! React quickly!";

pub fn title(notification: &Notification) -> &'static str {
    match notification {
        Notification::Locked { .. } => LOCKED_TITLE,
        Notification::Unlocked { .. } => UNLOCKED_TITLE,
        Notification::Celebration => CELEBRATION_TITLE,
    }
}

pub fn description(notification: &Notification) -> String {
    match notification {
        Notification::Locked {
            hours,
            reason: LockReason::Keyword,
            ..
        } => format!("Locked for {} hours due to keyword detection", hours),
        Notification::Locked {
            hours,
            reason: LockReason::Manual { user_id },
            ..
        } => format!("Locked for {} hours by <@{}>", hours, user_id),
        Notification::Unlocked {
            actor: LockActor::User(user_id),
        } => format!("Unlocked by <@{}>", user_id),
        Notification::Unlocked {
            actor: LockActor::Bot,
        } => "Lock expired, the channel was unlocked automatically".to_string(),
        Notification::Celebration => "Congratulations on the shiny! 🎉".to_string(),
    }
}

pub fn color(notification: &Notification) -> u32 {
    match notification {
        Notification::Locked { .. } => COLOR_LOCKED,
        Notification::Unlocked { .. } => COLOR_UNLOCKED,
        Notification::Celebration => COLOR_CELEBRATION,
    }
}

/// Plain-text alert posted above a keyword lock, mentioning the ping role if set.
pub fn alert(notification: &Notification) -> Option<String> {
    match notification {
        Notification::Locked {
            reason: LockReason::Keyword,
            ping_role_id,
            ..
        } => Some(match ping_role_id {
            Some(role_id) => format!("<@&{}> {}", role_id, HUNT_ALERT),
            None => HUNT_ALERT.to_string(),
        }),
        _ => None,
    }
}

pub fn build_embed(notification: &Notification) -> CreateEmbed {
    CreateEmbed::new()
        .title(title(notification))
        .description(description(notification))
        .color(color(notification))
        .timestamp(Timestamp::now())
}

pub fn unlock_button() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(UNLOCK_BUTTON_ID)
        .label("Unlock Channel")
        .style(ButtonStyle::Success)])
}

/// Full message for a notification; lock notices carry the unlock button.
pub fn build_message(notification: &Notification) -> CreateMessage {
    let mut message = CreateMessage::new().embed(build_embed(notification));
    if let Some(content) = alert(notification) {
        message = message.content(content);
    }

    match notification {
        Notification::Locked { .. } => message.components(vec![unlock_button()]),
        _ => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notification::{LOCKED_MARKER, UNLOCKED_MARKER};

    #[test]
    fn keyword_lock_mentions_duration() {
        let notification = Notification::Locked {
            hours: 12,
            reason: LockReason::Keyword,
            ping_role_id: None,
        };

        assert_eq!(
            description(&notification),
            "Locked for 12 hours due to keyword detection"
        );
        assert_eq!(color(&notification), COLOR_LOCKED);
    }

    #[test]
    fn unlock_attributes_actor() {
        let by_user = Notification::Unlocked {
            actor: LockActor::User(42),
        };
        let by_bot = Notification::Unlocked {
            actor: LockActor::Bot,
        };

        assert_eq!(description(&by_user), "Unlocked by <@42>");
        assert!(description(&by_bot).contains("automatically"));
    }

    #[test]
    fn titles_carry_history_markers() {
        let locked = Notification::Locked {
            hours: 1,
            reason: LockReason::Manual { user_id: 1 },
            ping_role_id: None,
        };
        let unlocked = Notification::Unlocked {
            actor: LockActor::Bot,
        };

        assert!(title(&locked).contains(LOCKED_MARKER));
        assert!(title(&unlocked).contains(UNLOCKED_MARKER));
        assert!(!title(&unlocked).contains(LOCKED_MARKER));
    }

    #[test]
    fn keyword_lock_alerts_ping_role() {
        let with_role = Notification::Locked {
            hours: 12,
            reason: LockReason::Keyword,
            ping_role_id: Some(777),
        };
        let without_role = Notification::Locked {
            hours: 12,
            reason: LockReason::Keyword,
            ping_role_id: None,
        };

        assert_eq!(
            alert(&with_role).as_deref(),
            Some("<@&777> A shiny or rare hunt has appeared! React quickly!")
        );
        assert_eq!(alert(&without_role).as_deref(), Some(HUNT_ALERT));
    }

    #[test]
    fn manual_lock_and_unlock_post_no_alert() {
        let manual = Notification::Locked {
            hours: 2,
            reason: LockReason::Manual { user_id: 9 },
            ping_role_id: Some(777),
        };

        assert_eq!(alert(&manual), None);
        assert_eq!(
            alert(&Notification::Unlocked {
                actor: LockActor::Bot
            }),
            None
        );
    }

    #[test]
    fn embed_serializes_title_and_color() {
        let embed = build_embed(&Notification::Celebration);

        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["title"], CELEBRATION_TITLE);
        assert_eq!(json["color"], COLOR_CELEBRATION);
    }
}
