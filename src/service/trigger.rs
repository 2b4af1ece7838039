//! Trigger phrase management and matching.

use crate::{
    data::store::Store,
    error::AppError,
    model::trigger::{normalize_phrase, TriggerKeyword, DEFAULT_TRIGGER_PHRASES, MAX_PHRASE_LENGTH},
};

pub struct TriggerService<'a> {
    store: &'a dyn Store,
}

impl<'a> TriggerService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Inserts the default phrases when the store holds none.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of phrases seeded, zero if phrases already existed
    pub async fn seed_defaults(&self) -> Result<usize, AppError> {
        if !self.store.triggers().await?.is_empty() {
            return Ok(0);
        }

        let mut seeded = 0;
        for phrase in DEFAULT_TRIGGER_PHRASES {
            if self.store.add_trigger(&TriggerKeyword::new(phrase, true)).await? {
                seeded += 1;
            }
        }

        tracing::info!("Seeded {} default trigger phrases", seeded);

        Ok(seeded)
    }

    pub async fn list(&self) -> Result<Vec<TriggerKeyword>, AppError> {
        self.store.triggers().await
    }

    /// Enabled phrases only.
    pub async fn enabled(&self) -> Result<Vec<TriggerKeyword>, AppError> {
        let mut triggers = self.store.triggers().await?;
        triggers.retain(|t| t.enabled);
        Ok(triggers)
    }

    /// Adds an enabled phrase.
    ///
    /// # Returns
    /// - `Ok(true)` - Phrase added
    /// - `Ok(false)` - Phrase already exists
    /// - `Err(AppError::BadRequest)` - Phrase empty or too long
    pub async fn add(&self, phrase: &str) -> Result<bool, AppError> {
        let keyword = TriggerKeyword::new(&validate_phrase(phrase)?, true);
        self.store.add_trigger(&keyword).await
    }

    pub async fn remove(&self, phrase: &str) -> Result<bool, AppError> {
        self.store.remove_trigger(&validate_phrase(phrase)?).await
    }

    pub async fn set_enabled(&self, phrase: &str, enabled: bool) -> Result<bool, AppError> {
        self.store
            .set_trigger_enabled(&validate_phrase(phrase)?, enabled)
            .await
    }
}

fn validate_phrase(phrase: &str) -> Result<String, AppError> {
    let phrase = normalize_phrase(phrase);

    if phrase.is_empty() {
        return Err(AppError::BadRequest("Trigger phrase cannot be empty".to_string()));
    }
    if phrase.chars().count() > MAX_PHRASE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Trigger phrase cannot be longer than {} characters",
            MAX_PHRASE_LENGTH
        )));
    }

    Ok(phrase)
}

/// First enabled phrase occurring in `content`, ignoring case.
pub fn find_match<'t>(content: &str, triggers: &'t [TriggerKeyword]) -> Option<&'t TriggerKeyword> {
    let content = content.to_lowercase();

    triggers
        .iter()
        .filter(|t| t.enabled)
        .find(|t| content.contains(&t.phrase))
}
