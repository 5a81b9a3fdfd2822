use reword_domain::AnkiConfig;

/// Fill deck-name fields that predate the want/learning split.
///
/// When the learning deck name is missing, the deprecated single `deckName`
/// value wins over the built-in default, then the deprecated field is
/// consumed so it never round-trips again. Returns whether anything changed.
pub fn repair(config: &mut AnkiConfig) -> bool {
    let complete = config.deck_name_want.is_some()
        && config.deck_name_learning.is_some()
        && config.sync_scope.is_some();
    if complete {
        return false;
    }

    let defaults = AnkiConfig::default();
    if config.deck_name_want.is_none() {
        config.deck_name_want = defaults.deck_name_want;
    }
    if config.deck_name_learning.is_none() {
        config.deck_name_learning = config
            .legacy_deck_name
            .take()
            .or(defaults.deck_name_learning);
    }
    if config.sync_scope.is_none() {
        config.sync_scope = defaults.sync_scope;
    }
    true
}
