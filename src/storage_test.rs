use super::*;

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn parse_known_literals() {
    assert_eq!(ThemePreference::parse("enabled"), Some(ThemePreference::Enabled));
    assert_eq!(ThemePreference::parse("disabled"), Some(ThemePreference::Disabled));
}

#[test]
fn parse_unknown_value_is_none() {
    assert_eq!(ThemePreference::parse(""), None);
    assert_eq!(ThemePreference::parse("true"), None);
    assert_eq!(ThemePreference::parse("Enabled"), None);
}

#[test]
fn as_str_matches_stored_literals() {
    assert_eq!(ThemePreference::Enabled.as_str(), "enabled");
    assert_eq!(ThemePreference::Disabled.as_str(), "disabled");
}

#[test]
fn load_absent_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(ThemePreference::load(&store, "darktheme").unwrap(), None);
}

#[test]
fn load_reads_stored_value() {
    let store = MemoryStore::new().with_item("darktheme", "enabled");
    assert_eq!(ThemePreference::load(&store, "darktheme").unwrap(), Some(ThemePreference::Enabled));
}

#[test]
fn save_overwrites_previous_value() {
    let store = MemoryStore::new().with_item("darktheme", "enabled");
    ThemePreference::Disabled.save(&store, "darktheme").unwrap();
    assert_eq!(store.item("darktheme").as_deref(), Some("disabled"));
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::new();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    assert_eq!(store.get("c").unwrap(), None);
}

#[test]
fn shared_store_sees_writes_through_rc() {
    let store = Rc::new(MemoryStore::new());
    let handle = Rc::clone(&store);
    handle.set("darktheme", "enabled").unwrap();
    assert_eq!(store.item("darktheme").as_deref(), Some("enabled"));
}
