use std::cell::Cell;

use anyhow::Result;
use sysprops::{
    lib::text::{has_text, is_blank, is_empty, not_blank, not_empty},
    PropertyError, PropertyTable, WellKnownKey,
};

use crate::common::fixture;

#[test]
fn predicates_agree_on_sample_strings() {
    for sample in [None, Some(""), Some("  "), Some(" a "), Some("x")] {
        assert_eq!(is_empty(sample), !not_empty(sample));
        assert_eq!(is_blank(sample), !not_blank(sample));
    }
    assert!(!has_text(""));
    assert!(!has_text("  "));
    assert!(has_text(" a "));
}

#[test]
fn typed_getters_follow_fallback_rules() -> Result<()> {
    let mut table = PropertyTable::new();
    table.set("n", 42)?;
    table.set("b", "tRuE")?;
    table.set("other", "on")?;

    assert_eq!(table.get_or("missing.key", "fallback")?, "fallback");
    assert_eq!(table.get_digit("n", || 7)?, 42);
    assert_eq!(table.get_digit("absent", || 7)?, 7);
    assert!(table.get_boolean("b", || false)?);
    assert!(!table.get_boolean("other", || true)?);

    let calls = Cell::new(0);
    let lazy = table.get_or_else("missing.key", || {
        calls.set(calls.get() + 1);
        "lazy".into()
    })?;
    assert_eq!(lazy, "lazy");
    assert_eq!(calls.get(), 1);

    table.set("n", "abc")?;
    assert!(matches!(
        table.get_digit("n", || 7),
        Err(PropertyError::InvalidDigit { .. })
    ));
    Ok(())
}

#[test]
fn blank_key_fails_on_any_table() {
    let empty = PropertyTable::new();
    let host = PropertyTable::from_host();
    for table in [&empty, &host] {
        assert!(matches!(table.get(""), Err(PropertyError::BlankKey { .. })));
    }
}

#[test]
fn overlay_feeds_catalog_getters() -> Result<()> {
    let mut table = PropertyTable::from_host();
    table.load_overlay(fixture("tests/fixtures/overlay_valid.toml"))?;

    assert_eq!(table.os_name(), Some("Linux"));
    assert_eq!(table.java_version(), Some("21.0.1"));
    assert_eq!(
        table.get_well_known(WellKnownKey::RuntimeVersion),
        table.get(WellKnownKey::RuntimeVersion.as_str())?
    );
    assert!(table.line_separator().is_some());
    Ok(())
}

#[test]
fn bootstrap_applies_explicit_overlay() -> Result<()> {
    let table = PropertyTable::bootstrap(Some(fixture("tests/fixtures/overlay_valid.toml")))?;
    assert_eq!(table.os_version(), Some("6.1.0"));
    assert_eq!(table.get_digit("app.workers", || 1)?, 8);
    Ok(())
}
