//! Process-wide cache of compiled label tables.
//!
//! Mirrors an append-only memo: the map starts empty, each key is written at
//! most once, entries are never evicted, and readers share the compiled
//! table through an `Arc`. Reads vastly outnumber the handful of writes, so
//! a `RwLock` around the map is sufficient.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::names::{
    TextStyle, MONTHS_LONG, MONTHS_NARROW, MONTHS_SHORT, WEEKDAYS_LONG, WEEKDAYS_NARROW,
    WEEKDAYS_SHORT,
};

/// Which calendar component a table labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Component {
    Month,
    Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TableKey {
    component: Component,
    style: TextStyle,
}

/// A compiled, capitalized label table.
#[derive(Debug)]
pub(crate) struct NameTable {
    labels: Vec<String>,
}

impl NameTable {
    fn compile(key: TableKey) -> Self {
        let base: &[&str] = match (key.component, key.style) {
            (Component::Month, TextStyle::Long) => &MONTHS_LONG,
            (Component::Month, TextStyle::Short) => &MONTHS_SHORT,
            (Component::Month, TextStyle::Narrow) => &MONTHS_NARROW,
            (Component::Weekday, TextStyle::Long) => &WEEKDAYS_LONG,
            (Component::Weekday, TextStyle::Short) => &WEEKDAYS_SHORT,
            (Component::Weekday, TextStyle::Narrow) => &WEEKDAYS_NARROW,
        };
        Self {
            labels: base.iter().map(|name| capitalize(name)).collect(),
        }
    }

    pub(crate) fn label(&self, index: usize) -> String {
        self.labels[index].clone()
    }
}

static TABLE_CACHE: Lazy<RwLock<HashMap<TableKey, Arc<NameTable>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the compiled table for the key, building it on first use.
pub(crate) fn cached_table(component: Component, style: TextStyle) -> Arc<NameTable> {
    let key = TableKey { component, style };
    if let Some(table) = TABLE_CACHE.read().expect("label cache poisoned").get(&key) {
        return Arc::clone(table);
    }
    let mut cache = TABLE_CACHE.write().expect("label cache poisoned");
    Arc::clone(
        cache
            .entry(key)
            .or_insert_with(|| Arc::new(NameTable::compile(key))),
    )
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
