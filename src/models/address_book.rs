//! AddressBook model: the name-keyed collection of records.

use crate::models::Record;
use chrono::{Datelike, Days, Local, NaiveDate};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// How far ahead the weekly birthday report looks.
const BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// All records, keyed by contact name.
///
/// Iteration order is insertion order, and overwriting an existing name
/// keeps its original position. `HashMap` alone does not give either, so
/// the book tracks key order in a side list.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at key = the record's name, silently overwriting any
    /// record already stored under that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            self.order.retain(|key| key != name);
        }
        removed
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Names and `DD.MM` dates of contacts whose birthday falls within the
    /// week starting today, against the local system clock.
    pub fn get_birthdays_per_week(&self) -> Vec<(String, String)> {
        self.upcoming_birthdays(Local::now().date_naive())
    }

    /// The birthday window anchored at an explicit `today`, for callers that
    /// pin the clock (tests, mostly).
    ///
    /// Each birthday's month/day is re-anchored onto `today`'s year; the
    /// birth year itself is ignored. The comparison stays entirely within
    /// the current year: birthdays that would only fall inside the window
    /// after wrapping into January of the next year are not reported.
    /// A Feb 29 birthday has no anchor date in a non-leap year and is
    /// skipped for that year.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<(String, String)> {
        let window_end = today
            .checked_add_days(Days::new(BIRTHDAY_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);

        let mut upcoming = Vec::new();
        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(anchored) = birthday.date().with_year(today.year()) else {
                debug!(
                    name = %record.name(),
                    birthday = %birthday,
                    "no anchor date this year, skipping"
                );
                continue;
            };
            if today <= anchored && anchored <= window_end {
                upcoming.push((
                    record.name().as_str().to_string(),
                    anchored.format("%d.%m").to_string(),
                ));
            }
        }
        upcoming
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}
