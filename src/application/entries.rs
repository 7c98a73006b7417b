//! Entry pagination
//!
//! The service returns entries at or before a `last` timestamp, newest
//! first within the request window, together with a count of entries still
//! remaining. Pages are walked backward until that count drops to zero.

use crate::application::client::TinybeansClient;
use crate::domain::fields::Fields;
use crate::domain::{Child, Entry, JournalRef};
use crate::error::{Result, TinybeansError};
use crate::infrastructure::{ApiRequest, Transport};
use chrono::Utc;
use serde_json::Value;

/// Maximum number of entries requested per page
pub const FETCH_SIZE: u32 = 200;

/// One page of the entries endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct EntriesPage {
    pub entries: Vec<Entry>,
    /// Entries left after this page, as reported by the service
    pub remaining: i64,
}

impl EntriesPage {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new("EntriesResponse", value)?;
        let entries = fields
            .array("entries")?
            .iter()
            .map(Entry::from_json)
            .collect::<Result<Vec<_>>>()?;

        Ok(EntriesPage {
            entries,
            remaining: fields.i64("numEntriesRemaining")?,
        })
    }

    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// The `last` bound for the next page: the timestamp of this page's
    /// first entry
    pub fn next_cursor(&self, journal: JournalRef) -> Result<i64> {
        let first = self.entries.first().ok_or(TinybeansError::EmptyPage {
            journal_id: journal.id,
        })?;
        first
            .timestamp
            .ok_or_else(|| TinybeansError::missing("Entry", "timestamp"))
    }
}

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl<T: Transport> TinybeansClient<T> {
    /// Fetch every entry of a child's journal at or before `last`
    /// (epoch milliseconds, default now).
    pub fn get_entries(&self, child: &Child, last: Option<i64>) -> Result<Vec<Entry>> {
        self.get_journal_entries(child.journal, last)
    }

    /// Fetch every entry of a journal at or before `last`.
    ///
    /// Entries are returned in fetch order: page by page, and in server
    /// order within each page.
    pub fn get_journal_entries(
        &self,
        journal: JournalRef,
        last: Option<i64>,
    ) -> Result<Vec<Entry>> {
        let mut last = last.unwrap_or_else(now_millis);
        let mut entries = Vec::new();

        loop {
            let page = self.get_entries_page(journal, last)?;
            // The loop condition only ever looks at the page just fetched
            let next = if page.has_more() {
                Some(page.next_cursor(journal)?)
            } else {
                None
            };
            entries.extend(page.entries);

            match next {
                Some(cursor) => last = cursor,
                None => break,
            }
        }

        tracing::debug!(journal = %journal, count = entries.len(), "Fetched entries");
        Ok(entries)
    }

    /// Fetch a single page of up to `FETCH_SIZE` entries at or before `last`
    pub fn get_entries_page(&self, journal: JournalRef, last: i64) -> Result<EntriesPage> {
        let request = ApiRequest::get(format!("journals/{}/entries", journal.id))
            .query("clientId", self.client_id())
            .query("fetchSize", FETCH_SIZE)
            .query("last", last);
        let page = EntriesPage::from_json(&self.call(request)?)?;

        tracing::debug!(
            journal = %journal,
            last,
            fetched = page.entries.len(),
            remaining = page.remaining,
            "Fetched entries page"
        );
        Ok(page)
    }
}
