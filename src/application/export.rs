//! Export job requests

use crate::application::client::TinybeansClient;
use crate::domain::fields::Fields;
use crate::domain::{Journal, JournalRef};
use crate::error::Result;
use crate::infrastructure::{ApiRequest, Transport};
use chrono::NaiveDate;

/// Date format of the export range parameters
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

impl<T: Transport> TinybeansClient<T> {
    /// Ask the service to package a journal's entries between two dates.
    ///
    /// Returns `true` when the service answers with status "ok" and `false`
    /// for any other status. Only transport and decoding failures are errors.
    pub fn request_export(
        &self,
        journal: &Journal,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool> {
        self.request_journal_export(journal.reference(), start, end)
    }

    /// Same as `request_export`, addressed by journal reference
    pub fn request_journal_export(
        &self,
        journal: JournalRef,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool> {
        let request = ApiRequest::post(format!("journals/{}/export", journal.id))
            .query("startDate", start.format(EXPORT_DATE_FORMAT))
            .query("endDate", end.format(EXPORT_DATE_FORMAT));
        let body = self.call(request)?;

        let status = Fields::new("ExportResponse", &body)?.value("status")?;
        let accepted = status.as_str() == Some("ok");

        tracing::info!(journal = %journal, %status, accepted, "Requested export");
        Ok(accepted)
    }
}
