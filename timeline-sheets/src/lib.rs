//! Spreadsheet `values` JSON to `PostRecord` converter.

use serde_json::Value;
use timeline_core::{PostRecord, TimelineError};
use url::Url;

/// Default base of the spreadsheet-values API.
pub const DEFAULT_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";
/// Default range (sheet name) to read.
pub const DEFAULT_RANGE: &str = "sheet";

const DATE_COLUMN: usize = 1;
const WORK_COLUMN: usize = 2;
const URL_COLUMN: usize = 3;

/// Everything needed to address one sheet range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRequest {
    pub endpoint: String,
    pub sheet_id: String,
    pub range: String,
    pub api_key: String,
}

impl SheetRequest {
    pub fn new(sheet_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            sheet_id: sheet_id.into(),
            range: DEFAULT_RANGE.to_string(),
            api_key: api_key.into(),
        }
    }

    /// `{endpoint}/{sheet_id}/values/{range}?key={api_key}`
    pub fn url(&self) -> Result<Url, TimelineError> {
        if self.sheet_id.trim().is_empty() || self.api_key.trim().is_empty() {
            return Err(TimelineError::MissingData);
        }

        let mut url = Url::parse(&self.endpoint)
            .map_err(|err| TimelineError::Parse(format!("invalid endpoint {}: {err}", self.endpoint)))?;
        url.path_segments_mut()
            .map_err(|()| {
                TimelineError::Parse(format!("endpoint cannot carry a path: {}", self.endpoint))
            })?
            .pop_if_empty()
            .extend([self.sheet_id.as_str(), "values", self.range.as_str()]);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

/// Convert a raw response body.
pub fn parse_values_str(body: &str) -> Result<Vec<PostRecord>, TimelineError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| TimelineError::Parse(err.to_string()))?;
    parse_values_value(&value)
}

/// Convert a decoded response body.
///
/// An `error` object wins over everything else. The first row of `values` is
/// the header and is dropped; ids are the row index after the header.
pub fn parse_values_value(body: &Value) -> Result<Vec<PostRecord>, TimelineError> {
    if let Some(error) = body.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(TimelineError::Upstream(message));
    }

    let rows = body
        .get("values")
        .ok_or(TimelineError::MissingData)?
        .as_array()
        .ok_or_else(|| TimelineError::Parse("`values` is not an array".to_string()))?;

    let mut records = Vec::with_capacity(rows.len().saturating_sub(1));
    for (index, row) in rows.iter().skip(1).enumerate() {
        let Some(cells) = row.as_array() else {
            tracing::warn!(row = index, "skipping non-array row");
            continue;
        };
        if let Some(record) = row_to_record(index, cells) {
            records.push(record);
        }
    }

    Ok(records)
}

fn row_to_record(index: usize, cells: &[Value]) -> Option<PostRecord> {
    let id = u32::try_from(index).ok()?;
    let date = cell_text(cells, DATE_COLUMN);
    let url = cell_text(cells, URL_COLUMN);

    let (Some(date), Some(url)) = (date, url) else {
        tracing::warn!(row = index, "skipping row without date or url");
        return None;
    };

    let record = PostRecord {
        id,
        date,
        work: cell_text(cells, WORK_COLUMN).unwrap_or_default(),
        url,
    };

    if record.calendar_date().is_none() {
        tracing::warn!(row = index, date = %record.date, "date is not YYYY-MM-DD");
    }

    Some(record)
}

fn cell_text(cells: &[Value], column: usize) -> Option<String> {
    let text = match cells.get(column)? {
        Value::String(text) => text.trim().to_string(),
        Value::Null => return None,
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}
