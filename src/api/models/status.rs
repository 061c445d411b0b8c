use serde::{Deserialize, Serialize};

/// The `status` block every response carries, on success and on error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub pagesize: Option<u64>,
    #[serde(rename = "responseDateTime", default)]
    pub response_date_time: Option<String>,
    #[serde(rename = "transactionID", default)]
    pub transaction_id: Option<String>,
}

impl Status {
    /// Number of result pages implied by `total` and `pagesize`.
    pub fn page_count(&self) -> Option<u64> {
        match (self.total, self.pagesize) {
            (Some(total), Some(size)) if size > 0 => Some(total.div_ceil(size)),
            _ => None,
        }
    }

    /// Whether another page follows the current one.
    pub fn has_next_page(&self) -> bool {
        match (self.page, self.page_count()) {
            (Some(page), Some(count)) => page < count,
            _ => false,
        }
    }
}
