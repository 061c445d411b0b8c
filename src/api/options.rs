//! Query parameter assembly.
//!
//! Endpoint calls take a slice of [`QueryOption`] values. Each option is a
//! small closure that writes zero or more entries into a fresh [`Params`];
//! options are applied left to right, so a later option overwrites an
//! earlier one with the same key.
//!
//! ```rust,ignore
//! use attom_client::api::options;
//!
//! let opts = [
//!     options::postal_code("82009"),
//!     options::beds(3, 0),
//!     options::property_types(&["SFR", "CONDO"]),
//!     options::page_size(50),
//! ];
//! let response = client.sale_snapshot(&opts).await?;
//! ```

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Delimiter used to join multi-value filters when none is supplied.
pub const DEFAULT_DELIMITER: &str = "|";

/// The query parameters of a single request.
///
/// Keys are case sensitive (`apn` and `APN` are different parameters) and
/// iterate in sorted order. Blank keys and blank values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, Vec<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the options, in order, over an empty parameter set.
    pub fn from_options(opts: &[QueryOption]) -> Self {
        let mut params = Params::new();
        for opt in opts {
            opt.apply(&mut params);
        }
        params
    }

    /// Replace every value of `key` with `value`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if key.is_empty() || value.is_empty() {
            return;
        }
        self.values.insert(key.to_string(), vec![value]);
    }

    /// Add `value` after any existing values of `key`.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if key.is_empty() || value.is_empty() {
            return;
        }
        self.values.entry(key.to_string()).or_default().push(value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flatten into `(key, value)` pairs, one per value, for the query string.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.clone(), v.clone())))
            .collect()
    }
}

type ApplyFn = dyn Fn(&mut Params) + Send + Sync;

/// A reusable query parameter builder.
#[derive(Clone)]
pub struct QueryOption(Arc<ApplyFn>);

impl QueryOption {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&mut Params) + Send + Sync + 'static,
    {
        QueryOption(Arc::new(apply))
    }

    /// An option that writes nothing.
    pub fn noop() -> Self {
        QueryOption::new(|_| {})
    }

    pub fn apply(&self, params: &mut Params) {
        (self.0)(params)
    }
}

impl fmt::Debug for QueryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QueryOption")
    }
}

/// An absent option is skipped.
impl From<Option<QueryOption>> for QueryOption {
    fn from(opt: Option<QueryOption>) -> Self {
        opt.unwrap_or_else(QueryOption::noop)
    }
}

/// Layout of rendered dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `YYYY/MM/DD`
    Slash,
    /// `YYYY-MM-DD`
    Dash,
}

impl DateLayout {
    fn format(self, date: NaiveDate) -> String {
        match self {
            DateLayout::Slash => date.format("%Y/%m/%d").to_string(),
            DateLayout::Dash => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Render a number in minimal decimal form (`3`, `2.5`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Generic constructors
// ---------------------------------------------------------------------------

/// A single key/value pair. No-op when either side is empty.
pub fn param(key: &str, value: impl Into<String>) -> QueryOption {
    let key = key.to_string();
    let value = value.into();
    QueryOption::new(move |params| params.set(&key, value.clone()))
}

/// Join `values` under one key with `delimiter` (`|` when `None` or empty).
/// No-op for an empty list.
pub fn joined<S: AsRef<str>>(key: &str, values: &[S], delimiter: Option<&str>) -> QueryOption {
    let key = key.to_string();
    let delimiter = delimiter
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DELIMITER);
    let values: Vec<&str> = values
        .iter()
        .map(AsRef::as_ref)
        .filter(|v| !v.is_empty())
        .collect();
    let value = values.join(delimiter);
    QueryOption::new(move |params| params.set(&key, value.clone()))
}

/// `min<Name>` / `max<Name>`, each written only when positive.
pub fn range(name: &str, min: f64, max: f64) -> QueryOption {
    let suffix = capitalize(name);
    let min_key = format!("min{}", suffix);
    let max_key = format!("max{}", suffix);
    QueryOption::new(move |params| {
        if min > 0.0 {
            params.set(&min_key, format_number(min));
        }
        if max > 0.0 {
            params.set(&max_key, format_number(max));
        }
    })
}

/// `latitude` and `longitude`, always both.
pub fn coordinates(latitude: f64, longitude: f64) -> QueryOption {
    QueryOption::new(move |params| {
        params.set("latitude", format_number(latitude));
        params.set("longitude", format_number(longitude));
    })
}

/// `start<Prefix>` / `end<Prefix>`, each written only when its date is set.
pub fn date_range(
    prefix: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    layout: DateLayout,
) -> QueryOption {
    let suffix = capitalize(prefix);
    let start_key = format!("start{}", suffix);
    let end_key = format!("end{}", suffix);
    QueryOption::new(move |params| {
        if let Some(start) = start {
            params.set(&start_key, layout.format(start));
        }
        if let Some(end) = end {
            params.set(&end_key, layout.format(end));
        }
    })
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

pub fn attom_id(id: u64) -> QueryOption {
    param("attomid", id.to_string())
}

/// The legacy property `id`.
pub fn property_id(id: u64) -> QueryOption {
    param("id", id.to_string())
}

/// A one-line address, e.g. `"4529 Winona Court, Denver, CO"`.
pub fn address(address: &str) -> QueryOption {
    param("address", address)
}

/// Street line of a two-part address.
pub fn address1(line: &str) -> QueryOption {
    param("address1", line)
}

/// City/state/zip line of a two-part address.
pub fn address2(line: &str) -> QueryOption {
    param("address2", line)
}

pub fn postal_code(code: &str) -> QueryOption {
    param("postalcode", code)
}

/// County FIPS code and assessor's parcel number. Writes nothing unless
/// both are non-empty.
pub fn fips_apn(fips: &str, apn: &str) -> QueryOption {
    if fips.is_empty() || apn.is_empty() {
        return QueryOption::noop();
    }
    let fips = fips.to_string();
    let apn = apn.to_string();
    QueryOption::new(move |params| {
        params.set("fips", fips.clone());
        params.set("APN", apn.clone());
    })
}

pub fn geo_id(id: &str) -> QueryOption {
    param("geoid", id)
}

pub fn geo_id_v4(id: &str) -> QueryOption {
    param("geoIdV4", id)
}

pub fn school_id(id: &str) -> QueryOption {
    param("schoolId", id)
}

pub fn state_id(id: &str) -> QueryOption {
    param("stateId", id)
}

// ---------------------------------------------------------------------------
// Geography
// ---------------------------------------------------------------------------

/// Search radius in miles.
pub fn radius(miles: f64) -> QueryOption {
    if miles <= 0.0 {
        return QueryOption::noop();
    }
    param("radius", format_number(miles))
}

/// Geography type abbreviation for location lookups (`ZI`, `CO`, `N2`, ...).
pub fn geography_type(abbreviation: &str) -> QueryOption {
    param("geographyTypeAbbreviation", abbreviation)
}

/// Point-of-interest categories, `|`-joined.
pub fn categories<S: AsRef<str>>(names: &[S]) -> QueryOption {
    joined("categoryName", names, None)
}

// ---------------------------------------------------------------------------
// Paging and ordering
// ---------------------------------------------------------------------------

pub fn page(page: u32) -> QueryOption {
    if page == 0 {
        return QueryOption::noop();
    }
    param("page", page.to_string())
}

pub fn page_size(size: u32) -> QueryOption {
    if size == 0 {
        return QueryOption::noop();
    }
    param("pagesize", size.to_string())
}

/// Sort expression, e.g. `"salesearchdate desc"`.
pub fn order_by(expression: &str) -> QueryOption {
    param("orderby", expression)
}

// ---------------------------------------------------------------------------
// Property filters
// ---------------------------------------------------------------------------

pub fn property_type(kind: &str) -> QueryOption {
    param("propertytype", kind)
}

pub fn property_types<S: AsRef<str>>(kinds: &[S]) -> QueryOption {
    joined("propertytype", kinds, None)
}

pub fn property_indicator(indicator: u32) -> QueryOption {
    param("propertyIndicator", indicator.to_string())
}

pub fn beds(min: u32, max: u32) -> QueryOption {
    range("beds", f64::from(min), f64::from(max))
}

pub fn baths_total(min: f64, max: f64) -> QueryOption {
    range("bathsTotal", min, max)
}

pub fn sale_amount(min: f64, max: f64) -> QueryOption {
    range("saleAmt", min, max)
}

pub fn lot_size_acres(min: f64, max: f64) -> QueryOption {
    range("lotSize1", min, max)
}

pub fn lot_size_sqft(min: f64, max: f64) -> QueryOption {
    range("lotSize2", min, max)
}

pub fn year_built(min: u32, max: u32) -> QueryOption {
    range("yearBuilt", f64::from(min), f64::from(max))
}

pub fn universal_size(min: f64, max: f64) -> QueryOption {
    range("universalSize", min, max)
}

pub fn avm_value(min: f64, max: f64) -> QueryOption {
    range("AVMValue", min, max)
}

pub fn assessed_value(min: f64, max: f64) -> QueryOption {
    range("assdTtlValue", min, max)
}

pub fn market_value(min: f64, max: f64) -> QueryOption {
    range("mktTtlValue", min, max)
}

pub fn tax_amount(min: f64, max: f64) -> QueryOption {
    range("taxAmt", min, max)
}

// ---------------------------------------------------------------------------
// Dates and trends
// ---------------------------------------------------------------------------

pub fn sale_search_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> QueryOption {
    date_range("saleSearchDate", start, end, DateLayout::Slash)
}

pub fn sale_transfer_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> QueryOption {
    date_range("saleTransDate", start, end, DateLayout::Slash)
}

/// Event calendar window used by the all-events endpoints.
pub fn calendar_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> QueryOption {
    date_range("calendarDate", start, end, DateLayout::Dash)
}

/// Trend interval: `yearly`, `quarterly` or `monthly`.
pub fn interval(interval: &str) -> QueryOption {
    param("interval", interval)
}

pub fn start_year(year: u32) -> QueryOption {
    if year == 0 {
        return QueryOption::noop();
    }
    param("startyear", year.to_string())
}

pub fn end_year(year: u32) -> QueryOption {
    if year == 0 {
        return QueryOption::noop();
    }
    param("endyear", year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_key_or_value_is_noop() {
        let params = Params::from_options(&[param("", "x"), param("x", ""), param("", "")]);
        assert!(params.is_empty());

        let params = Params::from_options(&[address(""), postal_code(""), order_by("")]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_absent_option_is_skipped() {
        let params = Params::from_options(&[
            Option::<QueryOption>::None.into(),
            attom_id(100),
            Option::<QueryOption>::None.into(),
        ]);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("attomid"), Some("100"));
    }

    #[test]
    fn test_last_write_wins() {
        let params = Params::from_options(&[attom_id(1), attom_id(2)]);
        assert_eq!(params.get("attomid"), Some("2"));
        assert_eq!(params.get_all("attomid").len(), 1);
    }

    #[test]
    fn test_order_independent_without_collisions() {
        let forward = Params::from_options(&[postal_code("82009"), page(2), beds(3, 5)]);
        let backward = Params::from_options(&[beds(3, 5), page(2), postal_code("82009")]);
        assert_eq!(forward, backward);
        assert_eq!(forward.to_pairs(), backward.to_pairs());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let params = Params::from_options(&[param("apn", "1"), param("APN", "2")]);
        assert_eq!(params.get("apn"), Some("1"));
        assert_eq!(params.get("APN"), Some("2"));
    }

    #[test]
    fn test_joined_uses_default_delimiter() {
        let params = Params::from_options(&[property_types(&["SFR", "CONDO"])]);
        assert_eq!(params.get("propertytype"), Some("SFR|CONDO"));

        let params = Params::from_options(&[joined("k", &["a", "b"], Some(""))]);
        assert_eq!(params.get("k"), Some("a|b"));
    }

    #[test]
    fn test_joined_custom_delimiter_and_empty_list() {
        let params = Params::from_options(&[joined("k", &["a", "b", "c"], Some(","))]);
        assert_eq!(params.get("k"), Some("a,b,c"));

        let empty: [&str; 0] = [];
        let params = Params::from_options(&[joined("k", &empty, None)]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_range_emits_positive_bounds_only() {
        let params = Params::from_options(&[beds(3, 0)]);
        assert_eq!(params.get("minBeds"), Some("3"));
        assert!(!params.contains("maxBeds"));

        let params = Params::from_options(&[sale_amount(0.0, 250000.0)]);
        assert!(!params.contains("minSaleAmt"));
        assert_eq!(params.get("maxSaleAmt"), Some("250000"));

        let params = Params::from_options(&[baths_total(-1.0, 0.0)]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_range_minimal_decimal_form() {
        let params = Params::from_options(&[baths_total(1.5, 3.0), lot_size_acres(0.25, 0.0)]);
        assert_eq!(params.get("minBathsTotal"), Some("1.5"));
        assert_eq!(params.get("maxBathsTotal"), Some("3"));
        assert_eq!(params.get("minLotSize1"), Some("0.25"));
    }

    #[test]
    fn test_coordinates_always_emit_both() {
        let params = Params::from_options(&[coordinates(0.0, -104.99)]);
        assert_eq!(params.get("latitude"), Some("0"));
        assert_eq!(params.get("longitude"), Some("-104.99"));
    }

    #[test]
    fn test_date_range_layouts() {
        let params = Params::from_options(&[sale_search_dates(
            Some(date(2023, 1, 5)),
            Some(date(2023, 12, 31)),
        )]);
        assert_eq!(params.get("startSaleSearchDate"), Some("2023/01/05"));
        assert_eq!(params.get("endSaleSearchDate"), Some("2023/12/31"));

        let params = Params::from_options(&[calendar_dates(None, Some(date(2024, 2, 29)))]);
        assert!(!params.contains("startCalendarDate"));
        assert_eq!(params.get("endCalendarDate"), Some("2024-02-29"));

        let params = Params::from_options(&[calendar_dates(None, None)]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_fips_apn_writes_uppercase_apn() {
        let params = Params::from_options(&[fips_apn("06037", "4306-028-024")]);
        assert_eq!(params.get("fips"), Some("06037"));
        assert_eq!(params.get("APN"), Some("4306-028-024"));
        assert!(!params.contains("apn"));

        let params = Params::from_options(&[fips_apn("06037", "")]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_zero_paging_is_noop() {
        let params = Params::from_options(&[page(0), page_size(0), radius(0.0), start_year(0)]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_append_keeps_every_value() {
        let mut params = Params::new();
        params.append("categoryName", "SHOPPING");
        params.append("categoryName", "EATING - DRINKING");
        params.append("categoryName", "");
        assert_eq!(params.get_all("categoryName").len(), 2);
        assert_eq!(
            params.to_pairs(),
            vec![
                ("categoryName".to_string(), "SHOPPING".to_string()),
                ("categoryName".to_string(), "EATING - DRINKING".to_string()),
            ]
        );
    }

    #[test]
    fn test_options_are_reusable() {
        let shared = postal_code("80212");
        let first = Params::from_options(std::slice::from_ref(&shared));
        let second = Params::from_options(&[shared]);
        assert_eq!(first, second);
    }
}
