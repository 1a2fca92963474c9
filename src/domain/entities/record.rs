use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked domain. Field names on disk follow the camelCase layout of the
/// persisted JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub id: RecordId,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, deserialize_with = "lenient_buy_price")]
    pub buy_price: f64,
    #[serde(default)]
    pub bought_date: String,
    #[serde(default)]
    pub for_sale: bool,
    #[serde(default, deserialize_with = "lenient_selling_price")]
    pub selling_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub sold_date: Option<String>,
}

/// Everything a record carries except its identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordFields {
    pub item: String,
    pub provider: String,
    pub buy_price: f64,
    pub bought_date: String,
    pub for_sale: bool,
    pub selling_price: Option<f64>,
    pub sold_date: Option<String>,
}

/// Header-keyed cell text from one row of an imported sheet.
pub type RawRow = BTreeMap<String, String>;

pub const HEADER_ITEM: &str = "Item";
pub const HEADER_PROVIDER: &str = "Provider";
pub const HEADER_BUY_PRICE: &str = "Buy Price";
pub const HEADER_BOUGHT_DATE: &str = "Bought Date";
pub const HEADER_FOR_SALE: &str = "For sale";
pub const HEADER_SELLING_PRICE: &str = "Selling Price";
pub const HEADER_SOLD_DATE: &str = "Sold Date";

impl DomainRecord {
    pub fn new(fields: RecordFields) -> Self {
        Self::with_id(RecordId::generate(), fields)
    }

    pub fn with_id(id: RecordId, fields: RecordFields) -> Self {
        let RecordFields {
            item,
            provider,
            buy_price,
            bought_date,
            for_sale,
            selling_price,
            sold_date,
        } = fields;
        Self {
            id,
            item,
            provider,
            buy_price: sanitize_buy_price(buy_price),
            bought_date,
            for_sale,
            selling_price: selling_price.filter(|value| value.is_finite()),
            sold_date,
        }
    }

    /// Replaces every field but `id`.
    pub fn apply(&mut self, fields: RecordFields) {
        *self = Self::with_id(self.id, fields);
    }

    /// Maps one imported row into a typed record with a fresh id. Missing or
    /// unparseable cells fall back to defaults instead of failing the row. A
    /// zero selling price in a sheet means "not priced yet".
    pub fn from_raw_row(row: &RawRow) -> Self {
        Self::new(RecordFields {
            item: cell_text(row, HEADER_ITEM).to_string(),
            provider: cell_text(row, HEADER_PROVIDER).to_string(),
            buy_price: parse_buy_price(cell_text(row, HEADER_BUY_PRICE)),
            bought_date: cell_text(row, HEADER_BOUGHT_DATE).to_string(),
            for_sale: cell_text(row, HEADER_FOR_SALE).to_lowercase() == "yes",
            selling_price: present_cell(row, HEADER_SELLING_PRICE)
                .and_then(parse_price)
                .filter(|price| *price != 0.0),
            sold_date: present_cell(row, HEADER_SOLD_DATE).map(str::to_string),
        })
    }
}

fn cell_text<'a>(row: &'a RawRow, header: &str) -> &'a str {
    row.get(header).map(|value| value.trim()).unwrap_or("")
}

fn present_cell<'a>(row: &'a RawRow, header: &str) -> Option<&'a str> {
    Some(cell_text(row, header)).filter(|value| !value.is_empty())
}

/// Parses a price typed by a person or read from a sheet. Tolerates
/// surrounding whitespace, thousands separators and a leading `$`.
pub fn parse_price(value: &str) -> Option<f64> {
    let cleaned = value.trim().replace(',', "");
    let cleaned = cleaned.strip_prefix('$').unwrap_or(&cleaned).trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

pub fn parse_buy_price(value: &str) -> f64 {
    parse_price(value).map(sanitize_buy_price).unwrap_or(0.0)
}

pub fn parse_selling_price(value: &str) -> Option<f64> {
    parse_price(value)
}

fn sanitize_buy_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl LooseNumber {
    fn into_price(self) -> Option<f64> {
        match self {
            LooseNumber::Number(value) => Some(value).filter(|v| v.is_finite()),
            LooseNumber::Text(text) => parse_price(&text),
            LooseNumber::Other(_) => None,
        }
    }
}

fn lenient_buy_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value
        .and_then(LooseNumber::into_price)
        .map(sanitize_buy_price)
        .unwrap_or(0.0))
}

fn lenient_selling_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value.and_then(LooseNumber::into_price))
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}
