use crate::error::IngestError;
use core_types::ContentItem;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// One row as it arrives, before any coercion. Every column is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    content_id: Option<String>,
    title: Option<String>,
    publish_date: Option<String>,
    content_type: Option<String>,
    channel: Option<String>,
    category: Option<String>,
    views: Option<String>,
    engagement: Option<String>,
    clicks: Option<String>,
    conversions: Option<String>,
    shares: Option<String>,
    comments: Option<String>,
    word_count: Option<String>,
    time_on_page: Option<String>,
}

impl RawRow {
    /// Missing text becomes `""`, missing or blank numbers become 0.
    fn into_item(self, row: usize) -> Result<ContentItem, IngestError> {
        Ok(ContentItem {
            content_id: text(self.content_id),
            title: text(self.title),
            publish_date: text(self.publish_date),
            content_type: text(self.content_type),
            channel: text(self.channel),
            category: text(self.category),
            views: number(self.views, "views", row)?,
            engagement: number(self.engagement, "engagement", row)?,
            clicks: number(self.clicks, "clicks", row)?,
            conversions: number(self.conversions, "conversions", row)?,
            shares: number(self.shares, "shares", row)?,
            comments: number(self.comments, "comments", row)?,
            word_count: number(self.word_count, "word_count", row)?,
            time_on_page: number(self.time_on_page, "time_on_page", row)?,
        })
    }

    fn from_json(object: &serde_json::Map<String, Value>) -> Self {
        let field = |name: &str| object.get(name).and_then(json_scalar);
        Self {
            content_id: field("content_id"),
            title: field("title"),
            publish_date: field("publish_date"),
            content_type: field("content_type"),
            channel: field("channel"),
            category: field("category"),
            views: field("views"),
            engagement: field("engagement"),
            clicks: field("clicks"),
            conversions: field("conversions"),
            shares: field("shares"),
            comments: field("comments"),
            word_count: field("word_count"),
            time_on_page: field("time_on_page"),
        }
    }
}

fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn number<T>(value: Option<String>, field: &'static str, row: usize) -> Result<T, IngestError>
where
    T: FromStr + Default,
{
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(raw) => raw.parse().map_err(|_| IngestError::InvalidField {
            row,
            field,
            value: raw.to_string(),
        }),
    }
}

fn json_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        // Integral floats (`3000.0`) are written without the fraction so the
        // integer counters accept them.
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 => Some(format!("{f:.0}")),
            _ => Some(n.to_string()),
        },
        other => Some(other.to_string()),
    }
}

/// Parses CSV with a header row. Unknown columns are ignored.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ContentItem>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut items = Vec::new();
    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        items.push(raw.into_item(idx + 1)?);
    }

    tracing::debug!(rows = items.len(), "Parsed content CSV.");
    Ok(items)
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<ContentItem>, IngestError> {
    let path = path.as_ref();
    let items = read_csv(File::open(path)?)?;
    tracing::info!(path = %path.display(), items = items.len(), "Loaded content from CSV.");
    Ok(items)
}

/// Parses a JSON array of row objects. Numbers may be given as JSON numbers
/// or as strings.
pub fn parse_json(input: &str) -> Result<Vec<ContentItem>, IngestError> {
    let value: Value = serde_json::from_str(input)?;
    let rows = value.as_array().ok_or(IngestError::NotAnArray)?;

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let object = row.as_object().ok_or(IngestError::NotAnArray)?;
            RawRow::from_json(object).into_item(idx + 1)
        })
        .collect()
}

pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<ContentItem>, IngestError> {
    let path = path.as_ref();
    let items = parse_json(&std::fs::read_to_string(path)?)?;
    tracing::info!(path = %path.display(), items = items.len(), "Loaded content from JSON.");
    Ok(items)
}

/// Picks the parser from the file extension: `.json` is JSON, anything else CSV.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<ContentItem>, IngestError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json { load_json(path) } else { load_csv(path) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_default() {
        let csv = "content_id,title,views,engagement\n1,Hello,5000,250\n";
        let items = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        let it = &items[0];
        assert_eq!(it.title, "Hello");
        assert_eq!(it.views, 5000);
        assert_eq!(it.engagement, 250);
        assert_eq!(it.clicks, 0);
        assert_eq!(it.category, "");
        assert_eq!(it.content_type, "");
        assert_eq!(it.time_on_page, 0.0);
    }

    #[test]
    fn blank_cells_default_and_whitespace_is_trimmed() {
        let csv = "title,views,time_on_page,category\n  Spaced  , ,95.5,Food\n";
        let items = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(items[0].title, "Spaced");
        assert_eq!(items[0].views, 0);
        assert_eq!(items[0].time_on_page, 95.5);
        assert_eq!(items[0].category, "Food");
    }

    #[test]
    fn unparsable_number_names_row_and_field() {
        let csv = "title,views\nok,10\nbad,lots\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err {
            IngestError::InvalidField { row, field, value } => {
                assert_eq!(row, 2);
                assert_eq!(field, "views");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn json_accepts_numbers_and_strings() {
        let json = r#"[
            {"content_id": "1", "title": "A", "views": 3000, "engagement": "180", "category": "Lifestyle"},
            {"content_id": 2, "title": "B", "clicks": null}
        ]"#;
        let items = parse_json(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].views, 3000);
        assert_eq!(items[0].engagement, 180);
        assert_eq!(items[1].content_id, "2");
        assert_eq!(items[1].clicks, 0);
    }

    #[test]
    fn json_integral_floats_fill_integer_counters() {
        let items = parse_json(r#"[{"views": 3000.0, "clicks": 12, "time_on_page": 95.5}]"#).unwrap();
        assert_eq!(items[0].views, 3000);
        assert_eq!(items[0].clicks, 12);
        assert_eq!(items[0].time_on_page, 95.5);

        let err = parse_json(r#"[{"views": 3000.5}]"#).unwrap_err();
        assert!(matches!(err, IngestError::InvalidField { field: "views", .. }));
    }

    #[test]
    fn json_must_be_an_array_of_objects() {
        assert!(matches!(parse_json(r#"{"title": "A"}"#), Err(IngestError::NotAnArray)));
        assert!(matches!(parse_json("[1, 2]"), Err(IngestError::NotAnArray)));
    }
}
