use serde::Deserialize;
use std::io::Read;

/// One `key,value` override line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OverrideRow {
    pub(crate) key: String,
    pub(crate) value: f64,
}

pub(crate) fn parse_overrides<R: Read>(reader: R) -> Result<Vec<OverrideRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<TableRow>() {
        let row = record?;
        rows.push(OverrideRow {
            key: normalize_key(&row.key),
            value: row.value,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct TableRow {
    key: String,
    value: f64,
}

fn normalize_key(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_ascii_lowercase()
}
