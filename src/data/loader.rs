use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use indexmap::IndexMap;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, Record};

/// Domain failures of the loader; I/O and parser errors travel as context.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("expected a top-level JSON array of records")]
    NotAnArray,
    #[error("row {0} is not a JSON object")]
    NotAnObject(usize),
}

/// Options for reading delimited text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter; defaults to `,` (or tab for `.tsv`).
    pub delimiter: Option<u8>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – header row, comma separated
/// * `.tsv`          – header row, tab separated
/// * `.json`         – `[{ "Platform": "Wii", "Global_Sales": 82.74, ... }, ...]`
/// * `.parquet`      – any flat schema; every column is read as text
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" | "txt" => load_csv(path, options.delimiter.unwrap_or(b',')),
        "tsv" => load_csv(path, options.delimiter.unwrap_or(b'\t')),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => return Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} records with columns {:?}",
        dataset.len(),
        dataset.column_names
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Every row gets every header column: rows shorter than the header fill
/// the rest with empty cells, extra trailing fields are ignored.
fn load_csv(path: &Path, delimiter: u8) -> Result<Dataset> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .context("opening delimited file")?;
    read_delimited(reader)
}

fn read_delimited<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Dataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("row {row_no}"))?;
        let cells: IndexMap<String, String> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), row.get(i).unwrap_or_default().to_string()))
            .collect();
        records.push(Record::new(cells));
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`). Numbers and
/// booleans are kept as their text form, `null` becomes an empty cell.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().ok_or(LoadError::NotAnArray)?;

    let mut records: Vec<Record> = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or(LoadError::NotAnObject(i))?;
        records.push(obj.iter().map(|(k, v)| (k.clone(), json_cell(v))).collect());
    }

    Ok(Dataset::from_records(records))
}

fn json_cell(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file, turning every column into text cells.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let names: Vec<String> = schema.fields().iter().map(|f| f.name().clone()).collect();

        for row in 0..batch.num_rows() {
            let mut cells = IndexMap::with_capacity(names.len());
            for (col_idx, name) in names.iter().enumerate() {
                let value = arrow_cell(batch.column(col_idx), row)
                    .with_context(|| format!("row {row}, column '{name}'"))?;
                cells.insert(name.clone(), value);
            }
            records.push(Record::new(cells));
        }
    }

    Ok(Dataset::from_records(records))
}

/// Text form of a single Arrow cell; null is the empty string.
fn arrow_cell(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    let text = match col.data_type() {
        DataType::Utf8 => downcast::<StringArray>(col)?.value(row).to_string(),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        DataType::Int32 => downcast::<Int32Array>(col)?.value(row).to_string(),
        DataType::Int64 => downcast::<Int64Array>(col)?.value(row).to_string(),
        DataType::Float32 => downcast::<Float32Array>(col)?.value(row).to_string(),
        DataType::Float64 => downcast::<Float64Array>(col)?.value(row).to_string(),
        DataType::Boolean => downcast::<BooleanArray>(col)?.value(row).to_string(),
        _ => arrow::util::display::array_value_to_string(col.as_ref(), row)
            .context("formatting arrow value")?,
    };
    Ok(text)
}

fn downcast<T: Array + 'static>(col: &Arc<dyn Array>) -> Result<&T> {
    match col.as_any().downcast_ref::<T>() {
        Some(arr) => Ok(arr),
        None => bail!("column does not match its declared type {:?}", col.data_type()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes())
    }

    #[test]
    fn reads_header_and_rows() {
        let ds = read_delimited(reader(
            "Platform,Year,Global_Sales\nWii,2006,82.74\nNES,1985,40.24\n",
        ))
        .unwrap();
        assert_eq!(ds.column_names, vec!["Platform", "Year", "Global_Sales"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].get("Platform"), Some("NES"));
    }

    #[test]
    fn short_rows_fill_empty_cells() {
        let ds = read_delimited(reader("a,b,c\n1,2\n4,5,6,7\n")).unwrap();
        assert_eq!(ds.records[0].get("b"), Some("2"));
        assert_eq!(ds.records[0].get("c"), Some(""));
        assert_eq!(ds.records[1].columns().count(), 3);
    }

    #[test]
    fn short_first_row_keeps_header_schema() {
        let ds = read_delimited(reader(
            "Platform,Genre,Global_Sales\nWii,Sports\nNES,Platform,40.24\n",
        ))
        .unwrap();
        assert_eq!(ds.column_names, vec!["Platform", "Genre", "Global_Sales"]);
        assert!(ds.has_column("Global_Sales"));
        assert_eq!(ds.records[1].number("Global_Sales"), Some(40.24));
    }

    #[test]
    fn json_cells_are_stringified() {
        let ds = parse_json(
            r#"[{"Platform":"Wii","Year":2006,"Global_Sales":82.74,"Publisher":null}]"#,
        )
        .unwrap();
        let rec = &ds.records[0];
        assert_eq!(rec.get("Year"), Some("2006"));
        assert_eq!(rec.number("Global_Sales"), Some(82.74));
        assert_eq!(rec.get("Publisher"), Some(""));
    }

    #[test]
    fn json_must_be_array_of_objects() {
        let err = parse_json(r#"{"Platform":"Wii"}"#).unwrap_err();
        assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::NotAnArray)));

        let err = parse_json(r#"[{"a":1}, 3]"#).unwrap_err();
        assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::NotAnObject(1))));
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_file(Path::new("sales.xlsx"), &LoadOptions::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
    }
}
