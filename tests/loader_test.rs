mod common;

use std::sync::Arc;

use anyhow::Result;
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use tempfile::TempDir;
use vgstats::{load_file, LoadError, LoadOptions};

#[test]
fn test_load_csv() -> Result<()> {
    let dir = TempDir::new()?;
    let path = common::sample_csv(&dir);
    let ds = load_file(&path, &LoadOptions::new())?;

    assert_eq!(ds.len(), common::ROWS.len());
    assert_eq!(ds.column_names.len(), 11);
    assert_eq!(ds.column_names[2], "Platform");
    assert_eq!(ds.records[7].get("Year"), Some("N/A"));
    assert_eq!(ds.records[7].get("Publisher"), Some(""));
    Ok(())
}

#[test]
fn test_load_tsv_and_custom_delimiter() -> Result<()> {
    let dir = TempDir::new()?;
    let tsv = common::write_file(&dir, "sales.tsv", "Platform\tGlobal_Sales\nWii\t82.74\n");
    let ds = load_file(&tsv, &LoadOptions::new())?;
    assert_eq!(ds.records[0].number("Global_Sales"), Some(82.74));

    let semi = common::write_file(&dir, "sales.txt", "Platform;Global_Sales\nNES;40.24\n");
    let ds = load_file(&semi, &LoadOptions::new().with_delimiter(b';'))?;
    assert_eq!(ds.records[0].get("Platform"), Some("NES"));
    Ok(())
}

#[test]
fn test_load_json() -> Result<()> {
    let dir = TempDir::new()?;
    let path = common::write_file(
        &dir,
        "sales.json",
        r#"[{"Platform":"Wii","Year":2006,"Global_Sales":82.74},
            {"Platform":"GB","Year":null,"Global_Sales":31.37}]"#,
    );
    let ds = load_file(&path, &LoadOptions::new())?;
    assert_eq!(ds.column_names, vec!["Platform", "Year", "Global_Sales"]);
    assert_eq!(ds.records[0].number("Year"), Some(2006.0));
    assert_eq!(ds.records[1].get("Year"), Some(""));
    Ok(())
}

#[test]
fn test_load_parquet() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("sales.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("Platform", DataType::Utf8, false),
        Field::new("Year", DataType::Int64, true),
        Field::new("Global_Sales", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(vec!["Wii", "GB"])),
            Arc::new(Int64Array::from(vec![Some(2006), None])),
            Arc::new(Float64Array::from(vec![82.74, 31.37])),
        ],
    )?;
    let file = std::fs::File::create(&path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    let ds = load_file(&path, &LoadOptions::new())?;
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records[0].get("Platform"), Some("Wii"));
    assert_eq!(ds.records[0].get("Year"), Some("2006"));
    assert_eq!(ds.records[1].get("Year"), Some(""));
    assert_eq!(ds.records[1].number("Global_Sales"), Some(31.37));
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_file(
        std::path::Path::new("does/not/exist.csv"),
        &LoadOptions::new(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("exist.csv"));
}

#[test]
fn test_unsupported_extension() {
    let err = load_file(std::path::Path::new("sales.xls"), &LoadOptions::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::UnsupportedExtension(_))
    ));
}
