use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, RawTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a product table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – comma-separated, header row (the dashboard's native input)
/// * `.json`    – `[{ "product_name": ..., "retail_price": ..., ... }, ...]`
/// * `.parquet` – flat columns of strings, integers, floats or booleans
pub fn load_file(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    log::debug!(
        "Read {} rows x {} columns from {}",
        table.rows.len(),
        table.column_names.len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one product per record.
/// Each column gets one type inferred from all of its cells; ragged rows
/// are padded with nulls.
fn load_csv(path: &Path) -> Result<RawTable> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<RawTable> {
    let column_names: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut text_rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        text_rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(RawTable::from_text(column_names, text_rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`).
/// Columns are ordered by first appearance; keys missing from a record
/// read as null.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<RawTable> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !column_names.contains(key) {
                column_names.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(|rec| rec.as_object())
        .map(|obj| {
            column_names
                .iter()
                .map(|col| obj.get(col).map(json_to_cell).unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    Ok(RawTable { column_names, rows })
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file holding the product table.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`). Nested columns are kept as their
/// type name so the schema check still sees them.
fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let columns = batch.columns();

        for row in 0..batch.num_rows() {
            let cells = columns
                .iter()
                .map(|col| extract_cell(col, row))
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("Row {row}"))?;
            rows.push(cells);
        }
    }

    Ok(RawTable { column_names, rows })
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> Result<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let value = match col.data_type() {
        DataType::Utf8 => CellValue::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            CellValue::Integer(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            CellValue::Integer(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            CellValue::Float(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            CellValue::Float(arr.value(row))
        }
        DataType::Boolean => {
            let arr = col
                .as_any()
                .downcast_ref::<BooleanArray>()
                .context("expected BooleanArray")?;
            CellValue::Bool(arr.value(row))
        }
        other => CellValue::String(format!("{other:?}")),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_keeps_column_order_and_infers_column_types() {
        let data = "product_name,retail_price,product_rating\n\
                    Shirt,999,No rating available\n\
                    Mug,250,4.5\n";
        let table = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();

        assert_eq!(
            table.column_names,
            vec!["product_name", "retail_price", "product_rating"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], CellValue::Integer(999));
        assert_eq!(
            table.rows[0][2],
            CellValue::String("No rating available".into())
        );
        assert_eq!(table.rows[1][2], CellValue::String("4.5".into()));
        assert_eq!(table.rows[1][2].to_numeric(), Some(4.5));
    }

    #[test]
    fn csv_text_columns_are_not_reformatted() {
        let data = "uniq_id,product_name,retail_price\n\
                    0042,007,1.50\n\
                    9f3a,Kurta,2\n";
        let table = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        assert_eq!(table.rows[0][0], CellValue::String("0042".into()));
        assert_eq!(table.rows[0][1], CellValue::String("007".into()));
        assert_eq!(table.rows[0][2], CellValue::Float(1.5));
        assert_eq!(table.rows[1][2], CellValue::Float(2.0));
    }

    #[test]
    fn csv_missing_tokens_are_null() {
        let data = "product_category_tree,product_name\nN/A,Kurta\nClothing,NA\n";
        let table = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        assert_eq!(table.rows[0][0], CellValue::Null);
        assert_eq!(table.rows[1][1], CellValue::Null);
        assert_eq!(table.rows[1][0], CellValue::String("Clothing".into()));
    }

    #[test]
    fn csv_quoted_category_paths_survive() {
        let data = "product_category_tree,product_name\n\
                    \"[\"\"Clothing >> Women's Clothing\"\"]\",Kurta\n";
        let table = read_csv(csv::Reader::from_reader(data.as_bytes())).unwrap();
        assert_eq!(
            table.rows[0][0],
            CellValue::String("[\"Clothing >> Women's Clothing\"]".into())
        );
    }

    #[test]
    fn csv_short_rows_are_padded_with_nulls() {
        let data = "a,b,c\n1,2\n";
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_bytes());
        let table = read_csv(reader).unwrap();
        assert_eq!(table.rows[0][2], CellValue::Null);
    }

    #[test]
    fn json_records_fill_missing_keys_with_null() {
        let table = parse_json(r#"[{"a": 1, "b": "x"}, {"a": 2.5}]"#).unwrap();
        assert_eq!(table.column_names, vec!["a", "b"]);
        assert_eq!(table.rows[0][0], CellValue::Integer(1));
        assert_eq!(table.rows[1][0], CellValue::Float(2.5));
        assert_eq!(table.rows[1][1], CellValue::Null);
    }

    #[test]
    fn json_must_be_an_array() {
        assert!(parse_json(r#"{"a": 1}"#).is_err());
    }

    fn write_parquet(path: &Path) {
        use arrow::array::{ArrayRef, StringArray};
        use arrow::datatypes::{Field, Schema};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(Schema::new(vec![
            Field::new("product_category_tree", DataType::Utf8, true),
            Field::new("product_name", DataType::Utf8, true),
            Field::new("retail_price", DataType::Int64, true),
            Field::new("product_rating", DataType::Float64, true),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(vec![Some("['Clothing >> Women']"), None])),
            Arc::new(StringArray::from(vec![Some("007"), Some("Mug")])),
            Arc::new(Int64Array::from(vec![Some(999), None])),
            Arc::new(Float64Array::from(vec![None, Some(4.5)])),
        ];
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

        let file = std::fs::File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn parquet_columns_and_nulls_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.parquet");
        write_parquet(&path);

        let table = load_file(&path).unwrap();
        assert_eq!(
            table.column_names,
            vec![
                "product_category_tree",
                "product_name",
                "retail_price",
                "product_rating"
            ]
        );
        assert_eq!(
            table.rows[0],
            vec![
                CellValue::String("['Clothing >> Women']".into()),
                CellValue::String("007".into()),
                CellValue::Integer(999),
                CellValue::Null,
            ]
        );
        assert_eq!(
            table.rows[1],
            vec![
                CellValue::Null,
                CellValue::String("Mug".into()),
                CellValue::Null,
                CellValue::Float(4.5),
            ]
        );
    }

    #[test]
    fn parquet_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.PQ");
        write_parquet(&path);
        assert_eq!(load_file(&path).unwrap().rows.len(), 2);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("products.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn missing_csv_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("absent.csv")).is_err());
    }
}
