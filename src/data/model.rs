use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a CSV reader would infer.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{}", format_number(*v)),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Coerce the cell to a number. Anything that does not parse, including
    /// a literal NaN, counts as missing.
    pub fn to_numeric(&self) -> Option<f64> {
        let v = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            CellValue::String(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Bool(_) | CellValue::Null => return None,
        };
        (!v.is_nan()).then_some(v)
    }

    /// Text content of the cell, `None` for nulls.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

}

/// Text a CSV reader treats as a missing value, whatever the column type.
pub const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(s: &str) -> bool {
    MISSING_TOKENS.contains(&s)
}

// ---------------------------------------------------------------------------
// ColumnKind – one inferred type per text column
// ---------------------------------------------------------------------------

/// The type of a text column, decided after scanning all of its cells.
///
/// A column is numeric only if every non-missing cell parses, so a text
/// column keeps values like `007` or `1.50` exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    /// Narrowest kind that fits every non-missing cell. A column with no
    /// values at all is text.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> ColumnKind {
        let (mut int, mut float, mut boolean, mut seen) = (true, true, true, false);
        for s in cells.into_iter().filter(|s| !is_missing(s)) {
            seen = true;
            int &= s.parse::<i64>().is_ok();
            float &= s.parse::<f64>().is_ok();
            boolean &= parse_bool(s).is_some();
            if !(int || float || boolean) {
                break;
            }
        }
        if !seen {
            ColumnKind::Text
        } else if int {
            ColumnKind::Integer
        } else if float {
            ColumnKind::Float
        } else if boolean {
            ColumnKind::Bool
        } else {
            ColumnKind::Text
        }
    }

    /// Type one cell of a column of this kind.
    pub fn parse(self, s: &str) -> CellValue {
        if is_missing(s) {
            return CellValue::Null;
        }
        let typed = match self {
            ColumnKind::Integer => s.parse().ok().map(CellValue::Integer),
            ColumnKind::Float => s.parse().ok().map(CellValue::Float),
            ColumnKind::Bool => parse_bool(s).map(CellValue::Bool),
            ColumnKind::Text => None,
        };
        typed.unwrap_or_else(|| CellValue::String(s.to_string()))
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Render a float the way a table preview shows it: NaN as `NaN`,
/// integral values with a single decimal, otherwise up to 4 decimals.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        let s = format!("{v:.4}");
        let s = s.trim_end_matches('0');
        if s.ends_with('.') {
            format!("{s}0")
        } else {
            s.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – the source file before preparation
// ---------------------------------------------------------------------------

/// Column names in file order plus row-major cells.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Build a table from untyped text rows, inferring one [`ColumnKind`]
    /// per column. Short rows are padded with nulls.
    pub fn from_text(column_names: Vec<String>, text_rows: Vec<Vec<String>>) -> RawTable {
        fn text_at(row: &[String], c: usize) -> &str {
            row.get(c).map(String::as_str).unwrap_or("")
        }
        let kinds: Vec<ColumnKind> = (0..column_names.len())
            .map(|c| ColumnKind::infer(text_rows.iter().map(|row| text_at(row, c))))
            .collect();
        let rows = text_rows
            .iter()
            .map(|row| {
                kinds
                    .iter()
                    .enumerate()
                    .map(|(c, kind)| kind.parse(text_at(row, c)))
                    .collect()
            })
            .collect();
        RawTable { column_names, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }
}

// ---------------------------------------------------------------------------
// ProductRecord – one prepared row
// ---------------------------------------------------------------------------

/// One product after preparation.
///
/// `cells` holds the source row in column order, with the two rating
/// columns replaced by their imputed values.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub cells: Vec<CellValue>,
    pub product_name: Option<String>,
    pub retail_price: f64,
    pub discounted_price: f64,
    pub product_rating: f64,
    pub overall_rating: f64,
    pub main_category: Option<String>,
    pub discount_percent: f64,
}

// ---------------------------------------------------------------------------
// ProductTable – the prepared, immutable dataset
// ---------------------------------------------------------------------------

/// The prepared dataset. Built once per source and never mutated.
#[derive(Debug, Clone, Default)]
pub struct ProductTable {
    pub records: Vec<ProductRecord>,
    /// Source column names in file order.
    pub column_names: Vec<String>,
    /// Distinct non-null main categories, ascending.
    pub categories: BTreeSet<String>,
    /// Medians used to fill unparseable ratings.
    pub product_rating_median: Option<f64>,
    pub overall_rating_median: Option<f64>,
}

impl ProductTable {
    /// Number of products.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column headers for a verbatim row preview: source columns followed by
    /// the derived ones.
    pub fn preview_columns(&self) -> Vec<String> {
        self.column_names
            .iter()
            .cloned()
            .chain(["main_category".to_string(), "discount_percent".to_string()])
            .collect()
    }
}

impl ProductRecord {
    /// The record rendered as strings, aligned with
    /// [`ProductTable::preview_columns`].
    pub fn preview_cells(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|c| c.to_string())
            .chain([
                self.main_category
                    .clone()
                    .unwrap_or_else(|| CellValue::Null.to_string()),
                format_number(self.discount_percent),
            ])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_table(header: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::from_text(
            header.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn columns_get_a_single_inferred_type() {
        let table = text_table(
            &["price", "rating", "flag", "name"],
            &[&["999", "4.5", "true", "Shirt"], &["250", "3", "False", "Mug"]],
        );
        assert_eq!(table.rows[0][0], CellValue::Integer(999));
        assert_eq!(table.rows[1][1], CellValue::Float(3.0));
        assert_eq!(table.rows[1][2], CellValue::Bool(false));
        assert_eq!(table.rows[0][3], CellValue::String("Shirt".into()));
    }

    #[test]
    fn number_like_text_in_a_text_column_is_kept_as_written() {
        let table = text_table(
            &["uniq_id", "product_name"],
            &[
                &["0042", "007"],
                &["1e5", "1.50"],
                &["c2d766ca982eca8304150849735ffef9", "Infinity >> x"],
            ],
        );
        let shown: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(shown[0], vec!["0042", "007"]);
        assert_eq!(shown[1], vec!["1e5", "1.50"]);
        assert_eq!(table.rows[2][1].as_text().as_deref(), Some("Infinity >> x"));
        assert_eq!(table.rows[1][1].to_numeric(), Some(1.5));
    }

    #[test]
    fn missing_tokens_read_as_null() {
        let table = text_table(
            &["category", "rating"],
            &[&["N/A", "NA"], &["Clothing", "4"], &["null", ""], &["None", "NaN"]],
        );
        let categories: Vec<&CellValue> = table.rows.iter().map(|r| &r[0]).collect();
        assert_eq!(
            categories,
            vec![
                &CellValue::Null,
                &CellValue::String("Clothing".into()),
                &CellValue::Null,
                &CellValue::Null,
            ]
        );
        assert_eq!(table.rows[1][1], CellValue::Integer(4));
        assert_eq!(
            table.rows.iter().filter(|r| r[1] == CellValue::Null).count(),
            3
        );
    }

    #[test]
    fn all_missing_column_is_text_of_nulls() {
        assert_eq!(ColumnKind::infer(["", "NA"]), ColumnKind::Text);
        assert_eq!(ColumnKind::Text.parse("NA"), CellValue::Null);
    }

    #[test]
    fn numeric_coercion_treats_garbage_and_nan_as_missing() {
        assert_eq!(CellValue::Integer(3).to_numeric(), Some(3.0));
        assert_eq!(CellValue::String(" 3.5 ".into()).to_numeric(), Some(3.5));
        assert_eq!(CellValue::String("n/a".into()).to_numeric(), None);
        assert_eq!(CellValue::Float(f64::NAN).to_numeric(), None);
        assert_eq!(CellValue::Null.to_numeric(), None);
        assert_eq!(CellValue::Bool(true).to_numeric(), None);
    }

    #[test]
    fn numbers_format_compactly() {
        assert_eq!(format_number(60.0), "60.0");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
