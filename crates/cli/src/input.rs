use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polyclose::{parse_angle_fields, Angle};
use std::path::Path;

/// Angles from `--angle` flags or, if given, a CSV column. Blank cells count
/// as missing input for that field.
pub fn load_angles(flags: &[String], csv: Option<&Path>, column: &str) -> Result<Vec<Angle>> {
    let fields = match csv {
        Some(path) => read_angle_column(path, column)?,
        None => flags.to_vec(),
    };
    if fields.is_empty() {
        bail!("no angles given; pass --angle D:M:S once per vertex or --input <csv>");
    }
    Ok(parse_angle_fields(&fields)?)
}

/// Read one column of a CSV file as text, one field per row.
pub fn read_angle_column(path: &Path, column: &str) -> Result<Vec<String>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([col(column).cast(DataType::String)])
        .collect()
        .with_context(|| format!("reading column {column:?} from {}", path.display()))?;
    tracing::info!(rows = df.height(), column, "input_csv");
    let values = df.column(column)?.str()?;
    Ok(values
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect())
}
