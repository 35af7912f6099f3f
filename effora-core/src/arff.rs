//! Feature table serialization in the format the classifier expects.

use std::io::Write;

use crate::constants::{ARFF_RELATION, CLASS_ATTRIBUTE, CLASS_VALUES, FEATURE_ATTRIBUTES};
use crate::types::{EfforaError, FeatureTable};

/// Serialize the feature table, one data row per vector in table order.
///
/// The header declares the fixed numeric schema plus the unlabeled nominal
/// class attribute; every data row ends in `?` since classification supplies
/// the label. Row order is preserved exactly, because the prediction parser
/// correlates classifier output rows back to it.
///
/// # Errors
///
/// A vector whose value count differs from the schema is a contract
/// violation reported as [`EfforaError::SchemaMismatch`].
pub fn write_feature_table<W: Write>(
    writer: &mut W,
    table: &FeatureTable,
) -> Result<(), EfforaError> {
    writeln!(writer, "@RELATION {ARFF_RELATION}")?;
    writeln!(writer)?;
    for attribute in FEATURE_ATTRIBUTES {
        writeln!(writer, "@ATTRIBUTE {attribute} NUMERIC")?;
    }
    writeln!(
        writer,
        "@ATTRIBUTE {CLASS_ATTRIBUTE} {{{}}}",
        CLASS_VALUES.join(",")
    )?;
    writeln!(writer)?;
    writeln!(writer, "@DATA")?;

    for row in table.rows() {
        if row.values.len() != FEATURE_ATTRIBUTES.len() {
            return Err(EfforaError::schema_mismatch(
                &row.surrogate_id,
                row.values.len(),
            ));
        }
        let values: Vec<String> = row.values.iter().map(f64::to_string).collect();
        writeln!(writer, "{},?", values.join(","))?;
    }
    Ok(())
}
