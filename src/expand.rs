//! Multi-value row expansion.
//!
//! Several NCBI gene columns hold `|`-delimited value lists (`chromosome`,
//! `Synonyms`, `dbXrefs`). `expand_rows` turns one row holding N delimited
//! values into N rows holding one value each. The operation is generic over
//! the record type so the same primitive serves the chromosome, synonym,
//! and cross-reference fields.

/// Expand a delimited field into one row per value.
///
/// `value` selects the field to expand; rows where it returns `None` are
/// dropped entirely. `assign` writes a single value back into a copy of the
/// row. With `keep` set, a row whose field held more than one value also
/// emits the original combined value as its own row, ahead of the split
/// copies; a field holding exactly one value is never duplicated.
///
/// All other fields are copied unchanged and output rows stay grouped by
/// the row they were expanded from.
pub fn expand_rows<R, V, A>(rows: Vec<R>, value: V, assign: A, sep: &str, keep: bool) -> Vec<R>
where
    R: Clone,
    V: Fn(&R) -> Option<&str>,
    A: Fn(&mut R, String),
{
    let mut expanded = Vec::with_capacity(rows.len());
    for row in rows {
        let parts: Vec<String> = match value(&row) {
            Some(field) => field.split(sep).map(str::to_string).collect(),
            None => continue,
        };
        if keep && parts.len() > 1 {
            expanded.push(row.clone());
        }
        for part in parts {
            let mut split_row = row.clone();
            assign(&mut split_row, part);
            expanded.push(split_row);
        }
    }
    expanded
}
