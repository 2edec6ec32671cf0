use super::{ClusterRule, CodePair, TableError};

/// Lines starting with this marker are comments.
pub(super) const COMMENT_MARKER: &str = ";;";

/// One non-blank, non-comment row of a tab-separated table.
pub(super) struct Row<'a> {
    /// 1-based line number in the source text.
    pub line: usize,
    pub fields: Vec<&'a str>,
}

/// Split `text` into rows, skipping blank and comment lines.
///
/// Trailing whitespace is removed before splitting, and each field is trimmed.
pub(super) fn rows(text: &str) -> impl Iterator<Item = Row<'_>> {
    text.lines().enumerate().filter_map(|(i, raw)| {
        let line = raw.trim_end();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return None;
        }
        Some(Row {
            line: i + 1,
            fields: line.split('\t').map(str::trim).collect(),
        })
    })
}

/// Return the only character of `field`, or `None` if it has zero or several.
fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_code_point(table: &'static str, line: usize, field: &str) -> Result<char, TableError> {
    field
        .parse::<u32>()
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| TableError::CodePoint {
            table,
            line,
            field: field.to_string(),
        })
}

/// Parse a ycode code table: column 0 is the ycode character, column 1 the
/// decimal code point of the Yiddish character. Further columns are ignored.
pub(super) fn parse_code_pairs(
    table: &'static str,
    text: &str,
) -> Result<Vec<(usize, CodePair)>, TableError> {
    rows(text)
        .map(|row| {
            if row.fields.len() < 2 {
                return Err(TableError::ColumnCount {
                    table,
                    line: row.line,
                    expected: "at least 2",
                    found: row.fields.len(),
                });
            }
            let ycode = single_char(row.fields[0]).ok_or_else(|| TableError::YcodeWidth {
                table,
                line: row.line,
                field: row.fields[0].to_string(),
            })?;
            let yiddish = parse_code_point(table, row.line, row.fields[1])?;
            Ok((row.line, CodePair { ycode, yiddish }))
        })
        .collect()
}

/// A parsed row of the YIVO table.
#[derive(Debug)]
pub(super) enum YivoRow {
    Single { yivo: char, ycode: String },
    Cluster(ClusterRule),
}

/// Parse the YIVO table. Two-column rows are single-character mappings,
/// three-column rows are cluster rules with a placeholder code point.
pub(super) fn parse_yivo_rows(
    table: &'static str,
    text: &str,
) -> Result<Vec<(usize, YivoRow)>, TableError> {
    rows(text)
        .map(|row| {
            let line = row.line;
            let invalid = |reason: String| TableError::InvalidField {
                table,
                line,
                reason,
            };
            match row.fields.as_slice() {
                [yivo, ycode] => {
                    let yivo = single_char(yivo).ok_or_else(|| {
                        invalid(format!("YIVO field {yivo:?} must be one character"))
                    })?;
                    let width = ycode.chars().count();
                    if !(1..=2).contains(&width) {
                        return Err(invalid(format!(
                            "ycode field {ycode:?} must be one or two characters"
                        )));
                    }
                    Ok((
                        line,
                        YivoRow::Single {
                            yivo,
                            ycode: ycode.to_string(),
                        },
                    ))
                }
                [yivo, placeholder, ycode] => {
                    if yivo.chars().count() < 2 {
                        return Err(invalid(format!(
                            "cluster {yivo:?} must be at least two characters"
                        )));
                    }
                    if ycode.is_empty() {
                        return Err(invalid(format!("cluster {yivo:?} has an empty ycode field")));
                    }
                    let placeholder = parse_code_point(table, line, placeholder)?;
                    Ok((
                        line,
                        YivoRow::Cluster(ClusterRule {
                            yivo: yivo.to_string(),
                            placeholder,
                            ycode: ycode.to_string(),
                        }),
                    ))
                }
                fields => Err(TableError::ColumnCount {
                    table,
                    line,
                    expected: "2 or 3",
                    found: fields.len(),
                }),
            }
        })
        .collect()
}

/// Parse the non-phonetic word table: YIVO word, ycode rendering.
pub(super) fn parse_nonphonetic(
    table: &'static str,
    text: &str,
) -> Result<Vec<(usize, String, String)>, TableError> {
    rows(text)
        .map(|row| match row.fields.as_slice() {
            [yivo, ycode] if !yivo.is_empty() && !ycode.is_empty() => {
                Ok((row.line, yivo.to_string(), ycode.to_string()))
            }
            [_, _] => Err(TableError::InvalidField {
                table,
                line: row.line,
                reason: "empty word or rendering".to_string(),
            }),
            fields => Err(TableError::ColumnCount {
                table,
                line: row.line,
                expected: "2",
                found: fields.len(),
            }),
        })
        .collect()
}
