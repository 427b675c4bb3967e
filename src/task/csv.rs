//! Reader and writer for the `Task,Status` tasks file
//!
//! The file is plain CSV with a fixed two-column header. Fields are quoted
//! only when they contain a comma, a quote or a line break, so files written
//! by spreadsheet tools and pandas load unchanged.

use super::model::{Task, TaskStatus};

pub const HEADER: [&str; 2] = ["Task", "Status"];

/// A parse failure, located by the line the offending record starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// One decoded data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub status: TaskStatus,
}

#[derive(Debug)]
struct Record {
    line: usize,
    fields: Vec<String>,
}

/// Serialize tasks, header first, one row per task in list order.
pub fn encode(tasks: &[Task]) -> String {
    let mut output = String::new();
    output.push_str(&HEADER.join(","));
    output.push('\n');

    for task in tasks {
        push_field(&mut output, &task.text);
        output.push(',');
        output.push_str(task.status.label());
        output.push('\n');
    }

    output
}

/// Parse file content into rows.
///
/// Content without any record (empty string) yields no rows. Everything else
/// must start with the `Task,Status` header.
pub fn decode(content: &str) -> Result<Vec<Row>, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let records = split_records(content)?;

    let mut records = records.into_iter();
    let header = match records.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };

    if header.fields.len() != HEADER.len()
        || header.fields.iter().zip(HEADER).any(|(f, h)| f.trim() != h)
    {
        return Err(ParseError::new(
            header.line,
            format!(
                "expected header '{}', found '{}'",
                HEADER.join(","),
                header.fields.join(",")
            ),
        ));
    }

    let mut rows = Vec::new();
    for record in records {
        if record.fields.len() != HEADER.len() {
            return Err(ParseError::new(
                record.line,
                format!(
                    "expected {} columns, found {}",
                    HEADER.len(),
                    record.fields.len()
                ),
            ));
        }

        let mut fields = record.fields.into_iter();
        let text = fields.next().unwrap_or_default();
        let status_value = fields.next().unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ParseError::new(record.line, "task text is empty"));
        }

        let status = TaskStatus::from_file_value(status_value.trim()).ok_or_else(|| {
            ParseError::new(
                record.line,
                format!(
                    "unknown status '{}' (expected Pending or Completed)",
                    status_value
                ),
            )
        })?;

        rows.push(Row { text, status });
    }

    Ok(rows)
}

fn push_field(output: &mut String, value: &str) {
    if value.contains([',', '"', '\n', '\r']) {
        output.push('"');
        output.push_str(&value.replace('"', "\"\""));
        output.push('"');
    } else {
        output.push_str(value);
    }
}

fn split_records(content: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();

    let mut line = 1;
    let mut record_line = 1;
    let mut in_quotes = false;
    // The current field was quoted and its closing quote has been read
    let mut closed_quote = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    closed_quote = true;
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            ',' => {
                fields.push(std::mem::take(&mut field));
                closed_quote = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                if !is_blank_line(&fields, &field, closed_quote) {
                    fields.push(std::mem::take(&mut field));
                    records.push(Record {
                        line: record_line,
                        fields: std::mem::take(&mut fields),
                    });
                } else {
                    field.clear();
                }
                closed_quote = false;
                line += 1;
                record_line = line;
            }
            '"' if field.is_empty() && !closed_quote => {
                in_quotes = true;
            }
            _ if closed_quote => {
                return Err(ParseError::new(
                    line,
                    format!("unexpected character '{}' after closing quote", c),
                ));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(ParseError::new(record_line, "unterminated quoted field"));
    }

    if !is_blank_line(&fields, &field, closed_quote) {
        fields.push(field);
        records.push(Record {
            line: record_line,
            fields,
        });
    }

    Ok(records)
}

/// A line holding nothing but unquoted whitespace is not a record.
fn is_blank_line(fields: &[String], field: &str, closed_quote: bool) -> bool {
    fields.is_empty() && !closed_quote && field.trim().is_empty()
}
