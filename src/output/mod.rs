//! Output formatting module

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use crate::config::OutputFormat;

/// A resource that can be printed as one table row
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Render a resource collection in the requested format
pub fn render<T: Serialize + TableRow>(items: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&items),
        OutputFormat::Compact => print_compact(&items),
        OutputFormat::Table => {
            print_table(items);
            Ok(())
        }
    }
}

/// Print output in the configured format; tables fall back to pretty JSON
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Compact => print_compact(data),
        OutputFormat::Table => {
            println!("{}", serde_json::to_string_pretty(data)?);
            Ok(())
        }
    }
}

/// Print as formatted JSON
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string(data)?);
    Ok(())
}

fn print_compact<T: Serialize>(data: &T) -> Result<()> {
    for line in compact_lines(&serde_json::to_value(data)?) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per item: space-separated `key=value` pairs, nested keys dotted
pub fn compact_lines(value: &Value) -> Vec<String> {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };

    items
        .iter()
        .map(|item| {
            let mut pairs = Vec::new();
            flatten("", item, &mut pairs);
            pairs.join(" ")
        })
        .collect()
}

fn flatten(key: &str, value: &Value, pairs: &mut Vec<String>) {
    let child = |k: &str| {
        if key.is_empty() {
            k.to_string()
        } else {
            format!("{}.{}", key, k)
        }
    };

    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten(&child(k), v, pairs);
            }
        }
        Value::Array(arr) => {
            for (i, v) in arr.iter().enumerate() {
                flatten(&child(&i.to_string()), v, pairs);
            }
        }
        Value::String(s) if key.is_empty() => pairs.push(s.clone()),
        Value::String(s) => pairs.push(format!("{}={}", key, s)),
        other if key.is_empty() => pairs.push(other.to_string()),
        other => pairs.push(format!("{}={}", key, other)),
    }
}

/// Tab-separated cells padded to the widest value in each column
pub fn table_lines<T: TableRow>(items: &[T]) -> Vec<String> {
    let headers = T::headers();
    let rows: Vec<Vec<String>> = items.iter().map(T::row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let pad = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("\t")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![pad(headers.iter().map(|h| h.to_string()).collect())];
    lines.extend(rows.into_iter().map(&pad));
    lines
}

fn print_table<T: TableRow>(items: &[T]) {
    let mut lines = table_lines(items).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

/// Errors and warnings go to stderr
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}
