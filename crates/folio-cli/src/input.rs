//! Loading and filtering the items to page through.

use crate::types::InputFormat;
use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::io::Read;

/// One record with the text it is displayed (and filtered) as
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    text: String,
    value: Value,
}

impl Item {
    pub fn from_value(value: Value) -> Self {
        let text = match &value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self { text, value }
    }

    pub fn from_line(line: &str) -> Self {
        Self {
            text: line.to_string(),
            value: Value::String(line.to_string()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Read a file, or stdin when `path` is `-`
pub fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

pub fn load(path: &str, format: InputFormat) -> Result<Vec<Item>> {
    let content = read_source(path)?;
    let (items, detected) = parse_items(&content, format)?;
    tracing::debug!(path, format = %detected, items = items.len(), "loaded input");
    Ok(items)
}

/// Split `content` into items, returning the format that was used
pub fn parse_items(content: &str, format: InputFormat) -> Result<(Vec<Item>, InputFormat)> {
    match format {
        InputFormat::Json => Ok((parse_json_array(content)?, InputFormat::Json)),
        InputFormat::Jsonl => Ok((parse_json_lines(content)?, InputFormat::Jsonl)),
        InputFormat::Lines => Ok((parse_lines(content), InputFormat::Lines)),
        InputFormat::Auto => Ok(detect(content)),
    }
}

fn detect(content: &str) -> (Vec<Item>, InputFormat) {
    if content.trim_start().starts_with('[')
        && let Ok(items) = parse_json_array(content)
    {
        return (items, InputFormat::Json);
    }

    let has_lines = content.lines().any(|line| !line.trim().is_empty());
    if has_lines && let Ok(items) = parse_json_lines(content) {
        return (items, InputFormat::Jsonl);
    }

    (parse_lines(content), InputFormat::Lines)
}

fn parse_json_array(content: &str) -> Result<Vec<Item>> {
    let value: Value = serde_json::from_str(content).context("Invalid JSON input")?;
    let Value::Array(values) = value else {
        bail!("Expected a JSON array of items");
    };
    Ok(values.into_iter().map(Item::from_value).collect())
}

fn parse_json_lines(content: &str) -> Result<Vec<Item>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line)
                .map(Item::from_value)
                .with_context(|| format!("Invalid JSON on line {}", index + 1))
        })
        .collect()
}

fn parse_lines(content: &str) -> Vec<Item> {
    content.lines().map(Item::from_line).collect()
}

/// Item filter: case-insensitive substring, or a regular expression
#[derive(Debug, Clone)]
pub enum Filter {
    Substring(String),
    Pattern(Regex),
}

impl Filter {
    pub fn new(text: &str, regex: bool) -> Result<Self> {
        if regex {
            let pattern =
                Regex::new(text).with_context(|| format!("Invalid filter pattern: {}", text))?;
            return Ok(Filter::Pattern(pattern));
        }
        Ok(Filter::Substring(text.to_lowercase()))
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Filter::Substring(needle) => needle.is_empty() || text.to_lowercase().contains(needle),
            Filter::Pattern(pattern) => pattern.is_match(text),
        }
    }
}

pub fn apply<'a>(items: &'a [Item], filter: Option<&Filter>) -> Vec<&'a Item> {
    match filter {
        Some(filter) => items
            .iter()
            .filter(|item| filter.matches(item.text()))
            .collect(),
        None => items.iter().collect(),
    }
}
