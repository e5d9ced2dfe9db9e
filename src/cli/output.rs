//! Output formatting utilities
//!
//! Provides table, JSON, and compact output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::{Arguments, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Usage text of one command
#[derive(Debug, Clone, Serialize)]
pub struct UsageOutput {
    pub path: Vec<String>,
    pub usage: String,
}

impl TableDisplay for UsageOutput {
    fn to_table(&self) -> String {
        self.usage.clone()
    }

    fn to_compact(&self) -> String {
        self.usage.lines().next().unwrap_or_default().to_string()
    }
}

/// Result of resolving raw arguments to a command
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOutput {
    pub tokens: Vec<String>,
    pub matched: Option<Vec<String>>,
}

impl TableDisplay for ResolveOutput {
    fn to_table(&self) -> String {
        match &self.matched {
            Some(path) => format!("Matched: {}", path.join(" ")),
            None => format!("No command matches: {}", self.tokens.join(" ")),
        }
    }

    fn to_compact(&self) -> String {
        match &self.matched {
            Some(path) => path.join(" "),
            None => "-".to_string(),
        }
    }
}

/// What a handler would receive for raw arguments
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub path: Vec<String>,
    pub arguments: Arguments,
}

impl TableDisplay for ParseOutput {
    fn to_table(&self) -> String {
        let mut output = format!("Command: {}\n", self.path.join(" "));

        write_values(&mut output, "Flags", self.arguments.flags());
        write_values(&mut output, "Params", self.arguments.params());

        if !self.arguments.trailing().is_empty() {
            output.push_str(&format!(
                "Trailing: {}\n",
                self.arguments.trailing().join(" ")
            ));
        }

        output
    }

    fn to_compact(&self) -> String {
        let pairs: Vec<String> = self
            .arguments
            .flags()
            .iter()
            .chain(self.arguments.params())
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        format!("{}: {}", self.path.join(" "), pairs.join(" "))
    }
}

fn write_values(output: &mut String, title: &str, values: &BTreeMap<String, Value>) {
    if values.is_empty() {
        return;
    }

    output.push_str(&format!("{}:\n", title));
    for (key, value) in values {
        output.push_str(&format!("  {} = {}\n", key, value));
    }
}
