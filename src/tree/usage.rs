//! Usage text rendering
//!
//! The text is made of blocks separated by a blank line:
//!
//! ```text
//! Usage: <path> [-abc] [-o type] -r type <param> [<param>] [<...rest>] [<command>]
//!
//! <description>
//!
//! Commands:
//!
//!     <name>  <description>
//!
//! Options:
//!
//!     -<short>  --<long>  <description> (<type>, required)
//!
//! Parameters:
//!
//!     <name>  <description> (<type>, required, multiple)
//! ```
//!
//! Empty blocks are left out. Column widths are computed per section.

use crate::domain::{active_multiple, CliOption, Param, ValueType};
use crate::tree::CommandRef;

/// Layout settings for usage text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageStyle {
    /// Spaces before each section line
    pub indent: usize,
    /// Spaces between columns
    pub column_gap: usize,
}

impl Default for UsageStyle {
    fn default() -> Self {
        Self {
            indent: 4,
            column_gap: 2,
        }
    }
}

impl CommandRef<'_> {
    /// Usage text with the default style
    pub fn usage(&self) -> String {
        self.usage_with(&UsageStyle::default())
    }

    pub fn usage_with(&self, style: &UsageStyle) -> String {
        let mut summary = vec![format!("Usage: {}", self.path().join(" "))];
        summary.extend(option_summary(self.options()));
        summary.extend(param_summary(self.params()));
        if self.has_children() {
            summary.push("[<command>]".to_string());
        }

        let mut blocks = vec![summary.join(" ")];

        if !self.description().is_empty() {
            blocks.push(self.description().to_string());
        }

        let sections = [
            ("Commands:", self.command_lines(style)),
            ("Options:", option_lines(self.options(), style)),
            ("Parameters:", param_lines(self.params(), style)),
        ];
        for (header, lines) in sections {
            if !lines.is_empty() {
                blocks.push(header.to_string());
                blocks.push(lines.join("\n"));
            }
        }

        blocks.join("\n\n")
    }

    fn command_lines(&self, style: &UsageStyle) -> Vec<String> {
        let width = self.children().map(|c| c.name().chars().count()).max();
        let Some(width) = width else {
            return Vec::new();
        };

        self.children()
            .map(|child| {
                let columns = [
                    format!("{:<width$}", child.name()),
                    child.description().to_string(),
                ];
                render_line(style, &columns)
            })
            .collect()
    }
}

/// Options split the way the usage line groups them
struct OptionGroups<'o> {
    switches: Vec<&'o CliOption>,
    optional: Vec<&'o CliOption>,
    required: Vec<&'o CliOption>,
}

impl<'o> OptionGroups<'o> {
    fn new(options: &'o [CliOption]) -> Self {
        let mut groups = Self {
            switches: Vec::new(),
            optional: Vec::new(),
            required: Vec::new(),
        };

        for option in options {
            if option.is_required() {
                groups.required.push(option);
            } else if option.is_switch() {
                groups.switches.push(option);
            } else {
                groups.optional.push(option);
            }
        }

        groups
    }
}

/// Params split the way the usage line groups them
struct ParamGroups<'p> {
    required: Vec<&'p Param>,
    optional: Vec<&'p Param>,
    multiple: Option<&'p Param>,
}

impl<'p> ParamGroups<'p> {
    fn new(params: &'p [Param]) -> Self {
        let (required, optional): (Vec<&Param>, Vec<&Param>) = params
            .iter()
            .filter(|p| !p.is_multiple())
            .partition(|p| p.is_required());

        Self {
            required,
            optional,
            multiple: active_multiple(params),
        }
    }
}

fn option_summary(options: &[CliOption]) -> Vec<String> {
    let groups = OptionGroups::new(options);
    let mut parts = Vec::new();

    if !groups.switches.is_empty() {
        let shorts: String = groups.switches.iter().map(|o| o.short()).collect();
        parts.push(format!("[-{}]", shorts));
    }

    parts.extend(
        groups
            .optional
            .iter()
            .map(|o| format!("[-{} {}]", o.short(), o.value_type())),
    );
    parts.extend(
        groups
            .required
            .iter()
            .map(|o| format!("-{} {}", o.short(), o.value_type())),
    );

    parts
}

fn param_summary(params: &[Param]) -> Vec<String> {
    let groups = ParamGroups::new(params);
    let mut parts: Vec<String> = groups
        .required
        .iter()
        .map(|p| format!("<{}>", p.name()))
        .collect();

    parts.extend(groups.optional.iter().map(|p| format!("[<{}>]", p.name())));

    if let Some(multiple) = groups.multiple {
        let part = format!("<...{}>", multiple.name());
        if multiple.is_required() {
            parts.push(part);
        } else {
            parts.push(format!("[{}]", part));
        }
    }

    parts
}

fn option_lines(options: &[CliOption], style: &UsageStyle) -> Vec<String> {
    let short_width = max_width(options.iter().map(|o| o.short()));
    let long_width = max_width(options.iter().filter_map(|o| o.long()));
    let show_long = options.iter().any(|o| o.long().is_some());

    options
        .iter()
        .map(|option| {
            let mut suffix = Vec::new();
            if option.value_type() != ValueType::Boolean {
                suffix.push(option.value_type().as_str());
            }
            if option.is_required() {
                suffix.push("required");
            }

            let mut columns = vec![format!("-{:<short_width$}", option.short())];
            if show_long {
                let long = option.long().map(|l| format!("--{}", l)).unwrap_or_default();
                columns.push(format!("{:<width$}", long, width = long_width + 2));
            }
            columns.push(describe(option.description(), &suffix));

            render_line(style, &columns)
        })
        .collect()
}

fn param_lines(params: &[Param], style: &UsageStyle) -> Vec<String> {
    let width = max_width(params.iter().map(|p| p.name()));

    params
        .iter()
        .map(|param| {
            let mut suffix = vec![param.value_type().as_str()];
            if param.is_required() {
                suffix.push("required");
            }
            if param.is_multiple() {
                suffix.push("multiple");
            }

            let columns = [
                format!("{:<width$}", param.name()),
                describe(param.description(), &suffix),
            ];
            render_line(style, &columns)
        })
        .collect()
}

/// Description followed by a parenthesised, comma-joined suffix
fn describe(description: &str, suffix: &[&str]) -> String {
    let suffix = if suffix.is_empty() {
        String::new()
    } else {
        format!("({})", suffix.join(", "))
    };

    [description, suffix.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_line(style: &UsageStyle, columns: &[String]) -> String {
    let line = format!(
        "{}{}",
        " ".repeat(style.indent),
        columns.join(&" ".repeat(style.column_gap))
    );
    line.trim_end().to_string()
}

fn max_width<'s>(values: impl Iterator<Item = &'s str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0)
}
