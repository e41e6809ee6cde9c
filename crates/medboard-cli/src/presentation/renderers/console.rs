use anyhow::Result;
use is_terminal::IsTerminal;
use medboard_engine::{Rendered, render};
use medboard_types::Operation;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::io::{self, Write};

use crate::args::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
    /// Heading and colors only when a person is looking at the output
    decorated: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            decorated: io::stdout().is_terminal(),
        }
    }

    pub fn plain(format: OutputFormat) -> Self {
        Self {
            format,
            decorated: false,
        }
    }

    pub fn render(&self, operation: Operation, value: &Value) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write(&mut out, operation, value)
    }

    pub fn write(&self, out: &mut impl Write, operation: Operation, value: &Value) -> Result<()> {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
            return Ok(());
        }

        let rendered = render(value);
        if self.decorated {
            writeln!(out, "{}", operation.title().bold())?;
            writeln!(out)?;
            if let Rendered::Table(table) = &rendered {
                let mut lines = table.to_string();
                if let Some(header_end) = lines.find('\n') {
                    let body = lines.split_off(header_end);
                    write!(out, "{}{}", lines.cyan().bold(), body)?;
                    return Ok(());
                }
            }
        }

        write!(out, "{}", rendered)?;
        Ok(())
    }
}
