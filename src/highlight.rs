use inksac::prelude::*;
use std::io::{self, Write};

/// Leads every error line the shell prints.
pub const REPORT_PREFIX: &str = "sluice: ";

#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// A highlighter that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.enabled() {
            return text.to_string();
        }

        let style = if bold {
            Style::builder().foreground(color).bold().build()
        } else {
            Style::builder().foreground(color).build()
        };
        text.style(style).to_string()
    }

    pub fn highlight_error(&self, error: &str) -> String {
        self.paint(error, Color::Red, true)
    }

    /// Writes one error line to `err`.
    pub fn report(&self, err: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(err, "{}{}", REPORT_PREFIX, self.highlight_error(message))
    }
}
