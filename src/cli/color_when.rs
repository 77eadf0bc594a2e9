use std::io::IsTerminal;

use clap::ValueEnum;

/// When to colour the log lines. The morphed text on stdout is never
/// coloured, so only stderr decides.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorWhen {
    Always,
    Auto,
    Never,
}

impl ColorWhen {
    pub fn use_colors(self) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Auto => Self::auto_colors(
                std::env::var_os("NO_COLOR").is_some(),
                std::env::var_os("TERM").is_some_and(|term| term == "dumb"),
                std::io::stderr().is_terminal(),
            ),
            ColorWhen::Never => false,
        }
    }

    /// `NO_COLOR` and dumb terminals win over an interactive stderr.
    fn auto_colors(no_color: bool, dumb_terminal: bool, stderr_is_terminal: bool) -> bool {
        !no_color && !dumb_terminal && stderr_is_terminal
    }
}

impl std::fmt::Display for ColorWhen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}
