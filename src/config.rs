/// Driver configuration, handed to the transactor at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) echo: bool,
    pub(crate) line_terminator: &'static [u8],
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Config {
            echo: false,
            line_terminator: b"\r\n",
        }
    }

    /// Log every command written and every matched response.
    pub const fn with_echo(self) -> Self {
        Config { echo: true, ..self }
    }

    /// Bytes appended after every command line. Defaults to `\r\n`.
    pub const fn with_line_terminator(self, line_terminator: &'static [u8]) -> Self {
        Config {
            line_terminator,
            ..self
        }
    }
}
