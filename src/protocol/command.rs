/// Text commands understood by the module's configuration mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a configuration update
    Start,
    /// Finish a configuration update
    End,
    /// Load the stored configuration from EEPROM
    Read,
    /// Dump the current configuration as text
    Print,
    /// Persist the current configuration to EEPROM
    Write,
}

impl Command {
    pub fn token(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::End => "end",
            Command::Read => "read",
            Command::Print => "print",
            Command::Write => "write",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
