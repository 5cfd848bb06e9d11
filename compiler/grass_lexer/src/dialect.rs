//! Source dialect selection.

use std::fmt;
use std::path::Path;

/// Which surface syntax a program is written in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Dialect {
    /// Minimal `w`/`W`/`v` syntax.
    Grass,
    /// Name-resolving syntax with arities, declarations, and brackets.
    #[default]
    Lawn,
}

impl Dialect {
    /// Guess the dialect from a file extension: `.grass` and `.w` are Grass,
    /// anything else is Lawn.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("grass") || ext.eq_ignore_ascii_case("w") => {
                Dialect::Grass
            }
            _ => Dialect::Lawn,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Grass => "grass",
            Dialect::Lawn => "lawn",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dialect {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grass" => Ok(Dialect::Grass),
            "lawn" => Ok(Dialect::Lawn),
            _ => Err(()),
        }
    }
}
