//! Generation modes, constraint sets and the mode preset table.

use std::fmt;

use crate::charset::ClassSelection;

pub const DEFAULT_SEPARATOR: &str = "-";

/// Minimum length accepted by the Paranoia enforcement at generation time.
pub const PARANOIA_MIN_LENGTH: usize = 20;

/// Selects the generation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenerationMode {
    #[default]
    Random,
    Pronounceable,
    Passphrase,
    /// Maximum-security preset on top of `Random`.
    Paranoia,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 4] = [
        GenerationMode::Random,
        GenerationMode::Pronounceable,
        GenerationMode::Passphrase,
        GenerationMode::Paranoia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Random => "random",
            GenerationMode::Pronounceable => "pronounceable",
            GenerationMode::Passphrase => "passphrase",
            GenerationMode::Paranoia => "paranoia",
        }
    }

    /// Constraint overrides applied once when this mode is selected.
    pub fn preset(&self) -> Preset {
        match self {
            GenerationMode::Random => Preset::default(),
            GenerationMode::Pronounceable => Preset {
                length: Some(12),
                use_numbers: Some(true),
                use_symbols: Some(false),
                ..Preset::default()
            },
            GenerationMode::Passphrase => Preset {
                length: Some(25),
                ..Preset::default()
            },
            GenerationMode::Paranoia => Preset {
                length: Some(32),
                use_uppercase: Some(true),
                use_lowercase: Some(true),
                use_numbers: Some(true),
                use_symbols: Some(true),
                exclude_similar: Some(false),
            },
        }
    }

    /// Inclusive length range offered to the user in this mode.
    pub fn length_bounds(&self) -> (usize, usize) {
        match self {
            GenerationMode::Passphrase => (12, 64),
            _ => (6, 64),
        }
    }

    /// Whether options are frozen while this mode is active.
    pub fn is_locked(&self) -> bool {
        matches!(self, GenerationMode::Paranoia)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field overrides for a mode. `None` leaves the field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preset {
    pub length: Option<usize>,
    pub use_uppercase: Option<bool>,
    pub use_lowercase: Option<bool>,
    pub use_numbers: Option<bool>,
    pub use_symbols: Option<bool>,
    pub exclude_similar: Option<bool>,
}

impl Preset {
    pub fn apply(&self, constraints: &Constraints) -> Constraints {
        let mut out = constraints.clone();
        if let Some(length) = self.length {
            out.length = length;
        }
        if let Some(v) = self.use_uppercase {
            out.use_uppercase = v;
        }
        if let Some(v) = self.use_lowercase {
            out.use_lowercase = v;
        }
        if let Some(v) = self.use_numbers {
            out.use_numbers = v;
        }
        if let Some(v) = self.use_symbols {
            out.use_symbols = v;
        }
        if let Some(v) = self.exclude_similar {
            out.exclude_similar = v;
        }
        out
    }
}

/// Constraint set for one `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// Exact character count (Random, Pronounceable) or soft budget (Passphrase).
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
    pub exclude_similar: bool,
    /// Passphrase word separator. Empty or absent means `-`.
    pub separator: Option<String>,
    /// Capitalize each passphrase word.
    pub capitalize: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            length: 16,
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_symbols: true,
            exclude_similar: false,
            separator: None,
            capitalize: false,
        }
    }
}

impl Constraints {
    pub fn classes(&self) -> ClassSelection {
        ClassSelection {
            uppercase: self.use_uppercase,
            lowercase: self.use_lowercase,
            numbers: self.use_numbers,
            symbols: self.use_symbols,
        }
    }

    pub fn separator(&self) -> &str {
        match self.separator.as_deref() {
            Some(sep) if !sep.is_empty() => sep,
            _ => DEFAULT_SEPARATOR,
        }
    }

    /// Constraints actually used when generating in Paranoia mode.
    pub fn paranoia(&self) -> Constraints {
        Constraints {
            length: self.length.max(PARANOIA_MIN_LENGTH),
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_symbols: true,
            exclude_similar: false,
            ..self.clone()
        }
    }
}
