//! Host-side generator settings: mode selection and option edits.

use std::fmt;

use rand::{CryptoRng, RngCore};
use secrecy::SecretString;
use thiserror::Error;

use crate::constraints::{Constraints, GenerationMode};
use crate::generator::Generator;

/// Editable option identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Length,
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
    ExcludeSimilar,
    Capitalize,
    Separator,
}

impl OptionKey {
    pub const ALL: [OptionKey; 8] = [
        OptionKey::Length,
        OptionKey::Uppercase,
        OptionKey::Lowercase,
        OptionKey::Numbers,
        OptionKey::Symbols,
        OptionKey::ExcludeSimilar,
        OptionKey::Capitalize,
        OptionKey::Separator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::Length => "length",
            OptionKey::Uppercase => "useUppercase",
            OptionKey::Lowercase => "useLowercase",
            OptionKey::Numbers => "useNumbers",
            OptionKey::Symbols => "useSymbols",
            OptionKey::ExcludeSimilar => "excludeSimilar",
            OptionKey::Capitalize => "capitalize",
            OptionKey::Separator => "separator",
        }
    }

    fn flag(self, constraints: &mut Constraints) -> Option<&mut bool> {
        match self {
            OptionKey::Uppercase => Some(&mut constraints.use_uppercase),
            OptionKey::Lowercase => Some(&mut constraints.use_lowercase),
            OptionKey::Numbers => Some(&mut constraints.use_numbers),
            OptionKey::Symbols => Some(&mut constraints.use_symbols),
            OptionKey::ExcludeSimilar => Some(&mut constraints.exclude_similar),
            OptionKey::Capitalize => Some(&mut constraints.capitalize),
            OptionKey::Length | OptionKey::Separator => None,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Length(usize),
    Flag(bool),
    Text(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Options are locked in {0} mode")]
    Locked(GenerationMode),
    #[error("Option {key} does not accept {value:?}")]
    TypeMismatch { key: OptionKey, value: OptionValue },
    #[error("Length {length} outside {min}..={max} for {mode} mode")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
        mode: GenerationMode,
    },
}

/// Current mode plus the constraints the user has dialled in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratorSettings {
    mode: GenerationMode,
    constraints: Constraints,
}

impl GeneratorSettings {
    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Switches mode and applies its preset once.
    pub fn select_mode(&mut self, mode: GenerationMode) {
        self.mode = mode;
        self.constraints = mode.preset().apply(&self.constraints);
    }

    pub fn option(&self, key: OptionKey) -> OptionValue {
        let c = &self.constraints;
        match key {
            OptionKey::Length => OptionValue::Length(c.length),
            OptionKey::Uppercase => OptionValue::Flag(c.use_uppercase),
            OptionKey::Lowercase => OptionValue::Flag(c.use_lowercase),
            OptionKey::Numbers => OptionValue::Flag(c.use_numbers),
            OptionKey::Symbols => OptionValue::Flag(c.use_symbols),
            OptionKey::ExcludeSimilar => OptionValue::Flag(c.exclude_similar),
            OptionKey::Capitalize => OptionValue::Flag(c.capitalize),
            OptionKey::Separator => OptionValue::Text(c.separator().to_string()),
        }
    }

    /// Edits one option.
    ///
    /// # Errors
    ///
    /// - `Locked` while the mode freezes options
    /// - `TypeMismatch` if `value` does not fit `key`
    /// - `LengthOutOfRange` if a length falls outside the mode's bounds
    pub fn set_option(&mut self, key: OptionKey, value: OptionValue) -> Result<(), SettingsError> {
        if self.mode.is_locked() {
            return Err(SettingsError::Locked(self.mode));
        }

        match (key, value) {
            (OptionKey::Length, OptionValue::Length(length)) => {
                let (min, max) = self.mode.length_bounds();
                if !(min..=max).contains(&length) {
                    return Err(SettingsError::LengthOutOfRange {
                        length,
                        min,
                        max,
                        mode: self.mode,
                    });
                }
                self.constraints.length = length;
            }
            (OptionKey::Separator, OptionValue::Text(sep)) => {
                self.constraints.separator = Some(sep);
            }
            (key, OptionValue::Flag(on)) => match key.flag(&mut self.constraints) {
                Some(field) => *field = on,
                None => {
                    return Err(SettingsError::TypeMismatch {
                        key,
                        value: OptionValue::Flag(on),
                    });
                }
            },
            (key, value) => return Err(SettingsError::TypeMismatch { key, value }),
        }
        Ok(())
    }

    /// Generates a password from the current mode and constraints.
    pub fn generate_with<R: RngCore + CryptoRng>(&self, generator: &mut Generator<R>) -> SecretString {
        generator.generate(self.mode, &self.constraints)
    }
}
