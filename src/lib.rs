//! Password generation and strength analysis library
//!
//! This library generates random, pronounceable and passphrase-style
//! passwords from a cryptographically secure source, and estimates how well
//! any password resists offline guessing.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SECUREGEN_WORDLIST_PATH`: Custom passphrase wordlist file
//!   (default: `./assets/wordlist.txt`, otherwise the built-in list)
//!
//! # Example
//!
//! ```rust
//! use securegen::{analyze_strength, generate, Constraints, GenerationMode};
//! use secrecy::ExposeSecret;
//!
//! let password = generate(GenerationMode::Random, &Constraints::default());
//! assert_eq!(password.expose_secret().len(), 16);
//!
//! let report = analyze_strength(&password);
//! println!("{} ({} bits, cracked in {})", report.label, report.entropy_bits, report.crack_time);
//! for tip in &report.tips {
//!     println!("- {}", tip);
//! }
//! ```

// Internal modules
mod analyzer;
mod charset;
mod constraints;
mod entropy;
mod generator;
mod modes;
mod sections;
mod settings;
mod types;
mod wordlist;

// Public API
pub use analyzer::analyze_strength;
pub use charset::{ClassSelection, DIGITS, LOWERCASE, SIMILAR, SYMBOLS, UPPERCASE};
pub use constraints::{Constraints, GenerationMode, Preset};
pub use entropy::{crack_time, entropy_bits, CharacterProfile};
pub use generator::{generate, Generator};
pub use settings::{GeneratorSettings, OptionKey, OptionValue, SettingsError};
pub use types::{StrengthLabel, StrengthReport, StrengthScore};
pub use wordlist::{
    active_wordlist, builtin_words, get_wordlist_path, init_wordlist, init_wordlist_from_path,
    WordlistError,
};

#[cfg(feature = "async")]
pub use analyzer::analyze_strength_tx;
