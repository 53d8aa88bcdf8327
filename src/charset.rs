//! Character classes used by the generator.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easily mistaken for one another when transcribed.
pub const SIMILAR: &str = "Il1O05S2Z";

pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";
pub const VOWELS: &str = "aeiou";

/// Which character classes are eligible for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl ClassSelection {
    pub fn any(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.symbols
    }
}

/// Assembles the eligible pool, lowercase first, then strips confusable
/// glyphs if requested. The result may be empty.
pub fn build_pool(classes: ClassSelection, exclude_similar: bool) -> Vec<char> {
    let mut pool: Vec<char> = [
        (classes.lowercase, LOWERCASE),
        (classes.uppercase, UPPERCASE),
        (classes.numbers, DIGITS),
        (classes.symbols, SYMBOLS),
    ]
    .into_iter()
    .filter(|(enabled, _)| *enabled)
    .flat_map(|(_, set)| set.chars())
    .collect();

    if exclude_similar {
        pool.retain(|c| !SIMILAR.contains(*c));
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_and_vowel_alphabets() {
        assert_eq!(CONSONANTS.len(), 21);
        assert_eq!(VOWELS.len(), 5);
    }

    #[test]
    fn test_build_pool_all_classes() {
        let classes = ClassSelection {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        };
        let pool = build_pool(classes, false);
        assert_eq!(pool.len(), 26 + 26 + 10 + SYMBOLS.len());
        assert_eq!(pool.first(), Some(&'a'));
    }

    #[test]
    fn test_build_pool_excludes_similar() {
        let classes = ClassSelection {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        };
        let pool = build_pool(classes, true);
        assert!(pool.iter().all(|c| !SIMILAR.contains(*c)));
        assert_eq!(pool.len(), 62 - SIMILAR.len());
    }

    #[test]
    fn test_build_pool_numbers_only_without_similar() {
        let classes = ClassSelection {
            numbers: true,
            ..Default::default()
        };
        let pool: String = build_pool(classes, true).into_iter().collect();
        assert_eq!(pool, "346789");
    }

    #[test]
    fn test_build_pool_nothing_selected() {
        assert!(build_pool(ClassSelection::default(), false).is_empty());
        assert!(!ClassSelection::default().any());
    }
}
