use std::collections::HashSet;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";
const MIN_LENGTH: usize = 8;
const MIN_UNIQUE_CHARACTERS: usize = 5;

pub const REQUIREMENT_COUNT: u8 = 6;

pub const STRENGTH_LABELS: [&str; REQUIREMENT_COUNT as usize + 1] = [
    "Very Weak",
    "Weak",
    "Fair",
    "Good",
    "Strong",
    "Very Strong",
    "Excellent",
];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PasswordRequirements {
    pub length: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub has_unique_chars: bool,
}

impl PasswordRequirements {
    fn met(&self) -> u8 {
        [
            self.length,
            self.has_upper_case,
            self.has_lower_case,
            self.has_number,
            self.has_special_char,
            self.has_unique_chars,
        ]
        .into_iter()
        .filter(|met| *met)
        .count() as u8
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PasswordStrength {
    pub requirements: PasswordRequirements,
    /// Number of satisfied requirements, `0..=6`
    pub score: u8,
}

impl PasswordStrength {
    pub fn is_valid(&self) -> bool {
        self.score == REQUIREMENT_COUNT
    }

    pub fn label(&self) -> &'static str {
        STRENGTH_LABELS[usize::from(self.score.min(REQUIREMENT_COUNT))]
    }

    /// Fraction of satisfied requirements in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        f32::from(self.score) / f32::from(REQUIREMENT_COUNT)
    }
}

pub fn evaluate(password: &str) -> PasswordStrength {
    let unique: HashSet<char> = password.chars().collect();

    let requirements = PasswordRequirements {
        length: password.chars().count() >= MIN_LENGTH,
        has_upper_case: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower_case: password.chars().any(|c| c.is_ascii_lowercase()),
        has_number: password.chars().any(|c| c.is_ascii_digit()),
        has_special_char: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        has_unique_chars: unique.len() >= MIN_UNIQUE_CHARACTERS,
    };

    PasswordStrength {
        score: requirements.met(),
        requirements,
    }
}
