// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message vocabularies and the patterns built from them.

use lazy_static::lazy_static;
use regex::Regex;

/// Angular commit types.
pub const ANGULAR_PREFIXES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "style", "test",
];

/// ESLint commit tags.
pub const ESLINT_PREFIXES: &[&str] = &[
    "Breaking", "Build", "Chore", "Docs", "Fix", "New", "Update", "Upgrade",
];

/// Gitmoji short-codes.
pub const GITMOJI_PREFIXES: &[&str] = &[
    "art",
    "zap",
    "fire",
    "bug",
    "ambulance",
    "sparkles",
    "memo",
    "rocket",
    "lipstick",
    "tada",
    "white_check_mark",
    "lock",
    "apple",
    "penguin",
    "checkered_flag",
    "robot",
    "green_apple",
    "bookmark",
    "rotating_light",
    "construction",
    "green_heart",
    "arrow_down",
    "arrow_up",
    "pushpin",
    "construction_worker",
    "chart_with_upwards_trend",
    "recycle",
    "heavy_minus_sign",
    "whale",
    "heavy_plus_sign",
    "wrench",
    "globe_with_meridians",
    "pencil2",
    "hankey",
    "rewind",
    "twisted_rightwards_arrows",
    "package",
    "alien",
    "truck",
    "page_facing_up",
    "boom",
    "bento",
    "ok_hand",
    "wheelchair",
    "bulb",
    "beers",
    "speech_balloon",
    "card_file_box",
    "loud_sound",
    "mute",
    "busts_in_silhouette",
    "children_crossing",
    "building_construction",
    "iphone",
    "clown_face",
    "egg",
    "see_no_evil",
    "camera_flash",
];

/// Leading emoji of gitmoji-style dependency updates.
pub const UPGRADE_EMOJI: char = '\u{2B06}';

/// Words of `words` absent from `other`, compared case-insensitively.
fn lowercase_difference(words: &[&str], other: &[&str]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .filter(|w| !other.iter().any(|o| o.eq_ignore_ascii_case(w)))
        .collect()
}

fn alternation<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

/// A word of the vocabulary immediately followed by `:` or `(`, anywhere in
/// the message.
fn tagged_word_pattern<S: AsRef<str>>(words: &[S]) -> Regex {
    Regex::new(&format!(r"(?i)(?:{})[:(]", alternation(words))).unwrap()
}

lazy_static! {
    /// Words that are angular commit types but not ESLint tags.
    pub static ref ANGULAR_ONLY_PREFIXES: Vec<String> =
        lowercase_difference(ANGULAR_PREFIXES, ESLINT_PREFIXES);

    /// Words that are ESLint tags but not angular commit types.
    pub static ref ESLINT_ONLY_PREFIXES: Vec<String> =
        lowercase_difference(ESLINT_PREFIXES, ANGULAR_PREFIXES);

    pub static ref ANGULAR_PATTERN: Regex = tagged_word_pattern(ANGULAR_PREFIXES);

    pub static ref ANGULAR_ONLY_PATTERN: Regex = tagged_word_pattern(ANGULAR_ONLY_PREFIXES.as_slice());

    pub static ref ESLINT_ONLY_PATTERN: Regex = tagged_word_pattern(ESLINT_ONLY_PREFIXES.as_slice());

    /// Angular or ESLint word followed by `:` or `(`.
    pub static ref SEMANTIC_PATTERN: Regex = {
        let words: Vec<&str> = ANGULAR_PREFIXES
            .iter()
            .chain(ESLINT_PREFIXES.iter())
            .copied()
            .collect();
        tagged_word_pattern(words.as_slice())
    };

    /// Message starting with an ESLint tag, case-sensitive.
    pub static ref ESLINT_START_PATTERN: Regex =
        Regex::new(&format!(r"^(?:{})[:(]", alternation(ESLINT_PREFIXES))).unwrap();

    /// A `:<short-code>:` anywhere in the message.
    pub static ref GITMOJI_PATTERN: Regex =
        Regex::new(&format!(r"(?i):(?:{}):", alternation(GITMOJI_PREFIXES))).unwrap();

    /// Message starting with a lowercase-initial token followed by `:`.
    pub static ref GENERIC_PREFIX_PATTERN: Regex = Regex::new(r"^[a-z]\S+:").unwrap();

    /// Conventional prefix of a previous automation commit, without scope.
    pub static ref PRIOR_CONVENTIONAL_PATTERN: Regex =
        Regex::new(r"(?i)^(?:chore|build|upgrade):").unwrap();

    /// Conventional prefix of a previous automation commit, with scope.
    pub static ref PRIOR_SCOPED_PATTERN: Regex =
        Regex::new(r"(?i)^(?:chore|build|upgrade)\(").unwrap();

    /// Capitalised subject (optionally after a security tag) in a previous
    /// automation commit.
    pub static ref PRIOR_CAPITALIZED_PATTERN: Regex =
        Regex::new(r": (?:\[Security\] )?(?:B|U)").unwrap();

    pub static ref UPPERCASE_SUBJECT_PATTERN: Regex = Regex::new(r":\s+\[?[A-Z]").unwrap();

    pub static ref LOWERCASE_SUBJECT_PATTERN: Regex = Regex::new(r":\s+\[?[a-z]").unwrap();
}
