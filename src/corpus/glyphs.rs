//! Glyph cleanup for the Uthmani corpus text.
//!
//! Some marks render badly with common Arabic fonts: the small high rounded
//! zero over waw/alif and the sukoon over plain letters. They are stripped
//! with plain find-and-replace before the text is line counted.

/// Small high rounded zero
const SMALL_ZERO: char = '\u{06DF}';

/// Sukoon
const SUKOON: char = '\u{0652}';

/// Word joiner, keeps a following pause mark glued to its word
const WORD_JOINER: char = '\u{2060}';

/// Letters whose sukoon is dropped
const SUKOON_LETTERS: [char; 33] = [
    '\u{0627}', // alif
    '\u{0628}', // ba
    '\u{062A}', // ta
    '\u{062B}', // tha
    '\u{062C}', // jim
    '\u{062D}', // ha
    '\u{062E}', // kha
    '\u{062F}', // dal
    '\u{0630}', // dhal
    '\u{0631}', // ra
    '\u{0632}', // zay
    '\u{0633}', // sin
    '\u{0634}', // shin
    '\u{0635}', // sad
    '\u{0636}', // dad
    '\u{0637}', // ta (emphatic)
    '\u{0638}', // za (emphatic)
    '\u{0639}', // ain
    '\u{063A}', // ghain
    '\u{0641}', // fa
    '\u{0642}', // qaf
    '\u{0643}', // kaf
    '\u{0644}', // lam
    '\u{0645}', // mim
    '\u{0646}', // nun
    '\u{0647}', // ha
    '\u{0648}', // waw
    '\u{064A}', // ya
    '\u{0621}', // hamza
    '\u{0624}', // waw with hamza
    '\u{0625}', // alif with hamza below
    '\u{0649}', // alif maqsura
    '\u{0623}', // alif with hamza above
];

/// Small pause marks that get a word joiner in front
const SMALL_STOPS: [char; 4] = ['\u{06D6}', '\u{06D7}', '\u{06DA}', '\u{06D9}'];

/// A single find-and-replace pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

/// The cleanup table, in application order
pub fn substitution_table() -> Vec<Substitution> {
    let small_zero = ['\u{0648}', '\u{0627}'].into_iter().map(|letter| (letter, SMALL_ZERO));
    let sukoon = SUKOON_LETTERS.into_iter().map(|letter| (letter, SUKOON));

    small_zero
        .chain(sukoon)
        .map(|(letter, mark)| Substitution {
            from: [letter, mark].iter().collect(),
            to: letter.to_string(),
        })
        .collect()
}

/// Apply the substitution table to raw corpus text
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.to_string();
    for sub in substitution_table() {
        if cleaned.contains(sub.from.as_str()) {
            cleaned = cleaned.replace(sub.from.as_str(), &sub.to);
        }
    }
    cleaned
}

/// Insert a word joiner before each small pause mark
pub fn join_small_stops(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    for c in text.chars() {
        if SMALL_STOPS.contains(&c) {
            joined.push(WORD_JOINER);
        }
        joined.push(c);
    }
    joined
}
