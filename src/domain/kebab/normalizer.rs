// src/domain/kebab/normalizer.rs

/// Turn free text into a kebab-case slug.
///
/// Words are separated by the ASCII space only. Every character that is not
/// an ASCII letter or digit is dropped from each word, words that end up
/// empty are discarded, and the survivors are lowercased and joined with a
/// single hyphen. Blank input yields an empty string.
pub fn kebabify(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let words: Vec<String> = input
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(clean_word)
        .filter(|word| !word.is_empty())
        .collect();

    words.join("-")
}

fn clean_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
