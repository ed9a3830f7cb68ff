//! Case conversion helpers shared by the naming convention and the resolver.

/// Upper-case the first character, leaving the rest untouched.
pub fn init_cap(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn init_uncap(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase words of a camel-case identifier.
///
/// A boundary is placed before an uppercase letter that follows a lowercase
/// letter or digit, and before the last letter of an uppercase run when a
/// lowercase letter follows it, so acronyms stay whole:
/// `memberCSVList` gives `member`, `csv`, `list`.
pub fn camel_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut word = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower);
            if boundary && !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
        }
        word.extend(c.to_lowercase());
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}

/// Split a camel-case identifier into lowercase words joined by `delimiter`.
pub fn decamelize(name: &str, delimiter: &str) -> String {
    camel_words(name).join(delimiter)
}

/// Rebuild a camel-case name from its words, the way request path words are
/// folded back into class names: first word lowercase, the rest capitalized.
///
/// `MemberCSVList` becomes `memberCsvList` and `CSVExport` becomes `csvExport`.
pub fn fold_camel(name: &str) -> String {
    camel_words(name)
        .iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { word.clone() } else { init_cap(word) })
        .collect()
}
