//! Kebab-case identifiers.
//!
//! The target format requires lowercase, hyphen-separated entity names.
//! Words are split on any non-alphanumeric character, on lower-to-upper
//! transitions (`bookFlight`), at the end of an acronym (`HTMLParser`) and
//! between letters and digits (`address1`).  Apostrophes are dropped without
//! splitting.

/// Convert an identifier or phrase to kebab-case.
pub fn kebab_case(input: &str) -> String {
    let chars: Vec<char> = input
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .collect();

    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_numeric() != c.is_numeric())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(char::is_lowercase));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}

/// The platform entity reference for a slot type, e.g. `City` -> `@city`.
pub fn entity_reference(slot_type: &str) -> String {
    format!("@{}", kebab_case(slot_type))
}
