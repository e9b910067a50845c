//! Display label formatting
//!
//! Hub keys and ids are snake_case (`rgb_color`, `light.kitchen_lamp`).
//! These helpers turn them into labels a frontend can show as-is.

/// Title-case a string: every cased letter that follows an uncased character
/// is upper-cased, every other letter is lower-cased.
///
/// Digits and punctuation count as word boundaries, so `"light.kitchen"`
/// becomes `"Light.Kitchen"` and `"2nd floor"` becomes `"2Nd Floor"`.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_cased = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_cased {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_cased = true;
        } else {
            output.push(ch);
            previous_cased = false;
        }
    }

    output
}

/// Capitalize each space-separated word: first character upper-cased,
/// the rest lower-cased.
pub fn capitalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace underscores with spaces and title-case the result
pub fn humanize_key(key: &str) -> String {
    title_case(&key.replace('_', " "))
}
