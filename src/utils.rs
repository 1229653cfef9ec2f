// SPDX-License-Identifier: GPL-3.0-only

/// Converts a raw PokéAPI measurement to the unit the answers use:
/// hectograms to kilograms, decimeters to meters. Both are a ×0.1 scale.
pub fn scale_measurement(raw: i64) -> f64 {
    (raw as f64) / 10.0
}

/// Transforms a kebab-case API name into a space-separated string where
/// each word starts with an uppercase letter.
pub fn capitalize_string(input: &str) -> String {
    input
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
