// ============================================================================
// TsCat - Plural Rules
// ============================================================================
//
// File: src/models/plural.rs
// Responsibility: map a count to a numerus form index for a catalog language
// Boundaries:
//   - ✅ Per-language plural form selection
//   - ✅ Expected numerus form count per language
//   - ❌ Should not contain catalog lookup logic
//
// ============================================================================

/// Strip region and encoding suffixes: `es_ES.UTF-8` -> `es`.
fn base_language(language: &str) -> &str {
    language.split(['-', '_', '.']).next().unwrap_or(language)
}

fn is_brazilian(language: &str) -> bool {
    language.starts_with("pt_BR") || language.starts_with("pt-BR")
}

/// Index of the numerus form used for `count` in `language`.
///
/// Unknown languages use the Germanic rule (one singular form, one plural form),
/// which also covers Spanish, English, German, Italian and Dutch.
pub fn plural_form(language: &str, count: u64) -> usize {
    let n10 = count % 10;
    let n100 = count % 100;

    match base_language(language) {
        "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" | "fa" | "ka" => 0,

        "fr" => usize::from(count > 1),

        "pt" if is_brazilian(language) => usize::from(count > 1),

        "ru" | "uk" | "be" | "sr" | "hr" | "bs" => {
            if n10 == 1 && n100 != 11 {
                0
            } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                1
            } else {
                2
            }
        }

        "pl" => {
            if count == 1 {
                0
            } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                1
            } else {
                2
            }
        }

        "cs" | "sk" => {
            if count == 1 {
                0
            } else if (2..=4).contains(&count) {
                1
            } else {
                2
            }
        }

        "sl" => match n100 {
            1 => 0,
            2 => 1,
            3 | 4 => 2,
            _ => 3,
        },

        "ar" => {
            if count <= 2 {
                count as usize
            } else if (3..=10).contains(&n100) {
                3
            } else if n100 >= 11 {
                4
            } else {
                5
            }
        }

        _ => usize::from(count != 1),
    }
}

/// Number of numerus forms a translation into `language` is expected to carry.
pub fn form_count(language: &str) -> usize {
    match base_language(language) {
        "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" | "fa" | "ka" => 1,
        "ru" | "uk" | "be" | "sr" | "hr" | "bs" | "pl" | "cs" | "sk" => 3,
        "sl" => 4,
        "ar" => 6,
        _ => 2,
    }
}
