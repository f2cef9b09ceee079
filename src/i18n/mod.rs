// ============================================================================
// TsCat - Internationalization
// ============================================================================
//
// File: src/i18n/mod.rs
// Responsibility: localization of the tool's own console messages
// Boundaries:
//   - ✅ Translation table selection by configured language
//   - ✅ Translation macros
//   - ✅ Parameterized translation support
//   - ❌ Should not contain translation content
//   - ❌ Should not contain catalog (.ts) handling
//
// ============================================================================

pub mod en_us;
pub mod es_es;

fn table(language: &str) -> &'static [(&'static str, &'static str)] {
    match language {
        "es_es" | "es" => es_es::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    }
}

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

/// Look up a message in `language`, then English, then echo the key.
pub fn translate(language: &str, key: &str) -> String {
    find(table(language), key)
        .or_else(|| find(en_us::TRANSLATIONS, key))
        .unwrap_or(key)
        .to_string()
}

/// Translation in the configured interface language
pub fn get_translation(key: &str) -> String {
    let language = get_language_from_config().unwrap_or_else(|| "en_us".to_string());
    translate(&language, key)
}

fn get_language_from_config() -> Option<String> {
    use crate::models::config::Config;

    Config::get_language().ok()
}

/// Simple translation macro
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// Replace `{}` placeholders in order
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut from = 0;
    for arg in args.iter() {
        match result[from..].find("{}") {
            Some(offset) => {
                let pos = from + offset;
                result.replace_range(pos..pos + 2, arg);
                from = pos + arg.len();
            }
            None => break,
        }
    }
    result
}

/// Translation macro with arguments
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_fill_placeholders_in_order() {
        let text = format_with_args("{} of {}".to_string(), vec!["3".into(), "7".into()]);
        assert_eq!(text, "3 of 7");
    }

    #[test]
    fn braces_inside_arguments_are_not_expanded() {
        let text = format_with_args("{} then {}".to_string(), vec!["{}".into(), "x".into()]);
        assert_eq!(text, "{} then x");
    }

    #[test]
    fn missing_spanish_entries_fall_back_to_english() {
        assert_eq!(translate("es_es", "check.all_good"), "El catálogo está limpio");
        assert_eq!(translate("fr", "check.all_good"), "Catalog is clean");
        assert_eq!(translate("es_es", "no.such.key"), "no.such.key");
    }

    #[test]
    fn every_spanish_key_exists_in_english() {
        for (key, _) in es_es::TRANSLATIONS {
            assert!(
                find(en_us::TRANSLATIONS, key).is_some(),
                "{} missing from en_us",
                key
            );
        }
    }
}
