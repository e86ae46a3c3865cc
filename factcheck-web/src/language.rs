use std::collections::HashMap;

/// Catalog used before the viewer picks a language.
pub const DEFAULT_LANGUAGE: &str = "zh-TW";

/// Information about a supported language
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "zh-TW",
            LanguageInfo {
                code: "zh-TW",
                translation: include_str!("../translations/zh-TW.json"),
                native_name: "正體中文",
            },
        ),
    ])
}
