//! Localized operator labels
//!
//! Strings are embedded; unknown locales and missing ids fall back to English.

use std::env;

/// Supported UI locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    EnUs,
    ZhTw,
    JaJp,
}

impl Locale {
    /// Parse a POSIX-style locale such as `ja_JP.UTF-8` or `zh-TW`.
    pub fn parse(value: &str) -> Option<Self> {
        let tag = value
            .split(&['.', '@'][..])
            .next()
            .unwrap_or_default()
            .replace('-', "_");
        match tag.as_str() {
            "en" | "en_US" | "C" | "POSIX" => Some(Self::EnUs),
            "zh_TW" | "zh_Hant" | "zh_HK" => Some(Self::ZhTw),
            "ja" | "ja_JP" => Some(Self::JaJp),
            _ => None,
        }
    }

    /// Locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, first non-empty wins
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Configured locale if it parses, otherwise the environment's
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured.map(|c| (c, Self::parse(c))) {
            Some((_, Some(locale))) => locale,
            Some((raw, None)) => {
                tracing::warn!("Unknown locale '{}' in config, using environment", raw);
                Self::from_env()
            }
            None => Self::from_env(),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::ZhTw => "zh_TW",
            Self::JaJp => "ja_JP",
        }
    }
}

const EN_US: &[(&str, &str)] = &[
    ("panel-label", "Pseudo Vertical Writing"),
    ("to-vertical-label", "To pseudo vertical"),
    ("to-vertical-description", "Convert to vertical writing"),
    ("to-horizontal-label", "Back to horizontal"),
    (
        "to-horizontal-description",
        "Convert back to horizontal writing, when editing can actually be done",
    ),
    ("toggle-label", "Toggle vertical writing"),
];

const ZH_TW: &[(&str, &str)] = &[
    ("panel-label", "偽直書"),
    ("to-vertical-label", "轉換成直書"),
    ("to-vertical-description", "在對的地方換行，模擬直書"),
    ("to-horizontal-label", "恢復成橫書"),
    ("to-horizontal-description", "恢復成橫書方便編輯"),
];

const JA_JP: &[(&str, &str)] = &[
    ("panel-label", "縦書き変換"),
    ("to-vertical-label", "縦書き（仮）に"),
    ("to-vertical-description", "改行することで縦書きを擬態する"),
    ("to-horizontal-label", "横書きに"),
    ("to-horizontal-description", "編集するため横書きに戻す"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::EnUs => EN_US,
        Locale::ZhTw => ZH_TW,
        Locale::JaJp => JA_JP,
    }
}

fn lookup(locale: Locale, id: &str) -> Option<&'static str> {
    table(locale)
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, value)| *value)
}

/// Translation for `id`, falling back to English, then to the id itself.
pub fn t(locale: Locale, id: &str) -> String {
    lookup(locale, id)
        .or_else(|| lookup(Locale::EnUs, id))
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_variants() {
        assert_eq!(Locale::parse("ja_JP.UTF-8"), Some(Locale::JaJp));
        assert_eq!(Locale::parse("zh-TW"), Some(Locale::ZhTw));
        assert_eq!(Locale::parse("en_US.utf8@euro"), Some(Locale::EnUs));
        assert_eq!(Locale::parse("C"), Some(Locale::EnUs));
        assert_eq!(Locale::parse("fr_FR.UTF-8"), None);
    }

    #[test]
    fn test_translations() {
        assert_eq!(t(Locale::JaJp, "to-horizontal-label"), "横書きに");
        assert_eq!(t(Locale::ZhTw, "panel-label"), "偽直書");
        assert_eq!(t(Locale::EnUs, "to-vertical-label"), "To pseudo vertical");
    }

    #[test]
    fn test_falls_back_to_english() {
        assert_eq!(t(Locale::JaJp, "toggle-label"), "Toggle vertical writing");
        assert_eq!(t(Locale::ZhTw, "no-such-id"), "no-such-id");
    }

    #[test]
    fn test_every_locale_has_the_core_labels() {
        for locale in [Locale::EnUs, Locale::ZhTw, Locale::JaJp] {
            for id in [
                "panel-label",
                "to-vertical-label",
                "to-vertical-description",
                "to-horizontal-label",
                "to-horizontal-description",
            ] {
                assert!(lookup(locale, id).is_some(), "{} missing {}", locale.code(), id);
            }
        }
    }

    #[test]
    fn test_resolve_prefers_config() {
        assert_eq!(Locale::resolve(Some("zh_TW")), Locale::ZhTw);
    }
}
