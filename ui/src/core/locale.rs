//! Supported site locales and the image variant derived from a locale tag.

use std::fmt;

use unic_langid::LanguageIdentifier;

/// Closed set of locales the site is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    ZhHant,
    ZhHans,
}

impl Locale {
    /// Every supported locale, in the order the locale switcher lists them.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::ZhHant, Locale::ZhHans];

    /// Locale used whenever a tag is missing or unsupported.
    pub const DEFAULT: Locale = Locale::En;

    /// Parse a route segment. Matching is exact (`"zh-hant"` is not supported).
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Self::En),
            "zh-Hant" => Some(Self::ZhHant),
            "zh-Hans" => Some(Self::ZhHans),
            _ => None,
        }
    }

    /// Like [`Locale::parse`] but falls back to [`Locale::DEFAULT`].
    pub fn resolve(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(Self::DEFAULT)
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhHant => "zh-Hant",
            Self::ZhHans => "zh-Hans",
        }
    }

    /// Label shown in the locale switcher, written in the locale itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::ZhHant => "繁體中文",
            Self::ZhHans => "简体中文",
        }
    }

    /// Dense index into per-locale tables (`Locale::ALL[l.index()] == l`).
    pub fn index(self) -> usize {
        match self {
            Self::En => 0,
            Self::ZhHant => 1,
            Self::ZhHans => 2,
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        self.tag()
            .parse()
            .expect("locale tags are valid language identifiers")
    }

    /// Map an OS/browser language preference onto a supported locale.
    ///
    /// Chinese without an explicit script is decided by region: Taiwan, Hong Kong
    /// and Macau use traditional script, everything else simplified.
    pub fn from_language_id(id: &LanguageIdentifier) -> Option<Self> {
        match id.language.as_str() {
            "en" => Some(Self::En),
            "zh" => match id.script.as_ref().map(|s| s.as_str()) {
                Some("Hant") => Some(Self::ZhHant),
                Some("Hans") => Some(Self::ZhHans),
                _ => match id.region.as_ref().map(|r| r.as_str()) {
                    Some("TW" | "HK" | "MO") => Some(Self::ZhHant),
                    _ => Some(Self::ZhHans),
                },
            },
            _ => None,
        }
    }

    /// Image folder variant for this locale. See [`Variant::for_tag`].
    pub fn variant(self) -> Variant {
        Variant::for_tag(self.tag())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Script-dependent image set. Course slides exist in two renditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Simplified-script slides.
    G,
    /// Default slides.
    P,
}

impl Variant {
    /// Derived from the raw locale tag, so unsupported tags land on `P`
    /// even though their text falls back to English.
    pub fn for_tag(tag: &str) -> Self {
        if tag == "zh-Hans" {
            Self::G
        } else {
            Self::P
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::G => "G",
            Self::P => "P",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact() {
        assert_eq!(Locale::parse("zh-Hans"), Some(Locale::ZhHans));
        assert_eq!(Locale::parse("zh-hans"), None);
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn unsupported_locale_resolves_to_english_with_default_variant() {
        assert_eq!(Locale::resolve("fr"), Locale::En);
        assert_eq!(Variant::for_tag("fr"), Variant::P);
    }

    #[test]
    fn only_simplified_chinese_uses_variant_g() {
        assert_eq!(Locale::ZhHans.variant(), Variant::G);
        assert_eq!(Locale::ZhHant.variant(), Variant::P);
        assert_eq!(Locale::En.variant(), Variant::P);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, locale) in Locale::ALL.iter().enumerate() {
            assert_eq!(locale.index(), i);
        }
    }

    #[test]
    fn language_ids_round_trip_through_tags() {
        for locale in Locale::ALL {
            assert_eq!(locale.language_id().to_string(), locale.tag());
            assert_eq!(Locale::from_language_id(&locale.language_id()), Some(locale));
        }
    }

    #[test]
    fn os_preferences_map_by_script_then_region() {
        let tw: LanguageIdentifier = "zh-TW".parse().unwrap();
        let cn: LanguageIdentifier = "zh-CN".parse().unwrap();
        let us: LanguageIdentifier = "en-US".parse().unwrap();
        let de: LanguageIdentifier = "de-DE".parse().unwrap();
        assert_eq!(Locale::from_language_id(&tw), Some(Locale::ZhHant));
        assert_eq!(Locale::from_language_id(&cn), Some(Locale::ZhHans));
        assert_eq!(Locale::from_language_id(&us), Some(Locale::En));
        assert_eq!(Locale::from_language_id(&de), None);
    }
}
