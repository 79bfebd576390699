//! Display language handling.
//!
//! Every route is prefixed with a language segment (`/tr/about`, `/en/about`).
//! The active [`Locale`] is resolved once per navigation from that first
//! segment and threaded down through component props; no other state carries
//! the language.

/// The active display language.
///
/// Bilingual fields on the content models come in `_tr`/`_en` pairs and the
/// selector picks one of them verbatim. There is no fallback to the other
/// language when the selected field is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Tr,
    En,
}

impl Locale {
    /// Parses a path segment (`"tr"` / `"en"`) into a locale.
    pub fn from_segment(segment: &str) -> Option<Locale> {
        match segment {
            "tr" => Some(Locale::Tr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// The segment used in routes and hrefs.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
        }
    }

    /// The other language, used by the language switcher.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::Tr => Locale::En,
            Locale::En => Locale::Tr,
        }
    }

    /// Selects the `_tr` or `_en` variant of a bilingual pair.
    pub fn pick<'a>(self, tr: &'a str, en: &'a str) -> &'a str {
        match self {
            Locale::Tr => tr,
            Locale::En => en,
        }
    }
}

/// Rewrites only the first path segment of `path` to the given locale,
/// preserving everything after it verbatim. `/tr/about` becomes `/en/about`.
pub fn switch_locale_path(path: &str, to: Locale) -> String {
    let mut segments = path.splitn(3, '/');
    segments.next(); // leading empty segment of an absolute path
    match (segments.next(), segments.next()) {
        (Some(first), Some(rest)) if !first.is_empty() => {
            format!("/{}/{}", to.as_str(), rest)
        }
        _ => format!("/{}", to.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_parsing() {
        assert_eq!(Locale::from_segment("tr"), Some(Locale::Tr));
        assert_eq!(Locale::from_segment("en"), Some(Locale::En));
        assert_eq!(Locale::from_segment("de"), None);
        assert_eq!(Locale::from_segment(""), None);
    }

    #[test]
    fn pick_returns_the_selected_field_exactly() {
        assert_eq!(Locale::Tr.pick("merhaba", "hello"), "merhaba");
        assert_eq!(Locale::En.pick("merhaba", "hello"), "hello");
        // a blank field stays blank, it is not replaced by the other locale
        assert_eq!(Locale::En.pick("merhaba", ""), "");
    }

    #[test]
    fn toggle_rewrites_only_the_first_segment() {
        assert_eq!(switch_locale_path("/tr/about", Locale::En), "/en/about");
        assert_eq!(switch_locale_path("/en/about", Locale::Tr), "/tr/about");
        assert_eq!(
            switch_locale_path("/tr/products/candles/red", Locale::En),
            "/en/products/candles/red"
        );
    }

    #[test]
    fn toggle_handles_bare_and_root_paths() {
        assert_eq!(switch_locale_path("/tr", Locale::En), "/en");
        assert_eq!(switch_locale_path("/", Locale::En), "/en");
        assert_eq!(switch_locale_path("", Locale::Tr), "/tr");
    }
}
