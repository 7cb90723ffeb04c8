/// Environment variables consulted for the locale, in priority order
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Normalize a locale name such as `he_IL.UTF-8` or `de_DE@euro` to `he_IL` / `de_DE`.
///
/// `C` and `POSIX` mean "no locale" and yield `None`.
pub fn normalize_locale(raw: &str) -> Option<String> {
    let name = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }

    Some(name)
}

/// Pick the active locale: the explicit value first, then the environment
pub fn resolve_locale(explicit: Option<&str>) -> Option<String> {
    resolve_locale_with(explicit, |var| std::env::var(var).ok())
}

pub(crate) fn resolve_locale_with<F>(explicit: Option<&str>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(locale) = explicit.and_then(normalize_locale) {
        return Some(locale);
    }

    LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find_map(|value| normalize_locale(&value))
}

/// Locale names to try when looking for a catalog, most specific first
pub fn fallback_chain(locale: &str) -> Vec<String> {
    let mut chain = vec![locale.to_string()];

    if let Some((language, _)) = locale.split_once('_') {
        if !language.is_empty() {
            chain.push(language.to_string());
        }
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("he_IL.UTF-8"), Some("he_IL".to_string()));
        assert_eq!(normalize_locale("de_DE@euro"), Some("de_DE".to_string()));
        assert_eq!(normalize_locale("pt-BR"), Some("pt_BR".to_string()));
        assert_eq!(normalize_locale("fr"), Some("fr".to_string()));
        assert_eq!(normalize_locale("C"), None);
        assert_eq!(normalize_locale("POSIX"), None);
        assert_eq!(normalize_locale("  "), None);
    }

    #[test]
    fn test_explicit_locale_wins() {
        let env: HashMap<&str, &str> = [("LANG", "fr_FR.UTF-8")].into_iter().collect();
        let locale = resolve_locale_with(Some("he_IL"), |var| env.get(var).map(|v| v.to_string()));
        assert_eq!(locale, Some("he_IL".to_string()));
    }

    #[test]
    fn test_environment_priority() {
        let env: HashMap<&str, &str> = [("LANG", "fr_FR.UTF-8"), ("LC_MESSAGES", "es_ES.UTF-8")]
            .into_iter()
            .collect();
        let locale = resolve_locale_with(None, |var| env.get(var).map(|v| v.to_string()));
        assert_eq!(locale, Some("es_ES".to_string()));
    }

    #[test]
    fn test_c_locale_falls_through() {
        let env: HashMap<&str, &str> = [("LC_ALL", "C"), ("LANG", "it_IT.UTF-8")].into_iter().collect();
        let locale = resolve_locale_with(None, |var| env.get(var).map(|v| v.to_string()));
        assert_eq!(locale, Some("it_IT".to_string()));

        assert_eq!(resolve_locale_with(None, |_| None), None);
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(fallback_chain("he_IL"), vec!["he_IL", "he"]);
        assert_eq!(fallback_chain("he"), vec!["he"]);
    }
}
