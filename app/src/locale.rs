//! Device locale detection

/// The device locale tag, e.g. `it_IT.UTF-8` or `pl-PL`.
///
/// A configured override wins; otherwise the operating system locale is
/// used (`LC_ALL`, `LC_MESSAGES`, `LANG` on Unix). `C` and `POSIX` carry no
/// language and are skipped.
pub fn detect_device_locale(override_tag: Option<&str>) -> Option<String> {
    detect_with(override_tag, sys_locale::get_locale)
}

fn detect_with(
    override_tag: Option<&str>,
    system: impl FnOnce() -> Option<String>,
) -> Option<String> {
    if let Some(tag) = override_tag.map(str::trim).filter(|tag| !tag.is_empty()) {
        return Some(tag.to_string());
    }
    system()
        .map(|value| value.trim().to_string())
        .filter(|value| is_meaningful(value))
}

fn is_meaningful(value: &str) -> bool {
    let base = value.split('.').next().unwrap_or_default();
    !(base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_planner_shared::Language;
    use rstest::rstest;

    fn system(value: Option<&str>) -> impl FnOnce() -> Option<String> {
        let value = value.map(str::to_string);
        move || value
    }

    #[test]
    fn test_override_wins() {
        let detected = detect_with(Some("pl-PL"), system(Some("it_IT.UTF-8")));
        assert_eq!(detected.as_deref(), Some("pl-PL"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let detected = detect_with(Some("  "), system(Some("it_IT.UTF-8")));
        assert_eq!(detected.as_deref(), Some("it_IT.UTF-8"));
    }

    #[rstest]
    #[case(Some("pl_PL.UTF-8"), Some("pl_PL.UTF-8"))]
    #[case(Some(" it-IT "), Some("it-IT"))]
    #[case(Some("C"), None)]
    #[case(Some("C.UTF-8"), None)]
    #[case(Some("POSIX"), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn test_system_locale(#[case] value: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(detect_with(None, system(value)).as_deref(), expected);
    }

    #[test]
    fn test_detected_locale_resolves_language() {
        let detected = detect_with(None, system(Some("it_IT.UTF-8")));
        assert_eq!(Language::from_locale(detected.as_deref().unwrap_or("")), Language::It);
    }
}
