use counter_app::i18n::{Localizer, DEFAULT_LOCALE, SUPPORTED_LOCALES};

#[test]
fn supported_locales_resolve_to_themselves() {
    for locale in SUPPORTED_LOCALES {
        assert_eq!(Localizer::new(locale).locale(), locale);
    }
}

#[test]
fn translated_strings_differ_from_english() {
    let english = Localizer::new("en");
    for locale in ["ar", "es", "hi", "zh"] {
        let localized = Localizer::new(locale);
        assert_ne!(
            localized.strings().increase,
            english.strings().increase,
            "{locale} increase label"
        );
    }
    assert_eq!(Localizer::new("es").strings().decrease, "Disminuir");
}

#[test]
fn unknown_locale_falls_back_to_english() {
    let localizer = Localizer::new("fr");
    assert_eq!(localizer.locale(), DEFAULT_LOCALE);
    assert_eq!(localizer.strings().increase, "Increase");
}

#[test]
fn system_style_identifiers_are_accepted() {
    assert_eq!(Localizer::new("es_MX.UTF-8").locale(), "es");
    assert_eq!(Localizer::new("zh-CN").locale(), "zh");
}

#[test]
fn configured_locale_wins_over_environment() {
    assert_eq!(Localizer::resolve(Some("ar")).locale(), "ar");
}
