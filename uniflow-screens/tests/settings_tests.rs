use pretty_assertions::assert_eq;
use std::sync::Arc;
use uniflow_screens::{InMemorySettingsStore, LanguageCode, Settings, SettingsStore, ThemeMode};

fn settings() -> (Settings, Arc<InMemorySettingsStore>) {
    let store = Arc::new(InMemorySettingsStore::new());
    (Settings::new(Arc::clone(&store) as Arc<dyn SettingsStore>), store)
}

#[test]
fn fresh_store_yields_defaults() {
    let (settings, _) = settings();
    assert_eq!(settings.theme().unwrap(), ThemeMode::System);
    assert_eq!(settings.language().unwrap(), LanguageCode::Ko);
}

#[test]
fn theme_round_trips() {
    let (settings, _) = settings();
    settings.set_theme(ThemeMode::Dark).unwrap();
    assert_eq!(settings.theme().unwrap(), ThemeMode::Dark);
    settings.set_theme(ThemeMode::Light).unwrap();
    assert_eq!(settings.theme().unwrap(), ThemeMode::Light);
}

#[test]
fn language_round_trips() {
    let (settings, _) = settings();
    settings.set_language(LanguageCode::Ja).unwrap();
    assert_eq!(settings.language().unwrap(), LanguageCode::Ja);
}

#[test]
fn unrecognized_stored_values_fall_back_to_defaults() {
    let (settings, store) = settings();
    store.put_string("settings.theme_mode", "sepia").unwrap();
    store.put_string("settings.language_code", "fr").unwrap();
    assert_eq!(settings.theme().unwrap(), ThemeMode::System);
    assert_eq!(settings.language().unwrap(), LanguageCode::Ko);
}

#[test]
fn remove_restores_the_default() {
    let (settings, store) = settings();
    settings.set_theme(ThemeMode::Dark).unwrap();
    store.remove("settings.theme_mode").unwrap();
    assert_eq!(settings.theme().unwrap(), ThemeMode::System);
}

#[test]
fn enum_string_values_round_trip() {
    for mode in [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(ThemeMode::from_value(Some(mode.value())), mode);
    }
    for code in [LanguageCode::Ko, LanguageCode::En, LanguageCode::Ja] {
        assert_eq!(LanguageCode::from_value(Some(code.value())), code);
    }
    assert_eq!(ThemeMode::from_value(None), ThemeMode::System);
    assert_eq!(LanguageCode::from_value(None), LanguageCode::Ko);
}
