use std::io::Write;
use std::time::Duration;

use serial_test::serial;
use tempfile::NamedTempFile;

use super::*;

#[test]
#[serial]
fn defaults_apply_without_file_or_env() {
    let settings = load().expect("settings");
    assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.api.timeout(), Duration::from_secs(15));
    assert_eq!(settings.lists.page_size, 10);
    assert_eq!(settings.lists.search_quiescence(), Duration::from_millis(400));
    assert_eq!(settings.logging.level, LogLevel::Info);
    assert_eq!(settings.logging.format, LogFormat::Compact);
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    unsafe {
        std::env::set_var("TASKCLASS_API__BASE_URL", "http://api.school.edu");
        std::env::set_var("TASKCLASS_LISTS__PAGE_SIZE", "25");
    }

    let settings = load().expect("settings");

    unsafe {
        std::env::remove_var("TASKCLASS_API__BASE_URL");
        std::env::remove_var("TASKCLASS_LISTS__PAGE_SIZE");
    }

    assert_eq!(settings.api.base_url, "http://api.school.edu");
    assert_eq!(settings.lists.page_size, 25);
}

#[test]
#[serial]
fn file_settings_load_with_defaults_for_the_rest() {
    let mut file = NamedTempFile::with_suffix(".toml").expect("tmp file");
    writeln!(
        file,
        "[api]\nbase_url = \"http://file.school.edu\"\n\n[logging]\nlevel = \"debug\"\nformat = \"json\""
    )
    .expect("write tmp");

    let settings = load_from(file.path()).expect("settings");
    assert_eq!(settings.api.base_url, "http://file.school.edu");
    assert_eq!(settings.logging.level, LogLevel::Debug);
    assert_eq!(settings.logging.format, LogFormat::Json);
    // Sections the file omits still come from defaults.
    assert_eq!(settings.lists.page_size, 10);
}
