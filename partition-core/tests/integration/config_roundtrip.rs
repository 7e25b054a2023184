//! Settings files on disk and the stores they configure

use partition_core::config::{ColorMode, ConfigManager, Settings};
use partition_core::partition::{Color, PartitionStore, SplitDirection};

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().join("partition"));

    let mut settings = Settings::default();
    settings.layout.snap_points = vec![33.0, 66.0];
    settings.layout.gutter = 2.0;
    settings.colors.palette = vec![Color::from_hex(0xff0000), Color::from_hex(0x00ff00)];

    manager.save_settings(&settings).unwrap();
    let loaded = manager.load_settings().unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn hand_written_file_configures_store_colors() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    manager.ensure_config_dir().unwrap();
    std::fs::write(
        manager.settings_path(),
        r##"
[colors]
palette = ["#101010", "#202020"]
"##,
    )
    .unwrap();

    let settings = manager.load_settings().unwrap();
    assert_eq!(settings.colors.mode, ColorMode::Palette);

    let mut store = PartitionStore::with_colors(settings.colors.build_source());
    assert_eq!(store.root().color, Color::from_hex(0x101010));
    let root_id = store.root().id;
    store.split(root_id, SplitDirection::Vertical);
    let pair = store.root().as_split().unwrap();
    assert_eq!(pair.first.color, Color::from_hex(0x101010));
    assert_eq!(pair.second.color, Color::from_hex(0x202020));
}

#[test]
fn seeded_random_colors_are_reproducible() {
    let mut settings = Settings::default();
    settings.colors.mode = ColorMode::Random;
    settings.colors.seed = Some(99);

    let mut a = PartitionStore::with_colors(settings.colors.build_source());
    let mut b = PartitionStore::with_colors(settings.colors.build_source());
    assert_eq!(a.root().color, b.root().color);

    let (ra, rb) = (a.root().id, b.root().id);
    a.split(ra, SplitDirection::Horizontal);
    b.split(rb, SplitDirection::Horizontal);
    assert_eq!(
        a.root().as_split().unwrap().second.color,
        b.root().as_split().unwrap().second.color
    );
}
