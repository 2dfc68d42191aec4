use image::Rgba;
use tempfile::TempDir;
use veda_icon_gen::config::IconConfig;
use veda_icon_gen::icon_gen::{
    generate_icons, render_app_icon, render_foreground_icon, HeartGeometry,
};

fn config_in(dir: &std::path::Path, size: u32) -> IconConfig {
    IconConfig::builtin()
        .expect("built-in config should parse")
        .with_size(size)
        .with_output_dir(dir)
}

#[test]
fn test_app_icon_center_is_opaque() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path(), 1024);

    let path = render_app_icon(&config).expect("render app icon");
    let img = image::open(&path).unwrap().to_rgba8();

    assert_eq!(img.dimensions(), (1024, 1024));
    assert_eq!(img.get_pixel(512, 512)[3], 255);
    assert_eq!(*img.get_pixel(512, 512), Rgba([255, 255, 255, 255]));
    // Flat background disc, left of the heart
    assert_eq!(*img.get_pixel(250, 512), Rgba([108, 99, 255, 255]));
}

#[test]
fn test_foreground_is_clear_outside_heart() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(temp_dir.path(), 1024);

    let path = render_foreground_icon(&config).expect("render foreground icon");
    let img = image::open(&path).unwrap().to_rgba8();
    let bounds = HeartGeometry::for_size(1024).bounds();

    for (x, y) in [(0, 0), (1023, 1023), (512, 100), (100, 512), (512, 900)] {
        assert!(!bounds.contains(x, y));
        assert_eq!(img.get_pixel(x as u32, y as u32)[3], 0, "({}, {})", x, y);
    }
    assert_eq!(img.get_pixel(512, 512)[3], 255);
}

#[test]
fn test_render_fails_without_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("not-created");
    let config = config_in(&missing, 64);

    let err = render_app_icon(&config).unwrap_err();
    assert!(err.to_string().contains("does not exist"), "{:#}", err);

    let err = render_foreground_icon(&config).unwrap_err();
    assert!(err.to_string().contains("does not exist"), "{:#}", err);
    assert!(!missing.exists());
}

#[test]
fn test_generate_icons_creates_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let icon_dir = temp_dir.path().join("assets").join("icon");
    let config = config_in(&icon_dir, 96);

    generate_icons(&config).expect("generate icons");

    for name in ["app_icon.png", "app_icon_foreground.png"] {
        let img = image::open(icon_dir.join(name)).unwrap();
        assert_eq!((img.width(), img.height()), (96, 96));
    }
}

#[test]
fn test_invalid_palette_stops_rendering() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_in(temp_dir.path(), 64);
    config.palette.primary = "#GGGGGG".to_string();

    assert!(render_app_icon(&config).is_err());
    assert!(!temp_dir.path().join("app_icon.png").exists());
}
