use std::path::PathBuf;

use nuosc_logo::{LogoConfig, OUTPUT_FILE_NAME, encode_png, generate, render};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nuosc-logo-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_generate_writes_decodable_png() {
    let dir = scratch_dir("generate");
    let config = LogoConfig::default()
        .with_dpi(40.0)
        .with_output(dir.join(OUTPUT_FILE_NAME));

    let path = generate(&config).unwrap();
    assert!(path.exists());

    let img = image::open(&path).unwrap().to_rgba8();
    let (w, h) = img.dimensions();
    assert!(w > 0 && h > 0);
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(img.get_pixel(x, y).0, [255, 255, 255, 255], "corner ({x}, {y})");
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_render_is_deterministic() {
    let config = LogoConfig::default().with_dpi(30.0);
    let first = encode_png(&render(&config).unwrap()).unwrap();
    let second = encode_png(&render(&config).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_emblem_layers_are_painted() {
    let img = render(&LogoConfig::default().with_dpi(40.0)).unwrap();
    let has = |rgb: [u8; 3]| img.pixels().any(|p| p.0[..3] == rgb);
    assert!(has([0x46, 0x82, 0xB4]), "atmosphere");
    assert!(has([0x1E, 0x3A, 0x8A]), "outer layer");
    assert!(has([0xFF, 0xB3, 0x47]), "mantle");
    assert!(has([0x80, 0x00, 0x00]), "core");
    // first letter of the wordmark and the middle wave
    assert!(has([0xFF, 0x00, 0x00]), "red");
}
