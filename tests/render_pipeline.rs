//! End-to-end tests for the render pipeline: text in, decodable image
//! out, through the public `run` entry point.

use image::Rgba;
use textpic::{run, Palette, RenderConfig};

fn render_to_png(config: RenderConfig, args: &[&str]) -> image::RgbaImage {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let config = RenderConfig {
        out: path.to_str().unwrap().to_string(),
        ..config
    };
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    run(&config, &args).unwrap();
    image::open(&path).unwrap().to_rgba8()
}

#[test]
fn hello_renders_five_by_one() {
    let img = render_to_png(RenderConfig::default(), &["hello"]);
    assert_eq!((img.width(), img.height()), (5, 1));

    let palette = Palette::load("").unwrap();
    for (x, &b) in b"hello".iter().enumerate() {
        let px = *img.get_pixel(x as u32, 0);
        assert_eq!(px, palette.color(b));
        assert_ne!(px.0[3], 0, "in-range text must not be transparent");
        assert_ne!(px, Rgba([0, 0, 0, 255]), "in-range text must not be the marker");
    }
}

#[test]
fn multiple_args_join_with_spaces() {
    let img = render_to_png(RenderConfig::default(), &["ab", "cd"]);
    // "ab cd": 5 cells, the joining space transparent via the table
    assert_eq!((img.width(), img.height()), (5, 1));
    assert_eq!(*img.get_pixel(2, 0), Rgba([0, 0, 0, 0]));
}

#[test]
fn declared_width_pads_short_lines_transparent() {
    let config = RenderConfig {
        width: Some(8),
        ..Default::default()
    };
    let img = render_to_png(config, &["abc"]);
    assert_eq!(img.width(), 8);
    for x in 3..8 {
        assert_eq!(*img.get_pixel(x, 0), Rgba([0, 0, 0, 0]));
    }
}

#[test]
fn out_of_range_byte_renders_the_opaque_marker() {
    // 'ß' is 0xC3 0x9F, two bytes above 127 at columns 3 and 4
    let img = render_to_png(RenderConfig::default(), &["abcß"]);
    assert_eq!(img.width(), 5);
    assert_eq!(*img.get_pixel(3, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(*img.get_pixel(4, 0), Rgba([0, 0, 0, 255]));
    assert_ne!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn scaling_replicates_each_cell_as_a_block() {
    let unscaled = render_to_png(RenderConfig::default(), &["hi"]);
    let config = RenderConfig {
        scale: 4,
        ..Default::default()
    };
    let scaled = render_to_png(config, &["hi"]);

    assert_eq!((scaled.width(), scaled.height()), (8, 4));
    for y in 0..scaled.height() {
        for x in 0..scaled.width() {
            assert_eq!(
                scaled.get_pixel(x, y),
                unscaled.get_pixel(x / 4, y / 4),
                "scaled ({}, {}) must equal source ({}, {})",
                x,
                y,
                x / 4,
                y / 4
            );
        }
    }
}

#[test]
fn alternate_table_changes_the_colors() {
    let default_img = render_to_png(RenderConfig::default(), &["hi"]);
    let config = RenderConfig {
        table: "ueda".to_string(),
        ..Default::default()
    };
    let ueda_img = render_to_png(config, &["hi"]);
    assert_ne!(default_img.get_pixel(0, 0), ueda_img.get_pixel(0, 0));
}

#[test]
fn execute_mode_renders_command_output() {
    let config = RenderConfig {
        execute: true,
        ..Default::default()
    };
    // two lines of three characters each
    let img = render_to_png(config, &["printf 'abc\\ndef'"]);
    assert_eq!((img.width(), img.height()), (3, 2));
}

#[test]
fn gif_and_jpeg_destinations_encode() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["out.gif", "out.jpg"] {
        let path = dir.path().join(name);
        let config = RenderConfig {
            out: path.to_str().unwrap().to_string(),
            ..Default::default()
        };
        run(&config, &["hello".to_string()]).unwrap();
        assert!(image::open(&path).is_ok(), "{} must round-trip", name);
    }
}

#[test]
fn custom_palette_file_drives_the_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("table.png");
    let mut table = image::RgbaImage::new(16, 8);
    for (i, px) in table.pixels_mut().enumerate() {
        *px = Rgba([i as u8, 128, 0, 255]);
    }
    table.save(&table_path).unwrap();

    let config = RenderConfig {
        table: table_path.to_str().unwrap().to_string(),
        ..Default::default()
    };
    let img = render_to_png(config, &["A"]);
    assert_eq!(*img.get_pixel(0, 0), Rgba([b'A', 128, 0, 255]));
}
