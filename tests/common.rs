#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a small gradient so encoders have real pixels to work with.
pub fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let format = ImageFormat::from_path(&path).unwrap();
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 128])
    });
    DynamicImage::ImageRgb8(img)
        .save_with_format(&path, format)
        .unwrap();
    path
}

/// `images/` with three images (one nested) and a text file.
pub fn create_image_tree(root: &Path) -> PathBuf {
    let source = root.join("images");
    let nested = source.join("holiday");
    fs::create_dir_all(&nested).unwrap();

    write_image(&source, "beach.png", 16, 10);
    write_image(&source, "forest.jpg", 12, 12);
    write_image(&nested, "sunset.jpeg", 9, 5);
    fs::write(source.join("notes.txt"), b"not an image").unwrap();

    source
}

pub fn output_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
