//! Desktop wallpaper lookup and texture upload.
//!
//! The wallpaper path comes from thin per-platform probes — a spawned
//! `gsettings`/`osascript`/`reg` query, nothing linked in. Every failure
//! mode degrades to "no wallpaper available": the overlay then shows its
//! plain background fill instead of the see-through illusion, which is the
//! correct behavior on platforms we cannot query.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WallpaperError {
    #[error("failed to decode wallpaper {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Path of the current desktop wallpaper, or `None` when the platform has
/// no queryable wallpaper (or the query fails).
#[cfg(target_os = "linux")]
pub fn wallpaper_path() -> Option<PathBuf> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.background", "picture-uri"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    parse_gsettings_uri(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(target_os = "macos")]
pub fn wallpaper_path() -> Option<PathBuf> {
    let output = std::process::Command::new("osascript")
        .args([
            "-e",
            "tell application \"Finder\" to get POSIX path of (get desktop picture as alias)",
        ])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!path.is_empty()).then(|| PathBuf::from(path))
}

#[cfg(target_os = "windows")]
pub fn wallpaper_path() -> Option<PathBuf> {
    let output = std::process::Command::new("reg")
        .args(["query", r"HKCU\Control Panel\Desktop", "/v", "WallPaper"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    parse_reg_value(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn wallpaper_path() -> Option<PathBuf> {
    None
}

/// Extract a local path from `gsettings` output, which looks like
/// `'file:///home/user/wallpaper.png'`.
#[allow(dead_code)] // queried on GNOME only, parsing is tested everywhere
fn parse_gsettings_uri(raw: &str) -> Option<PathBuf> {
    let uri = raw.trim().trim_matches('\'');
    let path = uri.strip_prefix("file://").unwrap_or(uri);
    (!path.is_empty() && path.starts_with('/')).then(|| PathBuf::from(path))
}

/// Extract the value from `reg query` output, which looks like
/// `    WallPaper    REG_SZ    C:\path\img.jpg`.
#[allow(dead_code)] // queried on Windows only, parsing is tested everywhere
fn parse_reg_value(raw: &str) -> Option<PathBuf> {
    for line in raw.lines() {
        if let Some(idx) = line.find("REG_SZ") {
            let value = line[idx + "REG_SZ".len()..].trim();
            if !value.is_empty() {
                return Some(PathBuf::from(value));
            }
        }
    }
    None
}

/// Decode the wallpaper bitmap and upload it as an egui texture.
pub fn load_texture(ctx: &Context, path: &std::path::Path) -> Result<TextureHandle, WallpaperError> {
    let img = image::open(path).map_err(|source| WallpaperError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Ok(ctx.load_texture("wallpaper", color_image, TextureOptions::LINEAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gsettings_file_uri() {
        let path = parse_gsettings_uri("'file:///home/user/Pictures/bg.png'\n").unwrap();
        assert_eq!(path, PathBuf::from("/home/user/Pictures/bg.png"));
    }

    #[test]
    fn parses_gsettings_bare_path() {
        let path = parse_gsettings_uri("'/usr/share/backgrounds/default.jpg'").unwrap();
        assert_eq!(path, PathBuf::from("/usr/share/backgrounds/default.jpg"));
    }

    #[test]
    fn rejects_empty_and_relative_gsettings_values() {
        assert!(parse_gsettings_uri("''").is_none());
        assert!(parse_gsettings_uri("'none'").is_none());
    }

    #[test]
    fn parses_reg_query_output() {
        let raw = "\r\nHKEY_CURRENT_USER\\Control Panel\\Desktop\r\n    WallPaper    REG_SZ    C:\\Users\\u\\img.jpg\r\n";
        let path = parse_reg_value(raw).unwrap();
        assert_eq!(path, PathBuf::from("C:\\Users\\u\\img.jpg"));
    }

    #[test]
    fn rejects_reg_output_without_value() {
        assert!(parse_reg_value("ERROR: The system was unable to find the key").is_none());
    }
}
