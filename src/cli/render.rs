//! Render command implementation.
//!
//! Writes `<output>/<file stem>.png` for each stadium given. Output
//! directory and scale come from the flags, then `hbs.yaml` in the current
//! directory, then the defaults.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::parser::load;
use crate::render::{render_stadium, write_png};

/// Render a PNG preview of a stadium
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Stadium files to render
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer scale factor
    #[arg(long)]
    pub scale: Option<u32>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let manifest_path = Path::new(MANIFEST_FILENAME);
    let manifest = if manifest_path.is_file() {
        Manifest::load(manifest_path)?
    } else {
        Manifest::default()
    };

    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    let scale = args.scale.unwrap_or_else(|| manifest.effective_scale()).max(1);

    for file in &args.files {
        let written = render_file(file, &output, scale)?;
        printer.status("Rendered", &display_path(&written));
    }

    printer.status(
        "Finished",
        &format!("{} to {}", plural(args.files.len(), "preview", "previews"), display_path(&output)),
    );
    Ok(())
}

/// Render one stadium and return the PNG path.
pub fn render_file(file: &Path, output: &Path, scale: u32) -> Result<PathBuf> {
    let stadium = load(file)?;
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("stadium");
    let path = output.join(format!("{}.png", stem));

    let img = render_stadium(&stadium, scale)?;
    write_png(&img, &path)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_render_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tiny.hbs");
        fs::write(&file, r#"{ "name": "Tiny", "width": 20, "height": 10, "ballPhysics": {} }"#).unwrap();

        let out = dir.path().join("previews");
        let written = render_file(&file, &out, 2).unwrap();

        assert_eq!(written, out.join("tiny.png"));
        let img = image::open(&written).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (80, 40));
    }

    #[test]
    fn test_render_file_too_large() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("huge.hbs");
        fs::write(&file, r#"{ "name": "Huge", "width": 1e12, "height": 10, "ballPhysics": {} }"#).unwrap();

        let err = render_file(&file, dir.path(), 1).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::PreviewTooLarge);
        assert!(!dir.path().join("huge.png").exists());
    }

    #[test]
    fn test_render_file_parse_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("bad.hbs");
        fs::write(&file, "not json").unwrap();

        assert!(render_file(&file, dir.path(), 1).is_err());
        assert!(!dir.path().join("bad.png").exists());
    }
}
