use crate::error::QuizError;
use crate::extraction::OcrEngine;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Raster resolution handed to pdftoppm. 200 dpi is enough for tesseract
/// to read ordinary print without blowing up render time.
const RASTER_DPI: u32 = 200;

/// OCR backend that rasterizes one page with pdftoppm and reads the image
/// with tesseract. Both tools must be on the PATH.
pub struct TesseractOcr {
    language: Option<String>,
}

impl TesseractOcr {
    pub fn new() -> Self {
        TesseractOcr { language: None }
    }

    /// Set the tesseract language pack (e.g. "eng", "deu").
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Check if both pdftoppm and tesseract are available on the system.
    pub fn is_available() -> bool {
        command_available("pdftoppm", "-v") && command_available("tesseract", "--version")
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

fn command_available(name: &str, version_arg: &str) -> bool {
    Command::new(name)
        .arg(version_arg)
        .output()
        .map(|o| o.status.success() || !o.stderr.is_empty())
        .unwrap_or(false)
}

impl OcrEngine for TesseractOcr {
    fn recognize_page(&self, pdf_bytes: &[u8], page_number: usize) -> Result<String, QuizError> {
        let mut pdf_file =
            tempfile::NamedTempFile::new().map_err(|e| QuizError::Extraction(e.to_string()))?;
        pdf_file
            .write_all(pdf_bytes)
            .map_err(|e| QuizError::Extraction(e.to_string()))?;

        let raster_dir =
            tempfile::tempdir().map_err(|e| QuizError::Extraction(e.to_string()))?;
        let prefix = raster_dir.path().join("page");

        let page_arg = page_number.to_string();
        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(RASTER_DPI.to_string())
            .arg("-f")
            .arg(&page_arg)
            .arg("-l")
            .arg(&page_arg)
            .arg(pdf_file.path())
            .arg(&prefix)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    QuizError::OcrToolsNotFound
                } else {
                    QuizError::Extraction(format!("pdftoppm failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(QuizError::OcrFailed { code, stderr });
        }

        let image_path = find_rendered_image(raster_dir.path())?;

        let mut tesseract = Command::new("tesseract");
        tesseract.arg(&image_path).arg("stdout");
        if let Some(lang) = &self.language {
            tesseract.arg("-l").arg(lang);
        }
        let output = tesseract.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuizError::OcrToolsNotFound
            } else {
                QuizError::Extraction(format!("tesseract failed: {}", e))
            }
        })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(QuizError::OcrFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn engine_name(&self) -> &str {
        "tesseract"
    }
}

/// pdftoppm zero-pads the page number in the output file name depending on
/// the document's page count, so scan the directory instead of guessing
/// the exact name.
fn find_rendered_image(dir: &Path) -> Result<PathBuf, QuizError> {
    let mut images: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| QuizError::Extraction(e.to_string()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("png"))
                .unwrap_or(false)
        })
        .collect();
    images.sort();
    images
        .into_iter()
        .next()
        .ok_or_else(|| QuizError::Extraction("pdftoppm produced no page image".to_string()))
}
