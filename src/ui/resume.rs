// SPDX-License-Identifier: MPL-2.0
//! Resume download.
//!
//! Copies a bundled `resume.pdf` into the download directory, or writes a
//! short plain-text resume built from the profile when no PDF is bundled.

use crate::config::{ProfileConfig, ResumeSection};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the bundled resume inside the asset directory.
pub const BUNDLED_RESUME: &str = "resume.pdf";

pub const DOWNLOADED_MESSAGE: &str = "📄 Resume downloaded successfully!";
pub const GENERATED_MESSAGE: &str = "📄 Temporary resume generated and downloaded!";
pub const FAILED_MESSAGE: &str = "Could not save the resume. Please try again.";

/// Owner name used when the profile has none.
const FALLBACK_OWNER: &str = "Portfolio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeSource {
    /// A PDF shipped with the page.
    Bundled(PathBuf),
    /// No PDF available; a text resume is generated from the profile.
    Generated,
}

impl ResumeSource {
    #[must_use]
    pub fn resolve(asset_dir: &Path) -> Self {
        let bundled = asset_dir.join(BUNDLED_RESUME);
        if bundled.is_file() {
            ResumeSource::Bundled(bundled)
        } else {
            ResumeSource::Generated
        }
    }

    /// File name offered to the visitor.
    #[must_use]
    pub fn file_name(&self, profile: &ProfileConfig) -> String {
        let owner = owner_slug(profile);
        match self {
            ResumeSource::Bundled(_) => format!("{owner}_Resume.pdf"),
            ResumeSource::Generated => format!("{owner}_Resume_Temp.txt"),
        }
    }

    /// Toast text reported after a successful download.
    #[must_use]
    pub fn success_message(&self) -> &'static str {
        match self {
            ResumeSource::Bundled(_) => DOWNLOADED_MESSAGE,
            ResumeSource::Generated => GENERATED_MESSAGE,
        }
    }
}

/// Saves the resume into `download_dir` and returns the written path.
pub fn download(
    source: &ResumeSource,
    download_dir: &Path,
    profile: &ProfileConfig,
) -> Result<PathBuf> {
    fs::create_dir_all(download_dir)?;
    let target = download_dir.join(source.file_name(profile));
    match source {
        ResumeSource::Bundled(pdf) => {
            fs::copy(pdf, &target)?;
        }
        ResumeSource::Generated => {
            fs::write(&target, temporary_resume(profile))?;
        }
    }
    tracing::info!(path = %target.display(), "resume saved");
    Ok(target)
}

/// Plain-text stand-in for the PDF resume.
#[must_use]
pub fn temporary_resume(profile: &ProfileConfig) -> String {
    let mut text = owner_name(profile).to_uppercase();
    text.push('\n');
    for line in [&profile.headline, &profile.email].into_iter().flatten() {
        text.push_str(line.trim());
        text.push('\n');
    }
    for section in &profile.sections {
        push_section(&mut text, section);
    }
    text.push_str("\nThis is a temporary resume. Please contact me for the full version.\n");
    text
}

fn push_section(text: &mut String, section: &ResumeSection) {
    text.push('\n');
    text.push_str(&section.title.trim().to_uppercase());
    text.push('\n');
    for line in &section.lines {
        text.push_str(line);
        text.push('\n');
    }
}

/// Trimmed owner name, or the fallback when the profile has none.
fn owner_name(profile: &ProfileConfig) -> &str {
    profile
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_OWNER)
}

fn owner_slug(profile: &ProfileConfig) -> String {
    owner_name(profile)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn profile() -> ProfileConfig {
        ProfileConfig {
            name: Some("Ada  Lovelace".into()),
            headline: Some("Analytical Engineer".into()),
            email: Some("ada@example.com".into()),
            sections: vec![
                ResumeSection {
                    title: "Experience".into(),
                    lines: vec!["Analyst, Babbage & Co | 1842 - 1843".into()],
                },
                ResumeSection {
                    title: "SKILLS".into(),
                    lines: vec!["Programming: Notes on the Engine".into()],
                },
            ],
        }
    }

    #[test]
    fn bundled_pdf_is_copied_under_owner_name() {
        let assets = tempdir().unwrap();
        let downloads = tempdir().unwrap();
        fs::write(assets.path().join(BUNDLED_RESUME), b"%PDF-1.7").unwrap();

        let source = ResumeSource::resolve(assets.path());
        assert!(matches!(source, ResumeSource::Bundled(_)));

        let path = download(&source, downloads.path(), &profile()).unwrap();
        assert_eq!(path.file_name().unwrap(), "Ada_Lovelace_Resume.pdf");
        assert_eq!(fs::read(path).unwrap(), b"%PDF-1.7");
        assert_eq!(source.success_message(), DOWNLOADED_MESSAGE);
    }

    #[test]
    fn missing_pdf_generates_text_resume() {
        let assets = tempdir().unwrap();
        let downloads = tempdir().unwrap();

        let source = ResumeSource::resolve(assets.path());
        assert_eq!(source, ResumeSource::Generated);

        let path = download(&source, &downloads.path().join("nested"), &profile()).unwrap();
        assert_eq!(path.file_name().unwrap(), "Ada_Lovelace_Resume_Temp.txt");
        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("ADA  LOVELACE\nAnalytical Engineer\nada@example.com\n"));
        assert!(text.contains(
            "\nEXPERIENCE\nAnalyst, Babbage & Co | 1842 - 1843\n\nSKILLS\nProgramming"
        ));
        assert!(text.ends_with("Please contact me for the full version.\n"));
    }

    #[test]
    fn blank_owner_falls_back_in_name_and_heading() {
        let profile = ProfileConfig {
            name: Some("   ".into()),
            ..ProfileConfig::default()
        };
        assert_eq!(
            ResumeSource::Generated.file_name(&profile),
            "Portfolio_Resume_Temp.txt"
        );
        assert!(temporary_resume(&profile).starts_with("PORTFOLIO\n\nThis is a temporary"));
    }

    #[test]
    fn padded_owner_name_is_trimmed_in_heading() {
        let profile = ProfileConfig {
            name: Some("  Ada Lovelace ".into()),
            ..ProfileConfig::default()
        };
        assert!(temporary_resume(&profile).starts_with("ADA LOVELACE\n"));
        assert_eq!(
            ResumeSource::Generated.file_name(&profile),
            "Ada_Lovelace_Resume_Temp.txt"
        );
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        let result = download(&ResumeSource::Generated, &blocker, &profile());
        assert!(result.is_err());
    }
}
