//! Component: file IO (spec §6 "DSTV input", `.nc`/`.nc1`-`.nc9`).

use std::path::Path;

use crate::errors::ImportError;

const SUPPORTED_BARE_EXTENSION: &str = "nc";

/// Source text for a pipeline run: either a filesystem path or an
/// already-in-memory string, so tests never need a filesystem (spec §6).
pub enum NcSource<'a> {
    Path(&'a Path),
    Text(&'a str),
}

impl<'a> From<&'a Path> for NcSource<'a> {
    fn from(path: &'a Path) -> Self {
        NcSource::Path(path)
    }
}

impl<'a> From<&'a str> for NcSource<'a> {
    fn from(text: &'a str) -> Self {
        NcSource::Text(text)
    }
}

/// Resolve `source` to its text content, validating the file extension
/// when the source is a path.
pub fn read(source: NcSource<'_>) -> Result<String, ImportError> {
    match source {
        NcSource::Text(text) => Ok(text.to_string()),
        NcSource::Path(path) => {
            validate_extension(path)?;
            std::fs::read_to_string(path).map_err(|source| ImportError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    }
}

fn validate_extension(path: &Path) -> Result<(), ImportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let is_supported = extension == SUPPORTED_BARE_EXTENSION
        || (extension.len() == 3
            && extension.starts_with("nc")
            && extension.as_bytes()[2].is_ascii_digit()
            && extension.as_bytes()[2] != b'0');

    if is_supported {
        Ok(())
    } else {
        Err(ImportError::UnsupportedExtension { extension })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_source_passes_through_unchanged() {
        let text = read(NcSource::Text("ST\nHEA400\n6000\nEN\n")).unwrap();
        assert_eq!(text, "ST\nHEA400\n6000\nEN\n");
    }

    #[test]
    fn nc_extension_is_accepted() {
        assert!(validate_extension(Path::new("part.nc")).is_ok());
        assert!(validate_extension(Path::new("part.nc1")).is_ok());
        assert!(validate_extension(Path::new("part.nc9")).is_ok());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(validate_extension(Path::new("part.step")).is_err());
        assert!(validate_extension(Path::new("part.nc0")).is_err());
    }
}
