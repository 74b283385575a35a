//! Output path generation and text file writing.
//!
//! Generation itself is pure; all file I/O lives here and in the CLI.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations.
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file writing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write a generated document to a file, creating parent directories as
/// needed.
pub fn write_text(content: &str, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Generate the output path for a platform document.
///
/// # Output Naming Rules
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o` argument | `{input_dir}/DesignTokens.{ext}` |
/// | `-o dir/` | `dir/DesignTokens.{ext}` |
/// | `-o out.swift` (single platform) | `out.swift` |
/// | `-o out.swift` (multiple platforms) | `{out_dir}/out.{ext}` per platform |
///
/// # Arguments
///
/// * `input` - The input spec path (used for default placement)
/// * `output_arg` - The `-o` argument value, if provided
/// * `file_name` - The platform default file name (`DesignTokens.swift`)
/// * `extension` - The platform file extension
/// * `is_single_platform` - Whether only one platform is being generated
pub fn generate_output_path(
    input: &Path,
    output_arg: Option<&Path>,
    file_name: &str,
    extension: &str,
    is_single_platform: bool,
) -> PathBuf {
    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(file_name)
            } else if is_single_platform {
                output.to_path_buf()
            } else {
                // One explicit file name for several platforms: keep the stem,
                // swap the extension per platform.
                output.with_extension(extension)
            }
        }
        None => {
            let parent = input.parent().unwrap_or(Path::new(""));
            if parent.as_os_str().is_empty() {
                PathBuf::from(file_name)
            } else {
                parent.join(file_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_next_to_input() {
        let path = generate_output_path(
            Path::new("design/tokens.json"),
            None,
            "DesignTokens.swift",
            "swift",
            true,
        );
        assert_eq!(path, PathBuf::from("design/DesignTokens.swift"));
    }

    #[test]
    fn test_default_path_bare_input() {
        let path =
            generate_output_path(Path::new("tokens.json"), None, "DesignTokens.kt", "kt", true);
        assert_eq!(path, PathBuf::from("DesignTokens.kt"));
    }

    #[test]
    fn test_explicit_directory() {
        let path = generate_output_path(
            Path::new("tokens.json"),
            Some(Path::new("generated/")),
            "DesignTokens.swift",
            "swift",
            false,
        );
        assert_eq!(path, PathBuf::from("generated/DesignTokens.swift"));
    }

    #[test]
    fn test_explicit_file_single_platform() {
        let path = generate_output_path(
            Path::new("tokens.json"),
            Some(Path::new("Tokens.swift")),
            "DesignTokens.swift",
            "swift",
            true,
        );
        assert_eq!(path, PathBuf::from("Tokens.swift"));
    }

    #[test]
    fn test_explicit_file_multiple_platforms() {
        let swift = generate_output_path(
            Path::new("tokens.json"),
            Some(Path::new("out/Tokens.swift")),
            "DesignTokens.swift",
            "swift",
            false,
        );
        let kotlin = generate_output_path(
            Path::new("tokens.json"),
            Some(Path::new("out/Tokens.swift")),
            "DesignTokens.kt",
            "kt",
            false,
        );
        assert_eq!(swift, PathBuf::from("out/Tokens.swift"));
        assert_eq!(kotlin, PathBuf::from("out/Tokens.kt"));
    }

    #[test]
    fn test_write_text_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deep/DesignTokens.swift");
        write_text("// generated\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "// generated\n");
    }
}
