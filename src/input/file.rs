use std::io::{self, Read};
use std::path::Path;

use tracing::info;

use super::{LoadError, LoadedText};

/// Reads a UTF-8 text file, rejecting missing or blank files.
pub fn load_file(path: &Path) -> Result<LoadedText, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let loaded = LoadedText::new(text, path.display().to_string())?;
    info!(path = %path.display(), bytes = loaded.text.len(), "loaded file");
    Ok(loaded)
}

/// Reads all of standard input.
pub fn load_stdin() -> Result<LoadedText, LoadError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            path: "<stdin>".into(),
            source,
        })?;
    LoadedText::new(text, "stdin")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("readster_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_empty_file_error() {
        let test_file = temp_path("empty.txt");
        File::create(&test_file).unwrap();

        let result = load_file(&test_file);
        assert!(matches!(result, Err(LoadError::EmptyInput(_))));

        fs::remove_file(&test_file).unwrap();
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_file(Path::new("nonexistent_file_12345.txt"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let test_file = temp_path("valid.txt");
        let mut file = File::create(&test_file).unwrap();
        file.write_all(b"hello world").unwrap();

        let loaded = load_file(&test_file).unwrap();
        assert_eq!(loaded.text, "hello world");
        assert_eq!(loaded.source, test_file.display().to_string());

        fs::remove_file(&test_file).unwrap();
    }
}
