use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub struct ApiCredential {
    pub username: String,
    pub password: String,
}

/// Resolve the credential used for HTTP Basic Auth.
///
/// Environment variables win so CI jobs never need a dotfile on disk;
/// otherwise the two-line credential file is read.
pub fn load(cred_file: Option<&Path>) -> Result<ApiCredential> {
    if let (Ok(username), Ok(password)) =
        (env::var("VERACODE_USERNAME"), env::var("VERACODE_PASSWORD"))
    {
        return Ok(ApiCredential { username, password });
    }

    let path = match cred_file {
        Some(p) => p.to_path_buf(),
        None => default_cred_file()?,
    };
    read_from_file(&path)
}

/// Default credential file location, `~/.veracoderc`.
pub fn default_cred_file() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".veracoderc"))
}

/// Read a two-line credential file: first line username, second line
/// password, each trimmed of surrounding whitespace. A missing second line
/// yields an empty password.
pub fn read_from_file(path: &Path) -> Result<ApiCredential> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read credential file {}", path.display()))?;

    let mut lines = contents.lines();
    let username = lines.next().unwrap_or_default().trim().to_string();
    let password = lines.next().unwrap_or_default().trim().to_string();

    Ok(ApiCredential { username, password })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn cred_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_username_and_password_lines() {
        let file = cred_file("jane@example.com\nhunter2\n");
        let cred = read_from_file(file.path()).unwrap();
        assert_eq!(cred.username, "jane@example.com");
        assert_eq!(cred.password, "hunter2");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let file = cred_file("  jane@example.com \t\nhunter2");
        let cred = read_from_file(file.path()).unwrap();
        assert_eq!(cred.username, "jane@example.com");
        assert_eq!(cred.password, "hunter2");
    }

    #[test]
    fn missing_second_line_yields_empty_password() {
        let file = cred_file("jane@example.com\n");
        let cred = read_from_file(file.path()).unwrap();
        assert_eq!(cred.username, "jane@example.com");
        assert_eq!(cred.password, "");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = read_from_file(Path::new("/nonexistent/.veracoderc"));
        assert!(result.is_err());
    }
}
