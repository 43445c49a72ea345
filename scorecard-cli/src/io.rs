//! Retrieval, clipboard, and log-file plumbing for the native CLI

use std::fs;
use std::io::{stdout, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crossterm::{execute, style::Print};

use scorecard_core::{Fetch, RetrievalError};

/// Fetches over HTTP(S) for URLs and from disk for everything else
pub struct Fetcher {
    agent: ureq::Agent,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
        }
    }

    fn fetch_remote(&self, location: &str) -> Result<String, RetrievalError> {
        let transport = |message: String| RetrievalError::Transport {
            location: location.to_string(),
            message,
        };

        let mut response = self
            .agent
            .get(location)
            .call()
            .map_err(|err| transport(err.to_string()))?;

        // Null-body statuses carry nothing to parse
        if matches!(response.status().as_u16(), 204 | 205 | 304) {
            return Err(RetrievalError::NoBody {
                location: location.to_string(),
            });
        }

        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|err| transport(err.to_string()))?;
        if text.is_empty() {
            return Err(RetrievalError::NoBody {
                location: location.to_string(),
            });
        }
        Ok(text)
    }
}

impl Fetch for Fetcher {
    fn fetch(&self, location: &str) -> Result<String, RetrievalError> {
        if is_remote(location) {
            self.fetch_remote(location)
        } else {
            read_local(Path::new(location))
        }
    }
}

pub fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Read a local table file
pub fn read_local(path: &Path) -> Result<String, RetrievalError> {
    let io_error = |source: std::io::Error| RetrievalError::Io {
        location: path.display().to_string(),
        source,
    };
    let metadata = fs::metadata(path).map_err(io_error)?;
    if metadata.is_dir() {
        return Err(io_error(std::io::Error::new(
            ErrorKind::InvalidInput,
            "is a directory",
        )));
    }
    fs::read_to_string(path).map_err(io_error)
}

/// Copy `text` to the system clipboard through the terminal (OSC 52)
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut stdout = stdout();
    execute!(stdout, Print(osc52_sequence(text))).context("Failed to write clipboard sequence")?;
    Ok(())
}

fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Get the ~/.scorecard directory path, creating it if needed
pub fn scorecard_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let dir = home.join(".scorecard");

    if !dir.exists() {
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    Ok(dir)
}

/// Default log file location
pub fn default_log_path() -> Result<PathBuf> {
    Ok(scorecard_dir()?.join("scorecard.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/a.csv"));
        assert!(is_remote("HTTP://example.com/a.csv"));
        assert!(!is_remote("./data/a.csv"));
        assert!(!is_remote("/tmp/https.csv"));
    }

    #[test]
    fn test_fetch_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "id,text\na,hello\n").unwrap();

        let fetcher = Fetcher::new(Duration::from_secs(1));
        let text = fetcher.fetch(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "id,text\na,hello\n");
    }

    #[test]
    fn test_missing_file_is_retrieval_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = read_local(&missing).unwrap_err();
        assert!(matches!(err, RetrievalError::Io { .. }));
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_directory_is_retrieval_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read_local(dir.path()), Err(RetrievalError::Io { .. })));
    }

    /// Serve one canned HTTP response on a local port and return its URL
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/a.csv", addr)
    }

    #[test]
    fn test_fetch_remote_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 15\r\nConnection: close\r\n\r\nid,text\na,hello",
        );
        let fetcher = Fetcher::new(Duration::from_secs(5));
        assert_eq!(fetcher.fetch(&url).unwrap(), "id,text\na,hello");
    }

    #[test]
    fn test_fetch_remote_empty_body_is_no_body() {
        let url = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let fetcher = Fetcher::new(Duration::from_secs(5));
        let err = fetcher.fetch(&url).unwrap_err();
        assert!(matches!(err, RetrievalError::NoBody { .. }));
    }

    #[test]
    fn test_fetch_remote_error_status_is_transport() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let fetcher = Fetcher::new(Duration::from_secs(5));
        let err = fetcher.fetch(&url).unwrap_err();
        assert!(matches!(err, RetrievalError::Transport { .. }));
    }

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("5\n\n3"), "\x1b]52;c;NQoKMw==\x1b\\");
    }
}
