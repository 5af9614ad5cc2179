use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Loads the content buffer: the named file if there is one, otherwise
/// whatever is piped into stdin. An interactive stdin gives an empty buffer.
pub fn load_content(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    read_content(stdin.lock()).context("failed to read standard input")
}

pub fn read_content(mut reader: impl Read) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_whole_stream() {
        let text = read_content("line one\nline two\n".as_bytes()).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = read_content(&b"a\xffb"[..]).unwrap();
        assert_eq!(text, "a\u{fffd}b");
    }

    #[test]
    fn reads_named_file() {
        let path = std::env::temp_dir().join(format!("greg-input-{}.txt", std::process::id()));
        fs::write(&path, "from file").unwrap();
        let text = load_content(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(text, "from file");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_content(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
