//! Inputs for the `digest` command and streaming over them

use h416_core::{Digest, H416};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Something to hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A literal string, hashed as its UTF-8 bytes
    Text(String),
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl Source {
    /// Interpret a positional argument: `-` is stdin, anything else a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    /// Name printed next to the digest.
    pub fn display_name(&self) -> String {
        match self {
            Source::Text(text) => format!("\"{}\"", text),
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "-".to_string(),
        }
    }

    /// Hash this source, reading `read_buffer` bytes at a time.
    pub fn digest(&self, read_buffer: usize) -> io::Result<DigestRecord> {
        let (digest, bytes) = match self {
            Source::Text(text) => {
                let mut hasher = H416::new();
                hasher.update(text.as_bytes());
                (hasher.finalize(), text.len() as u64)
            }
            Source::File(path) => digest_reader(File::open(path)?, read_buffer)?,
            Source::Stdin => digest_reader(io::stdin().lock(), read_buffer)?,
        };

        log::debug!("hashed {} ({} bytes)", self.display_name(), bytes);

        Ok(DigestRecord {
            name: self.display_name(),
            digest: digest.to_hex(),
            bytes,
        })
    }
}

/// Result of hashing one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestRecord {
    pub name: String,
    pub digest: String,
    pub bytes: u64,
}

impl DigestRecord {
    /// `<hex>  <name>`, the format `check` reads back. Text names are
    /// quoted, which `check` recognizes and re-hashes as text.
    pub fn to_line(&self) -> String {
        format!("{}  {}", self.digest, self.name)
    }
}

/// Stream a reader through the hasher; returns the digest and byte count.
pub fn digest_reader<R: Read>(mut reader: R, read_buffer: usize) -> io::Result<(Digest, u64)> {
    let mut hasher = H416::new();
    let mut buf = vec![0u8; read_buffer.max(1)];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }

    let bytes = hasher.len();
    Ok((hasher.finalize(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use h416_core::hash;

    #[test]
    fn test_from_arg() {
        assert_eq!(Source::from_arg("-"), Source::Stdin);
        assert_eq!(
            Source::from_arg("a.txt"),
            Source::File(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn test_reader_matches_one_shot_for_any_buffer() {
        let message: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        for read_buffer in [1, 7, 64, 100, 4096] {
            let (digest, bytes) = digest_reader(&message[..], read_buffer).unwrap();
            assert_eq!(digest, hash(&message));
            assert_eq!(bytes, 1000);
        }
    }

    #[test]
    fn test_text_record() {
        let record = Source::Text("Hello, World!".into()).digest(16).unwrap();
        assert_eq!(record.digest, h416_core::digest(b"Hello, World!"));
        assert_eq!(record.bytes, 13);
        assert_eq!(record.name, "\"Hello, World!\"");
        assert!(record.to_line().starts_with(&record.digest));
    }

    #[test]
    fn test_file_record() {
        let path = std::env::temp_dir().join(format!("h416-source-{}.bin", std::process::id()));
        std::fs::write(&path, b"abc").unwrap();

        let record = Source::File(path.clone()).digest(2).unwrap();
        assert_eq!(record.digest, h416_core::digest(b"abc"));
        assert_eq!(record.bytes, 3);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_record_json() {
        let record = DigestRecord {
            name: "x".into(),
            digest: "00".into(),
            bytes: 1,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"x","digest":"00","bytes":1}"#
        );
    }
}
