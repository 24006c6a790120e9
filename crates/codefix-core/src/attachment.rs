//! Attachment encoder
//!
//! Decides whether a user-selected file is source text (loaded into the code
//! buffer) or a binary document (sent to the model as an inline base64 part).

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};
use crate::types::Attachment;

/// MIME type used when nothing better can be guessed
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Extensions that are always treated as source text, regardless of MIME
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "mjs", "cjs", "py", "java", "c", "cpp", "cc", "cxx", "h", "hpp",
    "cs", "go", "rs", "rb", "php", "swift", "kt", "kts", "scala", "dart", "lua", "r", "m", "sql",
    "sh", "bash", "html", "css", "json", "xml", "yaml", "yml", "toml", "md", "txt",
];

/// How a file is handed to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Decoded as text and placed in the code buffer
    SourceText,
    /// Encoded as base64 and sent as an inline attachment
    Binary,
}

/// A file after classification and decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedFile {
    /// Source text that replaces the code buffer
    Source { name: String, text: String },
    /// Image, PDF or other document held as the attachment
    Binary(Attachment),
}

impl EncodedFile {
    pub fn name(&self) -> &str {
        match self {
            EncodedFile::Source { name, .. } => name,
            EncodedFile::Binary(attachment) => &attachment.name,
        }
    }
}

/// Guess the MIME type from a file name
pub fn guess_mime(name: &str) -> String {
    mime_guess::from_path(name)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}

/// Classify a file by MIME prefix or known source extension
pub fn classify(name: &str, mime: &str) -> FileKind {
    if mime.starts_with("text/") {
        return FileKind::SourceText;
    }

    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension {
        Some(ext) if SOURCE_EXTENSIONS.contains(&ext.as_str()) => FileKind::SourceText,
        _ => FileKind::Binary,
    }
}

/// Encode in-memory file contents
pub fn encode_bytes(name: &str, bytes: &[u8]) -> EncodedFile {
    let mime = guess_mime(name);
    match classify(name, &mime) {
        FileKind::SourceText => EncodedFile::Source {
            name: name.to_string(),
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
        FileKind::Binary => EncodedFile::Binary(Attachment {
            name: name.to_string(),
            mime_type: mime,
            data: STANDARD.encode(bytes),
        }),
    }
}

/// Read and encode a file from disk
pub fn encode_file(path: &Path) -> Result<EncodedFile> {
    let bytes = std::fs::read(path).map_err(|e| Error::file_read(path, e.to_string()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let encoded = encode_bytes(&name, &bytes);
    tracing::debug!(
        "Encoded {} ({} bytes) as {:?}",
        name,
        bytes.len(),
        match &encoded {
            EncodedFile::Source { .. } => FileKind::SourceText,
            EncodedFile::Binary(_) => FileKind::Binary,
        }
    );
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(classify("Main.java", FALLBACK_MIME), FileKind::SourceText);
        assert_eq!(classify("prog.CPP", FALLBACK_MIME), FileKind::SourceText);
        assert_eq!(classify("script.py", FALLBACK_MIME), FileKind::SourceText);
        assert_eq!(classify("photo.png", "image/png"), FileKind::Binary);
        assert_eq!(classify("notes.pdf", "application/pdf"), FileKind::Binary);
        assert_eq!(classify("Makefile", FALLBACK_MIME), FileKind::Binary);
    }

    #[test]
    fn test_classify_by_text_mime_prefix() {
        assert_eq!(classify("README", "text/plain"), FileKind::SourceText);
        assert_eq!(classify("data.csv", "text/csv"), FileKind::SourceText);
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("shot.png"), "image/png");
        assert_eq!(guess_mime("homework.pdf"), "application/pdf");
        assert_eq!(guess_mime("no_extension"), FALLBACK_MIME);
    }

    #[test]
    fn test_encode_source_bytes() {
        let encoded = encode_bytes("hello.c", b"int main() { return 0 }");
        match encoded {
            EncodedFile::Source { name, text } => {
                assert_eq!(name, "hello.c");
                assert_eq!(text, "int main() { return 0 }");
            }
            other => panic!("expected source text, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_binary_bytes() {
        let encoded = encode_bytes("screenshot.png", b"hello");
        match encoded {
            EncodedFile::Binary(attachment) => {
                assert_eq!(attachment.name, "screenshot.png");
                assert_eq!(attachment.mime_type, "image/png");
                assert_eq!(attachment.data, "aGVsbG8=");
            }
            other => panic!("expected binary attachment, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_file_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Main.java");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "public class Main {{}}").unwrap();

        let encoded = encode_file(&path).unwrap();
        assert_eq!(encoded.name(), "Main.java");
        assert!(matches!(encoded, EncodedFile::Source { ref text, .. } if text.contains("class Main")));
    }

    #[test]
    fn test_encode_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = encode_file(&dir.path().join("missing.py")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_invalid_utf8_source_is_lossy() {
        let encoded = encode_bytes("broken.txt", &[0x66, 0x6f, 0xff, 0x6f]);
        match encoded {
            EncodedFile::Source { text, .. } => assert!(text.starts_with("fo")),
            other => panic!("expected source text, got {:?}", other),
        }
    }
}
