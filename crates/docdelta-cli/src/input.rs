//! Document loading

use docdelta_core::{DocDeltaError, ExError, ExErrorKind};
use docdelta_core_types::Sensitive;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Path that reads the document from stdin.
pub const STDIN_PATH: &str = "-";

/// Read one document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<Sensitive<String>, ExError> {
    let mut text = String::new();
    let result = if path.as_os_str() == STDIN_PATH {
        std::io::stdin().read_to_string(&mut text).map(|_| ())
    } else {
        std::fs::File::open(path).and_then(|mut file| file.read_to_string(&mut text).map(|_| ()))
    };

    match result {
        Ok(()) => {
            let text = Sensitive::new(text);
            tracing::debug!(op = "read_document", path = %path.display(), bytes = text.byte_len());
            Ok(text)
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("read_document")
            .with_path(path.display().to_string())
            .with_message("Document is not valid UTF-8")),
        Err(e) => Err(ExError::from(DocDeltaError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .with_op("read_document")),
    }
}

/// Read both documents; at most one of them may come from stdin.
pub fn read_pair(
    path_a: &Path,
    path_b: &Path,
) -> Result<(Sensitive<String>, Sensitive<String>), ExError> {
    if path_a.as_os_str() == STDIN_PATH && path_b.as_os_str() == STDIN_PATH {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("read_document")
            .with_message("Only one document can be read from stdin"));
    }
    Ok((read_document(path_a)?, read_document(path_b)?))
}
