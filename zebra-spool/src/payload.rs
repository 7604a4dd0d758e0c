//! Payload preparation helpers used by callers before submission

use std::path::Path;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Drop a leading UTF-8 byte-order mark, leaving everything else untouched
pub fn strip_utf8_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(&UTF8_BOM[..]).unwrap_or(data)
}

/// Job document name for a file: its final path component
///
/// Returns an empty string when the path has no file name; the job request
/// then falls back to the default document name.
pub fn document_name_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        let data = [0xEF, 0xBB, 0xBF, b'^', b'X', b'A'];
        assert_eq!(strip_utf8_bom(&data), b"^XA");
    }

    #[test]
    fn test_no_bom_untouched() {
        assert_eq!(strip_utf8_bom(b"^XA^XZ"), b"^XA^XZ");
        assert_eq!(strip_utf8_bom(&[0xEF, 0xBB]), &[0xEF, 0xBB]);
        assert_eq!(strip_utf8_bom(&[]), &[] as &[u8]);
    }

    #[test]
    fn test_only_leading_bom_stripped() {
        let data = [0xEF, 0xBB, 0xBF, 0xEF, 0xBB, 0xBF];
        assert_eq!(strip_utf8_bom(&data), &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_document_name() {
        assert_eq!(document_name_for(Path::new("labels/ship.zpl")), "ship.zpl");
        assert_eq!(document_name_for(Path::new("/")), "");
    }
}
