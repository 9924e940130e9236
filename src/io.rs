/*! Filesystem decode helpers shared by the driver and the unicode
normalizer.
!*/

/// Decodes `bytes` as UTF-8; on failure, falls back to treating each byte
/// as a Latin-1 codepoint, which at least produces a valid (if mojibake'd)
/// `String` rather than failing the document outright. Malformed UTF-8
/// reaching this function is the common case for OCR output from legacy
/// scanning pipelines, not an exceptional one.
pub fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_valid_utf8_directly() {
        assert_eq!(decode_lossy("café".as_bytes()), "café");
    }

    #[test]
    fn falls_back_to_latin1_on_invalid_utf8() {
        let bytes = vec![0x63, 0x61, 0x66, 0xE9]; // "caf" + Latin-1 'é'
        assert_eq!(decode_lossy(&bytes), "café");
    }
}
