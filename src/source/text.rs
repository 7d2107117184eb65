use crate::core::Result;

const BOM: char = '\u{feff}';

/// Decodes a fetched object body as UTF-8. A leading byte-order mark is
/// dropped; any invalid sequence fails the whole object.
pub fn decode(bytes: Vec<u8>) -> Result<String> {
    let mut text = String::from_utf8(bytes)?;
    if text.starts_with(BOM) {
        text.drain(..BOM.len_utf8());
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PipelineError;

    #[test]
    fn test_decode_plain() {
        assert_eq!(decode(b"id,name\n".to_vec()).unwrap(), "id,name\n");
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"id\n1");
        assert_eq!(decode(bytes).unwrap(), "id\n1");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode(vec![b'a', 0xFF, b'b']).unwrap_err();
        assert!(matches!(err, PipelineError::Decode(_)));
    }
}
