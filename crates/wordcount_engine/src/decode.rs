use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

/// Decode raw bytes into UTF-8 using: BOM -> chardetng detection fallback.
///
/// Best-effort: malformed sequences become replacement characters instead of
/// failing, so a count never aborts once the source has been read.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    // 1) BOM aware decode using encoding_rs helper
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    // 2) chardetng detection over the full input
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedText {
    // decode() strips a leading BOM and substitutes malformed sequences.
    let (text, _, _) = enc.decode(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding_label: enc.name().to_string(),
    }
}
