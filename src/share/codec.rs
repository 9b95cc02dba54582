use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::GeneralPurpose;
use base64::engine::GeneralPurposeConfig;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::Read;
use std::io::Write;

/// URL-safe base64 that writes no padding and reads either way.
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// How a share code's payload is packed, named by its one-letter prefix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// `z`: gzip, then base64url.
    #[default]
    Gzip,
    /// `j`: base64url of the JSON text.
    Plain,
}

impl Codec {
    pub fn prefix(&self) -> char {
        match self {
            Self::Gzip => 'z',
            Self::Plain => 'j',
        }
    }
    /// Split a share code into its codec and payload. Codes without a known
    /// prefix are plain payloads in full.
    pub fn split(code: &str) -> (Self, &str) {
        if let Some(payload) = code.strip_prefix(Self::Gzip.prefix()) {
            (Self::Gzip, payload)
        } else if let Some(payload) = code.strip_prefix(Self::Plain.prefix()) {
            (Self::Plain, payload)
        } else {
            (Self::Plain, code)
        }
    }
    pub fn encode(&self, json: &str) -> anyhow::Result<String> {
        let bytes = match self {
            Self::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(json.as_bytes())?;
                encoder.finish()?
            }
            Self::Plain => json.as_bytes().to_vec(),
        };
        Ok(format!("{}{}", self.prefix(), BASE64URL.encode(bytes)))
    }
    /// Standard-alphabet payloads are read too.
    pub fn decode(&self, payload: &str) -> anyhow::Result<String> {
        let payload = payload.trim().replace('+', "-").replace('/', "_");
        let bytes = BASE64URL.decode(payload)?;
        let text = match self {
            Self::Gzip => {
                let mut text = String::new();
                GzDecoder::new(bytes.as_slice()).read_to_string(&mut text)?;
                text
            }
            Self::Plain => String::from_utf8(bytes)?,
        };
        if text.is_empty() {
            anyhow::bail!("empty share payload");
        }
        Ok(text)
    }
}

/// Decode a share code into JSON. When the primary decode fails, the payload
/// is retried as uncompressed JSON before giving up.
pub fn decode_json(code: &str) -> Option<serde_json::Value> {
    let (codec, payload) = Codec::split(code);
    let primary = codec
        .decode(payload)
        .and_then(|text| Ok(serde_json::from_str::<serde_json::Value>(&text)?));
    match primary {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("share code rejected by {:?} codec: {}", codec, e);
            Codec::Plain
                .decode(payload)
                .and_then(|text| Ok(serde_json::from_str::<serde_json::Value>(&text)?))
                .inspect_err(|e| log::warn!("unreadable share code: {}", e))
                .ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_select_codec() {
        assert!(Codec::split("zabc") == (Codec::Gzip, "abc"));
        assert!(Codec::split("jabc") == (Codec::Plain, "abc"));
        assert!(Codec::split("abc") == (Codec::Plain, "abc"));
    }
    #[test]
    fn gzip_payloads() {
        let code = Codec::Gzip.encode(r#"{"v":1}"#).unwrap();
        assert!(code.starts_with('z'));
        assert!(!code.contains(['+', '/', '=']));
        assert!(decode_json(&code) == Some(serde_json::json!({ "v": 1 })));
    }
    #[test]
    fn plain_payloads() {
        let code = Codec::Plain.encode(r#"{"v":1}"#).unwrap();
        assert!(code == "jeyJ2IjoxfQ");
        assert!(decode_json(&code) == Some(serde_json::json!({ "v": 1 })));
        assert!(decode_json("jeyJ2IjoxfQ==") == Some(serde_json::json!({ "v": 1 })));
        assert!(Codec::Plain.decode("Pz8_").unwrap() == "???");
        assert!(Codec::Plain.decode("Pz8/").unwrap() == "???");
    }
    #[test]
    fn unprefixed_payloads_are_plain() {
        assert!(decode_json("eyJ2IjoxfQ") == Some(serde_json::json!({ "v": 1 })));
    }
    #[test]
    fn mislabelled_gzip_falls_back_to_plain() {
        assert!(decode_json("zeyJ2IjoxfQ") == Some(serde_json::json!({ "v": 1 })));
    }
    #[test]
    fn garbage_is_absent() {
        assert!(decode_json("z!!!").is_none());
        assert!(decode_json("").is_none());
        assert!(decode_json("jbm90IGpzb24").is_none());
    }
}
