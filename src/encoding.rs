//! Text encodings used when file contents are attached to items.
use std::fmt::Display;
use std::fmt::Write;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;

/// Encoding applied to file bytes before they are stored in
/// [`crate::Item::data`].
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// 7-bit ASCII; the high bit of every byte is cleared.
    Ascii,
    /// Standard base64 with padding.
    #[default]
    Base64,
    /// Lowercase hexadecimal, two digits per byte.
    Hex,
    /// Every byte maps to the code point of the same value.
    #[serde(alias = "binary")]
    Latin1,
    /// UTF-8, invalid sequences replaced with U+FFFD.
    #[serde(alias = "utf-8")]
    Utf8,
    /// Little-endian UTF-16. A trailing odd byte is dropped.
    #[serde(alias = "utf-16le", alias = "ucs2", alias = "ucs-2")]
    Utf16le,
}

impl Encoding {
    /// Turns `bytes` into text using this encoding.
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Ascii => bytes.iter().map(|b| char::from(b & 0x7f)).collect(),
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Hex => bytes
                .iter()
                .fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
                    let _ = write!(out, "{b:02x}");
                    out
                }),
            Encoding::Latin1 => bytes.iter().map(|b| char::from(*b)).collect(),
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Utf16le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
            Encoding::Latin1 => "latin1",
            Encoding::Utf8 => "utf8",
            Encoding::Utf16le => "utf16le",
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(Encoding::Ascii),
            "base64" => Ok(Encoding::Base64),
            "hex" => Ok(Encoding::Hex),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16le),
            other => Err(Error::InvalidArgument(format!("unknown encoding: {other}"))),
        }
    }
}
