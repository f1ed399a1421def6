//! Emoji record model and glyph decoding.
//!
//! This module defines the core `EmojiRecord` type, one entry in the fetched emoji
//! collection. Records arrive from the EmojiHub API as JSON objects whose glyph is
//! an HTML entity snippet (e.g. `&#128516;`); since the plugin renders into a
//! terminal rather than a browser, the snippet is decoded to the actual character
//! for display.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a record's markup cannot be decoded to any character.
const FALLBACK_GLYPH: &str = "\u{fffd}";

/// One entry in the fetched emoji collection.
///
/// Field names mirror the wire format of the emoji API: a JSON array of objects
/// with `name`, `category`, `group` and `htmlCode`. The collection is ordered,
/// fetched once, and immutable after load except by wholesale replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Human-readable emoji name (e.g. "grinning face").
    pub name: String,

    /// Classification used for filtering (e.g. "smileys and people").
    pub category: String,

    /// Finer-grained classification used for display (e.g. "face positive").
    pub group: String,

    /// Raw HTML entity snippet for the glyph (e.g. `&#128516;`).
    #[serde(rename = "htmlCode")]
    pub html_code: String,
}

impl EmojiRecord {
    /// Returns the displayable glyph for this record.
    ///
    /// Decodes the HTML entity markup to the actual character sequence. Records
    /// whose markup decodes to nothing render as a replacement character so card
    /// layout stays aligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemoji::domain::EmojiRecord;
    ///
    /// let record = EmojiRecord {
    ///     name: "grinning face".to_string(),
    ///     category: "smileys and people".to_string(),
    ///     group: "face positive".to_string(),
    ///     html_code: "&#128512;".to_string(),
    /// };
    /// assert_eq!(record.glyph(), "😀");
    /// ```
    #[must_use]
    pub fn glyph(&self) -> String {
        let decoded = decode_entities(&self.html_code);
        if decoded.trim().is_empty() {
            FALLBACK_GLYPH.to_string()
        } else {
            decoded
        }
    }
}

/// Decodes numeric HTML character references in a markup snippet.
///
/// Handles both decimal (`&#128516;`) and hexadecimal (`&#x1F600;`) forms,
/// including snippets containing several entities (skin tone modifiers, ZWJ
/// sequences). Text outside entities and entities that do not resolve to a
/// valid scalar value pass through unchanged.
#[must_use]
pub fn decode_entities(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(start) = rest.find("&#") {
        out.push_str(&rest[..start]);
        let entity = &rest[start..];

        let Some(semi) = entity.find(';') else {
            // Unterminated entity, keep the tail verbatim.
            out.push_str(entity);
            return out;
        };

        let body = &entity[2..semi];
        let code = body
            .strip_prefix('x')
            .or_else(|| body.strip_prefix('X'))
            .map_or_else(|| body.parse::<u32>().ok(), |hex| u32::from_str_radix(hex, 16).ok());

        match code.and_then(char::from_u32) {
            Some(c) => out.push(c),
            None => out.push_str(&entity[..=semi]),
        }

        rest = &entity[semi + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(html_code: &str) -> EmojiRecord {
        EmojiRecord {
            name: "grinning face".to_string(),
            category: "smileys and people".to_string(),
            group: "face positive".to_string(),
            html_code: html_code.to_string(),
        }
    }

    #[test]
    fn decodes_decimal_entity() {
        assert_eq!(decode_entities("&#128516;"), "😄");
    }

    #[test]
    fn decodes_hex_entity() {
        assert_eq!(decode_entities("&#x1F600;"), "😀");
    }

    #[test]
    fn decodes_multi_entity_sequence() {
        // Victory hand with skin tone modifier.
        assert_eq!(decode_entities("&#9996;&#127999;"), "✌🏿");
    }

    #[test]
    fn passes_through_surrounding_text() {
        assert_eq!(decode_entities("a&#66;c"), "aBc");
    }

    #[test]
    fn keeps_invalid_entities_verbatim() {
        assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
        assert_eq!(decode_entities("&#55296;"), "&#55296;"); // lone surrogate
    }

    #[test]
    fn keeps_unterminated_entity_verbatim() {
        assert_eq!(decode_entities("&#128516"), "&#128516");
    }

    #[test]
    fn glyph_falls_back_for_empty_markup() {
        assert_eq!(record("").glyph(), "\u{fffd}");
        assert_eq!(record("  ").glyph(), "\u{fffd}");
    }

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{
            "name": "grinning face",
            "category": "smileys and people",
            "group": "face positive",
            "htmlCode": "&#128512;"
        }"#;
        let parsed: EmojiRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, record("&#128512;"));
    }
}
