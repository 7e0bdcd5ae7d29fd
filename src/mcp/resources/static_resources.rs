//! Static MCP resources: the named-color table, harmony offsets and the
//! classic scheme modes.

use rmcp::model::AnnotateAble;
use rmcp::model::*;

use crate::named;
use crate::scheme::{HarmonyKind, SCHEME_MODES};

/// URI for the named-color table.
pub const URI_NAMED_COLORS: &str = "colors://named-colors";
/// URI for the harmony offset table.
pub const URI_HARMONIES: &str = "colors://harmonies";
/// URI for the classic scheme mode list.
pub const URI_SCHEME_MODES: &str = "colors://scheme-modes";

const JSON_MIME: &str = "application/json";

fn json_resource(uri: &str, name: &str, title: &str, description: &str) -> Resource {
    RawResource {
        uri: uri.into(),
        name: name.into(),
        title: Some(title.into()),
        description: Some(description.into()),
        mime_type: Some(JSON_MIME.into()),
        size: None,
        icons: None,
        meta: None,
    }
    .no_annotation()
}

/// Returns the list of all static MCP resources.
pub fn list_static_resources() -> Vec<Resource> {
    vec![
        json_resource(
            URI_NAMED_COLORS,
            "named-colors",
            "Named Color Table",
            "JSON array of every reference color name with its hex, RGB and HSL coordinates.",
        ),
        json_resource(
            URI_HARMONIES,
            "harmonies",
            "Color Harmonies",
            "JSON array of harmony types with their hue offsets in degrees.",
        ),
        json_resource(
            URI_SCHEME_MODES,
            "scheme-modes",
            "Classic Scheme Modes",
            "JSON array of the classic scheme modes accepted by get-classic-scheme.",
        ),
    ]
}

/// Reads a static resource by URI, returning its contents.
///
/// Returns `None` if the URI doesn't match any known static resource.
pub fn read_static_resource(uri: &str) -> Option<ReadResourceResult> {
    let text = match uri {
        URI_NAMED_COLORS => named_colors_json(),
        URI_HARMONIES => harmonies_json(),
        URI_SCHEME_MODES => scheme_modes_json(),
        _ => return None,
    };
    Some(ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.into(),
            mime_type: Some(JSON_MIME.into()),
            text,
            meta: None,
        }],
    })
}

fn named_colors_json() -> String {
    serde_json::to_string_pretty(named::named_colors()).expect("named color serialization cannot fail")
}

fn harmonies_json() -> String {
    let entries: Vec<serde_json::Value> = HarmonyKind::ALL
        .iter()
        .map(|kind| {
            serde_json::json!({
                "name": kind.name(),
                "description": kind.description(),
                "offsets": kind.offsets(),
                "size": kind.size(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&entries).expect("harmony table serialization cannot fail")
}

fn scheme_modes_json() -> String {
    let entries: Vec<serde_json::Value> = SCHEME_MODES
        .iter()
        .map(|mode| {
            serde_json::json!({
                "name": mode.name,
                "description": mode.description,
                "parts": mode.parts.len(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&entries).expect("scheme mode serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_json(uri: &str) -> Vec<serde_json::Value> {
        let result = read_static_resource(uri).expect("resource should exist");
        assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents { uri: got, text, mime_type, .. } => {
                assert_eq!(got, uri);
                assert_eq!(mime_type.as_deref(), Some(JSON_MIME));
                serde_json::from_str(text).expect("resource JSON should parse")
            }
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_list_resource_uris() {
        let resources = list_static_resources();
        let uris: Vec<&str> = resources.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris, [URI_NAMED_COLORS, URI_HARMONIES, URI_SCHEME_MODES]);
        for r in &resources {
            assert!(r.description.is_some(), "resource should have a description");
        }
    }

    #[test]
    fn test_read_named_colors() {
        let table = read_json(URI_NAMED_COLORS);
        assert_eq!(table.len(), named::named_colors().len());
        let red = table.iter().find(|e| e["name"] == "Red").expect("Red should be listed");
        assert_eq!(red["hex"], "#FF0000");
        assert_eq!(red["r"], 255);
    }

    #[test]
    fn test_read_harmonies() {
        let harmonies = read_json(URI_HARMONIES);
        assert_eq!(harmonies.len(), 7);
        let triadic = harmonies.iter().find(|e| e["name"] == "triadic").unwrap();
        assert_eq!(triadic["offsets"], serde_json::json!([0.0, 120.0, 240.0]));
        assert_eq!(triadic["size"], 3);
    }

    #[test]
    fn test_read_scheme_modes() {
        let modes = read_json(URI_SCHEME_MODES);
        let names: Vec<&str> = modes.iter().filter_map(|m| m["name"].as_str()).collect();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"analogic-complement"));
    }

    #[test]
    fn test_read_unknown_uri() {
        assert!(read_static_resource("colors://nope").is_none());
    }
}
