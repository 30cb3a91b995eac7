//! The compact project record carried inside share links.

use serde::{Deserialize, Serialize};

/// What a shared project primarily contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Html,
    Css,
    Js,
    #[default]
    Full,
}

/// A student project in its shareable form.
///
/// Field names shrink to one letter on the wire to keep tokens short. Every
/// field is optional on the way in; a link built by hand or by an older page
/// still recovers, with gaps filled by the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "n", default = "default_name")]
    pub name: String,
    #[serde(rename = "t", default)]
    pub kind: ProjectKind,
    #[serde(rename = "h", default)]
    pub html: String,
    #[serde(rename = "c", default)]
    pub css: String,
    #[serde(rename = "j", default)]
    pub js: String,
}

fn default_name() -> String {
    "Shared Project".to_owned()
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            name: default_name(),
            kind: ProjectKind::default(),
            html: String::new(),
            css: String::new(),
            js: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_short_keys() {
        let record = ProjectRecord {
            name: "Reef".to_owned(),
            kind: ProjectKind::Html,
            html: "<h1>Hi</h1>".to_owned(),
            css: String::new(),
            js: String::new(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"n":"Reef","t":"html","h":"<h1>Hi</h1>","c":"","j":""}"#
        );
    }

    #[test]
    fn kind_is_lowercase_on_the_wire() {
        for (kind, wire) in [
            (ProjectKind::Html, "\"html\""),
            (ProjectKind::Css, "\"css\""),
            (ProjectKind::Js, "\"js\""),
            (ProjectKind::Full, "\"full\""),
        ] {
            assert_eq!(serde_json::to_string(&kind).unwrap(), wire);
        }
    }

    #[test]
    fn missing_fields_take_defaults() {
        let record: ProjectRecord = serde_json::from_str(r#"{"h":"<p>hi</p>"}"#).unwrap();
        assert_eq!(record.name, "Shared Project");
        assert_eq!(record.kind, ProjectKind::Full);
        assert_eq!(record.html, "<p>hi</p>");
        assert_eq!(record.css, "");
        assert_eq!(record.js, "");
    }

    #[test]
    fn empty_object_is_the_default_record() {
        let record: ProjectRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ProjectRecord::default());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<ProjectRecord>(r#"{"t":"video"}"#).is_err());
    }

    #[test]
    fn roundtrips_through_json() {
        let record = ProjectRecord {
            name: "日本語の名前".to_owned(),
            kind: ProjectKind::Js,
            html: String::new(),
            css: String::new(),
            js: "console.log('🎣');".to_owned(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ProjectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
