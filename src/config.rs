//! Startup Configuration
//!
//! Read once from an optional `<script id="ide-config" type="application/json">`
//! block in `index.html`. Missing fields take defaults; an unreadable block
//! falls back to defaults entirely.

use serde::{Deserialize, Serialize};

use crate::models::{LeafKind, Node};

const CONFIG_ELEMENT_ID: &str = "ide-config";

#[derive(Debug, Clone)]
pub enum ConfigError {
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct IdeConfig {
    pub initial_structure: Vec<Node>,
    pub sidebar_open: bool,
    pub log_level: String,
    pub log_capacity: usize,
    /// syntect theme for fenced code in previews
    pub highlight_theme: String,
}

impl Default for IdeConfig {
    fn default() -> Self {
        Self {
            initial_structure: vec![
                Node::folder("folder1"),
                Node::file("file1", LeafKind::PlainText),
            ],
            sidebar_open: true,
            log_level: "info".to_string(),
            log_capacity: 200,
            highlight_theme: "InspiredGitHub".to_string(),
        }
    }
}

impl IdeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: IdeConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.initial_structure = config.initial_structure.into_iter().map(Node::normalized).collect();
        Ok(config)
    }

    /// Load from the page, falling back to defaults.
    /// Runs before the logger exists, so problems go straight to the console.
    pub fn load() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        Self::from_json(&text).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorView;
    use crate::models::NodeKind;

    #[test]
    fn test_default_seed() {
        let config = IdeConfig::default();
        let names: Vec<_> = config.initial_structure.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["folder1", "file1.ed"]);
        assert!(config.sidebar_open);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = IdeConfig::from_json(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_capacity, 200);
        assert_eq!(config.initial_structure.len(), 2);
    }

    #[test]
    fn test_structure_from_json() {
        let json = r#"{
            "initial_structure": [
                {"name": "docs", "kind": "folder", "children": [
                    {"name": "todo.lt", "kind": "checklist", "content": "[]"}
                ]},
                {"name": "intro.readme", "kind": "markdownDoc"}
            ]
        }"#;
        let config = IdeConfig::from_json(json).unwrap();
        assert_eq!(config.initial_structure[0].children[0].kind, NodeKind::Checklist);
        // Leaves always carry content after loading
        assert_eq!(config.initial_structure[1].content.as_deref(), Some(""));
    }

    #[test]
    fn test_extension_overrides_declared_kind() {
        let json = r#"{"initial_structure": [{"name": "todo.lt", "kind": "plainText", "content": "[]"}]}"#;
        let config = IdeConfig::from_json(json).unwrap();
        let leaf = &config.initial_structure[0];
        assert_eq!(leaf.kind, NodeKind::Checklist);
        assert_eq!(EditorView::for_node(Some(leaf), false), EditorView::Checklist);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(IdeConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }
}
