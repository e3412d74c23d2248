//! Frontend Models
//!
//! Tree nodes and the records stored inside leaf content.

use serde::{Deserialize, Serialize};

/// Content type of a non-folder node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeafKind {
    PlainText,
    Checklist,
    Kanban,
    MarkdownDoc,
}

/// All leaf kinds, in the order the create menu offers them
pub const LEAF_KINDS: [LeafKind; 4] = [
    LeafKind::PlainText,
    LeafKind::Kanban,
    LeafKind::Checklist,
    LeafKind::MarkdownDoc,
];

impl LeafKind {
    /// Synthetic file extension selecting the editor
    pub fn extension(&self) -> &'static str {
        match self {
            LeafKind::PlainText => "ed",
            LeafKind::Checklist => "lt",
            LeafKind::Kanban => "note",
            LeafKind::MarkdownDoc => "readme",
        }
    }

    /// Unknown extensions open as plain text
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "lt" => LeafKind::Checklist,
            "note" => LeafKind::Kanban,
            "readme" => LeafKind::MarkdownDoc,
            _ => LeafKind::PlainText,
        }
    }

    /// Infer the kind from a file name suffix (`todo.lt` -> Checklist)
    pub fn from_name(name: &str) -> Self {
        name.rsplit_once('.')
            .map(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(LeafKind::PlainText)
    }
}

/// Node kind: a folder or a typed leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Folder,
    PlainText,
    Checklist,
    Kanban,
    MarkdownDoc,
}

impl NodeKind {
    pub fn leaf(&self) -> Option<LeafKind> {
        match self {
            NodeKind::Folder => None,
            NodeKind::PlainText => Some(LeafKind::PlainText),
            NodeKind::Checklist => Some(LeafKind::Checklist),
            NodeKind::Kanban => Some(LeafKind::Kanban),
            NodeKind::MarkdownDoc => Some(LeafKind::MarkdownDoc),
        }
    }
}

impl From<LeafKind> for NodeKind {
    fn from(kind: LeafKind) -> Self {
        match kind {
            LeafKind::PlainText => NodeKind::PlainText,
            LeafKind::Checklist => NodeKind::Checklist,
            LeafKind::Kanban => NodeKind::Kanban,
            LeafKind::MarkdownDoc => NodeKind::MarkdownDoc,
        }
    }
}

/// Entry in the file/folder tree
///
/// A folder never carries content and a leaf never has children; the
/// constructors are the only way the UI creates nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Node {
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children: Vec::new(),
            content: None,
        }
    }

    /// New leaf named `<base>.<ext>` with empty content
    pub fn file(base: &str, kind: LeafKind) -> Self {
        Self {
            name: format!("{}.{}", base, kind.extension()),
            kind: kind.into(),
            children: Vec::new(),
            content: Some(String::new()),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn leaf_kind(&self) -> Option<LeafKind> {
        self.kind.leaf()
    }

    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Drop fields that violate the folder/leaf invariant (config input)
    pub fn normalized(mut self) -> Self {
        if self.is_folder() {
            self.content = None;
            self.children = self.children.into_iter().map(Node::normalized).collect();
        } else {
            // The extension decides the editor, whatever kind was declared
            self.kind = LeafKind::from_name(&self.name).into();
            self.children.clear();
            self.content.get_or_insert_with(String::new);
        }
        self
    }
}

/// Checklist entry stored in `.lt` content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Kanban column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum NoteStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// Columns in display order
pub const NOTE_STATUSES: [NoteStatus; 3] = [NoteStatus::Todo, NoteStatus::InProgress, NoteStatus::Done];

impl NoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteStatus::Todo => "todo",
            NoteStatus::InProgress => "inProgress",
            NoteStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(NoteStatus::Todo),
            "inProgress" => Some(NoteStatus::InProgress),
            "done" => Some(NoteStatus::Done),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteStatus::Todo => "To Do",
            NoteStatus::InProgress => "In Progress",
            NoteStatus::Done => "Done",
        }
    }
}

/// Kanban note stored in `.note` content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanNote {
    pub id: String,
    pub text: String,
    pub status: NoteStatus,
}
