use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::{NotizError, Result};

/// A note as it round-trips through an external editor.
/// Buffer format: first line is the title, then a blank line, then the
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorContent {
    pub title: String,
    pub content: String,
}

impl EditorContent {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn to_buffer(&self) -> String {
        if self.content.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.content)
        }
    }

    pub fn from_buffer(buffer: &str) -> Self {
        match buffer.split_once('\n') {
            Some((title, rest)) => Self {
                title: title.trim().to_string(),
                content: rest.trim().to_string(),
            },
            None => Self {
                title: buffer.trim().to_string(),
                content: String::new(),
            },
        }
    }
}

/// The editor command: $VISUAL, then $EDITOR, then common fallbacks.
fn editor_command() -> Result<String> {
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        let found = Command::new("which")
            .arg(fallback)
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false);
        if found {
            return Ok(fallback.to_string());
        }
    }

    Err(NotizError::App(
        "No editor found. Set $EDITOR.".to_string(),
    ))
}

fn open_in_editor(path: &Path) -> Result<String> {
    let editor = editor_command()?;

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|err| NotizError::App(format!("Failed to launch editor '{editor}': {err}")))?;

    if !status.success() {
        return Err(NotizError::App(format!(
            "Editor '{editor}' exited with non-zero status"
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Opens the user's editor seeded with `initial` and parses the buffer
/// back after it closes.
pub fn edit_note(initial: &EditorContent) -> Result<EditorContent> {
    let path = env::temp_dir().join("notiz_edit.md");
    fs::write(&path, initial.to_buffer())?;

    let result = open_in_editor(&path);
    let _ = fs::remove_file(&path);

    Ok(EditorContent::from_buffer(&result?))
}
