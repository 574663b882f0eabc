use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Longest alias accepted, counted in characters after trimming
pub const MAX_ALIAS_CHARS: usize = 20;

/// Errors raised by clip list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipError {
    #[error("Alias cannot be longer than {max} characters (got {len}).")]
    AliasTooLong { len: usize, max: usize },

    #[error("No clip at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to copy item to clipboard: {0}")]
    Clipboard(String),
}

/// A stored text snippet with an optional short label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    /// Text written to the clipboard on copy (never empty)
    pub value: String,
    /// Optional label, at most `MAX_ALIAS_CHARS` characters
    #[serde(default)]
    pub alias: Option<String>,
}

impl Clip {
    /// Build a clip from raw user input.
    ///
    /// Both fields are trimmed. An empty value yields `Ok(None)` so callers can
    /// ignore the request silently; an over-long alias is a validation error.
    pub fn from_input(value: &str, alias: &str) -> Result<Option<Clip>, ClipError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }

        let alias = alias.trim();
        let len = alias.chars().count();
        if len > MAX_ALIAS_CHARS {
            return Err(ClipError::AliasTooLong {
                len,
                max: MAX_ALIAS_CHARS,
            });
        }

        Ok(Some(Clip {
            value: value.to_string(),
            alias: (!alias.is_empty()).then(|| alias.to_string()),
        }))
    }

    /// Single-line preview of the value that fits in `max_width` columns
    pub fn preview(&self, max_width: usize) -> String {
        let first_line = self.value.lines().next().unwrap_or("");
        let truncated = truncate_to_width(first_line, max_width);
        if truncated.len() < first_line.len() || self.value.lines().nth(1).is_some() {
            // Mark hidden content, keeping within the width budget
            let room = max_width.saturating_sub(3);
            format!("{}...", truncate_to_width(first_line, room))
        } else {
            truncated
        }
    }
}

/// Cut `text` so its display width does not exceed `max_width`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

/// The user's ordered collection of clips.
/// Position is identity: indices shift on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipList {
    clips: Vec<Clip>,
}

impl ClipList {
    pub fn new() -> Self {
        ClipList { clips: Vec::new() }
    }

    pub fn from_clips(clips: Vec<Clip>) -> Self {
        ClipList { clips }
    }

    /// Append a clip, returning its index
    pub fn push(&mut self, clip: Clip) -> usize {
        self.clips.push(clip);
        self.clips.len() - 1
    }

    /// Remove the clip at `index`
    pub fn remove(&mut self, index: usize) -> Result<Clip, ClipError> {
        self.check_index(index)?;
        Ok(self.clips.remove(index))
    }

    /// Reposition a clip: remove it from `from`, then insert it at `to`.
    ///
    /// For a forward move the insert happens after the removal has shifted the
    /// tail down by one. Returns `Ok(false)` when `from == to`.
    pub fn move_clip(&mut self, from: usize, to: usize) -> Result<bool, ClipError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(false);
        }

        let clip = self.clips.remove(from);
        self.clips.insert(to, clip);
        Ok(true)
    }

    pub fn get(&self, index: usize) -> Option<&Clip> {
        self.clips.get(index)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clip> {
        self.clips.iter()
    }

    pub fn as_slice(&self) -> &[Clip] {
        &self.clips
    }

    fn check_index(&self, index: usize) -> Result<(), ClipError> {
        if index < self.clips.len() {
            Ok(())
        } else {
            Err(ClipError::IndexOutOfRange {
                index,
                len: self.clips.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a ClipList {
    type Item = &'a Clip;
    type IntoIter = std::slice::Iter<'a, Clip>;

    fn into_iter(self) -> Self::IntoIter {
        self.clips.iter()
    }
}
