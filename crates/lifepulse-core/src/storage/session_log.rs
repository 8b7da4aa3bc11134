//! Append-only text log of completed check-ins.
//!
//! The file starts with a fixed header and gets one rule-delimited block per
//! check-in. Existing content is never rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{CoreError, Result};
use crate::session::CheckInEntry;
use crate::streak::DATE_FORMAT;

pub const LOG_HEADER: &str = "LIFEPULSE LOG\n=============\n\n";
pub const RULE: &str = "--------------------------------------------------";

const DATE_LABEL: &str = "Date: ";
const FEELING_LABEL: &str = "Feeling: ";
const PHASE_LABEL: &str = "Energy phase: ";
const ACTION_LABEL: &str = "Micro-action: ";
const PEP_LABEL: &str = "Pep talk: ";
const QUESTION_LABEL: &str = "Reflection question: ";
const REFLECTION_LABEL: &str = "Reflection: ";
/// Prefix for continuation lines of a multi-line reflection.
const CONTINUATION: &str = "  ";

/// Entry read back from the log. Same shape as the entry that was written.
pub type LoggedEntry = CheckInEntry;

/// Writer and reader for the session log file.
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, writing the header first if the file is new or empty.
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` if the file cannot be opened or written. Not retried.
    pub fn append(&self, entry: &CheckInEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CoreError::storage(&self.path, e))?;

        let is_empty = file
            .metadata()
            .map_err(|e| CoreError::storage(&self.path, e))?
            .len()
            == 0;

        let mut block = String::new();
        if is_empty {
            block.push_str(LOG_HEADER);
        }
        block.push_str(&format_block(entry));

        file.write_all(block.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| CoreError::storage(&self.path, e))?;

        debug!(path = %self.path.display(), date = %entry.date, "appended session log entry");
        Ok(())
    }

    /// Parse every block in the log. Missing file means no entries.
    ///
    /// Blocks that do not parse are skipped with a warning. A block cut short
    /// by an interrupted append (no closing rule) is dropped and reading
    /// resumes at the next block's opening rule.
    ///
    /// # Errors
    ///
    /// `StorageUnavailable` if the file exists but cannot be read.
    pub fn read_entries(&self) -> Result<Vec<LoggedEntry>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CoreError::storage(&self.path, e)),
        };

        let mut entries = Vec::new();
        let mut block: Option<Vec<&str>> = None;
        let mut lines = content.lines().peekable();

        while let Some(line) = lines.next() {
            // A partial last line runs straight into the next block's rule.
            let Some(fragment) = line.strip_suffix(RULE) else {
                if let Some(open) = block.as_mut() {
                    open.push(line);
                }
                continue;
            };

            let Some(open) = block.take() else {
                block = Some(Vec::new());
                continue;
            };

            let opens_next = lines
                .peek()
                .is_some_and(|next| next.starts_with(DATE_LABEL));
            if !fragment.is_empty() || opens_next {
                warn!(path = %self.path.display(), "skipping truncated log block");
                block = Some(Vec::new());
                continue;
            }

            match parse_block(&open) {
                Some(entry) => entries.push(entry),
                None => warn!(path = %self.path.display(), "skipping unreadable log block"),
            }
        }

        if block.is_some_and(|open| !open.is_empty()) {
            warn!(path = %self.path.display(), "skipping truncated final log block");
        }

        Ok(entries)
    }
}

fn format_block(entry: &CheckInEntry) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{DATE_LABEL}{}\n", entry.date.format(DATE_FORMAT)));
    out.push_str(&format!("{FEELING_LABEL}{}\n", entry.feeling));
    out.push_str(&format!("{PHASE_LABEL}{}\n", entry.phase));
    out.push_str(&format!("{ACTION_LABEL}{}\n", entry.micro_action));
    out.push_str(&format!("{PEP_LABEL}{}\n", entry.pep_talk));
    out.push_str(&format!("{QUESTION_LABEL}{}\n", entry.reflection_question));
    if let Some(reflection) = &entry.reflection {
        let indented = reflection.lines().collect::<Vec<_>>().join(&format!("\n{CONTINUATION}"));
        out.push_str(&format!("{REFLECTION_LABEL}{indented}\n"));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

fn parse_block(lines: &[&str]) -> Option<CheckInEntry> {
    let field = |label: &str| {
        lines
            .iter()
            .find_map(|line| line.strip_prefix(label))
            .map(str::to_string)
    };

    let date = NaiveDate::parse_from_str(&field(DATE_LABEL)?, DATE_FORMAT).ok()?;
    let feeling = field(FEELING_LABEL)?.parse().ok()?;
    let phase = field(PHASE_LABEL)?.parse().ok()?;

    let reflection = lines
        .iter()
        .position(|line| line.starts_with(REFLECTION_LABEL))
        .map(|start| {
            let mut text = lines[start][REFLECTION_LABEL.len()..].to_string();
            for line in &lines[start + 1..] {
                match line.strip_prefix(CONTINUATION) {
                    Some(rest) => {
                        text.push('\n');
                        text.push_str(rest);
                    }
                    None => break,
                }
            }
            text
        });

    Some(CheckInEntry {
        date,
        feeling,
        phase,
        micro_action: field(ACTION_LABEL)?,
        pep_talk: field(PEP_LABEL)?,
        reflection_question: field(QUESTION_LABEL)?,
        reflection,
    })
}
