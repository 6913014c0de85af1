//! Central TUI state. Everything rendered on screen comes from this struct;
//! nothing persists across runs.

use std::time::{Duration, Instant};

use crate::models::Evaluation;

/// How long the "Copied!" marker stays up after a rewrite is copied.
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

#[derive(Debug, Clone)]
pub struct CopyFeedback {
    pub index: usize,
    pub at: Instant,
}

pub struct ReviewState {
    /// Draft prompt text.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor_pos: usize,
    pub focus: Focus,
    /// While set, resubmission is disabled: one outstanding request at a time.
    pub is_loading: bool,
    /// Mutually exclusive with `evaluation`.
    pub error: Option<String>,
    pub evaluation: Option<Evaluation>,
    pub scroll_offset: u16,
    pub spinner_frame: usize,
    /// Transient per-rewrite "Copied!" marker, cleared by `tick`.
    pub copied: Option<CopyFeedback>,
    /// One-line note for the status bar (e.g. clipboard unavailable).
    pub status_note: Option<String>,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            focus: Focus::Input,
            is_loading: false,
            error: None,
            evaluation: None,
            scroll_offset: 0,
            spinner_frame: 0,
            copied: None,
            status_note: None,
        }
    }
}

impl ReviewState {
    /// Validates the draft and, if submittable, flips into the loading state
    /// and returns the prompt to send. Empty input sets a local validation
    /// error and makes no request; an in-flight request blocks resubmission.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_loading {
            return None;
        }
        if self.input.trim().is_empty() {
            self.error = Some("Please enter a prompt to evaluate".to_string());
            return None;
        }
        self.is_loading = true;
        self.error = None;
        self.evaluation = None;
        self.status_note = None;
        Some(self.input.clone())
    }

    pub fn finish_with_result(&mut self, evaluation: Evaluation) {
        self.is_loading = false;
        self.error = None;
        self.evaluation = Some(evaluation);
        self.scroll_offset = 0;
        self.copied = None;
        self.focus = Focus::Results;
    }

    pub fn finish_with_error(&mut self, message: String) {
        self.is_loading = false;
        self.evaluation = None;
        self.error = Some(message);
    }

    pub fn mark_copied(&mut self, index: usize) {
        self.copied = Some(CopyFeedback {
            index,
            at: Instant::now(),
        });
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied
            .as_ref()
            .is_some_and(|fb| fb.index == index && fb.at.elapsed() < COPY_FEEDBACK_TTL)
    }

    /// Advances animation frames and expires the copy marker. Called once per
    /// poll interval.
    pub fn tick(&mut self) {
        if self.is_loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
        if let Some(fb) = &self.copied {
            if fb.at.elapsed() >= COPY_FEEDBACK_TTL {
                self.copied = None;
            }
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            let prev_len = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(char::len_utf8)
                .unwrap_or(0);
            self.cursor_pos -= prev_len;
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            let prev_len = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(char::len_utf8)
                .unwrap_or(0);
            self.cursor_pos -= prev_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Cursor position as (row, column) in character terms, for rendering
    /// the multi-line draft.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.input[..self.cursor_pos];
        let row = before.matches('\n').count();
        let col = before.rsplit('\n').next().unwrap_or("").chars().count();
        (row, col)
    }

    /// Visual height of the draft in lines.
    pub fn input_line_count(&self) -> usize {
        self.input.split('\n').count()
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_evaluation() -> Evaluation {
        serde_json::from_str(
            r#"{
                "totalScore": 80, "maxScore": 100,
                "rating": "Good - Needs targeted improvements in specific areas",
                "overallFeedback": "Solid."
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_submit_sets_validation_error_and_no_request() {
        let mut state = ReviewState::default();
        state.input = "   \n  ".to_string();
        assert!(state.begin_submit().is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Please enter a prompt to evaluate")
        );
        assert!(!state.is_loading);
    }

    #[test]
    fn submit_clears_previous_outcome_and_sets_loading() {
        let mut state = ReviewState::default();
        state.error = Some("old error".to_string());
        state.input = "Evaluate me".to_string();
        assert_eq!(state.begin_submit().as_deref(), Some("Evaluate me"));
        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert!(state.evaluation.is_none());
    }

    #[test]
    fn loading_blocks_resubmission() {
        let mut state = ReviewState::default();
        state.input = "Evaluate me".to_string();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn result_and_error_are_mutually_exclusive() {
        let mut state = ReviewState::default();
        state.finish_with_error("boom".to_string());
        assert!(state.error.is_some());
        assert!(state.evaluation.is_none());

        state.finish_with_result(sample_evaluation());
        assert!(state.error.is_none());
        assert!(state.evaluation.is_some());

        state.finish_with_error("boom again".to_string());
        assert!(state.error.is_some());
        assert!(state.evaluation.is_none());
    }

    #[test]
    fn copy_feedback_is_independent_per_version() {
        let mut state = ReviewState::default();
        state.mark_copied(1);
        assert!(state.is_copied(1));
        assert!(!state.is_copied(0));
        assert!(!state.is_copied(2));
    }

    #[test]
    fn copy_feedback_expires_after_ttl() {
        let mut state = ReviewState::default();
        state.copied = Some(CopyFeedback {
            index: 0,
            at: Instant::now() - COPY_FEEDBACK_TTL,
        });
        assert!(!state.is_copied(0));
        state.tick();
        assert!(state.copied.is_none());
    }

    #[test]
    fn copying_another_version_replaces_the_marker() {
        let mut state = ReviewState::default();
        state.mark_copied(0);
        state.mark_copied(2);
        assert!(!state.is_copied(0));
        assert!(state.is_copied(2));
    }

    #[test]
    fn multiline_draft_tracks_cursor_row_and_col() {
        let mut state = ReviewState::default();
        for c in "line one\nline two".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.input_line_count(), 2);
        assert_eq!(state.cursor_line_col(), (1, 8));

        state.cursor_left();
        assert_eq!(state.cursor_line_col(), (1, 7));

        state.clear_input();
        assert_eq!(state.input_line_count(), 1);
        assert_eq!(state.cursor_line_col(), (0, 0));
    }

    #[test]
    fn cursor_editing_is_char_boundary_safe() {
        let mut state = ReviewState::default();
        for c in "héllo".chars() {
            state.insert_char(c);
        }
        state.backspace();
        state.backspace();
        state.backspace();
        state.backspace();
        assert_eq!(state.input, "h");
        state.cursor_left();
        state.cursor_right();
        assert_eq!(state.cursor_pos, 1);
    }
}
