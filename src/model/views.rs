use std::time::Duration;

use super::PerformanceTier;

/// Which navigation controls a view should offer for the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Only the terminal question offers "finish" in place of "next".
    pub shows_finish: bool,
}

impl NavigationState {
    pub fn at(position: usize, total: usize) -> Self {
        let is_last = position + 1 >= total;
        Self {
            can_go_previous: position > 0,
            can_go_next: !is_last,
            shows_finish: is_last,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub question_id: u32,
    pub question_text: String,
    pub options: Vec<String>,
    pub selected_index: Option<usize>,
    pub position: usize,
    pub total: usize,
    pub navigation: NavigationState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBreakdown {
    pub question_text: String,
    pub user_option_text: Option<String>,
    pub correct_option_text: String,
    pub explanation: String,
    pub was_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub score: u8,
    pub correct_count: usize,
    pub total: usize,
    pub time_spent: Duration,
    pub performance: PerformanceTier,
    pub per_question_breakdown: Vec<QuestionBreakdown>,
}

impl ResultsView {
    pub fn time_spent_seconds(&self) -> u64 {
        self.time_spent.as_secs()
    }
}
