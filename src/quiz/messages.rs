//! User-facing text: live-region announcements, the share sentence and
//! time formatting for the results view.

pub const QUIZ_STARTED: &str = "Quiz iniciado. Primeira pergunta carregada.";
pub const QUIZ_RESTARTED: &str = "Quiz reiniciado. Primeira pergunta carregada.";
pub const SHARE_COPIED: &str = "Resultado copiado para a área de transferência!";
pub const UNANSWERED: &str = "Não respondida";

pub fn option_selected(option_text: &str) -> String {
    format!("Opção selecionada: {}", option_text)
}

/// `position` is zero-based; the announcement counts from one.
pub fn question_announcement(position: usize, prompt: &str) -> String {
    format!("Pergunta {}: {}", position + 1, prompt)
}

pub fn quiz_finished(correct_count: usize, total: usize, score: u8) -> String {
    format!(
        "Quiz finalizado. Você acertou {} de {} perguntas. Pontuação: {}%",
        correct_count, total, score
    )
}

pub fn share_text(title: &str, correct_count: usize, total: usize, score: u8) -> String {
    let topic = title.strip_prefix("Quiz: ").unwrap_or(title);
    format!(
        "Acabei de fazer o quiz sobre a {} e acertei {} de {} perguntas ({}%)! Teste seus conhecimentos também!",
        topic, correct_count, total, score
    )
}

pub fn format_time(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, remaining_seconds)
    } else {
        format!("{}s", remaining_seconds)
    }
}
