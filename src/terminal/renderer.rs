use chrono::Local;
use itertools::Itertools;

use crate::model::{Notification, QuestionView, QuizResult, ResultsView};
use crate::quiz::messages::{format_time, UNANSWERED};

const PROGRESS_WIDTH: usize = 20;

fn progress_bar(position: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (position + 1) * PROGRESS_WIDTH / total
    };
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH.saturating_sub(filled))
    )
}

pub fn render_intro(title: &str, description: &str) -> String {
    format!(
        "{}\n{}\n\nPressione Enter para começar (h = histórico, q = sair).",
        title, description
    )
}

pub fn render_question(view: &QuestionView) -> String {
    let options = view
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let marker = if view.selected_index == Some(index) {
                "(x)"
            } else {
                "( )"
            };
            format!("  {} {}. {}", marker, index + 1, option)
        })
        .join("\n");

    let mut controls = Vec::new();
    if view.navigation.can_go_previous {
        controls.push("< Anterior");
    }
    if view.navigation.can_go_next {
        controls.push("> Próxima");
    }
    if view.navigation.shows_finish {
        controls.push("Enter Finalizar Quiz");
    }

    format!(
        "{} Pergunta {} de {}\n\n{}\n{}\n\n{}",
        progress_bar(view.position, view.total),
        view.position + 1,
        view.total,
        view.question_text,
        options,
        controls.join(" | ")
    )
}

pub fn render_results(view: &ResultsView, show_explanations: bool) -> String {
    let details = view
        .per_question_breakdown
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mark = if item.was_correct { "✓" } else { "✗" };
            let mut lines = vec![
                format!("{} Pergunta {}: {}", mark, index + 1, item.question_text),
                format!(
                    "    Sua resposta: {}",
                    item.user_option_text.as_deref().unwrap_or(UNANSWERED)
                ),
                format!("    Resposta correta: {}", item.correct_option_text),
            ];
            if show_explanations {
                lines.push(format!("    {}", item.explanation));
            }
            lines.join("\n")
        })
        .join("\n");

    format!(
        "Resultado do Quiz: {}%\n{} de {} perguntas corretas\nTempo: {}\n\n{}\n\nRespostas Detalhadas\n{}\n\nr = Refazer Quiz | s = Compartilhar Resultado | h = histórico | q = sair",
        view.score,
        view.correct_count,
        view.total,
        format_time(view.time_spent_seconds()),
        view.performance.message(),
        details
    )
}

pub fn render_history(results: &[QuizResult]) -> String {
    if results.is_empty() {
        return "Nenhum resultado salvo.".to_string();
    }
    let rows = results
        .iter()
        .rev()
        .enumerate()
        .map(|(index, result)| {
            format!(
                "{:>2}. {} {:>3}% ({}/{}) {}",
                index + 1,
                result
                    .completed_at()
                    .with_timezone(&Local)
                    .format("%d/%m/%Y %H:%M"),
                result.score(),
                result.correct_count(),
                result.total(),
                format_time(result.time_spent_seconds())
            )
        })
        .join("\n");
    format!("Últimos resultados\n{}", rows)
}

pub fn render_announcement(message: &str) -> String {
    format!("» {}", message)
}

pub fn render_notification(notification: &Notification) -> String {
    format!(
        "[{}] {}",
        notification.kind.title(),
        notification.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Answers, NavigationState, NotificationKind, PerformanceTier, QuestionBreakdown,
    };
    use chrono::Utc;
    use std::time::Duration;
    use uuid::Uuid;

    #[test]
    fn test_question_marks_selection_and_controls() {
        let view = QuestionView {
            question_id: 1,
            question_text: "Qual?".into(),
            options: vec!["a".into(), "b".into()],
            selected_index: Some(1),
            position: 1,
            total: 2,
            navigation: NavigationState::at(1, 2),
        };
        let text = render_question(&view);

        assert!(text.contains("Pergunta 2 de 2"));
        assert!(text.contains("( ) 1. a"));
        assert!(text.contains("(x) 2. b"));
        assert!(text.contains("Finalizar Quiz"));
        assert!(!text.contains("Próxima"));
        assert!(text.starts_with(&format!("[{}]", "#".repeat(PROGRESS_WIDTH))));
    }

    #[test]
    fn test_results_show_unanswered() {
        let view = ResultsView {
            score: 0,
            correct_count: 0,
            total: 1,
            time_spent: Duration::from_secs(75),
            performance: PerformanceTier::NeedsImprovement,
            per_question_breakdown: vec![QuestionBreakdown {
                question_text: "Qual?".into(),
                user_option_text: None,
                correct_option_text: "b".into(),
                explanation: "Porque b.".into(),
                was_correct: false,
            }],
        };

        let text = render_results(&view, false);
        assert!(text.contains("Sua resposta: Não respondida"));
        assert!(text.contains("Tempo: 1m 15s"));
        assert!(!text.contains("Porque b."));
        assert!(render_results(&view, true).contains("Porque b."));
    }

    #[test]
    fn test_history_lists_newest_first() {
        let older = QuizResult::new(
            Uuid::new_v4(),
            2,
            10,
            Duration::from_secs(30),
            Utc::now(),
            Answers::new(),
        );
        let newer = QuizResult::new(
            Uuid::new_v4(),
            9,
            10,
            Duration::from_secs(30),
            Utc::now(),
            Answers::new(),
        );
        let text = render_history(&[older, newer]);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[1].contains("90%"));
        assert!(lines[2].contains("20%"));
        assert_eq!(render_history(&[]), "Nenhum resultado salvo.");
    }

    #[test]
    fn test_notification_uses_kind_title() {
        let notification = Notification {
            message: "ok".into(),
            kind: NotificationKind::Success,
            duration: Duration::from_secs(4),
        };
        assert_eq!(render_notification(&notification), "[Sucesso] ok");
    }
}
