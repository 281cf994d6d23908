use serde::{Deserialize, Serialize};

/// Banding of a finished quiz's score, used for the results message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceTier {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => PerformanceTier::Excellent,
            70..=89 => PerformanceTier::Good,
            50..=69 => PerformanceTier::Average,
            _ => PerformanceTier::NeedsImprovement,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => {
                "Excelente! Você demonstra um conhecimento excepcional sobre a Proclamação da República."
            }
            PerformanceTier::Good => "Muito bom! Você tem um bom conhecimento sobre o tema.",
            PerformanceTier::Average => "Bom! Continue estudando para melhorar seu conhecimento.",
            PerformanceTier::NeedsImprovement => {
                "Que tal revisar o conteúdo? Há muito mais para aprender!"
            }
        }
    }
}
