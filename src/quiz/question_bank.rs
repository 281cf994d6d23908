use crate::model::{Question, QuestionSet};

fn question(
    id: u32,
    prompt: &str,
    options: [&str; 4],
    correct_index: usize,
    explanation: &str,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
    }
}

/// The site's ten-question quiz on the proclamation of the Brazilian republic.
pub fn proclamation_quiz() -> QuestionSet {
    QuestionSet {
        title: "Quiz: Proclamação da República".to_string(),
        description: "Teste seus conhecimentos sobre a Proclamação da República do Brasil"
            .to_string(),
        questions: vec![
            question(
                1,
                "Em que data foi proclamada a República do Brasil?",
                [
                    "15 de novembro de 1888",
                    "15 de novembro de 1889",
                    "15 de novembro de 1890",
                    "15 de novembro de 1891",
                ],
                1,
                "A Proclamação da República ocorreu em 15 de novembro de 1889, no Campo de Santana, Rio de Janeiro.",
            ),
            question(
                2,
                "Quem foi o líder militar que proclamou a República?",
                [
                    "Floriano Peixoto",
                    "Benjamin Constant",
                    "Deodoro da Fonseca",
                    "Quintino Bocaiuva",
                ],
                2,
                "O Marechal Deodoro da Fonseca foi o líder militar que proclamou a República e tornou-se o primeiro presidente do Brasil.",
            ),
            question(
                3,
                "Qual foi o último imperador do Brasil?",
                ["Dom Pedro I", "Dom Pedro II", "Princesa Isabel", "Dom João VI"],
                1,
                "Dom Pedro II foi o último imperador do Brasil, deposto em 15 de novembro de 1889.",
            ),
            question(
                4,
                "Onde ocorreu a Proclamação da República?",
                [
                    "Praça da República, São Paulo",
                    "Campo de Santana, Rio de Janeiro",
                    "Praça da Liberdade, Belo Horizonte",
                    "Praça da República, Salvador",
                ],
                1,
                "A Proclamação da República ocorreu no Campo de Santana, no Rio de Janeiro, então capital do Brasil.",
            ),
            question(
                5,
                "Qual documento estabeleceu as bases ideológicas do movimento republicano?",
                [
                    "Constituição de 1891",
                    "Manifesto Republicano de 1870",
                    "Lei Áurea de 1888",
                    "Proclamação de 1889",
                ],
                1,
                "O Manifesto Republicano de 1870 estabeleceu as bases ideológicas do movimento republicano brasileiro.",
            ),
            question(
                6,
                "Quem assinou a Lei Áurea em 1888, abolindo a escravidão?",
                [
                    "Dom Pedro II",
                    "Princesa Isabel",
                    "Deodoro da Fonseca",
                    "Rui Barbosa",
                ],
                1,
                "A Princesa Isabel, regente do Brasil, assinou a Lei Áurea em 13 de maio de 1888, abolindo definitivamente a escravidão no Brasil.",
            ),
            question(
                7,
                "Qual militar ficou conhecido como 'Marechal de Ferro'?",
                [
                    "Deodoro da Fonseca",
                    "Benjamin Constant",
                    "Floriano Peixoto",
                    "Quintino Bocaiuva",
                ],
                2,
                "Floriano Peixoto, segundo presidente do Brasil, ficou conhecido como 'Marechal de Ferro' por sua firmeza ao consolidar a República.",
            ),
            question(
                8,
                "Qual foi o principal redator da Constituição de 1891?",
                [
                    "Benjamin Constant",
                    "Quintino Bocaiuva",
                    "Rui Barbosa",
                    "José do Patrocínio",
                ],
                2,
                "Rui Barbosa foi o principal redator da primeira Constituição republicana brasileira, promulgada em 24 de fevereiro de 1891.",
            ),
            question(
                9,
                "Que conflito contribuiu para a politização do Exército brasileiro?",
                [
                    "Guerra dos Farrapos",
                    "Guerra do Paraguai",
                    "Revolta da Armada",
                    "Guerra de Canudos",
                ],
                1,
                "A Guerra do Paraguai (1864-1870) politizou o Exército brasileiro, criando oficiais que questionavam o regime imperial.",
            ),
            question(
                10,
                "Qual foi a primeira forma de governo da República brasileira?",
                [
                    "Parlamentarismo",
                    "Monarquia Constitucional",
                    "Governo Provisório",
                    "Ditadura Militar",
                ],
                2,
                "Após a Proclamação, foi estabelecido um Governo Provisório liderado por Deodoro da Fonseca, até a promulgação da Constituição de 1891.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_valid() {
        let set = proclamation_quiz();
        assert!(set.validate().is_ok());
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_correct_indices() {
        let indices: Vec<usize> = proclamation_quiz()
            .questions
            .iter()
            .map(|q| q.correct_index)
            .collect();
        assert_eq!(indices, vec![1, 2, 1, 1, 1, 1, 2, 2, 1, 2]);
    }
}
