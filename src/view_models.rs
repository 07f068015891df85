use crate::model::TestResult;

/// Fila del resumen final, lista para pintar en la tabla.
#[derive(Clone, Debug)]
pub struct AnswerRow {
    pub index_1based: usize,
    pub word: String,
    pub user_answer: String,
    pub is_correct: bool,
    pub added_to_difficult: bool,
}

impl AnswerRow {
    pub fn status_label(&self) -> &'static str {
        if self.is_correct {
            "✅ Correcta"
        } else if self.added_to_difficult {
            "📒 No la sabía"
        } else {
            "❌ Fallada"
        }
    }
}

pub fn answer_rows(result: &TestResult) -> Vec<AnswerRow> {
    result
        .details
        .iter()
        .enumerate()
        .map(|(i, r)| AnswerRow {
            index_1based: i + 1,
            word: r.word.clone(),
            user_answer: r.user_answer.clone(),
            is_correct: r.is_correct,
            added_to_difficult: r.added_to_difficult,
        })
        .collect()
}
