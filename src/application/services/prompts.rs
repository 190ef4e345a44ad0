use crate::domain::Difficulty;

/// System prompt handed to the completion client. `{context}` is replaced
/// with the document excerpt for each call.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an assistant that writes and grades quiz \
questions. Use only the document excerpt below and answer with JSON only, no prose.\n\n\
Document excerpt:\n{context}";

pub fn question_generation_prompt(difficulty: &Difficulty) -> String {
    format!(
        "Generate clear, self-contained quiz questions with {difficulty} difficulty based on the \
document excerpt. Respond with a JSON array. Each element is an object with the fields \
\"question\" (ending with a question mark), \"type\" (one of \"mcq\", \"yes_no\", \
\"short_answer\") and \"answers\" (for \"mcq\" the correct answer first followed by three wrong \
ones, for \"yes_no\" [\"Yes\", \"No\"], for \"short_answer\" one short correct answer)."
    )
}

pub fn answer_validation_prompt(question: &str, user_answer: &str) -> String {
    format!(
        "Decide whether the user's answer to the question is correct according to the document \
excerpt. Respond with a JSON object with the fields \"correct\" (boolean), \"correct_answer\" \
(the answer supported by the excerpt) and \"explanation\" (one sentence).\n\n\
Question: {question}\nUser answer: {user_answer}"
    )
}
