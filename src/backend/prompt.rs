//! Prompt text shared by the generation backends.

/// Persona and instruction given to every backend.
pub const EXPERT_INSTRUCTION: &str = "Sen bir futbol uzmanısın. Sana verilen oyuncu verisini kullanarak kullanıcının sorusunu nazikçe ve kısa bir şekilde cevapla.";

/// System message for chat-style backends; the question travels as a separate user message.
pub fn system_prompt(context: &str) -> String {
    format!("{} Oyuncu Bilgisi: {}", EXPERT_INSTRUCTION, context)
}

/// Single-message prompt carrying instruction, context and question together.
pub fn single_prompt(user_query: &str, context: &str) -> String {
    format!(
        "{}\nOyuncu Bilgisi: {}\nSoru: {}",
        EXPERT_INSTRUCTION, context, user_query
    )
}
