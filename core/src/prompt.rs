//! Prompt construction for the summary completion call.
//!
//! The wording here is part of the product contract: the response-format
//! instruction is what lets [`crate::summary::normalize_completion`] decode
//! most replies strictly. Edit with care.

/// System message sent with every summary completion.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for a CRM app.";

/// Build the user prompt for one summary request.
///
/// Absent name or email render as empty strings rather than placeholder
/// text, so the model never addresses a customer as "None".
pub fn build_summary_prompt(notes: &str, name: Option<&str>, email: Option<&str>) -> String {
    let name = name.unwrap_or("");
    let email = email.unwrap_or("");
    format!(
        "You are an assistant for a CRM app. Given the following notes, generate:\n\
         1. A friendly, detailed, and professional summary email for the user (name: {name}, email: {email}) based on the notes. The email should be 3-6 sentences, provide context, and include a warm closing.\n\
         2. A list of 2-4 relevant tags (comma-separated, no # or extra symbols).\n\
         3. A short, actionable next step or follow-up action (1 sentence).\n\
         \n\
         Respond ONLY with valid JSON in this format:\n\
         {{\"summary\": \"...\", \"tags\": \"tag1, tag2, tag3\", \"next_steps\": \"...\"}}\n\
         \n\
         Notes:\n\
         {notes}"
    )
}
