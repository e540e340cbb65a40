// Content generation: cover letters and interview preparation.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod cover_letter;
pub mod handlers;
pub mod interview;
pub mod prompts;
