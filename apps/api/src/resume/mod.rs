// Resume intake: PDF text extraction and LLM role/skills analysis.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod extract;
pub mod handlers;
pub mod parser;
pub mod prompts;
