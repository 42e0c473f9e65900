// Resume optimization: form state, request building and the Gemini-backed optimizer.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod form;
pub mod handlers;
pub mod models;
pub mod optimizer;
pub mod prompts;
pub mod schema;
