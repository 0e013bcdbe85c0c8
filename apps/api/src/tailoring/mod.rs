// Resume tailoring pipeline: extract → build prompt → one completion call.
// All LLM calls go through llm_client; extraction runs on the blocking pool.

pub mod handlers;
pub mod prompts;
pub mod tailor;
