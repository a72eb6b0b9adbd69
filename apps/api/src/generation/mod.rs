// Career tree generation: prompt construction, the single LLM call, and
// fence-stripping + JSON parse + shape validation of the completion.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod validation;
