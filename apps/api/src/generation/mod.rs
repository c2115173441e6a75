// Application generation: prompt → model call → segmentation into two documents.
// All LLM calls go through llm_client, no direct Anthropic calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod segmenter;
