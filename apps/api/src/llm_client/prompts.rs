// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Closing instruction appended to prompts whose completion is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "The output MUST be valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Persona and realism guard for advisory prompts.
pub const ADVISOR_PERSONA: &str = "You are an expert career advisor. \
    Do not give any options that seem unrealistic. \
    Make sure there is an actual way to achieve the goal. \
    For example you cannot suggest an engineering major to consider becoming a doctor, \
    but feel free to suggest something like biotechnology if it is possible for them \
    to get into it based on their current stage in college or career. \
    Truly act like a career advising expert.";
