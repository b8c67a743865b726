// Prompt constants for the live interview.

/// Instruction the voice runtime uses for the agent's first generated reply.
pub const OPENING_INSTRUCTION: &str = "Please conduct a technical interview with the candidate \
    based on the provided system prompt and job description. Focus on assessing their deep \
    technical knowledge, problem-solving skills, and practical application abilities relevant \
    to the candidate's target role and the job description provided.";

/// Used when the backend has no candidate details for the room.
pub const FALLBACK_CANDIDATE_DETAILS: &str = "General candidate for technical interview";

/// Used when the backend has no job description for the room.
pub const FALLBACK_JOB_DESCRIPTION: &str =
    "Technical role requiring problem-solving and domain expertise";
