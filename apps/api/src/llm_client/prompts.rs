// Shared prompt constants.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt used when a caller does not supply one.
pub const DEFAULT_SYSTEM: &str = "You are a helpful assistant.";

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY: &str = "Return ONLY valid JSON, no additional text.";
