//! Library-wide constants
//!
//! Single source of truth for endpoint addresses, model identifiers and
//! generation defaults.

/// Default values for generation requests
pub mod defaults {
    /// Model used when the caller does not pick one
    pub const GEMINI_MODEL: &str = "gemini-3-pro-preview";
    /// Sampling temperature; high enough for design variety
    pub const TEMPERATURE: f32 = 0.7;
}

/// Service endpoints
pub mod endpoints {
    /// Base URL of the hosted Gemini API
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
    /// API version segment used for `generateContent`
    pub const GEMINI_API_VERSION: &str = "v1beta";
    /// Default address of a local OpenAI-compatible server (llama.cpp)
    pub const OPENAI_COMPAT_BASE_URL: &str = "http://127.0.0.1:8080";
}

/// Backend identifiers used by the registry
pub mod backends {
    pub const GEMINI: &str = "Gemini";
    pub const OPENAI_COMPAT: &str = "OpenAI-compatible";
}

/// Environment variables consulted for credentials
pub mod env {
    /// Primary API key variable
    pub const API_KEY: &str = "API_KEY";
    /// Fallback API key variable
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
}
