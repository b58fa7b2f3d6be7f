//! App Forge core
//!
//! Turns a free-text app idea into a single self-contained HTML file that
//! presents a mobile app design system. Each call is a stateless pipeline:
//!
//! 1. [`category::classify`] picks a category profile from keywords
//! 2. [`instruction::build_instruction`] enriches the idea with that profile
//! 3. a [`forge_inference::GenerationBackend`] is called exactly once
//! 4. [`sanitize::sanitize`] strips Markdown fences from the reply
//!
//! [`DesignGenerator`] wires the steps together.

pub mod category;
pub mod error;
pub mod generator;
pub mod instruction;
pub mod prompt;
pub mod sanitize;
pub mod types;

pub use category::{classify, Category, CategoryProfile};
pub use error::{GenerationError, Result};
pub use generator::{DesignGenerator, GenerationSettings};
pub use instruction::build_instruction;
pub use prompt::SYSTEM_INSTRUCTION;
pub use sanitize::{design_prompt, sanitize, FALLBACK_HTML};
pub use types::{Attachment, GenerationRequest, GenerationResult};
