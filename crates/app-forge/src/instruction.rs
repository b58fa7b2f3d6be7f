//! Enriched instruction for a single design request

use crate::category::CategoryProfile;
use crate::prompt::DESIGN_PROMPT_ELEMENT_ID;

/// Build the user-facing instruction for an idea.
///
/// The idea is embedded verbatim, without escaping or truncation.
pub fn build_instruction(idea: &str, profile: &CategoryProfile) -> String {
    format!(
        r#"
  *** APP DESIGN REQUEST ***

  USER IDEA: "{idea}"

  CATEGORY: {category}
  DESIGN STYLE: {style}
  KEY FEATURES: {features}

  INSTRUCTIONS:
  1. Generate a "Design Board" view showing ALL screens: Splash, Onboarding(x3), Auth, Home, Search, Detail, Profile, Settings.
  2. Implement the "Dual-Mode" toggle (Grid vs Prototype).
  3. Ensure the CSS makes the Grid View look like a professional Figma/Dribbble presentation (screens in phone frames).
  4. Ensure the Prototype View feels like a real native app.
  5. DON'T FORGET the <script id="{element_id}">...</script> with the detailed prompt description.

  GENERATE THE FULL HTML NOW.
  "#,
        idea = idea,
        category = profile.name,
        style = profile.design_style,
        features = profile.key_features,
        element_id = DESIGN_PROMPT_ELEMENT_ID,
    )
}
