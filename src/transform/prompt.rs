//! Prompt construction for the text transforms.
//!
//! Both operations use a fixed system prompt plus the user's text, with the
//! model temperature chosen per operation. Correction must not restate or
//! embellish, so it runs cold; rewriting gets warmer with intensity.

use super::RewriteStyle;

/// A provider-agnostic chat request: system instruction, user text, and a
/// sampling temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub system: String,
    pub user: String,
    pub temperature: f64,
}

/// Builds the grammar/punctuation correction prompt.
pub fn correction_prompt(text: &str) -> PromptRequest {
    PromptRequest {
        system: "You are a careful copy editor. Correct the grammar, spelling, and \
                 punctuation of the text the user provides. Preserve the original \
                 wording, meaning, and tone as much as possible. Respond with only \
                 the corrected text, no explanations or formatting."
            .to_string(),
        user: text.to_string(),
        temperature: 0.2,
    }
}

/// Builds the style-rewrite prompt for a clamped intensity in [0.0, 1.0].
pub fn rewrite_prompt(text: &str, style: RewriteStyle, intensity: f32) -> PromptRequest {
    PromptRequest {
        system: format!(
            "You are a skilled editor. Rewrite the text the user provides so it is \
             {}. {} Respond with only the rewritten text, no explanations or \
             formatting.",
            style.describe(),
            intensity_instruction(intensity)
        ),
        user: text.to_string(),
        temperature: rewrite_temperature(intensity),
    }
}

/// Maps intensity to an editing-latitude instruction for the model.
fn intensity_instruction(intensity: f32) -> &'static str {
    if intensity < 0.25 {
        "Make only light touches: adjust individual words and small phrases, \
         keeping the original sentences intact."
    } else if intensity < 0.5 {
        "Make moderate changes: rephrase sentences where it helps, but keep the \
         original structure and order."
    } else if intensity < 0.75 {
        "Make substantial changes: restructure sentences and paragraphs freely \
         while keeping every point the author makes."
    } else {
        "Rewrite completely: reshape the text from the ground up in the target \
         style, preserving only the underlying meaning."
    }
}

/// Sampling temperature scales with intensity so stronger rewrites get more
/// latitude.
fn rewrite_temperature(intensity: f32) -> f64 {
    0.3 + 0.5 * intensity as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction_prompt_carries_text_verbatim() {
        let request = correction_prompt("teh quick brown fox");
        assert_eq!(request.user, "teh quick brown fox");
        assert!(request.system.contains("grammar"));
        assert!(request.temperature < 0.5);
    }

    #[test]
    fn test_rewrite_prompt_mentions_style() {
        let request = rewrite_prompt("hello", RewriteStyle::Academic, 0.5);
        assert!(request.system.contains("academic"));
        assert_eq!(request.user, "hello");
    }

    #[test]
    fn test_intensity_bands() {
        assert!(intensity_instruction(0.0).contains("light touches"));
        assert!(intensity_instruction(0.3).contains("moderate"));
        assert!(intensity_instruction(0.6).contains("substantial"));
        assert!(intensity_instruction(1.0).contains("completely"));
    }

    #[test]
    fn test_band_edges() {
        assert!(intensity_instruction(0.24).contains("light touches"));
        assert!(intensity_instruction(0.25).contains("moderate"));
        assert!(intensity_instruction(0.75).contains("completely"));
    }

    #[test]
    fn test_temperature_scales_with_intensity() {
        assert!(rewrite_temperature(0.0) < rewrite_temperature(1.0));
        assert!((rewrite_temperature(1.0) - 0.8).abs() < 1e-9);
    }
}
