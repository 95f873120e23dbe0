//! Preset edit prompts.
//!
//! Each preset pins the model to background/lighting/attire edits while
//! insisting the subject's identity stays untouched.

/// A selectable edit preset.
#[derive(Debug, Clone, Copy)]
pub struct PresetPrompt {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

/// Preset id that takes a user-authored instruction instead of a canned one.
pub const CUSTOM_PRESET_ID: &str = "custom-edit";

/// Suggested starting point for custom instructions.
pub const DEFAULT_CUSTOM_PROMPT: &str =
    "Fix lighting and make the background look professional.";

pub const PRESET_PROMPTS: &[PresetPrompt] = &[
    PresetPrompt {
        id: "professional-studio",
        label: "Studio Headshot",
        description: "Clean dark background, soft lighting.",
        prompt: "Edit this image to look like a professional studio headshot. Replace the background with a solid, high-quality dark grey smooth backdrop. Apply soft, flattering studio lighting to the face. \n\nCRITICAL INSTRUCTION: You MUST preserve the person's facial features, identity, and expression exactly as they are. Do not generate a new face. Only modify the background and lighting quality.",
    },
    PresetPrompt {
        id: "corporate-office",
        label: "Corporate Office",
        description: "Blurred office background, suit.",
        prompt: "Edit this photo to place the subject in a professional corporate office setting. Change the background to a blurred, modern glass office depth-of-field effect. Change the clothing to a sharp, dark business suit. \n\nCRITICAL INSTRUCTION: Keep the face 100% identical to the original image. Do NOT alter the eyes, nose, mouth, or facial structure. The identity must remain unchanged.",
    },
    PresetPrompt {
        id: "tech-modern",
        label: "Tech Founder",
        description: "Modern, bright, smart casual.",
        prompt: "Transform this into a Silicon Valley tech founder portrait. Change the background to a bright, airy, blurred architectural space or outdoor campus. Change clothing to high-end smart casual (e.g., a quality plain t-shirt or sweater). \n\nCRITICAL INSTRUCTION: Do not change the person's face. The identity, facial structure, and expression must be preserved exactly. Only edit the environment and attire.",
    },
    PresetPrompt {
        id: "creative-minimal",
        label: "Creative B&W",
        description: "High contrast, monochrome.",
        prompt: "Apply a high-contrast black and white artistic filter. Remove the background and replace it with pure black. Enhance the lighting to be dramatic. \n\nCRITICAL INSTRUCTION: Preserve the facial features and identity completely. Do not alter the face.",
    },
    PresetPrompt {
        id: CUSTOM_PRESET_ID,
        label: "Magic Edit",
        description: "Type your own custom request.",
        prompt: "",
    },
];

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static PresetPrompt> {
    PRESET_PROMPTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_preset_by_id() {
        let preset = find_preset("professional-studio").unwrap();
        assert_eq!(preset.label, "Studio Headshot");
        assert!(!preset.prompt.is_empty());
    }

    #[test]
    fn find_preset_unknown_id_is_none() {
        assert!(find_preset("does-not-exist").is_none());
    }

    #[test]
    fn custom_preset_has_no_canned_prompt() {
        let preset = find_preset(CUSTOM_PRESET_ID).unwrap();
        assert!(preset.prompt.is_empty());
    }

    #[test]
    fn all_canned_presets_preserve_identity() {
        for preset in PRESET_PROMPTS {
            if preset.id != CUSTOM_PRESET_ID {
                assert!(
                    preset.prompt.contains("CRITICAL INSTRUCTION"),
                    "{} is missing the identity guard",
                    preset.id
                );
            }
        }
    }
}
