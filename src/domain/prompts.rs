//! App-builder prompt generators
//!
//! Each prompt deterministically interpolates its arguments into a fixed
//! template and returns a single user message. Optional arguments contribute
//! a clause only when supplied.

use serde_json::{Map, Value};

use crate::domain::args::{optional_str, optional_str_list, required_str};
use crate::errors::AppError;
use crate::mcp::protocol::GetPromptResult;
use crate::registry::{ArgumentSpec, HandlerDescriptor, HandlerFn, InputSchema};

pub fn descriptors() -> Vec<HandlerDescriptor> {
    vec![
        insane_website_concept_descriptor(),
        chaotic_ui_component_descriptor(),
        absurd_layout_generator_descriptor(),
        ridiculous_content_strategy_descriptor(),
        nonsensical_features_descriptor(),
    ]
}

fn insane_website_concept_descriptor() -> HandlerDescriptor {
    HandlerDescriptor {
        name: "insane-website-concept",
        description:
            "Generate an absolutely unhinged website concept that defies all conventional wisdom",
        input_schema: InputSchema::new(
            vec![
                (
                    "theme",
                    ArgumentSpec::string(
                        "Base theme or topic (e.g., 'cats', 'space', 'conspiracy theories')",
                    ),
                ),
                (
                    "chaos_level",
                    ArgumentSpec::string_enum(
                        &["mild", "moderate", "extreme", "reality-breaking"],
                        "How unhinged should this get?",
                    ),
                ),
                (
                    "target_audience",
                    ArgumentSpec::string("Who is this madness for?"),
                ),
            ],
            &["theme", "chaos_level"],
        ),
        handler: HandlerFn::Prompt(insane_website_concept),
    }
}

fn insane_website_concept(args: &Map<String, Value>) -> Result<GetPromptResult, AppError> {
    let theme = required_str(args, "theme")?;
    let chaos_level = required_str(args, "chaos_level")?;
    let audience_clause = optional_str(args, "target_audience")
        .map(|audience| format!(" for {audience}"))
        .unwrap_or_default();

    Ok(GetPromptResult::user(
        "Unhinged website concept generation",
        format!(
            r#"Create the most UNHINGED, reality-defying website concept about "{theme}" with {chaos_level} chaos level{audience_clause}. 

Make it so bizarre that it would make Salvador Dalí question reality. Include:
- A completely nonsensical navigation structure
- Interactive elements that serve no logical purpose
- Color schemes that hurt the soul
- Typography choices that make Comic Sans look professional
- Content that exists in multiple dimensions simultaneously
- Features that actively confuse the user
- At least 3 completely unnecessary animations
- A footer that's somehow also the header

Make this so unhinged that even the internet would be embarrassed. GO ABSOLUTELY WILD."#
        ),
    ))
}

fn chaotic_ui_component_descriptor() -> HandlerDescriptor {
    HandlerDescriptor {
        name: "chaotic-ui-component",
        description: "Generate UI components that exist to cause maximum confusion and chaos",
        input_schema: InputSchema::new(
            vec![
                (
                    "component_type",
                    ArgumentSpec::string("Type of component (button, form, navigation, etc.)"),
                ),
                (
                    "dysfunction_level",
                    ArgumentSpec::string_enum(
                        &["quirky", "problematic", "cursed", "eldritch-horror"],
                        "How dysfunctional should this component be?",
                    ),
                ),
                (
                    "special_powers",
                    ArgumentSpec::string("What weird abilities should this component have?"),
                ),
            ],
            &["component_type", "dysfunction_level"],
        ),
        handler: HandlerFn::Prompt(chaotic_ui_component),
    }
}

fn chaotic_ui_component(args: &Map<String, Value>) -> Result<GetPromptResult, AppError> {
    let component_type = required_str(args, "component_type")?;
    let dysfunction_level = required_str(args, "dysfunction_level")?;
    let powers_clause = optional_str(args, "special_powers")
        .map(|powers| format!(" that has the power to {powers}"))
        .unwrap_or_default();

    Ok(GetPromptResult::user(
        "Chaotic UI component generation",
        format!(
            r#"Design the most CHAOTIC {component_type} component with {dysfunction_level} dysfunction level{powers_clause}.

This component should:
- Actively work against user expectations
- Have hover states that are more like hover nightmares
- Include at least 2 completely unnecessary sound effects
- Change its behavior based on the phase of the moon
- Have a loading state that never actually loads anything
- Include tooltips that provide misinformation
- Respond to clicks by doing something completely different
- Have animations that make users question their life choices

Make this component so chaotic that it becomes a work of anti-UX art. Embrace the madness!"#
        ),
    ))
}

fn absurd_layout_generator_descriptor() -> HandlerDescriptor {
    HandlerDescriptor {
        name: "absurd-layout-generator",
        description: "Generate website layouts that defy the laws of physics and good design",
        input_schema: InputSchema::new(
            vec![
                (
                    "layout_style",
                    ArgumentSpec::string("Base layout approach (grid, flexbox, absolute chaos, etc.)"),
                ),
                (
                    "reality_distortion",
                    ArgumentSpec::string_enum(
                        &[
                            "slight-bend",
                            "moderate-warp",
                            "reality-optional",
                            "physics-is-a-lie",
                        ],
                        "How much should this layout break reality?",
                    ),
                ),
                (
                    "screen_size",
                    ArgumentSpec::string("Target screen size or device"),
                ),
                (
                    "forbidden_elements",
                    ArgumentSpec::string_array(
                        "Elements that should definitely NOT be used (but will be anyway)",
                    ),
                ),
            ],
            &["layout_style", "reality_distortion"],
        ),
        handler: HandlerFn::Prompt(absurd_layout_generator),
    }
}

fn absurd_layout_generator(args: &Map<String, Value>) -> Result<GetPromptResult, AppError> {
    let layout_style = required_str(args, "layout_style")?;
    let reality_distortion = required_str(args, "reality_distortion")?;
    let screen_clause = optional_str(args, "screen_size")
        .map(|screen_size| format!(" optimized for {screen_size}"))
        .unwrap_or_default();
    let forbidden_clause = optional_str_list(args, "forbidden_elements")
        .map(|elements| {
            format!(
                " while definitely using these forbidden elements: {}",
                elements.join(", ")
            )
        })
        .unwrap_or_default();

    Ok(GetPromptResult::user(
        "Absurd layout generation",
        format!(
            r#"Create the most ABSURD website layout using {layout_style} with {reality_distortion} reality distortion{screen_clause}{forbidden_clause}.

This layout must:
- Have sections that overlap in impossible ways
- Include at least one element that scrolls in the wrong direction
- Feature a sidebar that's actually the main content
- Have a header that follows you around like a lost puppy
- Include floating elements that serve no purpose except chaos
- Use z-index values that break mathematics
- Have responsive breakpoints at completely random widths
- Include at least one element that exists outside the viewport on purpose
- Feature content that appears in different orders on refresh

Make this layout so absurd that CSS itself would file a restraining order. MAXIMUM CHAOS!"#
        ),
    ))
}

fn ridiculous_content_strategy_descriptor() -> HandlerDescriptor {
    HandlerDescriptor {
        name: "ridiculous-content-strategy",
        description:
            "Generate content strategies that make no sense but somehow work in an unhinged way",
        input_schema: InputSchema::new(
            vec![
                (
                    "website_purpose",
                    ArgumentSpec::string("What is this website supposedly for?"),
                ),
                (
                    "content_madness",
                    ArgumentSpec::string_enum(
                        &[
                            "slightly-off",
                            "completely-bonkers",
                            "reality-questioning",
                            "existential-crisis",
                        ],
                        "Level of content madness",
                    ),
                ),
                (
                    "writing_style",
                    ArgumentSpec::string("What writing style should we completely destroy?"),
                ),
            ],
            &["website_purpose", "content_madness"],
        ),
        handler: HandlerFn::Prompt(ridiculous_content_strategy),
    }
}

fn ridiculous_content_strategy(args: &Map<String, Value>) -> Result<GetPromptResult, AppError> {
    let website_purpose = required_str(args, "website_purpose")?;
    let content_madness = required_str(args, "content_madness")?;
    let style_clause = optional_str(args, "writing_style")
        .map(|style| format!(" that parodies {style} writing style"))
        .unwrap_or_default();

    Ok(GetPromptResult::user(
        "Ridiculous content strategy generation",
        format!(
            r#"Create a RIDICULOUS content strategy for a website about "{website_purpose}" with {content_madness} madness level{style_clause}.

This content strategy should include:
- Headlines that actively mislead users
- Body text that starts about one topic and ends up somewhere completely different
- Call-to-action buttons that ask users to do impossible things
- Product descriptions that describe everything except the actual product
- About pages that are entirely about someone else
- FAQ sections where the questions and answers don't match
- Testimonials from fictional characters, historical figures, or inanimate objects
- Blog posts that exist in reverse chronological order within each paragraph
- Contact information that leads to interdimensional portals

Make this content strategy so ridiculous that even spam emails would be embarrassed to associate with it!"#
        ),
    ))
}

fn nonsensical_features_descriptor() -> HandlerDescriptor {
    HandlerDescriptor {
        name: "nonsensical-features",
        description:
            "Generate interactive features that serve no purpose except to confuse and delight",
        input_schema: InputSchema::new(
            vec![
                (
                    "feature_category",
                    ArgumentSpec::string("Type of feature (animation, interaction, widget, etc.)"),
                ),
                (
                    "absurdity_factor",
                    ArgumentSpec::string_enum(
                        &[
                            "mildly-confusing",
                            "deeply-puzzling",
                            "reality-bending",
                            "cosmic-horror",
                        ],
                        "How absurd should this feature be?",
                    ),
                ),
                (
                    "user_confusion_goal",
                    ArgumentSpec::string("What specific type of confusion should this create?"),
                ),
                (
                    "impossible_requirement",
                    ArgumentSpec::string("One completely impossible thing this feature must do"),
                ),
            ],
            &["feature_category", "absurdity_factor"],
        ),
        handler: HandlerFn::Prompt(nonsensical_features),
    }
}

fn nonsensical_features(args: &Map<String, Value>) -> Result<GetPromptResult, AppError> {
    let feature_category = required_str(args, "feature_category")?;
    let absurdity_factor = required_str(args, "absurdity_factor")?;
    let confusion_clause = optional_str(args, "user_confusion_goal")
        .map(|goal| format!(" designed to cause {goal}"))
        .unwrap_or_default();
    let impossible_clause = optional_str(args, "impossible_requirement")
        .map(|requirement| format!(" while somehow managing to {requirement}"))
        .unwrap_or_default();

    Ok(GetPromptResult::user(
        "Nonsensical interactive feature generation",
        format!(
            r#"Create the most NONSENSICAL {feature_category} feature with {absurdity_factor} absurdity{confusion_clause}{impossible_clause}.

This feature must:
- Respond to user actions that haven't happened yet
- Have states that exist in parallel universes
- Include sound effects that are actually just descriptions of sounds
- Change functionality based on the user's browser's mood
- Have a help system that makes things more confusing
- Include easter eggs that are actually just regular eggs
- Feature progress bars that go backwards when you're not looking
- Have keyboard shortcuts that require keys that don't exist
- Include drag-and-drop functionality where you can drop items into the void
- Feature a settings menu that changes the settings of other websites

Make this feature so nonsensical that it becomes performance art. The goal is maximum bewilderment with a side of existential dread!"#
        ),
    ))
}
