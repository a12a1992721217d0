use serde::Serialize;

use super::tables::{
    ThemeTable, VariationTable, CAMPAIGN_THEMES, CAMPAIGN_VARIATIONS, IMAGE_THEMES,
    IMAGE_VARIATIONS,
};
use super::{MessagingAngle, VisualTheme};

/// How the prompt header describes the company's industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryStrategy {
    /// Classify the business description against keyword groups (first match wins).
    KeywordClassified,
    /// Always "a technology company providing {business_description}".
    FixedTechnology,
}

/// Defaults for campaign fields the request leaves out.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldDefaults {
    pub company_name: &'static str,
    pub business_description: &'static str,
    pub campaign_goal: &'static str,
    pub target_audience: &'static str,
}

/// Per-route configuration for prompt generation.
#[derive(Debug, Serialize)]
pub struct CreativeProfile {
    pub name: &'static str,
    pub default_angle: MessagingAngle,
    pub default_theme: VisualTheme,
    /// Max characters of `target_audience` carried into the prompt.
    pub audience_limit: usize,
    /// Max entries rendered from each styling list; `None` renders the whole list.
    pub list_limit: Option<usize>,
    pub industry: IndustryStrategy,
    pub field_defaults: FieldDefaults,
    #[serde(skip)]
    pub themes: &'static ThemeTable,
    #[serde(skip)]
    pub variations: &'static VariationTable,
}

/// `/generate-creative`
pub static CAMPAIGN: CreativeProfile = CreativeProfile {
    name: "campaign",
    default_angle: MessagingAngle::RoiFocused,
    default_theme: VisualTheme::ProfessionalAuthority,
    audience_limit: 200,
    list_limit: Some(3),
    industry: IndustryStrategy::KeywordClassified,
    field_defaults: FieldDefaults {
        company_name: "",
        business_description: "",
        campaign_goal: "",
        target_audience: "",
    },
    themes: &CAMPAIGN_THEMES,
    variations: &CAMPAIGN_VARIATIONS,
};

/// `/generate-creative-images`
pub static IMAGE: CreativeProfile = CreativeProfile {
    name: "image",
    default_angle: MessagingAngle::TimeSaving,
    default_theme: VisualTheme::InnovationLeadership,
    audience_limit: 150,
    list_limit: None,
    industry: IndustryStrategy::FixedTechnology,
    field_defaults: FieldDefaults {
        company_name: "TechSolutions Pro",
        business_description: "Cloud-based project management software",
        campaign_goal: "Generate Leads",
        target_audience: "Small business owners and project managers",
    },
    themes: &IMAGE_THEMES,
    variations: &IMAGE_VARIATIONS,
};

pub fn all() -> [&'static CreativeProfile; 2] {
    [&CAMPAIGN, &IMAGE]
}
