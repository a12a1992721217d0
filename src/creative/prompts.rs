//! Image-generation prompt construction. Pure string work: no I/O, no randomness.

use super::profile::{CreativeProfile, IndustryStrategy};
use super::tables::{self, AngleStyle, ThemeStyle, VariationStyle};
use super::{CampaignContext, MessagingAngle, VariationKind, VisualTheme};

/// Build the prompt for one creative variation.
///
/// Unknown angle, theme or variation names never fail: they resolve to the profile's
/// default angle and theme, and to `concept_focused` for the variation. The raw names
/// are still what the prompt text shows.
pub fn build_prompt(
    profile: &CreativeProfile,
    ctx: &CampaignContext,
    messaging_angle: &str,
    visual_theme: &str,
    variation_kind: &str,
) -> String {
    let angle = MessagingAngle::from_key(messaging_angle).unwrap_or(profile.default_angle);
    let theme = VisualTheme::from_key(visual_theme).unwrap_or(profile.default_theme);
    let kind = VariationKind::from_key(variation_kind).unwrap_or(VariationKind::ConceptFocused);

    let parts = PromptParts {
        profile,
        ctx,
        angle_name: messaging_angle,
        theme_name: visual_theme,
        variation_title: title_case(&variation_kind.replace('_', " ")),
        angle: tables::angle_style(angle),
        theme: profile.themes.get(theme),
        variation: profile.variations.get(kind),
        audience: truncate_chars(&ctx.target_audience, profile.audience_limit),
    };

    match profile.industry {
        IndustryStrategy::KeywordClassified => parts.classified(),
        IndustryStrategy::FixedTechnology => parts.fixed_technology(),
    }
}

/// Industry keywords for a business description: first matching group, else generic.
pub fn industry_keywords(business_description: &str) -> &'static [&'static str] {
    let lower = business_description.to_lowercase();
    tables::INDUSTRY_CLASSES
        .iter()
        .find(|group| group.matches(&lower))
        .map(|group| group.value)
        .unwrap_or(tables::GENERIC_INDUSTRY)
}

/// First `limit` characters of `s` (Unicode scalar values, not bytes).
pub fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Capitalize the first letter of each alphabetic run and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

// ── Layouts ───────────────────────────────────────────

struct PromptParts<'a> {
    profile: &'a CreativeProfile,
    ctx: &'a CampaignContext,
    angle_name: &'a str,
    theme_name: &'a str,
    variation_title: String,
    angle: &'static AngleStyle,
    theme: &'a ThemeStyle,
    variation: &'a VariationStyle,
    audience: &'a str,
}

impl PromptParts<'_> {
    fn list(&self, items: &[&str]) -> String {
        let take = self.profile.list_limit.unwrap_or(items.len());
        items.iter().take(take).copied().collect::<Vec<_>>().join(", ")
    }

    /// Layout with an industry line derived from the business description.
    fn classified(&self) -> String {
        let industry = industry_keywords(&self.ctx.business_description);
        format!(
            "Create a professional marketing campaign creative for {company}, a {industry_words} company. \n\
             \n\
             Campaign Context:\n\
             - Goal: {goal}\n\
             - Industry: {industry_list}\n\
             - Target Audience: {audience}\n\
             \n\
             Messaging Angle - {angle_name}:\n\
             - Key symbols: {symbols}\n\
             - Core concepts: {concepts}\n\
             - Color palette: {colors}\n\
             \n\
             Visual Theme - {theme_name}:\n\
             - Style: {style}\n\
             - Visual elements: {elements}\n\
             - Mood: {mood}\n\
             - Layout: {layout}\n\
             \n\
             Variation Approach - {variation_title}:\n\
             - Emphasis: {emphasis}\n\
             - Creative approach: {approach}\n\
             \n\
             Design Requirements:\n\
             - High-quality, professional marketing creative\n\
             - Clear visual hierarchy with compelling headline space\n\
             - Incorporate company branding elements\n\
             - Suitable for digital marketing campaigns\n\
             - Modern, clean aesthetic that appeals to the target audience\n\
             - Include space for call-to-action elements\n\
             - Ensure the creative clearly communicates the {angle_lower} message through {theme_lower} styling\n\
             \n\
             Technical specs: 16:9 landscape format, marketing campaign ready, professional quality, clean composition",
            company = self.ctx.company_name,
            industry_words = industry.join(" "),
            goal = self.ctx.campaign_goal,
            industry_list = industry.join(", "),
            audience = self.audience,
            angle_name = self.angle_name,
            symbols = self.list(self.angle.symbols),
            concepts = self.list(self.angle.concepts),
            colors = self.list(self.angle.colors),
            theme_name = self.theme_name,
            style = self.theme.style,
            elements = self.list(self.theme.elements),
            mood = self.theme.mood,
            layout = self.theme.layout,
            variation_title = self.variation_title,
            emphasis = self.variation.emphasis,
            approach = self.variation.approach,
            angle_lower = self.angle_name.to_lowercase(),
            theme_lower = self.theme_name.to_lowercase(),
        )
    }

    /// Layout that always frames the company as a technology provider.
    fn fixed_technology(&self) -> String {
        let symbols = self.list(self.angle.symbols);
        let colors = self.list(self.angle.colors);
        format!(
            "Create a professional marketing campaign creative for {company}, a technology company providing {description}.\n\
             \n\
             Campaign Context:\n\
             - Goal: {goal}\n\
             - Target Audience: {audience}\n\
             \n\
             Messaging Angle - {angle_name}:\n\
             - Key symbols: {symbols}\n\
             - Core concepts: {concepts}\n\
             - Color palette: {colors}\n\
             \n\
             Visual Theme - {theme_name}:\n\
             - Style: {style}\n\
             - Visual elements: {elements}\n\
             - Mood: {mood}\n\
             - Layout: {layout}\n\
             \n\
             Variation Approach - {variation_title}:\n\
             - Emphasis: {emphasis}\n\
             - Creative approach: {approach}\n\
             \n\
             Design Requirements:\n\
             - High-quality, professional marketing creative suitable for digital campaigns\n\
             - Clear visual hierarchy with space for compelling headlines\n\
             - Modern, clean aesthetic that appeals to tech-savvy business professionals\n\
             - Include visual elements that clearly communicate {angle_lower} benefits\n\
             - {style} with {mood} feeling\n\
             - Incorporate {symbols} in a sophisticated way\n\
             - Use {colors} color scheme\n\
             - 16:9 landscape format, marketing campaign ready, professional quality",
            company = self.ctx.company_name,
            description = self.ctx.business_description,
            goal = self.ctx.campaign_goal,
            audience = self.audience,
            angle_name = self.angle_name,
            symbols = symbols,
            concepts = self.list(self.angle.concepts),
            colors = colors,
            theme_name = self.theme_name,
            style = self.theme.style,
            elements = self.list(self.theme.elements),
            mood = self.theme.mood,
            layout = self.theme.layout,
            variation_title = self.variation_title,
            emphasis = self.variation.emphasis,
            approach = self.variation.approach,
            angle_lower = self.angle_name.to_lowercase(),
        )
    }
}
