//! Compiled-in styling tables. Everything here is `'static` and read-only.

use super::{MessagingAngle, VariationKind, VisualTheme};

// ── Messaging Angles ──────────────────────────────────

#[derive(Debug)]
pub struct AngleStyle {
    pub symbols: &'static [&'static str],
    pub concepts: &'static [&'static str],
    pub colors: &'static [&'static str],
}

const ROI_FOCUSED: AngleStyle = AngleStyle {
    symbols: &[
        "percentage symbols",
        "dollar signs",
        "upward trending arrows",
        "growth charts",
        "profit graphs",
    ],
    concepts: &[
        "return on investment",
        "cost savings",
        "financial growth",
        "measurable results",
        "revenue increase",
    ],
    colors: &["green for growth", "blue for trust", "gold for value"],
};

const TIME_SAVING: AngleStyle = AngleStyle {
    symbols: &[
        "clock icons",
        "calendar elements",
        "efficiency arrows",
        "streamlined processes",
        "automation symbols",
    ],
    concepts: &[
        "time efficiency",
        "productivity boost",
        "workflow optimization",
        "quick results",
        "streamlined operations",
    ],
    colors: &[
        "blue for efficiency",
        "orange for energy",
        "green for progress",
    ],
};

const COMPETITIVE_ADVANTAGE: AngleStyle = AngleStyle {
    symbols: &[
        "comparison charts",
        "leadership arrows",
        "winner podiums",
        "competitive graphs",
        "market position indicators",
    ],
    concepts: &[
        "market leadership",
        "competitive edge",
        "industry innovation",
        "superior performance",
        "strategic advantage",
    ],
    colors: &["blue for authority", "red for power", "purple for premium"],
};

pub fn angle_style(angle: MessagingAngle) -> &'static AngleStyle {
    match angle {
        MessagingAngle::RoiFocused => &ROI_FOCUSED,
        MessagingAngle::TimeSaving => &TIME_SAVING,
        MessagingAngle::CompetitiveAdvantage => &COMPETITIVE_ADVANTAGE,
    }
}

// ── Visual Themes ─────────────────────────────────────

#[derive(Debug)]
pub struct ThemeStyle {
    pub style: &'static str,
    pub elements: &'static [&'static str],
    pub mood: &'static str,
    pub layout: &'static str,
}

/// One style per theme. Profiles pick the table that matches their wording.
#[derive(Debug)]
pub struct ThemeTable {
    pub professional_authority: ThemeStyle,
    pub data_driven_results: ThemeStyle,
    pub innovation_leadership: ThemeStyle,
}

impl ThemeTable {
    pub fn get(&self, theme: VisualTheme) -> &ThemeStyle {
        match theme {
            VisualTheme::ProfessionalAuthority => &self.professional_authority,
            VisualTheme::DataDrivenResults => &self.data_driven_results,
            VisualTheme::InnovationLeadership => &self.innovation_leadership,
        }
    }
}

const PROFESSIONAL_AUTHORITY: ThemeStyle = ThemeStyle {
    style: "clean corporate design with professional photography",
    elements: &[
        "business professionals",
        "corporate environments",
        "authoritative layouts",
        "enterprise imagery",
    ],
    mood: "trustworthy, authoritative, enterprise-ready",
    layout: "structured grid layout with clear hierarchy",
};

const DATA_DRIVEN_RESULTS: ThemeStyle = ThemeStyle {
    style: "analytical dashboard design with data visualization",
    elements: &[
        "charts and graphs",
        "analytics dashboards",
        "performance metrics",
        "data visualization",
    ],
    mood: "analytical, results-focused, evidence-based",
    layout: "dashboard-style layout with prominent data displays",
};

const INNOVATION_ELEMENTS: &[&str] = &[
    "futuristic imagery",
    "tech innovation symbols",
    "progressive design elements",
    "forward-thinking visuals",
];

pub static CAMPAIGN_THEMES: ThemeTable = ThemeTable {
    professional_authority: PROFESSIONAL_AUTHORITY,
    data_driven_results: DATA_DRIVEN_RESULTS,
    innovation_leadership: ThemeStyle {
        style: "modern tech aesthetic with cutting-edge design",
        elements: INNOVATION_ELEMENTS,
        mood: "innovative, progressive, industry-leading",
        layout: "dynamic asymmetrical layout with modern typography",
    },
};

pub static IMAGE_THEMES: ThemeTable = ThemeTable {
    professional_authority: PROFESSIONAL_AUTHORITY,
    data_driven_results: DATA_DRIVEN_RESULTS,
    innovation_leadership: ThemeStyle {
        style: "modern tech aesthetic with cutting-edge design elements",
        elements: INNOVATION_ELEMENTS,
        mood: "innovative, progressive, industry-leading",
        layout: "dynamic asymmetrical layout with modern typography",
    },
};

// ── Variation Approaches ──────────────────────────────

#[derive(Debug)]
pub struct VariationStyle {
    pub emphasis: &'static str,
    pub approach: &'static str,
}

#[derive(Debug)]
pub struct VariationTable {
    pub concept_focused: VariationStyle,
    pub data_visualization: VariationStyle,
    pub lifestyle_context: VariationStyle,
}

impl VariationTable {
    pub fn get(&self, kind: VariationKind) -> &VariationStyle {
        match kind {
            VariationKind::ConceptFocused => &self.concept_focused,
            VariationKind::DataVisualization => &self.data_visualization,
            VariationKind::LifestyleContext => &self.lifestyle_context,
        }
    }
}

pub static CAMPAIGN_VARIATIONS: VariationTable = VariationTable {
    concept_focused: VariationStyle {
        emphasis: "conceptual illustration with symbolic representation",
        approach: "abstract and symbolic with clear messaging hierarchy",
    },
    data_visualization: VariationStyle {
        emphasis: "data-driven visual with charts and metrics",
        approach: "infographic style with prominent statistics and performance indicators",
    },
    lifestyle_context: VariationStyle {
        emphasis: "real-world application with people and environments",
        approach: "lifestyle photography with contextual business scenarios",
    },
};

pub static IMAGE_VARIATIONS: VariationTable = VariationTable {
    concept_focused: VariationStyle {
        emphasis: "conceptual illustration with symbolic representation of time-saving benefits",
        approach: "abstract and symbolic with clear messaging hierarchy showing efficiency gains",
    },
    data_visualization: VariationStyle {
        emphasis: "data-driven visual with charts showing time savings and productivity metrics",
        approach: "infographic style with prominent statistics showing before/after productivity improvements",
    },
    lifestyle_context: VariationStyle {
        emphasis: "real-world application showing busy professionals using the software",
        approach: "lifestyle photography with contextual business scenarios showing time being saved",
    },
};

// ── Keyword Groups ────────────────────────────────────

/// A set of lowercase trigger words. A group matches when any word is a substring of the input.
#[derive(Debug)]
pub struct KeywordGroup<T> {
    pub triggers: &'static [&'static str],
    pub value: T,
}

impl<T> KeywordGroup<T> {
    /// `haystack` must already be lowercased.
    pub fn matches(&self, haystack: &str) -> bool {
        self.triggers.iter().any(|t| haystack.contains(t))
    }
}

/// Industry classification for prompt headers, checked in order; first match wins.
pub static INDUSTRY_CLASSES: &[KeywordGroup<&[&str]>] = &[
    KeywordGroup {
        triggers: &["software", "tech"],
        value: &["technology", "software", "digital", "cloud", "innovation"],
    },
    KeywordGroup {
        triggers: &["consulting"],
        value: &["professional", "business", "strategy", "expertise"],
    },
    KeywordGroup {
        triggers: &["marketing"],
        value: &["creative", "branding", "advertising", "growth"],
    },
];

pub const GENERIC_INDUSTRY: &[&str] = &["business", "professional", "corporate"];

/// Industry insights for the context analyzer. Every matching group contributes.
pub static INDUSTRY_INSIGHTS: &[KeywordGroup<&str>] = &[
    KeywordGroup {
        triggers: &["software", "tech", "cloud", "digital"],
        value: "Technology sector - emphasize innovation and efficiency",
    },
    KeywordGroup {
        triggers: &["consulting", "advisory", "strategy"],
        value: "Professional services - focus on expertise and results",
    },
    KeywordGroup {
        triggers: &["marketing", "advertising", "creative"],
        value: "Marketing industry - highlight creativity and growth",
    },
];

pub static AUDIENCE_INSIGHTS: &[KeywordGroup<&str>] = &[
    KeywordGroup {
        triggers: &["small business", "startup", "entrepreneur"],
        value: "Small business focus - emphasize cost-effectiveness and growth",
    },
    KeywordGroup {
        triggers: &["enterprise", "large company", "corporation"],
        value: "Enterprise focus - highlight scalability and reliability",
    },
    KeywordGroup {
        triggers: &["manager", "director", "executive"],
        value: "Decision-maker audience - focus on ROI and strategic value",
    },
];

// ── Recommendations ───────────────────────────────────

pub fn angle_recommendation(angle: MessagingAngle) -> &'static str {
    match angle {
        MessagingAngle::RoiFocused => "Recommended for cost-conscious audiences and B2B campaigns",
        MessagingAngle::TimeSaving => {
            "Ideal for busy professionals and efficiency-focused messaging"
        }
        MessagingAngle::CompetitiveAdvantage => {
            "Perfect for competitive markets and differentiation strategies"
        }
    }
}

pub fn theme_recommendation(theme: VisualTheme) -> &'static str {
    match theme {
        VisualTheme::ProfessionalAuthority => {
            "Best for B2B, enterprise, and trust-building campaigns"
        }
        VisualTheme::DataDrivenResults => {
            "Ideal for analytical audiences and performance-focused messaging"
        }
        VisualTheme::InnovationLeadership => {
            "Perfect for tech companies and forward-thinking brands"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_group_matches_substrings() {
        let group = &INDUSTRY_INSIGHTS[0];
        assert!(group.matches("a fintech startup"));
        assert!(group.matches("digital agency"));
        assert!(!group.matches("bakery"));
    }

    #[test]
    fn theme_tables_differ_only_in_innovation_style() {
        for theme in [VisualTheme::ProfessionalAuthority, VisualTheme::DataDrivenResults] {
            assert_eq!(CAMPAIGN_THEMES.get(theme).style, IMAGE_THEMES.get(theme).style);
        }
        assert_ne!(
            CAMPAIGN_THEMES.get(VisualTheme::InnovationLeadership).style,
            IMAGE_THEMES.get(VisualTheme::InnovationLeadership).style
        );
    }

    #[test]
    fn triggers_are_lowercase() {
        let all = INDUSTRY_CLASSES
            .iter()
            .flat_map(|g| g.triggers)
            .chain(INDUSTRY_INSIGHTS.iter().flat_map(|g| g.triggers))
            .chain(AUDIENCE_INSIGHTS.iter().flat_map(|g| g.triggers));
        for t in all {
            assert_eq!(*t, t.to_lowercase());
        }
    }

    #[test]
    fn profiles_and_tables_have_no_empty_entries() {
        use crate::creative::profile;

        for angle in MessagingAngle::ALL {
            let s = angle_style(angle);
            assert!(!s.symbols.is_empty() && !s.concepts.is_empty() && !s.colors.is_empty());
        }
        for p in profile::all() {
            assert_ne!(p.list_limit, Some(0), "{}", p.name);
            assert!(p.audience_limit > 0, "{}", p.name);
            for theme in VisualTheme::ALL {
                let t = p.themes.get(theme);
                assert!(!t.style.is_empty() && !t.elements.is_empty(), "{}", p.name);
            }
            for kind in VariationKind::ALL {
                let v = p.variations.get(kind);
                assert!(!v.emphasis.is_empty() && !v.approach.is_empty(), "{}", p.name);
            }
        }
    }
}
