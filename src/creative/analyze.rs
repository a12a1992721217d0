use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::tables::{self, KeywordGroup};
use super::{text_field, MessagingAngle, RequestProcessingError, VisualTheme};

#[derive(Debug, Clone, Serialize)]
pub struct ContextAnalysis {
    pub success: bool,
    pub industry_insights: Vec<&'static str>,
    pub audience_insights: Vec<&'static str>,
    pub messaging_recommendations: BTreeMap<&'static str, &'static str>,
    pub theme_recommendations: BTreeMap<&'static str, &'static str>,
}

/// Keyword insights for a campaign. Unlike industry classification in prompts, every
/// matching group contributes, in declaration order.
pub fn analyze_context(business_description: &str, target_audience: &str) -> ContextAnalysis {
    ContextAnalysis {
        success: true,
        industry_insights: matching(tables::INDUSTRY_INSIGHTS, business_description),
        audience_insights: matching(tables::AUDIENCE_INSIGHTS, target_audience),
        messaging_recommendations: MessagingAngle::ALL
            .iter()
            .map(|a| (a.key(), tables::angle_recommendation(*a)))
            .collect(),
        theme_recommendations: VisualTheme::ALL
            .iter()
            .map(|t| (t.key(), tables::theme_recommendation(*t)))
            .collect(),
    }
}

pub fn analyze_payload(payload: &Map<String, Value>) -> Result<ContextAnalysis, RequestProcessingError> {
    let description = text_field(payload, "business_description", "")?;
    let audience = text_field(payload, "target_audience", "")?;
    Ok(analyze_context(&description, &audience))
}

fn matching(groups: &[KeywordGroup<&'static str>], text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    groups
        .iter()
        .filter(|g| g.matches(&lower))
        .map(|g| g.value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketing_description_yields_only_marketing_insight() {
        let a = analyze_context("we do marketing and advertising", "");
        assert_eq!(
            a.industry_insights,
            vec!["Marketing industry - highlight creativity and growth"]
        );
        assert!(a.audience_insights.is_empty());
    }

    #[test]
    fn empty_input_still_returns_recommendations() {
        let a = analyze_context("", "");
        assert!(a.success);
        assert!(a.industry_insights.is_empty());
        assert!(a.audience_insights.is_empty());
        assert_eq!(a.messaging_recommendations.len(), 3);
        assert_eq!(a.theme_recommendations.len(), 3);
        assert_eq!(
            a.messaging_recommendations["Time-Saving"],
            "Ideal for busy professionals and efficiency-focused messaging"
        );
        assert_eq!(
            a.theme_recommendations["Innovation Leadership"],
            "Perfect for tech companies and forward-thinking brands"
        );
    }

    #[test]
    fn multiple_groups_match_in_declaration_order() {
        let a = analyze_context(
            "Creative strategy CONSULTING for cloud companies",
            "Startup founders and Enterprise IT Directors",
        );
        assert_eq!(
            a.industry_insights,
            vec![
                "Technology sector - emphasize innovation and efficiency",
                "Professional services - focus on expertise and results",
                "Marketing industry - highlight creativity and growth",
            ]
        );
        assert_eq!(
            a.audience_insights,
            vec![
                "Small business focus - emphasize cost-effectiveness and growth",
                "Enterprise focus - highlight scalability and reliability",
                "Decision-maker audience - focus on ROI and strategic value",
            ]
        );
    }

    #[test]
    fn payload_fields_must_be_strings() {
        let payload = crate::creative::parse_payload(r#"{"business_description": 42}"#).unwrap();
        let err = analyze_payload(&payload).unwrap_err();
        assert!(err.0.contains("business_description"));

        let payload = crate::creative::parse_payload(r#"{"target_audience": null}"#).unwrap();
        assert!(analyze_payload(&payload).unwrap().audience_insights.is_empty());
    }
}
