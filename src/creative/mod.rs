pub mod analyze;
pub mod profile;
pub mod prompts;
pub mod tables;

use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use serde_json::{json, Map, Value};

use self::profile::CreativeProfile;

// ── Types ─────────────────────────────────────────────

/// Campaign attributes pulled from a request body. Nothing here outlives the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignContext {
    pub company_name: String,
    pub business_description: String,
    pub campaign_goal: String,
    pub target_audience: String,
    pub monthly_budget: String,
    pub target_areas: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessagingAngle {
    #[serde(rename = "ROI-Focused")]
    RoiFocused,
    #[serde(rename = "Time-Saving")]
    TimeSaving,
    #[serde(rename = "Competitive Advantage")]
    CompetitiveAdvantage,
}

impl MessagingAngle {
    pub const ALL: [MessagingAngle; 3] = [
        Self::RoiFocused,
        Self::TimeSaving,
        Self::CompetitiveAdvantage,
    ];

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "ROI-Focused" => Some(Self::RoiFocused),
            "Time-Saving" => Some(Self::TimeSaving),
            "Competitive Advantage" => Some(Self::CompetitiveAdvantage),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::RoiFocused => "ROI-Focused",
            Self::TimeSaving => "Time-Saving",
            Self::CompetitiveAdvantage => "Competitive Advantage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisualTheme {
    #[serde(rename = "Professional Authority")]
    ProfessionalAuthority,
    #[serde(rename = "Data-Driven Results")]
    DataDrivenResults,
    #[serde(rename = "Innovation Leadership")]
    InnovationLeadership,
}

impl VisualTheme {
    pub const ALL: [VisualTheme; 3] = [
        Self::ProfessionalAuthority,
        Self::DataDrivenResults,
        Self::InnovationLeadership,
    ];

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "Professional Authority" => Some(Self::ProfessionalAuthority),
            "Data-Driven Results" => Some(Self::DataDrivenResults),
            "Innovation Leadership" => Some(Self::InnovationLeadership),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ProfessionalAuthority => "Professional Authority",
            Self::DataDrivenResults => "Data-Driven Results",
            Self::InnovationLeadership => "Innovation Leadership",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationKind {
    ConceptFocused,
    DataVisualization,
    LifestyleContext,
}

impl VariationKind {
    /// Generation order. Every response carries exactly these three, in this order.
    pub const ALL: [VariationKind; 3] = [
        Self::ConceptFocused,
        Self::DataVisualization,
        Self::LifestyleContext,
    ];

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "concept_focused" => Some(Self::ConceptFocused),
            "data_visualization" => Some(Self::DataVisualization),
            "lifestyle_context" => Some(Self::LifestyleContext),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ConceptFocused => "concept_focused",
            Self::DataVisualization => "data_visualization",
            Self::LifestyleContext => "lifestyle_context",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ConceptFocused => "Concept-Driven Creative",
            Self::DataVisualization => "Data-Driven Creative",
            Self::LifestyleContext => "Contextual Creative",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ConceptFocused => {
                "Symbolic and conceptual approach emphasizing core messaging through visual metaphors"
            }
            Self::DataVisualization => {
                "Infographic-style design highlighting key metrics and performance indicators"
            }
            Self::LifestyleContext => {
                "Real-world application showing the solution in action with target audience"
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreativeVariation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignSummary {
    pub company_name: String,
    pub messaging_angle: String,
    pub visual_theme: String,
    pub campaign_goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_areas: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreativeResponse {
    pub success: bool,
    pub campaign_context: CampaignSummary,
    pub creative_variations: Vec<CreativeVariation>,
    pub generation_timestamp: String,
}

/// A parsed `/generate-creative*` body: the context plus the raw angle and theme names.
#[derive(Debug, Clone, PartialEq)]
pub struct CreativeRequest {
    pub context: CampaignContext,
    pub messaging_angle: String,
    pub visual_theme: String,
}

// ── Errors ────────────────────────────────────────────

/// Anything that goes wrong while handling a request. Always reported as a 500.
#[derive(Debug)]
pub struct RequestProcessingError(pub String);

impl std::fmt::Display for RequestProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RequestProcessingError {}

impl From<serde_json::Error> for RequestProcessingError {
    fn from(e: serde_json::Error) -> Self {
        RequestProcessingError(format!("Invalid JSON body: {}", e))
    }
}

impl From<std::io::Error> for RequestProcessingError {
    fn from(e: std::io::Error) -> Self {
        RequestProcessingError(format!("Failed to read request body: {}", e))
    }
}

impl<'r> Responder<'r, 'static> for RequestProcessingError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        (
            Status::InternalServerError,
            Json(json!({"success": false, "error": self.0})),
        )
            .respond_to(req)
    }
}

// ── Payload Extraction ────────────────────────────────

/// Parse a raw request body into a JSON object.
pub fn parse_payload(body: &str) -> Result<Map<String, Value>, RequestProcessingError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(RequestProcessingError(format!(
            "Request body must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Read a text field. Absent or `null` falls back to `default`; non-string values are rejected.
pub fn text_field(
    payload: &Map<String, Value>,
    key: &str,
    default: &str,
) -> Result<String, RequestProcessingError> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(RequestProcessingError(format!(
            "Field '{}' must be a string, got {}",
            key,
            json_type_name(other)
        ))),
    }
}

/// Read a field that is only interpolated or echoed. Strings are used verbatim, other
/// values render as their JSON text; absent or `null` falls back to `default`.
pub fn display_field(payload: &Map<String, Value>, key: &str, default: &str) -> String {
    match payload.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Read an echo-only field. Strings, numbers and booleans keep their text; arrays and
/// objects are dropped.
pub fn echo_field(payload: &Map<String, Value>, key: &str) -> String {
    match payload.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl CreativeRequest {
    /// Pull the campaign fields out of a payload using the profile's defaults.
    pub fn from_payload(
        payload: &Map<String, Value>,
        profile: &CreativeProfile,
    ) -> Result<Self, RequestProcessingError> {
        let defaults = &profile.field_defaults;
        let context = CampaignContext {
            company_name: display_field(payload, "company_name", defaults.company_name),
            business_description: text_field(
                payload,
                "business_description",
                defaults.business_description,
            )?,
            campaign_goal: display_field(payload, "campaign_goal", defaults.campaign_goal),
            target_audience: text_field(payload, "target_audience", defaults.target_audience)?,
            monthly_budget: echo_field(payload, "monthly_budget"),
            target_areas: echo_field(payload, "target_areas"),
        };
        Ok(CreativeRequest {
            context,
            messaging_angle: text_field(payload, "messaging_angle", profile.default_angle.key())?,
            visual_theme: text_field(payload, "visual_theme", profile.default_theme.key())?,
        })
    }
}

// ── Envelope Assembly ─────────────────────────────────

/// Build the three variations and wrap them in a success envelope.
pub fn generate_creatives(profile: &CreativeProfile, req: &CreativeRequest) -> CreativeResponse {
    let creative_variations = VariationKind::ALL
        .iter()
        .map(|kind| CreativeVariation {
            id: kind.key(),
            title: kind.title(),
            description: kind.description(),
            prompt: prompts::build_prompt(
                profile,
                &req.context,
                &req.messaging_angle,
                &req.visual_theme,
                kind.key(),
            ),
        })
        .collect();

    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    CreativeResponse {
        success: true,
        campaign_context: CampaignSummary {
            company_name: req.context.company_name.clone(),
            messaging_angle: req.messaging_angle.clone(),
            visual_theme: req.visual_theme.clone(),
            campaign_goal: req.context.campaign_goal.clone(),
            monthly_budget: non_empty(&req.context.monthly_budget),
            target_areas: non_empty(&req.context.target_areas),
        },
        creative_variations,
        generation_timestamp: chrono::Local::now()
            .to_rfc3339_opts(chrono::SecondsFormat::Micros, false),
    }
}

/// Full request cycle for one profile: raw body in, envelope or failure out.
pub fn handle_creative_body(
    profile: &CreativeProfile,
    body: &str,
) -> Result<CreativeResponse, RequestProcessingError> {
    let payload = parse_payload(body)?;
    let req = CreativeRequest::from_payload(&payload, profile)?;
    log::debug!(
        "Generating {} creatives for '{}' (angle: {}, theme: {})",
        profile.name,
        req.context.company_name,
        req.messaging_angle,
        req.visual_theme
    );
    Ok(generate_creatives(profile, &req))
}
