//! Typed view of the hiring report the model is asked to produce.
//!
//! Top-level sections are required; every leaf inside a section defaults, so a
//! report with sparse sections still decodes. Only `SchemaMode::Strict` decodes
//! into this type; lenient mode passes the model's JSON through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub candidate_overview: CandidateOverview,
    pub interview_statistics: InterviewStatistics,
    pub behavioral_analysis: BehavioralAnalysis,
    pub technical_evaluation: TechnicalEvaluation,
    pub bias_check: BiasCheck,
    pub hiring_recommendation: HiringRecommendation,
    pub improvement_suggestions: Vec<String>,
    pub sentiment_tone_analysis: SentimentToneAnalysis,
    pub overall_suitability_score: OverallSuitabilityScore,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateOverview {
    pub candidate_name: String,
    pub role_applied: String,
    pub interview_date: String,
    pub interview_round: Option<u32>,
    pub communication_skills: f64,
    pub confidence_level: f64,
    pub domain_knowledge: f64,
    pub problem_solving_skills: f64,
    pub cultural_fit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewStatistics {
    pub total_questions_asked: u32,
    pub total_candidate_responses: u32,
    pub estimated_duration_minutes: f64,
    pub candidate_talk_ratio_percent: f64,
    pub technical_to_behavioral_ratio: String,
    pub keywords_mentioned: Vec<String>,
    pub positive_indicators: Vec<String>,
    pub negative_indicators: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BehavioralAnalysis {
    pub leadership: String,
    pub communication_clarity: String,
    pub adaptability: String,
    pub team_collaboration: String,
    pub emotional_intelligence: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalEvaluation {
    pub main_challenges_discussed: Vec<String>,
    pub solutions_proposed: Vec<String>,
    pub technical_depth: String,
    pub alignment_with_role_requirements: String,
    pub tools_or_technologies_mentioned: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiasCheck {
    pub grammar_fluency_issues: bool,
    pub did_affect_scoring: bool,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HiringRecommendation {
    pub status: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentToneAnalysis {
    pub overall_sentiment: String,
    pub tone_breakdown: ToneBreakdown,
    pub language_observations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToneBreakdown {
    pub confidence: String,
    pub hesitation: String,
    pub enthusiasm: String,
    pub engagement: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverallSuitabilityScore {
    pub combined_score_out_of10: f64,
    pub comparison_to_previous_rounds: String,
    pub final_verdict: String,
}

/// Recommendation status and combined score, when present, for the log line
/// written after each analysis. Reads the raw value so drifted output still
/// gets summarized.
pub fn summarize(analysis: &Value) -> (Option<&str>, Option<f64>) {
    let status = analysis
        .pointer("/hiringRecommendation/status")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());
    let score = analysis
        .pointer("/overallSuitabilityScore/combinedScoreOutOf10")
        .and_then(Value::as_f64);
    (status, score)
}
