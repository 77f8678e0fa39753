//! Core data models for geoscan
//!
//! These models are shared by the checks, the engine and the reporters.
//! A `Report` is plain data: renderers map status to colors and labels
//! without re-running any check logic.

use crate::evidence;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of check categories in every report
pub const CATEGORY_COUNT: usize = 6;

/// Graded outcome of a single check
///
/// Ordered by severity: `Ok < Info < Alarm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Info,
    Alarm,
}

/// Display glyph and numeric weight for each status.
///
/// Single source for the status -> icon coupling; verdicts never store
/// an icon chosen anywhere else.
const STATUS_TABLE: [(Status, &str, u32); 3] = [
    (Status::Ok, "✅", 100),
    (Status::Info, "ℹ️", 50),
    (Status::Alarm, "🚨", 0),
];

impl Status {
    pub const ALL: [Status; 3] = [Status::Ok, Status::Info, Status::Alarm];

    fn row(self) -> (Status, &'static str, u32) {
        STATUS_TABLE[self as usize]
    }

    /// Display glyph for this status
    pub fn icon(self) -> &'static str {
        self.row().1
    }

    /// Score contribution: OK=100, INFO=50, ALARM=0
    pub fn weight(self) -> u32 {
        self.row().2
    }

    /// Human-readable label used by the report cards
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Info => "Information",
            Status::Alarm => "Alarm",
        }
    }

    /// ASCII tag for terminals without emoji
    pub fn tag(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Info => "[INFO]",
            Status::Alarm => "[ALARM]",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Info => write!(f, "info"),
            Status::Alarm => write!(f, "alarm"),
        }
    }
}

/// The six check categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    SemanticHtml,
    Metadata,
    StructuredData,
    AiReadiness,
    Accessibility,
    Crawlability,
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::SemanticHtml,
        Category::Metadata,
        Category::StructuredData,
        Category::AiReadiness,
        Category::Accessibility,
        Category::Crawlability,
    ];

    /// Position of this category inside a report
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable machine identifier (matches the JSON key)
    pub fn key(self) -> &'static str {
        match self {
            Category::SemanticHtml => "semanticHtml",
            Category::Metadata => "metadata",
            Category::StructuredData => "structuredData",
            Category::AiReadiness => "aiReadiness",
            Category::Accessibility => "accessibility",
            Category::Crawlability => "crawlability",
        }
    }

    /// Card title shown to users
    pub fn title(self) -> &'static str {
        match self {
            Category::SemanticHtml => "Semantic HTML Structure",
            Category::Metadata => "Metadata and Head Tags",
            Category::StructuredData => "Structured Data",
            Category::AiReadiness => "AI-Readiness",
            Category::Accessibility => "Accessibility & Multimodal",
            Category::Crawlability => "Crawlability & Performance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Result of one check against one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    status: Status,
    icon: &'static str,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    evidence_snippet: Option<String>,
}

impl Verdict {
    /// Build a verdict. The icon comes from the status table, evidence is
    /// dropped for OK and truncated to `MAX_EVIDENCE_LEN` otherwise.
    pub fn new(status: Status, details: impl Into<String>, evidence: Option<String>) -> Self {
        let evidence_snippet = match status {
            Status::Ok => None,
            _ => evidence
                .filter(|e| !e.trim().is_empty())
                .map(|e| evidence::truncate(&e)),
        };
        Self {
            status,
            icon: status.icon(),
            details: details.into(),
            evidence_snippet,
        }
    }

    pub fn ok(details: impl Into<String>) -> Self {
        Self::new(Status::Ok, details, None)
    }

    pub fn info(details: impl Into<String>, evidence: Option<String>) -> Self {
        Self::new(Status::Info, details, evidence)
    }

    pub fn alarm(details: impl Into<String>, evidence: Option<String>) -> Self {
        Self::new(Status::Alarm, details, evidence)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn evidence_snippet(&self) -> Option<&str> {
        self.evidence_snippet.as_deref()
    }
}

/// Overall score band, mirrors the thresholds of the score card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Excellent! Your website is well-optimized for generative AI engines."
            }
            ScoreBand::Good => {
                "Good start! Consider addressing the indicated issues to improve your GEO score."
            }
            ScoreBand::NeedsWork => {
                "Your website needs significant GEO improvements to be optimized for AI engines."
            }
        }
    }
}

/// Rounded mean of the status weights.
///
/// Round-half-up in integer arithmetic: `(sum + n/2) / n`. With six
/// categories and weights in steps of 50 an exact half never occurs, so
/// this agrees with `f64::round`.
pub fn compute_score(statuses: impl IntoIterator<Item = Status>) -> u8 {
    let (sum, count) = statuses
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), s| (sum + s.weight(), count + 1));
    if count == 0 {
        return 0;
    }
    ((sum + count / 2) / count).min(100) as u8
}

/// Aggregate GEO report for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    verdicts: [Verdict; CATEGORY_COUNT],
    score: u8,
}

impl Report {
    /// Build a report from the six verdicts, indexed by `Category::index`.
    pub fn new(verdicts: [Verdict; CATEGORY_COUNT]) -> Self {
        let score = compute_score(verdicts.iter().map(Verdict::status));
        Self { verdicts, score }
    }

    /// Degraded report: the same ALARM verdict in every slot, score 0.
    pub fn failed(reason: impl fmt::Display) -> Self {
        let verdict = Verdict::alarm(format!("Analysis failed: {}", reason), None);
        Self::new(std::array::from_fn(|_| verdict.clone()))
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Recompute the score from the stored verdicts
    pub fn recompute_score(&self) -> u8 {
        compute_score(self.verdicts.iter().map(Verdict::status))
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    pub fn verdict(&self, category: Category) -> &Verdict {
        &self.verdicts[category.index()]
    }

    pub fn semantic_html(&self) -> &Verdict {
        self.verdict(Category::SemanticHtml)
    }

    pub fn metadata(&self) -> &Verdict {
        self.verdict(Category::Metadata)
    }

    pub fn structured_data(&self) -> &Verdict {
        self.verdict(Category::StructuredData)
    }

    pub fn ai_readiness(&self) -> &Verdict {
        self.verdict(Category::AiReadiness)
    }

    pub fn accessibility(&self) -> &Verdict {
        self.verdict(Category::Accessibility)
    }

    pub fn crawlability(&self) -> &Verdict {
        self.verdict(Category::Crawlability)
    }

    /// Iterate `(category, verdict)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Verdict)> {
        Category::ALL.into_iter().zip(self.verdicts.iter())
    }

    /// Worst status across all categories
    pub fn worst_status(&self) -> Status {
        self.verdicts
            .iter()
            .map(Verdict::status)
            .max()
            .unwrap_or(Status::Ok)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT + 2))?;
        for (category, verdict) in self.iter() {
            map.serialize_entry(category.key(), verdict)?;
        }
        map.serialize_entry("score", &self.score)?;
        map.serialize_entry("band", &self.band())?;
        map.end()
    }
}
