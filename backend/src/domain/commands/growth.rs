use shared::{GatedContent, GrowthAnalysis};

use crate::domain::models::{Child, GrowthRecord};

#[derive(Debug, Clone)]
pub struct AddGrowthRecordCommand {
    pub child_id: String,
    pub date: String,
    pub weight: f64,
    pub height: f64,
    pub head_circumference: f64,
}

/// A stored record with its analysis, recomputed on every read
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedGrowthRecord {
    pub record: GrowthRecord,
    pub analysis: GrowthAnalysis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChildMilestones {
    pub child: Child,
    pub age_months: u32,
    pub milestones: GatedContent<Vec<String>>,
}
