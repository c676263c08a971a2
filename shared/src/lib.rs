use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription level controlling feature visibility and record caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
    Family,
}

impl SubscriptionTier {
    /// All tiers in catalog order
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Free,
        SubscriptionTier::Premium,
        SubscriptionTier::Family,
    ];

    /// Human-readable plan name
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "Gratuito",
            SubscriptionTier::Premium => "Premium",
            SubscriptionTier::Family => "Família",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Premium => "premium",
            SubscriptionTier::Family => "family",
        };
        write!(f, "{}", value)
    }
}

/// Tracker the user chose on the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserPhase {
    Cycle,
    Pregnancy,
    Postpartum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Phase of the menstrual cycle for a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
}

impl CyclePhase {
    pub fn display_name(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Menstruação",
            CyclePhase::Follicular => "Fase Folicular",
            CyclePhase::Ovulatory => "Ovulação",
            CyclePhase::Luteal => "Fase Lútea",
        }
    }
}

/// Days left until a date, or `Passed` once the date is today or behind us
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Countdown {
    Remaining { days: u32 },
    Passed,
}

/// Content that is only visible on tiers with advanced features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum GatedContent<T> {
    Unlocked { content: T },
    Locked { title: String, description: String },
}

impl<T> GatedContent<T> {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, GatedContent::Unlocked { .. })
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            GatedContent::Unlocked { content } => Some(content),
            GatedContent::Locked { .. } => None,
        }
    }
}

/// A titled advice item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub body: String,
}

/// Generic error body returned by the REST layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Cycle tracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    pub last_period_date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub cycle_length: u32,
    pub period_length: u32,
}

/// Request for creating or overwriting the cycle record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveCycleRequest {
    pub last_period_date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub cycle_length: u32,
    pub period_length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertileWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleOverviewResponse {
    pub cycle: CycleRecord,
    pub today: String,
    pub day_in_cycle: u32,
    pub current_phase: CyclePhase,
    pub current_phase_name: String,
    pub ovulation_date: String,
    pub ovulation_countdown: Countdown,
    pub fertile_window: FertileWindow,
    pub next_period_date: String,
    pub next_period_countdown: Countdown,
    pub fertility_tips: GatedContent<Vec<Tip>>,
}

// ---------------------------------------------------------------------------
// Pregnancy tracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyRecord {
    pub last_period_date: String,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterPregnancyRequest {
    pub last_period_date: String, // ISO 8601 date format (YYYY-MM-DD)
}

/// Reference information for a milestone gestational week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekInfo {
    pub week: u32,
    pub title: String,
    pub baby_size: String,
    pub baby_weight: String,
    pub development: Vec<String>,
    pub mother_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyOverviewResponse {
    pub pregnancy: PregnancyRecord,
    pub today: String,
    pub current_week: u32,
    pub trimester: u8,
    pub progress_percent: f64,
    pub days_until_due: u32,
    pub due_countdown: Countdown,
    pub week_info: WeekInfo,
    pub warning_signs: Vec<String>,
}

// ---------------------------------------------------------------------------
// Children and growth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    pub birth_date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub gender: Gender,
}

/// Request for creating a new child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChildRequest {
    pub name: String,
    pub birth_date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub gender: Gender,
}

/// Response containing a single child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildResponse {
    pub child: Child,
    pub success_message: String,
}

/// Response containing a list of children and the current cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
    pub max_children: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthMetric {
    Weight,
    Height,
}

/// Position of a measurement relative to the P3/P97 reference band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileBand {
    BelowP3,
    Normal,
    AboveP97,
}

impl PercentileBand {
    pub fn label(&self) -> &'static str {
        match self {
            PercentileBand::BelowP3 => "< P3",
            PercentileBand::Normal => "P3-P97",
            PercentileBand::AboveP97 => "> P97",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Needs a pediatric referral
    Referral,
    /// Worth monitoring
    Advisory,
    Informational,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthAlert {
    pub metric: GrowthMetric,
    pub severity: AlertSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthAnalysis {
    pub reference_age_months: u32,
    pub weight_band: PercentileBand,
    pub height_band: PercentileBand,
    pub alerts: Vec<GrowthAlert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecord {
    pub id: String,
    pub child_id: String,
    pub date: String,
    pub age_months: u32,
    pub weight: f64,
    pub height: f64,
    pub head_circumference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGrowthRecordRequest {
    pub date: String, // ISO 8601 date format (YYYY-MM-DD)
    pub weight: f64,
    pub height: f64,
    pub head_circumference: f64,
}

/// A growth record together with its percentile analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecordEntry {
    pub record: GrowthRecord,
    pub analysis: GrowthAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecordListResponse {
    pub child_id: String,
    pub records: Vec<GrowthRecordEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecordResponse {
    pub entry: GrowthRecordEntry,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestonesResponse {
    pub child_id: String,
    pub age_months: u32,
    pub milestones: GatedContent<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Subscription, checkout and preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub tier: SubscriptionTier,
    pub max_children: usize,
    pub advanced_features: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSubscriptionRequest {
    pub tier: SubscriptionTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub tier: SubscriptionTier,
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub limitations: Vec<String>,
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanCatalogResponse {
    pub current_tier: SubscriptionTier,
    pub plans: Vec<PlanSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub tier: SubscriptionTier,
    pub card_number: String,
    pub card_holder: String,
    pub expiry: String, // MM/YY
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub subscription: SubscriptionResponse,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResponse {
    pub phase: Option<UserPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPhaseRequest {
    pub phase: UserPhase,
}

// ---------------------------------------------------------------------------
// Frontend log forwarding
// ---------------------------------------------------------------------------

/// Severity of a forwarded frontend log line; unknown values read as `Info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientLogLevel {
    Debug,
    #[serde(alias = "warning")]
    Warn,
    Error,
    #[default]
    #[serde(other)]
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientLogRequest {
    #[serde(default)]
    pub level: ClientLogLevel,
    pub message: String,
    /// Screen or widget that emitted the line
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientLogResponse {
    pub accepted: bool,
}
