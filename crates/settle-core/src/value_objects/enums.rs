//! Domain enumerations
//!
//! Closed vocabularies shared by entities, persistence, and the API. Each
//! enum serializes to snake_case in JSON and round-trips through `as_str` /
//! `FromStr` for TEXT column storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error when parsing an enum from its text representation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {type_name} value: {value}")]
pub struct EnumParseError {
    pub type_name: &'static str,
    pub value: String,
}

impl EnumParseError {
    fn new(type_name: &'static str, value: &str) -> Self {
        Self {
            type_name,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    Moderator,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
        }
    }

    /// Moderators and admins share the elevated moderation surface
    #[must_use]
    pub const fn is_moderator(&self) -> bool {
        matches!(self, Self::Admin | Self::Moderator)
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "moderator" => Ok(Self::Moderator),
            _ => Err(EnumParseError::new("UserRole", s)),
        }
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// Immigration status category from onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    Student,
    SkilledWorker,
    Dependant,
    Graduate,
    Other,
}

impl StatusType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::SkilledWorker => "skilled_worker",
            Self::Dependant => "dependant",
            Self::Graduate => "graduate",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "skilled_worker" => Ok(Self::SkilledWorker),
            "dependant" => Ok(Self::Dependant),
            "graduate" => Ok(Self::Graduate),
            "other" => Ok(Self::Other),
            _ => Err(EnumParseError::new("StatusType", s)),
        }
    }
}

/// UK nation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    England,
    Scotland,
    Wales,
    NorthernIreland,
}

impl Region {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::England => "england",
            Self::Scotland => "scotland",
            Self::Wales => "wales",
            Self::NorthernIreland => "northern_ireland",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "england" => Ok(Self::England),
            "scotland" => Ok(Self::Scotland),
            "wales" => Ok(Self::Wales),
            "northern_ireland" => Ok(Self::NorthernIreland),
            _ => Err(EnumParseError::new("Region", s)),
        }
    }
}

/// Current housing situation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingStatus {
    Searching,
    Temporary,
    Renting,
    Owned,
    UniversityAccommodation,
    WithFamily,
}

impl HousingStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Searching => "searching",
            Self::Temporary => "temporary",
            Self::Renting => "renting",
            Self::Owned => "owned",
            Self::UniversityAccommodation => "university_accommodation",
            Self::WithFamily => "with_family",
        }
    }
}

impl fmt::Display for HousingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HousingStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "searching" => Ok(Self::Searching),
            "temporary" => Ok(Self::Temporary),
            "renting" => Ok(Self::Renting),
            "owned" => Ok(Self::Owned),
            "university_accommodation" => Ok(Self::UniversityAccommodation),
            "with_family" => Ok(Self::WithFamily),
            _ => Err(EnumParseError::new("HousingStatus", s)),
        }
    }
}

/// Current work situation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Student,
    NotPermitted,
}

impl WorkStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self_employed",
            Self::Unemployed => "unemployed",
            Self::Student => "student",
            Self::NotPermitted => "not_permitted",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employed" => Ok(Self::Employed),
            "self_employed" => Ok(Self::SelfEmployed),
            "unemployed" => Ok(Self::Unemployed),
            "student" => Ok(Self::Student),
            "not_permitted" => Ok(Self::NotPermitted),
            _ => Err(EnumParseError::new("WorkStatus", s)),
        }
    }
}

/// Monthly budget band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBand {
    Tight,
    Moderate,
    Comfortable,
    Flexible,
}

impl BudgetBand {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Moderate => "moderate",
            Self::Comfortable => "comfortable",
            Self::Flexible => "flexible",
        }
    }
}

impl fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetBand {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tight" => Ok(Self::Tight),
            "moderate" => Ok(Self::Moderate),
            "comfortable" => Ok(Self::Comfortable),
            "flexible" => Ok(Self::Flexible),
            _ => Err(EnumParseError::new("BudgetBand", s)),
        }
    }
}

/// Services a newcomer said they still need to set up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceNeed {
    BankAccount,
    GpRegistration,
    NationalInsurance,
    BiometricCard,
    CouncilTax,
    DrivingLicense,
    PhoneSim,
    Housing,
    Utilities,
    Transport,
    Employment,
}

impl ServiceNeed {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BankAccount => "bank_account",
            Self::GpRegistration => "gp_registration",
            Self::NationalInsurance => "national_insurance",
            Self::BiometricCard => "biometric_card",
            Self::CouncilTax => "council_tax",
            Self::DrivingLicense => "driving_license",
            Self::PhoneSim => "phone_sim",
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Transport => "transport",
            Self::Employment => "employment",
        }
    }
}

impl fmt::Display for ServiceNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceNeed {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank_account" => Ok(Self::BankAccount),
            "gp_registration" => Ok(Self::GpRegistration),
            "national_insurance" => Ok(Self::NationalInsurance),
            "biometric_card" => Ok(Self::BiometricCard),
            "council_tax" => Ok(Self::CouncilTax),
            "driving_license" => Ok(Self::DrivingLicense),
            "phone_sim" => Ok(Self::PhoneSim),
            "housing" => Ok(Self::Housing),
            "utilities" => Ok(Self::Utilities),
            "transport" => Ok(Self::Transport),
            "employment" => Ok(Self::Employment),
            _ => Err(EnumParseError::new("ServiceNeed", s)),
        }
    }
}

// ============================================================================
// Roadmap
// ============================================================================

/// Settlement task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Immigration,
    Banking,
    Healthcare,
    Housing,
    Employment,
    Utilities,
    Transport,
    Legal,
    Community,
}

impl TaskCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Immigration => "immigration",
            Self::Banking => "banking",
            Self::Healthcare => "healthcare",
            Self::Housing => "housing",
            Self::Employment => "employment",
            Self::Utilities => "utilities",
            Self::Transport => "transport",
            Self::Legal => "legal",
            Self::Community => "community",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immigration" => Ok(Self::Immigration),
            "banking" => Ok(Self::Banking),
            "healthcare" => Ok(Self::Healthcare),
            "housing" => Ok(Self::Housing),
            "employment" => Ok(Self::Employment),
            "utilities" => Ok(Self::Utilities),
            "transport" => Ok(Self::Transport),
            "legal" => Ok(Self::Legal),
            "community" => Ok(Self::Community),
            _ => Err(EnumParseError::new("TaskCategory", s)),
        }
    }
}

/// Task priority for ordering the roadmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl TaskPriority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(EnumParseError::new("TaskPriority", s)),
        }
    }
}

/// Lifecycle state of a task on a user's roadmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Blocked,
    Completed,
    Skipped,
}

impl TaskStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }

    /// Completed and skipped tasks no longer block their dependents
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Skipped)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "blocked" => Ok(Self::Blocked),
            "completed" => Ok(Self::Completed),
            "skipped" => Ok(Self::Skipped),
            _ => Err(EnumParseError::new("TaskStatus", s)),
        }
    }
}

// ============================================================================
// Scam shield
// ============================================================================

/// Kind of content submitted for a scam check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Url,
    Email,
}

impl InputKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "url" => Ok(Self::Url),
            "email" => Ok(Self::Email),
            _ => Err(EnumParseError::new("InputKind", s)),
        }
    }
}

/// Overall risk banding for an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(EnumParseError::new("RiskLevel", s)),
        }
    }
}

/// Scam classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScamCategory {
    Rental,
    Job,
    MoneyMule,
    VisaFraud,
    FakeAgency,
    Phishing,
    #[default]
    Other,
}

impl ScamCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rental => "rental",
            Self::Job => "job",
            Self::MoneyMule => "money_mule",
            Self::VisaFraud => "visa_fraud",
            Self::FakeAgency => "fake_agency",
            Self::Phishing => "phishing",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ScamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScamCategory {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rental" => Ok(Self::Rental),
            "job" => Ok(Self::Job),
            "money_mule" => Ok(Self::MoneyMule),
            "visa_fraud" => Ok(Self::VisaFraud),
            "fake_agency" => Ok(Self::FakeAgency),
            "phishing" => Ok(Self::Phishing),
            "other" => Ok(Self::Other),
            _ => Err(EnumParseError::new("ScamCategory", s)),
        }
    }
}

/// Severity of a single red flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Warning,
    Danger,
}

impl FlagSeverity {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for FlagSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Document templates
// ============================================================================

/// Who a document template is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateDocCategory {
    Landlord,
    Bank,
    Employer,
    University,
    Complaint,
    FollowUp,
    General,
}

impl TemplateDocCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Bank => "bank",
            Self::Employer => "employer",
            Self::University => "university",
            Self::Complaint => "complaint",
            Self::FollowUp => "follow_up",
            Self::General => "general",
        }
    }
}

impl fmt::Display for TemplateDocCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateDocCategory {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landlord" => Ok(Self::Landlord),
            "bank" => Ok(Self::Bank),
            "employer" => Ok(Self::Employer),
            "university" => Ok(Self::University),
            "complaint" => Ok(Self::Complaint),
            "follow_up" => Ok(Self::FollowUp),
            "general" => Ok(Self::General),
            _ => Err(EnumParseError::new("TemplateDocCategory", s)),
        }
    }
}

// ============================================================================
// Resources
// ============================================================================

/// Resource directory category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Healthcare,
    Housing,
    Legal,
    Emergency,
    Community,
    Government,
    Financial,
}

impl ResourceCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthcare => "healthcare",
            Self::Housing => "housing",
            Self::Legal => "legal",
            Self::Emergency => "emergency",
            Self::Community => "community",
            Self::Government => "government",
            Self::Financial => "financial",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthcare" => Ok(Self::Healthcare),
            "housing" => Ok(Self::Housing),
            "legal" => Ok(Self::Legal),
            "emergency" => Ok(Self::Emergency),
            "community" => Ok(Self::Community),
            "government" => Ok(Self::Government),
            "financial" => Ok(Self::Financial),
            _ => Err(EnumParseError::new("ResourceCategory", s)),
        }
    }
}

/// Provenance of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Official,
    Community,
    VerifiedPartner,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Community => "community",
            Self::VerifiedPartner => "verified_partner",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "official" => Ok(Self::Official),
            "community" => Ok(Self::Community),
            "verified_partner" => Ok(Self::VerifiedPartner),
            _ => Err(EnumParseError::new("SourceType", s)),
        }
    }
}
