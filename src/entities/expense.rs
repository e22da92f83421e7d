//! Expense entity - Personal and shared household costs.
//!
//! An expense row is flat: which of the optional schedule columns are meaningful depends on
//! `category`, `frequency` and `yearly_payment_strategy`. `core::schedule::Schedule` turns a
//! row into a checked schedule before any amount is computed. The string values stored in
//! the enum-like columns are defined by the small enums below.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household the expense belongs to
    pub household_id: i64,
    /// Discord user ID of the member who owns (and created) the expense
    pub user_id: String,
    /// Human-readable name (e.g., "Rent", "Car insurance")
    pub name: String,
    /// Nominal full amount
    pub amount: Decimal,
    /// `"PERSONAL"` or `"SHARED"`
    pub expense_type: String,
    /// `"RECURRING"` or `"ONE_TIME"`
    pub category: String,
    /// `"MONTHLY"` or `"YEARLY"`, recurring expenses only
    pub frequency: Option<String>,
    /// For shared expenses: member who fronted the whole amount, `None` when split equally
    pub paid_by_user_id: Option<String>,
    /// `"FULL"` or `"INSTALLMENTS"`
    pub yearly_payment_strategy: Option<String>,
    /// Month (1-12) a yearly expense is paid in full
    pub payment_month: Option<i32>,
    /// `"MONTHLY"`, `"QUARTERLY"` or `"SEMI_ANNUAL"`
    pub installment_frequency: Option<String>,
    /// Number of installments a one-time expense is spread over
    pub installment_count: Option<i32>,
    /// Month of a one-time expense (or its first installment)
    pub month: Option<i32>,
    /// Year of a one-time expense (or its first installment)
    pub year: Option<i32>,
    /// Creation time; its month anchors yearly installment schedules
    pub created_at: DateTimeUtc,
    /// Soft delete marker - deleted expenses never count
    pub deleted_at: Option<DateTimeUtc>,
}

impl Model {
    /// Returns true if the expense has not been soft deleted
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Returns true for household-level expenses
    #[must_use]
    pub fn is_shared(&self) -> bool {
        ExpenseType::from_column(&self.expense_type) == Some(ExpenseType::Shared)
    }

    /// Returns true for expenses that belong to a single member
    #[must_use]
    pub fn is_personal(&self) -> bool {
        ExpenseType::from_column(&self.expense_type) == Some(ExpenseType::Personal)
    }
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one household
    #[sea_orm(
        belongs_to = "super::household::Entity",
        from = "Column::HouseholdId",
        to = "super::household::Column::Id"
    )]
    Household,
    /// One expense has many monthly payment statuses
    #[sea_orm(has_many = "super::payment_status::Entity")]
    PaymentStatuses,
}

impl Related<super::household::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Household.def()
    }
}

impl Related<super::payment_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentStatuses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Who carries the cost of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseType {
    /// Paid by and counted against one member
    Personal,
    /// Household cost split across members
    Shared,
}

impl ExpenseType {
    /// Column value for this variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "PERSONAL",
            Self::Shared => "SHARED",
        }
    }

    /// Parses a stored column value
    #[must_use]
    pub fn from_column(value: &str) -> Option<Self> {
        match value {
            "PERSONAL" => Some(Self::Personal),
            "SHARED" => Some(Self::Shared),
            _ => None,
        }
    }
}

/// Whether an expense repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    /// Repeats monthly or yearly
    Recurring,
    /// Happens once (optionally spread over installments)
    OneTime,
}

impl ExpenseCategory {
    /// Column value for this variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recurring => "RECURRING",
            Self::OneTime => "ONE_TIME",
        }
    }

    /// Parses a stored column value
    #[must_use]
    pub fn from_column(value: &str) -> Option<Self> {
        match value {
            "RECURRING" => Some(Self::Recurring),
            "ONE_TIME" => Some(Self::OneTime),
            _ => None,
        }
    }
}

/// How often a recurring expense repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Every month
    Monthly,
    /// Once a year, paid in full or in installments
    Yearly,
}

impl Frequency {
    /// Column value for this variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parses a stored column value
    #[must_use]
    pub fn from_column(value: &str) -> Option<Self> {
        match value {
            "MONTHLY" => Some(Self::Monthly),
            "YEARLY" => Some(Self::Yearly),
            _ => None,
        }
    }
}

/// How a yearly (or spread one-time) amount is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearlyPaymentStrategy {
    /// The whole amount in a single month
    Full,
    /// Equal parts spread over several months
    Installments,
}

impl YearlyPaymentStrategy {
    /// Column value for this variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Installments => "INSTALLMENTS",
        }
    }

    /// Parses a stored column value
    #[must_use]
    pub fn from_column(value: &str) -> Option<Self> {
        match value {
            "FULL" => Some(Self::Full),
            "INSTALLMENTS" => Some(Self::Installments),
            _ => None,
        }
    }
}

/// Spacing between two installments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallmentFrequency {
    /// Every month
    Monthly,
    /// Every three months
    Quarterly,
    /// Every six months
    SemiAnnual,
}

impl InstallmentFrequency {
    /// Column value for this variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::SemiAnnual => "SEMI_ANNUAL",
        }
    }

    /// Parses a stored column value
    #[must_use]
    pub fn from_column(value: &str) -> Option<Self> {
        match value {
            "MONTHLY" => Some(Self::Monthly),
            "QUARTERLY" => Some(Self::Quarterly),
            "SEMI_ANNUAL" => Some(Self::SemiAnnual),
            _ => None,
        }
    }

    /// Months between two consecutive installments
    #[must_use]
    pub const fn step_months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::SemiAnnual => 6,
        }
    }

    /// Number of installments that fall in one year
    #[must_use]
    pub const fn installments_per_year(self) -> u32 {
        12 / self.step_months()
    }
}
