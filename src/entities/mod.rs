//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the household tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod expense;
pub mod household;
pub mod household_member;
pub mod payment_status;
pub mod salary;
pub mod saving;
pub mod settlement;

// Re-export specific types to avoid conflicts
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use household::{Column as HouseholdColumn, Entity as Household, Model as HouseholdModel};
pub use household_member::{
    Column as HouseholdMemberColumn, Entity as HouseholdMember, Model as HouseholdMemberModel,
};
pub use payment_status::{
    Column as PaymentStatusColumn, Entity as PaymentStatus, Model as PaymentStatusModel,
};
pub use salary::{Column as SalaryColumn, Entity as Salary, Model as SalaryModel};
pub use saving::{Column as SavingColumn, Entity as Saving, Model as SavingModel};
pub use settlement::{Column as SettlementColumn, Entity as Settlement, Model as SettlementModel};
