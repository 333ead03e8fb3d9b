//! Role enumerations.
//!
//! Three overlapping role systems contribute to a user's effective
//! permissions:
//!
//! - [`GlobalRole`] — account-wide, exactly one per user.
//! - [`CompanyRole`] — scoped to a (user, company) pair; a user may hold
//!   different company roles in different companies at the same time.
//! - [`DepartmentRole`] — functional role within one department, at most one
//!   per user.
//!
//! All of these are closed enumerations. Role values arriving from the
//! identity/session collaborator are strings and go through `FromStr`;
//! an unrecognized value parses to an error that callers resolve to "no
//! role" (fail-closed), never to a panic.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An unrecognized role value was supplied by an external source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// Global role
// ─────────────────────────────────────────────────────────────────────────────

/// Account-wide role, independent of any company.
///
/// Mutated only by an administrative action; never self-escalated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalRole {
    Admin,
    Editor,
    Approver,
    Viewer,
    User,
}

impl GlobalRole {
    pub const ALL: &'static [GlobalRole] = &[
        GlobalRole::Admin,
        GlobalRole::Editor,
        GlobalRole::Approver,
        GlobalRole::Viewer,
        GlobalRole::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalRole::Admin => "ADMIN",
            GlobalRole::Editor => "EDITOR",
            GlobalRole::Approver => "APPROVER",
            GlobalRole::Viewer => "VIEWER",
            GlobalRole::User => "USER",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Company role
// ─────────────────────────────────────────────────────────────────────────────

/// A user's role within one specific company.
///
/// `Owner` is derived from company creatorship at context-establishment
/// time, never stored redundantly on the membership record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyRole {
    Owner,
    Manager,
    Member,
}

impl CompanyRole {
    pub const ALL: &'static [CompanyRole] = &[
        CompanyRole::Owner,
        CompanyRole::Manager,
        CompanyRole::Member,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyRole::Owner => "OWNER",
            CompanyRole::Manager => "MANAGER",
            CompanyRole::Member => "MEMBER",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Departments
// ─────────────────────────────────────────────────────────────────────────────

/// Organizational department. `General` is the catch-all for contract
/// subtypes not claimed by a specific department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    Hr,
    Finance,
    Legal,
    Sales,
    It,
    Procurement,
    General,
}

impl Department {
    pub const ALL: &'static [Department] = &[
        Department::Hr,
        Department::Finance,
        Department::Legal,
        Department::Sales,
        Department::It,
        Department::Procurement,
        Department::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Finance => "FINANCE",
            Department::Legal => "LEGAL",
            Department::Sales => "SALES",
            Department::It => "IT",
            Department::Procurement => "PROCUREMENT",
            Department::General => "GENERAL",
        }
    }
}

/// Functional role within a department: manager/specialist/assistant tiers
/// per department (Legal's specialist tier is the counsel role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepartmentRole {
    HrManager,
    HrSpecialist,
    HrAssistant,
    FinanceManager,
    FinanceSpecialist,
    FinanceAssistant,
    LegalManager,
    LegalCounsel,
    LegalAssistant,
    SalesManager,
    SalesSpecialist,
    SalesAssistant,
    ItManager,
    ItSpecialist,
    ItAssistant,
    ProcurementManager,
    ProcurementSpecialist,
    ProcurementAssistant,
}

impl DepartmentRole {
    pub const ALL: &'static [DepartmentRole] = &[
        DepartmentRole::HrManager,
        DepartmentRole::HrSpecialist,
        DepartmentRole::HrAssistant,
        DepartmentRole::FinanceManager,
        DepartmentRole::FinanceSpecialist,
        DepartmentRole::FinanceAssistant,
        DepartmentRole::LegalManager,
        DepartmentRole::LegalCounsel,
        DepartmentRole::LegalAssistant,
        DepartmentRole::SalesManager,
        DepartmentRole::SalesSpecialist,
        DepartmentRole::SalesAssistant,
        DepartmentRole::ItManager,
        DepartmentRole::ItSpecialist,
        DepartmentRole::ItAssistant,
        DepartmentRole::ProcurementManager,
        DepartmentRole::ProcurementSpecialist,
        DepartmentRole::ProcurementAssistant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepartmentRole::HrManager => "HR_MANAGER",
            DepartmentRole::HrSpecialist => "HR_SPECIALIST",
            DepartmentRole::HrAssistant => "HR_ASSISTANT",
            DepartmentRole::FinanceManager => "FINANCE_MANAGER",
            DepartmentRole::FinanceSpecialist => "FINANCE_SPECIALIST",
            DepartmentRole::FinanceAssistant => "FINANCE_ASSISTANT",
            DepartmentRole::LegalManager => "LEGAL_MANAGER",
            DepartmentRole::LegalCounsel => "LEGAL_COUNSEL",
            DepartmentRole::LegalAssistant => "LEGAL_ASSISTANT",
            DepartmentRole::SalesManager => "SALES_MANAGER",
            DepartmentRole::SalesSpecialist => "SALES_SPECIALIST",
            DepartmentRole::SalesAssistant => "SALES_ASSISTANT",
            DepartmentRole::ItManager => "IT_MANAGER",
            DepartmentRole::ItSpecialist => "IT_SPECIALIST",
            DepartmentRole::ItAssistant => "IT_ASSISTANT",
            DepartmentRole::ProcurementManager => "PROCUREMENT_MANAGER",
            DepartmentRole::ProcurementSpecialist => "PROCUREMENT_SPECIALIST",
            DepartmentRole::ProcurementAssistant => "PROCUREMENT_ASSISTANT",
        }
    }

    /// The department this role belongs to (the user's home department).
    ///
    /// Note: a role may carry view grants for *other* departments (standing
    /// cross-department oversight); those are expressed in the role's
    /// permission set, never inferred from this value.
    pub fn department(&self) -> Department {
        match self {
            DepartmentRole::HrManager
            | DepartmentRole::HrSpecialist
            | DepartmentRole::HrAssistant => Department::Hr,
            DepartmentRole::FinanceManager
            | DepartmentRole::FinanceSpecialist
            | DepartmentRole::FinanceAssistant => Department::Finance,
            DepartmentRole::LegalManager
            | DepartmentRole::LegalCounsel
            | DepartmentRole::LegalAssistant => Department::Legal,
            DepartmentRole::SalesManager
            | DepartmentRole::SalesSpecialist
            | DepartmentRole::SalesAssistant => Department::Sales,
            DepartmentRole::ItManager
            | DepartmentRole::ItSpecialist
            | DepartmentRole::ItAssistant => Department::It,
            DepartmentRole::ProcurementManager
            | DepartmentRole::ProcurementSpecialist
            | DepartmentRole::ProcurementAssistant => Department::Procurement,
        }
    }
}

macro_rules! impl_role_strings {
    ($t:ty) => {
        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = ParseRoleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseRoleError(s.to_string()))
            }
        }
    };
}

impl_role_strings!(GlobalRole);
impl_role_strings!(CompanyRole);
impl_role_strings!(Department);
impl_role_strings!(DepartmentRole);
