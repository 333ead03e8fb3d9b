//! Static policy tables.
//!
//! Role→permission grants and the contract-subtype→department mapping are
//! compile-time data: plain `match` arms over closed enums returning
//! `'static` slices. They are immutable after process start and safe to read
//! from any number of concurrent requests without synchronization.

use crate::permissions::{ALL_PERMISSIONS, Permission};
use crate::roles::{CompanyRole, Department, DepartmentRole, GlobalRole};

/// Permissions granted by an account-wide role.
pub fn global_role_permissions(role: GlobalRole) -> &'static [Permission] {
    match role {
        GlobalRole::Admin => ALL_PERMISSIONS,
        GlobalRole::Editor => &[
            Permission::ContractView,
            Permission::ContractCreate,
            Permission::ContractEdit,
            Permission::TemplateView,
            Permission::TemplateCreate,
            Permission::CompanyView,
        ],
        GlobalRole::Approver => &[
            Permission::ContractView,
            Permission::ContractApprove,
            Permission::CompanyView,
        ],
        GlobalRole::Viewer => &[
            Permission::ContractView,
            Permission::TemplateView,
            Permission::CompanyView,
        ],
        GlobalRole::User => &[Permission::TemplateView],
    }
}

/// Permissions granted by a role within one company.
///
/// These apply only inside the company the role is scoped to; the caller is
/// responsible for matching the company scope before consulting this table.
pub fn company_role_permissions(role: CompanyRole) -> &'static [Permission] {
    match role {
        CompanyRole::Owner => &[
            Permission::CompanyView,
            Permission::CompanyManage,
            Permission::CompanyMembersManage,
            Permission::ContractView,
            Permission::ContractCreate,
            Permission::ContractEdit,
            Permission::ContractDelete,
            Permission::TemplateView,
            Permission::TemplateCreate,
            Permission::TemplateManage,
        ],
        CompanyRole::Manager => &[
            Permission::CompanyView,
            Permission::CompanyMembersManage,
            Permission::ContractView,
            Permission::ContractCreate,
            Permission::ContractEdit,
            Permission::TemplateView,
            Permission::TemplateCreate,
        ],
        CompanyRole::Member => &[
            Permission::CompanyView,
            Permission::ContractView,
            Permission::TemplateView,
        ],
    }
}

/// Permissions granted by a department role.
///
/// The entries are standing grants. Cross-department oversight (e.g. the
/// Legal counsel carrying HR and Finance view grants) is expressed here
/// verbatim and must never be widened or narrowed by inference from the
/// role's home department.
pub fn department_role_permissions(role: DepartmentRole) -> &'static [Permission] {
    match role {
        DepartmentRole::HrManager => &[
            Permission::ContractView,
            Permission::ContractApprove,
            Permission::ContractViewHr,
            Permission::ContractCreateHr,
            Permission::ContractViewGeneral,
            Permission::ContractCreateGeneral,
        ],
        DepartmentRole::HrSpecialist => &[
            Permission::ContractView,
            Permission::ContractViewHr,
            Permission::ContractCreateHr,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::HrAssistant => &[
            Permission::ContractView,
            Permission::ContractViewHr,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::FinanceManager => &[
            Permission::ContractView,
            Permission::ContractApprove,
            Permission::ContractViewFinance,
            Permission::ContractCreateFinance,
            Permission::ContractViewGeneral,
            Permission::ContractCreateGeneral,
            // Finance audits procurement spend.
            Permission::ContractViewProcurement,
        ],
        DepartmentRole::FinanceSpecialist => &[
            Permission::ContractView,
            Permission::ContractViewFinance,
            Permission::ContractCreateFinance,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::FinanceAssistant => &[
            Permission::ContractView,
            Permission::ContractViewFinance,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::LegalManager => &[
            Permission::ContractView,
            Permission::ContractViewAll,
            Permission::ContractApprove,
            Permission::ContractViewLegal,
            Permission::ContractCreateLegal,
            Permission::ContractViewGeneral,
            Permission::ContractCreateGeneral,
        ],
        DepartmentRole::LegalCounsel => &[
            Permission::ContractView,
            Permission::ContractViewLegal,
            Permission::ContractCreateLegal,
            Permission::ContractViewGeneral,
            // Standing oversight of contracts negotiated by other departments.
            Permission::ContractViewHr,
            Permission::ContractViewFinance,
            Permission::ContractViewSales,
        ],
        DepartmentRole::LegalAssistant => &[
            Permission::ContractView,
            Permission::ContractViewLegal,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::SalesManager => &[
            Permission::ContractView,
            Permission::ContractApprove,
            Permission::ContractViewSales,
            Permission::ContractCreateSales,
            Permission::ContractViewGeneral,
            Permission::ContractCreateGeneral,
        ],
        DepartmentRole::SalesSpecialist => &[
            Permission::ContractView,
            Permission::ContractViewSales,
            Permission::ContractCreateSales,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::SalesAssistant => &[
            Permission::ContractView,
            Permission::ContractViewSales,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::ItManager => &[
            Permission::ContractView,
            Permission::ContractApprove,
            Permission::ContractViewIt,
            Permission::ContractCreateIt,
            Permission::ContractViewGeneral,
            Permission::ContractCreateGeneral,
        ],
        DepartmentRole::ItSpecialist => &[
            Permission::ContractView,
            Permission::ContractViewIt,
            Permission::ContractCreateIt,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::ItAssistant => &[
            Permission::ContractView,
            Permission::ContractViewIt,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::ProcurementManager => &[
            Permission::ContractView,
            Permission::ContractApprove,
            Permission::ContractViewProcurement,
            Permission::ContractCreateProcurement,
            Permission::ContractViewGeneral,
            Permission::ContractCreateGeneral,
        ],
        DepartmentRole::ProcurementSpecialist => &[
            Permission::ContractView,
            Permission::ContractViewProcurement,
            Permission::ContractCreateProcurement,
            Permission::ContractViewGeneral,
        ],
        DepartmentRole::ProcurementAssistant => &[
            Permission::ContractView,
            Permission::ContractViewProcurement,
            Permission::ContractViewGeneral,
        ],
    }
}

/// Departments permitted to originate/view a contract subtype.
///
/// Total by construction: a subtype not claimed by any department falls back
/// to `{GENERAL}`, so eligibility checks never see an undefined mapping.
/// Subtypes are application data and stay string-keyed; the departments are
/// the closed enum.
pub fn allowed_departments(subtype: &str) -> &'static [Department] {
    match subtype {
        "NDA" => &[Department::Hr, Department::Legal, Department::Sales],
        "EMPLOYMENT" => &[Department::Hr, Department::Legal],
        "CONSULTING" => &[Department::Procurement, Department::Hr, Department::Finance],
        "SOFTWARE_LICENSE" => &[Department::It, Department::Procurement, Department::Legal],
        "SERVICE_AGREEMENT" => &[Department::Procurement, Department::Legal, Department::Finance],
        "PURCHASE_ORDER" => &[Department::Procurement, Department::Finance],
        "SALES_AGREEMENT" => &[Department::Sales, Department::Legal, Department::Finance],
        "SPONSORSHIP" => &[Department::Sales],
        "LOAN_AGREEMENT" => &[Department::Finance, Department::Legal],
        "DATA_PROCESSING" => &[Department::It, Department::Legal],
        _ => &[Department::General],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gets_every_permission() {
        assert_eq!(global_role_permissions(GlobalRole::Admin), ALL_PERMISSIONS);
    }

    #[test]
    fn viewer_can_view_but_not_delete() {
        let perms = global_role_permissions(GlobalRole::Viewer);
        assert!(perms.contains(&Permission::ContractView));
        assert!(!perms.contains(&Permission::ContractDelete));
    }

    #[test]
    fn unknown_subtype_falls_back_to_general() {
        assert_eq!(allowed_departments("BESPOKE_THING"), &[Department::General]);
    }

    #[test]
    fn every_department_role_grants_its_home_view() {
        for role in DepartmentRole::ALL.iter().copied() {
            let home_view = Permission::view_for(role.department());
            assert!(
                department_role_permissions(role).contains(&home_view),
                "{role} missing {home_view}"
            );
        }
    }
}
