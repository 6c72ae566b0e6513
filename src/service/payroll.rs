use std::collections::HashMap;

use entity::{
    member::MaritalStatus,
    salary_component::{AllowanceRole, PayUnit},
};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sea_orm::DatabaseConnection;

use crate::{
    data::{assignment::AssignmentRepository, member::MemberRepository},
    error::Error,
    model::{
        api::Page,
        payroll::{PayrollDetailDto, PayrollSummaryDto, PayrollTotalsDto},
    },
    service::allowance::{AllowanceRates, AllowanceResolver},
};

/// How many children the child allowance covers at most.
const CHILD_ALLOWANCE_CAP: i32 = 2;

/// Exact-cent totals for one member, computed in `Decimal` and converted to
/// floats only when the response DTO is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollTotals {
    pub component_count: u64,
    pub total_monthly: Decimal,
    pub spouse_applied: Decimal,
    pub children_applied: Decimal,
    pub take_home_pay: Decimal,
}

/// Applies the take-home-pay formula to one member's assigned components.
///
/// The monthly sum only counts monthly-unit components without an allowance
/// role: the spouse/child components re-enter through their explicit
/// addends, so counting them here would double them. The raw component
/// count is deliberately unfiltered.
pub fn compute_totals(
    member: &entity::member::Model,
    components: &[entity::salary_component::Model],
    rates: &AllowanceRates,
) -> PayrollTotals {
    let total_monthly: Decimal = components
        .iter()
        .filter(|c| c.unit == PayUnit::Monthly && c.allowance_role == AllowanceRole::None)
        .map(|c| c.amount)
        .sum();

    let spouse_applied = if member.marital_status == MaritalStatus::Married {
        rates.spouse
    } else {
        Decimal::ZERO
    };

    let covered_children = member.child_count.clamp(0, CHILD_ALLOWANCE_CAP);
    let children_applied = Decimal::from(covered_children) * rates.child;

    let take_home_pay = total_monthly + spouse_applied + children_applied;

    PayrollTotals {
        component_count: components.len() as u64,
        total_monthly,
        spouse_applied,
        children_applied,
        take_home_pay,
    }
}

/// Computes per-member payroll summaries over the member × assignment ×
/// component join. Every member appears, with or without assignments.
pub struct PayrollAggregator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PayrollAggregator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summary rows for every member, ordered by member id.
    pub async fn summary_rows(&self) -> Result<Vec<PayrollSummaryDto>, Error> {
        let rates = AllowanceResolver::new(self.db).resolve().await?;
        let members = MemberRepository::new(self.db).all_ordered().await?;
        let joined = AssignmentRepository::new(self.db)
            .all_with_components()
            .await?;

        let mut by_member: HashMap<i64, Vec<entity::salary_component::Model>> = HashMap::new();
        for (assignment, component) in joined {
            if let Some(component) = component {
                by_member
                    .entry(assignment.member_id)
                    .or_default()
                    .push(component);
            }
        }

        let empty = Vec::new();
        let rows = members
            .into_iter()
            .map(|member| {
                let components = by_member.get(&member.id).unwrap_or(&empty);
                let totals = compute_totals(&member, components, &rates);

                summary_row(member, &totals)
            })
            .collect();

        Ok(rows)
    }

    /// Filtered, paged summary list. The search is a case-insensitive
    /// substring match over names, titles, position, marital status, the id
    /// and the take-home pay rendered as text.
    pub async fn paged(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<PayrollSummaryDto>, Error> {
        let mut rows = self.summary_rows().await?;

        if let Some(needle) = normalize_search(search) {
            rows.retain(|row| matches_search(row, &needle));
        }

        Ok(Page::from_rows(rows, page, per_page))
    }

    /// Single-member payload: attributes, itemized components ordered by
    /// category then id, and the computed totals. `None` for unknown ids.
    pub async fn detail(&self, member_id: i64) -> Result<Option<PayrollDetailDto>, Error> {
        let rates = AllowanceResolver::new(self.db).resolve().await?;

        let member = match MemberRepository::new(self.db).find_by_id(member_id).await? {
            Some(member) => member,
            None => return Ok(None),
        };

        let mut components: Vec<entity::salary_component::Model> =
            AssignmentRepository::new(self.db)
                .for_member_with_components(member_id)
                .await?
                .into_iter()
                .filter_map(|(_, component)| component)
                .collect();
        components.sort_by(|a, b| a.category.cmp(&b.category).then(a.id.cmp(&b.id)));

        let totals = compute_totals(&member, &components, &rates);

        Ok(Some(PayrollDetailDto {
            member: member.into(),
            components: components.into_iter().map(Into::into).collect(),
            summary: totals_dto(&totals),
        }))
    }
}

fn summary_row(member: entity::member::Model, totals: &PayrollTotals) -> PayrollSummaryDto {
    PayrollSummaryDto {
        id: member.id,
        first_name: member.first_name,
        last_name: member.last_name,
        title_prefix: member.title_prefix,
        title_suffix: member.title_suffix,
        position: member.position,
        marital_status: member.marital_status,
        child_count: member.child_count,
        total_monthly: to_f64(totals.total_monthly),
        take_home_pay: to_f64(totals.take_home_pay),
        component_count: totals.component_count,
    }
}

fn totals_dto(totals: &PayrollTotals) -> PayrollTotalsDto {
    PayrollTotalsDto {
        component_count: totals.component_count,
        total_monthly: to_f64(totals.total_monthly),
        spouse_applied: to_f64(totals.spouse_applied),
        children_applied: to_f64(totals.children_applied),
        take_home_pay: to_f64(totals.take_home_pay),
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

pub(crate) fn normalize_search(search: Option<&str>) -> Option<String> {
    let needle = search?.trim().to_lowercase();

    (!needle.is_empty()).then_some(needle)
}

fn matches_search(row: &PayrollSummaryDto, needle: &str) -> bool {
    let haystacks = [
        row.first_name.to_lowercase(),
        row.last_name.to_lowercase(),
        row.title_prefix.clone().unwrap_or_default().to_lowercase(),
        row.title_suffix.clone().unwrap_or_default().to_lowercase(),
        row.position.as_str().to_lowercase(),
        row.marital_status.as_str().to_lowercase(),
        row.id.to_string(),
        format!("{:.2}", row.take_home_pay),
    ];

    haystacks.iter().any(|haystack| haystack.contains(needle))
}
