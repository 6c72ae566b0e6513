//! End-to-end aggregation scenarios over a realistic catalog.

use entity::{
    member::{MaritalStatus, Position},
    salary_component::{ComponentCategory, EligiblePosition},
};
use rust_decimal::Decimal;
use stipend::service::{assignment::AssignmentService, payroll::PayrollAggregator};
use stipend_test_utils::prelude::*;

/// Chair with a base salary plus both special allowances, married with two
/// children: every addend lands exactly once in the take-home pay.
#[tokio::test]
async fn chair_with_allowances_take_home_pay() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    test.with_payroll_tables().await?;

    let mut base = factory::component(201, "Base Salary Chair", Decimal::new(5_000_000_00, 2));
    base.eligible_position = EligiblePosition::Chair;
    test.insert_component(base).await?;

    let mut spouse = factory::spouse_allowance(204, Decimal::new(420_000_00, 2));
    spouse.name = "Spouse Allowance".to_string();
    test.insert_component(spouse).await?;

    let mut child = factory::child_allowance(205, Decimal::new(168_000_00, 2));
    child.name = "Child Allowance".to_string();
    test.insert_component(child).await?;

    let mut member = factory::member(101);
    member.position = Position::Chair;
    member.marital_status = MaritalStatus::Married;
    member.child_count = 2;
    test.insert_member(member).await?;

    let detail = AssignmentService::new(&test.db)
        .append(101, &[201, 204, 205])
        .await
        .unwrap();

    assert_eq!(detail.summary.component_count, 3);
    assert_eq!(detail.summary.total_monthly, 5_000_000.0);
    assert_eq!(detail.summary.spouse_applied, 420_000.0);
    assert_eq!(detail.summary.children_applied, 336_000.0);
    assert_eq!(detail.summary.take_home_pay, 5_756_000.0);

    // The same numbers appear on the summary row
    let rows = PayrollAggregator::new(&test.db).summary_rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 101);
    assert_eq!(rows[0].total_monthly, 5_000_000.0);
    assert_eq!(rows[0].take_home_pay, 5_756_000.0);
    assert_eq!(rows[0].component_count, 3);

    Ok(())
}

/// The detail summary identity holds for every member regardless of status
/// and child count.
#[tokio::test]
async fn take_home_pay_identity_for_every_member() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    test.with_payroll_tables().await?;

    test.insert_component(factory::component(10, "Gaji Pokok", Decimal::new(4_200_000_00, 2)))
        .await?;
    test.insert_component(factory::spouse_allowance(204, Decimal::new(420_000_00, 2)))
        .await?;
    test.insert_component(factory::child_allowance(205, Decimal::new(168_000_00, 2)))
        .await?;

    let statuses = [
        (1, MaritalStatus::Married, 0),
        (2, MaritalStatus::Single, 3),
        (3, MaritalStatus::DivorcedLiving, 1),
        (4, MaritalStatus::DivorcedDeceased, 4),
    ];

    let service = AssignmentService::new(&test.db);
    for (id, marital_status, child_count) in statuses {
        let mut member = factory::member(id);
        member.marital_status = marital_status;
        member.child_count = child_count;
        test.insert_member(member).await?;

        service.append(id, &[10]).await.unwrap();
    }

    let aggregator = PayrollAggregator::new(&test.db);
    for (id, _, _) in statuses {
        let detail = aggregator.detail(id).await.unwrap().unwrap();
        let summary = detail.summary;

        assert_eq!(
            summary.take_home_pay,
            summary.total_monthly + summary.spouse_applied + summary.children_applied,
            "identity failed for member {id}"
        );
    }

    Ok(())
}

/// Detail payload lists components ordered by category then id, and keeps
/// the member attributes intact.
#[tokio::test]
async fn detail_payload_shape() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    test.with_payroll_tables().await?;

    let mut member = factory::member(7);
    member.title_prefix = Some("Dr.".to_string());
    member.title_suffix = Some("S.H.".to_string());
    test.insert_member(member).await?;

    let mut other = factory::component(1, "Tunjangan Kehormatan", Decimal::new(3_720_000_00, 2));
    other.category = ComponentCategory::OtherAllowance;
    test.insert_component(other).await?;
    test.insert_component(factory::component(2, "Gaji Pokok", Decimal::new(4_200_000_00, 2)))
        .await?;

    let detail = AssignmentService::new(&test.db)
        .append(7, &[1, 2])
        .await
        .unwrap();

    assert_eq!(detail.member.id, 7);
    assert_eq!(detail.member.title_prefix.as_deref(), Some("Dr."));
    assert_eq!(detail.member.title_suffix.as_deref(), Some("S.H."));

    let ids: Vec<i64> = detail.components.iter().map(|c| c.id).collect();
    // Base salary first despite the higher id
    assert_eq!(ids, vec![2, 1]);

    Ok(())
}
