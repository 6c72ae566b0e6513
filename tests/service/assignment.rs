//! End-to-end assignment rejection scenarios.

use entity::{member::Position, salary_component::EligiblePosition};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use stipend::{
    error::{payroll::PayrollError, Error},
    service::assignment::AssignmentService,
};
use stipend_test_utils::prelude::*;

/// A chair-only component offered to an ordinary member is rejected with a
/// message naming both the component and the member's position, and no row
/// is written.
#[tokio::test]
async fn chair_component_rejected_for_ordinary_member() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    test.with_payroll_tables().await?;

    let mut member = factory::member(10);
    member.position = Position::Member;
    test.insert_member(member).await?;

    let mut chair_only = factory::component(500, "Tunjangan Ketua", Decimal::new(1_000_000_00, 2));
    chair_only.eligible_position = EligiblePosition::Chair;
    test.insert_component(chair_only).await?;

    let result = AssignmentService::new(&test.db).append(10, &[500]).await;

    let err = result.unwrap_err();
    match &err {
        Error::PayrollError(PayrollError::PositionMismatch {
            component_name,
            position,
        }) => {
            assert_eq!(component_name, "Tunjangan Ketua");
            assert_eq!(*position, "Anggota");
        }
        other => panic!("expected PositionMismatch, got {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains("Tunjangan Ketua"));
    assert!(message.contains("Anggota"));

    let rows = entity::prelude::Assignment::find().count(&test.db).await?;
    assert_eq!(rows, 0);

    Ok(())
}

/// Appending an already-assigned component reports the duplicate ids and
/// leaves the member's assignment count unchanged.
#[tokio::test]
async fn duplicate_append_reports_ids_and_changes_nothing() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    test.with_payroll_tables().await?;

    test.insert_member(factory::member(11)).await?;
    test.insert_component(factory::component(501, "Gaji Pokok", Decimal::new(
        4_200_000_00,
        2,
    )))
    .await?;

    let service = AssignmentService::new(&test.db);
    service.append(11, &[501]).await.unwrap();

    let result = service.append(11, &[501]).await;

    match result {
        Err(Error::PayrollError(PayrollError::DuplicateAssignment(duplicates))) => {
            assert_eq!(duplicates, vec![501]);
        }
        other => panic!("expected DuplicateAssignment, got {other:?}"),
    }

    let rows = entity::prelude::Assignment::find()
        .filter(entity::assignment::Column::MemberId.eq(11))
        .count(&test.db)
        .await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Replace keeps the overlap, removes the rest, and inserts the new ids.
#[tokio::test]
async fn replace_applies_set_difference() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    test.with_payroll_tables().await?;

    test.insert_member(factory::member(1)).await?;
    for (id, name) in [
        (1, "Gaji Pokok"),
        (2, "Tunjangan Beras"),
        (3, "Tunjangan Listrik"),
    ] {
        test.insert_component(factory::component(id, name, Decimal::new(100_000_00, 2)))
            .await?;
    }

    let service = AssignmentService::new(&test.db);
    service.append(1, &[1, 2]).await.unwrap();

    let detail = service.replace(1, &[2, 3]).await.unwrap();

    let mut ids: Vec<i64> = detail.components.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3]);

    Ok(())
}
