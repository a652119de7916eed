use super::*;

/// Expected: Ok(true) and every owned row removed
#[tokio::test]
async fn deletes_user_and_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("9", "Dave")).await?;

    let deleted = repo.delete("9").await?;

    assert!(deleted);
    assert!(User::find_by_id("9").one(db).await?.is_none());
    assert!(UserBalance::find_by_id("9").one(db).await?.is_none());
    assert!(UserLevel::find_by_id("9").one(db).await?.is_none());
    assert!(UserSettings::find_by_id("9").one(db).await?.is_none());
    assert!(UserProfile::find_by_id("9").one(db).await?.is_none());

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete("missing").await?;

    assert!(!deleted);

    Ok(())
}

/// Expected: receipts naming the user as sender or recipient are removed, others kept
#[tokio::test]
async fn removes_transfer_receipts_of_user() -> Result<(), DbErr> {
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    for (id, name) in [("9", "Dave"), ("10", "Erin"), ("11", "Finn")] {
        repo.create(create_param(id, name)).await?;
    }
    for (key, from, to) in [("t-1", "9", "10"), ("t-2", "10", "9"), ("t-3", "10", "11")] {
        entity::ledger_transfer::ActiveModel {
            idempotency_key: ActiveValue::Set(key.to_string()),
            from_user_id: ActiveValue::Set(from.to_string()),
            to_user_id: ActiveValue::Set(to.to_string()),
            amount: ActiveValue::Set(5),
            date_applied: ActiveValue::Set(Utc::now()),
        }
        .insert(db)
        .await?;
    }

    repo.delete("9").await?;

    assert!(LedgerTransfer::find_by_id("t-1").one(db).await?.is_none());
    assert!(LedgerTransfer::find_by_id("t-2").one(db).await?.is_none());
    assert!(LedgerTransfer::find_by_id("t-3").one(db).await?.is_some());

    Ok(())
}
