use super::*;

/// Expected: created flag set and ledger account present
#[tokio::test]
async fn creates_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, created) = UserRepository::new(db)
        .upsert(create_param("55", "Carol"))
        .await?;

    assert!(created);
    assert_eq!(user.name, "Carol");
    assert!(UserBalance::find_by_id("55").one(db).await?.is_some());

    Ok(())
}

/// Expected: name refreshed, created flag unset, balance untouched
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::create_funded_user(db, 300).await?;

    let (updated, created) = UserRepository::new(db)
        .upsert(create_param(&user.id, "New Name"))
        .await?;

    assert!(!created);
    assert_eq!(updated.name, "New Name");
    let balance = UserBalance::find_by_id(user.id.as_str()).one(db).await?.unwrap();
    assert_eq!(balance.balance, 300);

    Ok(())
}
