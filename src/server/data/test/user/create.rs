use super::*;

/// Tests that creating a user also creates its owned rows.
///
/// Expected: balance at 0/0 version 0, level 0, default settings and profile
#[tokio::test]
async fn creates_user_with_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("100", "Alice")).await?;

    assert_eq!(user.id, "100");
    assert_eq!(user.name, "Alice");

    let balance = UserBalance::find_by_id("100").one(db).await?.unwrap();
    assert_eq!(balance.balance, 0);
    assert_eq!(balance.net_worth, 0);
    assert_eq!(balance.version, 0);

    let level = UserLevel::find_by_id("100").one(db).await?.unwrap();
    assert_eq!(level.level, 0);
    assert_eq!(level.xp, 0);

    let settings = UserSettings::find_by_id("100").one(db).await?.unwrap();
    assert!(settings.level_notifications);

    assert!(UserProfile::find_by_id("100").one(db).await?.is_some());

    Ok(())
}

/// Tests that a duplicate id fails and leaves no partial rows behind.
///
/// Expected: Err, and the first user's rows are untouched
#[tokio::test]
async fn fails_on_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("100", "Alice")).await?;
    let result = repo.create(create_param("100", "Imposter")).await;

    assert!(result.is_err());
    let user = User::find_by_id("100").one(db).await?.unwrap();
    assert_eq!(user.name, "Alice");

    Ok(())
}
