use super::*;

#[tokio::test]
async fn overwrites_existing_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("1", "Erin")).await?;
    let before = repo.get_level("1").await?.unwrap();

    let level = repo.set_level("1", 1200, 4).await?;

    assert_eq!(level.xp, 1200);
    assert_eq!(level.level, 4);
    assert!(level.timestamp >= before.timestamp);

    Ok(())
}

/// Expected: row created for a user that had none
#[tokio::test]
async fn inserts_missing_level_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let level = UserRepository::new(db).set_level(&user.id, 10, 1).await?;

    assert_eq!(level.user_id, user.id);
    assert_eq!(level.level, 1);

    Ok(())
}
