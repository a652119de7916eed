use super::*;

/// Expected: Ok(Some) with every owned row populated
#[tokio::test]
async fn returns_user_with_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("7", "Bob")).await?;

    let details = repo.find_details("7").await?.unwrap();

    assert_eq!(details.user.name, "Bob");
    assert_eq!(details.balance.unwrap().balance, 0);
    assert_eq!(details.level.unwrap().level, 0);
    assert!(details.settings.is_some());
    assert!(details.profile.is_some());

    Ok(())
}

/// A user inserted without owned rows still reads, with empty parts.
///
/// Expected: Ok(Some) with balance, level, settings and profile set to None
#[tokio::test]
async fn tolerates_missing_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let details = UserRepository::new(db).find_details(&user.id).await?.unwrap();

    assert!(details.balance.is_none());
    assert!(details.level.is_none());
    assert!(details.settings.is_none());
    assert!(details.profile.is_none());

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_details("missing").await?;

    assert!(result.is_none());

    Ok(())
}
