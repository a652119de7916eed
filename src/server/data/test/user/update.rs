use super::*;

#[tokio::test]
async fn updates_name_and_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            &user.id,
            UpdateUserParam {
                name: "Renamed".to_string(),
                avatar_url: Some("https://cdn.example/new.png".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(
        updated.avatar_url.as_deref(),
        Some("https://cdn.example/new.png")
    );
    assert_eq!(updated.date_created, user.date_created);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(
            "missing",
            UpdateUserParam {
                name: "Nobody".to_string(),
                avatar_url: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
