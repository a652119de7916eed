use super::*;
use crate::server::model::user::UserSettings as Settings;

#[tokio::test]
async fn replaces_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("1", "Finn")).await?;

    let settings = repo
        .set_settings(Settings {
            user_id: "1".to_string(),
            level_notifications: false,
            direct_messages: true,
        })
        .await?;

    assert!(!settings.level_notifications);
    assert!(settings.direct_messages);
    assert_eq!(repo.get_settings("1").await?, Some(settings));

    Ok(())
}
