use super::*;
use crate::server::model::user::UserProfile as Profile;

#[tokio::test]
async fn replaces_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("1", "Gia")).await?;

    let profile = repo
        .set_profile(Profile {
            user_id: "1".to_string(),
            bio: Some("Night owl".to_string()),
            background: "stars".to_string(),
        })
        .await?;

    assert_eq!(profile.bio.as_deref(), Some("Night owl"));
    assert_eq!(profile.background, "stars");
    assert_eq!(repo.get_profile("1").await?, Some(profile));

    Ok(())
}
