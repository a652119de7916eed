use super::*;

/// Expected: Ok(None) before the keyed transfer, the receipt after it
#[tokio::test]
async fn finds_receipt_once_committed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (a, _) = factory::create_funded_user(db, 50).await?;
    let (b, _) = factory::create_funded_user(db, 0).await?;

    let store = SeaOrmLedgerStore::new(db.clone());
    assert!(store.find_receipt("t-1").await.unwrap().is_none());

    let (from, to) = read_pair(&store, &a.id, &b.id).await;
    let receipt = receipt("t-1", &a.id, &b.id, 20);
    store
        .commit_if(&[credit(&from, -20), credit(&to, 20)], Some(&receipt))
        .await
        .unwrap();

    assert_eq!(store.find_receipt("t-1").await.unwrap(), Some(receipt));

    Ok(())
}
