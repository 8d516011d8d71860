use marketplace_result::Result;

use super::scripts::LATEST_REVISION;

use crate::mongodb::bson::doc;
use crate::MongoDb;

pub async fn create_database(db: &MongoDb) -> Result<()> {
    info!("Creating database.");
    let db = db.db();

    for collection in [
        "migrations",
        "sessions",
        "onboarding_progress",
        "seller_profiles",
    ] {
        db.create_collection(collection)
            .await
            .map_err(|_| create_database_error!("create_collection", collection))?;
    }

    db.run_command(doc! {
        "createIndexes": "sessions",
        "indexes": [
            {
                "key": {
                    "token": 1_i32
                },
                "name": "token",
                "unique": true
            },
            {
                "key": {
                    "user_id": 1_i32
                },
                "name": "user_id"
            }
        ]
    })
    .await
    .map_err(|_| create_database_error!("createIndexes", "sessions"))?;

    super::scripts::create_pending_progress_index(&db).await?;

    db.collection("migrations")
        .insert_one(doc! {
            "_id": 0_i32,
            "revision": LATEST_REVISION
        })
        .await
        .map_err(|_| create_database_error!("insert_one", "migrations"))?;

    info!("Created database.");
    Ok(())
}
