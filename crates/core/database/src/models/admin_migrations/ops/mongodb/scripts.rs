use marketplace_result::Result;

use crate::{
    mongodb::bson::{doc, from_document, Document},
    MigrationInfo, MongoDb,
};

pub const LATEST_REVISION: i32 = 3; // MUST BE +1 to last migration

pub async fn migrate_database(db: &MongoDb) -> Result<()> {
    let migrations = db.col::<Document>("migrations");
    let data = migrations
        .find_one(doc! {})
        .await
        .map_err(|_| create_database_error!("find_one", "migrations"))?;

    let Some(doc) = data else {
        error!("Database was configured incorrectly, possibly because initalization failed.");
        return Err(create_error!(InternalError));
    };

    let info: MigrationInfo =
        from_document(doc).map_err(|_| create_database_error!("from_document", "migrations"))?;

    let revision = run_migrations(db, info.revision).await?;

    migrations
        .update_one(
            doc! {
                "_id": info.id
            },
            doc! {
                "$set": {
                    "revision": revision
                }
            },
        )
        .await
        .map_err(|_| create_database_error!("update_one", "migrations"))?;

    info!("Migration complete. Currently at revision {}.", revision);
    Ok(())
}

pub async fn create_pending_progress_index(db: &crate::mongodb::Database) -> Result<()> {
    db.run_command(doc! {
        "createIndexes": "seller_profiles",
        "indexes": [
            {
                "key": {
                    "pending_progress": 1_i32
                },
                "name": "pending_progress",
                "sparse": true
            }
        ]
    })
    .await
    .map(|_| ())
    .map_err(|_| create_database_error!("createIndexes", "seller_profiles"))
}

pub async fn run_migrations(db: &MongoDb, revision: i32) -> Result<i32> {
    info!("Starting database migration.");

    if revision <= 0 {
        info!("Running migration [revision 0]: Test migration system.");
    }

    if revision <= 1 {
        info!("Running migration [revision 1]: Index profiles awaiting a progress advance.");
        create_pending_progress_index(&db.db()).await?;
    }

    if revision <= 2 {
        info!("Running migration [revision 2]: Track pending progress as a set of steps.");

        db.col::<Document>("seller_profiles")
            .update_many(
                doc! {
                    "pending_progress": {
                        "$type": "string"
                    }
                },
                vec![doc! {
                    "$set": {
                        "pending_progress": ["$pending_progress"]
                    }
                }],
            )
            .await
            .map_err(|_| create_database_error!("update_many", "seller_profiles"))?;
    }

    Ok(LATEST_REVISION.max(revision))
}
