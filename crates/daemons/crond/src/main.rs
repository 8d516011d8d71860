use marketplace_config::configure;
use marketplace_database::DatabaseInfo;
use marketplace_result::Result;
use tasks::reconcile_progress;

pub mod tasks;

#[tokio::main]
async fn main() -> Result<()> {
    configure!(crond);

    let db = DatabaseInfo::Auto.connect().await.expect("database");
    reconcile_progress::task(db).await
}
