use std::time::Duration;

use log::info;
use marketplace_config::{capture_error, config};
use marketplace_database::{Database, SellerProfile};
use marketplace_result::Result;
use tokio::time::sleep;

/// Apply progress advances left behind by failed step submissions
pub async fn task(db: Database) -> Result<()> {
    loop {
        let config = config().await;

        match pass(&db, config.onboarding.reconcile_batch_size).await {
            Ok(0) => {}
            Ok(count) => info!("Reconciled onboarding progress of {count} sellers"),
            Err(error) => capture_error(&error),
        }

        sleep(Duration::from_secs(config.onboarding.reconcile_interval_secs)).await;
    }
}

/// Run a single reconciliation pass, fetching `batch_size` profiles at a time
pub async fn pass(db: &Database, batch_size: usize) -> Result<usize> {
    SellerProfile::reconcile_pending(db, batch_size).await
}

#[cfg(test)]
mod tests {
    use marketplace_database::{Database, ProgressRecord, ReferenceDb};
    use marketplace_models::v0::{CategorySelection, Step, StepPayload};

    use super::pass;

    #[tokio::test]
    async fn applies_pending_progress() {
        let db = Database::Reference(ReferenceDb::default());

        for user_id in ["first", "second"] {
            db.save_profile_section(
                user_id,
                &StepPayload::Category(CategorySelection {
                    categories: vec!["Garden".to_string()],
                }),
                true,
            )
            .await
            .unwrap();
        }

        // Small batches still cover every pending profile in one pass
        assert_eq!(pass(&db, 1).await.unwrap(), 2);
        assert_eq!(pass(&db, 10).await.unwrap(), 0);

        for user_id in ["first", "second"] {
            let progress = ProgressRecord::get_or_create(&db, user_id).await.unwrap();
            assert!(progress.is_completed(Step::Category));
            assert_eq!(progress.current_step, Step::Addresses);
        }
    }
}
