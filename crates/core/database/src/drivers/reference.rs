use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;
use marketplace_result::Result;

use crate::{ProgressRecord, SellerProfile, Session};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub sessions: Arc<Mutex<HashMap<String, Session>>>,
        pub onboarding_progress: Arc<Mutex<HashMap<String, ProgressRecord>>>,
        pub seller_profiles: Arc<Mutex<HashMap<String, SellerProfile>>>,

        #[cfg(test)]
        pub failing_writes: Arc<Mutex<std::collections::HashSet<String>>>,
    }
);

impl ReferenceDb {
    /// Make every write to the given collection fail until cleared
    #[cfg(test)]
    pub async fn fail_writes(&self, collection: &'static str, fail: bool) {
        self.toggle_failure(collection.to_string(), fail).await;
    }

    /// Make writes to one document of the given collection fail until cleared
    #[cfg(test)]
    pub async fn fail_writes_for(&self, collection: &'static str, id: &str, fail: bool) {
        self.toggle_failure(format!("{collection}/{id}"), fail).await;
    }

    #[cfg(test)]
    async fn toggle_failure(&self, key: String, fail: bool) {
        let mut failing = self.failing_writes.lock().await;
        if fail {
            failing.insert(key);
        } else {
            failing.remove(&key);
        }
    }

    /// Check whether writes to the given document should go through
    #[cfg(test)]
    pub(crate) async fn ensure_writable(&self, collection: &'static str, id: &str) -> Result<()> {
        let failing = self.failing_writes.lock().await;
        if failing.contains(collection) || failing.contains(&format!("{collection}/{id}")) {
            Err(create_database_error!("write", collection))
        } else {
            Ok(())
        }
    }

    /// Check whether writes to the given document should go through
    #[cfg(not(test))]
    pub(crate) async fn ensure_writable(&self, _collection: &'static str, _id: &str) -> Result<()> {
        Ok(())
    }
}
