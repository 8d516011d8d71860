use ::mongodb::bson::{doc, to_document, Document};
use ::mongodb::options::{FindOptions, UpdateOptions};
use marketplace_models::v0::{Step, StepPayload};
use marketplace_result::Result;

use crate::MongoDb;
use crate::SellerProfile;

use super::AbstractSellerProfiles;

static COL: &str = "seller_profiles";

#[async_trait]
impl AbstractSellerProfiles for MongoDb {
    /// Fetch the seller profile of a user
    async fn fetch_seller_profile(&self, user_id: &str) -> Result<SellerProfile> {
        query!(self, find_one_by_id, COL, user_id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch profiles with progress advances still pending
    async fn fetch_profiles_pending_progress(
        &self,
        after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SellerProfile>> {
        let mut filter = doc! {
            "pending_progress.0": {
                "$exists": true
            }
        };

        if let Some(id) = after {
            filter.insert("_id", doc! { "$gt": id });
        }

        query!(
            self,
            find_with_options,
            COL,
            filter,
            FindOptions::builder()
                .sort(doc! { "_id": 1_i32 })
                .limit(i64::try_from(limit).unwrap_or(i64::MAX))
                .build()
        )
    }

    /// Save the section of a step, creating the profile if missing
    async fn save_profile_section(
        &self,
        user_id: &str,
        payload: &StepPayload,
        mark_pending: bool,
    ) -> Result<()> {
        // Payloads serialise as `{ step, data }`, only `data` is stored
        let mut tagged =
            to_document(payload).map_err(|_| create_database_error!("to_document", COL))?;
        let section = tagged
            .remove("data")
            .ok_or_else(|| create_database_error!("to_document", COL))?;

        let step = payload.step();
        let mut set = Document::new();
        set.insert(step.as_str(), section);

        let mut update = doc! {
            "$set": set
        };

        if mark_pending {
            update.insert(
                "$addToSet",
                doc! {
                    "pending_progress": step.as_str()
                },
            );
        }

        self.col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": user_id
                },
                update,
            )
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }

    /// Remove a step from the pending progress markers
    async fn clear_pending_progress(&self, user_id: &str, step: Step) -> Result<()> {
        self.col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": user_id
                },
                doc! {
                    "$pull": {
                        "pending_progress": step.as_str()
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }
}
