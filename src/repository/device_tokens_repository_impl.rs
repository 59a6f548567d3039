use super::{
    dto::{ActiveToken, DeviceTokenFindEntity},
    DeviceTokensRepository, Error,
};
use crate::dto::DeviceClass;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const DEVICE_TOKENS: &str = "device_tokens";
const INDEX_NAME_UNIQUE_TOKEN: &str = "unique_index_token";
const INDEX_NAME_USER_ID_ACTIVE: &str = "index_user_id_active";

pub struct DeviceTokensRepositoryImpl {
    database: Database,
}

impl DeviceTokensRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(DEVICE_TOKENS).await?;

        let collection = database.collection(DEVICE_TOKENS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_TOKEN.to_string()) {
            Self::create_unique_token_index(&collection).await?;
            tracing::debug!("created index {DEVICE_TOKENS}.{INDEX_NAME_UNIQUE_TOKEN}");
        }
        if !index_names.contains(&INDEX_NAME_USER_ID_ACTIVE.to_string()) {
            Self::create_user_id_active_index(&collection).await?;
            tracing::debug!("created index {DEVICE_TOKENS}.{INDEX_NAME_USER_ID_ACTIVE}");
        }

        Ok(Self { database })
    }

    async fn create_unique_token_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "token": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_UNIQUE_TOKEN.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    async fn create_user_id_active_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "user_id": 1,
                "active": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_USER_ID_ACTIVE.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl DeviceTokensRepository for DeviceTokensRepositoryImpl {
    async fn upsert(
        &self,
        user_id: Uuid,
        token: String,
        device_class: DeviceClass,
        label: Option<String>,
        last_seen_at: OffsetDateTime,
    ) -> Result<ObjectId, Error> {
        let user_id = bson::Uuid::from(user_id);
        let last_seen_at = DateTime::from(last_seen_at);

        let entity = self
            .database
            .collection::<DeviceTokenFindEntity>(DEVICE_TOKENS)
            .find_one_and_update(
                doc! {
                    "token": token,
                },
                doc! {
                    "$set": {
                        "user_id": user_id,
                        "device_class": device_class.as_ref(),
                        "label": label,
                        "active": true,
                        "last_seen_at": last_seen_at,
                    },
                    "$setOnInsert": {
                        "created_at": last_seen_at,
                    },
                },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|err| {
                let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind else {
                    return Error::Mongo(err);
                };

                const DUPLICATE_KEY_CODE: i32 = 11000;
                match write_error.code == DUPLICATE_KEY_CODE {
                    true => Error::InsertUniqueViolation,
                    false => Error::Mongo(err),
                }
            })?
            .ok_or_else(|| {
                Error::Mongo(ErrorKind::Custom(Arc::new("upsert returned no document")).into())
            })?;

        Ok(entity._id)
    }

    async fn find_active(&self, user_id: Uuid) -> Result<Vec<ActiveToken>, Error> {
        let user_id = bson::Uuid::from(user_id);

        let tokens = self
            .database
            .collection::<ActiveToken>(DEVICE_TOKENS)
            .find(doc! {
                "user_id": user_id,
                "active": true,
            })
            .projection(doc! {
                "_id": 1,
                "token": 1,
            })
            .await?
            .try_collect()
            .await?;

        Ok(tokens)
    }

    async fn find_all_active(&self) -> Result<Vec<ActiveToken>, Error> {
        let tokens = self
            .database
            .collection::<ActiveToken>(DEVICE_TOKENS)
            .find(doc! {
                "active": true,
            })
            .projection(doc! {
                "_id": 1,
                "token": 1,
            })
            .await?
            .try_collect()
            .await?;

        Ok(tokens)
    }

    async fn deactivate(&self, id: ObjectId) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(DEVICE_TOKENS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "active": false,
                    }
                },
            )
            .await?;

        // matched_count instead of modified_count so that deactivating
        // an already inactive token stays idempotent
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
