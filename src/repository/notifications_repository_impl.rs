use super::{
    dto::{InsertedNotification, Notification, NotificationFindEntity},
    entity::NotificationInsertEntity,
    Error, NotificationsRepository,
};
use crate::dto::{input, NotificationType};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, options::IndexOptions, Collection, Database, IndexModel};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_USER_ID_CREATED_AT: &str = "index_user_id_created_at";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(NOTIFICATIONS).await?;

        let collection = database.collection(NOTIFICATIONS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_USER_ID_CREATED_AT.to_string()) {
            Self::create_user_id_created_at_index(&collection).await?;
            tracing::debug!("created index {NOTIFICATIONS}.{INDEX_NAME_USER_ID_CREATED_AT}");
        }

        Ok(Self { database })
    }

    async fn create_user_id_created_at_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "user_id": 1,
                "created_at": -1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_USER_ID_CREATED_AT.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert(
        &self,
        user_id: Uuid,
        notification_type: NotificationType,
        title: String,
        body: String,
        link: Option<String>,
        created_at: OffsetDateTime,
    ) -> Result<InsertedNotification, Error> {
        let insert_entity = NotificationInsertEntity {
            user_id: user_id.into(),
            notification_type,
            title,
            body,
            link,
            read: false,
            created_at: DateTime::from(created_at),
        };

        let insert_result = self
            .database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(InsertedNotification {
            id,
            user_id,
            notification_type,
            title: insert_entity.title,
            body: insert_entity.body,
            link: insert_entity.link,
            read: insert_entity.read,
            created_at,
        })
    }

    async fn update_read(&self, id: ObjectId, user_id: Uuid, read: bool) -> Result<(), Error> {
        let user_id = bson::Uuid::from(user_id);

        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                    "user_id": user_id,
                },
                doc! {
                    "$set": {
                        "read": read,
                    }
                },
            )
            .await?;

        // matched_count instead of modified_count because replacing
        // true with true doesn't count as modification
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn find_many(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
    ) -> Result<Vec<Notification>, Error> {
        let user_id = bson::Uuid::from(user_id);

        let notifications = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(doc! {
                "user_id": user_id,
            })
            .sort(doc! {
                "created_at": -1,
            })
            .skip((pagination.page_size * pagination.page_idx) as u64)
            .limit(pagination.page_size as i64)
            .await?
            .map_ok(Notification::from)
            .try_collect()
            .await?;

        Ok(notifications)
    }
}
