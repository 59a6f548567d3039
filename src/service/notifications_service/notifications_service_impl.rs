use super::{NotificationsService, NotificationsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{DeviceTokensRepository, NotificationsRepository},
    service::{
        push_dispatch_service::PushDispatchService,
        push_provider::PushPayload,
        realtime_service::{RealtimeEvent, RealtimeEventKind, RealtimePayload, RealtimeService},
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    notifications_repository: Arc<dyn NotificationsRepository>,
    device_tokens_repository: Arc<dyn DeviceTokensRepository>,
    push_dispatch_service: Arc<dyn PushDispatchService>,
    realtime_service: Arc<dyn RealtimeService>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        notifications_repository: Arc<dyn NotificationsRepository>,
        device_tokens_repository: Arc<dyn DeviceTokensRepository>,
        push_dispatch_service: Arc<dyn PushDispatchService>,
        realtime_service: Arc<dyn RealtimeService>,
    ) -> Self {
        Self {
            config,
            notifications_repository,
            device_tokens_repository,
            push_dispatch_service,
            realtime_service,
        }
    }

    fn push_payload(&self, title: &str, body: &str, link: Option<&str>, tag: String) -> PushPayload {
        PushPayload {
            title: title.to_string(),
            body: body.to_string(),
            link: link.map(str::to_string),
            tag,
            icon: self.config.push_icon.clone(),
            badge: self.config.push_badge.clone(),
        }
    }

    async fn push_to_user(&self, user_id: Uuid, payload: PushPayload) {
        let tokens = match self.device_tokens_repository.find_active(user_id).await {
            Ok(tokens) => tokens,
            Err(err) => {
                tracing::warn!(%err, "reading device tokens failed, skipping push delivery");
                return;
            }
        };

        self.push_dispatch_service.dispatch(tokens, payload).await;
    }

    ///
    /// The emit runs on a detached task: the caller never waits for the
    /// bus and a failed emit is recovered by the clients' polling fallback
    ///
    fn spawn_realtime_emit(&self, event: RealtimeEvent) {
        let realtime_service = self.realtime_service.clone();
        tokio::spawn(async move {
            if let Err(err) = realtime_service.emit(event).await {
                tracing::warn!(%err, "realtime emit failed");
            }
        });
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn notify(
        &self,
        user_id: Uuid,
        notification: input::Notification,
    ) -> Result<output::NotificationId, Error> {
        tracing::info!("creating notification");
        tracing::trace!(?notification);

        let inserted = self
            .notifications_repository
            .insert(
                user_id,
                notification.notification_type,
                notification.title,
                notification.body,
                notification.link,
                OffsetDateTime::now_utc(),
            )
            .await?;

        let id = inserted.id.to_hex();
        tracing::info!(id, "created notification");

        // push starts only after the record exists: the record's own
        // identity is the coalescing tag, so multi-device deliveries of
        // this notification collapse into one displayed entry while two
        // different notifications can never collide
        let notification = output::Notification::from(inserted);
        let payload = self.push_payload(
            &notification.title,
            &notification.body,
            notification.link.as_deref(),
            notification.id.clone(),
        );
        self.push_to_user(user_id, payload).await;

        self.spawn_realtime_emit(RealtimeEvent {
            event: RealtimeEventKind::NotificationCreated,
            user_ids: vec![user_id],
            payload: RealtimePayload::Notification(notification),
        });

        Ok(output::NotificationId { id })
    }

    async fn broadcast(&self, announcement: input::Announcement) {
        tracing::info!("broadcasting announcement");
        tracing::trace!(?announcement);

        let announcement = output::Announcement::from(announcement);
        let tag = broadcast_tag(OffsetDateTime::now_utc());
        let payload = self.push_payload(
            &announcement.title,
            &announcement.body,
            announcement.link.as_deref(),
            tag,
        );

        match self.device_tokens_repository.find_all_active().await {
            Ok(tokens) => {
                self.push_dispatch_service.dispatch(tokens, payload).await;
            }
            Err(err) => {
                tracing::warn!(%err, "reading device tokens failed, skipping push delivery");
            }
        }

        self.spawn_realtime_emit(RealtimeEvent {
            event: RealtimeEventKind::Announcement,
            user_ids: Vec::new(),
            payload: RealtimePayload::Announcement(announcement),
        });
    }
}

///
/// One tag per broadcast call: every device of the audience coalesces
/// on it, while repeated broadcasts get distinct tags. Millisecond
/// precision; two broadcasts within the same millisecond would share
/// a tag, which is accepted.
///
fn broadcast_tag(timestamp: OffsetDateTime) -> String {
    let unix_millis = timestamp.unix_timestamp_nanos() / 1_000_000;
    format!("broadcast-{unix_millis}")
}
