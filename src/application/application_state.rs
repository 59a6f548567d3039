use super::ApplicationEnv;
use crate::{
    repository::{
        DeviceTokensRepository, DeviceTokensRepositoryImpl, NotificationsRepository,
        NotificationsRepositoryImpl,
    },
    service::{
        notifications_service::{
            NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
        },
        push_dispatch_service::{PushDispatchServiceConfig, PushDispatchServiceImpl},
        push_provider::{
            DisabledPushProvider, FcmPushProvider, PushProvider, ServiceAccountKey,
        },
        realtime_service::{RabbitmqRealtimeService, RabbitmqRealtimeServiceConfig},
        token_health_service::TokenHealthServiceImpl,
    },
};
use amqprs::{
    callbacks::DefaultConnectionCallback,
    connection::{Connection, OpenConnectionArguments},
};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,

    ///
    /// Registry and record access for the portal's device registration
    /// and notification list/read-tracking actions
    ///
    pub notifications_repository: Arc<dyn NotificationsRepository>,
    pub device_tokens_repository: Arc<dyn DeviceTokensRepository>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub rabbitmq_connection: Connection,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db.clone()).await?;
    let notifications_repository: Arc<dyn NotificationsRepository> =
        Arc::new(notifications_repository);
    let device_tokens_repository = DeviceTokensRepositoryImpl::new(db).await?;
    let device_tokens_repository: Arc<dyn DeviceTokensRepository> =
        Arc::new(device_tokens_repository);

    tracing::info!("creating services");
    let push_provider = create_push_provider(env)?;

    let token_health_service =
        TokenHealthServiceImpl::new(device_tokens_repository.clone());
    let token_health_service = Arc::new(token_health_service);

    let config = PushDispatchServiceConfig {
        batch_limit: env.push_batch_limit,
    };
    let push_dispatch_service =
        PushDispatchServiceImpl::new(config, push_provider, token_health_service);
    let push_dispatch_service = Arc::new(push_dispatch_service);

    tracing::info!("connecting to rabbitmq");
    let open_connection_args =
        OpenConnectionArguments::try_from(env.rabbitmq_connection_string.as_str())?;
    let rabbitmq_connection = Connection::open(&open_connection_args).await?;
    rabbitmq_connection
        .register_callback(DefaultConnectionCallback)
        .await?;

    let config = RabbitmqRealtimeServiceConfig {
        exchange_name: env.rabbitmq_events_exchange_name.clone(),
    };
    let realtime_service = RabbitmqRealtimeService::new(config, &rabbitmq_connection).await?;
    let realtime_service = Arc::new(realtime_service);

    let config = NotificationsServiceConfig {
        push_icon: env.push_icon.clone(),
        push_badge: env.push_badge.clone(),
    };
    let notifications_service = NotificationsServiceImpl::new(
        config,
        notifications_repository.clone(),
        device_tokens_repository.clone(),
        push_dispatch_service,
        realtime_service,
    );
    let notifications_service = Arc::new(notifications_service);

    Ok((
        ApplicationState {
            notifications_service,
            notifications_repository,
            device_tokens_repository,
        },
        ApplicationStateToClose {
            db_client,
            rabbitmq_connection,
        },
    ))
}

fn create_push_provider(env: &ApplicationEnv) -> anyhow::Result<Arc<dyn PushProvider>> {
    let Some(service_account_file) = &env.fcm_service_account_file else {
        tracing::warn!("push provider not configured, push delivery disabled");
        return Ok(Arc::new(DisabledPushProvider));
    };

    let key_file = std::fs::read_to_string(service_account_file)?;
    let credentials: ServiceAccountKey = serde_json::from_str(&key_file)?;

    Ok(Arc::new(FcmPushProvider::new(credentials)))
}
