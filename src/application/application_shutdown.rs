use super::ApplicationStateToClose;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;

    tracing::info!("closing rabbitmq connection");
    if let Err(err) = state.rabbitmq_connection.close().await {
        tracing::warn!(%err, "closing rabbitmq connection failed");
    }
}
