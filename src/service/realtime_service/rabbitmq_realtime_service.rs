use super::{dto::RabbitmqRealtimeServiceConfig, dto::RealtimeEvent, error::Error, RealtimeService};
use amqprs::{
    callbacks::DefaultChannelCallback,
    channel::{BasicPublishArguments, Channel, ExchangeDeclareArguments, ExchangeType},
    connection::Connection,
    BasicProperties,
};
use async_trait::async_trait;

pub struct RabbitmqRealtimeService {
    channel: Channel,
    exchange_name: String,
}

impl RabbitmqRealtimeService {
    pub async fn new(
        config: RabbitmqRealtimeServiceConfig,
        connection: &Connection,
    ) -> anyhow::Result<Self> {
        tracing::info!("opening channel");
        let channel = connection.open_channel(None).await?;
        channel.register_callback(DefaultChannelCallback).await?;

        tracing::info!("declaring exchange");
        let exchange_declare_args =
            ExchangeDeclareArguments::of_type(&config.exchange_name, ExchangeType::Direct);
        channel.exchange_declare(exchange_declare_args).await?;

        Ok(Self {
            channel,
            exchange_name: config.exchange_name,
        })
    }

    pub async fn close(self) {
        tracing::info!("closing channel");
        if let Err(err) = self.channel.close().await {
            tracing::warn!(%err, "closing channel failed");
        }
    }
}

#[async_trait]
impl RealtimeService for RabbitmqRealtimeService {
    async fn emit(&self, event: RealtimeEvent) -> Result<(), Error> {
        let routing_key = event.event.as_ref();
        let content = serde_json::to_vec(&event)?;

        let basic_properties = BasicProperties::default()
            .with_content_type("application/json")
            .finish();
        let args = BasicPublishArguments::new(&self.exchange_name, routing_key);
        self.channel
            .basic_publish(basic_properties, content, args)
            .await?;

        Ok(())
    }
}
