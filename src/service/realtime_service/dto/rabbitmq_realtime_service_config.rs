#[derive(Debug, Clone)]
pub struct RabbitmqRealtimeServiceConfig {
    pub exchange_name: String,
}
