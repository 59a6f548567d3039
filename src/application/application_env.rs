use anyhow::anyhow;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub db_connection_string: String,
    pub db_name: String,

    pub push_batch_limit: usize,

    /// Path to the provider's service account JSON key file.
    /// Absent file disables push delivery, the other channels stay up.
    pub fcm_service_account_file: Option<String>,

    pub push_icon: Option<String>,
    pub push_badge: Option<String>,

    pub rabbitmq_connection_string: String,
    pub rabbitmq_events_exchange_name: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("PORTAL_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("PORTAL_NOTIFIER_LOG_FILENAME")?;
        let db_connection_string = Self::env_var("PORTAL_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("PORTAL_NOTIFIER_DB_NAME")?;
        let push_batch_limit = Self::env_var("PORTAL_NOTIFIER_PUSH_BATCH_LIMIT")?.parse()?;
        let fcm_service_account_file = Self::env_var_opt("PORTAL_NOTIFIER_FCM_SERVICE_ACCOUNT_FILE");
        let push_icon = Self::env_var_opt("PORTAL_NOTIFIER_PUSH_ICON");
        let push_badge = Self::env_var_opt("PORTAL_NOTIFIER_PUSH_BADGE");
        let rabbitmq_connection_string =
            Self::env_var("PORTAL_NOTIFIER_RABBITMQ_CONNECTION_STRING")?;
        let rabbitmq_events_exchange_name =
            Self::env_var("PORTAL_NOTIFIER_RABBITMQ_EVENTS_EXCHANGE_NAME")?;

        Ok(Self {
            log_directory,
            log_filename,
            db_connection_string,
            db_name,
            push_batch_limit,
            fcm_service_account_file,
            push_icon,
            push_badge,
            rabbitmq_connection_string,
            rabbitmq_events_exchange_name,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn env_var_opt(name: &'static str) -> Option<String> {
        std::env::var(name).ok()
    }
}
