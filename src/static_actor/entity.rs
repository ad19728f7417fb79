//! [`Actor`] implementation for the Static processing unit.

use super::StaticError;
use crate::framework::{Actor, ActorContext, AnyMessage, Inbound, LogSink};
use crate::model::Config;
use async_trait::async_trait;
use std::sync::Arc;

/// Key read from every configuration message.
pub const VALUE_KEY: &str = "value";

/// Messages understood by [`StaticActor`].
#[derive(Debug, Clone, PartialEq)]
pub enum StaticMessage {
    Configure(Config),
}

impl From<Config> for StaticMessage {
    fn from(config: Config) -> Self {
        StaticMessage::Configure(config)
    }
}

impl Inbound for StaticMessage {
    fn from_any(msg: AnyMessage) -> Result<Self, AnyMessage> {
        let msg = match msg.downcast::<StaticMessage>() {
            Ok(msg) => return Ok(*msg),
            Err(other) => other,
        };
        msg.downcast::<Config>().map(|config| StaticMessage::Configure(*config))
    }
}

/// Stateless actor that logs the `value` flag of each configuration it receives.
pub struct StaticActor {
    log: Arc<dyn LogSink>,
}

impl StaticActor {
    /// Binds the actor to the log sink its context hands out.
    pub fn new(ctx: &ActorContext) -> Self {
        Self { log: ctx.log() }
    }

    /// Handles one message. A missing or non-boolean `value` is returned as an error
    /// before anything is logged.
    pub fn handle(&self, msg: StaticMessage) -> Result<(), StaticError> {
        match msg {
            StaticMessage::Configure(config) => {
                let value = config.get_bool(VALUE_KEY)?;
                self.log
                    .info(format_args!("Static running with value {}", value));
                Ok(())
            }
        }
    }
}

#[async_trait]
impl Actor for StaticActor {
    type Message = StaticMessage;
    type Error = StaticError;

    async fn receive(&mut self, msg: StaticMessage, _ctx: &ActorContext) -> Result<(), StaticError> {
        self.handle(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{LogRecord, RecordingLogging};
    use crate::model::ConfigError;

    fn actor() -> (StaticActor, RecordingLogging, ActorContext) {
        let logging = RecordingLogging::new();
        let ctx = ActorContext::new("/user/static", Arc::new(logging.clone()));
        (StaticActor::new(&ctx), logging, ctx)
    }

    #[tokio::test]
    async fn test_logs_true() {
        let (mut actor, logging, ctx) = actor();
        let msg = Config::new().with("value", true).into();
        actor.receive(msg, &ctx).await.unwrap();

        assert_eq!(
            logging.records(),
            vec![LogRecord {
                logger: "/user/static".into(),
                message: "Static running with value true".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_logs_false() {
        let (mut actor, logging, ctx) = actor();
        let msg = Config::new().with("value", false).into();
        actor.receive(msg, &ctx).await.unwrap();

        assert_eq!(logging.messages(), vec!["Static running with value false"]);
    }

    #[test]
    fn test_missing_value_fails_without_logging() {
        let (actor, logging, _ctx) = actor();
        let result = actor.handle(Config::new().with("other", true).into());

        assert_eq!(
            result,
            Err(StaticError::Config(ConfigError::Missing("value".into())))
        );
        assert!(logging.records().is_empty());
    }

    #[test]
    fn test_non_boolean_value_fails() {
        let (actor, logging, _ctx) = actor();
        let result = actor.handle(Config::new().with("value", 1_i64).into());

        assert!(matches!(
            result,
            Err(StaticError::Config(ConfigError::WrongType { .. }))
        ));
        assert!(logging.records().is_empty());
    }

    #[test]
    fn test_inbound_accepts_config_and_rejects_others() {
        let config = Config::new().with("value", true);
        let accepted = StaticMessage::from_any(Box::new(config.clone())).unwrap();
        assert_eq!(accepted, StaticMessage::Configure(config));

        let rejected = StaticMessage::from_any(Box::new("hello")).unwrap_err();
        assert_eq!(rejected.downcast_ref::<&str>(), Some(&"hello"));
    }
}
