use static_actor::framework::mock::RecordingLogging;
use static_actor::framework::SpawnError;
use static_actor::model::Config;
use static_actor::runtime::{ActorOptions, ActorSystem};
use static_actor::static_actor::create;
use std::sync::Arc;
use std::time::Duration;

fn system() -> (ActorSystem, RecordingLogging) {
    let logging = RecordingLogging::new();
    let system = ActorSystem::with_logging("test", Arc::new(logging.clone()));
    (system, logging)
}

/// Full round trip: create, configure, shut down.
#[tokio::test]
async fn test_static_actor_logs_configured_value() {
    let (system, logging) = system();
    let actor = create(&system, &ActorOptions::default())
        .expect("Failed to create actor");

    actor
        .tell(Config::new().with("value", true))
        .await
        .expect("Failed to send config");
    actor
        .tell(Config::new().with("value", false))
        .await
        .expect("Failed to send config");

    system.shutdown().await.expect("Failed to shutdown system");

    let records = logging.records();
    assert_eq!(
        logging.messages(),
        vec![
            "Static running with value true",
            "Static running with value false"
        ]
    );
    assert!(records.iter().all(|r| r.logger == actor.path()));
}

/// Config parsed from TOML works the same as one built in code.
#[tokio::test]
async fn test_static_actor_accepts_parsed_config() {
    let (system, logging) = system();
    let actor = create(&system, &ActorOptions::default()).unwrap();

    let config = Config::from_toml_str("value = false\nunused = 1\n").unwrap();
    actor.tell(config).await.unwrap();
    system.shutdown().await.unwrap();

    assert_eq!(logging.messages(), vec!["Static running with value false"]);
}

/// Payloads the actor does not understand are dropped and the actor keeps running.
#[tokio::test]
async fn test_unrecognized_messages_are_ignored() {
    let (system, logging) = system();
    let actor = create(&system, &ActorOptions::default()).unwrap();

    actor.tell("not a config").await.unwrap();
    actor.tell(7_u32).await.unwrap();
    actor.tell(Config::new().with("value", true)).await.unwrap();
    system.shutdown().await.unwrap();

    assert_eq!(logging.messages(), vec!["Static running with value true"]);
}

/// A config without `value` fails the handler: nothing is logged and the actor stops.
#[tokio::test]
async fn test_malformed_config_stops_actor() {
    let (system, logging) = system();
    let actor = create(&system, &ActorOptions::default()).unwrap();

    actor.tell(Config::new().with("other", true)).await.unwrap();
    tokio::time::timeout(Duration::from_secs(5), actor.terminated())
        .await
        .expect("Actor did not stop after a malformed config");

    assert!(actor.tell(Config::new().with("value", true)).await.is_err());
    system.shutdown().await.unwrap();
    assert!(logging.records().is_empty());
}

/// Each call creates its own actor.
#[tokio::test]
async fn test_create_twice_gives_two_actors() {
    let (system, _logging) = system();
    let options = ActorOptions::default();

    let first = create(&system, &options).unwrap();
    let second = create(&system, &options).unwrap();

    assert_ne!(first, second);
    assert_eq!(system.live_actors(), 2);
    system.shutdown().await.unwrap();
}

/// Creation after shutdown is reported, not panicked on.
#[tokio::test]
async fn test_create_after_shutdown_fails() {
    let (system, _logging) = system();
    system.shutdown().await.unwrap();

    let result = create(&system, &ActorOptions::default());
    assert_eq!(result.unwrap_err(), SpawnError::SystemTerminated);
}
