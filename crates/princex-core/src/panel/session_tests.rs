use super::*;

use async_trait::async_trait;
use princex_config::{Settings, StaticSettingsStore};
use princex_protocols::error::ProviderError;
use princex_protocols::provider::{ExplanationProvider, ProviderConfig, ProviderId};
use princex_protocols::types::ExplanationRecord;

use crate::gateway::ProviderGateway;
use crate::knowledge::fallback_record;
use crate::panel::OPEN_GUARD;
use crate::registry::ProviderRegistry;
use crate::resolver::ResolutionSource;

/// Provider that answers after a fixed delay.
struct SlowProvider {
    delay: Duration,
}

#[async_trait]
impl ExplanationProvider for SlowProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAI
    }

    async fn explain(
        &self,
        term: &str,
        _config: &ProviderConfig,
    ) -> Result<ExplanationRecord, ProviderError> {
        tokio::time::sleep(self.delay).await;
        let mut record = fallback_record(term);
        record.definition = format!("{} from the provider", term);
        Ok(record)
    }
}

fn spawn_session(delay: Duration) -> PanelHandle {
    let registry = Arc::new(ProviderRegistry::new());
    registry.register(Arc::new(SlowProvider { delay })).unwrap();
    let settings = Settings {
        enable_ai: true,
        api_provider: ProviderId::OpenAI,
        api_key: "sk-test".to_string(),
        model: String::new(),
    };
    let resolver = TermResolver::new(
        ProviderGateway::new(registry),
        Arc::new(StaticSettingsStore::new(settings)),
    );
    PanelSession::new(Arc::new(resolver)).spawn()
}

async fn settle() {
    tokio::time::sleep(SELECTION_SETTLE_DELAY + Duration::from_millis(10)).await;
}

#[tokio::test(start_paused = true)]
async fn test_selection_waits_for_settle_delay() {
    let handle = spawn_session(Duration::from_secs(1));

    handle.send(PanelEvent::Selection("stack".to_string())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(handle.state().is_idle());

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(matches!(handle.state(), PanelState::ButtonShown { .. }));

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_rapid_selections_use_latest() {
    let handle = spawn_session(Duration::from_secs(1));

    handle.send(PanelEvent::Selection("sta".to_string())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.send(PanelEvent::Selection("stack".to_string())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(handle.state().is_idle());

    settle().await;
    match handle.state() {
        PanelState::ButtonShown { term } => assert_eq!(term.display(), "stack"),
        other => panic!("unexpected state: {:?}", other),
    }

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_activate_resolves_from_knowledge_base() {
    let handle = spawn_session(Duration::from_secs(5));

    handle.send(PanelEvent::Selection("Stack".to_string())).await.unwrap();
    settle().await;
    handle.send(PanelEvent::Activate).await.unwrap();

    let state = handle
        .wait_for(|s| matches!(s, PanelState::PanelShown { .. }))
        .await
        .unwrap();
    match state {
        PanelState::PanelShown { resolution, .. } => {
            assert_eq!(resolution.term, "Stack");
            assert_eq!(resolution.source, ResolutionSource::KnowledgeBase);
        }
        other => panic!("unexpected state: {:?}", other),
    }

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_loading_then_provider_result() {
    let handle = spawn_session(Duration::from_secs(2));

    handle.send(PanelEvent::Selection("memoization".to_string())).await.unwrap();
    settle().await;
    handle.send(PanelEvent::Activate).await.unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(matches!(handle.state(), PanelState::PanelLoading { .. }));

    let state = handle
        .wait_for(|s| matches!(s, PanelState::PanelShown { .. }))
        .await
        .unwrap();
    match state {
        PanelState::PanelShown { resolution, .. } => {
            assert_eq!(resolution.source, ResolutionSource::Provider(ProviderId::OpenAI));
            assert_eq!(resolution.record.definition, "memoization from the provider");
        }
        other => panic!("unexpected state: {:?}", other),
    }

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_result_for_closed_panel_is_dropped() {
    let handle = spawn_session(Duration::from_secs(5));

    handle.send(PanelEvent::Selection("memoization".to_string())).await.unwrap();
    settle().await;
    handle.send(PanelEvent::Activate).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    handle.send(PanelEvent::Close).await.unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(handle.state().is_idle());

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_result_for_replaced_panel_is_dropped() {
    let handle = spawn_session(Duration::from_secs(5));

    handle.send(PanelEvent::Selection("memoization".to_string())).await.unwrap();
    settle().await;
    handle.send(PanelEvent::Activate).await.unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;

    handle.send(PanelEvent::Selection("recursion".to_string())).await.unwrap();
    settle().await;
    handle.send(PanelEvent::Activate).await.unwrap();

    let state = handle
        .wait_for(|s| matches!(s, PanelState::PanelShown { .. }))
        .await
        .unwrap();
    match state {
        PanelState::PanelShown {
            resolution,
            generation,
            ..
        } => {
            assert_eq!(resolution.term, "recursion");
            assert_eq!(generation, 2);
        }
        other => panic!("unexpected state: {:?}", other),
    }

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_outside_click_respects_open_guard() {
    let handle = spawn_session(Duration::from_secs(5));

    handle.send(PanelEvent::Selection("stack".to_string())).await.unwrap();
    settle().await;
    handle.send(PanelEvent::Activate).await.unwrap();
    handle.send(PanelEvent::OutsideClick).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(handle.state().is_open());

    tokio::time::sleep(OPEN_GUARD).await;
    handle.send(PanelEvent::OutsideClick).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(handle.state().is_idle());

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_escape_and_invalid_selection_close() {
    let handle = spawn_session(Duration::from_secs(5));

    handle.send(PanelEvent::Selection("stack".to_string())).await.unwrap();
    settle().await;
    handle.send(PanelEvent::Activate).await.unwrap();
    handle.send(PanelEvent::Escape).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(handle.state().is_idle());

    handle.send(PanelEvent::Selection("stack".to_string())).await.unwrap();
    settle().await;
    assert!(!handle.state().is_idle());
    handle.send(PanelEvent::Selection("   ".to_string())).await.unwrap();
    settle().await;
    assert!(handle.state().is_idle());

    handle.shutdown().await;
}
