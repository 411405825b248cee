//! End-to-end turns through `SalesEngine` with scripted collaborators

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sales_agent_config::language_pack::LanguagePackRegistry;
use sales_agent_config::settings::Settings;
use sales_agent_core::traits::{
    CatalogError, GenerationError, OutboundMessenger, ProductCatalog, SendError, ShopContext,
    TextGenerator, UserIdentity,
};
use sales_agent_core::{AidaStage, FunnelStage, Language, Product, SpinStage};
use sales_agent_funnel::{NextAction, SalesEngine};
use sales_agent_persistence::MemoryStore;

/// Replays a fixed sequence of generation results; `Err` entries fail the
/// call. Every turn consumes one analysis result and one reply result.
struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<String, ()>>>,
}

impl ScriptedGenerator {
    fn new(script: Vec<Result<&str, ()>>) -> Self {
        Self {
            script: Mutex::new(
                script
                    .into_iter()
                    .map(|entry| entry.map(str::to_string))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(())) => Err(GenerationError::Transport("scripted failure".into())),
            None => Ok("{}".to_string()),
        }
    }
}

struct StaticCatalog {
    products: Vec<Product>,
}

#[async_trait]
impl ProductCatalog for StaticCatalog {
    async fn fetch_products(&self, _shop: &ShopContext) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

#[derive(Default)]
struct RecordingMessenger {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl OutboundMessenger for RecordingMessenger {
    async fn send(&self, recipient: &str, text: &str) -> Result<(), SendError> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), text.to_string()));
        Ok(())
    }
}

fn watch(title: &str, description: &str, price: f64) -> Product {
    Product {
        title: title.into(),
        description: description.into(),
        product_type: "watch".into(),
        price,
    }
}

fn identity() -> UserIdentity {
    UserIdentity {
        external_id: "42".into(),
        username: Some("jane_bakes".into()),
        first_name: Some("Jane".into()),
        last_name: None,
    }
}

fn engine(
    script: Vec<Result<&str, ()>>,
    products: Vec<Product>,
) -> (SalesEngine, Arc<RecordingMessenger>) {
    let messenger = Arc::new(RecordingMessenger::default());
    let mut settings = Settings::default();
    settings.owner.chat_id = Some("owner-chat".to_string());
    let engine = SalesEngine::new(
        Arc::new(ScriptedGenerator::new(script)),
        Arc::new(MemoryStore::new()),
        Arc::new(StaticCatalog { products }),
        messenger.clone(),
        LanguagePackRegistry::default(),
        settings,
    );
    (engine, messenger)
}

#[tokio::test]
async fn test_open_session_renders_welcome() {
    let (engine, _) = engine(vec![], vec![]);
    let (session, welcome) = engine
        .open_session(
            &identity(),
            Language::En,
            FunnelStage::Spin(SpinStage::Greeting),
        )
        .await
        .unwrap();
    assert!(session.conversation_id.is_some());
    assert!(session.db_user_id.is_some());
    assert!(welcome.contains("Alex"));
    assert!(!welcome.contains("{owner_short_name}"));
}

#[tokio::test]
async fn test_bare_name_reply_advances_and_captures_name() {
    let (engine, _) = engine(vec![Ok("{}"), Ok("Nice to meet you, Alex!")], vec![]);
    let (mut session, _) = engine
        .open_session(
            &identity(),
            Language::En,
            FunnelStage::Spin(SpinStage::Greeting),
        )
        .await
        .unwrap();
    session.stage = FunnelStage::Spin(SpinStage::NameCollection);

    let outcome = engine.process_turn(&session, "Alex", None).await;
    assert_eq!(outcome.reply, "Nice to meet you, Alex!");
    assert_eq!(
        outcome.session.stage,
        FunnelStage::Spin(SpinStage::TrustBuilding)
    );
    assert_eq!(outcome.session.user_provided_name.as_deref(), Some("Alex"));
}

#[tokio::test]
async fn test_generation_failure_rolls_the_turn_back() {
    let (engine, messenger) = engine(
        vec![Ok(r#"{"businessType": "bakery"}"#), Err(())],
        vec![],
    );
    let (mut session, _) = engine
        .open_session(
            &identity(),
            Language::En,
            FunnelStage::Spin(SpinStage::Greeting),
        )
        .await
        .unwrap();
    session.stage = FunnelStage::Spin(SpinStage::SituationDiscovery);
    let before = session.clone();

    let outcome = engine
        .process_turn(&session, "I run a small bakery", None)
        .await;
    assert_eq!(outcome.reply, "Sorry, an error occurred. Please try again.");
    assert_eq!(outcome.session, before);
    assert!(outcome.recommended_products.is_empty());
    assert!(messenger.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_shared_phone_completes_and_notifies_owner() {
    let (engine, messenger) = engine(
        vec![
            Ok("{}"),
            Ok("Thank you! Alex will contact you soon."),
            Ok("Bakery - cannot keep up with orders"),
        ],
        vec![],
    );
    let (mut session, _) = engine
        .open_session(
            &identity(),
            Language::En,
            FunnelStage::Spin(SpinStage::Greeting),
        )
        .await
        .unwrap();
    session.stage = FunnelStage::Spin(SpinStage::ContactCollection);
    session.user_provided_name = Some("Jane".into());
    session.user_data.business_type = Some("bakery".into());

    let outcome = engine.process_turn(&session, "+380977281466", None).await;
    assert_eq!(
        outcome.session.stage,
        FunnelStage::Spin(SpinStage::ConversationCompleted)
    );
    assert_eq!(
        outcome.session.extracted_contacts.phone.as_deref(),
        Some("+380977281466")
    );

    let sent = messenger.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (recipient, text) = &sent[0];
    assert_eq!(recipient, "owner-chat");
    assert!(text.contains("+380977281466"));
    assert!(text.contains("10/10"));
    assert!(text.contains("Bakery - cannot keep up with orders"));
}

#[tokio::test]
async fn test_engaged_shopper_gets_ranked_recommendations() {
    let (engine, _) = engine(
        vec![
            Ok(r#"{"preferences": "minimalist", "budget": "$150"}"#),
            Ok("These would suit you well!"),
        ],
        vec![
            watch("Luxury Chrono", "gold case", 500.0),
            watch("Minimalist One", "minimalist dial", 150.0),
        ],
    );
    let (mut session, _) = engine
        .open_session(
            &identity(),
            Language::En,
            FunnelStage::Aida(AidaStage::Greeting),
        )
        .await
        .unwrap();
    session.stage = FunnelStage::Aida(AidaStage::Interest);

    let shop = ShopContext {
        shop_id: "shop-1".into(),
    };
    let outcome = engine
        .process_turn(&session, "something minimalist under $150?", Some(&shop))
        .await;
    assert_eq!(outcome.session.stage, FunnelStage::Aida(AidaStage::Desire));
    assert_eq!(
        outcome.recommended_products[0].product.title,
        "Minimalist One"
    );
    assert_eq!(
        outcome.session.current_product_focus.as_deref(),
        Some("Minimalist One")
    );
    assert_eq!(outcome.next_action, NextAction::ShowProducts);
}

#[tokio::test]
async fn test_ready_buyer_completes_the_shopping_funnel() {
    let (engine, messenger) = engine(
        vec![
            Ok(r#"{"purchaseIntent": "ready_to_buy", "emotionalTone": "excited"}"#),
            Ok("Wonderful, let's wrap up your order!"),
            Ok("Shopper ready to buy a watch"),
        ],
        vec![watch("Minimalist One", "minimalist dial", 150.0)],
    );
    let (mut session, _) = engine
        .open_session(
            &identity(),
            Language::En,
            FunnelStage::Aida(AidaStage::Greeting),
        )
        .await
        .unwrap();
    session.stage = FunnelStage::Aida(AidaStage::Action);

    let outcome = engine
        .process_turn(&session, "perfect, I want it, take my money!", None)
        .await;
    assert_eq!(outcome.session.stage, FunnelStage::Aida(AidaStage::Completed));
    assert_eq!(outcome.next_action, NextAction::CloseSale);
    assert_eq!(messenger.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_history_accumulates_across_turns() {
    let (engine, _) = engine(
        vec![Ok("{}"), Ok("reply one"), Ok("{}"), Ok("reply two")],
        vec![],
    );
    let (session, _) = engine
        .open_session(
            &identity(),
            Language::En,
            FunnelStage::Spin(SpinStage::Greeting),
        )
        .await
        .unwrap();

    let outcome = engine.process_turn(&session, "hello", None).await;
    let outcome = engine
        .process_turn(&outcome.session, "why do you need my name? tell me more first.", None)
        .await;
    assert_eq!(outcome.reply, "reply two");
    // greeting -> name_collection on turn one; turn two gave neither a bare
    // name nor an analysis name flag, so the funnel waits
    assert_eq!(
        outcome.session.stage,
        FunnelStage::Spin(SpinStage::NameCollection)
    );
}
