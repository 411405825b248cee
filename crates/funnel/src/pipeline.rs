//! Turn pipeline
//!
//! `SalesEngine` drives one full turn: log the inbound message, analyze it,
//! score engagement, advance the stage machine, recommend products, build the
//! prompt, generate the reply and persist the result. A failed generation
//! rolls the whole turn back; persistence failures degrade to warnings so the
//! customer still gets a reply.

use std::sync::Arc;

use sales_agent_config::language_pack::{render_owner, LanguagePack, LanguagePackRegistry};
use sales_agent_config::settings::Settings;
use sales_agent_core::traits::{
    ConversationStore, MessageRole, OutboundMessenger, ProductCatalog, ShopContext, StoredMessage,
    TextGenerator, UserIdentity,
};
use sales_agent_core::{
    AidaStage, ConversationSession, ExtractedSignals, FunnelStage, Language, PurchaseIntent,
    ScoredProduct, SpinStage,
};

use crate::{analyzer::MessageAnalyzer, contacts, funnel, notify, prompt, scoring, FunnelError};

/// What the caller should do next with this customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    ShowProducts,
    CollectMoreInfo,
    CloseSale,
    FollowUp,
}

/// Everything one processed turn produced
#[derive(Debug)]
pub struct TurnOutcome {
    pub reply: String,
    /// Updated session the caller should store; equal to the input session
    /// when the turn was rolled back
    pub session: ConversationSession,
    pub engagement_score: u8,
    pub signals: ExtractedSignals,
    pub recommended_products: Vec<ScoredProduct>,
    pub next_action: NextAction,
}

pub struct SalesEngine {
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn ConversationStore>,
    catalog: Arc<dyn ProductCatalog>,
    messenger: Arc<dyn OutboundMessenger>,
    analyzer: MessageAnalyzer,
    packs: LanguagePackRegistry,
    settings: Settings,
}

impl SalesEngine {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn ConversationStore>,
        catalog: Arc<dyn ProductCatalog>,
        messenger: Arc<dyn OutboundMessenger>,
        packs: LanguagePackRegistry,
        settings: Settings,
    ) -> Self {
        let analyzer = MessageAnalyzer::new(generator.clone());
        Self {
            generator,
            store,
            catalog,
            messenger,
            analyzer,
            packs,
            settings,
        }
    }

    /// Create the persistence rows for a new conversation and return the
    /// fresh session plus the localized welcome message.
    pub async fn open_session(
        &self,
        identity: &UserIdentity,
        language: Language,
        stage: FunnelStage,
    ) -> Result<(ConversationSession, String), FunnelError> {
        let user = self.store.find_or_create_user(identity).await?;
        let conversation = self.store.start_conversation(user.id).await?;

        let mut session =
            ConversationSession::new(identity.external_id.clone(), language, stage);
        session.user_name = identity.username.clone();
        session.db_user_id = Some(user.id);
        session.conversation_id = Some(conversation.id);

        let pack = self.packs.get(language);
        let template = match stage {
            FunnelStage::Spin(_) => &pack.welcome_message,
            FunnelStage::Aida(_) => &pack.b2c_welcome_message,
        };
        let welcome = render_owner(template, &self.settings.owner);

        tracing::info!(
            user_id = %session.user_id,
            conversation_id = conversation.id,
            language = language.as_str(),
            "session opened"
        );
        Ok((session, welcome))
    }

    /// Process one inbound message. Never fails: generation failure returns
    /// the localized error message with the pre-turn session, and persistence
    /// failures only cost durability.
    pub async fn process_turn(
        &self,
        session: &ConversationSession,
        message: &str,
        shop: Option<&ShopContext>,
    ) -> TurnOutcome {
        let pack = self.packs.get(session.language);

        if let Some(conversation_id) = session.conversation_id {
            if let Err(error) = self
                .store
                .log_message(
                    conversation_id,
                    MessageRole::User,
                    message,
                    session.stage.as_str(),
                    None,
                    None,
                )
                .await
            {
                tracing::warn!(%error, conversation_id, "failed to log inbound message");
            }
        }

        let history = self.load_history(session).await;

        let signals = self.analyzer.analyze(message, session.stage).await;
        let score =
            scoring::engagement_score(message, session.stage, &signals, &pack.positive_keywords);
        let next = funnel::next_stage(session.stage, &signals, score, message);

        let mut updated = session.clone();
        updated.apply_signals(&signals);
        updated
            .extracted_contacts
            .merge_from(&contacts::extract_contacts(message));
        if session.stage == FunnelStage::Spin(SpinStage::NameCollection)
            && next == FunnelStage::Spin(SpinStage::TrustBuilding)
            && updated.user_provided_name.is_none()
            && funnel::spin::looks_like_name(message)
        {
            updated.user_provided_name = Some(message.trim().to_string());
        }
        updated.stage = next;

        let recommendations = self.refresh_recommendations(&mut updated, shop).await;

        let generation_prompt = prompt::build_response_prompt(
            &updated,
            message,
            &history,
            pack,
            &self.settings.owner,
            &self.settings,
        );
        let reply = match self.generator.generate(&generation_prompt).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(%error, user_id = %session.user_id, "reply generation failed, rolling the turn back");
                return TurnOutcome {
                    reply: pack.error_message.clone(),
                    session: session.clone(),
                    engagement_score: score,
                    signals,
                    recommended_products: Vec::new(),
                    next_action: determine_next_action(
                        session.stage,
                        score,
                        session.purchase_intent,
                    ),
                };
            }
        };

        self.persist_turn(&updated, &reply, score, &history, pack).await;

        tracing::debug!(
            user_id = %updated.user_id,
            stage = %updated.stage,
            score,
            "turn processed"
        );
        TurnOutcome {
            next_action: determine_next_action(updated.stage, score, updated.purchase_intent),
            reply,
            session: updated,
            engagement_score: score,
            signals,
            recommended_products: recommendations,
        }
    }

    async fn load_history(&self, session: &ConversationSession) -> Vec<StoredMessage> {
        let Some(conversation_id) = session.conversation_id else {
            return Vec::new();
        };
        match self.store.conversation_history(conversation_id).await {
            Ok(history) => history,
            Err(error) => {
                tracing::warn!(%error, conversation_id, "failed to load history, prompting without it");
                Vec::new()
            }
        }
    }

    /// Fetch the catalog and refresh the session's recommendations when the
    /// shopper is in a browsing stage. Catalog failures recommend nothing.
    async fn refresh_recommendations(
        &self,
        session: &mut ConversationSession,
        shop: Option<&ShopContext>,
    ) -> Vec<ScoredProduct> {
        let browsing = match session.stage {
            FunnelStage::Aida(stage) => stage.wants_recommendations(),
            FunnelStage::Spin(_) => false,
        };
        if !browsing {
            return Vec::new();
        }
        let Some(shop) = shop else {
            return Vec::new();
        };

        match self.catalog.fetch_products(shop).await {
            Ok(products) => {
                let picks = crate::recommend::recommend(
                    &session.user_data,
                    &session.tags,
                    &products,
                    self.settings.recommendation_limit,
                );
                session.recommended_products = picks.clone();
                if session.current_product_focus.is_none() {
                    session.current_product_focus =
                        picks.first().map(|scored| scored.product.title.clone());
                }
                picks
            }
            Err(error) => {
                tracing::warn!(%error, shop_id = %shop.shop_id, "catalog fetch failed, recommending nothing");
                Vec::new()
            }
        }
    }

    /// Log the reply, persist the stage, and run lead completion when the
    /// funnel reached a qualifying stage. The completion side effects only
    /// run when the stage write succeeded.
    async fn persist_turn(
        &self,
        session: &ConversationSession,
        reply: &str,
        score: u8,
        history: &[StoredMessage],
        pack: &LanguagePack,
    ) {
        let Some(conversation_id) = session.conversation_id else {
            return;
        };

        let metadata = serde_json::json!({ "engagementScore": score });
        if let Err(error) = self
            .store
            .log_message(
                conversation_id,
                MessageRole::Bot,
                reply,
                session.stage.as_str(),
                Some(&self.settings.llm.model),
                Some(metadata),
            )
            .await
        {
            tracing::warn!(%error, conversation_id, "failed to log reply");
        }

        match self
            .store
            .update_stage(conversation_id, session.stage.as_str())
            .await
        {
            Ok(()) => self.finalize_lead(session, score, history, pack).await,
            Err(error) => {
                tracing::warn!(%error, conversation_id, "failed to persist stage, skipping lead completion");
            }
        }
    }

    async fn finalize_lead(
        &self,
        session: &ConversationSession,
        score: u8,
        history: &[StoredMessage],
        pack: &LanguagePack,
    ) {
        let Some(conversation_id) = session.conversation_id else {
            return;
        };
        let (lead_score, deal_closed) = match session.stage {
            FunnelStage::Spin(SpinStage::ConversationCompleted) => (10, true),
            FunnelStage::Spin(SpinStage::ContactCollection) => {
                (if score > 0 { score } else { 9 }, false)
            }
            FunnelStage::Spin(SpinStage::Closing) if score >= 7 => (score, false),
            FunnelStage::Aida(AidaStage::Completed) => (score, true),
            _ => return,
        };

        match self
            .store
            .complete_conversation(conversation_id, true, Some(lead_score))
            .await
        {
            Ok(()) => {
                tracing::info!(conversation_id, lead_score, deal_closed, "lead recorded");
                if deal_closed {
                    notify::notify_owner(
                        self.messenger.as_ref(),
                        self.generator.as_ref(),
                        pack,
                        &self.settings.owner,
                        session,
                        history,
                        lead_score,
                        deal_closed,
                    )
                    .await;
                }
            }
            Err(error) => {
                tracing::warn!(%error, conversation_id, "failed to record lead, skipping owner notification");
            }
        }
    }
}

/// Recommended follow-up for the caller, derived from the post-turn state
fn determine_next_action(
    stage: FunnelStage,
    score: u8,
    intent: Option<PurchaseIntent>,
) -> NextAction {
    if matches!(intent, Some(PurchaseIntent::ReadyToBuy))
        || stage == FunnelStage::Aida(AidaStage::Action)
    {
        return NextAction::CloseSale;
    }
    if stage == FunnelStage::Aida(AidaStage::Desire)
        || (stage == FunnelStage::Aida(AidaStage::Interest) && score >= 5)
    {
        return NextAction::ShowProducts;
    }
    if score < 3 {
        return NextAction::FollowUp;
    }
    NextAction::CollectMoreInfo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_buyer_closes() {
        let action = determine_next_action(
            FunnelStage::Spin(SpinStage::Proposal),
            6,
            Some(PurchaseIntent::ReadyToBuy),
        );
        assert_eq!(action, NextAction::CloseSale);
        let action = determine_next_action(FunnelStage::Aida(AidaStage::Action), 5, None);
        assert_eq!(action, NextAction::CloseSale);
    }

    #[test]
    fn test_engaged_shopper_sees_products() {
        let action = determine_next_action(FunnelStage::Aida(AidaStage::Desire), 4, None);
        assert_eq!(action, NextAction::ShowProducts);
        let action = determine_next_action(FunnelStage::Aida(AidaStage::Interest), 5, None);
        assert_eq!(action, NextAction::ShowProducts);
        let action = determine_next_action(FunnelStage::Aida(AidaStage::Interest), 4, None);
        assert_eq!(action, NextAction::CollectMoreInfo);
    }

    #[test]
    fn test_cold_lead_gets_follow_up() {
        let action = determine_next_action(FunnelStage::Spin(SpinStage::Greeting), 2, None);
        assert_eq!(action, NextAction::FollowUp);
    }
}
