//! Owner lead notifications
//!
//! Best-effort: skipped when no owner chat is configured, and delivery or
//! summary failures are logged, never raised.

use sales_agent_config::language_pack::LanguagePack;
use sales_agent_config::settings::OwnerSettings;
use sales_agent_core::traits::{MessageRole, OutboundMessenger, StoredMessage, TextGenerator};
use sales_agent_core::ConversationSession;

use crate::{contacts, prompt};

const SUMMARY_LIMIT: usize = 100;

/// Notify the configured owner about a freshly qualified lead
pub async fn notify_owner(
    messenger: &dyn OutboundMessenger,
    generator: &dyn TextGenerator,
    pack: &LanguagePack,
    owner: &OwnerSettings,
    session: &ConversationSession,
    history: &[StoredMessage],
    lead_score: u8,
    deal_closed: bool,
) {
    let Some(chat_id) = &owner.chat_id else {
        tracing::debug!("no owner chat configured, skipping lead notification");
        return;
    };

    let summary = summarize(generator, pack, history).await;
    let text = render_notification(pack, session, history, &summary, lead_score, deal_closed);

    if let Err(error) = messenger.send(chat_id, &text).await {
        tracing::warn!(%error, "lead notification delivery failed");
    }
}

async fn summarize(
    generator: &dyn TextGenerator,
    pack: &LanguagePack,
    history: &[StoredMessage],
) -> String {
    if history.is_empty() {
        return pack.lead_notification.interested_fallback.clone();
    }
    match generator
        .generate(&prompt::build_summary_prompt(pack, history))
        .await
    {
        Ok(summary) => {
            let summary = summary.trim();
            if summary.is_empty() {
                pack.lead_notification.interested_fallback.clone()
            } else {
                summary.chars().take(SUMMARY_LIMIT).collect()
            }
        }
        Err(error) => {
            tracing::warn!(%error, "lead summary generation failed, using fallback");
            pack.lead_notification.interested_fallback.clone()
        }
    }
}

fn render_notification(
    pack: &LanguagePack,
    session: &ConversationSession,
    history: &[StoredMessage],
    summary: &str,
    lead_score: u8,
    deal_closed: bool,
) -> String {
    let strings = &pack.lead_notification;

    let name = session
        .user_provided_name
        .as_ref()
        .or(session.user_name.as_ref())
        .cloned()
        .unwrap_or_else(|| strings.not_specified.clone());
    let name_line = match &session.user_name {
        Some(username) if Some(username) != session.user_provided_name.as_ref() => {
            format!("{name} (@{})", username.trim_start_matches('@'))
        }
        _ => name,
    };

    let contact_lines = contact_lines(session, history);

    let business = session
        .user_data
        .business_type
        .clone()
        .unwrap_or_else(|| strings.not_specified.clone());

    let score_line = if deal_closed {
        format!("{} {lead_score}/10 ({})", strings.lead_score, strings.deal_closed)
    } else {
        format!("{} {lead_score}/10", strings.lead_score)
    };

    format!(
        "{new_lead}\n\n{name_header}\n{name_line}\n{contacts}\n{business_header} {business}\n\n{summary_header}\n{summary}\n\n{score_line}",
        new_lead = strings.new_lead,
        name_header = strings.name_and_contact,
        contacts = contact_lines,
        business_header = strings.business_sector,
        summary_header = strings.summary,
    )
}

/// Contacts captured on the session, or scraped from the user's messages as a
/// fallback
fn contact_lines(session: &ConversationSession, history: &[StoredMessage]) -> String {
    let mut info = session.extracted_contacts.clone();
    if info.is_empty() {
        for message in history {
            if message.role == MessageRole::User {
                info.merge_from(&contacts::extract_contacts(&message.content));
            }
        }
    }
    let mut lines = Vec::new();
    if let Some(phone) = &info.phone {
        lines.push(format!("📞 {phone}"));
    }
    if let Some(email) = &info.email {
        lines.push(format!("📧 {email}"));
    }
    if let Some(telegram) = &info.telegram {
        lines.push(format!("💬 {telegram}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sales_agent_config::language_pack::LanguagePackRegistry;
    use sales_agent_core::{ContactInfo, FunnelStage, Language, SpinStage};

    fn session() -> ConversationSession {
        let mut session = ConversationSession::new(
            "42",
            Language::En,
            FunnelStage::Spin(SpinStage::ConversationCompleted),
        );
        session.user_provided_name = Some("Jane".into());
        session.user_name = Some("jane_bakes".into());
        session.user_data.business_type = Some("bakery".into());
        session.extracted_contacts = ContactInfo {
            phone: Some("+380977281466".into()),
            ..Default::default()
        };
        session
    }

    #[test]
    fn test_notification_layout() {
        let packs = LanguagePackRegistry::default();
        let pack = packs.get(Language::En);
        let text = render_notification(pack, &session(), &[], "Bakery - missing orders", 10, true);
        assert!(text.starts_with(&pack.lead_notification.new_lead));
        assert!(text.contains("Jane (@jane_bakes)"));
        assert!(text.contains("📞 +380977281466"));
        assert!(text.contains("Bakery - missing orders"));
        assert!(text.contains("10/10 (Deal Closed)"));
    }

    #[test]
    fn test_score_line_without_closed_deal() {
        let packs = LanguagePackRegistry::default();
        let pack = packs.get(Language::En);
        let text = render_notification(pack, &session(), &[], "summary", 9, false);
        assert!(text.contains("9/10"));
        assert!(!text.contains(&pack.lead_notification.deal_closed));
    }

    #[test]
    fn test_contacts_scraped_from_history_when_session_has_none() {
        let mut s = session();
        s.extracted_contacts = ContactInfo::default();
        let history = vec![StoredMessage {
            id: 1,
            conversation_id: 1,
            role: MessageRole::User,
            content: "reach me at jane@example.com".into(),
            stage: "contact_collection".into(),
            model: None,
            metadata: None,
            created_at: Utc::now(),
        }];
        let lines = contact_lines(&s, &history);
        assert!(lines.contains("📧 jane@example.com"));
    }
}
