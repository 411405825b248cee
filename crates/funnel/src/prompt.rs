//! Prompt assembly
//!
//! Builds the analysis, reply and summary prompts. The language directive is
//! repeated at the start and immediately around the customer message; models
//! drift into the wrong language without the late repetition.

use sales_agent_config::language_pack::{render_owner, LanguagePack};
use sales_agent_config::settings::{OwnerSettings, Settings};
use sales_agent_core::traits::{MessageRole, StoredMessage};
use sales_agent_core::{ConversationSession, FunnelStage};

/// Signal-extraction prompt for a B2B message
pub fn build_extraction_prompt(message: &str) -> String {
    format!(
        r#"Analyze this message from a potential business client: "{message}"

Extract and return ONLY a JSON object with these fields (omit fields that do not apply):
{{
  "businessType": "type of business mentioned",
  "challenges": "business challenges or problems mentioned",
  "budget": "budget range if mentioned",
  "urgency": "high/medium/low if urgency is indicated",
  "hasName": true if the person shared their name,
  "gavePermission": true if they agreed to discuss their business,
  "contactInfo": {{"phone": "...", "email": "...", "telegram": "..."}} if contact details were shared
}}

Be conservative - only extract information that is clearly stated. Respond ONLY with valid JSON."#
    )
}

/// Signal-extraction prompt for a B2C message
pub fn build_b2c_extraction_prompt(message: &str) -> String {
    format!(
        r#"Analyze this message from an online shopper: "{message}"

Extract and return ONLY a JSON object with these fields (omit fields that do not apply):
{{
  "preferences": "style or product preferences mentioned",
  "budget": "budget range or amount if mentioned",
  "urgency": "high/medium/low if buying urgency is indicated",
  "interests": ["product categories", "hobbies"],
  "painPoints": ["problems the customer wants solved"],
  "purchaseIntent": "browsing/considering/ready_to_buy",
  "isPositiveResponse": true if the message is an agreement or positive reaction,
  "emotionalTone": "excited/neutral/concerned/frustrated",
  "contactInfo": {{"phone": "...", "email": "...", "telegram": "..."}} if contact details were shared
}}

Be conservative - only extract information that is clearly stated. Respond ONLY with valid JSON."#
    )
}

/// Reply-generation prompt for the current turn. The session must already
/// carry this turn's stage and recommendations.
pub fn build_response_prompt(
    session: &ConversationSession,
    message: &str,
    history: &[StoredMessage],
    pack: &LanguagePack,
    owner: &OwnerSettings,
    settings: &Settings,
) -> String {
    let mut prompt = String::new();
    prompt.push_str(&pack.language_instruction);
    prompt.push_str("\n\n");

    let instruction = match session.stage {
        FunnelStage::Spin(stage) => {
            prompt.push_str(&render_owner(
                "You are the AI sales assistant of {owner_name}, selling AI chatbot development services to businesses.\n",
                owner,
            ));
            pack.spin_instruction(stage)
        }
        FunnelStage::Aida(stage) => {
            prompt.push_str(
                "You are a personal shopping assistant helping a customer find the right products.\n",
            );
            pack.aida_instruction(stage)
        }
    };

    prompt.push_str(&format!("\nCURRENT STAGE: {}\n", session.stage));
    prompt.push_str(&format!(
        "STAGE INSTRUCTIONS: {}\n",
        render_owner(instruction, owner)
    ));

    let profile = profile_block(session);
    if !profile.is_empty() {
        prompt.push('\n');
        prompt.push_str(&profile);
    }
    if !session.tags.is_empty() {
        prompt.push_str(&format!("TAGS: {}\n", session.tags.join(", ")));
    }

    if matches!(session.stage, FunnelStage::Aida(_)) {
        let products = products_block(session, settings.prompt_product_limit);
        if !products.is_empty() {
            prompt.push('\n');
            prompt.push_str(&products);
        }
    }

    let history = history_block(history, pack, settings.history_window);
    if !history.is_empty() {
        prompt.push_str("\nCONVERSATION HISTORY:\n");
        prompt.push_str(&history);
    }

    prompt.push_str(&format!(
        "\n{reminder}\n\nCustomer message: \"{message}\"\n\n{reminder}\n\n",
        reminder = pack.response_language_reminder
    ));
    prompt.push_str(
        "Generate a natural, concise reply (2-4 sentences) that follows the stage instructions.",
    );
    prompt
}

/// Conversation-summary prompt used for the owner lead notification
pub fn build_summary_prompt(pack: &LanguagePack, history: &[StoredMessage]) -> String {
    let strings = &pack.summary_prompt;
    let transcript: Vec<String> = history
        .iter()
        .map(|message| {
            let speaker = match message.role {
                MessageRole::User => &pack.lead_notification.client,
                MessageRole::Bot => &pack.lead_notification.bot,
            };
            format!("{speaker}: {}", message.content)
        })
        .collect();

    format!(
        "{instruction}\n\n{transcript}\n\n{focus_on}\n{main_problem}\n{business_sector}\n{interest_level}\n\n{format}\n{example}\n\n{response_only}",
        instruction = strings.instruction,
        transcript = transcript.join("\n"),
        focus_on = strings.focus_on,
        main_problem = strings.main_problem,
        business_sector = strings.business_sector,
        interest_level = strings.interest_level,
        format = strings.format,
        example = strings.example,
        response_only = strings.response_only,
    )
}

fn profile_block(session: &ConversationSession) -> String {
    let data = &session.user_data;
    let mut lines = Vec::new();
    if let Some(name) = session
        .user_provided_name
        .as_ref()
        .or(session.user_name.as_ref())
    {
        lines.push(format!("- Name: {name}"));
    }
    if let Some(business) = &data.business_type {
        lines.push(format!("- Business: {business}"));
    }
    if let Some(challenges) = &data.current_challenges {
        lines.push(format!("- Challenges: {challenges}"));
    }
    if let Some(preferences) = &data.preferences {
        lines.push(format!("- Preferences: {preferences}"));
    }
    if let Some(budget) = &data.budget {
        lines.push(format!("- Budget: {budget}"));
    }
    if let Some(urgency) = data.urgency {
        lines.push(format!("- Urgency: {}", urgency.as_str()));
    }
    if !data.interests.is_empty() {
        lines.push(format!("- Interests: {}", data.interests.join(", ")));
    }
    if !data.pain_points.is_empty() {
        lines.push(format!("- Pain points: {}", data.pain_points.join(", ")));
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!("CLIENT PROFILE:\n{}\n", lines.join("\n"))
    }
}

fn products_block(session: &ConversationSession, limit: usize) -> String {
    if session.recommended_products.is_empty() {
        return String::new();
    }
    let mut block = String::from("AVAILABLE PRODUCTS:\n");
    for scored in session.recommended_products.iter().take(limit) {
        block.push_str(&format!(
            "- {}: ${} (Score: {})\n",
            scored.product.title, scored.product.price, scored.recommendation_score
        ));
    }
    if let Some(focus) = &session.current_product_focus {
        block.push_str(&format!("FOCUS PRODUCT: {focus}\n"));
    }
    block
}

fn history_block(history: &[StoredMessage], pack: &LanguagePack, window: usize) -> String {
    let start = history.len().saturating_sub(window);
    let mut block = String::new();
    for message in &history[start..] {
        let speaker = match message.role {
            MessageRole::User => &pack.lead_notification.client,
            MessageRole::Bot => &pack.lead_notification.bot,
        };
        block.push_str(&format!("{speaker}: {}\n", message.content));
    }
    block
}
