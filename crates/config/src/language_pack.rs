//! Localized string packs
//!
//! One pack per supported locale: welcome/error strings, the per-stage prompt
//! instructions for both funnels, lead-notification templates and the
//! positive-sentiment keyword list used by the engagement scorer. Packs are
//! compiled in for en/ru/uk/de and can be replaced wholesale from YAML.
//!
//! Templates may reference the configured owner through `{owner_name}`,
//! `{owner_short_name}` and `{owner_handle}` placeholders; callers substitute
//! them with [`render_owner`].

use std::collections::HashMap;

use sales_agent_core::{AidaStage, Language, SpinStage};
use serde::{Deserialize, Serialize};

use crate::settings::OwnerSettings;
use crate::ConfigError;

/// Strings for the owner-facing lead notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadNotificationStrings {
    pub new_lead: String,
    pub name_and_contact: String,
    pub business_sector: String,
    pub summary: String,
    pub lead_score: String,
    pub deal_closed: String,
    pub not_specified: String,
    pub client: String,
    pub bot: String,
    pub interested_fallback: String,
}

/// Building blocks of the conversation-summary prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryPromptStrings {
    pub instruction: String,
    pub focus_on: String,
    pub main_problem: String,
    pub business_sector: String,
    pub interest_level: String,
    pub format: String,
    pub example: String,
    pub response_only: String,
}

/// All localized strings for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagePack {
    pub welcome_message: String,
    pub b2c_welcome_message: String,
    pub error_message: String,
    pub language_instruction: String,
    pub response_language_reminder: String,
    /// Keyed by SPIN stage name
    pub stage_instructions: HashMap<String, String>,
    /// Keyed by AIDA stage name
    pub b2c_stage_instructions: HashMap<String, String>,
    pub lead_notification: LeadNotificationStrings,
    pub summary_prompt: SummaryPromptStrings,
    /// Positive-sentiment substrings awarded +1 each by the scorer
    pub positive_keywords: Vec<String>,
}

impl LanguagePack {
    /// Instruction block for a SPIN stage; empty when the pack has no entry
    pub fn spin_instruction(&self, stage: SpinStage) -> &str {
        self.stage_instructions
            .get(stage.as_str())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Instruction block for an AIDA stage, falling back to the attention
    /// instruction for unknown entries
    pub fn aida_instruction(&self, stage: AidaStage) -> &str {
        self.b2c_stage_instructions
            .get(stage.as_str())
            .or_else(|| self.b2c_stage_instructions.get("attention"))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Substitute owner placeholders in a pack template
pub fn render_owner(template: &str, owner: &OwnerSettings) -> String {
    template
        .replace("{owner_name}", &owner.name)
        .replace("{owner_short_name}", &owner.short_name)
        .replace("{owner_handle}", &owner.handle)
}

/// Registry of packs per language, English as the universal fallback
#[derive(Debug, Clone)]
pub struct LanguagePackRegistry {
    fallback: LanguagePack,
    packs: HashMap<Language, LanguagePack>,
}

impl LanguagePackRegistry {
    /// Pack for the given language; English when the language has no pack
    pub fn get(&self, language: Language) -> &LanguagePack {
        self.packs.get(&language).unwrap_or(&self.fallback)
    }

    /// Replace packs from a YAML document mapping language codes to full
    /// packs. Unknown codes are rejected; missing codes keep the compiled-in
    /// pack.
    pub fn apply_yaml(&mut self, yaml: &str) -> Result<(), ConfigError> {
        let loaded: HashMap<String, LanguagePack> = serde_yaml::from_str(yaml)?;
        for (code, pack) in loaded {
            let language = match code.as_str() {
                "en" => Language::En,
                "ru" => Language::Ru,
                "uk" => Language::Uk,
                "de" => Language::De,
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: "language_packs".to_string(),
                        message: format!("Unsupported language code '{}'", other),
                    })
                }
            };
            if language == Language::En {
                self.fallback = pack.clone();
            }
            self.packs.insert(language, pack);
        }
        Ok(())
    }
}

impl Default for LanguagePackRegistry {
    fn default() -> Self {
        let en = english_pack();
        let mut packs = HashMap::new();
        packs.insert(Language::En, en.clone());
        packs.insert(Language::Ru, russian_pack());
        packs.insert(Language::Uk, ukrainian_pack());
        packs.insert(Language::De, german_pack());
        Self { fallback: en, packs }
    }
}

fn string_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn english_pack() -> LanguagePack {
    LanguagePack {
        welcome_message: "🤖 Hi! I'm {owner_short_name}'s AI assistant, here to show you how AI chatbots can revolutionize business sales!\n\n{owner_name} is a seasoned Tech Lead and entrepreneur who's helped countless businesses boost their revenue with intelligent chatbot solutions.\n\nBefore we dive in, I'd love to get to know you better. What's your name? 😊".to_string(),
        b2c_welcome_message: "🛍️ Welcome! I'm your personal shopping assistant. I'll help you find exactly what you're looking for. What brings you here today?".to_string(),
        error_message: "Sorry, an error occurred. Please try again.".to_string(),
        language_instruction: "CRITICAL: RESPOND ONLY IN ENGLISH! NO OTHER LANGUAGES!".to_string(),
        response_language_reminder: "RESPOND IN ENGLISH ONLY!".to_string(),
        stage_instructions: string_map(&[
            ("greeting", "Welcome them warmly and ask for their name. Keep it short and friendly."),
            ("name_collection", "ONLY ask for their name warmly. ABSOLUTELY NO mention of business, AI, chatbots, or sales. Just get their name and be friendly."),
            ("trust_building", "MANDATORY: say 'Nice to meet you, [NAME]! What business are you in?' IMPORTANT: ALWAYS end with a BUSINESS QUESTION. Salesperson LEADS with questions."),
            ("permission_request", "ONLY ask for permission to discuss their business. Be polite and respectful. Do NOT ask any actual business questions yet."),
            ("situation_discovery", "NOW you can ask about their business type and current processes. Use SPIN methodology - understand their SITUATION."),
            ("problem_identification", "Focus on finding their PROBLEMS and pain points. What challenges do they face?"),
            ("implication_development", "Explore IMPLICATIONS of their problems. What happens if they don't solve these issues?"),
            ("need_payoff", "Present the NEED-PAYOFF. How would solving their problems benefit them?"),
            ("proposal", "Present your AI chatbot solution. Use AIDA - get attention, build interest, create desire."),
            ("closing", "Create urgency and guide toward action. Limited time offers, immediate benefits."),
            ("contact_collection", "FINAL STAGE: If contacts not collected yet - ask for them. If contacts received - say 'Thank you! {owner_name} will contact you soon. You can also reach him directly: {owner_handle}' and END conversation."),
            ("conversation_completed", "CONVERSATION ENDED: Thank them for their time, confirm {owner_short_name} will contact them, give {owner_handle} contact. NO MORE questions. Just politely end."),
        ]),
        b2c_stage_instructions: string_map(&[
            ("greeting", "Welcome warmly, ask their name and what they're shopping for today."),
            ("attention", "GRAB ATTENTION: Mention trending products, special offers, or ask about their interests. Create excitement!"),
            ("interest", "BUILD INTEREST: Ask about their lifestyle, needs, and problems they want to solve. Show how products fit their life."),
            ("desire", "CREATE DESIRE: Present specific products with benefits (not features). Use social proof, reviews, and show value."),
            ("action", "DRIVE ACTION: Create urgency with limited time/stock. Address objections. Guide to \"Add to Cart\" or \"Buy Now\"."),
            ("follow_up", "RE-ENGAGE: Offer different products, ask about concerns, provide additional value or discounts."),
            ("completed", "THANK & UPSELL: Thank them, confirm order details, suggest complementary products for next time."),
        ]),
        lead_notification: LeadNotificationStrings {
            new_lead: "🎯 NEW LEAD!".to_string(),
            name_and_contact: "**Name and Contact:**".to_string(),
            business_sector: "**Business Sector:**".to_string(),
            summary: "**Summary:**".to_string(),
            lead_score: "📊 Lead Score:".to_string(),
            deal_closed: "Deal Closed".to_string(),
            not_specified: "Not specified".to_string(),
            client: "Client".to_string(),
            bot: "Bot".to_string(),
            interested_fallback: "Interested in AI chatbot for business".to_string(),
        },
        summary_prompt: SummaryPromptStrings {
            instruction: "Analyze the conversation with a potential client and create a brief summary (maximum 100 characters) in English.".to_string(),
            focus_on: "Focus on:".to_string(),
            main_problem: "1. Main problem/need of the client".to_string(),
            business_sector: "2. Their business sector".to_string(),
            interest_level: "3. Level of interest".to_string(),
            format: "Format: \"Business sector - main problem/need\"".to_string(),
            example: "Example: \"Beauty salon - can't handle leads fast enough\"".to_string(),
            response_only: "Respond only with the summary, no additional text.".to_string(),
        },
        positive_keywords: vec![
            "interesting".to_string(),
            "like".to_string(),
            "want".to_string(),
            "need".to_string(),
            "love".to_string(),
            "perfect".to_string(),
            "great".to_string(),
            "amazing".to_string(),
        ],
    }
}

fn russian_pack() -> LanguagePack {
    LanguagePack {
        welcome_message: "🤖 Привет! Я ИИ-помощник {owner_short_name}а, готов показать, как чат-боты могут революционизировать продажи бизнеса!\n\n{owner_name} — опытный Tech Lead и предприниматель, который помог бесчисленным компаниям увеличить доходы с помощью умных чат-ботов.\n\nДля начала давайте познакомимся! Как вас зовут? 😊".to_string(),
        b2c_welcome_message: "🛍️ Добро пожаловать! Я ваш персональный помощник по покупкам. Помогу найти именно то, что вам нужно. Что вас интересует?".to_string(),
        error_message: "Извините, произошла ошибка. Попробуйте еще раз.".to_string(),
        language_instruction: "КРИТИЧЕСКИ ВАЖНО: ОТВЕЧАЙ ТОЛЬКО НА РУССКОМ ЯЗЫКЕ! НИКАКОГО АНГЛИЙСКОГО!".to_string(),
        response_language_reminder: "ОБЯЗАТЕЛЬНО ОТВЕЧАЙ НА РУССКОМ ЯЗЫКЕ!".to_string(),
        stage_instructions: string_map(&[
            ("greeting", "Тепло поприветствуйте и спросите имя. Коротко и дружелюбно."),
            ("name_collection", "ТОЛЬКО спросите имя тепло и дружелюбно. АБСОЛЮТНО НИКАКИХ упоминаний бизнеса, ИИ, чат-ботов или продаж. Просто узнайте имя и будьте дружелюбны."),
            ("trust_building", "ОБЯЗАТЕЛЬНО скажите: 'Приятно познакомиться, [ИМЯ]! Каким бизнесом занимаетесь?' ВАЖНО: ВСЕГДА заканчивайте ВОПРОСОМ о бизнесе. Продавец ВЕДЕТ разговор вопросами."),
            ("permission_request", "ТОЛЬКО попросите разрешение обсудить их бизнес. Будьте вежливы и уважительны. НЕ задавайте пока никаких реальных бизнес-вопросов."),
            ("situation_discovery", "ТЕПЕРЬ можете спрашивать о типе бизнеса и текущих процессах. Используйте SPIN - поймите их СИТУАЦИЮ."),
            ("problem_identification", "Сосредоточьтесь на поиске их ПРОБЛЕМ и болевых точек. С какими вызовами они сталкиваются?"),
            ("implication_development", "Изучите ПОСЛЕДСТВИЯ их проблем. Что случится, если они не решат эти вопросы?"),
            ("need_payoff", "Представьте ВЫГОДУ. Как решение их проблем принесет им пользу?"),
            ("proposal", "Представьте ваше решение ИИ-чатбота. Используйте AIDA - привлеките внимание, вызовите интерес, создайте желание."),
            ("closing", "Создайте срочность и направьте к действию. Ограниченные предложения, немедленные выгоды."),
            ("contact_collection", "ФИНАЛЬНАЯ СТАДИЯ: Если контакты еще не получены - спросите их. Если контакты получены - скажите 'Спасибо! {owner_name} свяжется с вами в ближайшее время. Также можете написать ему напрямую: {owner_handle}' и ЗАВЕРШИТЕ разговор."),
            ("conversation_completed", "РАЗГОВОР ЗАВЕРШЕН: Поблагодарите за время, подтвердите что {owner_short_name} свяжется, дайте контакт {owner_handle}. Больше НЕ задавайте вопросов. Просто вежливо завершите."),
        ]),
        b2c_stage_instructions: string_map(&[
            ("greeting", "Тепло поприветствуйте, спросите имя и что они покупают сегодня."),
            ("attention", "ПРИВЛЕКИТЕ ВНИМАНИЕ: Упомяните популярные товары, специальные предложения или спросите об интересах."),
            ("interest", "РАЗВИВАЙТЕ ИНТЕРЕС: Спрашивайте об образе жизни, потребностях и проблемах. Покажите, как товары подходят."),
            ("desire", "СОЗДАВАЙТЕ ЖЕЛАНИЕ: Представьте товары с выгодами, используйте отзывы и покажите ценность."),
            ("action", "ПОБУЖДАЙТЕ К ДЕЙСТВИЮ: Создайте срочность, отвечайте на возражения, ведите к \"Добавить в корзину\"."),
            ("follow_up", "ПОВТОРНО ПРИВЛЕКАЙТЕ: Предложите другие товары, спросите о проблемах, дайте скидки."),
            ("completed", "БЛАГОДАРИТЕ И ДОПРОДАВАЙТЕ: Поблагодарите, подтвердите заказ, предложите дополнительные товары."),
        ]),
        lead_notification: LeadNotificationStrings {
            new_lead: "🎯 НОВЫЙ ЛИД!".to_string(),
            name_and_contact: "**Имя и контакт:**".to_string(),
            business_sector: "**Сфера бизнеса:**".to_string(),
            summary: "**Резюме:**".to_string(),
            lead_score: "📊 Lead Score:".to_string(),
            deal_closed: "Сделка закрыта".to_string(),
            not_specified: "Не указано".to_string(),
            client: "Клиент".to_string(),
            bot: "Бот".to_string(),
            interested_fallback: "Заинтересован в AI чат-боте для бизнеса".to_string(),
        },
        summary_prompt: SummaryPromptStrings {
            instruction: "Проанализируй разговор с потенциальным клиентом и создай краткое резюме (максимум 100 символов) на русском языке.".to_string(),
            focus_on: "Сосредоточься на:".to_string(),
            main_problem: "1. Основной проблеме/потребности клиента".to_string(),
            business_sector: "2. Сфере его бизнеса".to_string(),
            interest_level: "3. Уровне заинтересованности".to_string(),
            format: "Формат: \"Сфера бизнеса - основная проблема/потребность\"".to_string(),
            example: "Пример: \"Салон красоты - не успевает обрабатывать лиды\"".to_string(),
            response_only: "Ответь только резюме, без дополнительного текста.".to_string(),
        },
        positive_keywords: vec![
            "интересно".to_string(),
            "нравится".to_string(),
            "хочу".to_string(),
            "нужно".to_string(),
            "обожаю".to_string(),
            "идеально".to_string(),
            "отлично".to_string(),
            "потрясающе".to_string(),
        ],
    }
}

fn ukrainian_pack() -> LanguagePack {
    LanguagePack {
        welcome_message: "🤖 Привіт! Я ІІ-помічник {owner_short_name}а, готовий показати, як чат-боти можуть революціонізувати продажі бізнесу!\n\n{owner_name} — досвідчений Tech Lead та підприємець, який допоміг незліченним компаніям збільшити доходи за допомогою розумних чат-ботів.\n\nДля початку давайте познайомимося! Як вас звати? 😊".to_string(),
        b2c_welcome_message: "🛍️ Ласкаво просимо! Я ваш персональний помічник з покупками. Допоможу знайти саме те, що вам потрібно. Що вас цікавить?".to_string(),
        error_message: "Вибачте, сталася помилка. Спробуйте ще раз.".to_string(),
        language_instruction: "КРИТИЧНО ВАЖЛИВО: ВІДПОВІДАЙ ТІЛЬКИ УКРАЇНСЬКОЮ МОВОЮ! ЖОДНОЇ АНГЛІЙСЬКОЇ!".to_string(),
        response_language_reminder: "ОБОВ'ЯЗКОВО ВІДПОВІДАЙ УКРАЇНСЬКОЮ МОВОЮ!".to_string(),
        stage_instructions: string_map(&[
            ("greeting", "Тепло привітайте і запитайте ім'я. Коротко і дружелюбно."),
            ("name_collection", "ТІЛЬКИ запитайте ім'я тепло і дружелюбно. АБСОЛЮТНО ЖОДНИХ згадок бізнесу, ІІ, чат-ботів чи продажів. Просто дізнайтеся ім'я і будьте дружелюбними."),
            ("trust_building", "ОБОВ'ЯЗКОВО скажіть: 'Приємно познайомитися, [ІМ'Я]! Яким бізнесом займаєтеся?' ВАЖЛИВО: ЗАВЖДИ закінчуйте ЗАПИТАННЯМ про бізнес. Продавець ВЕДЕ розмову запитаннями."),
            ("permission_request", "ТІЛЬКИ попросіть дозвіл обговорити їхній бізнес. Будьте ввічливі і поважні. НЕ ставте поки жодних реальних бізнес-запитань."),
            ("situation_discovery", "ТЕПЕР можете запитувати про тип бізнесу і поточні процеси. Використовуйте SPIN - зрозумійте їхню СИТУАЦІЮ."),
            ("problem_identification", "Зосередьтеся на пошуку їхніх ПРОБЛЕМ і болючих точок. З якими викликами вони стикаються?"),
            ("implication_development", "Вивчіть НАСЛІДКИ їхніх проблем. Що станеться, якщо вони не вирішать ці питання?"),
            ("need_payoff", "Представте ВИГОДУ. Як вирішення їхніх проблем принесе їм користь?"),
            ("proposal", "Представте ваше рішення ІІ-чатбота. Використовуйте AIDA - привертіть увагу, викличте інтерес, створіть бажання."),
            ("closing", "Створіть терміновість і направте до дії. Обмежені пропозиції, миттєві вигоди."),
            ("contact_collection", "ФІНАЛЬНА СТАДІЯ: Якщо контакти ще не отримані - запитайте їх. Якщо контакти отримані - скажіть 'Дякую! {owner_name} зв'яжеться з вами найближчим часом. Також можете написати йому напряму: {owner_handle}' і ЗАВЕРШІТЬ розмову."),
            ("conversation_completed", "РОЗМОВА ЗАВЕРШЕНА: Подякуйте за час, підтвердьте що {owner_short_name} зв'яжеться, дайте контакт {owner_handle}. Більше НЕ ставте запитань. Просто ввічливо завершіть."),
        ]),
        b2c_stage_instructions: string_map(&[
            ("greeting", "Тепло привітайте, запитайте ім'я та що вони купують сьогодні."),
            ("attention", "ПРИВЕРТАЙТЕ УВАГУ: Згадайте популярні товари, спеціальні пропозиції або запитайте про інтереси."),
            ("interest", "РОЗВИВАЙТЕ ІНТЕРЕС: Питайте про спосіб життя, потреби та проблеми. Покажіть, як товари підходять."),
            ("desire", "СТВОРЮЙТЕ БАЖАННЯ: Представте товари з вигодами, використовуйте відгуки та покажіть цінність."),
            ("action", "СПОНУКАЙТЕ ДО ДІЇ: Створіть терміновість, відповідайте на заперечення, ведіть до \"Додати до кошика\"."),
            ("follow_up", "ПОВТОРНО ЗАЛУЧАЙТЕ: Запропонуйте інші товари, запитайте про проблеми, дайте знижки."),
            ("completed", "ДЯКУЙТЕ ТА ДОПРОДАВАЙТЕ: Подякуйте, підтвердьте замовлення, запропонуйте додаткові товари."),
        ]),
        lead_notification: LeadNotificationStrings {
            new_lead: "🎯 НОВИЙ ЛІД!".to_string(),
            name_and_contact: "**Ім'я та контакт:**".to_string(),
            business_sector: "**Сфера бізнесу:**".to_string(),
            summary: "**Резюме:**".to_string(),
            lead_score: "📊 Lead Score:".to_string(),
            deal_closed: "Угода закрита".to_string(),
            not_specified: "Не вказано".to_string(),
            client: "Клієнт".to_string(),
            bot: "Бот".to_string(),
            interested_fallback: "Зацікавлений в ІІ чат-боті для бізнесу".to_string(),
        },
        summary_prompt: SummaryPromptStrings {
            instruction: "Проаналізуй розмову з потенційним клієнтом і створи коротке резюме (максимум 100 символів) українською мовою.".to_string(),
            focus_on: "Зосередься на:".to_string(),
            main_problem: "1. Основній проблемі/потребі клієнта".to_string(),
            business_sector: "2. Сфері його бізнесу".to_string(),
            interest_level: "3. Рівні зацікавленості".to_string(),
            format: "Формат: \"Сфера бізнесу - основна проблема/потреба\"".to_string(),
            example: "Приклад: \"Салон краси - не встигає обробляти ліди\"".to_string(),
            response_only: "Дай тільки резюме, без додаткового тексту.".to_string(),
        },
        positive_keywords: vec![
            "цікаво".to_string(),
            "подобається".to_string(),
            "хочу".to_string(),
            "потрібно".to_string(),
            "обожнюю".to_string(),
            "ідеально".to_string(),
            "відмінно".to_string(),
            "чудово".to_string(),
        ],
    }
}

fn german_pack() -> LanguagePack {
    LanguagePack {
        welcome_message: "🤖 Hallo! Ich bin {owner_short_name}s KI-Assistent und zeige Ihnen, wie KI-Chatbots den Geschäftsverkauf revolutionieren können!\n\n{owner_name} ist ein erfahrener Tech Lead und Unternehmer, der unzähligen Unternehmen geholfen hat, ihre Einnahmen mit intelligenten Chatbot-Lösungen zu steigern.\n\nBevor wir loslegen, möchte ich Sie gerne kennenlernen. Wie heißen Sie? 😊".to_string(),
        b2c_welcome_message: "🛍️ Willkommen! Ich bin Ihr persönlicher Einkaufsassistent. Ich helfe Ihnen, genau das zu finden, wonach Sie suchen. Was interessiert Sie heute?".to_string(),
        error_message: "Entschuldigung, es ist ein Fehler aufgetreten. Bitte versuchen Sie es erneut.".to_string(),
        language_instruction: "KRITISCH: ANTWORTEN SIE NUR AUF DEUTSCH! KEINE ANDEREN SPRACHEN!".to_string(),
        response_language_reminder: "ANTWORTEN SIE NUR AUF DEUTSCH!".to_string(),
        stage_instructions: string_map(&[
            ("greeting", "Begrüßen Sie herzlich und fragen Sie nach dem Namen. Kurz und freundlich."),
            ("name_collection", "Fragen Sie NUR warmherzig nach dem Namen. ABSOLUT KEINE Erwähnung von Geschäft, KI, Chatbots oder Verkauf. Erfahren Sie einfach den Namen und seien Sie freundlich."),
            ("trust_building", "OBLIGATORISCH: Sagen Sie 'Freut mich, Sie kennenzulernen, [NAME]! In welchem Geschäftsbereich sind Sie tätig?' WICHTIG: Beenden Sie IMMER mit einer GESCHÄFTSFRAGE. Verkäufer FÜHREN Gespräche mit Fragen."),
            ("permission_request", "Bitten Sie NUR um Erlaubnis, über ihr Geschäft zu sprechen. Seien Sie höflich und respektvoll. Stellen Sie noch KEINE echten Geschäftsfragen."),
            ("situation_discovery", "JETZT können Sie nach ihrem Geschäftstyp und aktuellen Prozessen fragen. Verwenden Sie SPIN-Methodik - verstehen Sie ihre SITUATION."),
            ("problem_identification", "Konzentrieren Sie sich darauf, ihre PROBLEME und Schmerzpunkte zu finden. Mit welchen Herausforderungen haben sie zu kämpfen?"),
            ("implication_development", "Erforschen Sie die AUSWIRKUNGEN ihrer Probleme. Was passiert, wenn sie diese Probleme nicht lösen?"),
            ("need_payoff", "Präsentieren Sie den NUTZEN. Wie würde die Lösung ihrer Probleme ihnen helfen?"),
            ("proposal", "Präsentieren Sie Ihre KI-Chatbot-Lösung. Verwenden Sie AIDA - Aufmerksamkeit erregen, Interesse wecken, Verlangen schaffen."),
            ("closing", "Schaffen Sie Dringlichkeit und führen Sie zur Handlung. Zeitlich begrenzte Angebote, sofortige Vorteile."),
            ("contact_collection", "FINALE STUFE: Falls Kontakte noch nicht gesammelt - fragen Sie danach. Falls Kontakte erhalten - sagen Sie 'Vielen Dank! {owner_name} wird sich bald bei Ihnen melden. Sie können ihn auch direkt erreichen: {owner_handle}' und BEENDEN Sie das Gespräch."),
            ("conversation_completed", "GESPRÄCH BEENDET: Bedanken Sie sich für ihre Zeit, bestätigen Sie dass {owner_name} sie kontaktieren wird, geben Sie {owner_handle} Kontakt. KEINE weiteren Fragen. Beenden Sie höflich."),
        ]),
        b2c_stage_instructions: string_map(&[
            ("greeting", "Begrüßen Sie herzlich, fragen Sie nach dem Namen und was sie heute kaufen."),
            ("attention", "AUFMERKSAMKEIT ERREGEN: Erwähnen Sie Trendprodukte, Sonderangebote oder fragen Sie nach Interessen."),
            ("interest", "INTERESSE AUFBAUEN: Fragen Sie nach Lebensstil, Bedürfnissen und Problemen. Zeigen Sie, wie Produkte passen."),
            ("desire", "VERLANGEN SCHAFFEN: Präsentieren Sie Produkte mit Vorteilen, nutzen Sie Bewertungen und zeigen Sie Wert."),
            ("action", "ZUM HANDELN BEWEGEN: Schaffen Sie Dringlichkeit, gehen Sie auf Einwände ein, führen Sie zu \"In den Warenkorb\"."),
            ("follow_up", "ERNEUT ANSPRECHEN: Bieten Sie andere Produkte an, fragen Sie nach Bedenken, geben Sie Rabatte."),
            ("completed", "DANKEN & ZUSATZVERKAUF: Danken Sie, bestätigen Sie die Bestellung, schlagen Sie zusätzliche Produkte vor."),
        ]),
        lead_notification: LeadNotificationStrings {
            new_lead: "🎯 NEUER LEAD!".to_string(),
            name_and_contact: "**Name und Kontakt:**".to_string(),
            business_sector: "**Geschäftsbereich:**".to_string(),
            summary: "**Zusammenfassung:**".to_string(),
            lead_score: "📊 Lead Score:".to_string(),
            deal_closed: "Geschäft abgeschlossen".to_string(),
            not_specified: "Nicht angegeben".to_string(),
            client: "Kunde".to_string(),
            bot: "Bot".to_string(),
            interested_fallback: "Interessiert an KI-Chatbot für Geschäft".to_string(),
        },
        summary_prompt: SummaryPromptStrings {
            instruction: "Analysieren Sie das Gespräch mit einem potenziellen Kunden und erstellen Sie eine kurze Zusammenfassung (maximal 100 Zeichen) auf Deutsch.".to_string(),
            focus_on: "Konzentrieren Sie sich auf:".to_string(),
            main_problem: "1. Hauptproblem/Bedürfnis des Kunden".to_string(),
            business_sector: "2. Ihr Geschäftsbereich".to_string(),
            interest_level: "3. Interesse-Level".to_string(),
            format: "Format: \"Geschäftsbereich - Hauptproblem/Bedürfnis\"".to_string(),
            example: "Beispiel: \"Friseursalon - kann Leads nicht schnell genug bearbeiten\"".to_string(),
            response_only: "Antworten Sie nur mit der Zusammenfassung, kein zusätzlicher Text.".to_string(),
        },
        positive_keywords: vec![
            "interessant".to_string(),
            "gefällt".to_string(),
            "möchte".to_string(),
            "brauche".to_string(),
            "liebe".to_string(),
            "perfekt".to_string(),
            "toll".to_string(),
            "großartig".to_string(),
        ],
    }
}
