//! Deterministic fallback replies and suggestion derivation.
//!
//! The fallback table guarantees the chat surface is never dead: whenever no
//! remote credential is configured or the remote call fails, the gateway
//! answers from a canned, keyword-matched table in the selected reply
//! language. Keyword sets are multilingual so e.g. "salom" matches the
//! greeting topic regardless of the selected reply language.

use vitrina_core::Language;

use super::types::ChatReply;

/// Topics the fallback table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Greeting,
    Style,
    TryOn,
    Sizing,
    Default,
}

/// Canned reply texts for one language.
struct ResponseTable {
    greeting: &'static str,
    style: &'static str,
    try_on: &'static str,
    sizing: &'static str,
    default: &'static str,
}

const EN: ResponseTable = ResponseTable {
    greeting: "Hello! 👋 I'm your AI shopping assistant. I can help you with virtual try-ons, style advice, product recommendations, and more! What would you like to explore?",
    style: "✨ I'd love to help you discover your perfect style! I can analyze trends, suggest outfits, and help you find pieces that match your personality. What kind of style are you interested in?",
    try_on: "🔮 Our Virtual Try-On feature uses advanced AI to show you how clothes will look on you! You can upload your photo or use live camera. Would you like to try it?",
    sizing: "📏 Getting the right fit is crucial! I can help you with size recommendations based on your measurements and our sizing database. Need help finding your size?",
    default: "🛍️ I'm here to help with all your shopping needs! I can assist with virtual try-ons, style advice, product recommendations, sizing help, and more. What would you like to know?",
};

const RU: ResponseTable = ResponseTable {
    greeting: "Привет! 👋 Я ваш AI помощник по покупкам. Я могу помочь с виртуальной примеркой, советами по стилю, рекомендациями товаров и многим другим! Что бы вы хотели изучить?",
    style: "✨ Я буду рад помочь вам найти ваш идеальный стиль! Я могу анализировать тренды, предлагать наряды и помогать найти вещи, которые подходят вашей личности. Какой стиль вас интересует?",
    try_on: "🔮 Наша функция виртуальной примерки использует продвинутый AI, чтобы показать, как одежда будет выглядеть на вас! Вы можете загрузить фото или использовать камеру. Хотите попробовать?",
    sizing: "📏 Правильная посадка очень важна! Я могу помочь с рекомендациями размеров на основе ваших измерений и нашей базы размеров. Нужна помощь с размером?",
    default: "🛍️ Я здесь, чтобы помочь со всеми вашими покупками! Я могу помочь с виртуальной примеркой, советами по стилю, рекомендациями товаров, помощью с размерами и многим другим. Что бы вы хотели узнать?",
};

const UZ: ResponseTable = ResponseTable {
    greeting: "Salom! 👋 Men sizning AI xarid yordamchingizman. Men virtual kiyib ko'rish, stil maslahatlari, mahsulot tavsiyalari va boshqa ko'p narsalarda yordam bera olaman! Nimani o'rganishni xohlaysiz?",
    style: "✨ Sizning mukammal stilingizni topishga yordam berishdan xursandman! Men trendlarni tahlil qila olaman, kiyimlar taklif qila olaman va shaxsiyatingizga mos bo'lgan narsalarni topishga yordam bera olaman. Qanday stil sizni qiziqtiradi?",
    try_on: "🔮 Bizning Virtual Kiyib Ko'rish funksiyamiz ilg'or AI dan foydalanib, kiyimlar sizda qanday ko'rinishini ko'rsatadi! Siz rasm yuklashingiz yoki jonli kamerani ishlatishingiz mumkin. Sinab ko'rishni xohlaysizmi?",
    sizing: "📏 To'g'ri o'lcham juda muhim! Men sizning o'lchamlaringiz va bizning o'lcham bazamiz asosida o'lcham tavsiyalari bilan yordam bera olaman. O'lchamingizni topishda yordam kerakmi?",
    default: "🛍️ Men barcha xarid ehtiyojlaringizda yordam berish uchun shu yerdaman! Men virtual kiyib ko'rish, stil maslahatlari, mahsulot tavsiyalari, o'lcham yordami va boshqa ko'p narsalarda yordam bera olaman. Nimani bilishni xohlaysiz?",
};

const fn table_for(language: Language) -> &'static ResponseTable {
    match language {
        Language::En => &EN,
        Language::Ru => &RU,
        Language::Uz => &UZ,
    }
}

fn classify(text: &str) -> Topic {
    let lower = text.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if matches(&["hello", "hi", "salom", "привет"]) {
        Topic::Greeting
    } else if matches(&["style", "fashion", "стиль", "stil"]) {
        Topic::Style
    } else if matches(&["try on", "virtual", "виртуальный"]) {
        Topic::TryOn
    } else if matches(&["size", "fit", "размер", "o'lcham"]) {
        Topic::Sizing
    } else {
        Topic::Default
    }
}

/// Produce a canned reply for the user's text in the given language.
///
/// Total: every input, including the empty string and text matching no
/// keyword, yields a non-empty message and a non-empty suggestion set.
#[must_use]
pub fn fallback_reply(text: &str, language: Language) -> ChatReply {
    let table = table_for(language);
    let (message, suggestions): (&str, &[&str]) = match classify(text) {
        Topic::Greeting => (
            table.greeting,
            &["Virtual Try-On", "Style Quiz", "Product Search", "Size Guide"],
        ),
        Topic::Style => (
            table.style,
            &["Casual Style", "Formal Wear", "Trendy Outfits", "Color Matching"],
        ),
        Topic::TryOn => (
            table.try_on,
            &["Start Try-On", "Upload Photo", "Live Camera", "How it works"],
        ),
        Topic::Sizing => (
            table.sizing,
            &["Size Calculator", "Measurement Guide", "Fit Tips", "Size Chart"],
        ),
        Topic::Default => (
            table.default,
            &["Virtual Try-On", "Style Advice", "Product Search", "Size Help"],
        ),
    };

    ChatReply {
        message: message.to_string(),
        suggestions: suggestions.iter().map(ToString::to_string).collect(),
    }
}

/// Derive follow-up suggestion chips from the model's reply text.
#[must_use]
pub fn suggestions_for(reply: &str) -> Vec<String> {
    let lower = reply.to_lowercase();
    let chips: &[&str] = if lower.contains("style") || lower.contains("fashion") {
        &["Style Quiz", "Fashion Trends", "Color Matching", "Outfit Ideas"]
    } else if lower.contains("try") || lower.contains("fit") {
        &["Virtual Try-On", "Size Guide", "Fit Tips", "Measurements"]
    } else if lower.contains("product") || lower.contains("search") {
        &["Browse Products", "Filter Search", "Compare Items", "Wishlist"]
    } else if lower.contains("order") || lower.contains("shipping") {
        &["Track Order", "Delivery Info", "Return Policy", "Customer Support"]
    } else {
        &["Virtual Try-On", "Style Quiz", "Product Search", "Size Guide"]
    };

    chips.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_in_english() {
        let reply = fallback_reply("hello", Language::En);
        assert!(reply.message.starts_with("Hello!"));
        assert_eq!(
            reply.suggestions,
            vec!["Virtual Try-On", "Style Quiz", "Product Search", "Size Guide"]
        );
    }

    #[test]
    fn test_multilingual_keywords_match_any_reply_language() {
        let reply = fallback_reply("salom", Language::Ru);
        assert!(reply.message.starts_with("Привет!"));

        let reply = fallback_reply("привет", Language::Uz);
        assert!(reply.message.starts_with("Salom!"));
    }

    #[test]
    fn test_topic_classification() {
        assert!(fallback_reply("what's my size?", Language::En)
            .message
            .contains("right fit"));
        assert!(fallback_reply("I want to try on a jacket", Language::En)
            .message
            .contains("Virtual Try-On"));
        assert!(fallback_reply("want to update my style", Language::En)
            .message
            .contains("perfect style"));
    }

    #[test]
    fn test_greeting_keyword_shadows_later_topics() {
        // "this" contains "hi", so greeting wins over try-on. Matches the
        // substring semantics the UI has always shipped with.
        let reply = fallback_reply("can I try on this?", Language::En);
        assert!(reply.message.starts_with("Hello!"));
    }

    #[test]
    fn test_total_for_arbitrary_input() {
        for text in ["", "qwerty asdf", "12345", "¯\\_(ツ)_/¯"] {
            for language in [Language::En, Language::Ru, Language::Uz] {
                let reply = fallback_reply(text, language);
                assert!(!reply.message.is_empty());
                assert!(!reply.suggestions.is_empty());
            }
        }
    }

    #[test]
    fn test_suggestions_follow_model_reply_topic() {
        assert_eq!(
            suggestions_for("Here are some style ideas for autumn"),
            vec!["Style Quiz", "Fashion Trends", "Color Matching", "Outfit Ideas"]
        );
        assert_eq!(
            suggestions_for("Your order ships tomorrow"),
            vec!["Track Order", "Delivery Info", "Return Policy", "Customer Support"]
        );
        assert_eq!(
            suggestions_for("Anything else?"),
            vec!["Virtual Try-On", "Style Quiz", "Product Search", "Size Guide"]
        );
    }
}
