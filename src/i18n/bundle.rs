//! Static display strings for each language.

use super::Language;

/// Navigation labels, one per page section.
#[derive(Debug)]
pub struct NavStrings {
    pub home: &'static str,
    pub about: &'static str,
    pub features: &'static str,
    pub faq: &'static str,
}

#[derive(Debug)]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

/// Strings used by the chat widget.
#[derive(Debug)]
pub struct ChatStrings {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    /// First message of every fresh session.
    pub welcome: &'static str,
    /// Shown when the endpoint answered without reply text.
    pub empty_reply: &'static str,
    /// Shown when the request could not be completed or parsed.
    pub transport_error: &'static str,
    /// Shown when the user abandons an outstanding request.
    pub cancelled: &'static str,
}

#[derive(Debug)]
pub struct AboutStrings {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct FeaturesStrings {
    pub title: &'static str,
    pub items: [FeatureItem; 4],
}

#[derive(Debug)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug)]
pub struct FaqStrings {
    pub title: &'static str,
    pub items: [FaqItem; 4],
}

/// The complete set of localized strings for one language.
#[derive(Debug)]
pub struct Bundle {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub chat: ChatStrings,
    pub about: AboutStrings,
    pub features: FeaturesStrings,
    pub faq: FaqStrings,
}

/// Returns the bundle for `language`.
pub fn resolve(language: Language) -> &'static Bundle {
    match language {
        Language::Ru => &RU,
        Language::En => &EN,
    }
}

static RU: Bundle = Bundle {
    nav: NavStrings {
        home: "Главная",
        about: "О проекте",
        features: "Возможности",
        faq: "Вопросы",
    },
    hero: HeroStrings {
        title: "Корпоративный AI-Ассистент",
        subtitle: "Профессиональное решение для автоматизации бизнес-процессов",
        cta: "Начать диалог",
    },
    chat: ChatStrings {
        title: "AI-Ассистент",
        placeholder: "Введите ваш вопрос...",
        send: "Отправить",
        welcome: "Здравствуйте! Я корпоративный AI-ассистент. Чем могу помочь?",
        empty_reply: "Произошла ошибка. Пожалуйста, попробуйте снова.",
        transport_error: "Произошла ошибка при обращении к AI. Пожалуйста, убедитесь, что API ключ настроен.",
        cancelled: "Запрос отменён.",
    },
    about: AboutStrings {
        title: "О проекте",
        description: "Наш AI-ассистент создан для повышения эффективности работы вашей команды. \
                      Используя передовые технологии искусственного интеллекта, мы предоставляем \
                      быстрые и точные ответы на ваши вопросы.",
    },
    features: FeaturesStrings {
        title: "Возможности AI",
        items: [
            FeatureItem {
                title: "Многоязычная поддержка",
                description: "Работа с запросами на русском и английском языках",
            },
            FeatureItem {
                title: "Быстрые ответы",
                description: "Мгновенная обработка запросов и предоставление информации",
            },
            FeatureItem {
                title: "Контекстное понимание",
                description: "Анализ контекста для более точных ответов",
            },
            FeatureItem {
                title: "Безопасность данных",
                description: "Корпоративный уровень защиты конфиденциальной информации",
            },
        ],
    },
    faq: FaqStrings {
        title: "Частые вопросы",
        items: [
            FaqItem {
                question: "Как начать использовать AI-ассистента?",
                answer: "Просто введите ваш вопрос в поле чата и нажмите кнопку отправки. \
                         Ассистент обработает запрос и предоставит ответ.",
            },
            FaqItem {
                question: "На каких языках работает ассистент?",
                answer: "AI-ассистент поддерживает русский и английский языки. \
                         Вы можете переключать язык интерфейса в правом верхнем углу.",
            },
            FaqItem {
                question: "Насколько безопасны мои данные?",
                answer: "Мы используем корпоративные стандарты безопасности. Все данные шифруются \
                         и обрабатываются в соответствии с требованиями конфиденциальности.",
            },
            FaqItem {
                question: "Можно ли интегрировать ассистента в корпоративную систему?",
                answer: "Да, наше решение поддерживает интеграцию через API. \
                         Свяжитесь с нашей технической поддержкой для уточнения деталей.",
            },
        ],
    },
};

static EN: Bundle = Bundle {
    nav: NavStrings {
        home: "Home",
        about: "About",
        features: "Features",
        faq: "FAQ",
    },
    hero: HeroStrings {
        title: "Corporate AI Assistant",
        subtitle: "Professional solution for business process automation",
        cta: "Start Conversation",
    },
    chat: ChatStrings {
        title: "AI Assistant",
        placeholder: "Enter your question...",
        send: "Send",
        welcome: "Hello! I am your corporate AI assistant. How can I help you?",
        empty_reply: "An error occurred. Please try again.",
        transport_error: "Error connecting to AI. Please ensure the API key is configured.",
        cancelled: "Request cancelled.",
    },
    about: AboutStrings {
        title: "About Project",
        description: "Our AI assistant is designed to improve your team's efficiency. \
                      Using advanced artificial intelligence technologies, we provide \
                      fast and accurate answers to your questions.",
    },
    features: FeaturesStrings {
        title: "AI Capabilities",
        items: [
            FeatureItem {
                title: "Multilingual Support",
                description: "Processing requests in Russian and English languages",
            },
            FeatureItem {
                title: "Fast Responses",
                description: "Instant query processing and information delivery",
            },
            FeatureItem {
                title: "Context Understanding",
                description: "Context analysis for more accurate responses",
            },
            FeatureItem {
                title: "Data Security",
                description: "Corporate-level protection of confidential information",
            },
        ],
    },
    faq: FaqStrings {
        title: "Frequently Asked Questions",
        items: [
            FaqItem {
                question: "How to start using AI assistant?",
                answer: "Simply enter your question in the chat field and press send button. \
                         The assistant will process your request and provide an answer.",
            },
            FaqItem {
                question: "What languages does the assistant support?",
                answer: "The AI assistant supports Russian and English languages. \
                         You can switch the interface language in the top right corner.",
            },
            FaqItem {
                question: "How secure is my data?",
                answer: "We use corporate security standards. All data is encrypted and \
                         processed in accordance with confidentiality requirements.",
            },
            FaqItem {
                question: "Can the assistant be integrated into corporate system?",
                answer: "Yes, our solution supports API integration. \
                         Contact our technical support for details.",
            },
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_returns_matching_bundle() {
        assert_eq!(resolve(Language::Ru).nav.home, "Главная");
        assert_eq!(resolve(Language::En).nav.home, "Home");
    }

    #[test]
    fn test_error_strings_are_distinct() {
        for lang in Language::ALL {
            let chat = &resolve(lang).chat;
            assert_ne!(chat.empty_reply, chat.transport_error);
            assert_ne!(chat.cancelled, chat.transport_error);
        }
    }

    #[test]
    fn test_bundles_have_no_empty_strings() {
        for lang in Language::ALL {
            let b = resolve(lang);
            let strings = [
                b.nav.home,
                b.nav.about,
                b.nav.features,
                b.nav.faq,
                b.hero.title,
                b.hero.subtitle,
                b.hero.cta,
                b.chat.title,
                b.chat.placeholder,
                b.chat.send,
                b.chat.welcome,
                b.chat.empty_reply,
                b.chat.transport_error,
                b.chat.cancelled,
                b.about.title,
                b.about.description,
                b.features.title,
                b.faq.title,
            ];
            assert!(strings.iter().all(|s| !s.is_empty()), "empty string in {lang}");
            assert!(b.features.items.iter().all(|i| !i.title.is_empty()));
            assert!(b.faq.items.iter().all(|i| !i.answer.is_empty()));
        }
    }

    #[test]
    fn test_line_continuations_collapse_whitespace() {
        // `\` continuations must not leave double spaces in rendered text
        for lang in Language::ALL {
            assert!(!resolve(lang).about.description.contains("  "));
        }
    }
}
