//! Small-talk short-circuit: greetings, farewells and thanks never reach the player lookup.

use rand::seq::IndexedRandom;

const GREETINGS: &[&str] = &[
    "merhaba",
    "selam",
    "slm",
    "günaydın",
    "iyi akşamlar",
    "hey",
    "merhabalar",
];

const FAREWELLS: &[&str] = &[
    "güle güle",
    "görüşürüz",
    "baybay",
    "bye",
    "iyi geceler",
    "hoşçakal",
    "çıkış",
];

const THANKS: &[&str] = &["teşekkürler", "teşekkür", "sağ ol", "eyvallah"];

pub const GREETING_REPLIES: &[&str] = &[
    "Merhaba! Ben Futbolcu Scout Asistanı. Size hangi oyuncu hakkında bilgi verebilirim?",
    "Selamlar! Bir futbolcu arıyorsanız doğru yerdesiniz.",
    "Merhaba! Analiz etmemi istediğiniz bir futbolcu var mı?",
];

pub const FAREWELL_REPLIES: &[&str] = &[
    "Görüşmek üzere! Futbol dolu günler dilerim.",
    "Hoşçakalın, yine beklerim!",
    "İyi günler! Başka bir oyuncu analizi için her zaman buradayım.",
];

pub const THANKS_REPLY: &str = "Rica ederim! Yardımcı olabildiysem ne mutlu.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIntent {
    Greeting,
    Farewell,
    Thanks,
}

impl SocialIntent {
    /// Detects small talk. Greetings must open the message; farewells and thanks may appear
    /// anywhere in it.
    pub fn detect(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();

        let is_greeting = GREETINGS
            .iter()
            .any(|g| text == *g || text.starts_with(&format!("{} ", g)));
        if is_greeting {
            return Some(Self::Greeting);
        }

        if FAREWELLS.iter().any(|f| text.contains(f)) {
            return Some(Self::Farewell);
        }

        if THANKS.iter().any(|t| text.contains(t)) {
            return Some(Self::Thanks);
        }

        None
    }

    /// Picks the reply for this intent (random among variants where there are several).
    pub fn reply(&self) -> &'static str {
        match self {
            SocialIntent::Greeting => pick(GREETING_REPLIES),
            SocialIntent::Farewell => pick(FAREWELL_REPLIES),
            SocialIntent::Thanks => THANKS_REPLY,
        }
    }
}

fn pick(choices: &'static [&'static str]) -> &'static str {
    choices.choose(&mut rand::rng()).copied().unwrap_or_default()
}
