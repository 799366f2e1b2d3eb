use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the page can render. Every user-visible string comes from
/// the static bundle for the selected language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Kn,
    Te,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Kn, Language::Te]
    }

    /// Two-letter code identifying this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Kn => "kn",
            Language::Te => "te",
        }
    }

    /// Caption for the selector button.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Kn => "KN",
            Language::Te => "TE",
        }
    }

    /// Parse a language code. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Language {
        match code {
            "kn" => Language::Kn,
            "te" => Language::Te,
            _ => Language::En,
        }
    }

    /// Page background color for this language.
    pub fn background_color(&self) -> &'static str {
        match self {
            Language::En => "#f2f2f2",
            Language::Kn => "#FF9933",
            Language::Te => "#4CAF50",
        }
    }

    pub fn bundle(&self) -> &'static StringBundle {
        match self {
            Language::En => &EN,
            Language::Kn => &KN,
            Language::Te => &TE,
        }
    }
}

/// All user-visible strings for one language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringBundle {
    pub welcome_message: &'static str,
    pub your_account: &'static str,
    pub your_balance: &'static str,
    pub deposit_button: &'static str,
    pub withdraw_button: &'static str,
    pub install_metamask: &'static str,
    pub connect_metamask: &'static str,
    pub transaction_success: &'static str,
}

pub const EN: StringBundle = StringBundle {
    welcome_message: "Welcome to the Metacrafters ATM!",
    your_account: "Your Account:",
    your_balance: "Your Balance:",
    deposit_button: "Deposit 1 ETH",
    withdraw_button: "Withdraw 1 ETH",
    install_metamask: "Please install Metamask in order to use this ATM.",
    connect_metamask: "Please connect your Metamask wallet",
    transaction_success: "Transaction successful!",
};

pub const KN: StringBundle = StringBundle {
    welcome_message: "ಮೇಟಾಕ್ರಾಫ್ಟರ್ಸ್ ಎಟಿಎಂಗೆ ಸುಸ್ವಾಗತ!",
    your_account: "ನಿಮ್ಮ ಖಾತೆ:",
    your_balance: "ನಿಮ್ಮ ಶೇಕಡಾ:",
    deposit_button: "1 ಇಥರ್ ಡಿಪೋಸಿಟ್",
    withdraw_button: "1 ಇಥರ್ ವಿದ್ರಾಸ್",
    install_metamask: "ಈ ಎಟಿಎಂನ್ನು ಬಳಸಲು ಮೇಟಾಮಾಸ್ಕ್ ಅನ್ನು ಇನ್ಸ್ಟಾಲ್ ಮಾಡಿ.",
    connect_metamask: "ದಯವಿಟ್ಟು ನಿಮ್ಮ ಮೇಟಾಮಾಸ್ಕ್ ವಾಲೆಟ್ ಕನೆಕ್ಟ್ ಮಾಡಿ",
    transaction_success: "ಲಾಭಕರ ವ್ಯಾಪಾರ!",
};

pub const TE: StringBundle = StringBundle {
    welcome_message: "మేటాక్రాఫ్టర్స్ ఎటిఎంకు స్వాగతం!",
    your_account: "మీ ఖాతా:",
    your_balance: "మీ బ్యాలెన్స్:",
    deposit_button: "1 ఇథర్ డిపాజిట్",
    withdraw_button: "1 ఇథర్ విడ్రా",
    install_metamask: "దయచేసి ఈ ఎటిఎంన్ను ఉపయోగించడానికి మేటామాస్క్ ఇన్స్టాల్ చేయండి.",
    connect_metamask: "మీ మేటామాస్క్ వాలెట్ను కనెక్ట్ చేయండి",
    transaction_success: "వ్యాపార విజయవంతం!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_per_code() {
        assert_eq!(Language::from_code("en").bundle(), &EN);
        assert_eq!(Language::from_code("kn").bundle(), &KN);
        assert_eq!(Language::from_code("te").bundle(), &TE);
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        let lang = Language::from_code("fr");
        assert_eq!(lang, Language::En);
        assert_eq!(lang.bundle(), &EN);
        assert_eq!(lang.background_color(), "#f2f2f2");
    }

    #[test]
    fn test_background_colors() {
        assert_eq!(Language::En.background_color(), "#f2f2f2");
        assert_eq!(Language::Kn.background_color(), "#FF9933");
        assert_eq!(Language::Te.background_color(), "#4CAF50");
    }

    #[test]
    fn test_install_prompt_english() {
        assert_eq!(
            Language::En.bundle().install_metamask,
            "Please install Metamask in order to use this ATM."
        );
    }

    #[test]
    fn test_kannada_connect_text_differs() {
        // Each bundle carries its own translation of the connect prompt.
        assert_ne!(KN.connect_metamask, EN.connect_metamask);
        assert_ne!(TE.connect_metamask, EN.connect_metamask);
    }

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
            assert_eq!(lang.label(), lang.code().to_uppercase());
        }
    }
}
