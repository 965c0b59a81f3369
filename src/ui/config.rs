use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    /// Brand orange used for accents, selected cards and the reserve button
    pub accent: Color32,
    pub heading: Color32,
    pub label: Color32,
    pub subdued: Color32,
    pub page_background: Color32,
    pub header_scrolled: Color32,
    pub card: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub content_max_width: f32,
    pub section_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        accent: Color32::from_rgb(247, 147, 26),
        heading: Color32::from_rgb(20, 20, 24),
        label: Color32::from_rgb(60, 60, 67),
        subdued: Color32::from_rgb(120, 120, 128),
        page_background: Color32::WHITE,
        header_scrolled: Color32::from_rgb(250, 250, 250),
        card: Color32::from_rgb(248, 248, 248),
        success: Color32::from_rgb(34, 160, 90),
        warning: Color32::from_rgb(230, 150, 20),
        error: Color32::from_rgb(210, 60, 60),
    },
    content_max_width: 960.0,
    section_spacing: 80.0,
};

/// All static copy shown on the page
pub struct UiText {
    pub hero_kicker: &'static str,
    pub hero_title: &'static str,
    pub hero_body: &'static str,
    pub hero_discover: &'static str,
    pub hero_join: &'static str,

    pub showcase_heading: &'static str,
    pub showcase_body: &'static str,
    pub showcase_secured_heading: &'static str,
    pub showcase_multisig_heading: &'static str,
    pub showcase_multisig_body: &'static str,
    pub showcase_limited_heading: &'static str,
    pub showcase_reserve: &'static str,

    pub security_kicker: &'static str,
    pub security_heading: &'static str,
    pub security_body: &'static str,
    pub security_promise_heading: &'static str,
    pub security_promise_body: &'static str,

    pub presale_kicker: &'static str,
    pub presale_heading: &'static str,
    pub presale_select_label: &'static str,
    pub presale_wallet_label: &'static str,
    pub presale_connected: &'static str,
    pub presale_not_connected: &'static str,
    pub presale_connect_hint: &'static str,
    pub presale_terms: &'static str,
    pub presale_submit: &'static str,
    pub presale_timeline_heading: &'static str,
    pub presale_timeline_body: &'static str,

    pub wallet_select: &'static str,
    pub wallet_disconnect_hint: &'static str,

    pub footer_blurb: &'static str,
    pub footer_rights: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    hero_kicker: "Luxury meets Bitcoin security",
    hero_title: "Elegance and Security in Perfect Harmony",
    hero_body: "MillySat crafts luxury rings that not only captivate with their beauty \
                but also secure your Bitcoin with unparalleled protection.",
    hero_discover: "Discover Our Rings",
    hero_join: "Join Pre-Sale",

    showcase_heading: "Our Rings",
    showcase_body: "Combining timeless design with cutting-edge Bitcoin security \
                    technology, our rings offer a sophisticated way to secure your wealth.",
    showcase_secured_heading: "Secured Bitcoin",
    showcase_multisig_heading: "Multisig Security",
    showcase_multisig_body: "Enhanced with multisignature technology requiring approval \
                             from you and a trusted party, ensuring your Bitcoin remains \
                             secure even if the ring is lost or stolen.",
    showcase_limited_heading: "Limited Edition",
    showcase_reserve: "Reserve Now",

    security_kicker: "Uncompromising Protection",
    security_heading: "Industry-Leading Security",
    security_body: "Our rings incorporate sophisticated technology that keeps your \
                    Bitcoin safe through multi-layered security protocols and innovative design.",
    security_promise_heading: "The MillySat Security Promise",
    security_promise_body: "Your Bitcoin's security is our highest priority. Our rings are \
                            designed with a redundant security architecture that ensures your \
                            assets remain protected.",

    presale_kicker: "Limited Availability",
    presale_heading: "Join the Exclusive Pre-Sale",
    presale_select_label: "Select Your Ring",
    presale_wallet_label: "Connect Your Wallet",
    presale_connected: "Wallet Connected",
    presale_not_connected: "Wallet Not Connected",
    presale_connect_hint: "Please connect your Solana wallet to participate in the pre-sale",
    presale_terms: "By reserving, you agree to our terms and conditions.",
    presale_submit: "Reserve Your Ring",
    presale_timeline_heading: "Pre-Sale Timeline",
    presale_timeline_body: "Our pre-sale is open for a limited time. Manufacturing will begin \
                            once all pieces are reserved.",

    wallet_select: "Select Wallet",
    wallet_disconnect_hint: "Click to disconnect",

    footer_blurb: "Redefining luxury with Bitcoin-secured rings that combine elegant \
                   design with cutting-edge security technology.",
    footer_rights: "© MillySat. All rights reserved.",
};

/// Feature cards in the security section: (title, description)
pub static SECURITY_FEATURES: [(&str, &str); 4] = [
    (
        "Multisignature Protection",
        "Requires verification from both you and a trusted party for any transaction, \
         ensuring your Bitcoin remains secure even if your ring is compromised.",
    ),
    (
        "Tamper-Proof Design",
        "Any attempt to physically access the embedded hardware wallet triggers \
         protective measures to safeguard your assets.",
    ),
    (
        "Private Key Security",
        "Your private keys never leave the secure element of the ring, protected by \
         military-grade encryption.",
    ),
    (
        "Biometric Authentication",
        "Optional biometric verification adds an additional layer of security for \
         accessing your Bitcoin.",
    ),
];
