use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    HeroTitle,
    HeroHighlight,
    HeroSubtitle,
    /// 1-based slot into the four hero images
    HeroImage(usize),
    Phone,
    Whatsapp,
    Email,
    Instagram,
    Twitter,
    Address,
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hero-title" => Ok(ConfigKey::HeroTitle),
            "hero-highlight" => Ok(ConfigKey::HeroHighlight),
            "hero-subtitle" => Ok(ConfigKey::HeroSubtitle),
            "phone" => Ok(ConfigKey::Phone),
            "whatsapp" => Ok(ConfigKey::Whatsapp),
            "email" => Ok(ConfigKey::Email),
            "instagram" => Ok(ConfigKey::Instagram),
            "twitter" => Ok(ConfigKey::Twitter),
            "address" => Ok(ConfigKey::Address),
            other => {
                if let Some(n) = other
                    .strip_prefix("hero-image-")
                    .and_then(|n| n.parse::<usize>().ok())
                {
                    if (1..=4).contains(&n) {
                        return Ok(ConfigKey::HeroImage(n));
                    }
                }
                Err(format!("Unknown config key: {}", other))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    Show,
    Set(ConfigKey, String),
}

/// Show the storefront configuration, or set one field and save the whole
/// record back (configuration is a singleton replaced wholesale, never
/// merged).
pub fn run<S: CatalogStore>(store: &mut S, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::Show => {
            let config = store.load_config()?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::Set(key, value) => {
            let mut config = store.load_config()?;
            match key {
                ConfigKey::HeroTitle => config.hero_title = value,
                ConfigKey::HeroHighlight => config.hero_highlight = value,
                ConfigKey::HeroSubtitle => config.hero_subtitle = value,
                ConfigKey::HeroImage(n) => config.hero_images[n - 1] = value,
                ConfigKey::Phone => config.contact.phone = value,
                ConfigKey::Whatsapp => config.contact.whatsapp = value,
                ConfigKey::Email => config.contact.email = value,
                ConfigKey::Instagram => config.contact.instagram = value,
                ConfigKey::Twitter => config.contact.twitter = value,
                ConfigKey::Address => config.contact.address = value,
            }
            store.save_config(&config)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success("Store configuration saved."));
            Ok(result)
        }
    }
}
