use crate::domain::a001_umrah_package::aggregate::UmrahPackage;
use crate::shared::money::format_rupiah;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// First bubble of every conversation
pub fn greeting(agency_name: &str) -> ChatMessage {
    ChatMessage::model(format!(
        "Assalamu'alaikum! Saya asisten digital {}. Ada yang bisa saya bantu terkait rencana ibadah Umrah Anda?",
        agency_name
    ))
}

/// One line per package: "name: Rp 28.500.000 (9 hari)", comma separated
pub fn package_context(packages: &[UmrahPackage]) -> String {
    packages
        .iter()
        .map(|p| format!("{}: {} ({} hari)", p.name, format_rupiah(p.price), p.duration))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn system_instruction(agency_name: &str, package_context: &str) -> String {
    format!(
        "Anda adalah konsultan Umrah ahli dari {agency}. \
Tugas Anda adalah memberikan informasi yang ramah, islami, dan akurat tentang Umrah. \
Gunakan konteks paket berikut jika ditanya tentang harga atau jadwal: {context}. \
Selalu akhiri dengan doa atau ajakan untuk mendaftar di {agency}.",
        agency = agency_name,
        context = package_context
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::seed;

    #[test]
    fn greeting_names_the_agency() {
        let msg = greeting("Ar-Rayan Travel & Tour");
        assert_eq!(msg.role, ChatRole::Model);
        assert!(msg.text.starts_with("Assalamu'alaikum! Saya asisten digital Ar-Rayan Travel & Tour."));
    }

    #[test]
    fn package_context_lists_price_and_duration() {
        let packages = seed::packages();
        let ctx = package_context(&packages[..2]);
        assert_eq!(
            ctx,
            "Umrah Reguler Ekonomi: Rp 28.500.000 (9 hari), Umrah Exclusive VIP: Rp 35.000.000 (12 hari)"
        );
        assert_eq!(package_context(&[]), "");
    }

    #[test]
    fn system_instruction_embeds_context_and_agency_twice() {
        let text = system_instruction("Ar-Rayan", "Paket A: Rp 1 (1 hari)");
        assert!(text.contains("konsultan Umrah ahli dari Ar-Rayan."));
        assert!(text.contains("harga atau jadwal: Paket A: Rp 1 (1 hari)."));
        assert!(text.ends_with("mendaftar di Ar-Rayan."));
    }
}
