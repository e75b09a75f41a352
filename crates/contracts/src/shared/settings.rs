use serde::{Deserialize, Serialize};

/// Agency-wide settings, edited on the admin "Settings" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub agency_name: String,
    /// Kemenag PPIU license, e.g. "No. 123/2020"
    pub license_number: String,
    pub support_email: String,
    /// International format without "+", used for wa.me links
    pub whatsapp_hotline: String,
    pub address: String,
    pub instagram: String,
    pub facebook: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            agency_name: "Ar-Rayan Travel & Tour".to_string(),
            license_number: "No. 123/2020".to_string(),
            support_email: "info@arrayantravel.com".to_string(),
            whatsapp_hotline: "6281234567890".to_string(),
            address: "Jl. Kebangkitan No. 123, Jakarta Selatan, Indonesia".to_string(),
            instagram: "@arrayantravel".to_string(),
            facebook: "Ar-Rayan Travel Umrah".to_string(),
        }
    }
}

impl SystemSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.agency_name.trim().is_empty() {
            return Err("Nama travel agency wajib diisi".into());
        }
        if !self.whatsapp_hotline.chars().all(|c| c.is_ascii_digit())
            || self.whatsapp_hotline.is_empty()
        {
            return Err("Nomor WhatsApp hanya boleh berisi angka (contoh: 6281234567890)".into());
        }
        if !self.support_email.contains('@') {
            return Err("Email support tidak valid".into());
        }
        Ok(())
    }

    pub fn whatsapp_link(&self, message: &str) -> String {
        whatsapp_link(&self.whatsapp_hotline, message)
    }
}

/// `https://wa.me/{number}?text={message}` with the message URL-encoded
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        let link = whatsapp_link("6281234567890", "Halo *Umrah* (VIP)?");
        assert_eq!(
            link,
            "https://wa.me/6281234567890?text=Halo%20%2AUmrah%2A%20%28VIP%29%3F"
        );
    }

    #[test]
    fn default_settings_are_valid() {
        assert!(SystemSettings::default().validate().is_ok());
    }

    #[test]
    fn hotline_must_be_digits() {
        let settings = SystemSettings {
            whatsapp_hotline: "+62 812".into(),
            ..SystemSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
