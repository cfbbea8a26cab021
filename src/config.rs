use serde::Serialize;

/// Business contact data for the whole site. Built once at startup and
/// handed to the components that render it, so nothing reads it from a
/// global.
#[derive(Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub phone: Phone,
    pub whatsapp: WhatsApp,
    pub company: Company,
    pub map: MapEmbed,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct Phone {
    pub display: String,
    pub href: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct WhatsApp {
    pub number: String,
    pub url: String,
    pub message: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct Company {
    pub name: String,
    pub short_name: String,
    pub email: String,
    pub domain: String,
    pub address: Address,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub pincode: String,
    pub state: String,
    pub country: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct MapEmbed {
    pub embed_url: String,
}

impl WhatsApp {
    /// Deep link that opens a chat with the greeting prefilled. The
    /// message rides along as a percent-encoded `text` query parameter.
    pub fn chat_url(&self) -> String {
        format!("{}?text={}", self.url, urlencoding::encode(&self.message))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phone: Phone {
                display: "+91 80972 93555".into(),
                href: "tel:+918097293555".into(),
            },
            whatsapp: WhatsApp {
                number: "918097293555".into(),
                url: "https://wa.me/918097293555".into(),
                message: "Hello OptiGROW! I would like to know more about your payroll outsourcing services.".into(),
            },
            company: Company {
                name: "OptiGROW Outsourcing Private Limited".into(),
                short_name: "OptiGROW".into(),
                email: "info@optigrow.co.in".into(),
                domain: "www.optigrow.co.in".into(),
                address: Address {
                    line1: "703, Oriana Business Park".into(),
                    line2: "Road No. 22, Wagle Industrial Estate".into(),
                    city: "Thane".into(),
                    pincode: "400 604".into(),
                    state: "Maharashtra".into(),
                    country: "India".into(),
                },
            },
            map: MapEmbed {
                embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3768.0!2d72.9!3d19.2!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x43094bfff60fb557!2sGrowthNEXT%20Consultants!5e0!3m2!1sen!2sin!4v1234567890".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_merges_encoded_message_onto_deep_link() {
        let whatsapp = WhatsApp {
            number: "918097293555".into(),
            url: "https://wa.me/918097293555".into(),
            message: "Hello".into(),
        };
        assert_eq!(whatsapp.chat_url(), "https://wa.me/918097293555?text=Hello");
    }

    #[test]
    fn chat_url_percent_encodes_spaces_and_punctuation() {
        let whatsapp = WhatsApp {
            number: "918097293555".into(),
            url: "https://wa.me/918097293555".into(),
            message: "Hello there! Payroll?".into(),
        };
        assert_eq!(
            whatsapp.chat_url(),
            "https://wa.me/918097293555?text=Hello%20there%21%20Payroll%3F"
        );
    }

    #[test]
    fn default_config_carries_the_production_number() {
        let config = SiteConfig::default();
        assert_eq!(config.whatsapp.number, "918097293555");
        assert!(config.whatsapp.chat_url().starts_with("https://wa.me/918097293555?text="));
    }
}
