use serde::{Deserialize, Serialize};

/// Texts shown during a session. Placeholders: `{year}`, `{organizer}`,
/// `{name}`, `{partner}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub welcome: String,
    pub prompt: String,
    pub prompt_default: String,
    pub rejected: String,
    pub reveal: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            welcome: "Wilkommen beim Wichtelprogramm {year}".to_string(),
            prompt: "Gib bitte dein Passwort ein".to_string(),
            prompt_default: "Dein Passwort".to_string(),
            rejected:
                "Falsches Passwort! Wende dich ggf. an {organizer} oder ueberpruefe deine Email!"
                    .to_string(),
            reveal: "Dein_e Wichtelpartner_in ist {partner}".to_string(),
        }
    }
}

/// Values substituted into a message template.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars<'a> {
    pub year: Option<u32>,
    pub organizer: Option<&'a str>,
    pub name: Option<&'a str>,
    pub partner: Option<&'a str>,
}

/// Replace known placeholders. Placeholders without a value are left as-is.
pub fn render(template: &str, vars: &TemplateVars<'_>) -> String {
    let mut out = template.to_string();
    if let Some(year) = vars.year {
        out = out.replace("{year}", &year.to_string());
    }
    if let Some(organizer) = vars.organizer {
        out = out.replace("{organizer}", organizer);
    }
    if let Some(name) = vars.name {
        out = out.replace("{name}", name);
    }
    if let Some(partner) = vars.partner {
        out = out.replace("{partner}", partner);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_reveal() {
        let messages = Messages::default();
        let text = render(
            &messages.reveal,
            &TemplateVars {
                partner: Some("Nico"),
                ..Default::default()
            },
        );
        assert_eq!(text, "Dein_e Wichtelpartner_in ist Nico");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let text = render(
            "{name} -> {partner} ({year})",
            &TemplateVars {
                name: Some("Bob"),
                ..Default::default()
            },
        );
        assert_eq!(text, "Bob -> {partner} ({year})");
    }

    #[test]
    fn test_default_welcome_uses_year() {
        let text = render(
            &Messages::default().welcome,
            &TemplateVars {
                year: Some(2017),
                ..Default::default()
            },
        );
        assert_eq!(text, "Wilkommen beim Wichtelprogramm 2017");
    }
}
