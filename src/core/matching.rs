use crate::core::rng::SeededRandom;
use crate::core::shuffle::{find_index, shuffled};
use crate::domain::messages::{render, Messages, TemplateVars};
use crate::domain::model::{Pairing, Reveal, Roster};
use crate::domain::ports::Dialog;
use crate::utils::error::{Result, WichtelError};

/// Roster names in drawn order for `seed_year`.
pub fn drawn_names(roster: &Roster, seed_year: u32) -> Vec<String> {
    let mut rng = SeededRandom::from_year(seed_year);
    shuffled(roster.names(), &mut rng)
}

/// Full giver -> receiver table for `seed_year`, in roster order.
pub fn draw_table(roster: &Roster, seed_year: u32) -> Vec<Pairing> {
    roster
        .names()
        .into_iter()
        .zip(drawn_names(roster, seed_year))
        .map(|(giver, receiver)| Pairing { giver, receiver })
        .collect()
}

/// One participant session: welcome, ask for the code, reveal the partner.
pub struct MatchingFlow<D: Dialog> {
    roster: Roster,
    messages: Messages,
    organizer: String,
    seed_year: u32,
    dialog: D,
}

impl<D: Dialog> MatchingFlow<D> {
    pub fn new(roster: Roster, seed_year: u32, dialog: D) -> Self {
        Self {
            roster,
            messages: Messages::default(),
            organizer: String::new(),
            seed_year,
            dialog,
        }
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = organizer.into();
        self
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn into_dialog(self) -> D {
        self.dialog
    }

    /// Runs the session once. An unknown or cancelled code shows the
    /// rejection notice and returns [`WichtelError::UnrecognizedSecret`]
    /// without drawing.
    pub fn run(&mut self) -> Result<Reveal> {
        let vars = TemplateVars {
            year: Some(self.seed_year),
            organizer: Some(self.organizer.as_str()),
            ..Default::default()
        };

        self.dialog.notify(&render(&self.messages.welcome, &vars))?;

        let answer = self
            .dialog
            .prompt(&self.messages.prompt, &self.messages.prompt_default)?;

        let codes = self.roster.codes();
        let position = answer.as_deref().and_then(|code| find_index(code, &codes));

        let Some(position) = position else {
            tracing::warn!(
                cancelled = answer.is_none(),
                "Rejected session: code not in roster"
            );
            self.dialog.notify(&render(&self.messages.rejected, &vars))?;
            return Err(WichtelError::UnrecognizedSecret);
        };

        let participant = self.roster.participants()[position].name.clone();
        tracing::debug!(position, "Resolved code to participant");

        let drawn = drawn_names(&self.roster, self.seed_year);
        let partner = drawn[position].clone();

        let reveal = Reveal {
            participant,
            partner,
            position,
            seed_year: self.seed_year,
        };

        if reveal.is_self_draw() {
            tracing::warn!(
                position,
                seed_year = self.seed_year,
                "Participant drew themself"
            );
        }

        let text = render(
            &self.messages.reveal,
            &TemplateVars {
                name: Some(reveal.participant.as_str()),
                partner: Some(reveal.partner.as_str()),
                ..vars
            },
        );
        self.dialog.notify(&text)?;

        tracing::info!(seed_year = self.seed_year, "Partner revealed");
        Ok(reveal)
    }
}
