use shared_types::{ChatMessage, Language};

use crate::i18n;

/// Why a submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    Blank,
    /// A consultation is already in flight
    Pending,
}

/// Handle for an in-flight consultation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    query: String,
    language: Language,
}

impl Ticket {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

/// Chat history of the consultation view.
///
/// Messages are only ever appended. Changing the language starts a new
/// generation holding just the localized greeting; replies that belong to
/// an earlier generation are dropped when they arrive.
#[derive(Debug, Clone)]
pub struct ConsultSession {
    language: Language,
    messages: Vec<ChatMessage>,
    generation: u64,
    pending: Option<u64>,
}

impl ConsultSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            messages: vec![ChatMessage::intro(i18n::strings(language).ai.intro)],
            generation: 0,
            pending: None,
        }
    }

    /// Start over with a single greeting. An in-flight call is not
    /// cancelled; its reply will be discarded.
    pub fn reset(&mut self, language: Language) {
        self.language = language;
        self.generation += 1;
        self.messages = vec![ChatMessage::intro(i18n::strings(language).ai.intro)];
        tracing::debug!(
            language = %language,
            generation = self.generation,
            "Consultation session reset"
        );
    }

    /// Record the user's message and hand out a ticket for the call
    pub fn begin(&mut self, input: &str) -> Result<Ticket, SubmitRejected> {
        if input.trim().is_empty() {
            return Err(SubmitRejected::Blank);
        }
        if self.pending.is_some() {
            return Err(SubmitRejected::Pending);
        }

        self.messages.push(ChatMessage::user(input));
        self.pending = Some(self.generation);

        Ok(Ticket {
            generation: self.generation,
            query: input.to_string(),
            language: self.language,
        })
    }

    /// Append the reply for `ticket`. Returns false when the reply was stale
    /// and therefore dropped.
    pub fn complete(&mut self, ticket: Ticket, reply: impl Into<String>) -> bool {
        self.pending = None;

        if ticket.generation != self.generation {
            tracing::info!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                "Discarding consultation reply from a previous session"
            );
            return false;
        }

        self.messages.push(ChatMessage::assistant(reply));
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ChatRole;

    #[test]
    fn test_new_session_has_greeting() {
        let session = ConsultSession::new(Language::En);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, ChatMessage::INTRO_ID);
        assert_eq!(session.messages()[0].content, i18n::strings(Language::En).ai.intro);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_messages_are_appended_in_request_order() {
        let mut session = ConsultSession::new(Language::En);

        let ticket = session.begin("How to reduce shrinkage?").unwrap();
        assert!(session.is_pending());
        assert_eq!(session.messages()[1].role, ChatRole::User);

        assert!(session.complete(ticket, "Pre-shrink the fabric."));
        assert!(!session.is_pending());

        let roles: Vec<ChatRole> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
        );
        assert_eq!(
            session.last_message().map(|m| m.content.as_str()),
            Some("Pre-shrink the fabric.")
        );
    }

    #[test]
    fn test_blank_and_concurrent_submissions_are_rejected() {
        let mut session = ConsultSession::new(Language::Id);
        assert_eq!(session.begin("  "), Err(SubmitRejected::Blank));

        let ticket = session.begin("Halo").unwrap();
        assert_eq!(ticket.language(), Language::Id);
        assert_eq!(session.begin("Lagi"), Err(SubmitRejected::Pending));
        assert_eq!(session.messages().len(), 2);

        session.complete(ticket, "Halo juga");
        assert!(session.begin("Lagi").is_ok());
    }

    #[test]
    fn test_reply_after_reset_is_discarded() {
        let mut session = ConsultSession::new(Language::Id);
        let ticket = session.begin("Pertanyaan").unwrap();

        session.reset(Language::En);
        assert_eq!(session.messages().len(), 1);
        // The old call is still in flight
        assert!(session.is_pending());

        assert!(!session.complete(ticket, "Jawaban lama"));
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_pending());
        assert_eq!(session.language(), Language::En);
    }
}
