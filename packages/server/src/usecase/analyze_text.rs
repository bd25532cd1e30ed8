//! UseCase: legal analysis of free text.
//!
//! Extracts salient keywords through the external collaborator, matches them
//! against the statute table, and wraps a hit into a synthetic assistant
//! message for normal room delivery. This usecase never delivers directly.

use std::sync::Arc;

use vakil_shared::time::utc_now_rfc3339;

use crate::domain::{
    ChatMessage, ConversationId, KeywordExtractor, MessageIdFactory, StatuteEntry, StatuteTable,
    UserRole,
};

/// Sender identity attached to synthetic analysis messages
const AI_SENDER_ID: &str = "ai";
const AI_SENDER_NAME: &str = "AI Assistant";

/// Maps free text to the best-matching statute entry.
pub struct AnalyzeTextUseCase {
    extractor: Arc<dyn KeywordExtractor>,
    statutes: Arc<StatuteTable>,
}

impl AnalyzeTextUseCase {
    /// Create a new AnalyzeTextUseCase
    pub fn new(extractor: Arc<dyn KeywordExtractor>, statutes: Arc<StatuteTable>) -> Self {
        Self {
            extractor,
            statutes,
        }
    }

    /// Analyze `text` and build the synthetic message for a hit.
    ///
    /// Extraction failures and empty keyword lists fall back to tokenizing
    /// the raw text; they are never surfaced as errors. Matching itself is
    /// deterministic for a given text and table.
    ///
    /// # Arguments
    ///
    /// * `conversation_id` - The room the result is destined for
    /// * `text` - Free-form query text; minimum-length policy is the
    ///   caller's responsibility
    ///
    /// # Returns
    ///
    /// A relay-ready synthetic message, or None when no entry scores above
    /// zero
    pub async fn execute(
        &self,
        conversation_id: &ConversationId,
        text: &str,
    ) -> Option<ChatMessage> {
        let trimmed = text.trim();

        let tokens = match self.extractor.extract(&trimmed.to_lowercase()).await {
            Ok(keywords) if !keywords.is_empty() => keywords,
            Ok(_) => {
                tracing::debug!("extractor returned no keywords, falling back to raw text");
                StatuteTable::tokenize(trimmed)
            }
            Err(e) => {
                tracing::warn!("keyword extraction failed, falling back to raw text: {e}");
                StatuteTable::tokenize(trimmed)
            }
        };

        let entry = self.statutes.best_match(&tokens)?;
        Some(build_analysis_message(conversation_id, entry))
    }
}

/// Wrap a statute entry into a synthetic assistant message.
fn build_analysis_message(conversation_id: &ConversationId, entry: &StatuteEntry) -> ChatMessage {
    let content = format!(
        "Legal Analysis:\n\nIPC Section {} - {}\n\n{}\n\nRelated Case: {}",
        entry.section,
        entry.title,
        entry.description,
        entry.related_case.as_deref().unwrap_or("N/A"),
    );

    ChatMessage {
        id: MessageIdFactory::generate(),
        conversation_id: conversation_id.as_str().to_string(),
        sender_id: AI_SENDER_ID.to_string(),
        sender_name: AI_SENDER_NAME.to_string(),
        sender_role: UserRole::Lawyer,
        content,
        timestamp: utc_now_rfc3339(),
        is_ai: Some(true),
        attachments: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extractor::MockKeywordExtractor;
    use crate::domain::{ExtractError, StatuteEntry};

    fn test_table() -> Arc<StatuteTable> {
        Arc::new(StatuteTable::new(vec![
            StatuteEntry {
                section: "302".to_string(),
                title: "Punishment for murder".to_string(),
                description: "Whoever commits murder shall be punished.".to_string(),
                related_case: Some("Bachan Singh v. State of Punjab (1980)".to_string()),
                keywords: vec!["murder".to_string(), "homicide".to_string()],
            },
            StatuteEntry {
                section: "379".to_string(),
                title: "Punishment for theft".to_string(),
                description: "Whoever commits theft shall be punished.".to_string(),
                related_case: None,
                keywords: vec![
                    "theft".to_string(),
                    "stealing".to_string(),
                    "punishment".to_string(),
                ],
            },
        ]))
    }

    fn conversation() -> ConversationId {
        ConversationId::new("c1".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_uses_extracted_keywords() {
        // given: the extractor yields keywords overlapping the theft entry
        let mut extractor = MockKeywordExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Ok(vec!["theft".to_string(), "punishment".to_string()]));
        let usecase = AnalyzeTextUseCase::new(Arc::new(extractor), test_table());

        // when:
        let result = usecase
            .execute(&conversation(), "What is the punishment for theft")
            .await;

        // then: a synthetic assistant message for section 379
        let message = result.unwrap();
        assert!(message.content.contains("IPC Section 379"));
        assert_eq!(message.sender_id, "ai");
        assert_eq!(message.sender_name, "AI Assistant");
        assert_eq!(message.is_ai, Some(true));
        assert_eq!(message.conversation_id, "c1");
    }

    #[tokio::test]
    async fn test_analyze_falls_back_on_extraction_failure() {
        // given: the collaborator is down
        let mut extractor = MockKeywordExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Err(ExtractError::Upstream("connection refused".to_string())));
        let usecase = AnalyzeTextUseCase::new(Arc::new(extractor), test_table());

        // when: the raw text still carries a matching token
        let result = usecase
            .execute(&conversation(), "What is the punishment for theft")
            .await;

        // then: the fallback tokenization finds the entry
        assert!(result.unwrap().content.contains("IPC Section 379"));
    }

    #[tokio::test]
    async fn test_analyze_falls_back_on_empty_keywords() {
        // given: the collaborator answers with nothing
        let mut extractor = MockKeywordExtractor::new();
        extractor.expect_extract().returning(|_| Ok(Vec::new()));
        let usecase = AnalyzeTextUseCase::new(Arc::new(extractor), test_table());

        // when:
        let result = usecase
            .execute(&conversation(), "my neighbour committed murder")
            .await;

        // then:
        assert!(result.unwrap().content.contains("IPC Section 302"));
    }

    #[tokio::test]
    async fn test_analyze_no_overlap_returns_none() {
        // given:
        let mut extractor = MockKeywordExtractor::new();
        extractor.expect_extract().returning(|_| Ok(Vec::new()));
        let usecase = AnalyzeTextUseCase::new(Arc::new(extractor), test_table());

        // when: nothing in the query overlaps any keyword set
        let result = usecase.execute(&conversation(), "xyzzy nonsense").await;

        // then: explicit no-match, not an error
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_analyze_related_case_rendering() {
        // given:
        let mut extractor = MockKeywordExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Ok(vec!["murder".to_string()]));
        let usecase = AnalyzeTextUseCase::new(Arc::new(extractor), test_table());

        // when:
        let message = usecase
            .execute(&conversation(), "someone was murdered")
            .await
            .unwrap();

        // then: the citation appears verbatim
        assert!(
            message
                .content
                .contains("Related Case: Bachan Singh v. State of Punjab (1980)")
        );
    }

    #[tokio::test]
    async fn test_analyze_missing_related_case_renders_na() {
        // given:
        let mut extractor = MockKeywordExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Ok(vec!["theft".to_string()]));
        let usecase = AnalyzeTextUseCase::new(Arc::new(extractor), test_table());

        // when:
        let message = usecase
            .execute(&conversation(), "someone stole my phone, it was theft")
            .await
            .unwrap();

        // then:
        assert!(message.content.contains("Related Case: N/A"));
    }
}
