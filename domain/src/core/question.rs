//! Question value object

/// A problem statement to be answered by a model (Value Object)
///
/// Identified by the filename it was loaded from. The content is kept
/// exactly as read; nothing trims or normalizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    filename: String,
    content: String,
}

impl Question {
    /// Create a new question from its source filename and text.
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// The filename this question was loaded from
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("reorder_list.txt", "Reorder a singly linked list...");
        assert_eq!(q.filename(), "reorder_list.txt");
        assert_eq!(q.content(), "Reorder a singly linked list...");
    }

    #[test]
    fn test_content_is_kept_verbatim() {
        let raw = "  Two Sum\n\nGiven an array...\n\n";
        let q = Question::new("two_sum.txt", raw);
        assert_eq!(q.content(), raw);
        assert_eq!(q.to_string(), raw);
    }

    #[test]
    fn test_empty_file_is_a_valid_question() {
        let q = Question::new("empty.txt", "");
        assert!(q.content().is_empty());
    }
}
