//! GraphQL fragments the components declare as their data requirements.
//!
//! Execution and caching live in the query client; these descriptors only
//! name the fields and compose into a self-contained document.

/// A named fragment plus the fragments it spreads.
#[derive(Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Fragment name used in spreads.
    pub name: &'static str,
    /// Type condition.
    pub on_type: &'static str,
    /// Selection set, without the surrounding braces.
    pub body: &'static str,
    /// Fragments spread inside `body`.
    pub dependencies: &'static [&'static Fragment],
}

impl Fragment {
    /// `fragment Name on Type { ... }` for this fragment alone.
    #[must_use]
    pub fn definition(&self) -> String {
        format!(
            "fragment {} on {} {{\n{}\n}}",
            self.name,
            self.on_type,
            self.body.trim_end()
        )
    }

    /// This fragment followed by every transitive dependency, each once.
    #[must_use]
    pub fn document(&self) -> String {
        let mut ordered: Vec<&Fragment> = Vec::new();
        collect(self, &mut ordered);
        ordered
            .iter()
            .map(|fragment| fragment.definition())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Spread syntax for embedding in another selection.
    #[must_use]
    pub fn spread(&self) -> String {
        format!("...{}", self.name)
    }
}

fn collect<'a>(fragment: &'a Fragment, out: &mut Vec<&'a Fragment>) {
    if out.iter().any(|seen| seen.name == fragment.name) {
        return;
    }
    out.push(fragment);
    for dependency in fragment.dependencies {
        collect(dependency, out);
    }
}

/// Link preview fields.
pub const HYPERLINK_DATA: Fragment = Fragment {
    name: "HyperlinkData",
    on_type: "Hyperlink",
    body: "  title
  url
  summary
  topImageUrl
  status
  error",
    dependencies: &[],
};

/// The viewer's own vote.
pub const ARTICLE_REPLY_FEEDBACK_FOR_USER: Fragment = Fragment {
    name: "ArticleReplyFeedbackForUser",
    on_type: "ArticleReply",
    body: "  articleId
  replyId
  ownArticleReplyFeedback {
    score
    comment
  }",
    dependencies: &[],
};

/// Vote counts plus the viewer's own vote.
pub const ARTICLE_REPLY_FEEDBACK_DATA: Fragment = Fragment {
    name: "ArticleReplyFeedbackData",
    on_type: "ArticleReply",
    body: "  articleId
  replyId
  feedbackCount
  positiveFeedbackCount
  negativeFeedbackCount
  ...ArticleReplyFeedbackForUser",
    dependencies: &[&ARTICLE_REPLY_FEEDBACK_FOR_USER],
};

/// Full detail selection rendered by the reply card.
pub const ARTICLE_REPLY_DATA: Fragment = Fragment {
    name: "ArticleReplyData",
    on_type: "ArticleReply",
    body: "  # articleId and replyId identify ArticleReply instances in the cache
  articleId
  replyId
  canUpdateStatus
  createdAt
  reply {
    id
    type
    text
    reference
    user {
      id
      name
      level
    }
    hyperlinks {
      ...HyperlinkData
    }
  }
  user {
    id
    name
    level
  }
  ...ArticleReplyFeedbackData",
    dependencies: &[&HYPERLINK_DATA, &ARTICLE_REPLY_FEEDBACK_DATA],
};

/// Personalised fields refetched after the viewer signs in.
pub const ARTICLE_REPLY_FOR_USER: Fragment = Fragment {
    name: "ArticleReplyForUser",
    on_type: "ArticleReply",
    body: "  articleId
  replyId
  canUpdateStatus
  ...ArticleReplyFeedbackForUser",
    dependencies: &[&ARTICLE_REPLY_FEEDBACK_FOR_USER],
};
