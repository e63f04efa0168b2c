//! FAQ corpus: the static question/answer set the matcher scores against.
//!
//! The corpus is kept in two shapes: grouped by category (the wire and file
//! form) and flattened into positional [`FaqEntry`] values (the form the
//! matcher iterates). Both are built once and never mutated.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HelpdeskError, Result};
use crate::types::{FaqCategory, FaqEntry, FaqQuestion};

/// On-disk corpus layout:
///
/// ```toml
/// [[categories]]
/// category = "Account"
///
/// [[categories.questions]]
/// q = "how to reset password"
/// a = "To reset your password, ..."
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    categories: Vec<FaqCategory>,
}

/// Immutable FAQ corpus.
#[derive(Debug, Clone)]
pub struct FaqCorpus {
    categories: Vec<FaqCategory>,
    entries: Vec<FaqEntry>,
}

impl FaqCorpus {
    /// Build a corpus from grouped categories, preserving category and question order.
    pub fn new(categories: Vec<FaqCategory>) -> Self {
        let entries = categories
            .iter()
            .flat_map(|cat| {
                cat.questions.iter().map(move |faq| FaqEntry {
                    category: cat.category.clone(),
                    question: faq.q.clone(),
                    answer: faq.a.clone(),
                })
            })
            .collect();
        Self {
            categories,
            entries,
        }
    }

    /// Load a corpus from a TOML file. A file with no questions is rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CorpusFile = toml::from_str(&content)
            .map_err(|e| HelpdeskError::Corpus(format!("{}: {}", path.display(), e)))?;
        let corpus = Self::new(file.categories);
        if corpus.is_empty() {
            return Err(HelpdeskError::Corpus(format!(
                "{} contains no FAQ questions",
                path.display()
            )));
        }
        info!(
            path = %path.display(),
            categories = corpus.categories.len(),
            entries = corpus.entries.len(),
            "FAQ corpus loaded"
        );
        Ok(corpus)
    }

    /// Grouped form, in corpus order.
    pub fn categories(&self) -> &[FaqCategory] {
        &self.categories
    }

    /// Flattened entries, in corpus order.
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The default support corpus shipped with the service.
    pub fn builtin() -> Self {
        fn category(name: &str, questions: &[(&str, &str)]) -> FaqCategory {
            FaqCategory {
                category: name.to_string(),
                questions: questions
                    .iter()
                    .map(|(q, a)| FaqQuestion {
                        q: q.to_string(),
                        a: a.to_string(),
                    })
                    .collect(),
            }
        }

        Self::new(vec![
            category(
                "Account",
                &[
                    (
                        "how to reset password",
                        "To reset your password, go to Settings > Security > Reset Password. You'll receive a verification code via email.",
                    ),
                    (
                        "change email address",
                        "You can update your email in Settings > Profile > Contact Information. Verify your new email to complete the change.",
                    ),
                    (
                        "delete account",
                        "To delete your account, go to Settings > Privacy > Delete Account. Note: This action is permanent and cannot be undone.",
                    ),
                ],
            ),
            category(
                "Billing",
                &[
                    (
                        "payment methods",
                        "We accept credit cards (Visa, Mastercard, AmEx), PayPal, and bank transfers. You can manage payment methods in Billing > Payment Options.",
                    ),
                    (
                        "refund policy",
                        "Refunds are available within 30 days of purchase. Go to Billing > Order History > Request Refund. Processing takes 5-7 business days.",
                    ),
                    (
                        "invoice download",
                        "Download invoices from Billing > Invoices. Select the period and click Download PDF.",
                    ),
                ],
            ),
            category(
                "Technical",
                &[
                    (
                        "app not working",
                        "Try these steps: 1) Clear browser cache, 2) Update to latest version, 3) Disable browser extensions, 4) Try incognito mode.",
                    ),
                    (
                        "slow performance",
                        "Performance issues can be caused by: network connectivity, outdated browser, too many open tabs. Try closing unused tabs and restarting your browser.",
                    ),
                    (
                        "login error",
                        "If you see a login error: 1) Check your credentials, 2) Clear cookies, 3) Reset password if needed, 4) Contact support if issue persists.",
                    ),
                ],
            ),
            category(
                "Features",
                &[
                    (
                        "export data",
                        "Export your data from Settings > Data Management > Export. Choose format (CSV, JSON, PDF) and select date range.",
                    ),
                    (
                        "integrate api",
                        "API integration: Get your API key from Developer > API Keys. View documentation at docs.example.com/api for implementation guide.",
                    ),
                    (
                        "mobile app",
                        "Our mobile app is available on iOS App Store and Google Play Store. Download and login with your existing credentials.",
                    ),
                ],
            ),
        ])
    }
}

impl Default for FaqCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}
