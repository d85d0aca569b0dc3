//! System instruction builder for advice requests.
//!
//! Frames the model as the FundSight advisor and embeds the financial
//! grounding data as JSON inside XML tag boundaries so the model can
//! distinguish instructions from data.
//!
//! Layout:
//! ```text
//! <role>You are FundSight...</role>
//! <transactions>[...]</transactions>
//! <accounts>[...]</accounts>
//! <budgets>[...]</budgets>
//! ```

use fundsight_types::finance::FinancialContext;

/// Builds the system instruction for one advice request.
pub struct AdvicePromptBuilder;

impl AdvicePromptBuilder {
    /// Assemble the system instruction from the financial context.
    ///
    /// Empty collections are skipped; the role section is always
    /// present.
    pub fn build(context: &FinancialContext) -> String {
        let mut sections = Vec::with_capacity(4);

        sections.push(
            "<role>\n\
             You are FundSight, a friendly personal-finance advisor. Ground every \
             answer in the user's financial data below. Amounts are in INR. Be \
             concise and practical, and suggest consulting a professional before \
             major financial decisions.\n\
             </role>"
                .to_string(),
        );

        if !context.transactions.is_empty() {
            sections.push(format!(
                "<transactions>\n{}\n</transactions>",
                Self::to_json(&context.transactions)
            ));
        }

        if !context.accounts.is_empty() {
            sections.push(format!(
                "<accounts>\n{}\n</accounts>",
                Self::to_json(&context.accounts)
            ));
        }

        if !context.budgets.is_empty() {
            sections.push(format!(
                "<budgets>\n{}\n</budgets>",
                Self::to_json(&context.budgets)
            ));
        }

        sections.join("\n\n")
    }

    fn to_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
    }
}
