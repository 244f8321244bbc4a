//! Prompt templates for the advice service

use super::DiagnosisSummary;

/// Ask for the four-section treatment advice for a diagnosed disease
pub fn treatment_prompt(disease_name: &str) -> String {
    format!(
        r#"Act as a plant pathologist for a banana plant diagnosed with '{disease_name}'.
Provide the following information clearly. Use markdown headings for each section.

### Description
(Provide a brief, easy-to-understand description of this disease.)

### Treatment Plan
(Provide a step-by-step treatment plan. Be specific.)

### Prevention
(Provide a list of preventive measures to avoid this in the future.)

### Generated Treatment Schedule
(Based on your treatment plan, create a detailed, actionable schedule for the next 4-6 weeks in a Markdown table.
Use these exact column headers: | Date (Relative) | Task | Details |
For the date, use relative terms like "Today", "Tomorrow", "Day 7 (Week 1)", "Day 14 (Week 2)", "Continuous".
Each row should represent a single, clear action. Do not use any asterisks or other markdown formatting inside the table cells.)
"#
    )
}

pub const NEWS_PROMPT: &str = r#"Act as an agricultural journalist. Provide a single, recent innovation or news item about banana cultivation.
Format your response with these exact markdown headings:

### Headline
(A short, engaging title for the news item.)

### Summary
(A brief, one-paragraph summary of the news.)
"#;

/// Ask for a progress summary between an original and a follow-up diagnosis
pub fn comparison_prompt(old: &DiagnosisSummary, new: &DiagnosisSummary) -> String {
    format!(
        r#"Act as a plant pathologist analyzing a follow-up diagnosis.
- The original diagnosis was: '{}' with {:.2}% confidence.
- The new diagnosis, after treatment, is: '{}' with {:.2}% confidence.

Provide a concise, one-paragraph summary of the treatment progress.
- If the plant is now healthy, state this clearly and congratulate the user.
- If the disease is the same but confidence is lower, mention the slight improvement.
- If there is no change or it's worse, state this and suggest reviewing the treatment plan.
Start directly with the analysis.
"#,
        old.disease_name, old.confidence, new.disease_name, new.confidence
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::sections::TREATMENT_HEADERS;

    #[test]
    fn test_treatment_prompt_requests_every_header() {
        let prompt = treatment_prompt("Panama Disease");
        assert!(prompt.contains("'Panama Disease'"));
        for header in TREATMENT_HEADERS {
            assert!(prompt.contains(&format!("### {}", header)));
        }
        assert!(prompt.contains("| Date (Relative) | Task | Details |"));
    }

    #[test]
    fn test_comparison_prompt_formats_confidence() {
        let old = DiagnosisSummary::new("Black Sigatoka", 91.234);
        let new = DiagnosisSummary::new("Healthy Banana", 88.0);
        let prompt = comparison_prompt(&old, &new);
        assert!(prompt.contains("'Black Sigatoka' with 91.23% confidence"));
        assert!(prompt.contains("'Healthy Banana' with 88.00% confidence"));
    }
}
