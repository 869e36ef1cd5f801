//! Review generation prompt.
//!
//! One user-role message; no system prompt. The model is asked for review
//! text only, so the response content is used as-is after trimming.

use super::types::GenerationRequest;

pub const MAX_TOKENS: u32 = 200;
pub const TEMPERATURE: f64 = 0.7;

/// Build the user message for a generation request.
pub fn build_review_prompt(request: &GenerationRequest) -> String {
    let business_type = request.business_type.as_str();
    let keywords = request.business_type.prompt_keywords().join(", ");

    let (staff_line, staff_bullet) = match &request.staff_name {
        Some(name) => (
            format!("Staff Member: {}\n", name),
            "- Naturally includes and thanks the staff member by name\n",
        ),
        None => (String::new(), ""),
    };

    format!(
        "You are a helpful assistant that generates authentic Google Maps reviews for jewelry businesses.\n\n\
Business: {name}\n\
Type: {business_type}\n\
{staff_line}\
Generate a positive, authentic-sounding Google Maps review that:\n\
- Mentions the business naturally\n\
{staff_bullet}\
- Uses specific jewelry terminology appropriate for {business_type}\n\
- Sounds genuine and personal\n\
- Is 2-3 sentences long\n\
- Includes specific positive aspects\n\n\
Example keywords for {business_type}: {keywords}\n\n\
Generate only the review text, no other content.",
        name = request.business_name,
    )
}
