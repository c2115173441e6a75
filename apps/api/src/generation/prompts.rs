// Prompt constants for application generation.
// The section labels here must match the markers the segmenter looks for.

/// System prompt: insists on the two-section layout.
pub const GENERATION_SYSTEM: &str = "You are a career strategist who writes job applications \
    that get candidates interviews. You know what hiring managers look for and how to present \
    a candidate's real background convincingly. \
    Always answer in exactly the format requested, with both sections present and labelled.";

/// Generation prompt template. Replace `{job_description}` and `{user_resume}` before sending.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Read the job posting and the candidate's resume below, then write a cover letter and a tailored resume for this specific role.

JOB POSTING:
{job_description}

CANDIDATE RESUME:
{user_resume}

Respond in exactly this format, with both labels on their own lines:

COVER LETTER:
[Two or three paragraphs. Open with "Dear Hiring Manager". Show genuine interest in this role, connect the candidate's background to the posting's requirements, keep the language natural, and close with a clear call to action and a professional sign-off such as "Sincerely" or "Best regards".]

TAILORED RESUME:
[A complete resume using these section headings in this order:

NAME
CONTACT INFORMATION
PROFESSIONAL SUMMARY
PROFESSIONAL EXPERIENCE
TECHNICAL SKILLS
EDUCATION
CERTIFICATIONS

Under PROFESSIONAL EXPERIENCE use "Company, Location | Title | Dates" lines followed by bullet points with quantified achievements. Only use facts from the candidate's resume. The resume must be ready to send as-is.]"#;
