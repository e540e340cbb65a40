// All LLM prompt constants and fallback templates for the Generation module.

/// Marker carried by every fallback text so readers can tell it was not model-written.
pub const FALLBACK_MARKER: &str = "Generated via Fallback Mode";

/// Cover letter input budgets (characters).
pub const COVER_LETTER_JD_BUDGET: usize = 400;
pub const COVER_LETTER_RESUME_BUDGET: usize = 500;

/// Interview question input budgets (characters) and job count.
pub const INTERVIEW_JD_BUDGET: usize = 300;
pub const INTERVIEW_RESUME_BUDGET: usize = 600;
pub const INTERVIEW_MAX_JOBS: usize = 3;

/// Cover letter prompt. Replace: {role}, {company}, {job_description}, {resume_text}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional and personalized cover letter for the following job.
Role: {role}
Company: {company}
Job Description: {job_description}

Candidate Resume (excerpt):
{resume_text}

Instructions:
- Be concise (max 180 words)
- Mention specific skills that match the job description
- Be professional and enthusiastic
- Do NOT use generic phrases like "I am writing to express""#;

/// Static cover letter. Replace: {role}, {company}, {marker}
pub const COVER_LETTER_FALLBACK_TEMPLATE: &str = r#"Dear Hiring Manager,

I am excited to apply for the {role} position at {company}. Based on my experience and skills outlined in my resume, I am confident I can make a meaningful contribution to your team.

My technical background aligns well with the requirements of this role. I am particularly drawn to {company}'s mission and believe my skills would be a strong match.

I look forward to the opportunity to discuss how I can contribute. Thank you for your consideration.

Sincerely,
Applicant
(Note: {marker}, text generation rate limit reached)"#;

/// Interview question prompt. Replace: {job_summaries}, {resume_text}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"You are an expert interview coach. Generate 10 targeted interview questions for a candidate who just applied to the following jobs.

JOBS APPLIED TO:
{job_summaries}

CANDIDATE RESUME (excerpt):
{resume_text}

Generate 10 specific interview questions that:
1. Match the technical skills required in the actual job descriptions above
2. Reference the candidate's actual experience from their resume
3. Include both technical and behavioral questions
4. Are specific, not generic

Format as a numbered list. Each question should be on its own line."#;

/// Static interview questions. Replace: {role}, {marker}
pub const INTERVIEW_FALLBACK_TEMPLATE: &str = r#"**Standard Interview Questions for {role}** *({marker}, text generation rate limit reached)*

1. Walk me through your experience as a {role}.
2. What tools and technologies do you use daily in your work as a {role}?
3. Describe a challenging project you completed. What was your role and what did you learn?
4. How do you stay up-to-date with the latest trends in your field?
5. Describe a situation where you had to debug a difficult problem under pressure.
6. How do you approach working in a team with different skill sets?
7. Tell me about a time you disagreed with a technical decision. How was it resolved?
8. What is your experience with code review and best practices?
9. How do you handle multiple competing deadlines?
10. Do you have any questions for the team about the role or company culture?"#;
