// Resume analysis prompt templates.

/// Characters of resume text sent for analysis.
pub const RESUME_PARSE_BUDGET: usize = 800;

/// Resume parse prompt. Replace `{json_only}` and `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Analyze the following resume text and extract the 'Job Role' (e.g., Python Developer, Data Scientist) and a list of 'Key Skills'.
{json_only}
Use exactly this shape:
{
    "role": "extracted role",
    "skills": ["skill1", "skill2", "skill3"]
}

Resume Text:
{resume_text}"#;
