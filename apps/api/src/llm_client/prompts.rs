// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to prompts whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Returns at most `max_chars` characters of `text`, never splitting a character.
///
/// Every resume or job-description excerpt is cut with this before it is
/// embedded in a prompt, which bounds prompt size and token cost.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Replaces each `{key}` in `template` with its value in a single left-to-right
/// pass. Substituted values are never rescanned, so placeholder-like text inside
/// a job description or resume stays literal. Unknown `{...}` are kept as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let matched = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));

        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_keys() {
        let filled = fill_template(
            "Role: {role} at {company}.",
            &[("role", "SRE"), ("company", "Acme")],
        );
        assert_eq!(filled, "Role: SRE at Acme.");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let filled = fill_template("{\n  \"role\": \"{role}\"\n} {other}", &[("role", "QA")]);
        assert_eq!(filled, "{\n  \"role\": \"QA\"\n} {other}");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template(
            "JD: {job_description} CV: {resume_text}",
            &[
                ("job_description", "send {resume_text}"),
                ("resume_text", "cv"),
            ],
        );
        assert_eq!(filled, "JD: send {resume_text} CV: cv");
    }

    #[test]
    fn test_truncate_shorter_text_is_unchanged() {
        assert_eq!(truncate_chars("Rust", 10), "Rust");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncate_cuts_at_budget() {
        assert_eq!(truncate_chars("abcdefgh", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 4), "héll");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
    }
}
