//! Search prompt construction

use chrono::NaiveDate;

use super::calendar::active_tournaments;

/// Formats a date the way the prompt spells it out, e.g. `Friday, January 9, 2026`.
pub fn format_prompt_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Builds the instruction sent to the generative search API for `date`.
///
/// The prompt names the tournaments the calendar expects to be running and
/// pins the output format the content validator later checks for.
pub fn build_prompt(date: NaiveDate) -> String {
    let tournaments = active_tournaments(date);
    let today = format_prompt_date(date);

    format!(
        r###"Search the web for tennis match results from today {today}.

Tournaments: {tournaments}

RULES:
- Start your response with "## 🏆" immediately
- NO introduction like "Here are the results" or "It is January..."
- NO explanation, just the formatted scores

FORMAT:
## 🏆 Tournament Name
- Player1 def. Player2: 6-4, 6-3 ✓
- Player3 vs Player4: 6-2, 3-1 🔴 LIVE

Use ✓ for completed, 🔴 LIVE for in-progress."###
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prompt_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(format_prompt_date(date), "Friday, January 9, 2026");

        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_prompt_date(date), "Monday, October 19, 2026");
    }

    #[test]
    fn test_prompt_embeds_date_and_tournaments() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
        let prompt = build_prompt(date);

        assert!(prompt.starts_with(
            "Search the web for tennis match results from today Thursday, September 3, 2026."
        ));
        assert!(prompt.contains("\n\nTournaments: US Open, Laver Cup\n\n"));
    }

    #[test]
    fn test_full_prompt_for_fixed_date() {
        let prompt = build_prompt(NaiveDate::from_ymd_opt(2026, 1, 9).unwrap());

        let expected = "Search the web for tennis match results from today Friday, January 9, 2026.\n\
\n\
Tournaments: United Cup, ATP Hong Kong Open, ASB Classic Auckland, Brisbane International\n\
\n\
RULES:\n\
- Start your response with \"## 🏆\" immediately\n\
- NO introduction like \"Here are the results\" or \"It is January...\"\n\
- NO explanation, just the formatted scores\n\
\n\
FORMAT:\n\
## 🏆 Tournament Name\n\
- Player1 def. Player2: 6-4, 6-3 ✓\n\
- Player3 vs Player4: 6-2, 3-1 🔴 LIVE\n\
\n\
Use ✓ for completed, 🔴 LIVE for in-progress.";

        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_prompt_pins_output_format() {
        let prompt = build_prompt(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());

        assert!(prompt.contains("- Start your response with \"## 🏆\" immediately"));
        assert!(prompt.contains("## 🏆 Tournament Name\n- Player1 def. Player2: 6-4, 6-3 ✓"));
        assert!(prompt.ends_with("Use ✓ for completed, 🔴 LIVE for in-progress."));
    }
}
