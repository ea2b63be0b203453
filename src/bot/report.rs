use crate::bot::markdown::md;
use crate::domain::stats::{DerivedStats, Rating};
use crate::domain::submission::{AnswerRecord, SubmissionRequest};

pub const MAX_AREAS_TO_IMPROVE: usize = 3;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━";

/// Everything the rendered report needs, already derived.
pub struct ReportContext<'a> {
    pub title: &'a str,
    pub name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub time_used: &'a str,
    pub stats: DerivedStats,
    pub score: f64,
    pub total: u32,
    pub percentage: f64,
    pub rating: Rating,
    pub areas_to_improve: Vec<&'a AnswerRecord>,
}

impl<'a> ReportContext<'a> {
    pub fn new(
        title: &'a str,
        request: &'a SubmissionRequest,
        stats: DerivedStats,
        date: &'a str,
        time: &'a str,
    ) -> Self {
        Self {
            title,
            name: &request.name,
            date,
            time,
            time_used: &request.time_used,
            stats,
            score: request.score,
            total: request.total,
            percentage: request.percentage,
            rating: Rating::from_percentage(request.percentage),
            areas_to_improve: request.incorrect_answers(MAX_AREAS_TO_IMPROVE),
        }
    }
}

/// Renders numbers the way the web client prints them: `80`, not `80.0`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn render_report(ctx: &ReportContext<'_>) -> String {
    let total = ctx.total;
    let mut msg = format!("📊 *{}*\n\n", ctx.title);

    msg.push_str(&format!("*Student:* {}\n", md(ctx.name)));
    msg.push_str(&format!("*Date:* {}\n", ctx.date));
    msg.push_str(&format!("*Time:* {}\n", ctx.time));
    msg.push_str(&format!("*Duration:* {}\n\n", md(ctx.time_used)));

    msg.push_str("*SCORE SUMMARY*\n");
    msg.push_str(DIVIDER);
    msg.push('\n');
    msg.push_str(&format!("✅ Correct: {}/{}\n", ctx.stats.correct_count, total));
    msg.push_str(&format!("❌ Wrong: {}/{}\n", ctx.stats.wrong_count, total));
    msg.push_str(&format!(
        "🎯 Score: {}/{} ({}%)\n",
        format_number(ctx.score),
        total,
        format_number(ctx.percentage)
    ));
    msg.push_str(&format!("📈 Accuracy: {}%\n\n", ctx.stats.accuracy));

    msg.push_str(&format!(
        "*Performance:* {} {}\n\n",
        ctx.rating.emoji(),
        ctx.rating.as_str()
    ));

    if !ctx.areas_to_improve.is_empty() {
        msg.push_str("*AREAS TO IMPROVE:*\n");
        for (index, answer) in ctx.areas_to_improve.iter().enumerate() {
            msg.push_str(&format!("{}. {}\n", index + 1, md(&answer.question)));
            msg.push_str(&format!("   ❌ Student: {}\n", md(&answer.user_answer)));
            msg.push_str(&format!("   ✅ Correct: {}\n", md(&answer.correct_answer)));
            msg.push_str(&format!("   💡 {}\n\n", md(&answer.explanation)));
        }
    }

    msg.push_str(DIVIDER);
    msg.push('\n');
    msg.push_str("Test completed! Review your answers for better understanding.");
    msg
}
