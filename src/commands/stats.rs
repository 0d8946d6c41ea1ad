use super::RenderContext;
use crate::formatting::{format_header, pad_left, pad_right};
use crate::i18n::format_average;
use crate::layout_constants::{STAT_LABEL_WIDTH, STAT_VALUE_WIDTH};
use crate::stats::per_match;
use crate::types::{TeamFilter, Totals};

/// Selection line under the section title, e.g. "TOTAL · TEMP. 24/25"
fn selection_line(ctx: &RenderContext, team: &TeamFilter, season_short: Option<&str>) -> String {
    let season = season_short.unwrap_or_else(|| ctx.label("sidebar.all"));
    format!(
        "{} {} {} {}",
        team.key(),
        ctx.display.box_chars.bullet,
        ctx.label("sidebar.season"),
        season
    )
}

fn stat_line(output: &mut String, label: &str, value: u64) {
    output.push_str(&format!(
        "{}{}\n",
        pad_right(label, STAT_LABEL_WIDTH),
        pad_left(&value.to_string(), STAT_VALUE_WIDTH)
    ));
}

fn stat_line_with_average(
    output: &mut String,
    ctx: &RenderContext,
    label: &str,
    value: u64,
    matches: u64,
) {
    let average = format_average(per_match(value, matches), ctx.lang);
    output.push_str(&format!(
        "{}{}   {} {}\n",
        pad_right(label, STAT_LABEL_WIDTH),
        pad_left(&value.to_string(), STAT_VALUE_WIDTH),
        ctx.label("stats.average"),
        average
    ));
}

/// Format the totals block: goals, hat-tricks and braces, assists, matches, titles
pub fn format_totals(output: &mut String, ctx: &RenderContext, totals: &Totals) {
    stat_line_with_average(output, ctx, ctx.label("stats.goals"), totals.goals, totals.matches);
    output.push_str(&format!(
        "  {} {}   {} {}\n",
        totals.hat_tricks,
        ctx.label("stats.hat_trick"),
        totals.braces,
        ctx.label("stats.braces")
    ));
    stat_line_with_average(
        output,
        ctx,
        ctx.label("stats.assists"),
        totals.assists,
        totals.matches,
    );
    stat_line(output, ctx.label("stats.matches"), totals.matches);
    stat_line(output, ctx.label("stats.titles"), totals.titles);
}

pub fn format_stats(ctx: &RenderContext, team: &TeamFilter, season_short: Option<&str>) -> String {
    let totals = ctx.career.totals_for(team, season_short);

    let mut output = String::new();
    output.push_str(&format_header(ctx.label("sections.stats"), true, ctx.display));
    output.push_str(&selection_line(ctx, team, season_short));
    output.push_str("\n\n");

    if ctx.career.filter(team, season_short).is_empty() {
        output.push_str(ctx.label("empty.selection"));
        output.push('\n');
    }
    format_totals(&mut output, ctx, &totals);
    output
}

pub fn run(ctx: &RenderContext, team: &TeamFilter, season_short: Option<&str>) {
    println!("\n{}", format_stats(ctx, team, season_short));
}
