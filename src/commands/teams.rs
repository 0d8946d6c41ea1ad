use super::RenderContext;
use crate::formatting::format_header;
use crate::stats::ClubSummary;

fn format_club_card(output: &mut String, ctx: &RenderContext, summary: &ClubSummary) {
    output.push_str(&format!("{}\n", summary.club));
    output.push_str(&format!("  {}\n", summary.league));
    output.push_str(&format!(
        "  {} {}   {} {}   {} {}\n",
        summary.totals.matches,
        ctx.label("teams_card.played"),
        summary.totals.goals,
        ctx.label("teams_card.goals"),
        summary.totals.assists,
        ctx.label("teams_card.assists")
    ));
}

pub fn format_teams(ctx: &RenderContext) -> String {
    let mut output = String::new();
    output.push_str(&format_header(ctx.label("sections.teams"), true, ctx.display));

    for summary in ctx.career.club_summaries() {
        output.push('\n');
        format_club_card(&mut output, ctx, &summary);
    }
    output
}

pub fn run(ctx: &RenderContext) {
    println!("\n{}", format_teams(ctx));
}
