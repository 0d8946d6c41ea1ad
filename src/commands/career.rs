use super::RenderContext;
use crate::formatting::{format_header, pad_left, pad_right};
use crate::layout_constants::{
    COMPETITION_COL_WIDTH, NUMBER_COL_WIDTH, SEASON_COL_WIDTH, SEASON_TABLE_WIDTH,
    TEAM_COL_WIDTH,
};
use crate::types::{SeasonRecord, TeamFilter};

fn push_row(output: &mut String, text: [&str; 3], numbers: [&str; 4]) {
    output.push_str(&pad_right(text[0], SEASON_COL_WIDTH));
    output.push_str(&pad_right(text[1], TEAM_COL_WIDTH));
    output.push_str(&pad_right(text[2], COMPETITION_COL_WIDTH));
    for number in numbers {
        output.push(' ');
        output.push_str(&pad_left(number, NUMBER_COL_WIDTH));
    }
    output.push('\n');
}

/// Format the season-by-season table
pub fn format_season_table(ctx: &RenderContext, rows: &[&SeasonRecord]) -> String {
    let mut output = String::new();

    push_row(
        &mut output,
        [
            ctx.label("table.season"),
            ctx.label("table.team"),
            ctx.label("table.competition"),
        ],
        [
            ctx.label("table.played"),
            ctx.label("table.goals"),
            ctx.label("table.assists"),
            ctx.label("table.titles"),
        ],
    );
    output.push_str(&format!(
        "{}\n",
        ctx.display.box_chars.horizontal.repeat(SEASON_TABLE_WIDTH)
    ));

    for row in rows {
        push_row(
            &mut output,
            [row.season.as_str(), row.club.as_str(), row.league.as_str()],
            [
                row.matches.to_string().as_str(),
                row.goals.to_string().as_str(),
                row.assists.to_string().as_str(),
                row.titles.to_string().as_str(),
            ],
        );
    }

    output
}

pub fn format_career(ctx: &RenderContext, team: &TeamFilter, season_short: Option<&str>) -> String {
    let rows = ctx.career.filter(team, season_short);

    let mut output = String::new();
    output.push_str(&format_header(ctx.label("sections.career"), true, ctx.display));
    output.push('\n');
    if rows.is_empty() {
        output.push_str(ctx.label("empty.selection"));
        output.push('\n');
        return output;
    }
    output.push_str(&format_season_table(ctx, &rows));
    output
}

pub fn run(ctx: &RenderContext, team: &TeamFilter, season_short: Option<&str>) {
    println!("\n{}", format_career(ctx, team, season_short));
}
