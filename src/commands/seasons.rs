use super::RenderContext;
use crate::formatting::format_header;
use crate::i18n::Language;

/// List the values accepted by `--team`, `--season` and `--lang`
pub fn format_seasons(ctx: &RenderContext) -> String {
    let mut output = String::new();

    output.push_str(&format_header(ctx.label("table.team"), false, ctx.display));
    for filter in ctx.career.team_filters() {
        output.push_str(&format!("  {}\n", filter));
    }

    output.push('\n');
    output.push_str(&format_header(ctx.label("table.season"), false, ctx.display));
    output.push_str(&format!("  {}\n", ctx.label("sidebar.all")));
    for code in ctx.career.seasons_short() {
        output.push_str(&format!("  {}\n", code));
    }

    output.push('\n');
    let languages: Vec<&str> = Language::all().iter().map(Language::code).collect();
    output.push_str(&languages.join(" "));
    output.push('\n');
    output
}

pub fn run(ctx: &RenderContext) {
    println!("\n{}", format_seasons(ctx));
}
