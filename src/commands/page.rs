use super::{career, player, stats, teams, RenderContext};
use crate::types::TeamFilter;

/// Every section in page order: statistics, teams, career, player data
pub fn format_page(ctx: &RenderContext, team: &TeamFilter, season_short: Option<&str>) -> String {
    [
        stats::format_stats(ctx, team, season_short),
        teams::format_teams(ctx),
        career::format_career(ctx, &TeamFilter::All, None),
        player::format_player(ctx),
        player::format_footer(ctx),
    ]
    .join("\n")
}

pub fn run(ctx: &RenderContext, team: &TeamFilter, season_short: Option<&str>) {
    println!("\n{}\n", format_page(ctx, team, season_short));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{ascii_display, builtin_career};
    use crate::i18n::Language;

    #[test]
    fn test_format_page_section_order() {
        let career = builtin_career();
        let display = ascii_display();
        let ctx = RenderContext::new(&career, Language::Cat, &display);
        let output = format_page(&ctx, &TeamFilter::All, None);

        let stats = output.find("Estadístiques").unwrap();
        let teams = output.find("Equips").unwrap();
        let career_pos = output.find("Trajectòria").unwrap();
        let player = output.find("Dades del jugador").unwrap();
        assert!(stats < teams && teams < career_pos && career_pos < player);
        assert!(output.ends_with("Jaime - Dorsal 10"));
    }

    #[test]
    fn test_format_page_filter_only_applies_to_stats() {
        let career = builtin_career();
        let display = ascii_display();
        let ctx = RenderContext::new(&career, Language::Eng, &display);
        let team = TeamFilter::Club("Panas Fc".to_string());
        let output = format_page(&ctx, &team, None);

        assert!(output.contains("Panas Fc - SEASON All"));
        assert!(output.contains("2019/20"));
    }
}
