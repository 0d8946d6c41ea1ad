use super::RenderContext;
use crate::formatting::{format_header, pad_right};
use crate::layout_constants::PLAYER_LABEL_WIDTH;

pub fn format_player(ctx: &RenderContext) -> String {
    let player = ctx.career.player();
    let number = player.number.to_string();

    let fields: [(&str, &str); 8] = [
        ("player_data.position", player.position.as_str()),
        ("player_data.jersey_number", number.as_str()),
        ("player_data.birth_date", player.birth_date.as_str()),
        ("player_data.birth_place", player.birth_place.as_str()),
        ("player_data.height", player.height.as_str()),
        ("player_data.nationality", player.nationality.as_str()),
        ("player_data.current_club", player.current_club.as_str()),
        ("player_data.contract_until", player.contract_until.as_str()),
    ];

    let title = format!("{} STATS", player.name.to_uppercase());
    let mut output = String::new();
    output.push_str(&format_header(&title, true, ctx.display));
    output.push('\n');
    output.push_str(&format_header(ctx.label("sections.player_data"), false, ctx.display));
    for (key, value) in fields {
        output.push_str(&format!(
            "{}{}\n",
            pad_right(ctx.lang.label(key), PLAYER_LABEL_WIDTH),
            value
        ));
    }
    output
}

/// Footer line, e.g. "Jaime · Dorsal 10"
pub fn format_footer(ctx: &RenderContext) -> String {
    let player = ctx.career.player();
    format!(
        "{} {} {} {}",
        player.name,
        ctx.display.box_chars.bullet,
        ctx.label("footer.jersey"),
        player.number
    )
}

pub fn run(ctx: &RenderContext) {
    println!("\n{}", format_player(ctx));
    println!("{}\n", format_footer(ctx));
}
