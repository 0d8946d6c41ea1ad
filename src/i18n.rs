//! Static label tables for the three display languages.

use phf::phf_map;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Esp,
    Eng,
    Cat,
}

impl Language {
    pub fn all() -> [Self; 3] {
        [Self::Cat, Self::Eng, Self::Esp]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Esp => "ESP",
            Self::Eng => "ENG",
            Self::Cat => "CAT",
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Self::Eng => '.',
            Self::Esp | Self::Cat => ',',
        }
    }

    fn labels(&self) -> &'static phf::Map<&'static str, &'static str> {
        match self {
            Self::Esp => &ESP,
            Self::Eng => &ENG,
            Self::Cat => &CAT,
        }
    }

    /// Label for `key`, or the key itself when the table lacks it
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        match self.labels().get(key) {
            Some(label) => *label,
            None => {
                tracing::debug!("Missing {} label for key {}", self.code(), key);
                key
            }
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "esp" | "es" => Ok(Self::Esp),
            "eng" | "en" => Ok(Self::Eng),
            "cat" | "ca" => Ok(Self::Cat),
            other => Err(format!("Unknown language '{}'. Use esp, eng or cat", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Two-decimal per-match average using the language's decimal separator.
///
/// Ties round up ("0.125" shows as "0.13"), unlike `{:.2}` which rounds
/// them to even.
pub fn format_average(value: f64, lang: Language) -> String {
    let hundredths = (value.max(0.0) * 100.0).round() as u64;
    format!(
        "{}{}{:02}",
        hundredths / 100,
        lang.decimal_separator(),
        hundredths % 100
    )
}

static ESP: phf::Map<&'static str, &'static str> = phf_map! {
    "sidebar.total" => "TOTAL",
    "sidebar.season" => "TEMP.",
    "sidebar.all" => "Todas",
    "stats.goals" => "Goles",
    "stats.average" => "Promedio",
    "stats.hat_trick" => "Hat-tricks",
    "stats.braces" => "Dobletes",
    "stats.assists" => "Asistencias",
    "stats.matches" => "Partidos",
    "stats.titles" => "Títulos",
    "sections.stats" => "Estadísticas",
    "sections.teams" => "Equipos",
    "sections.career" => "Trayectoria",
    "sections.player_data" => "Datos del jugador",
    "teams_card.played" => "PJ",
    "teams_card.goals" => "goles",
    "teams_card.assists" => "asist.",
    "table.season" => "Temporada",
    "table.team" => "Equipo",
    "table.competition" => "Competición",
    "table.played" => "PJ",
    "table.goals" => "Goles",
    "table.assists" => "Asist.",
    "table.titles" => "Títulos",
    "player_data.position" => "Posición",
    "player_data.jersey_number" => "Dorsal",
    "player_data.birth_date" => "Fecha de nacimiento",
    "player_data.birth_place" => "Lugar de nacimiento",
    "player_data.height" => "Altura",
    "player_data.nationality" => "Nacionalidad",
    "player_data.current_club" => "Club actual",
    "player_data.contract_until" => "Contrato hasta",
    "footer.jersey" => "Dorsal",
    "empty.selection" => "Sin datos para esta selección.",
};

static ENG: phf::Map<&'static str, &'static str> = phf_map! {
    "sidebar.total" => "TOTAL",
    "sidebar.season" => "SEASON",
    "sidebar.all" => "All",
    "stats.goals" => "Goals",
    "stats.average" => "Average",
    "stats.hat_trick" => "Hat-tricks",
    "stats.braces" => "Braces",
    "stats.assists" => "Assists",
    "stats.matches" => "Matches",
    "stats.titles" => "Titles",
    "sections.stats" => "Statistics",
    "sections.teams" => "Teams",
    "sections.career" => "Career",
    "sections.player_data" => "Player data",
    "teams_card.played" => "MP",
    "teams_card.goals" => "goals",
    "teams_card.assists" => "assists",
    "table.season" => "Season",
    "table.team" => "Team",
    "table.competition" => "Competition",
    "table.played" => "MP",
    "table.goals" => "Goals",
    "table.assists" => "Assists",
    "table.titles" => "Titles",
    "player_data.position" => "Position",
    "player_data.jersey_number" => "Shirt number",
    "player_data.birth_date" => "Date of birth",
    "player_data.birth_place" => "Place of birth",
    "player_data.height" => "Height",
    "player_data.nationality" => "Nationality",
    "player_data.current_club" => "Current club",
    "player_data.contract_until" => "Contract until",
    "footer.jersey" => "Shirt",
    "empty.selection" => "No data for this selection.",
};

static CAT: phf::Map<&'static str, &'static str> = phf_map! {
    "sidebar.total" => "TOTAL",
    "sidebar.season" => "TEMP.",
    "sidebar.all" => "Totes",
    "stats.goals" => "Gols",
    "stats.average" => "Mitjana",
    "stats.hat_trick" => "Hat-tricks",
    "stats.braces" => "Doblets",
    "stats.assists" => "Assistències",
    "stats.matches" => "Partits",
    "stats.titles" => "Títols",
    "sections.stats" => "Estadístiques",
    "sections.teams" => "Equips",
    "sections.career" => "Trajectòria",
    "sections.player_data" => "Dades del jugador",
    "teams_card.played" => "PJ",
    "teams_card.goals" => "gols",
    "teams_card.assists" => "assist.",
    "table.season" => "Temporada",
    "table.team" => "Equip",
    "table.competition" => "Competició",
    "table.played" => "PJ",
    "table.goals" => "Gols",
    "table.assists" => "Assist.",
    "table.titles" => "Títols",
    "player_data.position" => "Posició",
    "player_data.jersey_number" => "Dorsal",
    "player_data.birth_date" => "Data de naixement",
    "player_data.birth_place" => "Lloc de naixement",
    "player_data.height" => "Alçada",
    "player_data.nationality" => "Nacionalitat",
    "player_data.current_club" => "Club actual",
    "player_data.contract_until" => "Contracte fins",
    "footer.jersey" => "Dorsal",
    "empty.selection" => "Sense dades per a aquesta selecció.",
};
