//! Chart colours and value bands.

use egui::Color32;

pub const PRIMARY: Color32 = Color32::from_rgb(0x36, 0x60, 0x92);
pub const BOWLING: Color32 = Color32::from_rgb(0x70, 0xAD, 0x47);
pub const WINS: Color32 = Color32::from_rgb(0x9B, 0x59, 0xB6);

pub const WON: Color32 = Color32::from_rgb(0x2E, 0xCC, 0x71);
pub const LOST: Color32 = Color32::from_rgb(0xE7, 0x4C, 0x3C);
pub const NEUTRAL: Color32 = Color32::from_rgb(0x95, 0xA5, 0xA6);

const GOLD: Color32 = Color32::from_rgb(0xFF, 0xD7, 0x00);
const SILVER: Color32 = Color32::from_rgb(0xC0, 0xC0, 0xC0);
const BRONZE: Color32 = Color32::from_rgb(0xCD, 0x7F, 0x32);

const TEAM_GOOD: Color32 = Color32::from_rgb(0x34, 0x98, 0xDB);
const TEAM_MODERATE: Color32 = Color32::from_rgb(0xF3, 0x9C, 0x12);

const VENUE_TOP: Color32 = Color32::from_rgb(0xFF, 0x6B, 0x6B);
const VENUE_HIGH: Color32 = Color32::from_rgb(0x4E, 0xCD, 0xC4);
const VENUE_MID: Color32 = Color32::from_rgb(0x45, 0xB7, 0xD1);
const VENUE_LOW: Color32 = Color32::from_rgb(0x96, 0xCE, 0xB4);

/// Slice colours for the toss outcome pie.
pub const OUTCOME_COLORS: [Color32; 3] = [WON, LOST, TEAM_GOOD];

/// Slice colours for the dismissal chart, cycled.
pub const DISMISSAL_COLORS: [Color32; 8] = [
    VENUE_TOP,
    VENUE_HIGH,
    VENUE_MID,
    VENUE_LOW,
    Color32::from_rgb(0xFF, 0xE6, 0x6D),
    Color32::from_rgb(0xFF, 0x8B, 0x94),
    Color32::from_rgb(0xA8, 0xE6, 0xCF),
    Color32::from_rgb(0xFF, 0xD3, 0xA5),
];

/// Gold, silver and bronze for ranks 1 to 3.
pub fn rank_color(rank: usize) -> Color32 {
    match rank {
        1 => GOLD,
        2 => SILVER,
        3 => BRONZE,
        _ => PRIMARY,
    }
}

/// Band for team performance after winning the toss.
pub fn team_toss_color(value: f64, max: f64) -> Color32 {
    if max == 0.0 {
        return NEUTRAL;
    }
    if value == 0.0 {
        return LOST;
    }
    let ratio = value / max;
    if ratio > 0.7 {
        WON
    } else if ratio > 0.5 {
        TEAM_GOOD
    } else if ratio > 0.3 {
        TEAM_MODERATE
    } else {
        LOST
    }
}

pub fn venue_color(value: f64, max: f64) -> Color32 {
    if max == 0.0 {
        return VENUE_LOW;
    }
    let ratio = value / max;
    if ratio > 0.8 {
        VENUE_TOP
    } else if ratio > 0.6 {
        VENUE_HIGH
    } else if ratio > 0.4 {
        VENUE_MID
    } else {
        VENUE_LOW
    }
}

pub fn cycle(colors: &[Color32], index: usize) -> Color32 {
    colors[index % colors.len()]
}
