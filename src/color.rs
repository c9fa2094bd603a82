use crate::config::ConfigError;
use bevy::color::palettes::css;
use bevy::color::{Color, Srgba};

/// Parse a CSS color: a named color, "#rgb"/"#rrggbb"/"#rrggbbaa", or rgb()/rgba()
pub fn parse_color(color: &str) -> Result<Color, ConfigError> {
    let trimmed = color.trim();
    let lower = trimmed.to_ascii_lowercase();
    let invalid = || ConfigError::InvalidColor(color.to_string());

    if let Some(srgba) = named_color(&lower) {
        return Ok(Color::Srgba(srgba));
    }

    if let Some(args) = functional_args(&lower) {
        return parse_rgb_args(args).map(Color::Srgba).ok_or_else(invalid);
    }

    Srgba::hex(trimmed).map(Color::Srgba).map_err(|_| invalid())
}

fn named_color(name: &str) -> Option<Srgba> {
    if name == "transparent" {
        return Some(Srgba::NONE);
    }

    NAMED_COLORS
        .binary_search_by(|(key, _)| (*key).cmp(name))
        .ok()
        .map(|index| NAMED_COLORS[index].1)
}

fn functional_args(color: &str) -> Option<&str> {
    let inner = color.strip_suffix(')')?;
    inner
        .strip_prefix("rgba(")
        .or_else(|| inner.strip_prefix("rgb("))
}

/// "255, 0, 0", "255 0 0 / 50%", "100% 0% 0% 0.5"
fn parse_rgb_args(args: &str) -> Option<Srgba> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let (red, green, blue, alpha) = match parts.as_slice() {
        [r, g, b] => (r, g, b, None),
        [r, g, b, a] => (r, g, b, Some(a)),
        _ => return None,
    };

    let alpha = match alpha {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };

    Some(Srgba::new(
        parse_channel(red)?,
        parse_channel(green)?,
        parse_channel(blue)?,
        alpha,
    ))
}

fn parse_channel(value: &str) -> Option<f32> {
    match value.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|p| (p / 100.0).clamp(0.0, 1.0)),
        None => parse_number(value).map(|v| (v / 255.0).clamp(0.0, 1.0)),
    }
}

fn parse_alpha(value: &str) -> Option<f32> {
    match value.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|p| (p / 100.0).clamp(0.0, 1.0)),
        None => parse_number(value).map(|a| a.clamp(0.0, 1.0)),
    }
}

fn parse_number(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Every CSS named color, keyed by its lowercase CSS spelling
const NAMED_COLORS: &[(&str, Srgba)] = &[
    ("aliceblue", css::ALICE_BLUE),
    ("antiquewhite", css::ANTIQUE_WHITE),
    ("aqua", css::AQUA),
    ("aquamarine", css::AQUAMARINE),
    ("azure", css::AZURE),
    ("beige", css::BEIGE),
    ("bisque", css::BISQUE),
    ("black", css::BLACK),
    ("blanchedalmond", css::BLANCHED_ALMOND),
    ("blue", css::BLUE),
    ("blueviolet", css::BLUE_VIOLET),
    ("brown", css::BROWN),
    ("burlywood", css::BURLYWOOD),
    ("cadetblue", css::CADET_BLUE),
    ("chartreuse", css::CHARTREUSE),
    ("chocolate", css::CHOCOLATE),
    ("coral", css::CORAL),
    ("cornflowerblue", css::CORNFLOWER_BLUE),
    ("cornsilk", css::CORNSILK),
    ("crimson", css::CRIMSON),
    ("cyan", css::AQUA),
    ("darkblue", css::DARK_BLUE),
    ("darkcyan", css::DARK_CYAN),
    ("darkgoldenrod", css::DARK_GOLDENROD),
    ("darkgray", css::DARK_GRAY),
    ("darkgreen", css::DARK_GREEN),
    ("darkgrey", css::DARK_GREY),
    ("darkkhaki", css::DARK_KHAKI),
    ("darkmagenta", css::DARK_MAGENTA),
    ("darkolivegreen", css::DARK_OLIVEGREEN),
    ("darkorange", css::DARK_ORANGE),
    ("darkorchid", css::DARK_ORCHID),
    ("darkred", css::DARK_RED),
    ("darksalmon", css::DARK_SALMON),
    ("darkseagreen", css::DARK_SEA_GREEN),
    ("darkslateblue", css::DARK_SLATE_BLUE),
    ("darkslategray", css::DARK_SLATE_GRAY),
    ("darkslategrey", css::DARK_SLATE_GREY),
    ("darkturquoise", css::DARK_TURQUOISE),
    ("darkviolet", css::DARK_VIOLET),
    ("deeppink", css::DEEP_PINK),
    ("deepskyblue", css::DEEP_SKY_BLUE),
    ("dimgray", css::DIM_GRAY),
    ("dimgrey", css::DIM_GREY),
    ("dodgerblue", css::DODGER_BLUE),
    ("firebrick", css::FIRE_BRICK),
    ("floralwhite", css::FLORAL_WHITE),
    ("forestgreen", css::FOREST_GREEN),
    ("fuchsia", css::FUCHSIA),
    ("gainsboro", css::GAINSBORO),
    ("ghostwhite", css::GHOST_WHITE),
    ("gold", css::GOLD),
    ("goldenrod", css::GOLDENROD),
    ("gray", css::GRAY),
    ("green", css::GREEN),
    ("greenyellow", css::GREEN_YELLOW),
    ("grey", css::GREY),
    ("honeydew", css::HONEYDEW),
    ("hotpink", css::HOT_PINK),
    ("indianred", css::INDIAN_RED),
    ("indigo", css::INDIGO),
    ("ivory", css::IVORY),
    ("khaki", css::KHAKI),
    ("lavender", css::LAVENDER),
    ("lavenderblush", css::LAVENDER_BLUSH),
    ("lawngreen", css::LAWN_GREEN),
    ("lemonchiffon", css::LEMON_CHIFFON),
    ("lightblue", css::LIGHT_BLUE),
    ("lightcoral", css::LIGHT_CORAL),
    ("lightcyan", css::LIGHT_CYAN),
    ("lightgoldenrodyellow", css::LIGHT_GOLDENROD_YELLOW),
    ("lightgray", css::LIGHT_GRAY),
    ("lightgreen", css::LIGHT_GREEN),
    ("lightgrey", css::LIGHT_GREY),
    ("lightpink", css::LIGHT_PINK),
    ("lightsalmon", css::LIGHT_SALMON),
    ("lightseagreen", css::LIGHT_SEA_GREEN),
    ("lightskyblue", css::LIGHT_SKY_BLUE),
    ("lightslategray", css::LIGHT_SLATE_GRAY),
    ("lightslategrey", css::LIGHT_SLATE_GREY),
    ("lightsteelblue", css::LIGHT_STEEL_BLUE),
    ("lightyellow", css::LIGHT_YELLOW),
    ("lime", css::LIME),
    ("limegreen", css::LIMEGREEN),
    ("linen", css::LINEN),
    ("magenta", css::MAGENTA),
    ("maroon", css::MAROON),
    ("mediumaquamarine", css::MEDIUM_AQUAMARINE),
    ("mediumblue", css::MEDIUM_BLUE),
    ("mediumorchid", css::MEDIUM_ORCHID),
    ("mediumpurple", css::MEDIUM_PURPLE),
    ("mediumseagreen", css::MEDIUM_SEA_GREEN),
    ("mediumslateblue", css::MEDIUM_SLATE_BLUE),
    ("mediumspringgreen", css::MEDIUM_SPRING_GREEN),
    ("mediumturquoise", css::MEDIUM_TURQUOISE),
    ("mediumvioletred", css::MEDIUM_VIOLET_RED),
    ("midnightblue", css::MIDNIGHT_BLUE),
    ("mintcream", css::MINT_CREAM),
    ("mistyrose", css::MISTY_ROSE),
    ("moccasin", css::MOCCASIN),
    ("navajowhite", css::NAVAJO_WHITE),
    ("navy", css::NAVY),
    ("oldlace", css::OLD_LACE),
    ("olive", css::OLIVE),
    ("olivedrab", css::OLIVE_DRAB),
    ("orange", css::ORANGE),
    ("orangered", css::ORANGE_RED),
    ("orchid", css::ORCHID),
    ("palegoldenrod", css::PALE_GOLDENROD),
    ("palegreen", css::PALE_GREEN),
    ("paleturquoise", css::PALE_TURQUOISE),
    ("palevioletred", css::PALE_VIOLETRED),
    ("papayawhip", css::PAPAYA_WHIP),
    ("peachpuff", css::PEACHPUFF),
    ("peru", css::PERU),
    ("pink", css::PINK),
    ("plum", css::PLUM),
    ("powderblue", css::POWDER_BLUE),
    ("purple", css::PURPLE),
    ("rebeccapurple", css::REBECCA_PURPLE),
    ("red", css::RED),
    ("rosybrown", css::ROSY_BROWN),
    ("royalblue", css::ROYAL_BLUE),
    ("saddlebrown", css::SADDLE_BROWN),
    ("salmon", css::SALMON),
    ("sandybrown", css::SANDY_BROWN),
    ("seagreen", css::SEA_GREEN),
    ("seashell", css::SEASHELL),
    ("sienna", css::SIENNA),
    ("silver", css::SILVER),
    ("skyblue", css::SKY_BLUE),
    ("slateblue", css::SLATE_BLUE),
    ("slategray", css::SLATE_GRAY),
    ("slategrey", css::SLATE_GREY),
    ("snow", css::SNOW),
    ("springgreen", css::SPRING_GREEN),
    ("steelblue", css::STEEL_BLUE),
    ("tan", css::TAN),
    ("teal", css::TEAL),
    ("thistle", css::THISTLE),
    ("tomato", css::TOMATO),
    ("turquoise", css::TURQUOISE),
    ("violet", css::VIOLET),
    ("wheat", css::WHEAT),
    ("white", css::WHITE),
    ("whitesmoke", css::WHITE_SMOKE),
    ("yellow", css::YELLOW),
    ("yellowgreen", css::YELLOW_GREEN),
];
