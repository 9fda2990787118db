use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Material palette
pub const COL_PURPLE_200: Color32 = Color32::from_rgb(0xBB, 0x86, 0xFC);
pub const COL_PURPLE_500: Color32 = Color32::from_rgb(0x62, 0x00, 0xEE);
pub const COL_PURPLE_700: Color32 = Color32::from_rgb(0x37, 0x00, 0xB3);
pub const COL_TEAL_200: Color32 = Color32::from_rgb(0x03, 0xDA, 0xC5);
// 0x60DCDCDC, premultiplied
pub const COL_LIGHT_GRAY: Color32 = Color32::from_rgba_premultiplied(83, 83, 83, 0x60);
// 0x9932CD32, premultiplied
pub const COL_LIGHT_GREEN_200: Color32 = Color32::from_rgba_premultiplied(30, 123, 30, 0x99);
// 0x99DB0021, premultiplied
pub const COL_LIGHT_RED_200: Color32 = Color32::from_rgba_premultiplied(131, 0, 20, 0x99);

pub const COL_BACKGROUND: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
pub const COL_SURFACE: Color32 = Color32::WHITE;
pub const COL_ON_PRIMARY: Color32 = Color32::WHITE;
pub const COL_TEXT: Color32 = Color32::from_rgb(0x21, 0x21, 0x21);
pub const COL_ERROR: Color32 = Color32::from_rgb(0xB0, 0x00, 0x20);

/// Sweep gradient around every avatar. First and last stop match so the ring closes.
pub const RAINBOW: [Color32; 8] = [
    Color32::from_rgb(0x95, 0x75, 0xCD),
    Color32::from_rgb(0xBA, 0x68, 0xC8),
    Color32::from_rgb(0xE5, 0x73, 0x73),
    Color32::from_rgb(0xFF, 0xB7, 0x4D),
    Color32::from_rgb(0xFF, 0xF1, 0x76),
    Color32::from_rgb(0xAE, 0xD5, 0x81),
    Color32::from_rgb(0x4D, 0xD0, 0xE1),
    Color32::from_rgb(0x95, 0x75, 0xCD),
];

// Content alpha, as in Material's light theme
pub const ALPHA_HIGH: f32 = 1.0;
pub const ALPHA_MEDIUM: f32 = 0.6;

// Shapes
pub const SHAPE_SMALL_RADIUS: f32 = 4.0;
pub const SHAPE_MEDIUM_RADIUS: f32 = 4.0;
pub const SHAPE_LARGE_RADIUS: f32 = 0.0;
/// Card corners are 5% of the card height.
pub const CARD_CORNER_FRACTION: f32 = 0.05;

pub const APP_BAR_HEIGHT: f32 = 56.0;

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = COL_SURFACE;
    visuals.panel_fill = COL_BACKGROUND;
    visuals.hyperlink_color = COL_TEAL_200;
    visuals.override_text_color = Some(COL_TEXT);

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_LIGHT_GRAY);
    visuals.widgets.noninteractive.corner_radius = SHAPE_SMALL_RADIUS.into();
    visuals.widgets.inactive.corner_radius = SHAPE_MEDIUM_RADIUS.into();
    visuals.widgets.hovered.bg_fill = COL_PURPLE_200.linear_multiply(0.2);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_PURPLE_200);
    visuals.widgets.active.bg_fill = COL_PURPLE_700;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_ON_PRIMARY);
    visuals.window_corner_radius = SHAPE_LARGE_RADIUS.into();

    visuals.selection.bg_fill = COL_PURPLE_200.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, COL_PURPLE_500);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
    ]
    .into();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);

    ctx.set_style(style);
}
