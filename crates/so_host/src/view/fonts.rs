use eframe::egui;
use usvg::fontdb;

const CJK_FONT_KEY: &str = "cjk_system";

/// System families tried in order; the first one found wins.
const CJK_FAMILIES: &[&str] = &[
    "Noto Sans CJK JP",
    "Noto Sans JP",
    "Source Han Sans JP",
    "Yu Gothic UI",
    "Yu Gothic",
    "Meiryo",
    "MS Gothic",
    "Hiragino Sans",
    "Hiragino Kaku Gothic ProN",
    "IPAGothic",
    "TakaoGothic",
    "VL Gothic",
];

/// Add a Japanese-capable system font as a fallback for every family.
///
/// Returns the family that was installed, if any.
pub fn install_cjk_font(ctx: &egui::Context) -> Option<&'static str> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let Some((family, data, index)) = CJK_FAMILIES
        .iter()
        .find_map(|family| load_family(&db, family).map(|(data, index)| (*family, data, index)))
    else {
        tracing::warn!("No CJK system font found; Japanese text may not render");
        return None;
    };

    let mut font = egui::FontData::from_owned(data);
    font.index = index;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(CJK_FONT_KEY.to_owned(), font);
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_KEY.to_owned());
    }
    ctx.set_fonts(fonts);

    tracing::info!(family, "Installed CJK font");
    Some(family)
}

fn load_family(db: &fontdb::Database, family: &str) -> Option<(Vec<u8>, u32)> {
    let families = [fontdb::Family::Name(family)];
    let query = fontdb::Query {
        families: &families,
        ..Default::default()
    };
    let id = db.query(&query)?;
    db.with_face_data(id, |data, index| (data.to_vec(), index))
}
