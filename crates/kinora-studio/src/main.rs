mod film;
mod views;

use kinora_engine::logging::LoggingConfig;
use kinora_ui::prelude::*;

use film::{CATALOG, Genre, MAX_YEAR, MIN_YEAR};
use views::{
    CLOSE_INFO, GENRE_TOGGLED, InfoPanel, REFRESH, ResultPanel, SEARCH_CHANGED, YEAR_FROM_CHANGED,
    YEAR_TO_CHANGED,
};

fn main() {
    Application::new()
        .title("Kinora")
        .size(1370.0, 720.0)
        .canvas(1370, 720)
        // Chatty unless RUST_LOG says otherwise.
        .logging(LoggingConfig { default_level: log::LevelFilter::Debug, ..LoggingConfig::default() })
        .run(build);
}

fn build(scene: &mut UiScene) {
    log::info!("kinora studio: {} films in catalog", CATALOG.len());
    let root = scene.root();
    scene.set_background(root, Color::from_rgb_u8(12, 12, 16));

    scene.add(root, Label::new("Kinora", 28.0, Color::WHITE), Rect::new(24, 14, 300, 36));
    let status = scene.add(
        root,
        Label::new("", 14.0, Color::from_rgb_u8(150, 150, 160)),
        Rect::new(24, 170, 400, 20),
    );

    // The overlay is attached last so it paints over the grid.
    let info = scene.add_detached(InfoPanel::new(), Rect::new(385, 150, 600, 420));
    scene.set_background(info, Color::from_rgb_u8(22, 22, 30));
    scene.set_outline(info, Color::from_rgb_u8(90, 140, 255), 2.0);
    scene.add(
        info,
        Button::new("Close").on_click(|ctx| ctx.post_parent(Message::custom(CLOSE_INFO))),
        Rect::new(500, 16, 84, 30),
    );
    scene.hide(info);

    let results = scene.add(root, ResultPanel::new(CATALOG, info, status), Rect::new(24, 200, 1322, 500));

    scene.add(
        root,
        TextEdit::new()
            .placeholder("Search title, director or cast")
            .text_size(16.0)
            .on_change(move |text, ctx| ctx.post(results, Message::custom_with(SEARCH_CHANGED, text.to_string())))
            .on_submit(|text, _| log::info!("search submitted: {text:?}")),
        Rect::new(24, 70, 420, 34),
    );

    year_slider(scene, results, "From", MIN_YEAR, 480, YEAR_FROM_CHANGED);
    year_slider(scene, results, "To", MAX_YEAR, 780, YEAR_TO_CHANGED);

    for (i, genre) in Genre::ALL.into_iter().enumerate() {
        let button = Button::new(genre.name())
            .background(Color::from_rgb_u8(30, 34, 48))
            .hover_background(Color::from_rgb_u8(48, 56, 84))
            .on_click(move |ctx| {
                let me = ctx.id();
                ctx.post(results, Message::custom_with(GENRE_TOGGLED, (genre, me)));
            });
        scene.add(root, button, Rect::new(24 + i as i32 * 130, 124, 120, 30));
    }

    scene.attach(info, root);
    scene.post(results, Message::custom(REFRESH));
}

/// A captioned slider over the catalog's year range that reports whole
/// years to `results` as custom message `msg_id`.
fn year_slider(scene: &mut UiScene, results: WidgetId, caption: &'static str, start: i32, x: i32, msg_id: u32) {
    let root = scene.root();
    let label = scene.add(
        root,
        Label::new(format!("{caption} {start}"), 14.0, Color::WHITE),
        Rect::new(x, 62, 200, 20),
    );

    let mut last = start;
    let slider = Slider::new()
        .min(MIN_YEAR as f32)
        .max(MAX_YEAR as f32)
        .value(start as f32)
        .on_change(move |value, ctx| {
            let year = value.round() as i32;
            if year == last {
                return;
            }
            last = year;
            if let Some(l) = ctx.widget_mut::<Label>(label) {
                l.set_text(format!("{caption} {year}"));
            }
            ctx.post(results, Message::custom_with(msg_id, year));
        });
    scene.add(root, slider, Rect::new(x, 86, 260, 16));
}
