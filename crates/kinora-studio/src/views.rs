//! Film-browser widgets: result grid, film cards and the detail overlay.

use kinora_ui::WidgetId;
use kinora_ui::prelude::*;

use crate::film::{Film, Filter, Genre};

// Custom message ids.
pub const REFRESH: u32 = 300;
pub const SEARCH_CHANGED: u32 = 400;
pub const YEAR_FROM_CHANGED: u32 = 401;
pub const YEAR_TO_CHANGED: u32 = 402;
pub const GENRE_TOGGLED: u32 = 403;
pub const FILM_SELECTED: u32 = 410;
pub const SHOW_FILM: u32 = 411;
pub const CLOSE_INFO: u32 = 412;

const HOVER_TIMER: TimerId = 1;
const FADE_IN_TIMER: TimerId = 2;

pub const CARD_W: u32 = 210;
pub const CARD_H: u32 = 110;
const GAP: u32 = 12;

fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Cuts `text` so that it fits `width` pixels at `size`, assuming glyphs
/// about half as wide as the font size.
fn fit_text(text: &str, size: f32, width: u32) -> String {
    let max_chars = (width as f32 / (size * 0.5)).floor() as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

// ── FilmCard ──────────────────────────────────────────────────────────────

/// One film in the result grid.
///
/// Hovering fades the card to its highlight color on a timer; a click posts
/// `FILM_SELECTED` to the parent.
pub struct FilmCard {
    film: Film,
    hover: f32,
    hovered: bool,
    pressed: bool,
}

impl FilmCard {
    pub fn new(film: Film) -> Self {
        Self { film, hover: 0.0, hovered: false, pressed: false }
    }

    pub fn film(&self) -> &Film {
        &self.film
    }

    pub fn hover_level(&self) -> f32 {
        self.hover
    }
}

impl Widget for FilmCard {
    fn on_event(&mut self, event: &UiEvent<'_>, ctx: &mut EventCtx<'_>) -> EventResult {
        match event {
            UiEvent::MouseEnter { .. } => {
                self.hovered = true;
                ctx.start_timer(HOVER_TIMER, 16.0);
            }
            UiEvent::MouseLeft { .. } => {
                self.hovered = false;
                self.pressed = false;
                ctx.start_timer(HOVER_TIMER, 16.0);
            }
            UiEvent::Timer(HOVER_TIMER) => {
                let target = if self.hovered { 1.0 } else { 0.0 };
                let step = if self.hovered { 0.15 } else { -0.15 };
                self.hover = (self.hover + step).clamp(0.0, 1.0);
                if self.hover == target {
                    ctx.stop_timer(HOVER_TIMER);
                }
            }
            UiEvent::MousePressed { button: MouseButton::Left, .. } => self.pressed = true,
            UiEvent::MouseReleased { button: MouseButton::Left, .. } => {
                if std::mem::take(&mut self.pressed) {
                    log::debug!("film selected: {}", self.film.title);
                    ctx.post_parent(Message::custom_with(FILM_SELECTED, self.film.clone()));
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn paint(&self, painter: &mut Painter<'_>) {
        let rest = Color::from_rgb_u8(28, 28, 36);
        let lit = Color::from_rgb_u8(52, 60, 92);
        painter.fill_rect(painter.bounds(), mix(rest, lit, self.hover));
        if self.hover > 0.0 {
            painter.outline_rect(painter.bounds(), Color::from_rgb_u8(90, 140, 255).with_alpha(self.hover), 2.0);
        }

        let width = painter.size().width.saturating_sub(20);
        painter.text(fit_text(self.film.title, 16.0, width), 16.0, Point::new(10, 26), Color::WHITE);
        painter.text(self.film.year.to_string(), 13.0, Point::new(10, 48), Color::from_rgb_u8(170, 170, 180));
        painter.text(fit_text(&self.film.genre_line(), 12.0, width), 12.0, Point::new(10, 68), Color::from_rgb_u8(120, 160, 230));

        let director = Color::from_rgb_u8(200, 200, 210).with_alpha(self.hover);
        painter.text(fit_text(self.film.director, 12.0, width), 12.0, Point::new(10, 92), director);
    }
}

// ── ResultPanel ───────────────────────────────────────────────────────────

/// Grid of [`FilmCard`]s for the films matching the current filter.
///
/// Filter controls post their changes here; every change destroys the old
/// cards and lays out new ones.
pub struct ResultPanel {
    films: &'static [Film],
    filter: Filter,
    cards: Vec<WidgetId>,
    info: WidgetId,
    status: WidgetId,
}

impl ResultPanel {
    /// `info` receives `SHOW_FILM` for selected cards; `status` is a
    /// [`Label`] that shows the match count.
    pub fn new(films: &'static [Film], info: WidgetId, status: WidgetId) -> Self {
        Self { films, filter: Filter::default(), cards: Vec::new(), info, status }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn cards(&self) -> &[WidgetId] {
        &self.cards
    }

    fn rebuild(&mut self, ctx: &mut EventCtx<'_>) {
        for card in self.cards.drain(..) {
            ctx.destroy(card);
        }

        let size = ctx.own_size();
        let cols = ((size.width + GAP) / (CARD_W + GAP)).max(1);
        let rows = ((size.height + GAP) / (CARD_H + GAP)).max(1);
        let matches = self.filter.apply(self.films);
        let shown = matches.len().min((cols * rows) as usize);

        let id = ctx.id();
        for (i, film) in matches.iter().take(shown).enumerate() {
            let (col, row) = (i as u32 % cols, i as u32 / cols);
            let rect = Rect::new(
                (col * (CARD_W + GAP)) as i32,
                (row * (CARD_H + GAP)) as i32,
                CARD_W,
                CARD_H,
            );
            self.cards.push(ctx.add(id, FilmCard::new((*film).clone()), rect));
        }

        let text = match matches.len() {
            0 => "No films match".to_string(),
            n if n > shown => format!("{n} films ({shown} shown)"),
            1 => "1 film".to_string(),
            n => format!("{n} films"),
        };
        if let Some(label) = ctx.widget_mut::<Label>(self.status) {
            label.set_text(text);
        }
        log::info!("{} of {} films match {:?}", matches.len(), self.films.len(), self.filter);
    }

    fn toggle_genre(&mut self, genre: Genre, button: WidgetId, ctx: &mut EventCtx<'_>) {
        let on = self.filter.toggle_genre(genre);
        if let Some(b) = ctx.widget_mut::<Button>(button) {
            b.set_label(if on { format!("{genre} *") } else { genre.to_string() });
        }
    }
}

impl Widget for ResultPanel {
    fn on_event(&mut self, event: &UiEvent<'_>, ctx: &mut EventCtx<'_>) -> EventResult {
        match event {
            UiEvent::Custom(msg) => match msg.id {
                REFRESH => {}
                SEARCH_CHANGED => match msg.data::<String>() {
                    Some(q) if *q != self.filter.query => self.filter.query = q.clone(),
                    _ => return EventResult::Consumed,
                },
                YEAR_FROM_CHANGED => match msg.data::<i32>() {
                    Some(&y) if y != self.filter.from_year => self.filter.from_year = y,
                    _ => return EventResult::Consumed,
                },
                YEAR_TO_CHANGED => match msg.data::<i32>() {
                    Some(&y) if y != self.filter.to_year => self.filter.to_year = y,
                    _ => return EventResult::Consumed,
                },
                GENRE_TOGGLED => match msg.data::<(Genre, WidgetId)>() {
                    Some(&(genre, button)) => self.toggle_genre(genre, button, ctx),
                    None => return EventResult::Ignored,
                },
                FILM_SELECTED => {
                    if let Some(film) = msg.data::<Film>() {
                        let info = self.info;
                        ctx.post(info, Message::custom_with(SHOW_FILM, film.clone()));
                    }
                    return EventResult::Consumed;
                }
                _ => return EventResult::Ignored,
            },
            UiEvent::Resized(_) => {}
            _ => return EventResult::Ignored,
        }
        self.rebuild(ctx);
        EventResult::Consumed
    }
}

// ── InfoPanel ─────────────────────────────────────────────────────────────

/// Detail overlay for one film.
///
/// Starts hidden. `SHOW_FILM` brings it to the top and fades it in;
/// `CLOSE_INFO` or Escape (once clicked, it holds focus) hides it again.
pub struct InfoPanel {
    film: Option<Film>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self { film: None }
    }

    pub fn film(&self) -> Option<&Film> {
        self.film.as_ref()
    }

    fn close(&mut self, ctx: &mut EventCtx<'_>) {
        let id = ctx.id();
        self.film = None;
        ctx.stop_timer(FADE_IN_TIMER);
        ctx.release_focus();
        ctx.hide(id);
    }
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for InfoPanel {
    fn on_event(&mut self, event: &UiEvent<'_>, ctx: &mut EventCtx<'_>) -> EventResult {
        let id = ctx.id();
        match event {
            UiEvent::Custom(msg) if msg.id == SHOW_FILM => {
                let Some(film) = msg.data::<Film>() else { return EventResult::Ignored };
                self.film = Some(film.clone());
                ctx.bring_to_top(id);
                ctx.set_opacity(id, 0.05);
                ctx.start_timer(FADE_IN_TIMER, 15.0);
            }
            UiEvent::Custom(msg) if msg.id == CLOSE_INFO => self.close(ctx),
            UiEvent::Timer(FADE_IN_TIMER) => {
                let next = (ctx.opacity(id) + 0.08).min(1.0);
                ctx.set_opacity(id, next);
                if next >= 1.0 {
                    ctx.stop_timer(FADE_IN_TIMER);
                }
            }
            UiEvent::MousePressed { .. } => ctx.take_focus(),
            UiEvent::KeyPressed(info) if info.key == Key::Escape => self.close(ctx),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn paint(&self, painter: &mut Painter<'_>) {
        let Some(film) = &self.film else { return };
        let width = painter.size().width.saturating_sub(40);
        let dim = Color::from_rgb_u8(170, 170, 180);

        painter.text(fit_text(film.title, 24.0, width), 24.0, Point::new(20, 76), Color::WHITE);
        painter.text(format!("{}  ·  {}", film.year, film.genre_line()), 14.0, Point::new(20, 104), dim);
        painter.line(Point::new(20, 118), Point::new(20 + width as i32, 118), Color::from_rgb_u8(60, 60, 80), 1.0);

        painter.text(format!("Director: {}", film.director), 15.0, Point::new(20, 148), Color::WHITE);
        painter.text(fit_text(&format!("Starring: {}", film.stars.join(", ")), 15.0, width), 15.0, Point::new(20, 174), Color::WHITE);
        painter.text(fit_text(film.summary, 14.0, width), 14.0, Point::new(20, 212), dim);
    }

    fn cleanup(&mut self, _ctx: &mut EventCtx<'_>) {
        self.film = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::film::CATALOG;
    use kinora_engine::input::ScriptedInput;

    struct Grid {
        scene: UiScene,
        results: WidgetId,
        info: WidgetId,
        status: WidgetId,
    }

    fn grid() -> Grid {
        let mut scene = UiScene::new(UiConfig::default());
        let root = scene.root();
        let status = scene.add(root, Label::new("", 14.0, Color::WHITE), Rect::new(0, 0, 200, 20));
        let info = scene.add_detached(InfoPanel::new(), Rect::new(300, 100, 600, 400));
        scene.hide(info);
        let results = scene.add(root, ResultPanel::new(CATALOG, info, status), Rect::new(0, 40, 1336, 600));
        scene.attach(info, root);
        scene.post(results, Message::custom(REFRESH));
        Grid { scene, results, info, status }
    }

    fn frame(scene: &mut UiScene, input: &ScriptedInput) {
        scene.update(16.0, input);
    }

    fn panel(g: &Grid) -> &ResultPanel {
        g.scene.widget::<ResultPanel>(g.results).expect("result panel")
    }

    #[test]
    fn refresh_lays_out_cards_that_fit() {
        let mut g = grid();
        frame(&mut g.scene, &ScriptedInput::new());

        // 6 columns x 5 rows fit in 1336x600.
        let cards = panel(&g).cards().to_vec();
        assert_eq!(cards.len(), CATALOG.len().min(30));
        assert_eq!(g.scene.position(cards[0]), Point::new(0, 0));
        assert_eq!(g.scene.position(cards[1]), Point::new((CARD_W + GAP) as i32, 0));
        assert_eq!(g.scene.position(cards[6]), Point::new(0, (CARD_H + GAP) as i32));
        assert_eq!(g.scene.widget::<Label>(g.status).map(|l| l.text.as_str()), Some("20 films"));
    }

    #[test]
    fn search_replaces_cards() {
        let mut g = grid();
        let input = ScriptedInput::new();
        frame(&mut g.scene, &input);
        let old = panel(&g).cards().to_vec();

        g.scene.post(g.results, Message::custom_with(SEARCH_CHANGED, "nolan".to_string()));
        frame(&mut g.scene, &input);

        assert_eq!(panel(&g).filter().query, "nolan");
        let cards = panel(&g).cards().to_vec();
        assert_eq!(cards.len(), 2);
        assert!(old.iter().all(|&c| !g.scene.contains(c)));
        let titles: Vec<_> = cards
            .iter()
            .filter_map(|&c| g.scene.widget::<FilmCard>(c))
            .map(|c| c.film().title)
            .collect();
        assert_eq!(titles, ["The Dark Knight", "Inception"]);
    }

    #[test]
    fn empty_result_updates_status() {
        let mut g = grid();
        g.scene.post(g.results, Message::custom_with(YEAR_FROM_CHANGED, 2030));
        frame(&mut g.scene, &ScriptedInput::new());
        assert!(panel(&g).cards().is_empty());
        assert_eq!(g.scene.widget::<Label>(g.status).map(|l| l.text.as_str()), Some("No films match"));
    }

    #[test]
    fn genre_toggle_filters_and_relabels_its_button() {
        let mut g = grid();
        let root = g.scene.root();
        let button = g.scene.add(root, Button::new("Fantasy"), Rect::new(0, 700, 120, 20));
        g.scene.post(g.results, Message::custom_with(GENRE_TOGGLED, (Genre::Fantasy, button)));
        frame(&mut g.scene, &ScriptedInput::new());

        assert!(panel(&g).filter().genres.contains(&Genre::Fantasy));
        assert_eq!(panel(&g).cards().len(), 5);
        assert_eq!(g.scene.widget::<Button>(button).map(|b| b.label()), Some("Fantasy *"));

        g.scene.post(g.results, Message::custom_with(GENRE_TOGGLED, (Genre::Fantasy, button)));
        frame(&mut g.scene, &ScriptedInput::new());
        assert_eq!(panel(&g).cards().len(), CATALOG.len());
        assert_eq!(g.scene.widget::<Button>(button).map(|b| b.label()), Some("Fantasy"));
    }

    #[test]
    fn hover_fades_in_then_stops_its_timer() {
        let mut g = grid();
        let mut input = ScriptedInput::new();
        frame(&mut g.scene, &input);
        let card = panel(&g).cards()[0];

        // Card 0 sits at (0, 40) on the canvas.
        input.move_to(20, 60);
        frame(&mut g.scene, &input);
        assert_eq!(g.scene.cursor(), Some(card));
        assert!(g.scene.has_timer(card, HOVER_TIMER));

        for _ in 0..10 {
            frame(&mut g.scene, &input);
        }
        assert_eq!(g.scene.widget::<FilmCard>(card).map(|c| c.hover_level()), Some(1.0));
        assert!(!g.scene.has_timer(card, HOVER_TIMER));
    }

    #[test]
    fn clicking_a_card_opens_the_info_panel() {
        let mut g = grid();
        let mut input = ScriptedInput::new();
        frame(&mut g.scene, &input);
        assert!(!g.scene.is_visible(g.info));

        input.move_to(20, 60);
        frame(&mut g.scene, &input);
        input.press(MouseButton::Left);
        frame(&mut g.scene, &input);
        input.release(MouseButton::Left);
        frame(&mut g.scene, &input);
        // FILM_SELECTED reaches the grid after it was drained this frame;
        // it forwards SHOW_FILM to the overlay on the next one.
        assert!(!g.scene.is_visible(g.info));
        frame(&mut g.scene, &input);

        let shown = g.scene.widget::<InfoPanel>(g.info).and_then(|p| p.film()).map(|f| f.title);
        assert_eq!(shown, Some(CATALOG[0].title));
        assert!(g.scene.is_visible(g.info));
        assert!(g.scene.has_timer(g.info, FADE_IN_TIMER));

        for _ in 0..20 {
            frame(&mut g.scene, &input);
        }
        assert_eq!(g.scene.opacity(g.info), 1.0);
        assert!(!g.scene.has_timer(g.info, FADE_IN_TIMER));
    }

    #[test]
    fn escape_closes_focused_info_panel() {
        let mut g = grid();
        let mut input = ScriptedInput::new();
        g.scene.post(g.info, Message::custom_with(SHOW_FILM, CATALOG[3].clone()));
        for _ in 0..20 {
            frame(&mut g.scene, &input);
        }

        input.move_to(400, 200).press(MouseButton::Left);
        frame(&mut g.scene, &input);
        assert!(g.scene.has_focus(g.info));

        input.release(MouseButton::Left).key_press(Key::Escape);
        frame(&mut g.scene, &input);

        assert!(!g.scene.is_visible(g.info));
        assert_eq!(g.scene.focus(), None);
        assert!(g.scene.widget::<InfoPanel>(g.info).is_some_and(|p| p.film().is_none()));
    }
}
