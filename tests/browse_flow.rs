//! End-to-end browsing sessions driven through the public API.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use zbooks::app::CatalogController;
use zbooks::domain::{Book, Catalog, FilterSpec, ANY};
use zbooks::ui::renderer::{DetailView, Panel, PreviewItem, Region, Renderer, ShowMore, SurfaceSnapshot};
use zbooks::ui::{ColorTokens, TerminalSurface, ThemeSetting};
use zbooks::{handle_event, initialize, Config, Event, InputMode, ZbooksError};

fn book(n: usize, author: &str, genre: &str) -> Book {
    let published: DateTime<Utc> = "1990-05-01T00:00:00Z".parse().unwrap();
    Book {
        id: format!("b{n}"),
        title: format!("Volume {n}"),
        author: author.to_string(),
        genres: vec![genre.to_string()],
        description: format!("Description of volume {n}."),
        image: format!("https://example.org/{n}.jpg"),
        published,
        pages: 100,
        popularity: 50,
    }
}

fn catalog(len: usize) -> Catalog {
    let books = (0..len)
        .map(|n| book(n, if n % 2 == 0 { "even" } else { "odd" }, "poetry"))
        .collect();
    let authors = BTreeMap::from([("even".to_string(), "Eve Evans".to_string())]);
    let genres = BTreeMap::from([("poetry".to_string(), "Poetry".to_string())]);
    Catalog::new(books, authors, genres).unwrap()
}

fn page(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

/// Delegates to a [`TerminalSurface`] but fails every preview render.
struct BrokenList {
    inner: TerminalSurface,
}

impl Renderer for BrokenList {
    fn check_mounted(&self, regions: &[Region]) -> zbooks::Result<()> {
        self.inner.check_mounted(regions)
    }

    fn render_preview_page(&mut self, _items: &[PreviewItem]) -> zbooks::Result<()> {
        Err(ZbooksError::RenderSurface("list"))
    }

    fn clear_list(&mut self) -> zbooks::Result<()> {
        self.inner.clear_list()
    }

    fn show_detail(&mut self, detail: &DetailView) -> zbooks::Result<()> {
        self.inner.show_detail(detail)
    }

    fn set_pagination_label(&mut self, text: &str, enabled: bool) -> zbooks::Result<()> {
        self.inner.set_pagination_label(text, enabled)
    }

    fn set_empty_indicator(&mut self, visible: bool) -> zbooks::Result<()> {
        self.inner.set_empty_indicator(visible)
    }

    fn apply_color_tokens(&mut self, tokens: ColorTokens) -> zbooks::Result<()> {
        self.inner.apply_color_tokens(tokens)
    }

    fn open_panel(&mut self, panel: Panel) -> zbooks::Result<()> {
        self.inner.open_panel(panel)
    }

    fn close_panel(&mut self, panel: Panel) -> zbooks::Result<()> {
        self.inner.close_panel(panel)
    }

    fn snapshot(&self) -> SurfaceSnapshot {
        self.inner.snapshot()
    }

    fn restore(&mut self, snapshot: SurfaceSnapshot) {
        self.inner.restore(snapshot);
    }
}

#[test]
fn pages_until_exhausted() {
    for (len, size) in [(10, 3), (9, 3), (1, 36), (48, 36), (5, 1)] {
        let mut surface = TerminalSurface::mounted();
        let mut controller = CatalogController::new(catalog(len), page(size));

        let mut pages = usize::from(controller.start_search(&FilterSpec::default(), &mut surface).unwrap() > 0);
        while controller.remaining_label().state() != ShowMore::Exhausted {
            assert!(controller.show_next_page(&mut surface).unwrap() > 0);
            pages += 1;
        }

        assert_eq!(pages, (len + size - 1) / size, "len={len} size={size}");
        assert_eq!(controller.cursor(), len);
        assert_eq!(surface.items().len(), len);
        assert_eq!(surface.pagination().label, "Show more (0)");
        assert!(!surface.pagination().enabled);

        assert_eq!(controller.show_next_page(&mut surface).unwrap(), 0);
        assert_eq!(controller.cursor(), len);
        assert_eq!(surface.items().len(), len);
    }
}

#[test]
fn preview_order_matches_catalog_order() {
    let mut surface = TerminalSurface::mounted();
    let mut controller = CatalogController::new(catalog(7), page(4));
    let spec = FilterSpec {
        author: "even".to_string(),
        ..FilterSpec::default()
    };

    controller.start_search(&spec, &mut surface).unwrap();
    controller.show_next_page(&mut surface).unwrap();

    let ids: Vec<&str> = surface.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["b0", "b2", "b4", "b6"]);
    assert!(surface.items().iter().all(|item| item.author == "Eve Evans"));
}

#[test]
fn failed_render_keeps_previous_results() {
    let mut surface = TerminalSurface::mounted();
    let mut controller = CatalogController::new(catalog(10), page(3));
    controller.start_search(&FilterSpec::default(), &mut surface).unwrap();

    let mut broken = BrokenList { inner: surface };
    let narrow = FilterSpec {
        title: "volume 1".to_string(),
        genre: ANY.to_string(),
        author: ANY.to_string(),
    };

    assert!(controller.start_search(&narrow, &mut broken).is_err());
    assert_eq!(controller.spec(), &FilterSpec::default());
    assert_eq!(controller.matches().len(), 10);
    assert_eq!(controller.cursor(), 3);

    let ids: Vec<&str> = broken.inner.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["b0", "b1", "b2"]);
    assert!(!broken.inner.is_empty_message_visible());
    assert_eq!(broken.inner.pagination().label, "Show more (7)");

    assert!(controller.show_next_page(&mut broken).is_err());
    assert_eq!(controller.cursor(), 3);
    assert_eq!(broken.inner.items().len(), 3);

    let mut surface = broken.inner;
    assert_eq!(controller.show_next_page(&mut surface).unwrap(), 3);
    let ids: Vec<&str> = surface.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["b0", "b1", "b2", "b3", "b4", "b5"]);
}

#[test]
fn unknown_selection_keeps_detail_closed() {
    let mut surface = TerminalSurface::mounted();
    let controller = CatalogController::new(catalog(3), page(3));

    assert!(controller.select("missing", &mut surface).unwrap().is_none());
    assert!(surface.detail().is_none());
    assert_eq!(surface.active_panel(), None);
}

#[test]
fn night_swaps_the_token_pair() {
    let day = ColorTokens::for_setting(ThemeSetting::Day);
    let night = ColorTokens::for_setting(ThemeSetting::Night);
    assert_eq!((night.dark, night.light), (day.light, day.dark));

    let mut surface = TerminalSurface::mounted();
    let mut controller = CatalogController::new(catalog(1), page(1));
    for (value, expected) in [("night", night), ("day", day), ("twilight", day), ("", day)] {
        controller.apply_theme(value, &mut surface).unwrap();
        assert_eq!(surface.tokens(), expected, "value={value:?}");
    }
}

#[test]
fn keyboard_session_over_the_embedded_catalog() {
    let mut state = initialize(&Config::default());
    assert_eq!(state.surface.items().len(), 36);

    let events = [
        Event::OpenSearch,
        Event::Char('t'),
        Event::Char('h'),
        Event::Char('e'),
        Event::SubmitSearch,
        Event::KeyUp,
        Event::SelectBook,
    ];
    for event in &events {
        handle_event(&mut state, event).unwrap();
    }

    assert_eq!(state.input_mode(), InputMode::Detail);
    let detail = state.surface.detail().unwrap();
    assert!(detail.title.to_lowercase().contains("the"));
    assert_eq!(state.selected_index, state.surface.items().len() - 1);

    handle_event(&mut state, &Event::CloseDetail).unwrap();
    assert_eq!(state.input_mode(), InputMode::Browse);

    let viewmodel = state.compute_viewmodel(30, 100);
    assert!(viewmodel.empty_state.is_none());
    assert!(viewmodel.overlay.is_none());
}

#[test]
fn search_without_matches_shows_empty_message() {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::OpenSearch).unwrap();
    for c in "zzzz".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::SubmitSearch).unwrap();

    assert!(state.surface.items().is_empty());
    assert!(state.surface.is_empty_message_visible());
    assert!(state.compute_viewmodel(24, 80).empty_state.is_some());

    let (render, _) = handle_event(&mut state, &Event::SelectBook).unwrap();
    assert!(!render);
}
