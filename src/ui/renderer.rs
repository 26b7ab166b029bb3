//! Rendering surface capability.
//!
//! The controller never prints anything itself. It talks to a [`Renderer`],
//! which owns the list container, the "show more" control, the empty-result
//! message, the detail regions and the modal panels. The plugin implements it
//! with [`TerminalSurface`](crate::ui::surface::TerminalSurface); tests can
//! unmount regions on that surface to exercise failure paths.

use crate::domain::error::{Result, ZbooksError};
use crate::ui::theme::ColorTokens;

/// Named regions a surface may or may not have mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The preview list container.
    List,
    /// The "Show more (N)" control.
    Pagination,
    /// The "No results found" message.
    Message,
    /// Title, subtitle, description, cover and blurred background of the
    /// detail view.
    Detail,
    /// The search form overlay.
    SearchPanel,
    /// The settings form overlay.
    SettingsPanel,
    /// The document root that receives the color tokens.
    Document,
}

impl Region {
    pub const ALL: [Self; 7] = [
        Self::List,
        Self::Pagination,
        Self::Message,
        Self::Detail,
        Self::SearchPanel,
        Self::SettingsPanel,
        Self::Document,
    ];

    /// Region name as reported in [`ZbooksError::RenderSurface`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Pagination => "pagination",
            Self::Message => "message",
            Self::Detail => "detail",
            Self::SearchPanel => "search panel",
            Self::SettingsPanel => "settings panel",
            Self::Document => "document",
        }
    }

    /// Error for an operation that needed this region.
    #[must_use]
    pub const fn unavailable(self) -> ZbooksError {
        ZbooksError::RenderSurface(self.name())
    }
}

/// Modal-like panels. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Search,
    Settings,
    Detail,
}

impl Panel {
    /// Region hosting the panel.
    #[must_use]
    pub const fn region(self) -> Region {
        match self {
            Self::Search => Region::SearchPanel,
            Self::Settings => Region::SettingsPanel,
            Self::Detail => Region::Detail,
        }
    }
}

/// One entry of the preview list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    /// Book id, used to resolve the item back to a book on selection.
    pub id: String,
    pub image: String,
    pub title: String,
    /// Resolved author display name (or the raw key if unresolved).
    pub author: String,
}

/// Contents of the detail view regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    /// `"<author> (<year>)"`.
    pub subtitle: String,
    pub description: String,
    pub cover: String,
    pub blur: String,
}

/// State of the "show more" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowMore {
    /// `n > 0` records remain to be shown.
    Active(usize),
    /// Everything in the match set has been shown.
    Exhausted,
}

/// Label and enabled flag of the "show more" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub remaining: usize,
    pub label: String,
    pub enabled: bool,
}

impl PaginationControl {
    /// Builds the control for `total` matches of which `shown` are rendered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zbooks::ui::renderer::{PaginationControl, ShowMore};
    ///
    /// let control = PaginationControl::new(50, 36);
    /// assert_eq!(control.label, "Show more (14)");
    /// assert_eq!(control.state(), ShowMore::Active(14));
    ///
    /// let done = PaginationControl::new(3, 3);
    /// assert_eq!(done.label, "Show more (0)");
    /// assert!(!done.enabled);
    /// ```
    #[must_use]
    pub fn new(total: usize, shown: usize) -> Self {
        let remaining = total.saturating_sub(shown);
        Self {
            remaining,
            label: format!("Show more ({remaining})"),
            enabled: remaining > 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ShowMore {
        if self.remaining == 0 {
            ShowMore::Exhausted
        } else {
            ShowMore::Active(self.remaining)
        }
    }
}

/// Contents of the regions a multi-step update can change.
///
/// Taken before an update and handed back to [`Renderer::restore`] if a
/// later step fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceSnapshot {
    pub items: Vec<PreviewItem>,
    pub empty_message: bool,
    pub pagination_label: String,
    pub pagination_enabled: bool,
    pub detail: Option<DetailView>,
    pub open_panel: Option<Panel>,
}

/// Capability interface of a rendering surface.
///
/// Every method either applies completely or fails with
/// [`ZbooksError::RenderSurface`] without touching the surface. Sequences
/// of calls are made atomic by the caller with [`snapshot`](Self::snapshot)
/// and [`restore`](Self::restore).
pub trait Renderer {
    /// Fails if any of `regions` is not mounted.
    ///
    /// Callers use this before a multi-step update so a missing region is
    /// detected before anything is changed.
    ///
    /// # Errors
    ///
    /// Returns the error for the first missing region.
    fn check_mounted(&self, regions: &[Region]) -> Result<()>;

    /// Appends one page of preview items to the list.
    ///
    /// # Errors
    ///
    /// Fails if the list region is not mounted.
    fn render_preview_page(&mut self, items: &[PreviewItem]) -> Result<()>;

    /// Removes every preview item from the list.
    ///
    /// # Errors
    ///
    /// Fails if the list region is not mounted.
    fn clear_list(&mut self) -> Result<()>;

    /// Fills the detail regions.
    ///
    /// # Errors
    ///
    /// Fails if the detail region is not mounted.
    fn show_detail(&mut self, detail: &DetailView) -> Result<()>;

    /// Updates the "show more" control.
    ///
    /// # Errors
    ///
    /// Fails if the pagination region is not mounted.
    fn set_pagination_label(&mut self, text: &str, enabled: bool) -> Result<()>;

    /// Shows or hides the "No results found" message.
    ///
    /// # Errors
    ///
    /// Fails if the message region is not mounted.
    fn set_empty_indicator(&mut self, visible: bool) -> Result<()>;

    /// Applies a color token pair to the whole surface.
    ///
    /// # Errors
    ///
    /// Fails if the document region is not mounted.
    fn apply_color_tokens(&mut self, tokens: ColorTokens) -> Result<()>;

    /// Opens `panel`, closing whichever panel was open.
    ///
    /// # Errors
    ///
    /// Fails if the panel's region is not mounted.
    fn open_panel(&mut self, panel: Panel) -> Result<()>;

    /// Closes `panel` if it is the open one.
    ///
    /// # Errors
    ///
    /// Fails if the panel's region is not mounted.
    fn close_panel(&mut self, panel: Panel) -> Result<()>;

    /// Captures the list, message, pagination and detail contents and the
    /// open panel.
    fn snapshot(&self) -> SurfaceSnapshot;

    /// Puts back contents captured by [`snapshot`](Self::snapshot).
    fn restore(&mut self, snapshot: SurfaceSnapshot);
}
