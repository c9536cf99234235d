//! Local UI chrome state: the open overlay and the notification stack.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the session context so views can open
//! each other (a dashboard card, a search hit) without holding references to
//! one another. Provided at the app root as `RwSignal<UiState>`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// View shown inside the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Login,
    CreateProduct,
    CreateWarehouse,
    TransferProduct,
    LowStock,
    NewDelivery,
    ProductList,
    CreateUser,
    ChangeLog,
    /// Detail page for one product id.
    Product(i64),
}

/// Notification severity; picks the toast's colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notification notification-info",
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
        }
    }
}

/// One toast. `id` is unique for the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub overlay: Option<Panel>,
    pub notices: Vec<Notice>,
    next_notice_id: u64,
}

impl UiState {
    /// Replace whatever the overlay shows with `panel`.
    pub fn open(&mut self, panel: Panel) {
        self.overlay = Some(panel);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Queue a notification and return its id for later dismissal.
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notices.push(Notice { id, kind, message: message.into() });
        id
    }

    /// Remove notification `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}
