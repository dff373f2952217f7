use leptos::prelude::*;

/// Pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Categories,
    SubCategories,
    Products,
    Wishlist,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Categories => "Categories",
            Page::SubCategories => "Sub-categories",
            Page::Products => "Products",
            Page::Wishlist => "My Wishlist",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Categories => "categories",
            Page::SubCategories => "layers",
            Page::Products => "products",
            Page::Wishlist => "heart",
        }
    }
}

pub const NAV_PAGES: [Page; 5] = [
    Page::Dashboard,
    Page::Categories,
    Page::SubCategories,
    Page::Products,
    Page::Wishlist,
];

/// App-wide navigation state, provided at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::Dashboard),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.current_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
