//! Static Home/About-screen text and menu metadata.

use crate::model::list_kind::ListKind;

pub const APP_NAME: &str = "ListKeeper";
pub const APP_DEVELOPER: &str = "SivaKKumaran";

pub const HOME_TITLE: &str = "Welcome to Your Todo App";
pub const HOME_SUBTITLE: &str = "Get organized and manage your tasks efficiently.";

pub const ABOUT_TITLE: &str = "About Page";
pub const APP_DESCRIPTION: &str = "This app is a simple Todo application built with React \
Native and Expo. It allows you to manage your tasks efficiently and stay organized.";

/// Author line shown under the About description.
pub fn developer_credit() -> String {
    format!("Developed by: {APP_DEVELOPER}")
}

/// Menu entry for one list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: ListKind,
    pub title: &'static str,
    pub storage_key: &'static str,
}

/// List screens in drawer order.
pub fn list_menu() -> Vec<MenuEntry> {
    ListKind::ALL
        .into_iter()
        .map(|kind| MenuEntry {
            kind,
            title: kind.title(),
            storage_key: kind.storage_key(),
        })
        .collect()
}
