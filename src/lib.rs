//! Light/dark theme toggle for server-rendered pages.
//!
//! On load the stored preference is applied to `<body>`; each click on the
//! toggle control flips the theme, swaps the control's icon, and persists the
//! choice to `localStorage`. Built to WebAssembly with the `hydrate` feature,
//! the host page calls `mount()` (or `mount_with_config(json)`) once.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`toggler`] | [`ThemeToggler`]: initialize and click handling |
//! | [`theme`] | [`Theme`] and [`Icon`] values, stored-value parsing |
//! | [`store`] | [`ThemeStore`] capability |
//! | [`view`] | [`ThemeView`] capability |
//! | [`memory`] | In-process store and view |
//! | [`mount`] | [`mount::MountSlot`]: one toggler per page |
//! | [`config`] | [`ToggleConfig`]: storage key, element id, class, icons |
//! | [`error`] | [`ThemeError`] |
//! | `browser` | `localStorage` and DOM adapters, JS entry points (`hydrate` only) |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod error;
pub mod memory;
pub mod mount;
pub mod store;
pub mod theme;
pub mod toggler;
pub mod view;

pub use config::ToggleConfig;
pub use error::ThemeError;
pub use store::ThemeStore;
pub use theme::{Icon, IconSet, Theme};
pub use toggler::ThemeToggler;
pub use view::ThemeView;
