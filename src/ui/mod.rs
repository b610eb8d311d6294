//! Terminal UI components: clock face, settings panel, overlays, and widgets.

pub mod clock;
pub mod help_menu;
pub mod layout;
pub mod modal;
pub mod palette;
pub mod settings;
pub mod text_field;
pub mod toast;
pub mod toast_widget;

pub use clock::ClockWidget;
pub use help_menu::HelpMenuWidget;
pub use settings::SettingsPanel;
pub use toast::{Toast, ToastManager, ToastType};
pub use toast_widget::ToastWidget;
