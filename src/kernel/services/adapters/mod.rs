//! Service adapters: OS specific implementations (file IO, paths, settings).

pub mod file;
pub mod keybinding;
pub mod migration;
pub mod paths;
pub mod persistence;
pub mod settings;

pub use file::LocalFileProvider;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use migration::{handle_break, resolve_interaction, BreakEvent, BreakOutcome};
pub use paths::{ensure_log_dir, get_app_data_dir, get_log_dir, get_worlds_dir, WorldIdentity};
pub use persistence::PersistenceService;
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings_from, parse_keybinding,
    save_settings_to,
};
