// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::compare::{self, CompareArgs};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Compare(compare::Message),
    ToggleSafeSearch,
    ToggleSignedIn,
    /// Mounts a fresh comparison widget.
    OpenCompare,
    /// Unmounts the widget, dropping its ticker and pending loads.
    CloseCompare,
    DismissNotice,
    /// Switches to the next bundled locale and saves it to `settings.toml`.
    CycleLanguage,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Comparison values overriding the `[compare]` settings.
    pub compare: CompareArgs,
    /// Takes precedence over `TERRA_COMPARE_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `TERRA_COMPARE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
