//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::domain::alert::{AlertAction, AlertSeverity};
use crate::domain::config::AppConfig;
use crate::domain::registration::STEP_COUNT;
use crate::i18n::t;
use crate::utils::config_store::{self, SETTINGS_FILE};

actions!(opsdeck, [Quit]);

/// Run the opsdeck application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Load persisted settings, degrading to defaults on failure
        let (config, settings_failed) = match config_store::load_config::<AppConfig>(SETTINGS_FILE)
        {
            Ok(config) => (config, false),
            Err(error) => {
                tracing::warn!(%error, "failed to load settings, using defaults");
                (AppConfig::default(), true)
            }
        };

        // Initialize global entities
        let entities = AppEntities::init(cx, config.clone());
        cx.set_global(entities.clone());

        seed_startup_alerts(&entities, settings_failed, cx);

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(config.locale, "app-title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        if let Err(error) = opened {
            tracing::error!(%error, "failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

/// Push the alerts the shell itself knows about at startup. The panel only
/// ever sees the resulting feed; it has no idea where entries come from.
fn seed_startup_alerts(entities: &AppEntities, settings_failed: bool, cx: &mut App) {
    let locale = entities.i18n.read(cx).locale;
    let current_step = entities.registration.read(cx).current_step;

    entities.alerts.update(cx, |alerts, cx| {
        if settings_failed {
            let action = AlertAction::new(t(locale, "action-restore-defaults"), || {
                match config_store::save_config(SETTINGS_FILE, &AppConfig::default()) {
                    Ok(()) => tracing::info!("settings restored to defaults"),
                    Err(error) => tracing::warn!(%error, "failed to restore default settings"),
                }
            });
            alerts.push_with_action(
                AlertSeverity::Warning,
                t(locale, "alert-settings-title").to_string(),
                t(locale, "alert-settings-message").to_string(),
                action,
            );
        }

        if current_step < STEP_COUNT {
            alerts.push(
                AlertSeverity::Info,
                t(locale, "alert-registration-title").to_string(),
                t(locale, "alert-registration-message").to_string(),
            );
        }

        cx.notify();
    });
}
