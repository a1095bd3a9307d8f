//! Launch a search result directly

use crate::launcher::Launcher;
use anyhow::{Context, Result};
use scout_core::{LaunchError, ProviderRegistry};

/// Which result of a query to activate
#[derive(Debug, Clone)]
pub enum Selection {
    /// Position in the merged result list
    Index(usize),

    /// Stable item id such as `app:Firefox` or `file:/home/me/notes.txt`
    Id(String),
}

/// Search for `query` and activate the selected result
pub fn open_command(
    registry: &ProviderRegistry,
    launcher: &dyn Launcher,
    query: &str,
    selection: &Selection,
) -> Result<()> {
    let results = registry.search(query);
    let item = match selection {
        Selection::Index(index) => results.get(*index),
        Selection::Id(id) => results.find(id),
    };

    let item = item.ok_or_else(|| LaunchError::ItemNotFound {
        id: match selection {
            Selection::Index(index) => format!("#{} for '{}'", index, query),
            Selection::Id(id) => id.clone(),
        },
    })?;

    launcher
        .launch(&item.invoke)
        .with_context(|| format!("Failed to open {}", item.display_name))?;

    println!("Opened {}", item.display_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::config::ApplicationEntry;
    use scout_core::{ApplicationProvider, InvokeToken};
    use std::cell::RefCell;

    /// Records activations instead of spawning processes
    #[derive(Default)]
    struct RecordingLauncher {
        launched: RefCell<Vec<InvokeToken>>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, invoke: &InvokeToken) -> scout_core::Result<()> {
            self.launched.borrow_mut().push(invoke.clone());
            Ok(())
        }
    }

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new().with_provider(Box::new(ApplicationProvider::new(vec![
            ApplicationEntry::new("Files", "nautilus"),
            ApplicationEntry::new("Firefox", "firefox"),
        ])))
    }

    #[test]
    fn test_open_by_id() {
        let launcher = RecordingLauncher::default();
        open_command(
            &registry(),
            &launcher,
            "Fi",
            &Selection::Id("app:Firefox".to_string()),
        )
        .unwrap();

        assert_eq!(
            *launcher.launched.borrow(),
            vec![InvokeToken::Command("firefox".to_string())]
        );
    }

    #[test]
    fn test_open_by_index() {
        let launcher = RecordingLauncher::default();
        open_command(&registry(), &launcher, "Fi", &Selection::Index(0)).unwrap();

        assert_eq!(
            *launcher.launched.borrow(),
            vec![InvokeToken::Command("nautilus".to_string())]
        );
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let launcher = RecordingLauncher::default();
        let err = open_command(
            &registry(),
            &launcher,
            "Fi",
            &Selection::Id("app:Nope".to_string()),
        )
        .unwrap_err();

        assert!(err.to_string().contains("app:Nope"));
        assert!(launcher.launched.borrow().is_empty());
    }
}
