//! Platform-specific location of the synced folder everything lives under.

use std::path::PathBuf;

use crate::error::PriceWatchError;

/// Host OS families with a known synced-folder layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Other
        }
    }
}

/// Synced-folder root for the running host.
pub fn synced_root() -> Result<PathBuf, PriceWatchError> {
    root_for(Platform::current(), dirs::home_dir())
}

/// Synced-folder root for `platform` given the user's home directory.
///
/// Unknown platforms get an empty root, i.e. paths relative to the working
/// directory.
pub fn root_for(platform: Platform, home: Option<PathBuf>) -> Result<PathBuf, PriceWatchError> {
    match platform {
        Platform::MacOs => Ok(home.ok_or(PriceWatchError::NoHomeDir)?.join("Dropbox")),
        Platform::Windows => Ok(home
            .ok_or(PriceWatchError::NoHomeDir)?
            .join("My Documents")
            .join("My Dropbox")),
        Platform::Other => {
            log::warn!("unsupported platform, assuming files are in the current working directory");
            Ok(PathBuf::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn macos_root_is_dropbox_in_home() {
        let root = root_for(Platform::MacOs, Some(PathBuf::from("/Users/pat"))).unwrap();
        assert_eq!(root, Path::new("/Users/pat").join("Dropbox"));
    }

    #[test]
    fn windows_root_is_under_my_documents() {
        let root = root_for(Platform::Windows, Some(PathBuf::from("home"))).unwrap();
        assert_eq!(
            root,
            Path::new("home").join("My Documents").join("My Dropbox")
        );
    }

    #[test]
    fn other_platform_root_is_relative() {
        let root = root_for(Platform::Other, Some(PathBuf::from("/home/pat"))).unwrap();
        assert_eq!(root, PathBuf::new());
    }

    #[test]
    fn missing_home_is_error_on_known_platform() {
        let err = root_for(Platform::MacOs, None).unwrap_err();
        assert!(matches!(err, PriceWatchError::NoHomeDir));
    }

    #[test]
    fn missing_home_is_fine_on_other_platform() {
        assert!(root_for(Platform::Other, None).is_ok());
    }
}
