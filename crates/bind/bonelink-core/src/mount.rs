//! Mount operation for an animated element.

use serde::{Deserialize, Serialize};

use crate::driver::AnimationDriver;

/// Options recognized when mounting an animated element.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MountOptions {
    /// Start playback once on mount. Defaults to true.
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    /// Animation names recorded for the driver. The mount path does not
    /// consume these; selection stays with the engine.
    #[serde(default)]
    pub animations: Vec<String>,
    /// Skin name recorded for the driver. Unused by the mount path.
    #[serde(default)]
    pub skin: Option<String>,
}

fn default_autoplay() -> bool {
    true
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            animations: Vec::new(),
            skin: None,
        }
    }
}

/// Mount side effect: start playback when `autoplay` is set.
///
/// The drawable node of the element is the mounting entity itself in the
/// adapter, so there is nothing to return here.
pub fn mount(driver: &mut dyn AnimationDriver, options: &MountOptions) {
    if options.autoplay {
        driver.play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_autoplay() {
        assert!(MountOptions::default().autoplay);
        let parsed: MountOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, MountOptions::default());
    }

    #[test]
    fn autoplay_can_be_disabled_in_json() {
        let parsed: MountOptions =
            serde_json::from_str(r#"{"autoplay":false,"skin":"goblin"}"#).unwrap();
        assert!(!parsed.autoplay);
        assert_eq!(parsed.skin.as_deref(), Some("goblin"));
    }
}
