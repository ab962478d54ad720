//! Shared fixtures for bonelink tests: embedded skeleton snapshots and a
//! scripted fake of the external animation engine.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};

use bonelink_core::{AnimationDriver, Skeleton};

/// Embedded skeleton fixtures, keyed by name.
pub mod skeletons {
    use super::*;

    /// Raw JSON for a named skeleton fixture.
    pub fn json(name: &str) -> Result<&'static str> {
        match name {
            "rig-basic" => Ok(include_str!("../fixtures/skeletons/rig-basic.json")),
            "rig-hero" => Ok(include_str!("../fixtures/skeletons/rig-hero.json")),
            other => Err(anyhow!("unknown skeleton fixture '{other}'")),
        }
    }

    /// Parsed skeleton for a named fixture.
    pub fn skeleton(name: &str) -> Result<Skeleton> {
        let raw = json(name)?;
        serde_json::from_str(raw).map_err(|e| anyhow!("parse skeleton fixture '{name}': {e}"))
    }
}

/// Fake [`AnimationDriver`] that owns a skeleton snapshot and records every
/// `play()` call through a shared counter, so tests can assert the
/// exactly-once mount property from outside the component that boxes the
/// driver.
pub struct ScriptedDriver {
    skeleton: Skeleton,
    plays: Arc<AtomicU32>,
}

impl ScriptedDriver {
    pub fn new(skeleton: Skeleton) -> Self {
        Self {
            skeleton,
            plays: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Load a named fixture into a fresh driver.
    pub fn from_fixture(name: &str) -> Result<Self> {
        Ok(Self::new(skeletons::skeleton(name)?))
    }

    /// Counter handle that stays readable after the driver is boxed.
    pub fn play_counter(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.plays)
    }
}

impl AnimationDriver for ScriptedDriver {
    fn play(&mut self) {
        self.plays.fetch_add(1, Ordering::SeqCst);
    }

    fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    fn skeleton_mut(&mut self) -> &mut Skeleton {
        &mut self.skeleton
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_parse() {
        let basic = skeletons::skeleton("rig-basic").unwrap();
        assert_eq!(basic.find_bone("arm").unwrap().rotation, 45.0);
        let hero = skeletons::skeleton("rig-hero").unwrap();
        assert_eq!(hero.find_bone("gun").unwrap().scale_x, -1.0);
    }

    #[test]
    fn unknown_fixture_errors() {
        assert!(skeletons::json("rig-missing").is_err());
    }

    #[test]
    fn scripted_driver_counts_plays() {
        let mut driver = ScriptedDriver::from_fixture("rig-basic").unwrap();
        let plays = driver.play_counter();
        assert_eq!(plays.load(Ordering::SeqCst), 0);
        driver.play();
        driver.play();
        assert_eq!(plays.load(Ordering::SeqCst), 2);
    }
}
