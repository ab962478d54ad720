use bevy::prelude::*;
use bevy_bonelink::{AnimatedElement, BonelinkPlugin, Mounted};
use bonelink_test_fixtures::ScriptedDriver;

#[test]
fn plugin_builds_and_ticks() {
    let mut app = App::new();
    // it should register its systems without requiring render plugins
    app.add_plugins(MinimalPlugins).add_plugins(BonelinkPlugin);

    app.update();
    app.update();
}

/// it should tag a spawned animated element as mounted after one pass
#[test]
fn animated_element_is_mounted_after_one_pass() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(BonelinkPlugin);

    let driver = ScriptedDriver::from_fixture("rig-basic").expect("load rig-basic fixture");
    let element = app.world_mut().spawn(AnimatedElement::new(driver)).id();
    assert!(app.world().get::<Mounted>(element).is_none());

    app.update();

    assert!(app.world().get::<Mounted>(element).is_some());
}
